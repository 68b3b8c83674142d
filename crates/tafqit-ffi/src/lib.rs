//! C ABI bindings for the tafqit engine
//!
//! Every conversion returns a [`TafqitFfiResult`] owning its strings;
//! callers release it through [`tafqit_result_free`]. Panics never cross
//! the boundary.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use tafqit_core::{tafqit, Numeral, Subject, TafqitOptions};

/// Conversion options mirrored for C callers
///
/// Subject form pointers must be either all null (no counted subject) or
/// all set to NUL-terminated UTF-8 strings.
#[repr(C)]
pub struct TafqitFfiOptions {
    pub feminine: bool,
    pub miah: bool,
    pub comma: bool,
    pub split_hundred: bool,
    pub billions: bool,
    pub text_to_follow: bool,
    pub accusative: bool,
    pub legal: bool,
    pub ordinal: bool,
    pub subject_singular: *const c_char,
    pub subject_dual: *const c_char,
    pub subject_plural: *const c_char,
    pub subject_singular_tanween: *const c_char,
}

/// Outcome of a conversion call
///
/// Exactly one of `words` and `error_message` is set on return; both are
/// owned by the result until [`tafqit_result_free`].
#[repr(C)]
pub struct TafqitFfiResult {
    pub success: bool,
    pub words: *mut c_char,
    pub error_message: *mut c_char,
}

fn success_result(words: String) -> TafqitFfiResult {
    TafqitFfiResult {
        success: true,
        words: CString::new(words)
            .map(|s| s.into_raw())
            .unwrap_or(ptr::null_mut()),
        error_message: ptr::null_mut(),
    }
}

fn error_result(message: &str) -> TafqitFfiResult {
    TafqitFfiResult {
        success: false,
        words: ptr::null_mut(),
        error_message: CString::new(message)
            .map(|s| s.into_raw())
            .unwrap_or(ptr::null_mut()),
    }
}

/// Copy a NUL-terminated C string into an owned Rust string
///
/// # Safety
///
/// `ptr` must be non-null and point to a NUL-terminated string.
unsafe fn cstr_to_owned(ptr: *const c_char) -> Result<String, &'static str> {
    CStr::from_ptr(ptr)
        .to_str()
        .map(|s| s.to_string())
        .map_err(|_| "string is not valid UTF-8")
}

/// Build core options from the C mirror
///
/// # Safety
///
/// `options` must be null or point to a valid [`TafqitFfiOptions`] whose
/// non-null subject pointers are NUL-terminated strings.
unsafe fn read_options(options: *const TafqitFfiOptions) -> Result<TafqitOptions, &'static str> {
    if options.is_null() {
        return Ok(TafqitOptions::default());
    }
    let raw = &*options;

    let form_ptrs = [
        raw.subject_singular,
        raw.subject_dual,
        raw.subject_plural,
        raw.subject_singular_tanween,
    ];
    let subject = if form_ptrs.iter().all(|p| p.is_null()) {
        None
    } else if form_ptrs.iter().any(|p| p.is_null()) {
        return Err("subject forms must be provided together or not at all");
    } else {
        let singular = cstr_to_owned(raw.subject_singular)?;
        let dual = cstr_to_owned(raw.subject_dual)?;
        let plural = cstr_to_owned(raw.subject_plural)?;
        let singular_tanween = cstr_to_owned(raw.subject_singular_tanween)?;
        Some(Subject::new(singular, dual, plural, singular_tanween))
    };

    Ok(TafqitOptions {
        feminine: raw.feminine,
        miah: raw.miah,
        comma: raw.comma,
        split_hundred: raw.split_hundred,
        billions: raw.billions,
        text_to_follow: raw.text_to_follow,
        accusative: raw.accusative,
        legal: raw.legal,
        ordinal: raw.ordinal,
        subject,
    })
}

/// Convert a digit string into Arabic words
///
/// # Safety
///
/// `digits` must be a non-null NUL-terminated string. `options` may be
/// null for the defaults; otherwise it must satisfy the requirements on
/// [`TafqitFfiOptions`]. The returned result must be released with
/// [`tafqit_result_free`].
#[no_mangle]
pub unsafe extern "C" fn tafqit_convert(
    digits: *const c_char,
    options: *const TafqitFfiOptions,
) -> TafqitFfiResult {
    if digits.is_null() {
        return error_result("digits pointer is null");
    }
    let input = match cstr_to_owned(digits) {
        Ok(input) => input,
        Err(message) => return error_result(message),
    };
    let options = match read_options(options) {
        Ok(options) => options,
        Err(message) => return error_result(message),
    };

    let outcome = catch_unwind(AssertUnwindSafe(move || {
        tafqit(Numeral::Digits(input), &options)
    }));
    match outcome {
        Ok(Ok(words)) => success_result(words),
        Ok(Err(err)) => error_result(&err.to_string()),
        Err(_) => error_result("internal panic during conversion"),
    }
}

/// Release a result returned by [`tafqit_convert`]
///
/// # Safety
///
/// Must be called at most once per result, with both pointers unmodified
/// since the result was returned.
#[no_mangle]
pub unsafe extern "C" fn tafqit_result_free(result: TafqitFfiResult) {
    if !result.words.is_null() {
        drop(CString::from_raw(result.words));
    }
    if !result.error_message.is_null() {
        drop(CString::from_raw(result.error_message));
    }
}

/// Largest digit count the engine accepts
#[no_mangle]
pub extern "C" fn tafqit_max_digits() -> usize {
    tafqit_core::MAX_DIGITS
}

/// Version of the bindings as a static NUL-terminated string
#[no_mangle]
pub extern "C" fn tafqit_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
