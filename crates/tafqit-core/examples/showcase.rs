//! Spell a spread of numbers with the default options
//!
//! Run with: cargo run --example showcase

use tafqit_core::{tafqit, TafqitOptions};

fn main() {
    let values: [u64; 12] = [
        0,
        1,
        2,
        11,
        20,
        123,
        999,
        2_022,
        11_000,
        200_000,
        1_001_001,
        123_456_789,
    ];

    let options = TafqitOptions::default();
    for value in values {
        match tafqit(value, &options) {
            Ok(words) => println!("{value:>12}  {words}"),
            Err(err) => println!("{value:>12}  error: {err}"),
        }
    }
}
