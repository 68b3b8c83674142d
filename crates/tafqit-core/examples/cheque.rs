//! Write cheque amounts in dinars using the legal frame
//!
//! Run with: cargo run --example cheque

use anyhow::Result;
use tafqit_core::{tafqit, Subject, TafqitOptions};

fn main() -> Result<()> {
    let options = TafqitOptions {
        legal: true,
        subject: Some(Subject::from(["دينار", "ديناران", "دنانير", "دينارًا"])),
        ..Default::default()
    };

    for amount in [1u64, 2, 75, 100, 5_000, 1_250_000] {
        let words = tafqit(amount, &options)?;
        println!("{amount:>9}  {words}");
    }
    Ok(())
}
