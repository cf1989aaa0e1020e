//! Translate command implementation

use anyhow::Result;
use nf_core::{translate, ErrorShape};

use crate::cli::TranslateArgs;

/// Execute the translate command
pub async fn execute(args: &TranslateArgs) -> Result<()> {
    if args.explain {
        match ErrorShape::parse(&args.message) {
            Some(shape) => println!("shape: {}\n{:#?}", shape.name(), shape),
            None => println!("shape: none (passed through)"),
        }
    }

    println!("{}", translate(&args.message));
    Ok(())
}
