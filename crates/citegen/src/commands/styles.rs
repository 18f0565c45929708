//! `citegen styles`

use anyhow::Result;
use citegen_core::CitationStyle;

pub fn execute() -> Result<()> {
    for style in CitationStyle::ALL {
        println!("{:<8} {}", style.tag(), style.display_name());
    }
    Ok(())
}
