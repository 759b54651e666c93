//! Index command: print rows of a tab-separated index.

use anyhow::Result;
use ccfetch_core::index::TsvIndexReader;
use std::path::Path;

pub fn run_index(file: &Path, limit: Option<usize>) -> Result<()> {
    let reader = TsvIndexReader::open(file)?;
    for row in reader.take(limit.unwrap_or(usize::MAX)) {
        println!("{}", row?.join(" | "));
    }
    Ok(())
}
