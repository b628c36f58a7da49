//! `srcref canonicalize` – print the canonical URL for a reference.

use anyhow::{Context, Result};
use srcref_core::downloadable_url;

pub fn run_canonicalize(reference: &str) -> Result<()> {
    let url =
        downloadable_url(reference).with_context(|| format!("canonicalize {reference:?}"))?;
    println!("{url}");
    Ok(())
}
