//! `srcref validate` – canonicalize and check the scheme against the registry.

use anyhow::{Context, Result};
use srcref_core::{validated_url, SchemeRegistry};

pub fn run_validate(registry: &SchemeRegistry, reference: &str) -> Result<()> {
    let url = validated_url(registry, reference)
        .with_context(|| format!("validate {reference:?}"))?;
    tracing::info!(%url, "validated source reference");
    println!("{url}");
    Ok(())
}
