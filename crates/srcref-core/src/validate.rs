//! Public entry point: force a raw reference into a supported, canonical URL.

use crate::canonical::downloadable_url_with;
use crate::convention::{self, PathConvention};
use crate::error::SourceError;
use crate::registry::SchemeRegistry;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;

/// raw → canonical → validated.
const MAX_PASSES: usize = 2;

static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^[:punct:]]+://").expect("scheme prefix pattern is valid")
});

/// True if `s` starts (on some line) with a punctuation-free token followed by `://`.
pub fn looks_like_url(s: &str) -> bool {
    SCHEME_PREFIX.is_match(s)
}

/// Validates `original` using the host platform's path convention.
pub fn validated_url(registry: &SchemeRegistry, original: &str) -> Result<String, SourceError> {
    validated_url_with(registry, convention::native(), original)
}

/// Turns `original` into a canonical URL whose scheme is in `registry`.
///
/// Inputs that do not already look like `scheme://...` go through the
/// canonicalizer first. The result is the URL's standard serialization, so
/// even an input that was already URL-shaped may come back normalized.
pub fn validated_url_with(
    registry: &SchemeRegistry,
    conv: &dyn PathConvention,
    original: &str,
) -> Result<String, SourceError> {
    let mut candidate = Cow::Borrowed(original);

    for _ in 0..MAX_PASSES {
        if !looks_like_url(&candidate) {
            candidate = Cow::Owned(downloadable_url_with(conv, &candidate)?);
            continue;
        }

        let parsed = Url::parse(&candidate).map_err(|source| SourceError::Parse {
            input: candidate.to_string(),
            source,
        })?;

        if !registry.supports_url(Some(&parsed)) {
            return Err(SourceError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
                url: parsed.to_string(),
            });
        }

        return Ok(parsed.to_string());
    }

    Err(SourceError::NotUrlShaped(candidate.into_owned()))
}
