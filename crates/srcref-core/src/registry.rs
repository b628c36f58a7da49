//! Set of URL schemes the fetch layer can actually handle.
//!
//! Built once (usually from [`crate::config::SrcrefConfig`]) and shared
//! read-only afterwards. Lookups are case-insensitive; a scheme that is not
//! present is simply unsupported.

use std::collections::BTreeSet;
use url::Url;

/// Schemes registered when no configuration overrides them.
pub const DEFAULT_SCHEMES: &[&str] = &["file", "http", "https", "smb"];

/// Immutable, lowercase set of fetch-capable schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRegistry {
    schemes: BTreeSet<String>,
}

impl SchemeRegistry {
    /// Build a registry from scheme names. Names are lowercased and blanks are skipped.
    pub fn from_schemes<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schemes = schemes
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { schemes }
    }

    /// True if `scheme` is registered, ignoring ASCII case.
    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    /// True iff `url` is present and its scheme is registered.
    pub fn supports_url(&self, url: Option<&Url>) -> bool {
        match url {
            Some(u) => self.contains(u.scheme()),
            None => false,
        }
    }

    /// Registered schemes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::from_schemes(DEFAULT_SCHEMES)
    }
}
