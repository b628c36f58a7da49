//! Error type shared by the canonicalizer and the validator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning a source reference into a canonical URL.
///
/// The existence probe never produces one of these; it folds every failure
/// into `false`.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input was expected to be a URL but does not parse as one.
    #[error("invalid url {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Absolute-path or symlink resolution failed for a path that exists.
    #[error("{op} {}: {source}", path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The URL parsed but its scheme is not in the registry.
    #[error("unsupported protocol scheme {scheme:?} in {url}")]
    UnsupportedScheme { scheme: String, url: String },

    /// Canonicalization produced something that still does not look like a URL.
    #[error("{0:?} did not canonicalize to a url")]
    NotUrlShaped(String),
}

impl SourceError {
    pub(crate) fn filesystem(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SourceError::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }
}
