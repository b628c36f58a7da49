//! Best-effort check whether a canonical `file:` URL points at something on disk.
//!
//! "Not a file URL", "could not stat" and "absent" all come back as `false`.

use crate::convention::{self, PathConvention};
use crate::percent::percent_decode;
use std::fs;
use url::Url;

/// Probes `original` using the host platform's path convention.
pub fn file_exists_locally(original: &str) -> bool {
    file_exists_locally_with(convention::native(), original)
}

/// True iff `original` is a `file:` URL whose path can be stat'ed right now.
pub fn file_exists_locally_with(conv: &dyn PathConvention, original: &str) -> bool {
    let Ok(url) = Url::parse(original) else {
        return false;
    };
    if url.scheme() != "file" {
        return false;
    }

    let decoded = percent_decode(url.path());
    let path = conv.local_file_path(&decoded);
    fs::metadata(path).is_ok()
}
