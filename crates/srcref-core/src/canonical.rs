//! Path classification and canonicalization.
//!
//! Turns any raw source reference (relative or absolute path, UNC share,
//! `file:` URL, or a URL with a host) into one scheme-qualified URL string:
//!
//! - `\\server\share\x.iso` → `smb://server/share/x.iso`
//! - `http://example.com/x.iso` → unchanged
//! - an existing path → `file:///<absolute, symlink-resolved path>`
//! - a missing absolute path → `file:///<path as given>`
//! - a missing relative path → `file://./<cleaned path>`
//!
//! Running the canonicalizer on its own output returns the same string.

use crate::convention::{self, PathConvention};
use crate::error::SourceError;
use crate::pathclean;
use crate::percent::{encode_path, percent_decode};
use std::fs;
use std::path::{self, PathBuf};
use url::Url;

/// What a raw reference turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// UNC share, already promoted to an `smb://` URL.
    Unc(String),
    /// URL with a scheme and a host; passed through untouched.
    Url(String),
    /// Filesystem path. `original` is the slash-form path before the stray
    /// root was dropped, `candidate` is what gets looked up on disk.
    Path { original: String, candidate: String },
}

/// Classifies `raw` under the given path convention.
pub fn classify(conv: &dyn PathConvention, raw: &str) -> Classified {
    if let Some(rest) = raw.strip_prefix(r"\\") {
        if !rest.is_empty() && !rest.starts_with('?') {
            return Classified::Unc(format!("smb://{}", rest.replace('\\', "/")));
        }
    }

    let slashed = conv.to_slash(raw);

    let path = match Url::parse(&slashed) {
        Ok(u) if u.host_str().is_some_and(|h| !h.is_empty()) => {
            return Classified::Url(slashed);
        }
        Ok(u) if u.scheme().eq_ignore_ascii_case("file") => percent_decode(u.path()),
        _ => slashed,
    };

    let candidate = conv.strip_stray_root(&path).to_string();
    Classified::Path {
        original: path,
        candidate,
    }
}

/// Canonicalizes `original` using the host platform's path convention.
pub fn downloadable_url(original: &str) -> Result<String, SourceError> {
    downloadable_url_with(convention::native(), original)
}

/// Canonicalizes `original` into a URL string.
///
/// Fails only when a path that exists on disk cannot be made absolute or its
/// symlinks cannot be resolved. An empty input is a missing relative path and
/// yields `file://./.`.
pub fn downloadable_url_with(
    conv: &dyn PathConvention,
    original: &str,
) -> Result<String, SourceError> {
    let (original, candidate) = match classify(conv, original) {
        Classified::Unc(url) => {
            tracing::debug!(%url, "promoted unc path");
            return Ok(url);
        }
        Classified::Url(url) => {
            tracing::debug!(%url, "passing url through");
            return Ok(url);
        }
        Classified::Path {
            original,
            candidate,
        } => (original, candidate),
    };

    if fs::metadata(&candidate).is_ok() {
        let native = PathBuf::from(conv.from_slash(&candidate));
        let abs = path::absolute(&native)
            .map_err(|e| SourceError::filesystem("absolute", &native, e))?;
        let real =
            dunce::canonicalize(&abs).map_err(|e| SourceError::filesystem("resolve", &abs, e))?;
        return Ok(resolved_url(conv, &real.to_string_lossy()));
    }

    if original.starts_with('/') {
        tracing::debug!(path = %candidate, "absolute path not on disk");
        return Ok(absolute_file_url(&candidate));
    }

    let cleaned = pathclean::clean(&candidate);
    tracing::debug!(path = %cleaned, "relative path not on disk");
    Ok(format!("file://./{}", encode_path(&cleaned)))
}

/// URL for a fully resolved native path. Shares stay shares.
fn resolved_url(conv: &dyn PathConvention, real: &str) -> String {
    let slashed = conv.to_slash(real);
    if let Some(share) = conv.unc_share(&slashed) {
        let share = pathclean::clean(share);
        tracing::debug!(%share, convention = conv.name(), "resolved path is on a share");
        return format!("smb://{share}");
    }

    let cleaned = pathclean::clean(&slashed);
    tracing::debug!(path = %cleaned, convention = conv.name(), "resolved existing path");
    absolute_file_url(&cleaned)
}

fn absolute_file_url(path: &str) -> String {
    format!("file:///{}", encode_path(path.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::{Posix, Windows};
    use std::fs::File;

    fn slash_url(p: &std::path::Path) -> String {
        let real = dunce::canonicalize(p).unwrap();
        let s = real.to_string_lossy().replace('\\', "/");
        format!("file:///{}", s.trim_start_matches('/'))
    }

    #[test]
    fn unc_becomes_smb() {
        assert_eq!(
            downloadable_url(r"\\server\share\file.iso").unwrap(),
            "smb://server/share/file.iso"
        );
        assert_eq!(
            downloadable_url_with(&Windows, r"\\nas\isos\deb.iso").unwrap(),
            "smb://nas/isos/deb.iso"
        );
    }

    #[test]
    fn device_namespace_is_not_unc() {
        match classify(&Windows, r"\\?\C:\x.iso") {
            Classified::Path { .. } => {}
            other => panic!("expected path, got {other:?}"),
        }
        match classify(&Posix, r"\\") {
            Classified::Path { .. } => {}
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn url_with_host_passes_through() {
        for u in [
            "http://example.com/x.iso",
            "https://example.com/a/b.iso?sha=1",
            "smb://server/share/x.iso",
            "file://./nofile.iso",
        ] {
            assert_eq!(downloadable_url(u).unwrap(), u);
        }
    }

    #[test]
    fn windows_backslash_url_is_slashed() {
        assert_eq!(
            downloadable_url_with(&Windows, r"http:\\example.com\x.iso").unwrap(),
            "http://example.com/x.iso"
        );
    }

    #[test]
    fn missing_relative_path() {
        assert_eq!(
            downloadable_url("srcref-no-such-file.iso").unwrap(),
            "file://./srcref-no-such-file.iso"
        );
        assert_eq!(
            downloadable_url("./srcref-missing/../srcref-no-such-file.iso").unwrap(),
            "file://./srcref-no-such-file.iso"
        );
    }

    #[test]
    fn empty_input_is_current_directory_reference() {
        assert_eq!(downloadable_url("").unwrap(), "file://./.");
    }

    #[test]
    fn missing_absolute_path() {
        assert_eq!(
            downloadable_url("/srcref/no/such/file").unwrap(),
            "file:///srcref/no/such/file"
        );
        assert_eq!(
            downloadable_url("file:///srcref/no/such/file").unwrap(),
            "file:///srcref/no/such/file"
        );
    }

    #[test]
    fn windows_stray_root_before_drive() {
        // Missing on this host, so the drive path is kept verbatim.
        assert_eq!(
            downloadable_url_with(&Windows, "file:///Q:/srcref/x.iso").unwrap(),
            "file:///Q:/srcref/x.iso"
        );
        match classify(&Windows, "/Q:/srcref/x.iso") {
            Classified::Path {
                original,
                candidate,
            } => {
                assert_eq!(original, "/Q:/srcref/x.iso");
                assert_eq!(candidate, "Q:/srcref/x.iso");
            }
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn file_url_path_is_percent_decoded() {
        match classify(&Posix, "file:///srv/a%20b.iso") {
            Classified::Path { candidate, .. } => assert_eq!(candidate, "/srv/a b.iso"),
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn existing_file_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("disk.iso");
        File::create(&file).unwrap();

        let url = downloadable_url(file.to_str().unwrap()).unwrap();
        assert_eq!(url, slash_url(&file));
        assert!(url.starts_with("file:///"));
        assert!(!url.starts_with("file:////"));
    }

    #[test]
    fn existing_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("disk.iso");
        File::create(&file).unwrap();

        let first = downloadable_url(file.to_str().unwrap()).unwrap();
        let second = downloadable_url(&first).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.iso");
        File::create(&target).unwrap();
        let link = dir.path().join("link.iso");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let url = downloadable_url(link.to_str().unwrap()).unwrap();
        assert_eq!(url, slash_url(&target));
        assert!(url.ends_with("/real.iso"));
    }

    #[cfg(unix)]
    #[test]
    fn existing_path_with_dot_segments_is_cleaned() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let file = dir.path().join("disk.iso");
        File::create(&file).unwrap();

        let messy = format!("{}/sub/../disk.iso", dir.path().display());
        assert_eq!(downloadable_url(&messy).unwrap(), slash_url(&file));
    }

    #[test]
    fn resolved_windows_share_stays_a_share() {
        assert_eq!(
            resolved_url(&Windows, r"\\server\share\isos\x.iso"),
            "smb://server/share/isos/x.iso"
        );
        assert_eq!(
            resolved_url(&Windows, r"\\?\UNC\server\share\x.iso"),
            "smb://server/share/x.iso"
        );
        assert_eq!(resolved_url(&Windows, r"C:\images\x.iso"), "file:///C:/images/x.iso");
        assert_eq!(resolved_url(&Posix, "//srv/x.iso"), "file:///srv/x.iso");
    }

    #[test]
    fn delimiters_in_paths_are_escaped() {
        assert_eq!(
            downloadable_url_with(&Posix, "/srcref/no/a#b?c%41.iso").unwrap(),
            "file:///srcref/no/a%23b%3Fc%2541.iso"
        );
        assert_eq!(
            downloadable_url_with(&Posix, "srcref-missing#1.iso").unwrap(),
            "file://./srcref-missing%231.iso"
        );
    }

    #[test]
    fn existing_files_with_delimiters_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut names = vec!["a#b.iso", "a%41.iso", "100%.iso"];
        if cfg!(unix) {
            names.push("a?b.iso");
        }
        for name in names {
            let file = dir.path().join(name);
            File::create(&file).unwrap();

            let first = downloadable_url(file.to_str().unwrap()).unwrap();
            let second = downloadable_url(&first).unwrap();
            assert_eq!(first, second, "not idempotent for {name}");
            assert!(!first.contains('#') && !first.contains('?'), "{first}");
            assert!(crate::probe::file_exists_locally(&first), "{first} not found");
        }
    }

    /// Posix, except native paths point somewhere that does not exist.
    struct MovedAway;

    impl PathConvention for MovedAway {
        fn name(&self) -> &'static str {
            "moved-away"
        }

        fn to_slash(&self, path: &str) -> String {
            Posix.to_slash(path)
        }

        fn from_slash(&self, _path: &str) -> String {
            "/srcref/moved/away/disk.iso".to_string()
        }

        fn strip_stray_root<'a>(&self, path: &'a str) -> &'a str {
            Posix.strip_stray_root(path)
        }

        fn local_file_path<'a>(&self, url_path: &'a str) -> &'a str {
            Posix.local_file_path(url_path)
        }

        fn unc_share<'a>(&self, slashed: &'a str) -> Option<&'a str> {
            Posix.unc_share(slashed)
        }
    }

    #[test]
    fn resolve_failure_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("disk.iso");
        File::create(&file).unwrap();

        match downloadable_url_with(&MovedAway, file.to_str().unwrap()) {
            Err(SourceError::Filesystem { op, path, source }) => {
                assert_eq!(op, "resolve");
                assert!(path.ends_with("disk.iso"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected filesystem error, got {other:?}"),
        }
    }
}
