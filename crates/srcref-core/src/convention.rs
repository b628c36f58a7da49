//! Separator and drive-letter conventions of a path family.
//!
//! The canonicalizer and the probe never branch on the host OS directly; they
//! ask a [`PathConvention`]. [`native()`] picks the one matching the running
//! platform, and tests can pass [`Windows`] or [`Posix`] explicitly on any host.

/// Path quirks that differ between POSIX and Windows hosts.
pub trait PathConvention: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Native separators to `/`.
    fn to_slash(&self, path: &str) -> String;

    /// `/` to native separators.
    fn from_slash(&self, path: &str) -> String;

    /// Drops a stray leading `/` that sits in front of a drive-style path
    /// (`/C:/images/x.iso`). Conventions with a `/` root keep the path as is.
    fn strip_stray_root<'a>(&self, path: &'a str) -> &'a str;

    /// Turns the path component of a `file:` URL into a path the host can stat.
    fn local_file_path<'a>(&self, url_path: &'a str) -> &'a str;

    /// `server/share/...` if the slash-form path names a network share.
    fn unc_share<'a>(&self, slashed: &'a str) -> Option<&'a str>;
}

/// `/`-rooted paths, `/` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posix;

/// Drive-letter paths, `\` separators (`/` also accepted).
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows;

impl PathConvention for Posix {
    fn name(&self) -> &'static str {
        "posix"
    }

    fn to_slash(&self, path: &str) -> String {
        path.to_string()
    }

    fn from_slash(&self, path: &str) -> String {
        path.to_string()
    }

    fn strip_stray_root<'a>(&self, path: &'a str) -> &'a str {
        path
    }

    fn local_file_path<'a>(&self, url_path: &'a str) -> &'a str {
        url_path
    }

    // POSIX leaves a leading "//" implementation-defined; treated as "/".
    fn unc_share<'a>(&self, _slashed: &'a str) -> Option<&'a str> {
        None
    }
}

impl PathConvention for Windows {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn to_slash(&self, path: &str) -> String {
        path.replace('\\', "/")
    }

    fn from_slash(&self, path: &str) -> String {
        path.replace('/', "\\")
    }

    fn strip_stray_root<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix('/').unwrap_or(path)
    }

    // file:///C:/x.iso parses to the path "/C:/x.iso".
    fn local_file_path<'a>(&self, url_path: &'a str) -> &'a str {
        url_path.strip_prefix('/').unwrap_or(url_path)
    }

    fn unc_share<'a>(&self, slashed: &'a str) -> Option<&'a str> {
        if let Some(rest) = slashed.strip_prefix("//?/UNC/") {
            return Some(rest);
        }
        slashed
            .strip_prefix("//")
            .filter(|rest| !rest.is_empty() && !rest.starts_with(['/', '?']))
    }
}

static POSIX: Posix = Posix;
static WINDOWS: Windows = Windows;

/// Convention of the platform this binary runs on.
pub fn native() -> &'static dyn PathConvention {
    if cfg!(windows) {
        &WINDOWS
    } else {
        &POSIX
    }
}
