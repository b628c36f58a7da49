//! Lexical cleaning of `/`-separated paths. No filesystem access.

/// Returns the shortest path equivalent to `path` by purely lexical processing.
///
/// - Repeated separators collapse to one.
/// - `.` segments are dropped.
/// - `..` removes the preceding segment; at the root it is dropped, in a
///   relative path with nothing left to remove it is kept.
/// - An empty result becomes `.` (or `/` for a rooted path).
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|p| *p != "..") {
                    stack.pop();
                } else if !rooted {
                    stack.push("..");
                }
            }
            p => stack.push(p),
        }
    }

    let joined = stack.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
