//! Lexical slash-path helpers for import paths.
//!
//! Import paths always use `/`, whatever the host platform, so these work on
//! plain strings rather than `std::path` and never touch the filesystem.

/// Whether an import path is written relative to the importing file.
pub fn is_relative(import_path: &str) -> bool {
    import_path.starts_with("./") || import_path.starts_with("../")
}

/// Join the non-empty elements with `/` and clean the result.
/// Returns an empty string when every element is empty.
pub fn join(elems: &[&str]) -> String {
    let parts: Vec<&str> = elems.iter().copied().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join("/"))
}

/// Shortest lexically equivalent form of `path`.
///
/// Repeated slashes collapse, `.` segments disappear and `..` removes the
/// segment before it. A rooted path stops ascending at `/`; an unrooted one
/// keeps the leading `..` segments it cannot cancel. The empty path cleans to
/// `.`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
