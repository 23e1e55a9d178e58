//! Path conventions of the Dropbox API: the root folder is the empty string
//! and every other path starts with a `/`.

/// Normalizes a user provided path to the form expected by the API.
///
/// ```rust
/// use valboks::path::normalize;
///
/// assert_eq!(normalize(""), "");
/// assert_eq!(normalize("."), "");
/// assert_eq!(normalize("/"), "");
/// assert_eq!(normalize("foo"), "/foo");
/// assert_eq!(normalize("/foo"), "/foo");
/// ```
pub fn normalize(path: &str) -> String {
    match path {
        "" | "." | "/" => String::new(),
        other if other.starts_with('/') => other.to_string(),
        other => format!("/{other}"),
    }
}

/// Returns a printable version of a normalized path, the root being displayed as `/`.
pub fn display(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::{display, normalize};

    #[test]
    fn should_map_root_aliases_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("."), "");
        assert_eq!(normalize("/"), "");
    }

    #[test]
    fn should_prefix_relative_paths() {
        assert_eq!(normalize("foo"), "/foo");
        assert_eq!(normalize("foo/bar.txt"), "/foo/bar.txt");
        assert_eq!(normalize("/foo"), "/foo");
    }

    #[test]
    fn should_be_idempotent() {
        for input in ["", ".", "/", "foo", "/foo", "./foo", "foo/", "//foo", "a b/c"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn should_display_root() {
        assert_eq!(display(""), "/");
        assert_eq!(display("/foo"), "/foo");
    }
}
