//! Local path → remote path.

/// Replaces `local_root` with `remote_root` wherever it occurs in `path`.
///
/// Pure string substitution with no normalization. When `local_root` does
/// not occur the result is `path` unchanged.
pub fn project(path: &str, local_root: &str, remote_root: &str) -> String {
    path.replace(local_root, remote_root)
}

/// Whether projecting `path` would actually substitute anything.
pub fn contains_root(path: &str, local_root: &str) -> bool {
    path.contains(local_root)
}
