/// Splits an entry path into its `/`-separated segments.
///
/// Leading slashes are stripped and empty segments collapse wherever they
/// occur, so `/a//b.txt`, `a/b.txt/` and `a/b.txt` are the same location.
/// Returns `None` only when nothing is left: an empty path or one made only
/// of slashes. A returned vector always has at least one segment.
pub fn normalize_segments(path: &str) -> Option<Vec<&str>> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split('/').filter(|s| !s.is_empty()).collect())
}

/// Normalized form of `path`, or `None` for the degenerate cases above.
pub fn normalize_path(path: &str) -> Option<String> {
    normalize_segments(path).map(|segments| segments.join("/"))
}
