/// Case-insensitive path-prefix test on a segment boundary: `/api` covers
/// `/api` and `/api/dog` but not `/apiary`.  Trailing slashes on the prefix
/// are ignored so configured values like `/api/` behave the same.
pub(crate) fn path_under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }
    if path.len() < prefix.len() {
        return false;
    }
    let (head, rest) = path.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix) && (rest.is_empty() || rest.starts_with('/'))
}
