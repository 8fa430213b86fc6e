//! Log sanitization utilities
//!
//! Keeps zone contents, DNSSEC keys and EdgeGrid tokens from being fully
//! exposed in debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const VISIBLE_SECRET_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the
/// first `TRUNCATE_LIMIT` bytes with a suffix giving the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential token, keeping a short prefix so log lines stay correlatable.
pub fn mask_secret(secret: &str) -> String {
    let visible = secret
        .char_indices()
        .nth(VISIBLE_SECRET_PREFIX)
        .map_or(secret.len(), |(i, _)| i);
    if visible == secret.len() {
        "****".to_string()
    } else {
        format!("{}****", &secret[..visible])
    }
}
