//! Lookup key normalization.
//!
//! Every name an agent sends (operation, law, parameter, constant,
//! category) goes through [`normalize_key`] before it is matched, so
//! `"Speed of Light"`, `"speed-of-light"` and `"speed_of_light"` are the
//! same key.

/// Lower-case, trim, and collapse runs of spaces, hyphens and
/// underscores into a single `_`.
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = true;
            continue;
        }
        if pending_sep && !out.is_empty() {
            out.push('_');
        }
        pending_sep = false;
        out.extend(ch.to_lowercase());
    }

    out
}

/// Normalize an optional key, treating blank input as absent.
pub fn normalize_opt(raw: Option<&str>) -> Option<String> {
    raw.map(normalize_key).filter(|k| !k.is_empty())
}
