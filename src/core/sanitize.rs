// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop thousands separators: "1,234,567" → "1234567".
/// Applied to every body cell, text or not.
pub fn strip_thousands(s: &str) -> String {
    s.chars().filter(|&c| c != ',').collect()
}
