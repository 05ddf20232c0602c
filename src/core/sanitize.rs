// src/core/sanitize.rs

/// Make a code safe to embed in a file name.
/// Keeps ASCII alphanumerics, `-` and `_`; whitespace runs become one `_`.
/// Falls back to `fallback` when nothing survives.
pub fn sanitize_filename_part(part: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut last_us = false;
    for ch in part.trim().chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
