// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}

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

/// Flatten a URL into a filename the page cache can use.
/// Runs of non-alphanumeric characters collapse to a single underscore.
pub fn sanitize_cache_filename(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut last_us = false;
    for ch in url.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("page") } else { out }
}
