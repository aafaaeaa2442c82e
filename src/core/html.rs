// src/core/html.rs
//
// Case-insensitive tag scanning over raw HTML. No DOM: we slice element
// blocks out of the document and let callers recurse into the inner text.

use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::ScrapeError;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// One located element: the opener's attribute text, the inner markup,
/// and the half-open byte range of the whole block in the parent slice.
#[derive(Debug, Clone, Copy)]
pub struct Tag<'a> {
    pub opener: &'a str,
    pub inner: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Visible text of an element: entities resolved, tags stripped,
/// whitespace collapsed.
pub fn text(t: &Tag) -> String {
    strip_tags(normalize_entities(t.inner))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

// Next `<name` opener at or after `from`, on a real tag boundary so
// "<a" doesn't match "<abbr".
fn find_opener(lc: &str, name_lc: &str, from: usize) -> Option<usize> {
    let pat = format!("<{name_lc}");
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&pat)? + at;
        match lc.as_bytes().get(start + pat.len()) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(start),
            Some(_) => at = start + pat.len(),
            None => return None,
        }
    }
}

/// Next block of `name` starting at or after `from`. Depth-aware, so
/// same-name descendants (nested `<section>`s) don't truncate the block.
pub fn next_tag_ci<'a>(doc: &'a str, name: &str, from: usize) -> Option<Tag<'a>> {
    let lc = to_lower(doc);
    let name_lc = to_lower(name);
    let close_pat = format!("</{name_lc}");

    let start = find_opener(&lc, &name_lc, from)?;
    let open_end = lc[start..].find('>')? + start + 1;
    let opener = &doc[start + 1..open_end - 1];

    if opener.ends_with('/') {
        return Some(Tag { opener, inner: "", start, end: open_end });
    }

    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_open = find_opener(&lc, &name_lc, pos);
        let next_close = lc.get(pos..)?.find(&close_pat).map(|i| pos + i);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = lc[o..].find('>')? + o + 1;
            }
            (_, Some(c)) => {
                depth -= 1;
                pos = lc[c..].find('>')? + c + 1;
                if depth == 0 {
                    return Some(Tag { opener, inner: &doc[open_end..c], start, end: pos });
                }
            }
            _ => return None,
        }
    }
}

/// Value of `key=...` in an opener's attribute text. Handles double,
/// single, and unquoted values.
pub fn attr_value<'a>(opener: &'a str, key: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(key));
    let mut at = 0usize;
    loop {
        let p = lc.get(at..)?.find(&pat)? + at;
        // attribute names start on a boundary: "href=" must not match "data-href="
        if p > 0 && !lc.as_bytes()[p - 1].is_ascii_whitespace() {
            at = p + pat.len();
            continue;
        }
        let val = &opener[p + pat.len()..];
        return Some(match val.as_bytes().first() {
            Some(b'"') => {
                let body = &val[1..];
                &body[..body.find('"').unwrap_or(body.len())]
            }
            Some(b'\'') => {
                let body = &val[1..];
                &body[..body.find('\'').unwrap_or(body.len())]
            }
            _ => {
                let end = val
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(val.len());
                &val[..end]
            }
        });
    }
}

/// True when every class token in `want` appears in the opener's class list.
pub fn has_class(opener: &str, want: &str) -> bool {
    match attr_value(opener, "class") {
        Some(have) => want
            .split_ascii_whitespace()
            .all(|w| have.split_ascii_whitespace().any(|h| h.eq_ignore_ascii_case(w))),
        None => false,
    }
}

fn opener_matches(opener: &str, key: &str, want: &str) -> bool {
    if key.eq_ignore_ascii_case("class") {
        return has_class(opener, want);
    }
    attr_value(opener, key).map_or(false, |v| v.eq_ignore_ascii_case(want))
}

/// First descendant block of `name` whose opener satisfies every
/// `(attribute, value)` pair. Class filters match on tokens.
pub fn find_tag_ci<'a>(doc: &'a str, name: &str, attrs: &[(&str, &str)]) -> Option<Tag<'a>> {
    let mut pos = 0usize;
    while let Some(t) = next_tag_ci(doc, name, pos) {
        if attrs.iter().all(|(k, v)| opener_matches(t.opener, k, v)) {
            return Some(t);
        }
        // step inside: a nested candidate may match even when this one didn't
        pos = t.start + 1;
    }
    None
}

/// Exactly one structural lookup. The markup assumption is load-bearing;
/// absence is logged and fatal for the page being processed.
pub fn locate<'a>(
    doc: &'a str,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<Tag<'a>, ScrapeError> {
    match find_tag_ci(doc, name, attrs) {
        Some(t) => Ok(t),
        None => {
            let filter = fmt_filter(attrs);
            loge!("tag not found: <{name}> {filter}");
            Err(ScrapeError::TagNotFound { tag: s!(name), filter })
        }
    }
}

fn fmt_filter(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(" ")
}
