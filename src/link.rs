// src/link.rs
//! Outbound affiliate links.
//!
//! Two input shapes:
//! - an id, which becomes `https://<host>/dp/<id>?tag=<tag>`;
//! - a full http(s) URL, whose query gets `tag` set while every other
//!   parameter is kept byte-for-byte (order, duplicates and blank values
//!   included). The rest of the URL is not re-serialized.
//!
//! Tag values are form-encoded, same as the search URL's values.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::{Url, form_urlencoded};

use crate::config::consts::{SEARCH_SORT, TAG_PARAM};
use crate::config::{Marketplace, SearchOptions, TrackingTag};
use crate::error::{ShortlistError, ShortlistResult};
use crate::normalize::ProductRecord;

/// RFC 3986 unreserved characters stay literal in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkMode {
    /// `source` is a product id.
    Id,
    /// `source` is an absolute URL.
    FullUrl,
}

/// Build a tagged link from either an id or a full URL.
pub fn build_link(
    source: &str,
    tag: &TrackingTag,
    mode: LinkMode,
    marketplace: &Marketplace,
) -> ShortlistResult<String> {
    match mode {
        LinkMode::Id => Ok(dp_url(source, tag, marketplace)),
        LinkMode::FullUrl => tag_url(source, tag),
    }
}

/// Product detail page link for `id`.
pub fn dp_url(id: &str, tag: &TrackingTag, marketplace: &Marketplace) -> String {
    format!(
        "{}/dp/{}?{}",
        marketplace.base_url(),
        utf8_percent_encode(id.trim(), PATH_SEGMENT),
        tag_pair(tag)
    )
}

/// Set `tag` on an existing http(s) URL. Idempotent.
///
/// The URL is parsed only to validate it. Everything outside the query is
/// copied from `source` as written (scheme and host case, port, path, fragment).
pub fn tag_url(source: &str, tag: &TrackingTag) -> ShortlistResult<String> {
    let trimmed = source.trim();
    let url = Url::parse(trimmed).map_err(|e| ShortlistError::InvalidUrl {
        url: s!(source),
        source: e,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ShortlistError::UnsupportedScheme {
            url: s!(source),
            scheme: s!(url.scheme()),
        });
    }

    let (rest, fragment) = match trimmed.split_once('#') {
        Some((rest, frag)) => (rest, Some(frag)),
        None => (trimmed, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };

    let mut out = format!("{base}?{}", merge_tag(query, tag));
    if let Some(frag) = fragment {
        out.push('#');
        out.push_str(frag);
    }
    Ok(out)
}

/// Link for one normalized product: its own URL when it is a valid http(s)
/// URL, otherwise the id-based link.
pub fn link_for(product: &ProductRecord, tag: &TrackingTag, marketplace: &Marketplace) -> String {
    let Some(source) = product.source() else {
        return dp_url(&product.id, tag, marketplace);
    };
    match tag_url(source, tag) {
        Ok(link) => link,
        Err(e) => {
            logw!("link: {} falls back to id link ({e})", product.id);
            dp_url(&product.id, tag, marketplace)
        }
    }
}

/// Marketplace search filtered to `max_price_cents` and sorted by ascending price.
pub fn search_url(search: &SearchOptions, tag: &TrackingTag, marketplace: &Marketplace) -> String {
    format!(
        "{}/s?k={}&rh={}&s={}&{}",
        marketplace.base_url(),
        form_encode(&search.keywords),
        form_encode(&format!("p_36:-{}", search.max_price_cents)),
        SEARCH_SORT,
        tag_pair(tag)
    )
}

/* ---------------- Query handling ---------------- */

fn form_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn tag_pair(tag: &TrackingTag) -> String {
    format!("{}={}", TAG_PARAM, form_encode(tag.as_str()))
}

/// Decoded parameter name of one raw `name[=value]` segment.
fn param_name(segment: &str) -> Cow<'_, str> {
    let raw = segment.split_once('=').map_or(segment, |(name, _)| name);
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(name, _)| Cow::Owned(name.into_owned()))
        .unwrap_or(Cow::Borrowed(raw))
}

/// Replace the first `tag` parameter in place (dropping any repeats) or append one.
/// Other segments are copied through untouched; empty segments (`a&&b`) are dropped.
fn merge_tag(query: Option<&str>, tag: &TrackingTag) -> String {
    let pair = tag_pair(tag);
    let mut out: Vec<&str> = Vec::new();
    let mut placed = false;

    for segment in query.unwrap_or_default().split('&') {
        if segment.is_empty() {
            continue;
        }
        if param_name(segment) == TAG_PARAM {
            if !placed {
                out.push(&pair);
                placed = true;
            }
            continue;
        }
        out.push(segment);
    }
    if !placed {
        out.push(&pair);
    }
    out.join("&")
}
