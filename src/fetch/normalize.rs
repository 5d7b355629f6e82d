// src/fetch/normalize.rs
//
// Review URLs carry a `disabled=` query listing which chart overlays are
// hidden. Whatever the user copied, swap it for the one that hides the
// "tests" and "target" overlays so only the averaged series is rendered.

use url::Url;

use super::FetchError;
use crate::config::consts::{DISABLED_FRAGMENT, DISABLED_PARAM};

pub fn normalize_url(input: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(input.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme(s!(url.scheme())));
    }

    // Rebuilt query, only when a `disabled` pair was present.
    let rebuilt = url.query().and_then(|query| {
        let mut found = false;
        let mut kept: Vec<&str> = Vec::new();
        for pair in query.split('&') {
            let key = pair.split('=').next().unwrap_or("");
            if key == DISABLED_PARAM {
                found = true;
            } else if !pair.is_empty() {
                kept.push(pair);
            }
        }
        if !found {
            return None;
        }
        kept.push(DISABLED_FRAGMENT);
        Some(kept.join("&"))
    });

    if let Some(q) = rebuilt {
        // set_query leaves ':' and ',' alone, so the fragment stays literal
        url.set_query(Some(&q));
    }
    Ok(url)
}
