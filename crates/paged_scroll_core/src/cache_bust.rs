//! Cache-busting query parameter for static asset URLs.

use url::Url;

use crate::constants::dom::CACHE_BUST_PARAM;
use crate::error::{PagerError, Result};

/// Resolve `raw` against `base` and set its `v` parameter to `stamp`.
///
/// An existing `v` is overwritten in place (later duplicates are dropped),
/// otherwise `v` is appended. Other parameters and the fragment are kept.
/// Only `http`/`https` URLs are rewritten; `data:`, `blob:` and the like are
/// returned resolved but otherwise untouched.
pub fn bust_url(raw: &str, base: &str, stamp: u64) -> Result<String> {
    let base = Url::parse(base).map_err(|source| PagerError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    let mut url = base.join(raw).map_err(|source| PagerError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Ok(url.into());
    }

    let stamp = stamp.to_string();
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if key == CACHE_BUST_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), stamp.clone()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !replaced {
        pairs.push((CACHE_BUST_PARAM.to_string(), stamp));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
    Ok(url.into())
}
