// src/specs/index.rs
//! Scraping *spec* for the bulletin index page.
//!
//! Every daily bulletin is linked from one page. Links of interest carry the
//! marker (`covid_19`) in their target; the date is the 10-character value
//! following `date=` at the start of the query string, e.g.
//! `covid_19_dailybulletins_view.aspx?date=01-07-2020`.

use std::collections::BTreeSet;

use url::Url;

use crate::config::consts::{DATE_QUERY_OFFSET, DATE_TOKEN_LEN};
use crate::core::html::link_targets;
use crate::date::BulletinDate;

/// Bulletin dates linked from `doc`. Links are resolved against `base_url`
/// so relative and absolute targets read the same. Tokens that are not a
/// zero-padded `dd-mm-yyyy` date are skipped, since the bulletin URL is
/// rebuilt from the date.
pub fn parse_dates(doc: &str, base_url: &str, marker: &str) -> BTreeSet<BulletinDate> {
    let base = Url::parse(base_url).ok();
    let mut dates = BTreeSet::new();

    for href in link_targets(doc) {
        if !href.contains(marker) {
            continue;
        }
        let Some(token) = date_token(base.as_ref(), &href) else {
            continue;
        };
        match BulletinDate::parse_exact(&token) {
            Some(date) => {
                dates.insert(date);
            }
            None => tracing::warn!(%href, %token, "bulletin link without a usable date"),
        }
    }
    dates
}

fn date_token(base: Option<&Url>, href: &str) -> Option<String> {
    let query = match base {
        Some(base) => base.join(href).ok()?.query()?.to_string(),
        None => href.split_once('?')?.1.to_string(),
    };
    query
        .get(DATE_QUERY_OFFSET..DATE_QUERY_OFFSET + DATE_TOKEN_LEN)
        .map(str::to_string)
}
