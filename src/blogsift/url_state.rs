//! # URL State
//!
//! The filter state is mirrored into the address bar so filtered views can be
//! shared and bookmarked:
//!
//! ```text
//! /blog/?search=docker&category=Kubernetes&page=2
//! ```
//!
//! Only non-default values are written: an empty term, an empty category and
//! page 1 are all omitted. Reading is lenient: unknown parameters are
//! ignored, and a missing or unparsable `page` falls back to 1.
//!
//! The session replaces the current history entry on every change rather
//! than pushing a new one, so the back button leaves the page instead of
//! stepping through earlier filters.

use crate::filter::normalize_term;
use serde::Serialize;

pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";
pub const PAGE_PARAM: &str = "page";
pub const RECOVERY_PARAM: &str = "recovery";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search_term: String,
    pub selected_category: String,
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: String::new(),
            current_page: 1,
        }
    }
}

impl FilterState {
    pub fn is_filtering(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_category.is_empty()
    }
}

/// Splits a query string into decoded key/value pairs, in order.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// First value for `key`, if present.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

pub fn restore_from_query(query: &str) -> FilterState {
    let pairs = parse_query(query);
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    FilterState {
        search_term: first(SEARCH_PARAM).map(normalize_term).unwrap_or_default(),
        selected_category: first(CATEGORY_PARAM).unwrap_or_default().to_string(),
        current_page: first(PAGE_PARAM).and_then(parse_page).unwrap_or(1),
    }
}

/// Leading-digit integer parse. Zero, negatives and garbage yield `None`.
fn parse_page(raw: &str) -> Option<usize> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<usize>().ok().filter(|page| *page >= 1)
}

pub fn to_query(state: &FilterState) -> String {
    let mut params = Vec::new();
    if !state.search_term.is_empty() {
        params.push(format!(
            "{}={}",
            SEARCH_PARAM,
            encode_component(&state.search_term)
        ));
    }
    if !state.selected_category.is_empty() {
        params.push(format!(
            "{}={}",
            CATEGORY_PARAM,
            encode_component(&state.selected_category)
        ));
    }
    if state.current_page > 1 {
        params.push(format!("{}={}", PAGE_PARAM, state.current_page));
    }
    params.join("&")
}

/// `path` alone when every value is default, `path?query` otherwise.
pub fn to_url(path: &str, state: &FilterState) -> String {
    let query = to_query(state);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

fn encode_component(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(spaced)
}
