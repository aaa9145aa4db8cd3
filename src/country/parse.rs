//! Parsing of multi-valued country cells.
//!
//! Never fails: anything unrecognisable is treated as one trimmed name.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::iso;
use crate::record::{literal, FieldValue};

/// "Kenya (KEN)": a name carrying its own code, as GDACS writes them.
static EMBEDDED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.*?)\s*\((?P<code>[A-Za-z]{3})\)\s*$").expect("valid embedded code regex")
});

const DELIMITERS: [char; 2] = [',', ';'];

/// One country name parsed out of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryName {
    pub name: String,
    /// Valid ISO3 code written next to the name, if any
    pub embedded_code: Option<String>,
}

/// Parse a country field into an ordered, deduplicated list of names.
pub fn parse_countries(value: &FieldValue) -> Vec<CountryName> {
    let raw_names: Vec<String> = match value {
        FieldValue::Array(_) => value.values().iter().map(|s| s.render()).collect(),
        FieldValue::Scalar(s) => split_cell(&s.render()),
    };

    let mut seen = HashSet::new();
    raw_names
        .iter()
        .map(|raw| extract_code(raw.trim()))
        .filter(|c| !c.name.is_empty() && !literal::is_null_token(&c.name))
        .filter(|c| seen.insert(c.name.to_lowercase()))
        .collect()
}

/// Parse a country-code field into codes, without resolving anything.
pub fn parse_codes(value: &FieldValue) -> Vec<String> {
    match value {
        FieldValue::Array(_) => value.values().iter().map(|s| s.render().trim().to_string()).collect(),
        FieldValue::Scalar(s) => split_cell(&s.render()),
    }
}

fn split_cell(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if literal::is_null_token(raw) {
        return Vec::new();
    }
    if literal::looks_like_list(raw) {
        return literal::parse_list(raw);
    }
    rejoin_fragments(literal::split_loose(raw, &DELIMITERS))
}

/// Undo splits inside names such as "Korea, Republic of": two adjacent
/// fragments are joined when the joined form resolves exactly and the
/// trailing fragment does not resolve on its own.
fn rejoin_fragments(fragments: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if let Some(last) = out.last_mut() {
            let joined = format!("{}, {}", last, fragment);
            if iso::resolve(&joined).is_exact() && !iso::resolve(&fragment).is_exact() {
                *last = joined;
                continue;
            }
        }
        out.push(fragment);
    }
    out
}

fn extract_code(raw: &str) -> CountryName {
    if let Some(caps) = EMBEDDED_CODE.captures(raw) {
        let code = caps["code"].to_uppercase();
        if iso::is_valid_alpha3(&code) {
            return CountryName {
                name: caps["name"].trim().to_string(),
                embedded_code: Some(code),
            };
        }
    }
    CountryName {
        name: raw.to_string(),
        embedded_code: None,
    }
}
