//! Turning the `app view` selectors into a single lookup.

use mctl_core::error::{CtlError, Result};

use crate::identifier::{Selector, WORD_SEPARATOR};

/// Listing endpoint for applications.
pub const APPLICATION_ENDPOINT: &str = "/api/experimental/application";

/// Page size requested by `--all`, large enough to get everything in one call.
pub const ALL_PAGE_SIZE: u32 = 10000;

/// What to ask the management service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// Fetch one application by ID
    ById(String),
    /// Search by name; `search` is the `%20`-joined term, `name` the exact name to match
    ByName { search: String, name: String },
    /// Fetch every application
    All,
}

impl QueryIntent {
    /// Request path (and query string) relative to the service base URL.
    pub fn request_path(&self) -> String {
        match self {
            QueryIntent::ById(id) => format!("{APPLICATION_ENDPOINT}/{id}"),
            QueryIntent::ByName { search, .. } => format!("{APPLICATION_ENDPOINT}?search={search}"),
            QueryIntent::All => format!("{APPLICATION_ENDPOINT}?page_size={ALL_PAGE_SIZE}"),
        }
    }
}

/// Percent-encode one search word for a query string.
///
/// Spaces inside a word become `%20`, matching the separator between words.
fn encode_word(word: &str) -> String {
    let mut url = reqwest::Url::parse("http://localhost/").expect("static URL is valid");
    url.query_pairs_mut().append_pair("q", word);
    url.query()
        .and_then(|q| q.strip_prefix("q="))
        .unwrap_or_default()
        .replace('+', WORD_SEPARATOR)
}

/// Encoded search term: each argument encoded, joined with `%20`.
pub fn search_term(args: &[String]) -> String {
    args.iter()
        .map(|word| encode_word(word))
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}

/// Pick the lookup for the given positional arguments and `--all` flag.
pub fn plan(args: &[String], selector: &Selector, all: bool) -> Result<QueryIntent> {
    match (args.is_empty(), all) {
        (false, true) => Err(CtlError::ConflictingSelectors),
        (true, false) => Err(CtlError::NoSelectorProvided),
        (true, true) => Ok(QueryIntent::All),
        (false, false) if selector.is_id => Ok(QueryIntent::ById(selector.token.clone())),
        (false, false) => Ok(QueryIntent::ByName {
            search: search_term(args),
            name: args.join(" "),
        }),
    }
}
