//! Search-term highlighting (Rust port of the theme's `highlightSearchTerms`)
//!
//! This module holds the decision logic only: deriving the ordered term set
//! from a URL query string, locating case-insensitive literal matches inside
//! a text node's content, and rendering the replacement markup. Applying the
//! markup to the live document is the job of the `dom` adapter layer, which
//! keeps everything here unit-testable without a rendering engine.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::types::CssClass;
use crate::utils::{decode_query_component, escape};

/// Tokens at or below this length carry too little signal and are dropped.
const MIN_TERM_CHARS: usize = 2;

/// Ordered search-term set derived once per page load from the URL query.
///
/// The query value comes from the `q` parameter, falling back to `search`
/// when `q` is absent or empty. The value is lowercased, split on whitespace,
/// and filtered to tokens longer than two characters; order and duplicates
/// are preserved so highlight passes run in query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    /// Derives the term set from a raw query string such as
    /// `"?q=hello+world"`. The leading `?` is optional.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let value = query_param(query, "q")
            .filter(|v| !v.is_empty())
            .or_else(|| query_param(query, "search").filter(|v| !v.is_empty()));

        let Some(value) = value else {
            return Self { terms: Vec::new() };
        };

        let lowered = value.to_lowercase();
        let terms = lowered
            .split_whitespace()
            .filter(|t| t.chars().count() > MIN_TERM_CHARS)
            .map(String::from)
            .collect();
        Self { terms }
    }

    /// True when no usable term was found; highlighting is a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The ordered tokens, longest-lived borrow of the set.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Extracts and decodes the first occurrence of `key` from a query string.
fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_query_component(k) == key)
        .map(|(_, v)| decode_query_component(v))
}

/// Compiled case-insensitive literal matcher for a single search term.
///
/// The term is passed through [`regex::escape`] before compilation, so
/// pattern metacharacters in user input (`c++`, `a.b`) match literally
/// instead of being interpreted as syntax.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Regex,
}

impl TermMatcher {
    /// Compiles a matcher for `term`. Returns `None` for the empty term or
    /// in the unexpected case that the escaped pattern fails to compile;
    /// callers skip such terms rather than fail the page.
    #[must_use]
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .ok()
            .map(|regex| Self { regex })
    }

    /// True when `text` contains at least one occurrence of the term.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Byte ranges of every occurrence of the term in `text`, left to right and
/// non-overlapping. Each range sits on UTF-8 character boundaries.
#[must_use]
pub fn compute_highlight_spans(text: &str, matcher: &TermMatcher) -> Vec<Range<usize>> {
    matcher.regex.find_iter(text).map(|m| m.range()).collect()
}

/// Splices highlight markers around the given spans, escaping every text
/// segment. Spans must be sorted, non-overlapping, and on char boundaries,
/// as produced by [`compute_highlight_spans`].
#[must_use]
pub fn highlight_markup(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 40);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&escape(&text[cursor..span.start]));
        out.push_str("<mark class=\"");
        out.push_str(CssClass::SearchHighlight.as_ref());
        out.push_str("\">");
        out.push_str(&escape(&text[span.start..span.end]));
        out.push_str("</mark>");
        cursor = span.end;
    }
    out.push_str(&escape(&text[cursor..]));
    out
}

/// Full per-node pipeline: returns the replacement markup for `text`, or
/// `None` when the term does not occur and the node should be left alone.
#[must_use]
pub fn highlight_text(text: &str, matcher: &TermMatcher) -> Option<String> {
    let spans = compute_highlight_spans(text, matcher);
    if spans.is_empty() {
        return None;
    }
    Some(highlight_markup(text, &spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_from_q_parameter() {
        let terms = SearchTerms::from_query("?q=hello+world");
        assert_eq!(terms.terms(), ["hello", "world"]);
    }

    #[test]
    fn terms_lowercased_and_short_tokens_dropped() {
        let terms = SearchTerms::from_query("?q=The+Rust+of+IO");
        assert_eq!(terms.terms(), ["the", "rust"]);
    }

    #[test]
    fn empty_q_falls_back_to_search_parameter() {
        let terms = SearchTerms::from_query("?q=&search=ownership");
        assert_eq!(terms.terms(), ["ownership"]);
    }

    #[test]
    fn q_takes_precedence_over_search() {
        let terms = SearchTerms::from_query("?search=second&q=first");
        assert_eq!(terms.terms(), ["first"]);
    }

    #[test]
    fn missing_parameters_yield_empty_set() {
        assert!(SearchTerms::from_query("").is_empty());
        assert!(SearchTerms::from_query("?page=2").is_empty());
        assert!(SearchTerms::from_query("?q=").is_empty());
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let terms = SearchTerms::from_query("?q=beta+alpha+beta");
        assert_eq!(terms.terms(), ["beta", "alpha", "beta"]);
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let terms = SearchTerms::from_query("?q=caf%C3%A9%20menu");
        assert_eq!(terms.terms(), ["café", "menu"]);
    }

    #[test]
    fn matcher_is_case_insensitive() {
        let matcher = TermMatcher::new("rust").unwrap();
        assert!(matcher.is_match("Rust and RUST and rust"));
        assert!(matcher.is_match("crustacean"));
        assert!(!matcher.is_match("steel and iron"));
    }

    #[test]
    fn matcher_treats_metacharacters_literally() {
        let matcher = TermMatcher::new("c++").unwrap();
        assert!(matcher.is_match("we write C++ here"));
        assert!(!matcher.is_match("ccc"));

        let dotted = TermMatcher::new("a.b").unwrap();
        assert!(dotted.is_match("module a.b loaded"));
        assert!(!dotted.is_match("aXb"));
    }

    #[test]
    fn empty_term_yields_no_matcher() {
        assert!(TermMatcher::new("").is_none());
    }

    #[test]
    fn spans_cover_all_occurrences() {
        let matcher = TermMatcher::new("ab").unwrap();
        let spans = compute_highlight_spans("ab xx AB xx ab", &matcher);
        assert_eq!(spans, [0..2, 6..8, 12..14]);
    }

    #[test]
    fn markup_wraps_matches_and_escapes_text() {
        let matcher = TermMatcher::new("need").unwrap();
        let markup = highlight_text("<p> need & Need", &matcher).unwrap();
        assert_eq!(
            markup,
            "&lt;p&gt; <mark class=\"search-highlight\">need</mark> \
             &amp; <mark class=\"search-highlight\">Need</mark>"
        );
    }

    #[test]
    fn no_match_returns_none() {
        let matcher = TermMatcher::new("absent").unwrap();
        assert!(highlight_text("nothing to see", &matcher).is_none());
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        let matcher = TermMatcher::new("café").unwrap();
        let markup = highlight_text("Le Café du Port", &matcher).unwrap();
        assert_eq!(
            markup,
            "Le <mark class=\"search-highlight\">Café</mark> du Port"
        );
    }
}
