//! Native integration tests for the enhancement decision logic.
//!
//! The DOM adapters only apply what these functions decide, so the observable
//! behaviors (term derivation, literal matching, markup shape, sidebar
//! transitions, anchor parsing) are exercised here without a browser.

use hydoc_enhance::{
    EnhanceOptions, SearchTerms, SidebarEvent, SidebarPhase, TermMatcher, fragment_id,
    highlight_text, next_phase,
};

#[test]
fn query_to_markup_pipeline() {
    let terms = SearchTerms::from_query("?q=hello+world");
    assert_eq!(terms.terms(), ["hello", "world"]);

    // Each term runs as its own pass over the text nodes; simulate one node
    // per pass. Both case variants are wrapped, unrelated words are not.
    let content = "Hello there, wonderful world. hello again.";

    let hello = TermMatcher::new(&terms.terms()[0]).expect("term compiles");
    let pass1 = highlight_text(content, &hello).expect("hello occurs");
    assert_eq!(pass1.matches("<mark class=\"search-highlight\">").count(), 2);
    assert!(pass1.contains("<mark class=\"search-highlight\">Hello</mark>"));
    assert!(pass1.contains("<mark class=\"search-highlight\">hello</mark>"));

    let world = TermMatcher::new(&terms.terms()[1]).expect("term compiles");
    let pass2 = highlight_text(content, &world).expect("world occurs");
    assert_eq!(pass2.matches("<mark class=\"search-highlight\">").count(), 1);
    assert!(pass2.contains("<mark class=\"search-highlight\">world</mark>"));
    assert!(!pass2.contains("<mark class=\"search-highlight\">wonderful"));
}

#[test]
fn no_query_parameter_leaves_content_untouched() {
    let terms = SearchTerms::from_query("?page=3&theme=dark");
    assert!(terms.is_empty());
}

#[test]
fn regex_metacharacters_in_query_match_literally() {
    let terms = SearchTerms::from_query("?q=std%3A%3Aops+a.b%2B");
    assert_eq!(terms.terms(), ["std::ops", "a.b+"]);

    let matcher = TermMatcher::new(&terms.terms()[1]).expect("term compiles");
    let markup = highlight_text("call a.b+ now, not aXbY", &matcher).expect("match exists");
    assert_eq!(
        markup,
        "call <mark class=\"search-highlight\">a.b+</mark> now, not aXbY"
    );
}

#[test]
fn sidebar_scenario_from_mobile_to_desktop() {
    let bp = EnhanceOptions::default().mobile_breakpoint;
    let mut phase = SidebarPhase::Absent;

    // Page loads at width 500: the toggle control exists, closed.
    phase = next_phase(phase, SidebarEvent::Resized { width: 500 }, bp);
    assert_eq!(phase, SidebarPhase::Closed);

    // First click opens, second click closes.
    phase = next_phase(phase, SidebarEvent::ToggleClicked, bp);
    assert_eq!(phase, SidebarPhase::Open);
    phase = next_phase(phase, SidebarEvent::ToggleClicked, bp);
    assert_eq!(phase, SidebarPhase::Closed);

    // Open again, then a click outside the sidebar dismisses it.
    phase = next_phase(phase, SidebarEvent::ToggleClicked, bp);
    phase = next_phase(phase, SidebarEvent::OutsideClick, bp);
    assert_eq!(phase, SidebarPhase::Closed);

    // Resizing to 1024 removes the control regardless of prior state.
    phase = next_phase(phase, SidebarEvent::ToggleClicked, bp);
    phase = next_phase(phase, SidebarEvent::Resized { width: 1024 }, bp);
    assert_eq!(phase, SidebarPhase::Absent);
}

#[test]
fn rapid_resizes_are_stable() {
    let bp = 768;
    let mut phase = SidebarPhase::Absent;
    for width in [500, 700, 768, 300, 500] {
        phase = next_phase(phase, SidebarEvent::Resized { width }, bp);
        assert_eq!(phase, SidebarPhase::Closed);
    }
    for width in [769, 1024, 2000] {
        phase = next_phase(phase, SidebarEvent::Resized { width }, bp);
        assert_eq!(phase, SidebarPhase::Absent);
    }
}

#[test]
fn anchor_links_parse_like_the_click_handler() {
    // `href="#section-2"` resolves to an element id; everything else falls
    // open to default navigation.
    assert_eq!(fragment_id("#section-2"), Some("section-2"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("/other-page#section-2"), None);
}

#[test]
fn options_builder_round_trip() {
    let options = EnhanceOptions::builder()
        .content_selector("article.docs")
        .mobile_breakpoint(820)
        .build();
    assert_eq!(options.content_selector, "article.docs");
    assert_eq!(options.mobile_breakpoint, 820);
    assert_eq!(options.feedback_reset_ms, 2000);
    assert_eq!(options.code_selector, "pre code");
}
