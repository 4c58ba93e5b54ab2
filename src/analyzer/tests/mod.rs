use url::Url;

use crate::analyzer::{MAX_AD_MARKERS, NOTE_HEURISTIC, NOTE_NO_TITLE, analyze, extract_title};

const CASINO_PAGE: &str = "<title>Casino Night</title><body>Play casino games. Privacy Policy. Contact us. adsbygoogle adsbygoogle adsbygoogle adsbygoogle ads.txt</body>";

#[test]
fn test_casino_page_end_to_end() {
    let audit = analyze(CASINO_PAGE, None);

    assert_eq!(audit.page.title, "Casino Night");
    assert_eq!(audit.page.length, CASINO_PAGE.chars().count());

    let checks = audit.checks;
    assert!(checks.banned_content);
    assert!(checks.adsense_script_present);
    assert!(checks.privacy_policy_present);
    assert!(checks.contact_info_present);
    assert!(checks.too_many_ads);
    assert!(checks.ads_txt_referenced);
    assert_eq!(checks.ads_txt_exists, None);

    let value = serde_json::to_value(&audit).unwrap();
    assert_eq!(value["ok"], serde_json::json!(true));
    assert!(value["checks"].get("ads_txt_exists").is_none());
}

#[test]
fn test_missing_title_is_empty() {
    let audit = analyze("<html><body><h1>No title here</h1></body></html>", None);
    assert_eq!(audit.page.title, "");
    assert_eq!(audit.notes.first().map(String::as_str), Some(NOTE_NO_TITLE));
}

#[test]
fn test_title_is_trimmed_and_first_wins() {
    let markup = "<head><TITLE lang=\"en\">\n   Shop  \n</TITLE><title>Second</title></head>";
    assert_eq!(extract_title(markup), "Shop");
}

#[test]
fn test_title_ignores_lookalike_tags() {
    let markup = "<titlebar>Menu</titlebar><title>Real</title>";
    assert_eq!(extract_title(markup), "Real");
    assert_eq!(extract_title("<titlebar>Menu</title>"), "");
}

#[test]
fn test_title_spanning_lines() {
    assert_eq!(
        extract_title("<title>Line one\nline two</title>"),
        "Line one\nline two"
    );
}

#[test]
fn test_length_counts_characters_of_raw_input() {
    let markup = "<title>Café</title>ÄÖÜ";
    let audit = analyze(markup, None);
    assert_eq!(audit.page.length, markup.chars().count());
    assert_ne!(audit.page.length, markup.len());
}

#[test]
fn test_empty_markup_yields_all_false() {
    let audit = analyze("", None);
    assert_eq!(audit.page.title, "");
    assert_eq!(audit.page.length, 0);
    let checks = audit.checks;
    assert!(!checks.banned_content);
    assert!(!checks.adsense_script_present);
    assert!(!checks.privacy_policy_present);
    assert!(!checks.contact_info_present);
    assert!(!checks.too_many_ads);
    assert!(!checks.ads_txt_referenced);
}

#[test]
fn test_ad_threshold_boundary() {
    let at_limit = "adsbygoogle ".repeat(MAX_AD_MARKERS);
    assert!(!analyze(&at_limit, None).checks.too_many_ads);

    let over_limit = "adsbygoogle ".repeat(MAX_AD_MARKERS + 1);
    assert!(analyze(&over_limit, None).checks.too_many_ads);
}

#[test]
fn test_ad_marker_count_is_case_insensitive() {
    let markup = "AdsByGoogle ADSBYGOOGLE adsbygoogle AdSbYgOoGlE";
    let audit = analyze(markup, None);
    assert!(audit.checks.too_many_ads);
    assert!(
        audit
            .notes
            .iter()
            .any(|note| note == "ad script marker found 4 time(s); limit is 3")
    );
}

#[test]
fn test_ads_txt_reference_case_insensitive() {
    for markup in ["see ADS.TXT", "see Ads.Txt", "see ads.txt"] {
        assert!(analyze(markup, None).checks.ads_txt_referenced, "{markup}");
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let base = Url::parse("https://example.com/page").unwrap();
    let first = serde_json::to_string(&analyze(CASINO_PAGE, Some(&base))).unwrap();
    let second = serde_json::to_string(&analyze(CASINO_PAGE, Some(&base))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_base_reference_does_not_change_result() {
    let base = Url::parse("https://example.com/").unwrap();
    assert_eq!(analyze(CASINO_PAGE, Some(&base)), analyze(CASINO_PAGE, None));
}

#[test]
fn test_heuristic_note_always_last() {
    let audit = analyze("<title>Plain</title>", None);
    assert_eq!(audit.notes, vec![NOTE_HEURISTIC.to_string()]);
}

#[test]
fn test_malformed_markup_does_not_fail() {
    let audit = analyze("<html><head><title>Broken<body><p>Unclosed tags<div>", None);
    // no closing tag, so no title match
    assert_eq!(audit.page.title, "");
    assert!(!audit.checks.adsense_script_present);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_analyze_never_panics(markup in ".*") {
            let _ = analyze(&markup, None);
        }

        #[test]
        fn test_length_matches_char_count(markup in ".*") {
            let audit = analyze(&markup, None);
            prop_assert_eq!(audit.page.length, markup.chars().count());
        }

        #[test]
        fn test_no_title_tag_means_empty_title(markup in "[^<]*") {
            prop_assert_eq!(analyze(&markup, None).page.title, "");
        }
    }
}
