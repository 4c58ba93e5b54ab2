use regex::Regex;
use std::sync::LazyLock;

/// Marker used both to detect the ad script and to estimate ad density.
pub const AD_SCRIPT_MARKER: &str = "adsbygoogle";

// Substring stems, not whole words: "escort" also matches "escorted".
static BANNED_CONTENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)porn|xxx|escort|casino|betting|gambl").expect("banned content regex")
});

static AD_SCRIPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)adsbygoogle|pagead2\.googlesyndication\.com|googletagservices\.com")
        .expect("ad script regex")
});

static PRIVACY_POLICY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)privacy\s+policy").expect("privacy policy regex"));

static CONTACT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)contact(\s+us)?").expect("contact regex"));

static ADS_TXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ads\.txt").expect("ads.txt regex"));

/// Results of running every fixed pattern over one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternMatches {
    pub banned_content: bool,
    pub adsense_script_present: bool,
    pub privacy_policy_present: bool,
    pub contact_info_present: bool,
    pub ads_txt_referenced: bool,
}

/// Evaluate the fixed predicates. Callers pass the lower-cased markup, but the
/// patterns are case-insensitive on their own so any casing gives the same answer.
pub fn match_patterns(text: &str) -> PatternMatches {
    PatternMatches {
        banned_content: BANNED_CONTENT_REGEX.is_match(text),
        adsense_script_present: AD_SCRIPT_REGEX.is_match(text),
        privacy_policy_present: PRIVACY_POLICY_REGEX.is_match(text),
        contact_info_present: CONTACT_REGEX.is_match(text),
        ads_txt_referenced: ADS_TXT_REGEX.is_match(text),
    }
}

/// Non-overlapping occurrences of [`AD_SCRIPT_MARKER`] in already lower-cased text.
pub fn count_ad_markers(lowered: &str) -> usize {
    lowered.matches(AD_SCRIPT_MARKER).count()
}
