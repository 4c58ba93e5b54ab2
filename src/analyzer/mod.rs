pub mod model;
pub mod patterns;

#[cfg(test)]
mod tests;

pub use model::{AuditReport, Checks, CompletedAudit, FailureKind, PageInfo};

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Ad density above this many script markers is flagged.
pub const MAX_AD_MARKERS: usize = 3;

pub const NOTE_NO_TITLE: &str = "no <title> element found";
pub const NOTE_HEURISTIC: &str =
    "checks are heuristic substring matches and may report false positives";

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title>").expect("title regex"));

/// Run every check over `markup`. Pure: identical input gives an identical report.
///
/// `_base` is the URL the markup came from; nothing consumes it yet, it is
/// carried so callers can later resolve page-relative references.
pub fn analyze(markup: &str, _base: Option<&Url>) -> CompletedAudit {
    let title = extract_title(markup);
    let lowered = markup.to_lowercase();

    let matches = patterns::match_patterns(&lowered);
    let ad_markers = patterns::count_ad_markers(&lowered);

    let checks = Checks {
        banned_content: matches.banned_content,
        adsense_script_present: matches.adsense_script_present,
        privacy_policy_present: matches.privacy_policy_present,
        contact_info_present: matches.contact_info_present,
        too_many_ads: ad_markers > MAX_AD_MARKERS,
        ads_txt_referenced: matches.ads_txt_referenced,
        ads_txt_exists: None,
    };

    let mut notes = Vec::new();
    if title.is_empty() {
        notes.push(NOTE_NO_TITLE.to_string());
    }
    if ad_markers > 0 {
        notes.push(format!(
            "ad script marker found {} time(s); limit is {}",
            ad_markers, MAX_AD_MARKERS
        ));
    }
    notes.push(NOTE_HEURISTIC.to_string());

    CompletedAudit::new(
        PageInfo {
            title,
            length: markup.chars().count(),
        },
        checks,
        notes,
    )
}

/// Text of the first `<title>` element, trimmed; empty when there is none.
pub fn extract_title(markup: &str) -> String {
    TITLE_REGEX
        .captures(markup)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
