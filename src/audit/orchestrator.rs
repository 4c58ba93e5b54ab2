use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{info, instrument, warn};
use url::Url;

use crate::analyzer::{self, AuditReport};
use crate::fetcher::{FetchError, PageFetcher};

static HTTP_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("http url regex"));

/// Runs one audit per call: validate, fetch the page, analyze it, then probe
/// for `ads.txt` at the page's origin.
#[derive(Clone)]
pub struct Auditor {
    fetcher: Arc<dyn PageFetcher>,
}

impl Auditor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Never fails: every problem ends up in the returned report.
    #[instrument(skip(self))]
    pub async fn audit(&self, url: &str) -> AuditReport {
        let Some(target) = parse_target(url) else {
            info!("rejected non-http url");
            return AuditReport::invalid_url();
        };

        let page = match self.fetcher.fetch_page(&target).await {
            Ok(page) => page,
            Err(fetch_error) => {
                warn!("page fetch failed: {}", fetch_error);
                return AuditReport::fetch_failed(fetch_error.to_string());
            }
        };

        info!(
            "fetched {} (status: {}, charset: {}, size: {} bytes)",
            page.url_final,
            page.status,
            page.charset,
            page.body.len()
        );

        let mut audit = analyzer::analyze(&page.body, Some(&target));
        if !page.status.is_success() {
            audit
                .notes
                .push(format!("page responded with HTTP {}", page.status.as_u16()));
        }

        let (exists, note) = self.probe_ads_txt(&target).await;
        audit.checks.ads_txt_exists = Some(exists);
        audit.notes.extend(note);

        audit.into()
    }

    /// A failed probe reads as "missing"; it never fails the audit.
    async fn probe_ads_txt(&self, target: &Url) -> (bool, Option<String>) {
        let ads_txt = match ads_txt_url(target) {
            Ok(url) => url,
            Err(e) => {
                warn!("cannot derive ads.txt url: {}", e);
                return (false, Some(format!("ads.txt probe failed ({e}); treated as missing")));
            }
        };

        match self.fetcher.probe(&ads_txt).await {
            Ok(status) if status.is_success() => (true, None),
            Ok(status) => (
                false,
                Some(format!("ads.txt probe returned HTTP {}", status.as_u16())),
            ),
            Err(e) => {
                warn!("ads.txt probe failed: {}", e);
                (false, Some(format!("ads.txt probe failed ({e}); treated as missing")))
            }
        }
    }
}

/// Accepts only `http://` or `https://` URLs (any case) that also parse.
pub fn parse_target(url: &str) -> Option<Url> {
    if !HTTP_URL_REGEX.is_match(url) {
        return None;
    }
    Url::parse(url).ok().filter(|parsed| parsed.has_host())
}

/// `{scheme}://{host}[:port]/ads.txt` for the given page. Built from the
/// origin so userinfo, path, query and fragment never reach the request.
pub fn ads_txt_url(page: &Url) -> Result<Url, FetchError> {
    let origin = page.origin().ascii_serialization();
    Ok(Url::parse(&format!("{origin}/ads.txt"))?)
}
