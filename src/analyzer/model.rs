use serde::Serialize;
use utoipa::ToSchema;

pub const ERROR_INVALID_URL: &str = "Invalid URL";
pub const ERROR_FETCH_FAILED: &str = "Fetch failed";

/// Outcome of one audit. The two shapes are distinct on the wire: a failed
/// audit carries no `page` or `checks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AuditReport {
    Completed(CompletedAudit),
    Failed(FailedAudit),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CompletedAudit {
    ok: bool,
    pub page: PageInfo,
    pub checks: Checks,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FailedAudit {
    ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    pub title: String,
    /// Character count of the analyzed markup.
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Checks {
    pub banned_content: bool,
    pub adsense_script_present: bool,
    pub privacy_policy_present: bool,
    pub contact_info_present: bool,
    pub too_many_ads: bool,
    pub ads_txt_referenced: bool,
    /// Only set after a live fetch of the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ads_txt_exists: Option<bool>,
}

/// Why an audit did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    FetchFailure,
}

impl CompletedAudit {
    pub fn new(page: PageInfo, checks: Checks, notes: Vec<String>) -> Self {
        Self {
            ok: true,
            page,
            checks,
            notes,
        }
    }
}

impl AuditReport {
    pub fn invalid_url() -> Self {
        Self::Failed(FailedAudit {
            ok: false,
            error: ERROR_INVALID_URL.to_string(),
            detail: None,
        })
    }

    pub fn fetch_failed(detail: impl Into<String>) -> Self {
        Self::Failed(FailedAudit {
            ok: false,
            error: ERROR_FETCH_FAILED.to_string(),
            detail: Some(detail.into()),
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Completed(_) => None,
            Self::Failed(failed) if failed.error == ERROR_INVALID_URL => {
                Some(FailureKind::InvalidInput)
            }
            Self::Failed(_) => Some(FailureKind::FetchFailure),
        }
    }

    pub fn completed(&self) -> Option<&CompletedAudit> {
        match self {
            Self::Completed(audit) => Some(audit),
            Self::Failed(_) => None,
        }
    }
}

impl From<CompletedAudit> for AuditReport {
    fn from(audit: CompletedAudit) -> Self {
        Self::Completed(audit)
    }
}
