use serde::{Deserialize, Serialize};

/// Where the user stands with a single posting. Every posting enters the
/// board as `NotApplied`; only the user moves it forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

/// A requirement pulled from a posting, with the exact text that backs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRequirement {
    pub requirement: String,
    pub justification_snippet: String,
}

/// A posting as it appears on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// The application link, verbatim. Not guaranteed unique.
    pub id: String,
    pub job_title: String,
    pub application_link: String,
    pub job_details: String,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    pub required_years_of_experience: String,
    pub key_requirements: Vec<KeyRequirement>,
    pub location: String,
    pub sponsorship_offered: String,
}

/// All postings found for one company. `company_name` is the board key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyJobs {
    pub company_name: String,
    pub jobs: Vec<JobPosting>,
    pub analysis_summary: String,
    pub alias_identifier: String,
}

/// Ordered by first discovery; never sorted.
pub type Board = Vec<CompanyJobs>;

// ────────────────────────────────────────────────────────────────────────────
// Provider-side shapes (before normalization)
// ────────────────────────────────────────────────────────────────────────────

/// A posting exactly as the provider described it. Anything the provider may
/// omit is optional here and defaulted by the normalizer. Unknown fields,
/// including any status the provider invents, are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnprocessedJobPosting {
    pub job_title: String,
    pub application_link: String,
    pub job_details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_years_of_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_requirements: Option<Vec<KeyRequirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorship_offered: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnprocessedCompanyJobs {
    pub company_name: String,
    #[serde(default)]
    pub jobs: Vec<UnprocessedJobPosting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_identifier: Option<String>,
}
