//! Normalizer: fills provider gaps with fixed defaults and assigns job ids.
//!
//! Total by construction: every optional field has a documented default, so
//! no provider payload that survived decoding can make normalization fail.

use crate::board::alias::derive_alias_identifier;
use crate::models::board::{
    ApplicationStatus, CompanyJobs, JobPosting, UnprocessedCompanyJobs, UnprocessedJobPosting,
};

pub const DEFAULT_ANALYSIS_SUMMARY: &str = "No analysis provided.";
pub const DEFAULT_YEARS_OF_EXPERIENCE: &str = "Not specified";
pub const DEFAULT_LOCATION: &str = "Not specified";
pub const DEFAULT_SPONSORSHIP: &str = "Not Mentioned";

/// Normalizes a batch of provider companies, preserving order.
pub fn normalize(companies: Vec<UnprocessedCompanyJobs>) -> Vec<CompanyJobs> {
    companies.into_iter().map(normalize_company).collect()
}

pub fn normalize_company(company: UnprocessedCompanyJobs) -> CompanyJobs {
    let alias_identifier = non_empty(company.alias_identifier)
        .unwrap_or_else(|| derive_alias_identifier(&company.company_name));

    CompanyJobs {
        analysis_summary: non_empty(company.analysis_summary)
            .unwrap_or_else(|| DEFAULT_ANALYSIS_SUMMARY.to_string()),
        alias_identifier,
        jobs: company.jobs.into_iter().map(normalize_job).collect(),
        company_name: company.company_name,
    }
}

fn normalize_job(job: UnprocessedJobPosting) -> JobPosting {
    JobPosting {
        // Verbatim, so two postings sharing a link share an id.
        id: job.application_link.clone(),
        job_title: job.job_title,
        application_link: job.application_link,
        job_details: job.job_details,
        status: ApplicationStatus::NotApplied,
        // Passed through as given; it has no default.
        posted_date: job.posted_date,
        required_years_of_experience: non_empty(job.required_years_of_experience)
            .unwrap_or_else(|| DEFAULT_YEARS_OF_EXPERIENCE.to_string()),
        key_requirements: job.key_requirements.unwrap_or_default(),
        location: non_empty(job.location).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        sponsorship_offered: non_empty(job.sponsorship_offered)
            .unwrap_or_else(|| DEFAULT_SPONSORSHIP.to_string()),
    }
}

/// Treats an empty string the same as an absent field.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
