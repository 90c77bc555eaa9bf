//! Search orchestration.
//!
//! Search flow: validate → fingerprint → cache lookup → provider on miss
//! (cache written only on success) → normalize → store.
//! Refinement flow: validate → provider → normalize → reconcile into store.
//!
//! The session lock is released while the provider runs, so each outcome is
//! applied under the generation it started with and dropped if superseded.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::board::alias::derive_alias_identifier;
use crate::board::normalizer::{normalize, normalize_company};
use crate::board::store::{StoreEvent, Transition};
use crate::errors::AppError;
use crate::models::board::{Board, CompanyJobs, UnprocessedCompanyJobs};
use crate::models::resume::ResumeFile;
use crate::provider::{JobSearchProvider, JobSearchQuery, RefinementProvider, RefinementQuery};
use crate::search::fingerprint::compute_fingerprint;
use crate::state::Session;

pub const EMPTY_REFINEMENT_SUMMARY: &str = "No suitable jobs found after refinement.";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub resumes: Vec<ResumeFile>,
    pub companies: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub willing_to_relocate: bool,
    #[serde(default)]
    pub needs_sponsorship: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub company_name: String,
    pub feedback: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub board: Board,
    pub from_cache: bool,
    /// False when a newer search or a logout superseded this one.
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefineOutcome {
    pub company: CompanyJobs,
    pub applied: bool,
}

/// Trims entries and drops the blank ones.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

pub async fn run_search(
    session: &Mutex<Session>,
    provider: &dyn JobSearchProvider,
    request: SearchRequest,
    now: DateTime<Utc>,
) -> Result<SearchOutcome, AppError> {
    let companies = clean_list(request.companies);
    let sources = clean_list(request.sources);

    if request.resumes.is_empty() || companies.is_empty() {
        return Err(AppError::Validation(
            "Please upload at least one resume and enter company names.".to_string(),
        ));
    }

    let key = compute_fingerprint(
        &request.resumes,
        &companies,
        &sources,
        &request.location,
        request.willing_to_relocate,
        request.needs_sponsorship,
    );

    let query = JobSearchQuery {
        resume_texts: request.resumes.iter().map(|r| r.text.clone()).collect(),
        companies,
        sources,
        location: request.location,
        willing_to_relocate: request.willing_to_relocate,
        needs_sponsorship: request.needs_sponsorship,
    };

    let (generation, cached) = {
        let mut session = session.lock().await;
        let _ = session.store.apply(StoreEvent::SearchStarted {
            resumes: request.resumes,
        });
        let cached = session.cache.lookup(&key, now).map(|entry| entry.data.clone());
        (session.store.generation(), cached)
    };

    let from_cache = cached.is_some();
    let found = match cached {
        Some(data) => {
            info!("Search cache hit ({} companies)", data.len());
            data
        }
        None => {
            info!(
                "Search cache miss; querying provider for {} companies",
                query.companies.len()
            );
            match provider.find_jobs(&query).await {
                Ok(data) => {
                    let mut session = session.lock().await;
                    session.cache.store(key, data.clone(), now);
                    info!("Search cached ({} fingerprints held)", session.cache.len());
                    data
                }
                Err(err) => {
                    let transition = session.lock().await.store.apply(StoreEvent::SearchFailed {
                        generation,
                        message: err.user_message(),
                    });
                    if transition == Transition::Stale {
                        warn!("Discarding failure of superseded search (generation {generation})");
                    }
                    return Err(err);
                }
            }
        }
    };

    let board = normalize(found);
    let transition = session.lock().await.store.apply(StoreEvent::SearchSucceeded {
        generation,
        board: board.clone(),
    });
    if transition == Transition::Stale {
        warn!("Discarding results of superseded search (generation {generation})");
    }

    Ok(SearchOutcome {
        board,
        from_cache,
        applied: transition == Transition::Applied,
    })
}

pub async fn run_refinement(
    session: &Mutex<Session>,
    provider: &dyn RefinementProvider,
    request: RefineRequest,
) -> Result<RefineOutcome, AppError> {
    let company_name = request.company_name.trim().to_string();
    let feedback = request.feedback.trim().to_string();

    if feedback.is_empty() {
        return Err(AppError::Validation(
            "Please provide some feedback on the previous results.".to_string(),
        ));
    }
    if company_name.is_empty() {
        return Err(AppError::Validation(
            "Choose a company to refine.".to_string(),
        ));
    }

    let (generation, resume_texts) = {
        let session = session.lock().await;
        let texts: Vec<String> = session
            .store
            .resumes()
            .iter()
            .map(|r| r.text.clone())
            .collect();
        (session.store.generation(), texts)
    };

    if resume_texts.is_empty() {
        return Err(AppError::Validation(
            "No resume available to refine the search.".to_string(),
        ));
    }

    let query = RefinementQuery {
        company_name: company_name.clone(),
        resume_texts,
        feedback,
        sources: clean_list(request.sources),
    };

    info!("Refining search for '{company_name}'");
    let refined = provider
        .refine_company(&query)
        .await?
        .unwrap_or_else(|| empty_refinement(&company_name));

    // The board key is the company the user asked about, whatever the
    // provider chose to call it.
    let company = normalize_company(UnprocessedCompanyJobs {
        company_name,
        ..refined
    });

    let transition = session
        .lock()
        .await
        .store
        .apply(StoreEvent::RefinementMerged {
            generation,
            company: company.clone(),
        });
    if transition == Transition::Stale {
        warn!(
            "Discarding refinement for '{}' started before a newer search",
            company.company_name
        );
    }

    Ok(RefineOutcome {
        company,
        applied: transition == Transition::Applied,
    })
}

fn empty_refinement(company_name: &str) -> UnprocessedCompanyJobs {
    UnprocessedCompanyJobs {
        company_name: company_name.to_string(),
        jobs: Vec::new(),
        analysis_summary: Some(EMPTY_REFINEMENT_SUMMARY.to_string()),
        alias_identifier: Some(derive_alias_identifier(company_name)),
    }
}
