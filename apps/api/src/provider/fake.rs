//! In-memory providers for tests. Each call is counted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::board::{UnprocessedCompanyJobs, UnprocessedJobPosting};
use crate::models::tailoring::{AnalyzeResult, TailorResult};
use crate::provider::llm::decode_search_reply;
use crate::provider::{
    ChatQuery, JobSearchProvider, JobSearchQuery, RefinementProvider, RefinementQuery,
    ResumeTailoringProvider, TailorQuery,
};

pub fn unprocessed_company(name: &str, links: &[&str]) -> UnprocessedCompanyJobs {
    UnprocessedCompanyJobs {
        company_name: name.to_string(),
        jobs: links
            .iter()
            .map(|link| UnprocessedJobPosting {
                job_title: format!("Engineer ({link})"),
                application_link: link.to_string(),
                job_details: "Build and run services.".to_string(),
                posted_date: None,
                required_years_of_experience: None,
                key_requirements: None,
                location: None,
                sponsorship_offered: None,
            })
            .collect(),
        analysis_summary: None,
        alias_identifier: None,
    }
}

pub fn analysis(score: f64) -> AnalyzeResult {
    AnalyzeResult {
        match_score: score,
        explanation: "1. Solid overlap".to_string(),
        ats_score: score,
        ats_explanation: "Parseable".to_string(),
        scoring_breakdown: vec![],
    }
}

/// Scripted provider. A `None` response makes the call fail with a transport error.
/// A malformed search reply is decoded like a real model reply would be.
#[derive(Default)]
pub struct FakeProvider {
    pub search_response: Mutex<Option<Vec<UnprocessedCompanyJobs>>>,
    pub malformed_search: Mutex<Option<String>>,
    pub refine_response: Mutex<Option<Option<UnprocessedCompanyJobs>>>,
    pub search_calls: AtomicUsize,
    pub refine_calls: AtomicUsize,
    pub tailor_calls: AtomicUsize,
    pub last_search: Mutex<Option<JobSearchQuery>>,
    pub last_refine: Mutex<Option<RefinementQuery>>,
    pub last_chat: Mutex<Option<ChatQuery>>,
}

impl FakeProvider {
    pub fn with_search(companies: Vec<UnprocessedCompanyJobs>) -> Self {
        let fake = Self::default();
        *fake.search_response.lock().unwrap() = Some(companies);
        fake
    }

    pub fn set_search(&self, response: Option<Vec<UnprocessedCompanyJobs>>) {
        *self.search_response.lock().unwrap() = response;
    }

    pub fn set_malformed_search(&self, raw: &str) {
        *self.malformed_search.lock().unwrap() = Some(raw.to_string());
    }

    pub fn set_refine(&self, response: Option<Option<UnprocessedCompanyJobs>>) {
        *self.refine_response.lock().unwrap() = response;
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn refine_calls(&self) -> usize {
        self.refine_calls.load(Ordering::SeqCst)
    }

    pub fn tailor_calls(&self) -> usize {
        self.tailor_calls.load(Ordering::SeqCst)
    }
}

fn unreachable_provider() -> AppError {
    AppError::Transport("provider unreachable".to_string())
}

#[async_trait]
impl JobSearchProvider for FakeProvider {
    async fn find_jobs(
        &self,
        query: &JobSearchQuery,
    ) -> Result<Vec<UnprocessedCompanyJobs>, AppError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some(query.clone());
        if let Some(raw) = self.malformed_search.lock().unwrap().clone() {
            return decode_search_reply(&raw);
        }
        self.search_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(unreachable_provider)
    }
}

#[async_trait]
impl RefinementProvider for FakeProvider {
    async fn refine_company(
        &self,
        query: &RefinementQuery,
    ) -> Result<Option<UnprocessedCompanyJobs>, AppError> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_refine.lock().unwrap() = Some(query.clone());
        self.refine_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(unreachable_provider)
    }
}

#[async_trait]
impl ResumeTailoringProvider for FakeProvider {
    async fn tailor(&self, query: &TailorQuery) -> Result<TailorResult, AppError> {
        self.tailor_calls.fetch_add(1, Ordering::SeqCst);
        Ok(TailorResult {
            tailored_resume: format!("{} (tailored for {})", query.resume_text, query.job_title),
            analysis: analysis(80.0),
        })
    }

    async fn analyze(
        &self,
        resume_text: &str,
        _job_title: &str,
        _job_details: &str,
    ) -> Result<AnalyzeResult, AppError> {
        Ok(analysis(resume_text.len().min(100) as f64))
    }

    async fn chat(&self, query: &ChatQuery) -> Result<String, AppError> {
        *self.last_chat.lock().unwrap() = Some(query.clone());
        Ok(format!("You asked: {}", query.message))
    }
}
