//! Provider Gateway: the boundary to the hosted model.
//!
//! Search, refinement and tailoring are capabilities behind traits so the
//! services and handlers never see prompts or HTTP. `AppState` holds one
//! `Arc<dyn _>` per capability; `LlmProvider` implements all three.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::board::UnprocessedCompanyJobs;
use crate::models::resume::ResumeImage;
use crate::models::tailoring::{AnalyzeResult, ChatTurn, TailorResult};

pub mod llm;
pub mod payload;
pub mod prompts;
pub mod rubric;

#[cfg(test)]
pub mod fake;

#[derive(Debug, Clone, PartialEq)]
pub struct JobSearchQuery {
    pub resume_texts: Vec<String>,
    pub companies: Vec<String>,
    pub sources: Vec<String>,
    pub location: String,
    pub willing_to_relocate: bool,
    pub needs_sponsorship: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefinementQuery {
    pub company_name: String,
    pub resume_texts: Vec<String>,
    pub feedback: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TailorQuery {
    pub resume_text: String,
    pub resume_image: Option<ResumeImage>,
    pub job_title: String,
    pub job_details: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatQuery {
    pub original_resume: String,
    pub tailored_resume: String,
    pub job_details: String,
    pub history: Vec<ChatTurn>,
    pub message: String,
}

#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    /// An unusable-but-empty reply is `Ok(vec![])`; a malformed payload is
    /// `AppError::ProviderResponse`.
    async fn find_jobs(
        &self,
        query: &JobSearchQuery,
    ) -> Result<Vec<UnprocessedCompanyJobs>, AppError>;
}

#[async_trait]
pub trait RefinementProvider: Send + Sync {
    /// `Ok(None)` means no suitable jobs were found after refinement.
    async fn refine_company(
        &self,
        query: &RefinementQuery,
    ) -> Result<Option<UnprocessedCompanyJobs>, AppError>;
}

/// Tailoring is never cached: every call reaches the provider.
#[async_trait]
pub trait ResumeTailoringProvider: Send + Sync {
    async fn tailor(&self, query: &TailorQuery) -> Result<TailorResult, AppError>;

    async fn analyze(
        &self,
        resume_text: &str,
        job_title: &str,
        job_details: &str,
    ) -> Result<AnalyzeResult, AppError>;

    async fn chat(&self, query: &ChatQuery) -> Result<String, AppError>;
}
