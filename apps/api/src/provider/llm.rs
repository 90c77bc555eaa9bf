//! LLM-backed providers. Builds prompts, calls `LlmClient`, decodes replies.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RESUME_SEPARATOR};
use crate::llm_client::{
    ContentPart, LlmClient, LlmError, LlmRequest, Message, TAILORING_MODEL,
};
use crate::models::board::UnprocessedCompanyJobs;
use crate::models::tailoring::{AnalyzeResult, ChatRole, TailorResult};
use crate::provider::payload::{decode_payload, details_snippet, Decoded};
use crate::provider::prompts::{
    ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM, CHAT_SYSTEM, CHAT_TURN_TEMPLATE,
    REFINE_PROMPT_TEMPLATE, SEARCH_PROMPT_TEMPLATE, SEARCH_SYSTEM, TAILOR_PROMPT_TEMPLATE,
    TAILOR_SYSTEM,
};
use crate::provider::rubric::SCORING_RUBRIC;
use crate::provider::{
    ChatQuery, JobSearchProvider, JobSearchQuery, RefinementProvider, RefinementQuery,
    ResumeTailoringProvider, TailorQuery,
};

const TAILORING_TEMPERATURE: f32 = 0.4;
const SCORING_TEMPERATURE: f32 = 0.0;

/// Implements every provider capability on top of the hosted model.
pub struct LlmProvider {
    llm: LlmClient,
}

impl LlmProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

/// A search reply made only of tool blocks carries no payload. That is "no
/// matches", not a failure, so it decodes like an empty string.
fn search_reply_text(reply: Result<String, LlmError>) -> Result<String, AppError> {
    match reply {
        Err(LlmError::EmptyContent) => {
            warn!("Search reply had no text blocks; treating it as no matches");
            Ok(String::new())
        }
        other => other.map_err(AppError::from),
    }
}

#[async_trait]
impl JobSearchProvider for LlmProvider {
    async fn find_jobs(
        &self,
        query: &JobSearchQuery,
    ) -> Result<Vec<UnprocessedCompanyJobs>, AppError> {
        let request = LlmRequest::prompt(SEARCH_SYSTEM, build_search_prompt(query)).with_web_search();
        let reply = search_reply_text(self.llm.send_text(&request).await)?;
        decode_search_reply(&reply)
    }
}

#[async_trait]
impl RefinementProvider for LlmProvider {
    async fn refine_company(
        &self,
        query: &RefinementQuery,
    ) -> Result<Option<UnprocessedCompanyJobs>, AppError> {
        let request = LlmRequest::prompt(SEARCH_SYSTEM, build_refine_prompt(query)).with_web_search();
        let reply = search_reply_text(self.llm.send_text(&request).await)?;
        decode_refine_reply(&reply)
    }
}

#[async_trait]
impl ResumeTailoringProvider for LlmProvider {
    async fn tailor(&self, query: &TailorQuery) -> Result<TailorResult, AppError> {
        let prompt = TAILOR_PROMPT_TEMPLATE
            .replace("{job_title}", &query.job_title)
            .replace("{job_details}", &query.job_details)
            .replace("{resume}", &query.resume_text);

        let mut content = Vec::with_capacity(2);
        if let Some(image) = &query.resume_image {
            content.push(ContentPart::base64_image(
                image.media_type.clone(),
                image.base64_body(),
            ));
        }
        content.push(ContentPart::text(prompt));

        let mut request = LlmRequest::prompt(TAILOR_SYSTEM, String::new())
            .with_temperature(TAILORING_TEMPERATURE);
        request.model = TAILORING_MODEL;
        request.messages[0].content = content;

        info!("Tailoring resume for '{}'", query.job_title);
        let tailored_resume = self.llm.send_text(&request).await?;

        // Score the tailored text, not the original.
        let analysis = self
            .analyze(&tailored_resume, &query.job_title, &query.job_details)
            .await?;

        Ok(TailorResult {
            tailored_resume,
            analysis,
        })
    }

    async fn analyze(
        &self,
        resume_text: &str,
        job_title: &str,
        job_details: &str,
    ) -> Result<AnalyzeResult, AppError> {
        let prompt = ANALYZE_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{job_details}", job_details)
            .replace("{resume}", resume_text)
            .replace("{rubric}", SCORING_RUBRIC)
            .replace("{json_only}", JSON_ONLY_INSTRUCTION);
        let request =
            LlmRequest::prompt(ANALYZE_SYSTEM, prompt).with_temperature(SCORING_TEMPERATURE);
        let reply = self.llm.send_text(&request).await?;

        match decode_payload::<AnalyzeResult>(&reply) {
            Decoded::Parsed(result) => Ok(result),
            Decoded::NoPayload | Decoded::Malformed { .. } => Err(AppError::ProviderResponse(
                format!(
                    "The AI returned an invalid score analysis. Details: {}",
                    details_snippet(&reply)
                ),
            )),
        }
    }

    async fn chat(&self, query: &ChatQuery) -> Result<String, AppError> {
        let mut request = LlmRequest::prompt(CHAT_SYSTEM, String::new());
        request.messages = build_chat_messages(query);
        Ok(self.llm.send_text(&request).await?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly
// ────────────────────────────────────────────────────────────────────────────

fn build_search_prompt(query: &JobSearchQuery) -> String {
    let location = if query.location.trim().is_empty() {
        "Not specified"
    } else {
        query.location.trim()
    };

    SEARCH_PROMPT_TEMPLATE
        .replace("{resumes}", &query.resume_texts.join(RESUME_SEPARATOR))
        .replace("{location}", location)
        .replace("{relocate}", yes_no(query.willing_to_relocate))
        .replace("{sponsorship}", yes_no(query.needs_sponsorship))
        .replace("{companies}", &query.companies.join(", "))
        .replace("{sources}", &query.sources.join(", "))
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

fn build_refine_prompt(query: &RefinementQuery) -> String {
    REFINE_PROMPT_TEMPLATE
        .replace("{company}", &query.company_name)
        .replace("{resumes}", &query.resume_texts.join(RESUME_SEPARATOR))
        .replace("{feedback}", &query.feedback)
        .replace("{sources}", &query.sources.join(", "))
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

fn build_chat_messages(query: &ChatQuery) -> Vec<Message> {
    let latest = CHAT_TURN_TEMPLATE
        .replace("{original}", &query.original_resume)
        .replace("{tailored}", &query.tailored_resume)
        .replace("{job_details}", &query.job_details)
        .replace("{message}", &query.message);

    query
        .history
        .iter()
        .map(|turn| match turn.role {
            ChatRole::User => Message::user(turn.text.clone()),
            ChatRole::Model => Message::assistant(turn.text.clone()),
        })
        .chain(std::iter::once(Message::user(latest)))
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reply decoding
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn decode_search_reply(reply: &str) -> Result<Vec<UnprocessedCompanyJobs>, AppError> {
    match decode_payload::<Vec<UnprocessedCompanyJobs>>(reply) {
        Decoded::Parsed(companies) => {
            info!("Search returned {} companies", companies.len());
            Ok(companies)
        }
        Decoded::NoPayload => {
            warn!("Search reply held no JSON; treating as no matches");
            Ok(Vec::new())
        }
        Decoded::Malformed { raw } => Err(AppError::ProviderResponse(format!(
            "The AI returned an invalid response that could not be understood. Details: {}",
            details_snippet(&raw)
        ))),
    }
}

fn decode_refine_reply(reply: &str) -> Result<Option<UnprocessedCompanyJobs>, AppError> {
    match decode_payload::<UnprocessedCompanyJobs>(reply) {
        Decoded::Parsed(company) => Ok(Some(company)),
        Decoded::NoPayload => {
            warn!("Refinement reply held no JSON; treating as no suitable jobs");
            Ok(None)
        }
        Decoded::Malformed { raw } => Err(AppError::ProviderResponse(format!(
            "The AI returned an invalid response during the refined search. Details: {}",
            details_snippet(&raw)
        ))),
    }
}
