//! Resolves board jobs and session resumes, validates, then calls the
//! tailoring provider. The session lock is never held across that call.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::AppError;
use crate::models::board::JobPosting;
use crate::models::resume::{ResumeFile, ResumeImage};
use crate::models::tailoring::{AnalyzeResult, ChatTurn, TailorResult};
use crate::provider::{ChatQuery, ResumeTailoringProvider, TailorQuery};
use crate::state::Session;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    pub job_id: String,
    /// Which uploaded resume to tailor. Defaults to the first one.
    #[serde(default)]
    pub resume_file_name: Option<String>,
    #[serde(default)]
    pub resume_image: Option<ResumeImage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_id: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub job_id: String,
    pub original_resume: String,
    pub tailored_resume: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// First job on the board with this id. Ids can repeat; the earliest wins.
fn find_job(session: &Session, job_id: &str) -> Result<JobPosting, AppError> {
    session
        .store
        .board()
        .iter()
        .flat_map(|c| c.jobs.iter())
        .find(|job| job.id == job_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job '{job_id}' is not on the board")))
}

fn select_resume(resumes: &[ResumeFile], file_name: Option<&str>) -> Result<ResumeFile, AppError> {
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "Please select a resume to tailor.".to_string(),
        ));
    }
    match file_name {
        Some(name) => resumes
            .iter()
            .find(|r| r.file_name == name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Resume '{name}' was not uploaded"))),
        None => Ok(resumes[0].clone()),
    }
}

pub async fn run_tailoring(
    session: &Mutex<Session>,
    provider: &dyn ResumeTailoringProvider,
    request: TailorRequest,
) -> Result<TailorResult, AppError> {
    let (job, resume) = {
        let session = session.lock().await;
        let job = find_job(&session, &request.job_id)?;
        let resume = select_resume(session.store.resumes(), request.resume_file_name.as_deref())?;
        (job, resume)
    };

    if resume.text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Resume '{}' has no readable text.",
            resume.file_name
        )));
    }

    info!("Tailoring '{}' for '{}'", resume.file_name, job.job_title);
    provider
        .tailor(&TailorQuery {
            resume_text: resume.text,
            resume_image: request.resume_image,
            job_title: job.job_title,
            job_details: job.job_details,
        })
        .await
}

pub async fn run_analysis(
    session: &Mutex<Session>,
    provider: &dyn ResumeTailoringProvider,
    request: AnalyzeRequest,
) -> Result<AnalyzeResult, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "There is no resume text to analyze.".to_string(),
        ));
    }
    let job = find_job(&*session.lock().await, &request.job_id)?;
    provider
        .analyze(&request.resume_text, &job.job_title, &job.job_details)
        .await
}

pub async fn run_chat(
    session: &Mutex<Session>,
    provider: &dyn ResumeTailoringProvider,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::Validation("Type a message first.".to_string()));
    }
    let job = find_job(&*session.lock().await, &request.job_id)?;

    let reply = provider
        .chat(&ChatQuery {
            original_resume: request.original_resume,
            tailored_resume: request.tailored_resume,
            job_details: job.job_details,
            history: request.history,
            message,
        })
        .await?;
    Ok(ChatResponse { reply })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::normalizer::normalize;
    use crate::board::store::StoreEvent;
    use crate::provider::fake::{unprocessed_company, FakeProvider};

    fn resume(name: &str, text: &str) -> ResumeFile {
        ResumeFile {
            file_name: name.to_string(),
            size_bytes: 100,
            last_modified: 0,
            text: text.to_string(),
        }
    }

    fn session_with_board() -> Mutex<Session> {
        let mut session = Session::default();
        let _ = session.store.apply(StoreEvent::SearchStarted {
            resumes: vec![resume("a.txt", "Resume A"), resume("b.txt", "Resume B")],
        });
        let generation = session.store.generation();
        let _ = session.store.apply(StoreEvent::SearchSucceeded {
            generation,
            board: normalize(vec![unprocessed_company("Acme", &["https://acme/1"])]),
        });
        Mutex::new(session)
    }

    fn tailor_request(job_id: &str, file: Option<&str>) -> TailorRequest {
        TailorRequest {
            job_id: job_id.to_string(),
            resume_file_name: file.map(str::to_string),
            resume_image: None,
        }
    }

    #[tokio::test]
    async fn test_tailoring_uses_selected_resume_and_job() {
        let session = session_with_board();
        let provider = FakeProvider::default();

        let result = run_tailoring(&session, &provider, tailor_request("https://acme/1", Some("b.txt")))
            .await
            .unwrap();
        assert!(result.tailored_resume.starts_with("Resume B"));
        assert!(result.tailored_resume.contains("Engineer (https://acme/1)"));
        assert_eq!(result.analysis.match_score, 80.0);
    }

    #[tokio::test]
    async fn test_tailoring_defaults_to_first_resume() {
        let session = session_with_board();
        let provider = FakeProvider::default();
        let result = run_tailoring(&session, &provider, tailor_request("https://acme/1", None))
            .await
            .unwrap();
        assert!(result.tailored_resume.starts_with("Resume A"));
    }

    #[tokio::test]
    async fn test_tailoring_is_never_cached() {
        let session = session_with_board();
        let provider = FakeProvider::default();
        for _ in 0..2 {
            run_tailoring(&session, &provider, tailor_request("https://acme/1", None))
                .await
                .unwrap();
        }
        assert_eq!(provider.tailor_calls(), 2);
    }

    #[tokio::test]
    async fn test_tailoring_unknown_job_or_resume() {
        let session = session_with_board();
        let provider = FakeProvider::default();

        let err = run_tailoring(&session, &provider, tailor_request("https://nope", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = run_tailoring(&session, &provider, tailor_request("https://acme/1", Some("c.txt")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(provider.tailor_calls(), 0);
    }

    #[tokio::test]
    async fn test_tailoring_without_resumes_is_validation_error() {
        let mut session = Session::default();
        let _ = session.store.apply(StoreEvent::SearchSucceeded {
            generation: 0,
            board: normalize(vec![unprocessed_company("Acme", &["https://acme/1"])]),
        });
        let session = Mutex::new(session);
        let err = run_tailoring(&session, &FakeProvider::default(), tailor_request("https://acme/1", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analysis_rejects_blank_text() {
        let session = session_with_board();
        let err = run_analysis(
            &session,
            &FakeProvider::default(),
            AnalyzeRequest {
                job_id: "https://acme/1".to_string(),
                resume_text: " \n".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_chat_passes_job_details_and_history() {
        let session = session_with_board();
        let provider = FakeProvider::default();
        let response = run_chat(
            &session,
            &provider,
            ChatRequest {
                job_id: "https://acme/1".to_string(),
                original_resume: "orig".to_string(),
                tailored_resume: "tailored".to_string(),
                history: vec![],
                message: "  Make it shorter ".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(response.reply, "You asked: Make it shorter");

        let query = provider.last_chat.lock().unwrap().clone().unwrap();
        assert_eq!(query.job_details, "Build and run services.");
    }
}
