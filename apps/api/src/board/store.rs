//! Application State Store: the single owner of the board and search flags.
//!
//! State moves only through `apply`, one event at a time:
//!
//! ```text
//! Idle ──start──▶ Searching ──ok──▶ Success
//!                     │                │
//!                     └──err──▶ Failed ┴──start──▶ Searching
//! any ──logout──▶ Idle (empty board, no resumes)
//! ```
//!
//! Provider calls resolve asynchronously, so search and refinement outcomes
//! carry the generation they were started under. Start-search and logout bump
//! the generation; an outcome from an older generation is reported `Stale`
//! and leaves the store untouched.

use serde::Serialize;

use crate::board::reconciler::{count_jobs_with_id, reconcile, set_status};
use crate::models::board::{ApplicationStatus, Board, CompanyJobs};
use crate::models::resume::ResumeFile;

pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    Searching,
    Success,
    Failed,
}

#[derive(Debug)]
pub enum StoreEvent {
    SearchStarted { resumes: Vec<ResumeFile> },
    SearchSucceeded { generation: Generation, board: Board },
    SearchFailed { generation: Generation, message: String },
    RefinementMerged { generation: Generation, company: CompanyJobs },
    StatusChanged { job_id: String, status: ApplicationStatus },
    LoggedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    Applied,
    /// The event belonged to a superseded search or session and was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct AppStore {
    board: Board,
    searching: bool,
    search_error: Option<String>,
    search_completed: bool,
    resumes: Vec<ResumeFile>,
    generation: Generation,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: StoreEvent) -> Transition {
        match event {
            StoreEvent::SearchStarted { resumes } => {
                self.generation += 1;
                self.searching = true;
                self.search_error = None;
                self.search_completed = false;
                self.resumes = resumes;
                Transition::Applied
            }
            StoreEvent::SearchSucceeded { generation, board } => {
                if generation != self.generation {
                    return Transition::Stale;
                }
                self.board = board;
                self.searching = false;
                self.search_completed = true;
                self.search_error = None;
                Transition::Applied
            }
            StoreEvent::SearchFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    return Transition::Stale;
                }
                self.board.clear();
                self.searching = false;
                self.search_error = Some(message);
                Transition::Applied
            }
            StoreEvent::RefinementMerged {
                generation,
                company,
            } => {
                if generation != self.generation {
                    return Transition::Stale;
                }
                self.board = reconcile(std::mem::take(&mut self.board), company);
                Transition::Applied
            }
            StoreEvent::StatusChanged { job_id, status } => {
                self.board = set_status(std::mem::take(&mut self.board), &job_id, status);
                Transition::Applied
            }
            StoreEvent::LoggedOut => {
                *self = Self {
                    generation: self.generation + 1,
                    ..Self::default()
                };
                Transition::Applied
            }
        }
    }

    pub fn phase(&self) -> SearchPhase {
        if self.searching {
            SearchPhase::Searching
        } else if self.search_error.is_some() {
            SearchPhase::Failed
        } else if self.search_completed {
            SearchPhase::Success
        } else {
            SearchPhase::Idle
        }
    }

    pub fn board(&self) -> &[CompanyJobs] {
        &self.board
    }

    pub fn resumes(&self) -> &[ResumeFile] {
        &self.resumes
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn search_completed(&self) -> bool {
        self.search_completed
    }

    pub fn search_error(&self) -> Option<&str> {
        self.search_error.as_deref()
    }

    pub fn jobs_with_id(&self, job_id: &str) -> usize {
        count_jobs_with_id(&self.board, job_id)
    }
}
