//! Board Reconciler: merges one refreshed company into the board and applies
//! status edits.
//!
//! A refinement replaces the matched company wholesale. Statuses the user had
//! set on that company's jobs are discarded along with the old jobs.

use crate::models::board::{ApplicationStatus, Board, CompanyJobs};

/// Replaces the entry whose `company_name` equals `updated.company_name`
/// (exact match, position preserved) or appends `updated` at the end.
pub fn reconcile(mut board: Board, updated: CompanyJobs) -> Board {
    match board
        .iter_mut()
        .find(|c| c.company_name == updated.company_name)
    {
        Some(existing) => *existing = updated,
        None => board.push(updated),
    }
    board
}

/// Sets `status` on every job whose id equals `job_id`, across all companies.
///
/// Ids are application links and may repeat, so one call can touch several
/// jobs. An unknown id leaves the board unchanged.
pub fn set_status(mut board: Board, job_id: &str, status: ApplicationStatus) -> Board {
    board
        .iter_mut()
        .flat_map(|company| company.jobs.iter_mut())
        .filter(|job| job.id == job_id)
        .for_each(|job| job.status = status);
    board
}

/// Number of jobs `set_status` would touch.
pub fn count_jobs_with_id(board: &[CompanyJobs], job_id: &str) -> usize {
    board
        .iter()
        .flat_map(|company| company.jobs.iter())
        .filter(|job| job.id == job_id)
        .count()
}
