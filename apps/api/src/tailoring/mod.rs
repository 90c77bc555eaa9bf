// Resume tailoring: job-specific rewrite, match/ATS scoring and the
// refinement chat. Nothing here is cached.

pub mod handlers;
pub mod service;
