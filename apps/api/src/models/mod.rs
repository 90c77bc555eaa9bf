pub mod board;
pub mod resume;
pub mod tailoring;
