// Search: fingerprinting, the session cache, and the search/refine flows.

pub mod cache;
pub mod fingerprint;
pub mod handlers;
pub mod service;
