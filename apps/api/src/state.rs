use std::sync::Arc;

use tokio::sync::Mutex;

use crate::board::store::AppStore;
use crate::config::Config;
use crate::provider::{JobSearchProvider, RefinementProvider, ResumeTailoringProvider};
use crate::search::cache::SearchCache;

/// Everything one user session owns: the board store and the search cache.
/// Process-lifetime only; nothing is persisted.
#[derive(Debug, Default)]
pub struct Session {
    pub store: AppStore,
    pub cache: SearchCache,
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: AppStore::new(),
            cache: SearchCache::new(),
        }
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Never held across a provider call.
    pub session: Arc<Mutex<Session>>,
    pub job_search: Arc<dyn JobSearchProvider>,
    pub refinement: Arc<dyn RefinementProvider>,
    pub tailoring: Arc<dyn ResumeTailoringProvider>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::store::SearchPhase;

    #[test]
    fn test_new_session_starts_idle_with_empty_cache() {
        let session = Session::new();
        assert_eq!(session.store.phase(), SearchPhase::Idle);
        assert!(session.store.board().is_empty());
        assert!(session.cache.is_empty());
        assert_eq!(session.cache.len(), 0);
    }
}
