use std::sync::Arc;

use kinship_core::PersonStore;
use kinship_engine::PersonGraphService;
use tokio::sync::{Mutex, MutexGuard};

/// Router state: one service shared by every request
///
/// Requests take the lock for the whole operation, so relationship updates
/// never interleave within this process.
pub struct AppState<S> {
    service: Arc<Mutex<PersonGraphService<S>>>,
}

impl<S: PersonStore> AppState<S> {
    pub fn new(service: PersonGraphService<S>) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, PersonGraphService<S>> {
        self.service.lock().await
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
