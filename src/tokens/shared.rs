use std::sync::{Arc, PoisonError, RwLock};

use super::repository::TokenRepository;

/// Hot-reloadable handle to the current repository.
///
/// Readers take an `Arc` snapshot; a reload swaps the whole reference, so an
/// in-flight composition keeps the snapshot it started with.
#[derive(Debug)]
pub struct SharedRepository {
    current: RwLock<Arc<TokenRepository>>,
}

impl SharedRepository {
    pub fn new(repo: TokenRepository) -> Self {
        Self {
            current: RwLock::new(Arc::new(repo)),
        }
    }

    pub fn snapshot(&self) -> Arc<TokenRepository> {
        // The lock only guards an Arc assignment, a poisoned guard still holds a whole value.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Publish `repo`, returning the previous snapshot.
    pub fn swap(&self, repo: TokenRepository) -> Arc<TokenRepository> {
        let next = Arc::new(repo);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);

        tracing::info!(
            services = guard.services.len(),
            cities = guard.cities.len(),
            "Published token repository"
        );
        previous
    }
}
