//! Application state — the signed-in user, the crypto list and news.
//!
//! Records are only ever replaced whole. Readers take an [`AppState`]
//! snapshot; a snapshot never observes a half-applied update.

use crate::domain::crypto::Crypto;
use crate::domain::news::NewsArticle;
use crate::domain::portfolio::User;
use std::sync::{Arc, RwLock};

/// Immutable snapshot of the global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub user: Option<Arc<User>>,
    pub cryptos: Arc<Vec<Crypto>>,
    pub news: Arc<Vec<NewsArticle>>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared handle to the global state. Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    inner: Arc<RwLock<Arc<AppState>>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state. Cheap; later updates do not affect it.
    pub fn snapshot(&self) -> Arc<AppState> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the user record (e.g. with the one a purchase returned).
    pub fn set_user(&self, user: User) {
        tracing::debug!(user = %user.id, "Replacing user record");
        self.update(|s| s.user = Some(Arc::new(user)));
    }

    /// Signs the user out.
    pub fn clear_user(&self) {
        self.update(|s| s.user = None);
    }

    pub fn set_cryptos(&self, cryptos: Vec<Crypto>) {
        self.update(|s| s.cryptos = Arc::new(cryptos));
    }

    pub fn set_news(&self, news: Vec<NewsArticle>) {
        self.update(|s| s.news = Arc::new(news));
    }

    fn update(&self, apply: impl FnOnce(&mut AppState)) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = AppState::clone(&guard);
        apply(&mut next);
        *guard = Arc::new(next);
    }
}
