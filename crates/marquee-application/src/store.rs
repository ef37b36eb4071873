//! Session/account store shared across the view tree.
//!
//! Constructed once by the embedding application and handed to views as an
//! `Arc`; there is no global instance.

use std::sync::Arc;

use marquee_core::account::{Account, AccountSource, FetchOutcome};
use marquee_core::session::Session;
use tokio::sync::RwLock;

/// Point-in-time copy of the store, used for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub session: Option<Session>,
    pub accounts: Vec<Account>,
    pub active_account: Option<Account>,
    pub details_popup_visible: bool,
}

/// In-memory holder of the session, its accounts, the active account and
/// the shared details-popup flag.
///
/// All mutation goes through one `RwLock`; concurrent writers resolve as
/// last-write-wins.
pub struct AccountStore {
    source: Arc<dyn AccountSource>,
    state: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    snapshot: StoreSnapshot,
    /// Bumped whenever the session changes; a fetch started under an older
    /// generation must not write.
    generation: u64,
}

impl AccountStore {
    pub fn new(source: Arc<dyn AccountSource>) -> Self {
        Self {
            source,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Fetches the accounts of `user_id` and updates the collection.
    ///
    /// Only a non-empty answer replaces the collection. Empty answers and
    /// failures leave every field untouched. After a replacement the active
    /// account is re-resolved against the new collection: refreshed when
    /// its id is still present, cleared otherwise.
    ///
    /// A session change while the request is in flight supersedes it: the
    /// answer is dropped and [`FetchOutcome::Superseded`] returned.
    pub async fn fetch_accounts(&self, user_id: &str) -> FetchOutcome {
        let generation = self.state.read().await.generation;
        self.fetch_at(user_id, generation).await
    }

    /// Like [`fetch_accounts`](Self::fetch_accounts), but only for the
    /// session the store currently holds. If `session` was already replaced
    /// or signed out, nothing is requested and the fetch is superseded.
    pub async fn fetch_session_accounts(&self, session: &Session) -> FetchOutcome {
        let generation = {
            let state = self.state.read().await;
            if state.snapshot.session.as_ref() != Some(session) {
                tracing::debug!(user_id = %session.user_id, "Session no longer current, skipping account fetch");
                return FetchOutcome::Superseded;
            }
            state.generation
        };
        self.fetch_at(&session.user_id, generation).await
    }

    async fn fetch_at(&self, user_id: &str, generation: u64) -> FetchOutcome {
        let accounts = match self.source.list_accounts(user_id).await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Failed to fetch accounts");
                return FetchOutcome::Failed(e.to_string());
            }
        };

        if accounts.is_empty() {
            tracing::debug!(user_id, "Account fetch returned no accounts");
            return FetchOutcome::Empty;
        }

        let mut guard = self.state.write().await;
        if guard.generation != generation {
            tracing::debug!(user_id, "Session changed during account fetch, dropping response");
            return FetchOutcome::Superseded;
        }

        let state = &mut guard.snapshot;
        state.accounts = accounts.clone();

        if let Some(active) = state.active_account.take() {
            match accounts.iter().find(|a| a.id == active.id) {
                Some(fresh) => state.active_account = Some(fresh.clone()),
                None => {
                    tracing::warn!(
                        account_id = %active.id,
                        "Active account no longer exists after refetch, clearing it"
                    );
                }
            }
        }

        tracing::info!(user_id, count = accounts.len(), "Accounts loaded");
        FetchOutcome::Loaded(accounts)
    }

    /// Replaces the active account. Not validated against the collection.
    pub async fn set_active_account(&self, account: Account) {
        self.state.write().await.snapshot.active_account = Some(account);
    }

    /// Clears the active account. Runs after an external sign-out; never
    /// signs out by itself.
    pub async fn clear_active_account(&self) {
        self.state.write().await.snapshot.active_account = None;
    }

    /// Records the signed-in session. Switching to another user drops the
    /// previous user's accounts and supersedes fetches still in flight.
    pub async fn set_session(&self, session: Session) {
        let mut state = self.state.write().await;
        if state.snapshot.session.as_ref() != Some(&session) {
            state.generation += 1;
            state.snapshot.accounts.clear();
            state.snapshot.active_account = None;
        }
        state.snapshot.session = Some(session);
    }

    /// Forgets the session together with its accounts and supersedes
    /// fetches still in flight.
    pub async fn clear_session(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.snapshot.session = None;
        state.snapshot.accounts.clear();
        state.snapshot.active_account = None;
    }

    pub async fn set_details_popup(&self, visible: bool) {
        self.state.write().await.snapshot.details_popup_visible = visible;
    }

    pub async fn details_popup_visible(&self) -> bool {
        self.state.read().await.snapshot.details_popup_visible
    }

    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.snapshot.session.clone()
    }

    pub async fn accounts(&self) -> Vec<Account> {
        self.state.read().await.snapshot.accounts.clone()
    }

    pub async fn active_account(&self) -> Option<Account> {
        self.state.read().await.snapshot.active_account.clone()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.snapshot.clone()
    }
}
