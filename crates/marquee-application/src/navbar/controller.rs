use std::future::Future;
use std::sync::Arc;

use marquee_core::{MarqueeError, Result};
use marquee_core::account::{Account, FetchOutcome};
use marquee_core::navbar::NavbarState;
use marquee_core::navigation::{MenuItemId, NavigationError, Navigator, Route};
use marquee_core::session::{Session, SessionProvider};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::render::NavbarRender;
use crate::store::AccountStore;

/// Headless top navigation bar.
///
/// Owns the view-local state and reads everything shared from the injected
/// [`AccountStore`].
pub struct NavbarController {
    store: Arc<AccountStore>,
    sessions: Arc<dyn SessionProvider>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<NavbarState>,
}

/// Tasks bound to one mount of the navbar.
///
/// Dropping the handle cancels both tasks; [`NavbarController::unmount`]
/// additionally waits for them and resets the view state.
pub struct MountHandle {
    cancel: CancellationToken,
    fetch: Option<JoinHandle<Option<FetchOutcome>>>,
    scroll: Option<JoinHandle<()>>,
    _guard: DropGuard,
}

impl MountHandle {
    /// Waits for the account fetch to settle.
    ///
    /// Returns `None` if the fetch was cancelled or already awaited.
    pub async fn settled(&mut self) -> Option<FetchOutcome> {
        let fetch = self.fetch.take()?;
        match fetch.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Account fetch task failed");
                None
            }
        }
    }
}

impl NavbarController {
    pub fn new(
        store: Arc<AccountStore>,
        sessions: Arc<dyn SessionProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            sessions,
            navigator,
            state: Mutex::new(NavbarState::new()),
        }
    }

    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Mounts the view.
    ///
    /// Enters the loading phase, spawns the account fetch for the current
    /// session and registers the scroll listener on `scroll` (vertical
    /// offsets). Both tasks live until the returned handle is unmounted or
    /// dropped; a fetch still pending at that point never touches the store.
    ///
    /// The store is synced with the session provider first, so a session
    /// signed out elsewhere is not kept around from an earlier mount.
    pub async fn mount(self: &Arc<Self>, scroll: watch::Receiver<f64>) -> MountHandle {
        self.state.lock().await.mount();

        let session = self.sessions.current_session().await;
        match session {
            Some(ref session) => self.store.set_session(session.clone()).await,
            None => self.store.clear_session().await,
        }

        let cancel = CancellationToken::new();

        let fetch = {
            let this = Arc::clone(self);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        tracing::debug!("Navbar unmounted before accounts settled, dropping fetch");
                        return None;
                    }
                    outcome = this.load_accounts(session) => outcome,
                };
                this.state.lock().await.finish_loading();
                Some(outcome)
            })
        };

        let scroll = {
            let this = Arc::clone(self);
            let cancel = cancel.clone();
            tokio::spawn(async move { this.listen_scroll(scroll, cancel).await })
        };

        MountHandle {
            _guard: cancel.clone().drop_guard(),
            cancel,
            fetch: Some(fetch),
            scroll: Some(scroll),
        }
    }

    /// Unmounts the view: cancels its tasks, waits for them, and resets the
    /// view-local state.
    pub async fn unmount(&self, mut handle: MountHandle) {
        handle.cancel.cancel();
        if let Some(fetch) = handle.fetch.take() {
            let _ = fetch.await;
        }
        if let Some(scroll) = handle.scroll.take() {
            let _ = scroll.await;
        }
        *self.state.lock().await = NavbarState::new();
    }

    async fn load_accounts(&self, session: Option<Session>) -> FetchOutcome {
        match session {
            Some(session) => self.store.fetch_session_accounts(&session).await,
            None => {
                tracing::warn!("No signed-in session, skipping account fetch");
                FetchOutcome::Failed(NavigationError::MissingSession.to_string())
            }
        }
    }

    async fn listen_scroll(&self, mut scroll: watch::Receiver<f64>, cancel: CancellationToken) {
        let initial = *scroll.borrow_and_update();
        self.state.lock().await.set_scroll_offset(initial);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                changed = scroll.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let offset = *scroll.borrow_and_update();
                    self.state.lock().await.set_scroll_offset(offset);
                }
            }
        }
    }

    // ============================================================================
    // Interactions
    // ============================================================================

    /// Shows the full-page loader while `fut` runs and releases it whatever
    /// `fut` returns. The loader stays up while any other owner (such as the
    /// mount fetch) still holds it.
    pub async fn with_page_loader<F: Future>(&self, fut: F) -> F::Output {
        self.state.lock().await.begin_loading();
        let output = fut.await;
        self.state.lock().await.finish_loading();
        output
    }

    pub async fn open_search(&self) {
        self.state.lock().await.open_search();
    }

    /// Hides the search bar. Driven by the search component.
    pub async fn close_search(&self) {
        self.state.lock().await.close_search();
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.state.lock().await.set_search_query(query);
    }

    /// Profile avatar/name click. Returns the new popup visibility.
    pub async fn toggle_account_popup(&self) -> bool {
        self.state.lock().await.toggle_account_popup()
    }

    pub async fn set_details_popup(&self, visible: bool) {
        self.store.set_details_popup(visible).await;
    }

    /// Follows a menu entry.
    ///
    /// On success the route is pushed, the search query is cleared and the
    /// search bar hidden. If the destination cannot be built nothing is
    /// pushed and the view state is left as it was.
    pub async fn select_menu_item(
        &self,
        id: MenuItemId,
    ) -> std::result::Result<Route, NavigationError> {
        let snapshot = self.store.snapshot().await;
        let route = id
            .route(snapshot.session.as_ref(), snapshot.active_account.as_ref())
            .inspect_err(|e| tracing::debug!(item = id.as_str(), error = %e, "Menu item disabled"))?;

        self.navigator.push(&route);
        self.state.lock().await.reset_for_navigation();
        Ok(route)
    }

    /// Logo click always goes home.
    pub fn click_logo(&self) -> Route {
        let route = Route::Browse;
        self.navigator.push(&route);
        route
    }

    /// Picks a profile from the account popup and closes the popup.
    pub async fn select_account(&self, account: Account) {
        tracing::info!(account_id = %account.id, "Switching active account");
        self.store.set_active_account(account).await;
        self.state.lock().await.hide_account_popup();
    }

    /// Sign-out from the account popup.
    ///
    /// Asks the session provider to sign out; only when that succeeds are
    /// the session and its accounts cleared from the store. A fetch still in
    /// flight for the old session is superseded.
    pub async fn sign_out(&self) -> Result<()> {
        let result = self
            .with_page_loader(async {
                self.sessions.sign_out().await?;
                self.store.clear_session().await;
                Ok::<(), MarqueeError>(())
            })
            .await;

        if let Err(ref e) = result {
            tracing::error!(error = %e, "Sign-out failed");
        }
        self.state.lock().await.hide_account_popup();
        result
    }

    // ============================================================================
    // Queries
    // ============================================================================

    pub async fn state(&self) -> NavbarState {
        self.state.lock().await.clone()
    }

    pub async fn render(&self) -> NavbarRender {
        let store = self.store.snapshot().await;
        let state = self.state.lock().await;
        NavbarRender::build(&state, &store)
    }
}
