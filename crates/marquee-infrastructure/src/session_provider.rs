//! In-memory session provider.
//!
//! Stands in for the external authentication provider when the session is
//! known up front (command line, tests, embedding front ends that already
//! resolved the user).

use async_trait::async_trait;
use marquee_core::Result;
use marquee_core::session::{Session, SessionProvider};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemorySessionProvider {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    pub async fn sign_in(&self, session: Session) {
        *self.session.write().await = Some(session);
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(session) = self.session.write().await.take() {
            tracing::info!(user_id = %session.user_id, "Signed out");
        }
        Ok(())
    }
}
