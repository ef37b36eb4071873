use async_trait::async_trait;

use super::model::Session;
use crate::error::Result;

/// External authentication collaborator.
///
/// Sign-in happens elsewhere; Marquee only reads the current session and
/// requests sign-out from the account popup.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the current session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Option<Session>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<()>;
}
