use async_trait::async_trait;

use super::model::Account;
use crate::error::Result;

/// Remote read side of the account collection.
///
/// Implementations return the accounts of `user_id` in display order.
/// An empty `Vec` is a valid answer and must not be turned into an error.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn list_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
}
