//! Account domain model.
//!
//! An account is one of several named profiles under a signed-in user
//! (e.g. a "Kids" profile).

use serde::{Deserialize, Serialize};

/// A profile belonging to the signed-in user.
///
/// Field names follow the account API's JSON (`_id`, `avatarUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(
        rename = "avatarUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

/// Response body of `GET /api/account/get-all-accounts/{userId}`.
///
/// `data` may be missing or `null`; both read as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountsEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Account>>,
}

impl AccountsEnvelope {
    pub fn into_accounts(self) -> Vec<Account> {
        self.data.unwrap_or_default()
    }
}

/// Result of one account-list fetch as seen by the store's callers.
///
/// An empty list is deliberately its own case rather than an error: the
/// store keeps its prior collection for both `Empty` and `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The remote returned at least one account; the store now holds them.
    Loaded(Vec<Account>),
    /// The remote returned no accounts.
    Empty,
    /// The request or its decoding failed.
    Failed(String),
    /// The session changed while the request was in flight; the answer was
    /// dropped without touching the store.
    Superseded,
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
