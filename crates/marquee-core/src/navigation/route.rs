use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::Account;
use crate::session::Session;

/// Why a route could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationError {
    #[error("no signed-in session")]
    MissingSession,

    #[error("no active account selected")]
    MissingActiveAccount,

    #[error("'{segment}' is not a valid path segment")]
    InvalidSegment { segment: String },
}

/// A destination reachable from the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Browse,
    Tv,
    Movies,
    MyList { user_id: String, account_id: String },
}

impl Route {
    /// Builds the "My List" route for the session user and active account.
    ///
    /// Fails closed: both identifiers must be present and each must be a
    /// single non-empty path segment.
    pub fn my_list(
        session: Option<&Session>,
        active_account: Option<&Account>,
    ) -> Result<Self, NavigationError> {
        let session = session.ok_or(NavigationError::MissingSession)?;
        let account = active_account.ok_or(NavigationError::MissingActiveAccount)?;

        Ok(Self::MyList {
            user_id: validate_segment(&session.user_id)?.to_string(),
            account_id: validate_segment(&account.id)?.to_string(),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Self::Browse => "/browse".to_string(),
            Self::Tv => "/tv".to_string(),
            Self::Movies => "/movies".to_string(),
            Self::MyList {
                user_id,
                account_id,
            } => format!("/my-list/{user_id}/{account_id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Checks that `segment` can be placed in a URL path as exactly one segment.
pub fn validate_segment(segment: &str) -> Result<&str, NavigationError> {
    let invalid = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control());

    if invalid {
        Err(NavigationError::InvalidSegment {
            segment: segment.to_string(),
        })
    } else {
        Ok(segment)
    }
}
