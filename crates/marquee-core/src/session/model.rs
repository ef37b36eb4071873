use serde::{Deserialize, Serialize};

/// Authenticated identity of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique id of the signed-in user (`uid` in the auth provider's payload).
    #[serde(rename = "uid")]
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_uid_wire_name() {
        let session: Session = serde_json::from_str(r#"{"uid":"u1"}"#).unwrap();
        assert_eq!(session.user_id(), "u1");
    }
}
