//! Explicit user session
//!
//! The client holds an optional `Session` instead of reading a user id from
//! ambient process-wide storage. Operations scoped to the current user fail
//! fast with `ApiError::NotLoggedIn` when no session is attached.

/// Identity of the logged-in user, attached to an `ApiClient`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Read the session from `TREBLE_USER_ID`, if set and non-empty
    pub fn from_env() -> Option<Self> {
        let user_id = std::env::var("TREBLE_USER_ID").ok()?;
        if user_id.is_empty() {
            return None;
        }
        Some(Self::new(user_id))
    }
}
