//! Contract for the authentication backend used by account screens.
//!
//! The theme core never calls into this module. Screens that create
//! accounts, sign in or reset passwords program against [`AuthBackend`] and
//! present failures through [`AuthError`]'s user-facing `Display`, so raw
//! backend codes never reach the end user.

mod error;
mod memory;

pub use error::{AuthError, AuthErrorKind};
pub use memory::MemoryBackend;

use serde::{Deserialize, Serialize};

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Opaque identifier of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Profile details collected at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: String,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
}

/// Account operations offered by the backend.
pub trait AuthBackend {
    fn create_account(
        &mut self,
        email: &str,
        password: &str,
        profile: Profile,
    ) -> Result<UserId, AuthError>;

    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Requests a reset link for `email`; delivery is the backend's concern.
    fn request_password_reset(&mut self, email: &str) -> Result<(), AuthError>;
}

/// Loose structural email check: `something@something.something`, no spaces.
pub fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("  ada@mail.example.org "));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("ada"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("a da@example.com"));
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = Session {
            user_id: UserId("u1".into()),
            email: "ada@example.com".into(),
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["userId"], "u1");
    }
}
