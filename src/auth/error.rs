//! Authentication failures and their user-facing messages.

use std::fmt;

use thiserror::Error;

/// The closed set of ways an authentication call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    InvalidEmail,
    AlreadyInUse,
    WeakCredential,
    NotFound,
    DisabledAccount,
    Unexpected,
}

impl AuthErrorKind {
    /// Classifies a backend error code such as `auth/user-not-found`.
    ///
    /// Unrecognised codes are [`Unexpected`](Self::Unexpected). Wrong-password
    /// codes classify as [`NotFound`](Self::NotFound) so that sign-in never
    /// reveals whether an address is registered.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "auth/invalid-email" | "auth/missing-email" => AuthErrorKind::InvalidEmail,
            "auth/email-already-in-use" => AuthErrorKind::AlreadyInUse,
            "auth/weak-password" | "auth/missing-password" => AuthErrorKind::WeakCredential,
            "auth/user-not-found" | "auth/wrong-password" | "auth/invalid-credential" => {
                AuthErrorKind::NotFound
            }
            "auth/user-disabled" => AuthErrorKind::DisabledAccount,
            _ => AuthErrorKind::Unexpected,
        }
    }

    /// The message shown to the end user.
    pub fn user_message(self) -> &'static str {
        match self {
            AuthErrorKind::InvalidEmail => "Please enter a valid email address.",
            AuthErrorKind::AlreadyInUse => "An account with this email already exists.",
            AuthErrorKind::WeakCredential => "Password must be at least 6 characters.",
            AuthErrorKind::NotFound => "No account matches that email and password.",
            AuthErrorKind::DisabledAccount => "This account has been disabled.",
            AuthErrorKind::Unexpected => "Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

/// An authentication failure.
///
/// `Display` yields only the user-facing message. The raw backend code, when
/// there is one, is kept for logs via [`code`](Self::code).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct AuthError {
    kind: AuthErrorKind,
    code: Option<String>,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind) -> Self {
        Self { kind, code: None }
    }

    /// Builds an error from a raw backend code.
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        let kind = AuthErrorKind::from_code(&code);
        if kind == AuthErrorKind::Unexpected {
            log::warn!("unclassified auth error code: {}", code);
        }
        Self {
            kind,
            code: Some(code),
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl From<AuthErrorKind> for AuthError {
    fn from(kind: AuthErrorKind) -> Self {
        Self::new(kind)
    }
}
