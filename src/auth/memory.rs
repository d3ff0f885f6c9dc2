//! In-process auth backend for previews and tests.

use std::collections::HashMap;

use super::{
    looks_like_email, AuthBackend, AuthError, AuthErrorKind, Profile, Session, UserId,
    MIN_PASSWORD_LEN,
};

#[derive(Debug, Clone)]
struct Account {
    id: UserId,
    password: String,
    profile: Profile,
    disabled: bool,
}

/// An [`AuthBackend`] that keeps accounts in memory for the life of the value.
///
/// Emails are matched case-insensitively. Password resets are recorded but
/// not delivered.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    accounts: HashMap<String, Account>,
    resets: Vec<String>,
    next_id: u64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an account as disabled; returns `false` if no such account exists.
    pub fn disable(&mut self, email: &str) -> bool {
        match self.accounts.get_mut(&normalize(email)) {
            Some(account) => {
                account.disabled = true;
                true
            }
            None => false,
        }
    }

    pub fn profile(&self, email: &str) -> Option<&Profile> {
        self.accounts.get(&normalize(email)).map(|a| &a.profile)
    }

    /// Emails for which a reset was requested, in request order.
    pub fn reset_requests(&self) -> &[String] {
        &self.resets
    }

    fn checked_email(email: &str) -> Result<String, AuthError> {
        if looks_like_email(email) {
            Ok(normalize(email))
        } else {
            Err(AuthErrorKind::InvalidEmail.into())
        }
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AuthBackend for MemoryBackend {
    fn create_account(
        &mut self,
        email: &str,
        password: &str,
        profile: Profile,
    ) -> Result<UserId, AuthError> {
        let email = Self::checked_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthErrorKind::WeakCredential.into());
        }
        if self.accounts.contains_key(&email) {
            return Err(AuthErrorKind::AlreadyInUse.into());
        }

        self.next_id += 1;
        let id = UserId(format!("user-{}", self.next_id));
        log::debug!("created account {}", id);
        self.accounts.insert(
            email,
            Account {
                id: id.clone(),
                password: password.to_string(),
                profile,
                disabled: false,
            },
        );
        Ok(id)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = Self::checked_email(email)?;
        let account = self
            .accounts
            .get(&email)
            .filter(|a| a.password == password)
            .ok_or_else(|| AuthError::new(AuthErrorKind::NotFound))?;
        if account.disabled {
            return Err(AuthErrorKind::DisabledAccount.into());
        }
        Ok(Session {
            user_id: account.id.clone(),
            email,
        })
    }

    fn request_password_reset(&mut self, email: &str) -> Result<(), AuthError> {
        let email = Self::checked_email(email)?;
        if !self.accounts.contains_key(&email) {
            return Err(AuthErrorKind::NotFound.into());
        }
        self.resets.push(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_with_ada() -> MemoryBackend {
        let mut backend = MemoryBackend::new();
        backend
            .create_account(
                "Ada@Example.com",
                "analytical",
                Profile {
                    display_name: "Ada".into(),
                },
            )
            .unwrap();
        backend
    }

    #[test]
    fn test_create_then_sign_in() {
        let mut backend = backend_with_ada();
        let session = backend.sign_in("ada@example.com", "analytical").unwrap();
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.user_id, UserId("user-1".into()));
        assert_eq!(backend.profile("ADA@example.com").unwrap().display_name, "Ada");
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let mut backend = backend_with_ada();
        let kind = |r: Result<UserId, AuthError>| r.unwrap_err().kind();

        assert_eq!(
            kind(backend.create_account("not-an-email", "secret1", Profile::default())),
            AuthErrorKind::InvalidEmail
        );
        assert_eq!(
            kind(backend.create_account("bob@example.com", "12345", Profile::default())),
            AuthErrorKind::WeakCredential
        );
        assert_eq!(
            kind(backend.create_account("ada@example.com", "another1", Profile::default())),
            AuthErrorKind::AlreadyInUse
        );
    }

    #[test]
    fn test_wrong_password_and_unknown_user_look_the_same() {
        let mut backend = backend_with_ada();
        let wrong = backend.sign_in("ada@example.com", "nope").unwrap_err();
        let unknown = backend.sign_in("bob@example.com", "analytical").unwrap_err();
        assert_eq!(wrong.kind(), AuthErrorKind::NotFound);
        assert_eq!(wrong, unknown);
    }

    #[test]
    fn test_disabled_account() {
        let mut backend = backend_with_ada();
        assert!(backend.disable("ada@example.com"));
        assert!(!backend.disable("bob@example.com"));
        assert_eq!(
            backend.sign_in("ada@example.com", "analytical").unwrap_err().kind(),
            AuthErrorKind::DisabledAccount
        );
    }

    #[test]
    fn test_password_reset() {
        let mut backend = backend_with_ada();
        backend.request_password_reset(" ada@example.com ").unwrap();
        assert_eq!(
            backend.request_password_reset("bob@example.com").unwrap_err().kind(),
            AuthErrorKind::NotFound
        );
        assert_eq!(
            backend.request_password_reset("bob").unwrap_err().kind(),
            AuthErrorKind::InvalidEmail
        );
        assert_eq!(backend.reset_requests(), ["ada@example.com".to_string()]);
    }
}
