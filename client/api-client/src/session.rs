use std::sync::Mutex;

use crate::models::UserIdentity;

/// Client-side holder of the current user's identity and auth token.
///
/// One owner per running instance; shared via `Arc` and passed explicitly to
/// the HTTP client factory. Token reads and session writes may interleave
/// across concurrent requests; the mutex keeps each access atomic.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: Mutex<SessionState>,
}

#[derive(Debug, Default, Clone)]
struct SessionState {
    user: Option<UserIdentity>,
    token: Option<String>,
    logged_in: bool,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user(&self, user: UserIdentity) {
        self.lock().user = Some(user);
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.lock().token = Some(token.into());
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        self.lock().logged_in = logged_in;
    }

    pub fn user(&self) -> Option<UserIdentity> {
        self.lock().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.lock().logged_in
    }

    /// Drop identity, token and the logged-in flag
    pub fn clear(&self) {
        *self.lock() = SessionState::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().expect("Session state lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity() -> UserIdentity {
        UserIdentity {
            id: Uuid::new_v4(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_session_starts_empty() {
        let session = SessionContext::new();
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_set_and_clear() {
        let session = SessionContext::new();
        session.set_user(identity());
        session.set_token("tok");
        session.set_logged_in(true);

        assert_eq!(session.token().as_deref(), Some("tok"));
        assert!(session.is_logged_in());
        assert_eq!(session.user().unwrap().firstname, "Ada");

        session.clear();
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_logged_in());
    }
}
