//! Admin session gate.

/// Process-local admin gate.
///
/// A convenience gate, not an authentication system: one fixed secret,
/// exact comparison after trimming, unlimited retries, nothing hashed and
/// nothing persisted. Session state resets when the process exits or on
/// explicit [`AdminGuard::logout`].
#[derive(Debug, Clone)]
pub struct AdminGuard {
    secret: String,
    active: bool,
}

impl AdminGuard {
    /// Create a guard with the configured secret. Sessions start inactive.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            active: false,
        }
    }

    /// Check the submitted secret without touching session state.
    ///
    /// The submitted value is trimmed before the exact string comparison.
    pub fn authenticate(&self, submitted: &str) -> bool {
        submitted.trim() == self.secret
    }

    /// Check the submitted secret and activate the session on a match.
    ///
    /// Returns whether this attempt succeeded; a failed attempt leaves an
    /// already-active session active.
    pub fn login(&mut self, submitted: &str) -> bool {
        let ok = self.authenticate(submitted);
        if ok {
            self.active = true;
        }
        ok
    }

    /// Explicitly leave admin mode.
    pub fn logout(&mut self) {
        self.active = false;
    }

    /// Check if an admin session is active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_secret_accepted() {
        let mut guard = AdminGuard::new("ya102030");
        assert!(guard.login("ya102030"));
        assert!(guard.is_active());
    }

    #[test]
    fn test_wrong_secret_rejected_without_state_change() {
        let mut guard = AdminGuard::new("ya102030");
        assert!(!guard.login("wrong"));
        assert!(!guard.is_active());
    }

    #[test]
    fn test_submitted_value_is_trimmed() {
        let guard = AdminGuard::new("ya102030");
        assert!(guard.authenticate("  ya102030  "));
        assert!(!guard.authenticate("ya 102030"));
    }

    #[test]
    fn test_logout_resets_session() {
        let mut guard = AdminGuard::new("ya102030");
        guard.login("ya102030");
        guard.logout();
        assert!(!guard.is_active());
    }

    #[test]
    fn test_retry_after_failure_is_unlimited() {
        let mut guard = AdminGuard::new("ya102030");
        assert!(!guard.login("wrong"));
        assert!(!guard.login("still wrong"));
        assert!(guard.login("ya102030"));
    }
}
