use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domain::models::user::User;
use crate::storage::traits::SessionStorage;

/// Mock authentication: at most one parent is signed in at a time
#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn SessionStorage>,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionStorage>) -> Self {
        Self { sessions }
    }

    /// Replace the current user with the mock parent profile for `email`
    pub fn login(&self, email: &str) -> Result<User> {
        info!("Logging in parent with email {}", email);
        let user = User::mock_profile(email);
        self.sessions.set_current_user(Some(user.clone()))?;
        Ok(user)
    }

    pub fn logout(&self) -> Result<()> {
        info!("Logging out current parent");
        self.sessions.set_current_user(None)
    }

    /// Signed-in parent, `None` when nobody is authenticated
    pub fn current_user(&self) -> Result<Option<User>> {
        self.sessions.current_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{MemoryConnection, SessionRepository};

    fn setup_test() -> SessionService {
        SessionService::new(Arc::new(SessionRepository::new(MemoryConnection::new())))
    }

    #[test]
    fn test_login_sets_mock_profile_with_email() {
        let service = setup_test();
        assert!(service.current_user().unwrap().is_none());

        let user = service.login("parent@example.com").expect("Failed to log in");
        assert_eq!(user.email, "parent@example.com");
        assert_eq!(user.id, "p1");
        assert_eq!(user.children, vec!["c1".to_string(), "c2".to_string()]);

        assert_eq!(service.current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_second_login_replaces_user() {
        let service = setup_test();
        service.login("first@example.com").unwrap();
        service.login("second@example.com").unwrap();

        let user = service.current_user().unwrap().unwrap();
        assert_eq!(user.email, "second@example.com");
    }

    #[test]
    fn test_logout_clears_user() {
        let service = setup_test();
        service.login("parent@example.com").unwrap();
        service.logout().unwrap();

        assert!(service.current_user().unwrap().is_none());

        // logging out twice is harmless
        service.logout().unwrap();
    }
}
