//! # Session Service
//!
//! Volunteer authentication and the persisted login session. Login checks
//! credentials against the stored roster and records the active volunteer;
//! the session survives restarts until an explicit logout.

use anyhow::Result;
use tracing::{info, warn};

use crate::backend::domain::commands::session::{
    LoginCommand, LoginResult, RegisterVolunteerCommand, RegisterVolunteerResult,
};
use crate::backend::domain::models::volunteer::Volunteer;
use crate::backend::storage::volunteer_repository::VolunteerRepository;

/// Service for volunteer accounts and the active session
#[derive(Clone)]
pub struct SessionService {
    volunteer_repository: VolunteerRepository,
}

impl SessionService {
    /// Create a new SessionService
    pub fn new(volunteer_repository: VolunteerRepository) -> Self {
        Self {
            volunteer_repository,
        }
    }

    /// Attempt to log a volunteer in
    ///
    /// On success the volunteer becomes the active session. A failed
    /// attempt reports why but never touches an existing session, and the
    /// message does not reveal whether the username or the password was
    /// the wrong half.
    pub async fn login(&self, command: LoginCommand) -> Result<LoginResult> {
        info!("Login attempt for username: {}", command.username);

        let volunteer = match self
            .volunteer_repository
            .find_by_username(&command.username)
            .await?
        {
            Some(volunteer) => volunteer,
            None => {
                warn!("Login failed: unknown username {}", command.username);
                return Ok(LoginResult {
                    success: false,
                    message: "Invalid username or password".to_string(),
                    volunteer: None,
                });
            }
        };

        if !volunteer.verify_password(&command.password) {
            warn!("Login failed: wrong password for {}", command.username);
            return Ok(LoginResult {
                success: false,
                message: "Invalid username or password".to_string(),
                volunteer: None,
            });
        }

        self.volunteer_repository.set_session(&volunteer.id).await?;
        info!("Login succeeded for {}", volunteer.username);

        Ok(LoginResult {
            success: true,
            message: "Login successful".to_string(),
            volunteer: Some(volunteer),
        })
    }

    /// End the active session
    ///
    /// Logging out with no active session is not an error.
    pub async fn logout(&self) -> Result<()> {
        info!("Logging out current volunteer");
        self.volunteer_repository.clear_session().await
    }

    /// Register a new volunteer account
    ///
    /// Registration does not log the new volunteer in.
    pub async fn register(
        &self,
        command: RegisterVolunteerCommand,
    ) -> Result<RegisterVolunteerResult> {
        info!("Registering volunteer: {}", command.username);

        let username = command.username.trim().to_string();
        let full_name = command.full_name.trim().to_string();

        if username.is_empty() || command.password.is_empty() || full_name.is_empty() {
            return Ok(RegisterVolunteerResult {
                success: false,
                message: "Username, password, and full name are all required".to_string(),
            });
        }

        let volunteer = Volunteer::new(&username, &command.password, &full_name);
        if !self.volunteer_repository.add_volunteer(&volunteer).await? {
            warn!("Registration rejected: username {} is taken", username);
            return Ok(RegisterVolunteerResult {
                success: false,
                message: "Username is already taken".to_string(),
            });
        }

        info!("Registered volunteer: {}", username);
        Ok(RegisterVolunteerResult {
            success: true,
            message: "Volunteer registered successfully".to_string(),
        })
    }

    /// The volunteer behind the persisted session, if any
    pub async fn current_volunteer(&self) -> Result<Option<Volunteer>> {
        self.volunteer_repository.current_volunteer().await
    }

    /// Look up a volunteer by id
    pub async fn get_volunteer(&self, volunteer_id: &str) -> Result<Option<Volunteer>> {
        self.volunteer_repository.find_by_id(volunteer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::file_store::FileStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn setup_test() -> (SessionService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(FileStore::new(temp_dir.path()).expect("Failed to create store"));
        let repository = VolunteerRepository::new(store)
            .await
            .expect("Failed to create repository");
        (SessionService::new(repository), temp_dir)
    }

    fn login(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_seeded_account() {
        let (service, _temp_dir) = setup_test().await;

        let result = service
            .login(login("ahmed", "123456"))
            .await
            .expect("Login errored");

        assert!(result.success);
        let volunteer = result.volunteer.expect("Expected volunteer in result");
        assert_eq!(volunteer.username, "ahmed");
        assert_eq!(volunteer.full_name, "Ahmed Mohamed");

        let current = service
            .current_volunteer()
            .await
            .expect("Failed to read session")
            .expect("Expected an active session");
        assert_eq!(current.id, volunteer.id);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_alone() {
        let (service, _temp_dir) = setup_test().await;

        service
            .login(login("fatima", "123456"))
            .await
            .expect("Login errored");

        // Wrong password
        let result = service
            .login(login("fatima", "wrong"))
            .await
            .expect("Login errored");
        assert!(!result.success);
        assert!(result.volunteer.is_none());

        // Unknown username
        let result = service
            .login(login("nobody", "123456"))
            .await
            .expect("Login errored");
        assert!(!result.success);

        // fatima is still logged in
        let current = service
            .current_volunteer()
            .await
            .unwrap()
            .expect("Session should survive failed attempts");
        assert_eq!(current.username, "fatima");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (service, _temp_dir) = setup_test().await;

        service.login(login("ahmed", "123456")).await.unwrap();
        service.logout().await.expect("Logout failed");

        assert!(service.current_volunteer().await.unwrap().is_none());

        // Logging out again is fine
        service.logout().await.expect("Logout failed");
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let (service, _temp_dir) = setup_test().await;

        let result = service
            .register(RegisterVolunteerCommand {
                username: "laila".to_string(),
                password: "secret99".to_string(),
                full_name: "Laila Hussein".to_string(),
            })
            .await
            .expect("Register errored");
        assert!(result.success);

        // Registration alone does not start a session
        assert!(service.current_volunteer().await.unwrap().is_none());

        let result = service.login(login("laila", "secret99")).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_register_rejects_taken_username() {
        let (service, _temp_dir) = setup_test().await;

        let result = service
            .register(RegisterVolunteerCommand {
                username: "ahmed".to_string(),
                password: "another".to_string(),
                full_name: "Another Ahmed".to_string(),
            })
            .await
            .expect("Register errored");

        assert!(!result.success);
        assert_eq!(result.message, "Username is already taken");

        // The original account and password still work
        let result = service.login(login("ahmed", "123456")).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields() {
        let (service, _temp_dir) = setup_test().await;

        let result = service
            .register(RegisterVolunteerCommand {
                username: "   ".to_string(),
                password: "secret99".to_string(),
                full_name: "Blank User".to_string(),
            })
            .await
            .expect("Register errored");

        assert!(!result.success);
    }
}
