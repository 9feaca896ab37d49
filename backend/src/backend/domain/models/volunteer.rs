use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// A registered field volunteer
///
/// Credentials are stored as a salted SHA-256 digest; the plaintext
/// password never leaves the login/register call frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    /// Volunteer ID in format: "volunteer::<uuid-v4>"
    pub id: String,
    /// Unique across the roster, compared case-sensitively
    pub username: String,
    /// Hex digest of SHA-256(salt || password)
    pub password_hash: String,
    pub salt: String,
    pub full_name: String,
}

impl Volunteer {
    /// Create a new volunteer with a fresh id and salted password hash
    pub fn new(username: &str, password: &str, full_name: &str) -> Self {
        let salt = Uuid::new_v4().to_string();
        Self {
            id: Self::generate_id(),
            username: username.to_string(),
            password_hash: Self::hash_password(&salt, password),
            salt,
            full_name: full_name.to_string(),
        }
    }

    pub fn generate_id() -> String {
        format!("volunteer::{}", Uuid::new_v4())
    }

    /// Check a candidate password against the stored digest in constant time
    pub fn verify_password(&self, candidate: &str) -> bool {
        let candidate_hash = Self::hash_password(&self.salt, candidate);
        bool::from(
            candidate_hash
                .as_bytes()
                .ct_eq(self.password_hash.as_bytes()),
        )
    }

    fn hash_password(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_password() {
        let volunteer = Volunteer::new("ahmed", "123456", "Ahmed Mohamed");

        assert!(volunteer.verify_password("123456"));
        assert!(!volunteer.verify_password("654321"));
        assert!(!volunteer.verify_password(""));
    }

    #[test]
    fn test_same_password_hashes_differently_per_volunteer() {
        let first = Volunteer::new("ahmed", "123456", "Ahmed Mohamed");
        let second = Volunteer::new("fatima", "123456", "Fatima Ali");

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.password_hash, second.password_hash);
    }

    #[test]
    fn test_generate_id_format() {
        let id = Volunteer::generate_id();
        assert!(id.starts_with("volunteer::"));
    }

    #[test]
    fn test_plaintext_never_appears_in_snapshot() {
        let volunteer = Volunteer::new("ahmed", "123456", "Ahmed Mohamed");
        let json = serde_json::to_string(&volunteer).unwrap();
        assert!(!json.contains("123456"));
        assert!(json.contains("passwordHash"));
    }
}
