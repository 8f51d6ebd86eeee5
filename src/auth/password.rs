use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Failed to hash password")]
    HashingFailed(#[source] bcrypt::BcryptError),
    #[error("Failed to verify password")]
    VerificationFailed(#[source] bcrypt::BcryptError),
    #[error("Password worker failed")]
    WorkerFailed(#[source] tokio::task::JoinError),
}

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash(password, DEFAULT_COST).map_err(PasswordError::HashingFailed)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    verify(password, hash).map_err(PasswordError::VerificationFailed)
}

/// `hash_password` on the blocking pool, off the async workers
pub async fn hash_password_blocking(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(PasswordError::WorkerFailed)?
}

/// `verify_password` on the blocking pool, off the async workers
pub async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(PasswordError::WorkerFailed)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "password123";
        let hash = hash_password(password).unwrap();

        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("incorrectpassword", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("password123", "not-a-bcrypt-hash"),
            Err(PasswordError::VerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_blocking_pool_variants_agree() {
        let hash = hash_password_blocking("password123".to_string()).await.unwrap();

        assert!(verify_password("password123", &hash).unwrap());
        assert!(verify_password_blocking("password123".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password_blocking("wrong".to_string(), hash).await.unwrap());
    }
}
