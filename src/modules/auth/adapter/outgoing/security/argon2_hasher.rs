use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::shared::config::Argon2Settings;

/// Argon2id hasher. Hashing runs on the blocking pool so request workers
/// are never stalled by the KDF.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn from_settings(settings: &Argon2Settings) -> Result<Self, argon2::Error> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )?;

        Ok(Self { params })
    }

    /// Cheapest parameters argon2 accepts. Tests only.
    #[cfg(test)]
    pub fn fast() -> Self {
        Self {
            params: Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params"),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Parameters come from the encoded hash itself.
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hasher = Argon2Hasher::fast();

        let hashed = hasher.hash_password("secret1").await.unwrap();

        assert!(hashed.starts_with("$argon2id$"));
        assert!(hasher.verify_password("secret1", &hashed).await.unwrap());
        assert!(!hasher.verify_password("secret2", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_different_salts() {
        let hasher = Argon2Hasher::fast();

        let a = hasher.hash_password("secret1").await.unwrap();
        let b = hasher.hash_password("secret1").await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_hash() {
        let hasher = Argon2Hasher::fast();

        let result = hasher.verify_password("secret1", "not-a-phc-string").await;

        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_verify_tampered_params() {
        let hasher = Argon2Hasher::fast();
        let valid_hash = hasher.hash_password("password123").await.unwrap();

        let mut parts: Vec<&str> = valid_hash.split('$').collect();
        parts[3] = "m=0,t=0,p=0";
        let tampered_hash = parts.join("$");

        let result = hasher.verify_password("password123", &tampered_hash).await;

        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[test]
    fn test_from_settings_rejects_bad_params() {
        let settings = Argon2Settings {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };

        assert!(Argon2Hasher::from_settings(&settings).is_err());
    }
}
