use sha2::{Digest, Sha256};

/// SHA-256 of a session token, hex encoded. Stores only ever see this.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_consistency() {
        assert_eq!(hash_token("sid_123"), hash_token("sid_123"));
    }

    #[test]
    fn test_hash_token_different_inputs() {
        assert_ne!(hash_token("sid_1"), hash_token("sid_2"));
    }

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = hash_token("any");

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
