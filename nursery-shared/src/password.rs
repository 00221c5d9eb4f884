//! Credential digests stored in `users.password_hash`.
//!
//! A digest is the lowercase hex SHA-256 of the UTF-8 bytes of the password,
//! with no salt and no key, so it is a pure function of the password and two
//! accounts sharing a password share a digest. The web application verifies
//! logins against exactly this format, which is why it is kept here.
//! Known issue: unsalted digests are open to precomputed-table attacks.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of a hex encoded digest.
pub const DIGEST_LEN: usize = 64;

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recomputes the digest of `password` and compares it with `stored`.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let expected = hash_password(password);
    expected.as_bytes().ct_eq(stored.as_bytes()).into()
}

/// True when `value` looks like a digest produced by [`hash_password`].
pub fn is_digest(value: &str) -> bool {
    value.len() == DIGEST_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST123_DIGEST: &str = "ecd71870d1963316a97e3ac3408c9835ad8cf0f3c1bc703527c30265534f75ae";

    #[test]
    fn known_digest_for_demo_password() {
        assert_eq!(hash_password("test123"), TEST123_DIGEST);
    }

    #[test]
    fn empty_password_hashes_to_sha256_of_nothing() {
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hashes_utf8_bytes() {
        assert_eq!(
            hash_password("héllo"),
            "3c48591d8d098a4538f5e013dfcf406e948eac4d3277b10bf614e295d6068179"
        );
    }

    #[test]
    fn deterministic_and_fixed_length() {
        for input in ["", "a", "test123", "une phrase plus longue avec des espaces", "🔐"] {
            let first = hash_password(input);
            assert_eq!(first, hash_password(input));
            assert_eq!(first.len(), DIGEST_LEN);
            assert!(is_digest(&first));
        }
    }

    #[test]
    fn distinct_inputs_give_distinct_digests() {
        assert_ne!(hash_password("test123"), hash_password("test124"));
        assert_ne!(hash_password("test123"), hash_password("Test123"));
    }

    #[test]
    fn verify_matches_only_the_same_password() {
        assert!(verify_password("test123", TEST123_DIGEST));
        assert!(!verify_password("test1234", TEST123_DIGEST));
        assert!(!verify_password("test123", &TEST123_DIGEST.to_uppercase()));
        assert!(!verify_password("test123", ""));
    }

    #[test]
    fn rejects_malformed_digests() {
        assert!(!is_digest(""));
        assert!(!is_digest(&TEST123_DIGEST[..63]));
        assert!(!is_digest(&TEST123_DIGEST.to_uppercase()));
        assert!(!is_digest("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"));
    }
}
