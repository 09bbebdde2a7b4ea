//! Salted password hashing.
//!
//! Stored values are bcrypt strings (`$2b$<cost>$<salt><hash>`): the salt is
//! generated fresh for every call to [`set_password`] and travels with the hash,
//! so verification needs nothing but the stored string.

use crate::error::Result;

/// Work factor used when nothing else is configured.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Longest password bcrypt hashes in full: 72 bytes of input including the
/// terminating NUL it appends.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Hash `plaintext` with a newly generated salt.
///
/// Input longer than [`MAX_PASSWORD_BYTES`] is an error rather than being cut
/// short, so two passwords sharing a long prefix never hash alike.
pub fn set_password(plaintext: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::non_truncating_hash(plaintext, cost)?)
}

/// Check `candidate` against a stored hash.
///
/// Fails closed: an empty or malformed stored value never matches.
pub fn check_password(stored: &str, candidate: &str) -> bool {
    if stored.is_empty() || !stored.starts_with('$') {
        return false;
    }

    if candidate.len() > MAX_PASSWORD_BYTES {
        return false;
    }

    match bcrypt::non_truncating_verify(candidate, stored) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_round_trip_accepts_same_password() {
        let stored = set_password("pw12345", TEST_COST).unwrap();
        assert!(check_password(&stored, "pw12345"));
    }

    #[test]
    fn test_rejects_different_password() {
        let stored = set_password("pw12345", TEST_COST).unwrap();
        assert!(!check_password(&stored, "pw12346"));
        assert!(!check_password(&stored, ""));
    }

    #[test]
    fn test_rejects_password_sharing_long_prefix() {
        let base = "a".repeat(MAX_PASSWORD_BYTES);
        let stored = set_password(&base, TEST_COST).unwrap();

        assert!(check_password(&stored, &base));
        assert!(!check_password(&stored, &format!("{base}X")));
        assert!(!check_password(&stored, &format!("{base}totally-different")));
    }

    #[test]
    fn test_refuses_to_hash_overlong_password() {
        let long = format!("{}X", "a".repeat(MAX_PASSWORD_BYTES));
        assert!(set_password(&long, TEST_COST).is_err());
    }

    #[test]
    fn test_fresh_salt_per_hash() {
        let first = set_password("same-password", TEST_COST).unwrap();
        let second = set_password("same-password", TEST_COST).unwrap();
        assert_ne!(first, second);
        assert!(check_password(&first, "same-password"));
        assert!(check_password(&second, "same-password"));
    }

    #[test]
    fn test_fails_closed_on_missing_or_malformed_hash() {
        assert!(!check_password("", "anything"));
        assert!(!check_password("no-separator-here", "no-separator-here"));
        assert!(!check_password("$2b$04$truncated", "anything"));
    }
}
