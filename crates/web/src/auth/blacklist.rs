//! Revoked token ids.
//!
//! Held in memory only: a restart forgets every revocation. Entries are kept
//! until the token they name would have expired anyway.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct TokenBlacklist {
    entries: RwLock<HashMap<Uuid, i64>>,
}

impl TokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke the token with id `jti` until `expires_at` (unix seconds).
    pub fn revoke(&self, jti: Uuid, expires_at: i64) {
        let now = Utc::now().timestamp();
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        entries.retain(|_, exp| *exp > now);
        entries.insert(jti, expires_at);
    }

    pub fn is_revoked(&self, jti: &Uuid) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(jti)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(blacklist: &TokenBlacklist) -> usize {
        blacklist.entries.read().unwrap().len()
    }

    #[test]
    fn test_revoked_id_is_reported() {
        let blacklist = TokenBlacklist::new();
        let jti = Uuid::new_v4();

        assert!(!blacklist.is_revoked(&jti));
        blacklist.revoke(jti, Utc::now().timestamp() + 60);
        assert!(blacklist.is_revoked(&jti));
        assert!(!blacklist.is_revoked(&Uuid::new_v4()));
    }

    #[test]
    fn test_expired_entries_are_purged_on_insert() {
        let blacklist = TokenBlacklist::new();
        let now = Utc::now().timestamp();
        let stale = Uuid::new_v4();
        let live = Uuid::new_v4();

        blacklist.revoke(stale, now - 10);
        assert_eq!(len(&blacklist), 1);

        blacklist.revoke(live, now + 60);
        assert_eq!(len(&blacklist), 1);
        assert!(!blacklist.is_revoked(&stale));
        assert!(blacklist.is_revoked(&live));
    }
}
