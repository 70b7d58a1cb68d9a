//! Cache entry with an absolute expiry

use chrono::{DateTime, Utc};

/// A rendered badge and the instant it stops being served.
#[derive(Debug, Clone)]
pub struct BadgeCacheEntry {
    pub document: String,
    pub expires_at: DateTime<Utc>,
}

impl BadgeCacheEntry {
    pub fn new(document: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            document,
            expires_at,
        }
    }

    /// Live strictly before `expires_at`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
