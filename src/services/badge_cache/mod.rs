//! In-memory badge cache with time-to-live expiry
//!
//! Rendered badges are kept for a fixed TTL. Expiry happens two ways:
//!
//! - lazily on read: an expired entry is reported as a miss but left in place
//! - periodically: a background sweep physically removes expired entries
//!
//! Reads share a read lock; writes and sweeps take the write lock.

pub mod entry;
pub mod service;

pub use entry::BadgeCacheEntry;
pub use service::{BadgeCache, BadgeCacheBuilder, CacheStats, SweepTask};
