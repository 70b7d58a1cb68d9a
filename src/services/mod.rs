pub mod badge_cache;
pub mod badge_service;

pub use badge_cache::{BadgeCache, BadgeCacheBuilder, CacheStats, SweepTask};
pub use badge_service::BadgeService;
