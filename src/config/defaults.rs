//! Configuration default values
//!
//! This module contains all the default values for configuration options,
//! making them easily changeable in one central location.
use std::time::Duration;

// Cache defaults
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

// CLI defaults
pub const DEFAULT_CONFIG_FILE: &str = "badge.toml";
