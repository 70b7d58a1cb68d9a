//! Centralized error handling for the badge service
//!
//! # Error Categories
//!
//! - **Configuration Errors**: unreadable, unparsable or invalid config files
//! - **Cache Errors**: invalid cache settings, sweep task failures
//!
//! # Usage
//!
//! ```rust
//! use modrinth_badge::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("ttl must be greater than zero"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for cache Results
pub type CacheResult<T> = Result<T, CacheError>;
