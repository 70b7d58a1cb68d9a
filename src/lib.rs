pub mod badge;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod utils;

pub use badge::{BadgeRequest, generate_badge};
