//! Configuration module for Spendora
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendoraPaths;
pub use settings::Settings;
