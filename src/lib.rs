//! Spendora - command-line personal expense tracker
//!
//! This library provides the core functionality for the Spendora expense
//! tracker: recording expenses against categories, listing them with filters,
//! and summarizing spending by category, month or year.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions, periods)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `reports`: Spending summaries
//! - `display`: Plain-text formatting
//! - `export`: CSV, JSON and YAML export
//! - `audit`: Audit logging system
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendora::config::{paths::SpendoraPaths, settings::Settings};
//! use spendora::storage::Storage;
//!
//! let paths = SpendoraPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SpendoraError;
