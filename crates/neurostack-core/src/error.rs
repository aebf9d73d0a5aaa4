//! Core error types for neurostack-core.
//!
//! This module defines the error hierarchy using thiserror. Resolution errors
//! are contract violations by the caller; catalog errors surface when a
//! catalog is built or loaded, never per resolution call.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for neurostack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Hour or weekday outside its valid range.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Catalog item references a cycle the engine does not know.
    #[error("Unknown cycle reference '{cycle}' on item '{item}'")]
    UnknownCycleReference { item: String, cycle: String },

    /// Catalog shape errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Out-of-range resolution inputs. Never clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("hour {0} is outside 0..=23")]
    Hour(i32),

    #[error("weekday {0} is outside 0..=6 (Monday = 0)")]
    Weekday(i32),

    #[error("date {date} is before the cycle anchor {anchor}")]
    BeforeAnchor {
        date: chrono::NaiveDate,
        anchor: chrono::NaiveDate,
    },
}

/// Catalog validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Window with start >= end or end > 24
    #[error("Phase '{phase}' has an invalid window [{start}, {end})")]
    InvalidWindow { phase: String, start: u8, end: u8 },

    /// Two distinct windows share hours
    #[error("Windows of '{first}' and '{second}' overlap")]
    OverlappingWindows { first: String, second: String },

    /// Hour not covered by any window
    #[error("Hour {0} is not covered by any phase window")]
    UncoveredHour(u8),

    /// Same item name twice within one phase
    #[error("Item '{item}' appears more than once in phase '{phase}'")]
    DuplicateItem { phase: String, item: String },

    /// Same cycle tag on more than one item of a phase
    #[error("Cycle '{cycle}' tags more than one item in phase '{phase}'")]
    DuplicateCycleTag { phase: String, cycle: String },

    /// Same phase title declared twice
    #[error("Phase '{0}' is declared more than once")]
    DuplicatePhase(String),

    /// Unrecognised phase title in a catalog file
    #[error("Unknown phase title: {0}")]
    UnknownPhase(String),

    #[error("Catalog has no phases")]
    Empty,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory unavailable
    #[error("Configuration directory unavailable: {0}")]
    NoDataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
