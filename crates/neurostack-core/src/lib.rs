//! # NeuroStack Core Library
//!
//! This library answers one question: which supplements are due right now?
//! It holds a fixed protocol table and a pure resolution engine that filters
//! that table by time of day, weekend washout and cycle switches. The
//! `neurostack` CLI is a thin presentation layer over the same library.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable phases and items, built in or loaded from TOML
//! - **Engine**: pure resolution from a [`ResolutionContext`]; never reads
//!   the clock
//! - **Cycles**: Boron rotation and Ashwagandha defaults, resolved into a
//!   [`CycleState`] before each call
//! - **Checklist**: ephemeral intake marks owned by the presentation layer
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Catalog`]: protocol table
//! - [`ResolutionEngine`]: schedule resolution
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod checklist;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod safety;
pub mod storage;

pub use catalog::{Catalog, HourWindow, Item, Phase, PhaseTitle, SpecialCycle};
pub use checklist::{Checklist, ChecklistEntry, ChecklistSummary, CompletionKey};
pub use cycle::{BoronWeek, CycleSettings, CycleState};
pub use engine::{
    resolve, Advisory, DueItem, ExcludedItem, ExclusionReason, Mode, ResolutionContext,
    ResolutionEngine, ResolutionResult,
};
pub use error::{CatalogError, ConfigError, CoreError, InvalidInputError};
pub use storage::Config;
