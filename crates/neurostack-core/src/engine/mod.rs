//! Schedule resolution engine.
//!
//! Pure functions over an immutable [`Catalog`]: given an hour, a weekday and
//! the cycle switches, decide which items are due and which advisories apply.
//! Nothing here reads the clock; callers build a [`ResolutionContext`] once
//! and pass it in, so resolving the same context always yields the same
//! [`ResolutionResult`].

mod filter;
mod mode;
mod phase;
mod warnings;

pub use filter::{exclusion_reason, filter_items, partition_items, ExclusionReason};
pub use mode::{compute_mode, is_washout_day, Mode, SATURDAY, SUNDAY};
pub use phase::{resolve_phase, select_active_phases};
pub use warnings::{advisories, build_warnings, Advisory};

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Item, PhaseTitle};
use crate::cycle::CycleState;
use crate::error::{CatalogError, Result};

/// Engine input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionContext {
    /// Hour of day, 0..=23.
    pub hour: i32,
    /// Day of week, Monday = 0 .. Sunday = 6.
    pub weekday: i32,
    pub cycles: CycleState,
}

impl ResolutionContext {
    pub fn new(hour: i32, weekday: i32, cycles: CycleState) -> Self {
        Self {
            hour,
            weekday,
            cycles,
        }
    }

    /// Context for a local timestamp.
    pub fn at(when: NaiveDateTime, cycles: CycleState) -> Self {
        Self {
            hour: when.hour() as i32,
            weekday: when.weekday().num_days_from_monday() as i32,
            cycles,
        }
    }
}

/// An item due now, with the phase it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueItem {
    pub phase: PhaseTitle,
    pub item: Item,
}

/// An item held back, with the first rule that excluded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedItem {
    pub phase: PhaseTitle,
    pub item: Item,
    pub reason: ExclusionReason,
}

/// Engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    #[serde(flatten)]
    pub mode: Mode,
    pub active_phases: Vec<PhaseTitle>,
    pub due_items: Vec<DueItem>,
    pub excluded: Vec<ExcludedItem>,
    pub warnings: Vec<String>,
}

impl ResolutionResult {
    pub fn is_washout(&self) -> bool {
        self.mode.is_washout
    }

    /// Due items drawn from `phase`.
    pub fn due_in(&self, phase: PhaseTitle) -> impl Iterator<Item = &Item> {
        self.due_items
            .iter()
            .filter(move |d| d.phase == phase)
            .map(|d| &d.item)
    }

    pub fn is_due(&self, name: &str) -> bool {
        self.due_items.iter().any(|d| d.item.name == name)
    }
}

/// Resolution over a borrowed catalog. Cheap to copy and share across threads.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionEngine<'a> {
    catalog: &'a Catalog,
}

impl Default for ResolutionEngine<'static> {
    fn default() -> Self {
        Self::new(Catalog::reference())
    }
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn resolve_phase(&self, hour: i32) -> Result<PhaseTitle> {
        resolve_phase(self.catalog, hour)
    }

    pub fn select_active_phases(&self, hour: i32) -> Result<Vec<PhaseTitle>> {
        select_active_phases(self.catalog, hour)
    }

    /// Compute mode, select phases, filter each phase in order, then attach
    /// advisories.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the hour or weekday is out of range.
    pub fn resolve(&self, context: &ResolutionContext) -> Result<ResolutionResult> {
        let mode = compute_mode(context.weekday, &context.cycles)?;
        let active_phases = self.select_active_phases(context.hour)?;

        let mut due_items = Vec::new();
        let mut excluded = Vec::new();
        for title in &active_phases {
            let phase = self
                .catalog
                .phase(*title)
                .ok_or_else(|| CatalogError::UnknownPhase(title.to_string()))?;
            let (due, held) = partition_items(phase, &mode);
            due_items.extend(due.into_iter().map(|item| DueItem {
                phase: *title,
                item: item.clone(),
            }));
            excluded.extend(held.into_iter().map(|(item, reason)| ExcludedItem {
                phase: *title,
                item: item.clone(),
                reason,
            }));
        }

        let warnings = build_warnings(&active_phases, &mode);

        tracing::debug!(
            hour = context.hour,
            weekday = context.weekday,
            washout = mode.is_washout,
            boron = mode.is_boron_on,
            ashwagandha = mode.is_ash_on,
            due = due_items.len(),
            excluded = excluded.len(),
            "resolved schedule"
        );

        Ok(ResolutionResult {
            mode,
            active_phases,
            due_items,
            excluded,
            warnings,
        })
    }
}

/// Resolve against the built-in catalog.
pub fn resolve(context: &ResolutionContext) -> Result<ResolutionResult> {
    ResolutionEngine::default().resolve(context)
}
