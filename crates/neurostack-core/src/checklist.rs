//! Ephemeral intake checklist.
//!
//! Completion marks live only as long as the [`Checklist`] value. They are
//! keyed by `(date, item name)` where the date is the resolution date (the
//! simulated date when a time is simulated), and they are never fed back
//! into the engine.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::PhaseTitle;
use crate::engine::ResolutionResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CompletionKey {
    pub date: NaiveDate,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    pub key: CompletionKey,
    pub phase: PhaseTitle,
    pub dosage: String,
    pub taken: bool,
}

impl ChecklistEntry {
    /// Prompt label, e.g. `Taken: Zinc (15-30mg)`.
    pub fn label(&self) -> String {
        format!("Taken: {} ({})", self.key.item, self.dosage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub date: NaiveDate,
    pub taken: usize,
    pub total: usize,
    pub pending: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    date: NaiveDate,
    entries: Vec<ChecklistEntry>,
}

impl Checklist {
    /// One unchecked entry per due item. A name repeated across phases
    /// collapses into its first occurrence since keys are per name.
    pub fn from_result(date: NaiveDate, result: &ResolutionResult) -> Self {
        let mut seen = HashSet::new();
        let entries = result
            .due_items
            .iter()
            .filter(|due| seen.insert(due.item.name.as_str()))
            .map(|due| ChecklistEntry {
                key: CompletionKey {
                    date,
                    item: due.item.name.clone(),
                },
                phase: due.phase,
                dosage: due.item.dosage.clone(),
                taken: false,
            })
            .collect();
        Self { date, entries }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    /// Set the mark for `item`. Returns `false` if the item is not listed.
    pub fn mark(&mut self, item: &str, taken: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.key.item == item) {
            Some(entry) => {
                entry.taken = taken;
                true
            }
            None => false,
        }
    }

    /// Flip the mark for `item`, returning the new state.
    pub fn toggle(&mut self, item: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.key.item == item)?;
        entry.taken = !entry.taken;
        Some(entry.taken)
    }

    pub fn is_taken(&self, item: &str) -> bool {
        self.entries.iter().any(|e| e.key.item == item && e.taken)
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary {
            date: self.date,
            taken: self.entries.iter().filter(|e| e.taken).count(),
            total: self.entries.len(),
            pending: self
                .entries
                .iter()
                .filter(|e| !e.taken)
                .map(|e| e.key.item.clone())
                .collect(),
        }
    }
}
