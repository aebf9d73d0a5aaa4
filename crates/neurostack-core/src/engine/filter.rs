//! Per-item gating rules.
//!
//! Rules run in a fixed order and the first one that fires is the reason an
//! item is excluded:
//!
//! 1. washout day and the item is not weekend-safe
//! 2. Boron-tagged and the Boron cycle is off
//! 3. Ashwagandha-tagged and the Ashwagandha cycle is off

use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::Mode;
use crate::catalog::{Item, Phase, SpecialCycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    Washout,
    BoronCycleOff,
    AshwagandhaCycleOff,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::Washout => write!(f, "paused for weekend washout"),
            ExclusionReason::BoronCycleOff => write!(f, "Boron cycle is off"),
            ExclusionReason::AshwagandhaCycleOff => write!(f, "Ashwagandha cycle is off"),
        }
    }
}

/// The first rule excluding `item` under `mode`, or `None` if it is due.
pub fn exclusion_reason(item: &Item, mode: &Mode) -> Option<ExclusionReason> {
    if mode.is_washout && !item.safe_on_weekend {
        return Some(ExclusionReason::Washout);
    }
    match item.special_cycle {
        SpecialCycle::Boron if !mode.is_boron_on => Some(ExclusionReason::BoronCycleOff),
        SpecialCycle::Ashwagandha if !mode.is_ash_on => Some(ExclusionReason::AshwagandhaCycleOff),
        SpecialCycle::None | SpecialCycle::Boron | SpecialCycle::Ashwagandha => None,
    }
}

/// Items of `phase` that are due under `mode`, in catalog order.
pub fn filter_items<'a>(phase: &'a Phase, mode: &Mode) -> Vec<&'a Item> {
    phase
        .items
        .iter()
        .filter(|item| exclusion_reason(item, mode).is_none())
        .collect()
}

/// Split `phase` into due items and excluded items with their reasons.
/// Both halves keep catalog order.
pub fn partition_items<'a>(
    phase: &'a Phase,
    mode: &Mode,
) -> (Vec<&'a Item>, Vec<(&'a Item, ExclusionReason)>) {
    let mut due = Vec::with_capacity(phase.items.len());
    let mut excluded = Vec::new();
    for item in &phase.items {
        match exclusion_reason(item, mode) {
            None => due.push(item),
            Some(reason) => excluded.push((item, reason)),
        }
    }
    (due, excluded)
}
