//! Contextual advisories attached to a resolution. Advisory only: they never
//! affect which items are due.

use serde::{Deserialize, Serialize};

use super::mode::Mode;
use crate::catalog::PhaseTitle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Perform phase on a non-washout day.
    TyrosineSabroxySeparation,
    /// Learn phase active.
    CholinergicOverloadWatch,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::TyrosineSabroxySeparation => {
                "Hypertensive risk: never mix L-Tyrosine (morning) with Sabroxy (afternoon) directly. Keep them separated."
            }
            Advisory::CholinergicOverloadWatch => {
                "SLUDGE watch: if you feel nausea, headache, or jaw tension, stop Alpha-GPC."
            }
        }
    }
}

/// Advisories for the active phases, in a fixed order.
pub fn advisories(active_phases: &[PhaseTitle], mode: &Mode) -> Vec<Advisory> {
    let mut out = Vec::new();
    if active_phases.contains(&PhaseTitle::Perform) && !mode.is_washout {
        out.push(Advisory::TyrosineSabroxySeparation);
    }
    if active_phases.contains(&PhaseTitle::Learn) {
        out.push(Advisory::CholinergicOverloadWatch);
    }
    out
}

pub fn build_warnings(active_phases: &[PhaseTitle], mode: &Mode) -> Vec<String> {
    advisories(active_phases, mode)
        .into_iter()
        .map(|a| a.message().to_string())
        .collect()
}
