//! Catalog value types: items, phases, windows and cycle tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named external on/off toggle gating specific items.
///
/// Adding a cycle means adding a variant here and a matching field on
/// [`crate::CycleState`]; the exhaustive match in
/// [`crate::engine::exclusion_reason`] refuses to compile until the new
/// cycle is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCycle {
    #[default]
    None,
    Boron,
    Ashwagandha,
}

impl SpecialCycle {
    /// Cycles the engine can gate on.
    pub const RECOGNIZED: [SpecialCycle; 2] = [SpecialCycle::Boron, SpecialCycle::Ashwagandha];

    pub fn as_str(self) -> &'static str {
        match self {
            SpecialCycle::None => "none",
            SpecialCycle::Boron => "boron",
            SpecialCycle::Ashwagandha => "ashwagandha",
        }
    }
}

impl fmt::Display for SpecialCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SpecialCycle::None),
            "boron" | "boron_cycle" => Ok(SpecialCycle::Boron),
            "ashwagandha" | "ashwagandha_cycle" => Ok(SpecialCycle::Ashwagandha),
            other => Err(other.to_string()),
        }
    }
}

/// One supplement entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Free text, display only.
    pub dosage: String,
    pub form: String,
    pub purpose: String,
    /// Stays active during weekend washout.
    pub safe_on_weekend: bool,
    #[serde(default)]
    pub special_cycle: SpecialCycle,
    #[serde(default)]
    pub optional: bool,
}

impl Item {
    /// Create an item that is paused on washout days, untagged and required.
    pub fn new(name: &str, dosage: &str, form: &str, purpose: &str) -> Self {
        Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            form: form.to_string(),
            purpose: purpose.to_string(),
            safe_on_weekend: false,
            special_cycle: SpecialCycle::None,
            optional: false,
        }
    }

    pub fn weekend_safe(mut self) -> Self {
        self.safe_on_weekend = true;
        self
    }

    pub fn cycle(mut self, cycle: SpecialCycle) -> Self {
        self.special_cycle = cycle;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Catalog phase identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhaseTitle {
    Foundation,
    Learn,
    Perform,
    Recover,
}

impl PhaseTitle {
    pub const ALL: [PhaseTitle; 4] = [
        PhaseTitle::Foundation,
        PhaseTitle::Learn,
        PhaseTitle::Perform,
        PhaseTitle::Recover,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhaseTitle::Foundation => "Foundation",
            PhaseTitle::Learn => "Learn",
            PhaseTitle::Perform => "Perform",
            PhaseTitle::Recover => "Recover",
        }
    }
}

impl fmt::Display for PhaseTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhaseTitle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhaseTitle::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Half-open hour range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u8,
    pub end: u8,
}

impl HourWindow {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start && hour < self.end
    }

    pub fn overlaps(&self, other: &HourWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Start < end and end within the day.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end && self.end <= 24
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

/// An ordered time bucket of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub title: PhaseTitle,
    pub window: HourWindow,
    /// Reference heading, e.g. "The Cholinergic Axis".
    #[serde(default)]
    pub axis: String,
    #[serde(default)]
    pub focus: String,
    /// Timing advice shown under the reference table.
    #[serde(default)]
    pub guidance: Option<String>,
    pub items: Vec<Item>,
}
