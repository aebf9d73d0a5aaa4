//! Cycle accounting.
//!
//! The engine only sees two booleans in [`CycleState`]. Deciding them is the
//! job of this module: the three-week Boron rotation (two weeks on, one off)
//! and the Ashwagandha 5-on/2-off rhythm, which follows the washout calendar
//! unless the user overrides it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::is_washout_day;
use crate::error::{InvalidInputError, Result};

/// Cycle switches supplied with every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleState {
    pub boron_active: bool,
    pub ashwagandha_active: bool,
}

impl CycleState {
    pub fn new(boron_active: bool, ashwagandha_active: bool) -> Self {
        Self {
            boron_active,
            ashwagandha_active,
        }
    }

    /// Default switches for a weekday: Ashwagandha runs on non-washout days.
    pub fn for_weekday(weekday: i32, boron_active: bool) -> Result<Self> {
        Ok(Self {
            boron_active,
            ashwagandha_active: !is_washout_day(weekday)?,
        })
    }
}

/// Position in the three-week Boron rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoronWeek {
    #[default]
    Week1,
    Week2,
    Week3,
}

impl BoronWeek {
    pub const CYCLE_WEEKS: i64 = 3;

    pub fn is_on(self) -> bool {
        !matches!(self, BoronWeek::Week3)
    }

    pub fn number(self) -> u8 {
        match self {
            BoronWeek::Week1 => 1,
            BoronWeek::Week2 => 2,
            BoronWeek::Week3 => 3,
        }
    }

    fn from_index(index: i64) -> Self {
        match index.rem_euclid(Self::CYCLE_WEEKS) {
            0 => BoronWeek::Week1,
            1 => BoronWeek::Week2,
            _ => BoronWeek::Week3,
        }
    }

    /// Week of the rotation `date` falls in, counting from `anchor` (first
    /// day of week 1).
    pub fn from_anchor(anchor: NaiveDate, date: NaiveDate) -> Result<Self> {
        let days = (date - anchor).num_days();
        if days < 0 {
            return Err(InvalidInputError::BeforeAnchor { date, anchor }.into());
        }
        Ok(Self::from_index(days / 7))
    }
}

impl fmt::Display for BoronWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_on() { "ON" } else { "OFF" };
        write!(f, "Week {} ({state})", self.number())
    }
}

impl FromStr for BoronWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match compact.trim_start_matches("week") {
            "1" => Ok(BoronWeek::Week1),
            "2" => Ok(BoronWeek::Week2),
            "3" => Ok(BoronWeek::Week3),
            _ => Err(format!("invalid boron week '{s}' (expected 1, 2 or 3)")),
        }
    }
}

/// User-controlled cycle settings, stored in the `[cycles]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CycleSettings {
    /// Manually selected rotation week, used when no anchor date is set.
    #[serde(default)]
    pub boron_week: BoronWeek,
    /// First day of a week-1; when set the week is derived from the date.
    #[serde(default)]
    pub boron_cycle_start: Option<NaiveDate>,
    /// Forces Ashwagandha on or off regardless of the weekday.
    #[serde(default)]
    pub ashwagandha_override: Option<bool>,
}

impl CycleSettings {
    /// Rotation week for `date`.
    pub fn boron_week_on(&self, date: NaiveDate) -> Result<BoronWeek> {
        match self.boron_cycle_start {
            Some(anchor) => BoronWeek::from_anchor(anchor, date),
            None => Ok(self.boron_week),
        }
    }

    /// Resolve the settings into engine switches for `date`.
    pub fn cycle_state(&self, date: NaiveDate) -> Result<CycleState> {
        let weekday = date.weekday().num_days_from_monday() as i32;
        let week = self.boron_week_on(date)?;
        let mut state = CycleState::for_weekday(weekday, week.is_on())?;
        if let Some(forced) = self.ashwagandha_override {
            state.ashwagandha_active = forced;
        }
        Ok(state)
    }
}
