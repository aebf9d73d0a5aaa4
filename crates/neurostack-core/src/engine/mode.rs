//! Global mode flags: washout and cycle switches.

use serde::{Deserialize, Serialize};

use crate::cycle::CycleState;
use crate::error::{InvalidInputError, Result};

/// Monday = 0 .. Sunday = 6.
pub const SATURDAY: i32 = 5;
pub const SUNDAY: i32 = 6;

/// Mode flags for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    pub is_washout: bool,
    pub is_boron_on: bool,
    pub is_ash_on: bool,
}

impl Mode {
    /// Headline shown above the due list.
    pub fn banner(&self) -> &'static str {
        if self.is_washout {
            "WEEKEND WASHOUT PROTOCOL ACTIVE"
        } else {
            "HIGH PERFORMANCE MODE ACTIVE"
        }
    }

    /// Explanation shown under the banner, if any.
    pub fn banner_detail(&self) -> Option<&'static str> {
        self.is_washout.then_some(
            "Stimulants (Caffeine, Tyrosine, Sabroxy) and Adaptogens are PAUSED to prevent receptor downregulation.",
        )
    }
}

pub(crate) fn check_weekday(weekday: i32) -> Result<(), InvalidInputError> {
    if (0..=6).contains(&weekday) {
        Ok(())
    } else {
        Err(InvalidInputError::Weekday(weekday))
    }
}

/// Whether `weekday` is a washout day (Saturday or Sunday).
pub fn is_washout_day(weekday: i32) -> Result<bool> {
    check_weekday(weekday)?;
    Ok(weekday == SATURDAY || weekday == SUNDAY)
}

/// Derive mode flags. Cycle switches pass through unchanged; their default
/// semantics live in [`CycleState::for_weekday`].
pub fn compute_mode(weekday: i32, cycles: &CycleState) -> Result<Mode> {
    Ok(Mode {
        is_washout: is_washout_day(weekday)?,
        is_boron_on: cycles.boron_active,
        is_ash_on: cycles.ashwagandha_active,
    })
}
