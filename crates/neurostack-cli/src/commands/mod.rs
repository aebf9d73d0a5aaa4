pub mod catalog;
pub mod config;
pub mod cycle;
pub mod due;
pub mod log;
pub mod phases;
pub mod safety;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use clap::{Args, ValueEnum};

use neurostack_core::{Config, CycleState, Item, ResolutionContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

/// Time and cycle selection shared by `due` and `log`.
#[derive(Args, Debug, Clone, Default)]
pub struct TimeArgs {
    /// Simulated local time, "YYYY-MM-DD HH:MM"
    #[arg(long, conflicts_with_all = ["hour", "weekday"])]
    pub at: Option<String>,
    /// Hour of day (0-23), defaults to the current hour
    #[arg(long, allow_hyphen_values = true)]
    pub hour: Option<i32>,
    /// Day of week (0-6 with Monday=0, or mon/tue/wed/thu/fri/sat/sun)
    #[arg(long)]
    pub weekday: Option<String>,
    /// Force the Boron cycle on or off
    #[arg(long, value_enum)]
    pub boron: Option<Switch>,
    /// Force the Ashwagandha cycle on or off
    #[arg(long, value_enum)]
    pub ashwagandha: Option<Switch>,
}

/// The instant a command resolves for, after applying simulation flags.
#[derive(Debug, Clone, Copy)]
pub struct Moment {
    pub date: NaiveDate,
    pub hour: i32,
    pub weekday: i32,
}

pub fn parse_weekday(day_str: &str) -> Option<i32> {
    let lower = day_str.to_lowercase();
    match lower.as_str() {
        "0" | "mon" | "monday" => Some(0),
        "1" | "tue" | "tuesday" => Some(1),
        "2" | "wed" | "wednesday" => Some(2),
        "3" | "thu" | "thursday" => Some(3),
        "4" | "fri" | "friday" => Some(4),
        "5" | "sat" | "saturday" => Some(5),
        "6" | "sun" | "sunday" => Some(6),
        _ => None,
    }
}

pub fn parse_at(at: &str) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    NaiveDateTime::parse_from_str(at.trim(), "%Y-%m-%d %H:%M")
        .map_err(|e| format!("Invalid --at '{at}': {e} (expected YYYY-MM-DD HH:MM)").into())
}

impl TimeArgs {
    /// Apply `--at`, `--hour` and `--weekday` to `now`. A weekday override
    /// moves the date within the same Monday-based week.
    pub fn moment(&self, now: NaiveDateTime) -> Result<Moment, Box<dyn std::error::Error>> {
        let base = match &self.at {
            Some(at) => parse_at(at)?,
            None => now,
        };

        let mut date = base.date();
        let mut weekday = date.weekday().num_days_from_monday() as i32;
        if let Some(day_str) = &self.weekday {
            let target = parse_weekday(day_str).ok_or_else(|| {
                format!(
                    "Invalid day: '{day_str}'. Use 0-6 (Monday=0) or mon/tue/wed/thu/fri/sat/sun"
                )
            })?;
            date += Duration::days(i64::from(target - weekday));
            weekday = target;
        }

        Ok(Moment {
            date,
            hour: self.hour.unwrap_or(base.hour() as i32),
            weekday,
        })
    }

    /// Cycle switches from config, with command-line overrides on top.
    pub fn cycles(
        &self,
        config: &Config,
        date: NaiveDate,
    ) -> Result<CycleState, Box<dyn std::error::Error>> {
        let mut state = config.cycle_state(date)?;
        if let Some(boron) = self.boron {
            state.boron_active = boron.is_on();
        }
        if let Some(ash) = self.ashwagandha {
            state.ashwagandha_active = ash.is_on();
        }
        Ok(state)
    }

    pub fn context(
        &self,
        config: &Config,
        now: NaiveDateTime,
    ) -> Result<(Moment, ResolutionContext), Box<dyn std::error::Error>> {
        let moment = self.moment(now)?;
        let cycles = self.cycles(config, moment.date)?;
        tracing::debug!(?moment, ?cycles, "resolution inputs");
        Ok((moment, ResolutionContext::new(moment.hour, moment.weekday, cycles)))
    }
}

pub fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

pub fn item_row(item: &Item, show_optional_tag: bool) -> String {
    let name = if show_optional_tag && item.optional {
        format!("{} (optional)", item.name)
    } else {
        item.name.clone()
    };
    format!(
        "  {:<30} {:<16} {:<28} {}",
        name, item.dosage, item.form, item.purpose
    )
}
