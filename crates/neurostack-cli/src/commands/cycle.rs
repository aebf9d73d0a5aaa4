//! Cycle status for a date.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::Args;
use serde::Serialize;

use neurostack_core::engine::is_washout_day;
use neurostack_core::safety::{ASHWAGANDHA_CAPTION, BORON_CAPTION, WASHOUT_CAPTION};
use neurostack_core::{BoronWeek, Config};

use super::{on_off, parse_at};

#[derive(Args, Debug)]
pub struct CycleArgs {
    /// Date to report on (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct CycleStatus {
    pub date: NaiveDate,
    pub boron_week: BoronWeek,
    pub boron_active: bool,
    pub ashwagandha_active: bool,
    pub ashwagandha_overridden: bool,
    pub washout: bool,
}

pub fn status(config: &Config, date: NaiveDate) -> Result<CycleStatus, Box<dyn std::error::Error>> {
    let state = config.cycle_state(date)?;
    let weekday = date.weekday().num_days_from_monday() as i32;
    Ok(CycleStatus {
        date,
        boron_week: config.cycles.boron_week_on(date)?,
        boron_active: state.boron_active,
        ashwagandha_active: state.ashwagandha_active,
        ashwagandha_overridden: config.cycles.ashwagandha_override.is_some(),
        washout: is_washout_day(weekday)?,
    })
}

pub fn run(args: CycleArgs, now: NaiveDateTime) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let date = match &args.date {
        Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
            .or_else(|_| parse_at(d).map(|dt| dt.date()))?,
        None => now.date(),
    };

    let status = status(&config, date)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Active Cycle Stats ({})", status.date.format("%A, %Y-%m-%d"));
    println!("  Boron Status:       {} - {}", on_off(status.boron_active), status.boron_week);
    println!("    {BORON_CAPTION}");
    let overridden = if status.ashwagandha_overridden { " (override)" } else { "" };
    println!("  Ashwagandha Status: {}{overridden}", on_off(status.ashwagandha_active));
    println!("    {ASHWAGANDHA_CAPTION}");
    let washout = if status.washout { "ACTIVE" } else { "INACTIVE" };
    println!("  Washout Status:     {washout}");
    println!("    {WASHOUT_CAPTION}");
    Ok(())
}
