//! Due-list command: resolve the schedule and render it.

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use serde::Serialize;

use neurostack_core::{Catalog, Config, ResolutionEngine, ResolutionResult};

use super::{item_row, TimeArgs};

#[derive(Args, Debug)]
pub struct DueArgs {
    #[command(flatten)]
    pub time: TimeArgs,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
    /// Also list held-back items with the reason
    #[arg(long)]
    pub show_excluded: bool,
}

#[derive(Serialize)]
struct DueReport<'a> {
    date: NaiveDate,
    hour: i32,
    weekday: i32,
    #[serde(flatten)]
    result: &'a ResolutionResult,
}

pub fn run(args: DueArgs, now: NaiveDateTime) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = config.catalog()?;
    let engine = ResolutionEngine::new(&catalog);

    let (moment, ctx) = args.time.context(&config, now)?;
    let result = engine.resolve(&ctx)?;

    if args.json {
        let report = DueReport {
            date: moment.date,
            hour: moment.hour,
            weekday: moment.weekday,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let show_excluded = args.show_excluded || config.display.show_excluded;
    print!(
        "{}",
        render(&catalog, &config, moment.date, moment.hour, &result, show_excluded)
    );
    Ok(())
}

fn group_title(result: &ResolutionResult) -> String {
    result
        .active_phases
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

pub fn render(
    catalog: &Catalog,
    config: &Config,
    date: NaiveDate,
    hour: i32,
    result: &ResolutionResult,
    show_excluded: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Current Status: {} - {:02}:00\n",
        date.format("%A, %B %d"),
        hour
    ));
    out.push_str(&format!("{}\n", result.mode.banner()));
    if let Some(detail) = result.mode.banner_detail() {
        out.push_str(&format!("{detail}\n"));
    }

    let window = result
        .active_phases
        .first()
        .and_then(|t| catalog.phase(*t))
        .map(|p| p.window.to_string())
        .unwrap_or_default();
    out.push_str(&format!("\nAction Required: {} ({window})\n", group_title(result)));

    if result.due_items.is_empty() {
        out.push_str("\n  Nothing due right now.\n");
    }
    for title in &result.active_phases {
        let mut items = result.due_in(*title).peekable();
        if items.peek().is_none() {
            continue;
        }
        out.push_str(&format!("\n{title}\n"));
        for item in items {
            out.push_str(&item_row(item, config.display.show_optional_tag));
            out.push('\n');
        }
    }

    if show_excluded && !result.excluded.is_empty() {
        out.push_str("\nHeld back\n");
        for held in &result.excluded {
            out.push_str(&format!("  {:<30} {}\n", held.item.name, held.reason));
        }
    }

    if config.display.show_guidance {
        for phase in result.active_phases.iter().filter_map(|t| catalog.phase(*t)) {
            if let Some(guidance) = &phase.guidance {
                out.push_str(&format!("\n{}: {}\n", phase.title, guidance.replace('\n', " ")));
            }
        }
    }

    if !result.warnings.is_empty() {
        out.push_str("\nWarnings\n");
        for warning in &result.warnings {
            out.push_str(&format!("  ! {warning}\n"));
        }
    }

    out
}
