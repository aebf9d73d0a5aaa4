//! Intake checklist. Marks are kept in memory for this run only.

use chrono::NaiveDateTime;
use clap::Args;
use std::io::{BufRead, Write};

use neurostack_core::{Checklist, Config, ResolutionEngine};

use super::TimeArgs;

#[derive(Args, Debug)]
pub struct LogArgs {
    #[command(flatten)]
    pub time: TimeArgs,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LogArgs, now: NaiveDateTime) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = config.catalog()?;
    let engine = ResolutionEngine::new(&catalog);

    let (moment, ctx) = args.time.context(&config, now)?;
    let result = engine.resolve(&ctx)?;
    let mut checklist = Checklist::from_result(moment.date, &result);

    if checklist.entries().is_empty() {
        println!("Nothing due right now.");
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    walk(&mut checklist, stdin.lock(), stdout.lock())?;

    let summary = checklist.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("\nLogged {}/{} for {}", summary.taken, summary.total, summary.date);
        if !summary.pending.is_empty() {
            println!("Still pending: {}", summary.pending.join(", "));
        }
    }
    Ok(())
}

/// Ask about each entry in order. End of input leaves the rest unmarked.
pub fn walk<R: BufRead, W: Write>(
    checklist: &mut Checklist,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    let labels: Vec<(String, String)> = checklist
        .entries()
        .iter()
        .map(|e| (e.key.item.clone(), e.label()))
        .collect();

    for (item, label) in labels {
        write!(output, "{label}? [y/N] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let taken = matches!(line.trim().to_lowercase().as_str(), "y" | "yes");
        checklist.mark(&item, taken);
    }
    Ok(())
}
