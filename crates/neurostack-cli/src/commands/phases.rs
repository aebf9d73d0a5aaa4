//! Full protocol reference.

use neurostack_core::{Catalog, Config, Phase};

use super::item_row;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = config.catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.phases())?);
    } else {
        print!("{}", render(&catalog, config.display.show_optional_tag));
    }
    Ok(())
}

fn render_phase(phase: &Phase, show_optional_tag: bool) -> String {
    let mut out = format!("\n{} [{}]\n", phase.title, phase.window);
    if !phase.axis.is_empty() {
        out.push_str(&format!("{}\n", phase.axis));
    }
    if !phase.focus.is_empty() {
        out.push_str(&format!("Focus: {}\n", phase.focus));
    }
    for item in &phase.items {
        let weekend = if item.safe_on_weekend { "" } else { "  [paused on weekends]" };
        out.push_str(&item_row(item, show_optional_tag));
        out.push_str(weekend);
        out.push('\n');
    }
    if let Some(guidance) = &phase.guidance {
        for line in guidance.lines() {
            out.push_str(&format!("  > {line}\n"));
        }
    }
    out
}

pub fn render(catalog: &Catalog, show_optional_tag: bool) -> String {
    let mut out = String::from("Full Protocol Reference\n");
    for phase in catalog.phases() {
        out.push_str(&render_phase(phase, show_optional_tag));
    }
    out
}
