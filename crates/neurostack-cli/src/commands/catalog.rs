use clap::Subcommand;
use std::path::PathBuf;

use neurostack_core::{Catalog, Config};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Validate a catalog file (defaults to the configured catalog)
    Check {
        /// Path to a catalog TOML file
        path: Option<PathBuf>,
    },
    /// Print the built-in catalog as TOML, ready to edit
    Export,
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::Check { path } => {
            let catalog = match path {
                Some(path) => Catalog::load(&path)?,
                None => Config::load_or_default().catalog()?.into_owned(),
            };
            catalog.validate()?;
            println!(
                "ok: {} phases, {} items",
                catalog.phases().len(),
                catalog.item_count()
            );
        }
        CatalogAction::Export => {
            print!("{}", Catalog::reference().to_toml_string()?);
        }
    }
    Ok(())
}
