//! Protocol catalog: phases, items and their windows.
//!
//! The catalog is immutable once built. [`Catalog::reference`] returns the
//! built-in protocol table; [`Catalog::from_toml_str`] and [`Catalog::load`]
//! read an alternate table from a TOML file. Every constructor validates:
//!
//! - distinct phase windows partition `[0, 24)` with no gaps or overlaps
//!   (phases sharing an identical window form one display group)
//! - item names are unique within a phase
//! - each special cycle tags at most one item per phase
//! - every cycle name in a file is one the engine recognises

mod item;
mod reference;

pub use item::{HourWindow, Item, Phase, PhaseTitle, SpecialCycle};
pub use reference::{AFTERNOON, EVENING, MORNING};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{CatalogError, CoreError, Result};

/// Ordered, validated list of phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    phases: Vec<Phase>,
}

impl Catalog {
    /// Build a catalog from phases in display order.
    pub fn new(phases: Vec<Phase>) -> Result<Self, CatalogError> {
        let catalog = Self { phases };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in protocol table, constructed on first use.
    pub fn reference() -> &'static Catalog {
        static REFERENCE: OnceLock<Catalog> = OnceLock::new();
        REFERENCE.get_or_init(|| Catalog {
            phases: reference::reference_phases(),
        })
    }

    /// All phases in catalog order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn phase(&self, title: PhaseTitle) -> Option<&Phase> {
        self.phases.iter().find(|p| p.title == title)
    }

    /// Phases whose window contains `hour`, in catalog order.
    pub fn phases_at(&self, hour: u8) -> impl Iterator<Item = &Phase> {
        self.phases.iter().filter(move |p| p.window.contains(hour))
    }

    pub fn item_count(&self) -> usize {
        self.phases.iter().map(|p| p.items.len()).sum()
    }

    /// Check the catalog invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.phases.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut titles = HashSet::new();
        for phase in &self.phases {
            if !titles.insert(phase.title) {
                return Err(CatalogError::DuplicatePhase(phase.title.to_string()));
            }
            if !phase.window.is_well_formed() {
                return Err(CatalogError::InvalidWindow {
                    phase: phase.title.to_string(),
                    start: phase.window.start,
                    end: phase.window.end,
                });
            }
            validate_items(phase)?;
        }

        // One representative phase per distinct window.
        let mut groups: Vec<&Phase> = Vec::new();
        for phase in &self.phases {
            if !groups.iter().any(|g| g.window == phase.window) {
                groups.push(phase);
            }
        }

        for (i, a) in groups.iter().enumerate() {
            for b in &groups[i + 1..] {
                if a.window.overlaps(&b.window) {
                    return Err(CatalogError::OverlappingWindows {
                        first: a.title.to_string(),
                        second: b.title.to_string(),
                    });
                }
            }
        }

        if let Some(hour) = (0..24u8).find(|h| !groups.iter().any(|g| g.window.contains(*h))) {
            return Err(CatalogError::UncoveredHour(hour));
        }

        Ok(())
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCycleReference` when an item names a cycle the engine
    /// does not recognise, and a catalog error when the shape is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let phases = file
            .phases
            .into_iter()
            .map(PhaseFile::into_phase)
            .collect::<Result<Vec<_>>>()?;
        let catalog = Self::new(phases)?;
        tracing::debug!(
            phases = catalog.phases.len(),
            items = catalog.item_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to the same TOML layout [`Catalog::from_toml_str`] reads.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let file = CatalogFile {
            phases: self.phases.iter().map(PhaseFile::from).collect(),
        };
        toml::to_string_pretty(&file)
    }
}

fn validate_items(phase: &Phase) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    let mut cycles = HashSet::new();
    for item in &phase.items {
        if !names.insert(item.name.as_str()) {
            return Err(CatalogError::DuplicateItem {
                phase: phase.title.to_string(),
                item: item.name.clone(),
            });
        }
        if item.special_cycle != SpecialCycle::None && !cycles.insert(item.special_cycle) {
            return Err(CatalogError::DuplicateCycleTag {
                phase: phase.title.to_string(),
                cycle: item.special_cycle.to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    phases: Vec<PhaseFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PhaseFile {
    title: String,
    start_hour: u8,
    end_hour: u8,
    #[serde(default)]
    axis: String,
    #[serde(default)]
    focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guidance: Option<String>,
    #[serde(default)]
    items: Vec<ItemFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ItemFile {
    name: String,
    #[serde(default)]
    dosage: String,
    #[serde(default)]
    form: String,
    #[serde(default)]
    purpose: String,
    #[serde(default)]
    safe_on_weekend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special_cycle: Option<String>,
    #[serde(default)]
    optional: bool,
}

impl PhaseFile {
    fn into_phase(self) -> Result<Phase> {
        let title = self
            .title
            .parse::<PhaseTitle>()
            .map_err(CatalogError::UnknownPhase)?;
        let items = self
            .items
            .into_iter()
            .map(ItemFile::into_item)
            .collect::<Result<Vec<_>>>()?;
        Ok(Phase {
            title,
            window: HourWindow::new(self.start_hour, self.end_hour),
            axis: self.axis,
            focus: self.focus,
            guidance: self.guidance,
            items,
        })
    }
}

impl From<&Phase> for PhaseFile {
    fn from(phase: &Phase) -> Self {
        Self {
            title: phase.title.to_string(),
            start_hour: phase.window.start,
            end_hour: phase.window.end,
            axis: phase.axis.clone(),
            focus: phase.focus.clone(),
            guidance: phase.guidance.clone(),
            items: phase.items.iter().map(ItemFile::from).collect(),
        }
    }
}

impl ItemFile {
    fn into_item(self) -> Result<Item> {
        let special_cycle = match self.special_cycle.as_deref() {
            None => SpecialCycle::None,
            Some(raw) => raw.parse::<SpecialCycle>().map_err(|cycle| {
                CoreError::UnknownCycleReference {
                    item: self.name.clone(),
                    cycle,
                }
            })?,
        };
        Ok(Item {
            name: self.name,
            dosage: self.dosage,
            form: self.form,
            purpose: self.purpose,
            safe_on_weekend: self.safe_on_weekend,
            special_cycle,
            optional: self.optional,
        })
    }
}

impl From<&Item> for ItemFile {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            dosage: item.dosage.clone(),
            form: item.form.clone(),
            purpose: item.purpose.clone(),
            safe_on_weekend: item.safe_on_weekend,
            special_cycle: match item.special_cycle {
                SpecialCycle::None => None,
                cycle => Some(cycle.to_string()),
            },
            optional: item.optional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(title: PhaseTitle, start: u8, end: u8, items: Vec<Item>) -> Phase {
        Phase {
            title,
            window: HourWindow::new(start, end),
            axis: String::new(),
            focus: String::new(),
            guidance: None,
            items,
        }
    }

    #[test]
    fn reference_catalog_is_valid() {
        Catalog::reference().validate().unwrap();
    }

    #[test]
    fn reference_catalog_phase_order() {
        let titles: Vec<_> = Catalog::reference().phases().iter().map(|p| p.title).collect();
        assert_eq!(titles, PhaseTitle::ALL.to_vec());
    }

    #[test]
    fn reference_windows_partition_the_day() {
        let catalog = Catalog::reference();
        for hour in 0..24u8 {
            let windows: HashSet<_> = catalog.phases_at(hour).map(|p| p.window).collect();
            assert_eq!(windows.len(), 1, "hour {hour} maps to {windows:?}");
        }
    }

    #[test]
    fn reference_cycle_tags_are_unique() {
        let catalog = Catalog::reference();
        for cycle in SpecialCycle::RECOGNIZED {
            let tagged = catalog
                .phases()
                .iter()
                .flat_map(|p| &p.items)
                .filter(|i| i.special_cycle == cycle)
                .count();
            assert_eq!(tagged, 1, "{cycle} should tag exactly one item");
        }
    }

    #[test]
    fn fish_oil_may_repeat_across_phases() {
        let catalog = Catalog::new(vec![
            phase(PhaseTitle::Foundation, 0, 12, vec![Item::new("Fish Oil", "1g", "", "")]),
            phase(PhaseTitle::Recover, 12, 24, vec![Item::new("Fish Oil", "1g", "", "")]),
        ]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn rejects_overlapping_windows() {
        let err = Catalog::new(vec![
            phase(PhaseTitle::Foundation, 0, 12, vec![]),
            phase(PhaseTitle::Perform, 11, 24, vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::OverlappingWindows { .. }));
    }

    #[test]
    fn rejects_gaps() {
        let err = Catalog::new(vec![
            phase(PhaseTitle::Foundation, 0, 11, vec![]),
            phase(PhaseTitle::Perform, 12, 24, vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::UncoveredHour(11));
    }

    #[test]
    fn rejects_malformed_window() {
        let err = Catalog::new(vec![phase(PhaseTitle::Foundation, 5, 5, vec![])]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidWindow { .. }));
    }

    #[test]
    fn rejects_duplicate_item_in_phase() {
        let err = Catalog::new(vec![phase(
            PhaseTitle::Foundation,
            0,
            24,
            vec![Item::new("Zinc", "", "", ""), Item::new("Zinc", "", "", "")],
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem { .. }));
    }

    #[test]
    fn rejects_duplicate_cycle_tag_in_phase() {
        let err = Catalog::new(vec![phase(
            PhaseTitle::Foundation,
            0,
            24,
            vec![
                Item::new("Boron", "", "", "").cycle(SpecialCycle::Boron),
                Item::new("Boron Glycinate", "", "", "").cycle(SpecialCycle::Boron),
            ],
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCycleTag { .. }));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn toml_export_parses_back_to_reference() {
        let text = Catalog::reference().to_toml_string().unwrap();
        let parsed = Catalog::from_toml_str(&text).unwrap();
        assert_eq!(&parsed, Catalog::reference());
    }

    #[test]
    fn unknown_cycle_fails_at_load() {
        let text = r#"
            [[phases]]
            title = "Foundation"
            start_hour = 0
            end_hour = 24

            [[phases.items]]
            name = "Rhodiola"
            special_cycle = "rhodiola"
        "#;
        let err = Catalog::from_toml_str(text).unwrap_err();
        match err {
            CoreError::UnknownCycleReference { item, cycle } => {
                assert_eq!(item, "Rhodiola");
                assert_eq!(cycle, "rhodiola");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_phase_title_fails_at_load() {
        let text = r#"
            [[phases]]
            title = "Maintenance"
            start_hour = 0
            end_hour = 24
        "#;
        let err = Catalog::from_toml_str(text).unwrap_err();
        assert!(matches!(err, CoreError::Catalog(CatalogError::UnknownPhase(_))));
    }
}
