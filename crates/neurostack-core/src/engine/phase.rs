//! Hour-to-phase classification.

use crate::catalog::{Catalog, PhaseTitle};
use crate::error::{CatalogError, InvalidInputError, Result};

/// Validate and narrow an hour to `0..=23`.
pub(crate) fn check_hour(hour: i32) -> Result<u8, InvalidInputError> {
    u8::try_from(hour)
        .ok()
        .filter(|h| *h < 24)
        .ok_or(InvalidInputError::Hour(hour))
}

/// Lead phase of the window containing `hour`.
pub fn resolve_phase(catalog: &Catalog, hour: i32) -> Result<PhaseTitle> {
    let hour = check_hour(hour)?;
    let phase = catalog
        .phases_at(hour)
        .next()
        .ok_or(CatalogError::UncoveredHour(hour))?;
    Ok(phase.title)
}

/// Every phase sharing the window that contains `hour`, in catalog order.
pub fn select_active_phases(catalog: &Catalog, hour: i32) -> Result<Vec<PhaseTitle>> {
    let hour = check_hour(hour)?;
    let active: Vec<_> = catalog.phases_at(hour).map(|p| p.title).collect();
    if active.is_empty() {
        return Err(CatalogError::UncoveredHour(hour).into());
    }
    Ok(active)
}
