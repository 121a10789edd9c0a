// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use catalog::FilterSelection;
use sitegen::{Site, result_count};

/// Print the records matching `selection`, one per line, then the count.
pub fn list_command<F>(site: &Site, selection: &FilterSelection, mut handler: F) -> Result<usize>
where
    F: FnMut(String),
{
    let records = site.catalog().filter(selection);
    diagnostics::debug!("Listing {count} records", count: records.len());

    for record in &records {
        handler(format!(
            "{:<36} {:<24} {}",
            record.id, record.kind, record.location
        ));
    }
    if records.is_empty() {
        handler("No architecture matches your current filter.".to_string());
    } else {
        handler(result_count(records.len()));
    }
    Ok(records.len())
}
