// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use catalog::Facet;
use sitegen::Site;

/// Print the derived values of one facet with the "All" sentinel, sorted.
pub fn facets_command<F>(site: &Site, facet: Facet, mut handler: F) -> Result<()>
where
    F: FnMut(String),
{
    for value in site.catalog().facet_values(facet) {
        handler(value);
    }
    Ok(())
}
