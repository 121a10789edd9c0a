// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use sitegen::{BuildReport, Site, generate_site};

/// Write the static site to `output_dir`.
pub fn build_command<F>(site: &Site, output_dir: &Path, mut handler: F) -> Result<BuildReport>
where
    F: FnMut(String),
{
    let report = generate_site(site, output_dir)
        .with_context(|| format!("Failed to build site into {}", output_dir.display()))?;

    handler(format!(
        "Wrote {} pages and {} files to {}",
        report.pages,
        report.files,
        output_dir.display()
    ));
    Ok(report)
}
