// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static site generation.
//!
//! ```bash
//! sacred build ./dist
//! ```
//!
//! 1. Expands the catalog and content pages into page jobs
//! 2. Renders each page through its layout
//! 3. Writes pages, assets and `catalog.json` under the output directory

use crate::assets::ASSETS;
use crate::error::{Result, SitegenError};
use crate::site::Site;
use std::path::Path;

pub const CATALOG_JSON: &str = "catalog.json";

/// What a build wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// HTML pages written
    pub pages: usize,
    /// Other files written (assets and `catalog.json`)
    pub files: usize,
}

/// Generate the complete static site into `output_dir`.
pub fn generate_site(site: &Site, output_dir: &Path) -> Result<BuildReport> {
    let jobs = site.jobs();
    diagnostics::info!("Route expansion: {count} pages to generate", count: jobs.len());

    for job in &jobs {
        let html = site.render_job(job)?;
        write_file(output_dir, &job.output_path, html.as_bytes())?;
    }

    for asset in ASSETS {
        write_file(output_dir, asset.path, asset.body.as_bytes())?;
    }
    write_file(output_dir, CATALOG_JSON, site.catalog_json()?.as_bytes())?;

    let report = BuildReport {
        pages: jobs.len(),
        files: ASSETS.len() + 1,
    };
    let dir = output_dir.display().to_string();
    diagnostics::info!(
        "Site generation complete: {pages} pages to {dir}",
        pages: report.pages,
        dir: dir.as_str()
    );
    Ok(report)
}

fn write_file(output_dir: &Path, relative: &str, contents: &[u8]) -> Result<()> {
    let out_path = output_dir.join(relative);
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(SitegenError::io(parent))?;
    }
    std::fs::write(&out_path, contents).map_err(SitegenError::io(&out_path))?;
    diagnostics::debug!("wrote {path}", path: relative);
    Ok(())
}
