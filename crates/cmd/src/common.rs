// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use catalog::Facet;
use clap::ValueEnum;
use sitegen::{Site, SiteConfig};

/// Facet named on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FacetChoice {
    /// Building type ("Cathedral", "Basilica", ...)
    Type,
    /// Country, the last segment of the location
    Country,
    /// Leading architectural style token
    Style,
}

impl From<FacetChoice> for Facet {
    fn from(choice: FacetChoice) -> Self {
        match choice {
            FacetChoice::Type => Facet::Type,
            FacetChoice::Country => Facet::Country,
            FacetChoice::Style => Facet::Style,
        }
    }
}

/// Read the site config, the given file or the built-in one.
pub fn load_config(config_path: Option<&Path>) -> Result<SiteConfig> {
    match config_path {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("Failed to load site config {}", path.display())),
        None => SiteConfig::embedded().context("Failed to parse built-in site config"),
    }
}

/// Load config, catalog and content pages.
pub fn load_site(config_path: Option<&Path>) -> Result<Site> {
    let config = load_config(config_path)?;
    let site = Site::load(config).context("Failed to load site")?;
    diagnostics::debug!(
        "Loaded {records} landmarks and {pages} pages",
        records: site.catalog().len(),
        pages: site.pages().len()
    );
    Ok(site)
}
