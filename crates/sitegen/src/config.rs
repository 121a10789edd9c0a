// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration, parsed from `site.yaml`.

use crate::error::{Result, SitegenError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration compiled into the binary; `--config` replaces it.
const EMBEDDED_CONFIG: &str = include_str!("../site.yaml");

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Sacred Structures"
///   tagline: "Explore the beauty and history of sacred spaces around the world"
///   base_url: "/"
///
/// catalog: ./landmarks.json
///
/// pages:
///   - name: about
///     slug: about
///   - name: contact
///     slug: contact
///     path: ./contact.md
///
/// server:
///   bind: "127.0.0.1:3000"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    /// External catalog JSON; the built-in catalog when absent
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/".to_string()
}

/// A markdown content page (about, theory, contact).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Name of a built-in page, or a label when `path` is given
    pub name: String,
    /// URL slug, e.g. "about" for `/about`
    pub slug: String,
    /// Host markdown file replacing the built-in source
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl SiteConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// The configuration shipped with the site.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_CONFIG)
    }

    /// Read a config file. Relative `catalog` and page paths are resolved
    /// against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(SitegenError::io(path))?;
        let mut config = Self::from_yaml(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative(dir);
        }
        Ok(config)
    }

    fn resolve_relative(&mut self, dir: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        };
        if let Some(catalog) = self.catalog.as_mut() {
            resolve(catalog);
        }
        for page in &mut self.pages {
            if let Some(path) = page.path.as_mut() {
                resolve(path);
            }
        }
    }

    /// `base_url` without its trailing slash: "" for a root site,
    /// "/sacred" for `base_url: /sacred/`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }
}
