// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Sitegen: HTML for Sacred Structures
//!
//! Renders the landmark catalog and the markdown content pages into HTML
//! with Maud layouts. The same renderers back the static build and the HTTP
//! server.
//!
//! ## Usage
//!
//! ```bash
//! sacred build ./dist
//! sacred serve --bind 127.0.0.1:3000
//! ```

pub mod assets;
mod config;
mod error;
mod generate;
mod layouts;
pub mod markdown;
mod pages;
pub mod routes;
mod site;

pub use config::{PageConfig, ServerConfig, SiteConfig, SiteMeta};
pub use error::{Result, SitegenError};
pub use generate::{BuildReport, CATALOG_JSON, generate_site};
pub use pages::{ListingMode, result_count};
pub use site::Site;
