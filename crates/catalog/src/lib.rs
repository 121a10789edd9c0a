// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Catalog: the landmark records behind Sacred Structures
//!
//! The catalog is a fixed, ordered list of [`LandmarkRecord`]s compiled into
//! the binary. Everything else in this crate is a pure function over it:
//!
//! - [`facets`] derives the distinct type / country / style values,
//! - [`filter`] selects the records matching the active facet selections,
//! - [`classify`] and [`compose`] build the fallback prose shown on a detail
//!   page when a record carries no explicit override,
//! - [`timeline`] builds the fallback construction timeline.
//!
//! ```
//! use catalog::{Catalog, FilterSelection};
//!
//! let catalog = Catalog::embedded().expect("embedded catalog");
//! let cathedrals = catalog.filter(&FilterSelection::new().with_type("Cathedral"));
//! assert!(cathedrals.iter().all(|r| r.kind == "Cathedral"));
//! ```

pub mod classify;
pub mod compose;
mod error;
pub mod facets;
pub mod filter;
mod model;
mod store;
pub mod timeline;

pub use classify::Classification;
pub use compose::Composer;
pub use error::{CatalogError, Result};
pub use facets::{ALL, Facet};
pub use filter::{FilterSelection, Selection};
pub use model::{LandmarkRecord, NamedEntry, TimelineEvent};
pub use store::Catalog;
