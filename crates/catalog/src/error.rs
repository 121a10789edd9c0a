// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading a catalog. Lookups never fail; an unknown id
/// is reported as `None` by [`crate::Catalog::get`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate landmark id '{id}' at position {position}")]
    DuplicateId { id: String, position: usize },

    #[error("Landmark at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("Cannot read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
