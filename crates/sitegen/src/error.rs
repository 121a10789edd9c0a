// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SitegenError>;

#[derive(Debug, thiserror::Error)]
pub enum SitegenError {
    #[error("Invalid site config: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    #[error("Bad frontmatter in page '{page}': {source}")]
    Frontmatter {
        page: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Unknown content page '{0}'")]
    UnknownPage(String),

    #[error("Duplicate page slug '{0}'")]
    DuplicateSlug(String),

    #[error("Invalid page slug '{0}': must be one path segment other than '.', '..' or 'architecture'")]
    InvalidSlug(String),

    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),

    #[error("Cannot serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SitegenError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SitegenError::Io { path, source }
    }
}
