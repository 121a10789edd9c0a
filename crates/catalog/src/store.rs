// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The catalog store: an ordered, immutable list of landmarks with an id index.

use crate::error::{CatalogError, Result};
use crate::facets::{self, Facet};
use crate::filter::FilterSelection;
use crate::model::LandmarkRecord;
use std::collections::HashMap;
use std::path::Path;

/// Catalog JSON compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/landmarks.json");

/// Ordered landmark catalog. Order is declaration order of the source JSON
/// and is preserved by every query.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LandmarkRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty and duplicate ids.
    pub fn new(records: Vec<LandmarkRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                    position,
                });
            }
        }
        Ok(Self { records, by_id })
    }

    /// Parse a JSON array of camelCase landmark records.
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<LandmarkRecord> = serde_json::from_str(text)?;
        Self::new(records)
    }

    /// The catalog shipped with the site.
    pub fn embedded() -> Result<Self> {
        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        diagnostics::debug!("Loaded embedded catalog with {count} landmarks", count: catalog.len());
        Ok(catalog)
    }

    /// Load an alternative catalog file from the host filesystem.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        let shown = path.display().to_string();
        diagnostics::info!("Loaded catalog {path} with {count} landmarks", path: shown.as_str(), count: catalog.len());
        Ok(catalog)
    }

    /// Every record, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[LandmarkRecord] {
        &self.records
    }

    /// Look up a record by id. `None` is the "not found" signal.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LandmarkRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// The first `limit` records other than `id`, in catalog order.
    #[must_use]
    pub fn related(&self, id: &str, limit: usize) -> Vec<&LandmarkRecord> {
        self.records
            .iter()
            .filter(|r| r.id != id)
            .take(limit)
            .collect()
    }

    /// Records matching every active selection, in catalog order.
    #[must_use]
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&LandmarkRecord> {
        selection.apply(&self.records)
    }

    /// Distinct values of `facet` with the "All" sentinel, sorted.
    #[must_use]
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        facets::derive(&self.records, facet)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.len(), 57);
        assert_eq!(catalog.all()[0].id, "st-peters-basilica");
        assert_eq!(catalog.all()[1].id, "notre-dame-cathedral");
    }

    #[test]
    fn get_returns_every_record() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        for record in catalog.all() {
            let found = catalog.get(&record.id).expect("record by id");
            assert_eq!(found, record);
        }
    }

    #[test]
    fn get_unknown_is_none() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert!(catalog.get("no-such-landmark").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let records = vec![
            record("a", "Church", "Rome, Italy", "Baroque"),
            record("b", "Church", "Rome, Italy", "Baroque"),
            record("a", "Chapel", "Paris, France", "Gothic"),
        ];
        match Catalog::new(records) {
            Err(CatalogError::DuplicateId { id, position }) => {
                assert_eq!(id, "a");
                assert_eq!(position, 2);
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn empty_id_rejected() {
        let records = vec![record(" ", "Church", "Rome, Italy", "Baroque")];
        assert!(matches!(
            Catalog::new(records),
            Err(CatalogError::EmptyId { position: 0 })
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn related_skips_self_and_keeps_order() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let related = catalog.related("notre-dame-cathedral", 4);
        let ids: Vec<_> = related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "st-peters-basilica",
                "sagrada-familia",
                "mont-saint-michel",
                "cologne-cathedral"
            ]
        );
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&vec![record("solo", "Chapel", "Oslo, Norway", "Modern")])
            .expect("serialize");
        std::fs::write(&path, json).expect("write catalog");

        let catalog = Catalog::from_path(&path).expect("load catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("solo").map(|r| r.country()), Some("Norway"));
    }

    #[test]
    fn from_path_missing_file() {
        let err = Catalog::from_path(Path::new("/nonexistent/catalog.json"))
            .expect_err("missing file");
        assert!(err.to_string().contains("Cannot read catalog"));
    }
}
