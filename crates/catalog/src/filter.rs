// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Filter engine for the three facet predicates of the home listing.
//!
//! Type and country match exactly; style matches by substring against the
//! raw `architectural_style`, so selecting "Gothic" also keeps
//! "French Gothic" and "Gothic with Baroque elements".

use crate::facets::{ALL, Facet};
use crate::model::LandmarkRecord;
use serde::{Deserialize, Serialize};

/// One facet's selection: unrestricted, or a concrete derived value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Value(v) => v,
        }
    }
}

/// Empty or exactly "All" selects everything. Any other text is kept as
/// given and compared against record values without trimming.
impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::Value(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::from(value.as_str())
    }
}

impl From<Option<&str>> for Selection {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Selection::All, Selection::from)
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        value.as_str().to_string()
    }
}

/// Active selections for all three facets. Deserializes from the home page
/// query string (`?type=Cathedral&country=France`); absent keys mean "All".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    #[serde(rename = "type")]
    pub kind: Selection,
    pub country: Selection,
    pub style: Selection,
}

impl FilterSelection {
    /// Everything selected ("All" on every facet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, value: impl Into<Selection>) -> Self {
        self.kind = value.into();
        self
    }

    #[must_use]
    pub fn with_country(mut self, value: impl Into<Selection>) -> Self {
        self.country = value.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, value: impl Into<Selection>) -> Self {
        self.style = value.into();
        self
    }

    #[must_use]
    pub fn get(&self, facet: Facet) -> &Selection {
        match facet {
            Facet::Type => &self.kind,
            Facet::Country => &self.country,
            Facet::Style => &self.style,
        }
    }

    /// A copy with `facet` reset to "All" (the badge "×" link).
    #[must_use]
    pub fn cleared(&self, facet: Facet) -> Self {
        let mut next = self.clone();
        match facet {
            Facet::Type => next.kind = Selection::All,
            Facet::Country => next.country = Selection::All,
            Facet::Style => next.style = Selection::All,
        }
        next
    }

    /// Facets with a concrete selection, in type / country / style order.
    #[must_use]
    pub fn active(&self) -> Vec<(Facet, &str)> {
        Facet::EVERY
            .into_iter()
            .filter_map(|facet| match self.get(facet) {
                Selection::All => None,
                Selection::Value(v) => Some((facet, v.as_str())),
            })
            .collect()
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.kind.is_all() && self.country.is_all() && self.style.is_all()
    }

    /// True when `record` passes all three predicates.
    #[must_use]
    pub fn matches(&self, record: &LandmarkRecord) -> bool {
        let type_ok = match &self.kind {
            Selection::All => true,
            Selection::Value(v) => record.kind == *v,
        };
        let country_ok = match &self.country {
            Selection::All => true,
            Selection::Value(v) => record.country() == v.as_str(),
        };
        let style_ok = match &self.style {
            Selection::All => true,
            Selection::Value(v) => record.architectural_style.contains(v.as_str()),
        };
        type_ok && country_ok && style_ok
    }

    /// The matching subsequence of `records`, order preserved.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [LandmarkRecord]) -> Vec<&'a LandmarkRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
