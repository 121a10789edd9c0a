// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Landmark record types, deserialized from the camelCase catalog JSON.

use serde::{Deserialize, Serialize};

/// One architectural site in the catalog.
///
/// The display strings (`kind`, `period`, `location`, `architectural_style`)
/// are free-form; [`crate::Classification`] reads them once to pick fallback
/// prose. The `Option` fields are explicit overrides: when present they are
/// shown verbatim instead of the composed fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkRecord {
    pub id: String,
    pub name: String,
    /// Building type ("Cathedral", "Basilica/Mosque/Museum", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub period: String,
    pub architectural_style: String,
    pub year_built: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    // Rich-text overrides (markdown; raw HTML is escaped when rendered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architectural_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religious_significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission: Option<String>,

    // Structured overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitor_tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearby_attractions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architectural_elements: Option<Vec<NamedEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sacred_art: Option<Vec<NamedEntry>>,
}

impl LandmarkRecord {
    /// Country facet value: the last comma-separated segment of `location`,
    /// or the whole location when it has no comma.
    #[must_use]
    pub fn country(&self) -> &str {
        crate::facets::country_of(&self.location)
    }

    /// Style facet value: the leading style token of `architectural_style`.
    #[must_use]
    pub fn primary_style(&self) -> &str {
        crate::facets::primary_style_of(&self.architectural_style)
    }
}

/// A dated entry in a landmark's timeline. `year` is display text
/// ("1163", "12th century", "Present").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub event: String,
}

impl TimelineEvent {
    pub fn new(year: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            event: event.into(),
        }
    }
}

/// A titled description, used for architectural elements and sacred art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub name: String,
    pub description: String,
}

impl NamedEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
