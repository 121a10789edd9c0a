// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Facet derivation: the distinct type / country / style values offered as
//! filters on the home listing.

use crate::model::LandmarkRecord;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Sentinel facet value meaning "no restriction".
pub const ALL: &str = "All";

/// A filterable dimension of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Type,
    Country,
    Style,
}

impl Facet {
    pub const EVERY: [Facet; 3] = [Facet::Type, Facet::Country, Facet::Style];

    /// Query parameter / CLI name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Facet::Type => "type",
            Facet::Country => "country",
            Facet::Style => "style",
        }
    }

    /// Derived value of this facet for one record.
    #[must_use]
    pub fn value_of(self, record: &LandmarkRecord) -> &str {
        match self {
            Facet::Type => &record.kind,
            Facet::Country => record.country(),
            Facet::Style => record.primary_style(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type" => Ok(Facet::Type),
            "country" => Ok(Facet::Country),
            "style" => Ok(Facet::Style),
            other => Err(format!(
                "unknown facet '{}' (expected type, country or style)",
                other
            )),
        }
    }
}

/// Last comma-separated segment of a location ("Paris, France" → "France").
/// A location without a comma is returned whole.
#[must_use]
pub fn country_of(location: &str) -> &str {
    location.rsplit(',').next().unwrap_or(location).trim()
}

/// Leading style token: split on ",", then on " and ", first piece, trimmed
/// ("Renaissance and Baroque" → "Renaissance").
#[must_use]
pub fn primary_style_of(style: &str) -> &str {
    let first = style.split(',').next().unwrap_or(style);
    first.split(" and ").next().unwrap_or(first).trim()
}

/// Distinct values of `facet` across `records` together with the "All"
/// sentinel, in ascending byte order. The sentinel sorts with the values, so
/// "Abbey" comes before "All". A record whose derived value is literally
/// "All" does not add a second sentinel.
#[must_use]
pub fn derive(records: &[LandmarkRecord], facet: Facet) -> Vec<String> {
    let distinct: BTreeSet<&str> = std::iter::once(ALL)
        .chain(records.iter().map(|r| facet.value_of(r)))
        .collect();

    distinct.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use crate::model::fixtures::record;

    #[test]
    fn country_from_location() {
        assert_eq!(country_of("Paris, France"), "France");
        assert_eq!(country_of("Vatican City"), "Vatican City");
        assert_eq!(country_of("La Défense, Paris, France"), "France");
        assert_eq!(country_of(""), "");
    }

    #[test]
    fn primary_style_tokens() {
        assert_eq!(primary_style_of("Renaissance and Baroque"), "Renaissance");
        assert_eq!(primary_style_of("Romanesque, Gothic, Baroque"), "Romanesque");
        assert_eq!(primary_style_of("French Gothic"), "French Gothic");
        assert_eq!(
            primary_style_of("Spanish Renaissance, Baroque with Andean influences"),
            "Spanish Renaissance"
        );
    }

    #[test]
    fn all_sentinel_sorted_with_values() {
        let records = vec![
            record("a", "Church", "Rome, Italy", "Baroque"),
            record("b", "Abbey", "London, England", "Gothic"),
            record("c", "Church", "Venice, Italy", "Baroque"),
        ];
        assert_eq!(derive(&records, Facet::Type), vec!["Abbey", "All", "Church"]);
        assert_eq!(
            derive(&records, Facet::Country),
            vec!["All", "England", "Italy"]
        );
    }

    #[test]
    fn byte_order_is_case_sensitive() {
        let records = vec![
            record("a", "chapel", "X", "s"),
            record("b", "Cathedral", "X", "s"),
            record("c", "Zawiya", "X", "s"),
        ];
        assert_eq!(
            derive(&records, Facet::Type),
            vec!["All", "Cathedral", "Zawiya", "chapel"]
        );
    }

    #[test]
    fn literal_all_not_duplicated() {
        let records = vec![record("a", "All", "X", "s"), record("b", "Church", "X", "s")];
        let values = derive(&records, Facet::Type);
        assert_eq!(values, vec!["All", "Church"]);
    }

    #[test]
    fn derivation_is_deduplicated_and_idempotent() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        for facet in Facet::EVERY {
            let first = catalog.facet_values(facet);
            let second = catalog.facet_values(facet);
            assert_eq!(first, second);

            let unique: BTreeSet<&String> = first.iter().collect();
            assert_eq!(unique.len(), first.len(), "duplicates in {facet}");
            assert_eq!(first.iter().filter(|v| *v == ALL).count(), 1);
            assert!(first.is_sorted(), "{facet} not in byte order");
        }
    }

    #[test]
    fn embedded_type_facet() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(
            catalog.facet_values(Facet::Type),
            vec![
                "Abbey",
                "All",
                "Basilica",
                "Basilica/Mosque/Museum",
                "Cathedral",
                "Chapel",
                "Church",
                "Monastery"
            ]
        );
    }

    #[test]
    fn embedded_country_facet() {
        let countries = Catalog::embedded()
            .expect("embedded catalog")
            .facet_values(Facet::Country);
        assert_eq!(countries.len(), 21);
        assert!(countries.contains(&"Vatican City".to_string()));
        assert!(countries.contains(&"France".to_string()));
        assert!(!countries.iter().any(|c| c.contains(',')));
    }

    #[test]
    fn facet_names_parse() {
        for facet in Facet::EVERY {
            assert_eq!(facet.name().parse::<Facet>(), Ok(facet));
        }
        assert_eq!(" Country ".parse::<Facet>(), Ok(Facet::Country));
        assert!("period".parse::<Facet>().is_err());
    }
}
