// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Keyword classification of a record's free-form fields.
//!
//! `type`, `period`, `architectural_style` and `location` are plain display
//! strings. They are read once per record into closed sets of tags; a field
//! may carry several tags ("Romanesque, Gothic, Baroque" → three style
//! tags). Fallback prose is then chosen from the tags by each fragment's own
//! priority table (see [`Tags::pick`]).

/// A closed keyword category.
pub trait Keyword: Copy + Eq + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Lower-case substring that marks this variant.
    fn keyword(self) -> &'static str;
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $kw:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Keyword for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn keyword(self) -> &'static str {
                match self {
                    $($name::$variant => $kw),+
                }
            }
        }
    };
}

keyword_enum! {
    /// Building kind, read from `type`.
    BuildingKind {
        Cathedral => "cathedral",
        Basilica => "basilica",
        Church => "church",
        Chapel => "chapel",
        Monastery => "monastery",
        Abbey => "abbey",
        Shrine => "shrine",
    }
}

keyword_enum! {
    /// Historical period family, read from `period`.
    PeriodFamily {
        Medieval => "medieval",
        Romanesque => "romanesque",
        Gothic => "gothic",
        Renaissance => "renaissance",
        Baroque => "baroque",
        Byzantine => "byzantine",
        Modern => "modern",
    }
}

keyword_enum! {
    /// Style family, read from `architectural_style`.
    StyleFamily {
        Gothic => "gothic",
        Renaissance => "renaissance",
        Baroque => "baroque",
        Romanesque => "romanesque",
        Byzantine => "byzantine",
    }
}

keyword_enum! {
    /// Region, read from `location`.
    Region {
        France => "france",
        Italy => "italy",
        Vatican => "vatican",
        Spain => "spain",
        Germany => "germany",
        England => "england",
        London => "london",
        Russia => "russia",
    }
}

/// The set of variants of `K` whose keyword occurs in a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags<K: Keyword> {
    matched: Vec<K>,
}

impl<K: Keyword> Tags<K> {
    /// Case-insensitive substring match of every keyword against `text`.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            matched: K::VARIANTS
                .iter()
                .copied()
                .filter(|k| lower.contains(k.keyword()))
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, k: K) -> bool {
        self.matched.contains(&k)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Walk a priority table and return the value of the first row whose
    /// tag set intersects this one; `default` when no row does.
    pub fn pick<T: Copy>(&self, table: &[(&[K], T)], default: T) -> T {
        table
            .iter()
            .find(|(keys, _)| keys.iter().any(|k| self.contains(*k)))
            .map_or(default, |(_, value)| *value)
    }
}

/// All tags of one record, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kinds: Tags<BuildingKind>,
    pub periods: Tags<PeriodFamily>,
    pub styles: Tags<StyleFamily>,
    pub regions: Tags<Region>,
}

impl Classification {
    #[must_use]
    pub fn of(record: &crate::LandmarkRecord) -> Self {
        Self {
            kinds: Tags::of(&record.kind),
            periods: Tags::of(&record.period),
            styles: Tags::of(&record.architectural_style),
            regions: Tags::of(&record.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;

    #[test]
    fn tags_are_case_insensitive() {
        let tags: Tags<StyleFamily> = Tags::of("French GOTHIC");
        assert!(tags.contains(StyleFamily::Gothic));
        assert!(!tags.contains(StyleFamily::Baroque));
    }

    #[test]
    fn multiple_tags_per_field() {
        let tags: Tags<StyleFamily> = Tags::of("Romanesque, Gothic, Baroque");
        assert!(tags.contains(StyleFamily::Romanesque));
        assert!(tags.contains(StyleFamily::Gothic));
        assert!(tags.contains(StyleFamily::Baroque));
        assert!(!tags.contains(StyleFamily::Byzantine));
    }

    #[test]
    fn composite_type_carries_each_kind() {
        let tags: Tags<BuildingKind> = Tags::of("Basilica/Mosque/Museum");
        assert!(tags.contains(BuildingKind::Basilica));
        assert!(!tags.contains(BuildingKind::Church));
    }

    #[test]
    fn pick_follows_table_order_not_text_order() {
        let tags: Tags<StyleFamily> = Tags::of("Baroque over Gothic");
        let table: &[(&[StyleFamily], &str)] = &[
            (&[StyleFamily::Gothic], "gothic"),
            (&[StyleFamily::Baroque], "baroque"),
        ];
        assert_eq!(tags.pick(table, "default"), "gothic");
    }

    #[test]
    fn pick_falls_back_to_default() {
        let tags: Tags<Region> = Tags::of("Cusco, Peru");
        assert!(tags.is_empty());
        let table: &[(&[Region], &str)] = &[(&[Region::France], "france")];
        assert_eq!(tags.pick(table, "default"), "default");
    }

    #[test]
    fn classification_reads_all_fields() {
        let mut r = record("x", "Abbey", "London, England", "Gothic");
        r.period = "Neo-Gothic".to_string();
        let c = Classification::of(&r);
        assert!(c.kinds.contains(BuildingKind::Abbey));
        assert!(c.periods.contains(PeriodFamily::Gothic));
        assert!(c.styles.contains(StyleFamily::Gothic));
        assert!(c.regions.contains(Region::England));
        assert!(c.regions.contains(Region::London));
    }
}
