// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Fallback content for the detail page.
//!
//! A [`Composer`] wraps one record and its [`Classification`]. Every fragment
//! is a lookup in a priority table; the first row whose tags intersect the
//! record's wins, otherwise the fragment's default phrase is used. The
//! accessors at the bottom prefer the record's explicit override and fall
//! back to the composed value.

use crate::classify::{BuildingKind, Classification, PeriodFamily, Region, StyleFamily};
use crate::model::{LandmarkRecord, NamedEntry, TimelineEvent};
use crate::timeline;

type Table<K, T = &'static str> = [(&'static [K], T)];

const COMMISSIONER: &Table<BuildingKind> = &[
    (&[BuildingKind::Cathedral], "the local bishop and diocese"),
    (&[BuildingKind::Basilica], "the Pope and Church authorities"),
    (
        &[BuildingKind::Monastery, BuildingKind::Abbey],
        "the monastic order",
    ),
];

const HISTORICAL_CONTEXT: &Table<PeriodFamily> = &[
    (
        &[PeriodFamily::Medieval, PeriodFamily::Gothic],
        "growing urban populations and increasing religious devotion",
    ),
    (
        &[PeriodFamily::Renaissance],
        "cultural rebirth and renewed interest in classical forms",
    ),
    (
        &[PeriodFamily::Baroque],
        "the Counter-Reformation and Catholic Church's response to Protestantism",
    ),
    (
        &[PeriodFamily::Modern],
        "industrialization and new construction technologies",
    ),
];

const HISTORICAL_EVENTS: &Table<Region> = &[
    (
        &[Region::France],
        "the French Revolution, World Wars, and modern restoration efforts",
    ),
    (
        &[Region::Italy, Region::Vatican],
        "the Renaissance, political unification of Italy, and World Wars",
    ),
    (
        &[Region::Spain],
        "the Reconquista, Spanish Civil War, and modern tourism",
    ),
    (
        &[Region::Germany],
        "the Reformation, World Wars, and post-war reconstruction",
    ),
    (
        &[Region::England, Region::London],
        "the English Reformation, Industrial Revolution, and the Blitz",
    ),
];

const CHARACTERISTICS: &Table<StyleFamily> = &[
    (
        &[StyleFamily::Gothic],
        "pointed arches, ribbed vaults, flying buttresses, and large stained glass windows",
    ),
    (
        &[StyleFamily::Renaissance],
        "symmetry, proportion, geometry, and classical orders",
    ),
    (
        &[StyleFamily::Baroque],
        "dramatic use of light, rich decoration, and dynamic forms",
    ),
    (
        &[StyleFamily::Romanesque],
        "round arches, thick walls, sturdy pillars, and decorative arcading",
    ),
    (
        &[StyleFamily::Byzantine],
        "domes, mosaics, and a rich use of interior decoration",
    ),
];

const SPATIAL_ORGANIZATION: &Table<BuildingKind> = &[
    (
        &[BuildingKind::Cathedral, BuildingKind::Basilica],
        "a cruciform plan with a central nave, side aisles, transept, and apse",
    ),
    (
        &[BuildingKind::Church],
        "a longitudinal plan with a clear progression from entrance to altar",
    ),
    (
        &[BuildingKind::Chapel],
        "a simple, intimate layout designed for smaller congregations",
    ),
    (
        &[BuildingKind::Monastery, BuildingKind::Abbey],
        "a complex arrangement of religious and communal spaces around a cloister",
    ),
];

const SPATIAL_EFFECT: &Table<PeriodFamily> = &[
    (&[PeriodFamily::Gothic], "verticality and divine light"),
    (
        &[PeriodFamily::Renaissance],
        "harmony and human-scaled proportions",
    ),
    (&[PeriodFamily::Baroque], "drama and emotional impact"),
    (&[PeriodFamily::Byzantine], "mystical transcendence"),
    (&[PeriodFamily::Modern], "simplicity and spiritual focus"),
];

const MATERIALS: &Table<Region> = &[
    (
        &[Region::Italy, Region::Vatican],
        "marble, travertine, and brick",
    ),
    (&[Region::France], "limestone, stained glass, and lead"),
    (&[Region::Spain], "sandstone, granite, and plaster"),
    (&[Region::Germany], "sandstone, brick, and timber"),
    (
        &[Region::Russia],
        "brick, wood, and colorful ceramic tiles",
    ),
];

const TECHNIQUES: &Table<PeriodFamily> = &[
    (
        &[PeriodFamily::Gothic],
        "pointed arches, ribbed vaults, and flying buttresses",
    ),
    (
        &[PeriodFamily::Renaissance],
        "dome construction and classical proportioning systems",
    ),
    (
        &[PeriodFamily::Byzantine],
        "pendentives and dome construction",
    ),
    (
        &[PeriodFamily::Modern],
        "reinforced concrete and steel framing",
    ),
];

const RELIGIOUS_FUNCTION: &Table<BuildingKind> = &[
    (
        &[BuildingKind::Cathedral],
        "the seat of a bishop and the mother church of a diocese",
    ),
    (
        &[BuildingKind::Basilica],
        "a church of special distinction granted by papal designation",
    ),
    (
        &[BuildingKind::Church],
        "a place of regular worship for the local Catholic community",
    ),
    (
        &[BuildingKind::Chapel],
        "a smaller place of worship, often dedicated to a specific saint or purpose",
    ),
    (
        &[BuildingKind::Monastery, BuildingKind::Abbey],
        "a center of religious life for a community of monks or nuns",
    ),
];

const LITURGICAL_PURPOSE: &Table<PeriodFamily> = &[
    (
        &[PeriodFamily::Medieval, PeriodFamily::Gothic],
        "facilitate processions and the veneration of relics",
    ),
    (
        &[PeriodFamily::Renaissance, PeriodFamily::Baroque],
        "emphasize the centrality of the Mass and the Eucharist",
    ),
    (
        &[PeriodFamily::Modern],
        "create a sense of community and active participation in the liturgy",
    ),
];

const ORIENTATION: &Table<PeriodFamily> = &[
    (
        &[
            PeriodFamily::Medieval,
            PeriodFamily::Gothic,
            PeriodFamily::Romanesque,
        ],
        "an east-west orientation, with the altar at the east end symbolizing Christ as the \"rising sun\"",
    ),
    (
        &[PeriodFamily::Renaissance, PeriodFamily::Baroque],
        "a centralized or longitudinal plan that emphasizes processional movement toward the altar",
    ),
    (
        &[PeriodFamily::Modern],
        "a flexible arrangement that may adapt traditional orientations to modern urban contexts",
    ),
];

const RELIGIOUS_EVENTS: &Table<BuildingKind> = &[
    (
        &[BuildingKind::Cathedral],
        "major diocesan celebrations, ordinations, and episcopal liturgies",
    ),
    (
        &[BuildingKind::Basilica],
        "papal visits, special jubilees, and important feast days",
    ),
    (
        &[BuildingKind::Monastery, BuildingKind::Abbey],
        "monastic prayer cycles, retreats, and religious community life",
    ),
    (
        &[BuildingKind::Shrine],
        "pilgrimages, healing services, and devotional practices",
    ),
];

type Entries = &'static [(&'static str, &'static str)];

const ELEMENTS: &Table<StyleFamily, Entries> = &[
    (
        &[StyleFamily::Gothic],
        &[
            (
                "Flying Buttresses",
                "External arched supports that allow for taller, thinner walls and larger windows",
            ),
            (
                "Pointed Arches",
                "Arches that come to a point at the top, allowing for greater height and structural support",
            ),
            (
                "Ribbed Vaults",
                "Ceiling vaulting with protruding ribs that distribute weight and allow for more complex ceiling designs",
            ),
            (
                "Rose Windows",
                "Large circular stained glass windows, typically found on the west façade or transepts",
            ),
        ],
    ),
    (
        &[StyleFamily::Renaissance],
        &[
            (
                "Classical Orders",
                "Use of Doric, Ionic, or Corinthian columns and proportions based on classical antiquity",
            ),
            (
                "Dome",
                "Hemispherical structure that crowns the building, often with a lantern at the top",
            ),
            (
                "Symmetrical Façade",
                "Balanced design with equal elements on either side of a central axis",
            ),
            (
                "Rounded Arches",
                "Semicircular arches used in windows, doorways, and arcades",
            ),
        ],
    ),
    (
        &[StyleFamily::Baroque],
        &[
            (
                "Dramatic Lighting",
                "Strategic use of light sources to create dramatic effects and highlight important elements",
            ),
            (
                "Elaborate Decoration",
                "Rich ornamentation, including sculptures, gilding, and painted surfaces",
            ),
            (
                "Curved Forms",
                "Dynamic, curved walls, columns, and decorative elements that create a sense of movement",
            ),
            (
                "Trompe l'oeil",
                "Illusionistic painting techniques that create the appearance of three-dimensional space",
            ),
        ],
    ),
    (
        &[StyleFamily::Byzantine],
        &[
            (
                "Central Dome",
                "Large dome resting on pendentives, symbolizing heaven above the earthly realm",
            ),
            (
                "Mosaics",
                "Decorative wall and ceiling coverings made of small pieces of colored glass or stone",
            ),
            (
                "Pendentives",
                "Triangular sections of vaulting that allow a circular dome to rest on a square base",
            ),
            (
                "Iconostasis",
                "Screen decorated with icons that separates the nave from the sanctuary",
            ),
        ],
    ),
];

const DEFAULT_ELEMENTS: Entries = &[
    (
        "Main Façade",
        "The principal exterior face of the building, often elaborately decorated",
    ),
    (
        "Nave",
        "The central, longitudinal space of the church where the congregation gathers",
    ),
    (
        "Altar",
        "The sacred table where the Eucharist is celebrated, typically at the east end",
    ),
    (
        "Bell Tower/Spire",
        "Vertical element that houses bells and serves as a visual landmark",
    ),
];

const SACRED_ART: &Table<StyleFamily, Entries> = &[
    (
        &[StyleFamily::Gothic],
        &[
            (
                "Stained Glass Windows",
                "Colored glass depicting biblical scenes and saints, filtering light to create a heavenly atmosphere",
            ),
            (
                "Sculptural Program",
                "Statues and reliefs on the façade and interior telling biblical stories and depicting saints",
            ),
            (
                "Choir Screen",
                "Ornate divider between the choir and nave, often decorated with religious scenes",
            ),
        ],
    ),
    (
        &[StyleFamily::Renaissance],
        &[
            (
                "Frescoes",
                "Wall paintings depicting biblical narratives and theological concepts",
            ),
            (
                "Altar Paintings",
                "Devotional images focusing on Christ, the Virgin Mary, and saints",
            ),
            (
                "Classical Symbolism",
                "Integration of classical motifs with Christian symbolism",
            ),
        ],
    ),
    (
        &[StyleFamily::Baroque],
        &[
            (
                "Ceiling Paintings",
                "Illusionistic paintings creating visions of heaven opening above the congregation",
            ),
            (
                "Dramatic Sculptures",
                "Dynamic, emotional sculptural works depicting religious ecstasy and conversion",
            ),
            (
                "Elaborate Altarpieces",
                "Multi-layered compositions framing sacred images and relics",
            ),
        ],
    ),
    (
        &[StyleFamily::Byzantine],
        &[
            (
                "Mosaics",
                "Gold-backed glass tesserae creating luminous images of Christ, saints, and biblical scenes",
            ),
            (
                "Icons",
                "Sacred images following strict theological and artistic conventions",
            ),
            (
                "Liturgical Furnishings",
                "Ornate altar furnishings, lamps, and ceremonial objects",
            ),
        ],
    ),
];

const DEFAULT_SACRED_ART: Entries = &[
    (
        "Religious Artwork",
        "Paintings and sculptures depicting important religious figures and stories",
    ),
    (
        "Liturgical Symbols",
        "Visual elements representing aspects of Catholic faith and practice",
    ),
    (
        "Decorative Elements",
        "Ornamental features that enhance the sacred character of the space",
    ),
];

/// Labelled rows plus a closing note, e.g. the default opening hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoTable {
    pub rows: &'static [(&'static str, &'static str)],
    pub note: &'static str,
}

pub const OPENING_HOURS: InfoTable = InfoTable {
    rows: &[
        ("Monday - Saturday:", "9:00 AM - 5:00 PM"),
        ("Sunday:", "1:00 PM - 5:00 PM"),
    ],
    note: "Hours may vary during religious holidays and special events.",
};

pub const ADMISSION: InfoTable = InfoTable {
    rows: &[
        ("General:", "€10"),
        ("Students/Seniors:", "€7"),
        ("Children under 12:", "Free"),
    ],
    note: "Entry to worship services is always free.",
};

pub const VISITOR_TIPS: [&str; 5] = [
    "Dress modestly - shoulders and knees should be covered",
    "Photography is permitted in most areas, but no flash",
    "Guided tours are available in multiple languages",
    "Visit early in the morning to avoid crowds",
    "Allow at least 1-2 hours for your visit",
];

pub const NEARBY_ATTRACTIONS: [&str; 5] = [
    "Local museums and art galleries",
    "Historic city center",
    "Traditional restaurants and cafes",
    "Public gardens and parks",
    "Other religious and historical sites",
];

/// Rich text for one detail section: the record's own markdown, or composed
/// plain paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prose<'a> {
    Override(&'a str),
    Composed(Vec<String>),
}

/// Visitor information block: the record's own markdown, or a default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Info<'a> {
    Override(&'a str),
    Default(&'static InfoTable),
}

/// Fallback content for one record.
#[derive(Debug, Clone)]
pub struct Composer<'a> {
    record: &'a LandmarkRecord,
    tags: Classification,
}

impl<'a> Composer<'a> {
    #[must_use]
    pub fn new(record: &'a LandmarkRecord) -> Self {
        Self {
            record,
            tags: Classification::of(record),
        }
    }

    #[must_use]
    pub fn record(&self) -> &'a LandmarkRecord {
        self.record
    }

    #[must_use]
    pub fn classification(&self) -> &Classification {
        &self.tags
    }

    pub fn commissioner(&self) -> &'static str {
        self.tags
            .kinds
            .pick(COMMISSIONER, "local religious authorities")
    }

    pub fn historical_setting(&self) -> &'static str {
        self.tags.periods.pick(
            HISTORICAL_CONTEXT,
            "significant religious and cultural development",
        )
    }

    pub fn historical_events(&self) -> &'static str {
        self.tags.regions.pick(
            HISTORICAL_EVENTS,
            "wars, political changes, and cultural transformations",
        )
    }

    pub fn characteristics(&self) -> &'static str {
        self.tags.styles.pick(
            CHARACTERISTICS,
            "distinctive elements that reflect its historical and cultural context",
        )
    }

    pub fn spatial_organization(&self) -> &'static str {
        self.tags.kinds.pick(
            SPATIAL_ORGANIZATION,
            "a traditional religious layout adapted to its specific function",
        )
    }

    pub fn spatial_effect(&self) -> &'static str {
        self.tags
            .periods
            .pick(SPATIAL_EFFECT, "sacred presence and religious devotion")
    }

    pub fn materials(&self) -> &'static str {
        self.tags.regions.pick(
            MATERIALS,
            "locally sourced stone, wood, and decorative elements",
        )
    }

    pub fn techniques(&self) -> &'static str {
        self.tags
            .periods
            .pick(TECHNIQUES, "masonry techniques appropriate to the period")
    }

    pub fn religious_function(&self) -> &'static str {
        self.tags.kinds.pick(
            RELIGIOUS_FUNCTION,
            "an important center of Catholic worship and tradition",
        )
    }

    pub fn liturgical_purpose(&self) -> &'static str {
        self.tags.periods.pick(
            LITURGICAL_PURPOSE,
            "support Catholic liturgical practices and devotions",
        )
    }

    pub fn orientation(&self) -> &'static str {
        self.tags.periods.pick(
            ORIENTATION,
            "traditional Catholic spatial arrangements that reflect theological symbolism",
        )
    }

    pub fn religious_events(&self) -> &'static str {
        self.tags.kinds.pick(
            RELIGIOUS_EVENTS,
            "regular masses, sacramental celebrations, and local religious traditions",
        )
    }

    fn features_phrase(&self) -> String {
        if self.record.features.is_empty() {
            "distinctive architectural features".to_string()
        } else {
            self.record.features.join(", ")
        }
    }

    /// The three composed history paragraphs.
    #[must_use]
    pub fn history_paragraphs(&self) -> Vec<String> {
        let r = self.record;
        let period = r.period.to_lowercase();
        vec![
            format!(
                "{} was constructed during the {period} period, specifically between {}. This era was characterized by significant developments in architectural techniques and religious expression.",
                r.name, r.year_built
            ),
            format!(
                "The construction was commissioned by {} and took place during a time of {}. The building has survived through centuries of history, witnessing {}.",
                self.commissioner(),
                self.historical_setting(),
                self.historical_events()
            ),
            format!(
                "Over the centuries, {} has undergone several renovations and restorations, each adding to its historical significance while preserving its original character and purpose.",
                r.name
            ),
        ]
    }

    /// The three composed architecture paragraphs.
    #[must_use]
    pub fn architecture_paragraphs(&self) -> Vec<String> {
        let r = self.record;
        vec![
            format!(
                "{} exemplifies the {} style, characterized by {}. The building's design reflects the technical innovations and aesthetic preferences of its time.",
                r.name,
                r.architectural_style,
                self.characteristics()
            ),
            format!(
                "The structure features {}, which are hallmarks of {} religious architecture. The spatial organization follows {}, creating a sense of {}.",
                self.features_phrase(),
                r.period.to_lowercase(),
                self.spatial_organization(),
                self.spatial_effect()
            ),
            format!(
                "The materials used in construction include {}, showcasing the craftsmanship and technical abilities of the builders. The construction techniques employed, such as {}, were innovative for their time.",
                self.materials(),
                self.techniques()
            ),
        ]
    }

    /// The three composed religious significance paragraphs.
    #[must_use]
    pub fn religious_paragraphs(&self) -> Vec<String> {
        let r = self.record;
        vec![
            format!(
                "As a {}, {} serves as {}. The building embodies the Catholic Church's theological principles through its design, artwork, and spatial arrangement.",
                r.kind.to_lowercase(),
                r.name,
                self.religious_function()
            ),
            format!(
                "The sacred space is organized to {}, reflecting the liturgical practices of the time it was built. The orientation and layout follow {}, which has symbolic meaning in Catholic tradition.",
                self.liturgical_purpose(),
                self.orientation()
            ),
            format!(
                "Throughout its history, {} has been associated with {}. It continues to be an important place of worship, pilgrimage, and spiritual significance for Catholics worldwide.",
                r.name,
                self.religious_events()
            ),
        ]
    }

    pub fn historical_context(&self) -> Prose<'a> {
        prose(&self.record.historical_context, || self.history_paragraphs())
    }

    pub fn architectural_details(&self) -> Prose<'a> {
        prose(&self.record.architectural_details, || {
            self.architecture_paragraphs()
        })
    }

    pub fn religious_significance(&self) -> Prose<'a> {
        prose(&self.record.religious_significance, || {
            self.religious_paragraphs()
        })
    }

    pub fn architectural_elements(&self) -> Vec<NamedEntry> {
        entries(
            &self.record.architectural_elements,
            self.tags.styles.pick(ELEMENTS, DEFAULT_ELEMENTS),
        )
    }

    pub fn sacred_art(&self) -> Vec<NamedEntry> {
        entries(
            &self.record.sacred_art,
            self.tags.styles.pick(SACRED_ART, DEFAULT_SACRED_ART),
        )
    }

    pub fn timeline(&self) -> Vec<TimelineEvent> {
        match &self.record.timeline {
            Some(events) if !events.is_empty() => events.clone(),
            _ => timeline::fallback(self.record),
        }
    }

    pub fn opening_hours(&self) -> Info<'a> {
        info(&self.record.opening_hours, &OPENING_HOURS)
    }

    pub fn admission(&self) -> Info<'a> {
        info(&self.record.admission, &ADMISSION)
    }

    pub fn visitor_tips(&self) -> Vec<String> {
        strings(&self.record.visitor_tips, &VISITOR_TIPS)
    }

    pub fn nearby_attractions(&self) -> Vec<String> {
        strings(&self.record.nearby_attractions, &NEARBY_ATTRACTIONS)
    }
}

// Blank overrides count as absent.

fn prose<'a>(value: &'a Option<String>, compose: impl FnOnce() -> Vec<String>) -> Prose<'a> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => Prose::Override(text),
        _ => Prose::Composed(compose()),
    }
}

fn info<'a>(value: &'a Option<String>, table: &'static InfoTable) -> Info<'a> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => Info::Override(text),
        _ => Info::Default(table),
    }
}

fn entries(value: &Option<Vec<NamedEntry>>, fallback: Entries) -> Vec<NamedEntry> {
    match value {
        Some(list) if !list.is_empty() => list.clone(),
        _ => fallback
            .iter()
            .map(|(name, description)| NamedEntry::new(*name, *description))
            .collect(),
    }
}

fn strings(value: &Option<Vec<String>>, fallback: &[&str]) -> Vec<String> {
    match value {
        Some(list) if !list.is_empty() => list.clone(),
        _ => fallback.iter().map(|s| s.to_string()).collect(),
    }
}
