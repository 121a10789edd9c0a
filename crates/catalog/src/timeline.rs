// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Fallback construction timeline derived from `yearBuilt`.

use crate::model::{LandmarkRecord, TimelineEvent};

/// Entries appended after the three construction milestones.
const LATER_HISTORY: [(&str, &str); 4] = [
    ("18th century", "Renovations and additions in Baroque style"),
    ("19th century", "Major restoration work"),
    ("20th century", "Modern conservation efforts"),
    (
        "Present",
        "Continues to serve as an important religious and cultural landmark",
    ),
];

/// Display years of the three construction milestones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionYears {
    pub start: String,
    pub middle: String,
    pub end: String,
}

impl ConstructionYears {
    /// Read milestones out of a free-form `yearBuilt` string.
    ///
    /// - `"1163-1345"`: start and end are the two pieces around the first
    ///   hyphen; the middle is their floored average when both begin with an
    ///   integer and the sum fits in an `i64`, else the start.
    /// - `"12th century"`: all three are the input.
    /// - `"1895"`: a leading year `y` gives `y`, `y+50`, `y+100`.
    /// - anything else, including a year too large to offset: all three are
    ///   the input.
    #[must_use]
    pub fn parse(year_built: &str) -> Self {
        if year_built.contains('-') {
            let mut pieces = year_built.split('-');
            let start = non_empty_or(pieces.next(), year_built);
            let end = non_empty_or(pieces.next(), year_built);
            let middle = match (leading_int(start), leading_int(end)) {
                (Some(a), Some(b)) => a
                    .checked_add(b)
                    .map_or_else(|| start.to_string(), |sum| sum.div_euclid(2).to_string()),
                _ => start.to_string(),
            };
            return Self {
                start: start.to_string(),
                middle,
                end: end.to_string(),
            };
        }

        if !year_built.contains("century") {
            let offsets = leading_int(year_built)
                .and_then(|y| Some((y.checked_add(50)?, y.checked_add(100)?)));
            if let Some((middle, end)) = offsets {
                return Self {
                    start: year_built.to_string(),
                    middle: middle.to_string(),
                    end: end.to_string(),
                };
            }
        }

        Self {
            start: year_built.to_string(),
            middle: year_built.to_string(),
            end: year_built.to_string(),
        }
    }
}

fn non_empty_or<'a>(piece: Option<&'a str>, whole: &'a str) -> &'a str {
    match piece {
        Some(p) if !p.trim().is_empty() => p,
        _ => whole,
    }
}

/// Integer prefix of `text` after leading whitespace, with an optional sign.
/// `"1743 (reconstructed 1994"` → 1743, `"present"` → None.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    rest[..digits].parse::<i64>().ok().map(|n| sign * n)
}

/// The seven-entry timeline shown when a record has no explicit one.
#[must_use]
pub fn fallback(record: &LandmarkRecord) -> Vec<TimelineEvent> {
    let years = ConstructionYears::parse(&record.year_built);
    let mut events = vec![
        TimelineEvent::new(years.start, format!("Construction begins on {}", record.name)),
        TimelineEvent::new(years.middle, "Major architectural elements completed"),
        TimelineEvent::new(years.end, "Construction completed or consecration"),
    ];
    events.extend(
        LATER_HISTORY
            .iter()
            .map(|(year, event)| TimelineEvent::new(*year, *event)),
    );
    events
}
