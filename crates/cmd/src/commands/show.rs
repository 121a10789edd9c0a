// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, bail};
use catalog::compose::{Info, Prose};
use catalog::{Composer, NamedEntry};
use sitegen::Site;

/// Print one landmark with its detail sections. Missing content is filled
/// with the composed fallback, exactly as the detail page shows it.
pub fn show_command<F>(site: &Site, id: &str, mut handler: F) -> Result<()>
where
    F: FnMut(String),
{
    let Some(record) = site.catalog().get(id) else {
        diagnostics::warn!("Unknown landmark {id}", id: id);
        bail!("Architecture not found: '{}'", id);
    };
    let composer = Composer::new(record);

    handler(format!("{} ({})", record.name, record.id));
    handler(format!("Type:     {}", record.kind));
    handler(format!("Location: {}", record.location));
    handler(format!("Period:   {}", record.period));
    handler(format!("Style:    {}", record.architectural_style));
    handler(format!("Built:    {}", record.year_built));
    handler(String::new());
    handler(record.description.clone());
    for feature in &record.features {
        handler(format!("  * {feature}"));
    }

    section(&mut handler, "Historical Context");
    prose(&mut handler, composer.historical_context());

    section(&mut handler, "Timeline");
    for event in composer.timeline() {
        handler(format!("  {:<12} {}", event.year, event.event));
    }

    section(&mut handler, "Architectural Details");
    prose(&mut handler, composer.architectural_details());

    section(&mut handler, "Key Architectural Elements");
    entries(&mut handler, &composer.architectural_elements());

    section(&mut handler, "Religious Significance");
    prose(&mut handler, composer.religious_significance());

    section(&mut handler, "Sacred Art & Symbolism");
    entries(&mut handler, &composer.sacred_art());

    section(&mut handler, "Opening Hours");
    info(&mut handler, composer.opening_hours());

    section(&mut handler, "Admission");
    info(&mut handler, composer.admission());

    section(&mut handler, "Visitor Tips");
    for tip in composer.visitor_tips() {
        handler(format!("  * {tip}"));
    }

    section(&mut handler, "Nearby Attractions");
    for place in composer.nearby_attractions() {
        handler(format!("  * {place}"));
    }

    Ok(())
}

fn section<F: FnMut(String)>(handler: &mut F, title: &str) {
    handler(String::new());
    handler(format!("== {title} =="));
}

fn prose<F: FnMut(String)>(handler: &mut F, body: Prose<'_>) {
    match body {
        Prose::Override(text) => handler(text.trim().to_string()),
        Prose::Composed(paragraphs) => {
            for (i, paragraph) in paragraphs.into_iter().enumerate() {
                if i > 0 {
                    handler(String::new());
                }
                handler(paragraph);
            }
        }
    }
}

fn entries<F: FnMut(String)>(handler: &mut F, list: &[NamedEntry]) {
    for entry in list {
        handler(format!("  {}: {}", entry.name, entry.description));
    }
}

fn info<F: FnMut(String)>(handler: &mut F, block: Info<'_>) {
    match block {
        Info::Override(text) => handler(text.trim().to_string()),
        Info::Default(table) => {
            for (label, value) in table.rows {
                handler(format!("  {label} {value}"));
            }
            handler(format!("  ({})", table.note));
        }
    }
}
