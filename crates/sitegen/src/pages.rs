// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Page bodies: the filtered listing, the landmark detail page and the
//! not-found message. Layouts add the surrounding document.

use crate::markdown::render_untrusted;
use crate::routes::{home_url, landmark_url, listing_url, prefix_base};
use catalog::compose::{Info, Prose};
use catalog::{Catalog, Composer, Facet, FilterSelection, LandmarkRecord, NamedEntry};
use maud::{Markup, PreEscaped, html};

/// Number of cards under "More Sacred Architecture".
pub const RELATED_COUNT: usize = 4;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// How the listing is filtered. A static build ships every card and lets
/// `filter.js` hide them; the server sends only the matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    Static,
    Server,
}

impl ListingMode {
    fn as_str(self) -> &'static str {
        match self {
            ListingMode::Static => "static",
            ListingMode::Server => "server",
        }
    }
}

fn facet_label(facet: Facet) -> &'static str {
    match facet {
        Facet::Type => "Type",
        Facet::Country => "Country",
        Facet::Style => "Style",
    }
}

fn image_src(base: &str, record: &LandmarkRecord) -> String {
    match record.image_url.as_deref() {
        Some(url) if url.starts_with('/') => prefix_base(base, url),
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => prefix_base(base, PLACEHOLDER_IMAGE),
    }
}

/// "Showing 1 result" / "Showing 20 results".
#[must_use]
pub fn result_count(n: usize) -> String {
    if n == 1 {
        "Showing 1 result".to_string()
    } else {
        format!("Showing {n} results")
    }
}

/// Home page body: filter form, active filter badges, count and cards.
#[must_use]
pub fn listing(
    base: &str,
    catalog: &Catalog,
    selection: &FilterSelection,
    mode: ListingMode,
) -> Markup {
    let shown: Vec<&LandmarkRecord> = match mode {
        ListingMode::Static => catalog.all().iter().collect(),
        ListingMode::Server => catalog.filter(selection),
    };
    let matching = match mode {
        ListingMode::Static => catalog.filter(selection).len(),
        ListingMode::Server => shown.len(),
    };

    html! {
        section id="catalog" class="catalog" data-mode=(mode.as_str()) {
            form class="filters" method="get" action=(home_url(base)) {
                @for facet in Facet::EVERY {
                    @let current = selection.get(facet).as_str();
                    label for=(facet.name()) { (facet_label(facet)) }
                    select id=(facet.name()) name=(facet.name()) data-facet=(facet.name()) {
                        @for value in catalog.facet_values(facet) {
                            option value=(value) selected[value == current] { (value) }
                        }
                    }
                }
                button type="submit" { "Apply filters" }
            }

            div class="active-filters" {
                @for (facet, value) in selection.active() {
                    span class="badge" data-facet=(facet.name()) {
                        (facet_label(facet)) ": " (value)
                        a href=(listing_url(base, &selection.cleared(facet))) aria-label="Clear filter" { "×" }
                    }
                }
            }

            div class="no-results" hidden[matching > 0] {
                h2 { "No results found" }
                p { "No architecture matches your current filter." }
                a class="button" href=(home_url(base)) { "Show all" }
            }

            p class="result-count" hidden[matching == 0] { (result_count(matching)) }

            div class="cards" {
                @for record in &shown {
                    (card(base, record, mode == ListingMode::Static && !selection.matches(record)))
                }
            }
        }
    }
}

fn card(base: &str, record: &LandmarkRecord, hidden: bool) -> Markup {
    html! {
        a class="card" href=(landmark_url(base, &record.id))
            data-type=(record.kind)
            data-country=(record.country())
            data-style=(record.architectural_style)
            hidden[hidden] {
            div class="card-image" {
                img src=(image_src(base, record)) alt=(record.name) loading="lazy";
                span class="card-type" { (record.kind) }
            }
            div class="card-body" {
                h3 { (record.name) }
                p class="location" { (record.location) }
            }
        }
    }
}

fn prose(body: Prose<'_>) -> Markup {
    match body {
        Prose::Override(markdown) => PreEscaped(render_untrusted(markdown)),
        Prose::Composed(paragraphs) => html! {
            @for paragraph in paragraphs { p { (paragraph) } }
        },
    }
}

fn info(block: Info<'_>) -> Markup {
    match block {
        Info::Override(markdown) => PreEscaped(render_untrusted(markdown)),
        Info::Default(table) => html! {
            dl {
                @for (label, value) in table.rows {
                    dt { (label) }
                    dd { (value) }
                }
            }
            p class="note" { (table.note) }
        },
    }
}

fn entries(list: &[NamedEntry]) -> Markup {
    html! {
        div class="entries" {
            @for entry in list {
                div class="entry" {
                    h4 { (entry.name) }
                    p { (entry.description) }
                }
            }
        }
    }
}

/// Detail page body for one landmark.
#[must_use]
pub fn detail(base: &str, catalog: &Catalog, record: &LandmarkRecord) -> Markup {
    let composer = Composer::new(record);

    html! {
        a class="back" href=(home_url(base)) { "← Back to all architecture" }

        div class="detail-head" {
            img class="hero-image" src=(image_src(base, record)) alt=(record.name);
            div {
                span class="card-type" { (record.kind) }
                h1 { (record.name) }
                ul class="facts" {
                    li class="location" { (record.location) }
                    li class="built" { "Built: " (record.year_built) }
                    li class="style" { (record.architectural_style) }
                }
                p class="description" { (record.description) }
                @if !record.features.is_empty() {
                    ul class="features" {
                        @for feature in &record.features { li { (feature) } }
                    }
                }
            }
        }

        nav class="tabs" {
            a href="#history" { "History" }
            a href="#architecture" { "Architecture" }
            a href="#religious" { "Religious Significance" }
            a href="#visitor" { "Visitor Info" }
        }

        section id="history" class="tab" {
            h2 { "Historical Context" }
            (prose(composer.historical_context()))
            h3 { "Timeline" }
            ol class="timeline" {
                @for event in composer.timeline() {
                    li {
                        span class="year" { (event.year) }
                        span class="event" { (event.event) }
                    }
                }
            }
        }

        section id="architecture" class="tab" {
            h2 { "Architectural Details" }
            (prose(composer.architectural_details()))
            h3 { "Key Architectural Elements" }
            (entries(&composer.architectural_elements()))
        }

        section id="religious" class="tab" {
            h2 { "Religious Significance" }
            (prose(composer.religious_significance()))
            h3 { "Sacred Art & Symbolism" }
            (entries(&composer.sacred_art()))
        }

        section id="visitor" class="tab" {
            h2 { "Visitor Information" }
            div class="visitor-grid" {
                div {
                    h3 { "Opening Hours" }
                    (info(composer.opening_hours()))
                }
                div {
                    h3 { "Admission" }
                    (info(composer.admission()))
                }
                div {
                    h3 { "Visitor Tips" }
                    ul { @for tip in composer.visitor_tips() { li { (tip) } } }
                }
                div {
                    h3 { "Nearby Attractions" }
                    ul { @for place in composer.nearby_attractions() { li { (place) } } }
                }
            }
        }

        section class="related" {
            h2 { "More Sacred Architecture" }
            div class="cards" {
                @for other in catalog.related(&record.id, RELATED_COUNT) {
                    (card(base, other, false))
                }
            }
        }
    }
}

/// Body of the page shown for an unknown landmark id or path.
#[must_use]
pub fn not_found(base: &str) -> Markup {
    html! {
        section class="not-found" {
            h1 { "Architecture not found" }
            p { "The page you are looking for does not exist." }
            a class="button" href=(home_url(base)) { "Return to Home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Selection;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog")
    }

    #[test]
    fn test_result_count() {
        assert_eq!(result_count(1), "Showing 1 result");
        assert_eq!(result_count(0), "Showing 0 results");
        assert_eq!(result_count(57), "Showing 57 results");
    }

    #[test]
    fn test_server_listing_only_matches() {
        let catalog = catalog();
        let selection = FilterSelection::new().with_country("Vatican City");
        let html = listing("", &catalog, &selection, ListingMode::Server).into_string();
        assert_eq!(html.matches("class=\"card\"").count(), 1);
        assert!(html.contains("href=\"/architecture/st-peters-basilica\""));
        assert!(html.contains("Showing 1 result"));
        assert!(html.contains("<option value=\"Vatican City\" selected>Vatican City</option>"));
        // badge clears back to the unfiltered listing
        assert!(html.contains("Country: Vatican City"));
        assert!(html.contains("<a href=\"/\" aria-label=\"Clear filter\">×</a>"));
    }

    #[test]
    fn test_static_listing_has_every_card() {
        let catalog = catalog();
        let selection = FilterSelection::new().with_type("Chapel");
        let html = listing("", &catalog, &selection, ListingMode::Static).into_string();
        assert_eq!(html.matches("class=\"card\"").count(), catalog.len());
        assert!(html.contains("data-mode=\"static\""));
        assert!(html.contains("data-country=\"Vatican City\""));
        assert!(html.contains("data-style=\"French Gothic\""));
    }

    #[test]
    fn test_no_results() {
        let catalog = catalog();
        let selection = FilterSelection {
            kind: Selection::from("Chapel"),
            country: Selection::from("Peru"),
            style: Selection::All,
        };
        let html = listing("", &catalog, &selection, ListingMode::Server).into_string();
        assert!(html.contains("No results found"));
        assert!(!html.contains("<div class=\"no-results\" hidden>"));
        assert!(html.contains("<p class=\"result-count\" hidden>"));
        assert_eq!(html.matches("class=\"card\"").count(), 0);
    }

    #[test]
    fn test_filter_options_sorted_with_all() {
        let catalog = catalog();
        let html = listing("", &catalog, &FilterSelection::new(), ListingMode::Server).into_string();
        assert!(html.contains("<select id=\"type\" name=\"type\" data-facet=\"type\"><option value=\"Abbey\">Abbey</option><option value=\"All\" selected>All</option><option value=\"Basilica\">"));
        assert!(!html.contains("class=\"badge\""));
    }

    #[test]
    fn test_detail_fallback_sections() {
        let catalog = catalog();
        let record = catalog.get("notre-dame-cathedral").expect("record");
        let html = detail("", &catalog, record).into_string();
        assert!(html.contains("<h1>Notre-Dame Cathedral</h1>"));
        assert!(html.contains("Built: 1163-1345"));
        assert!(html.contains("commissioned by the local bishop and diocese"));
        assert!(html.contains("<span class=\"year\">1254</span>"));
        assert!(html.contains("<h4>Flying Buttresses</h4>"));
        assert!(html.contains("<h4>Stained Glass Windows</h4>"));
        assert!(html.contains("9:00 AM - 5:00 PM"));
        assert!(html.contains("Entry to worship services is always free."));
        assert!(html.contains("More Sacred Architecture"));
        assert_eq!(html.matches("class=\"card\"").count(), RELATED_COUNT);
        assert!(!html.contains("href=\"/architecture/notre-dame-cathedral\""));
    }

    #[test]
    fn test_detail_override_is_escaped() {
        let catalog = catalog();
        let mut record = catalog.all()[0].clone();
        record.historical_context = Some("Rebuilt <script>alert(1)</script> in **1506**.".to_string());
        record.admission = Some("Free for pilgrims".to_string());
        let html = detail("", &catalog, &record).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("<strong>1506</strong>"));
        assert!(html.contains("Free for pilgrims"));
        assert!(!html.contains("Students/Seniors:"));
    }

    #[test]
    fn test_image_fallback() {
        let catalog = catalog();
        let mut record = catalog.all()[0].clone();
        assert_eq!(image_src("/s", &record), "/s/images/st-peters-basilica.jpg");
        record.image_url = None;
        assert_eq!(image_src("", &record), "/placeholder.svg");
    }

    #[test]
    fn test_not_found() {
        let html = not_found("").into_string();
        assert!(html.contains("Architecture not found"));
        assert!(html.contains("Return to Home"));
    }
}
