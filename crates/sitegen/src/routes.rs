// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Route expansion: the catalog and content pages become a flat list of
//! `PageJob`s, one per output HTML file, plus the URL helpers every page
//! uses for links.

use catalog::{Catalog, Facet, FilterSelection, Selection};
use url::form_urlencoded;

/// A markdown content page, loaded and parsed.
#[derive(Debug, Clone)]
pub struct ContentPage {
    /// Config name ("about")
    pub name: String,
    /// URL slug ("about" for `/about`)
    pub slug: String,
    /// Title from frontmatter, also the nav label
    pub title: String,
    pub layout: String,
    /// Markdown body without frontmatter
    pub body: String,
}

/// What a page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Home,
    Landmark(String),
    Page(String),
    NotFound,
}

/// One page to generate.
#[derive(Debug, Clone)]
pub struct PageJob {
    /// Output path relative to the output directory
    pub output_path: String,
    pub target: Target,
    /// Breadcrumb trail: (label, url)
    pub breadcrumbs: Vec<(String, String)>,
}

/// Expand the site into page jobs: home, one page per landmark, one per
/// content page, then the 404 page.
#[must_use]
pub fn expand_routes(base: &str, catalog: &Catalog, pages: &[ContentPage]) -> Vec<PageJob> {
    let home = vec![("Home".to_string(), home_url(base))];
    let mut jobs = Vec::with_capacity(catalog.len() + pages.len() + 2);

    jobs.push(PageJob {
        output_path: "index.html".to_string(),
        target: Target::Home,
        breadcrumbs: home.clone(),
    });

    for record in catalog.all() {
        let mut breadcrumbs = home.clone();
        breadcrumbs.push((record.name.clone(), landmark_url(base, &record.id)));
        jobs.push(PageJob {
            output_path: format!("architecture/{}/index.html", record.id),
            target: Target::Landmark(record.id.clone()),
            breadcrumbs,
        });
    }

    for page in pages {
        let mut breadcrumbs = home.clone();
        breadcrumbs.push((page.title.clone(), page_url(base, &page.slug)));
        jobs.push(PageJob {
            output_path: format!("{}/index.html", page.slug.trim_matches('/')),
            target: Target::Page(page.slug.clone()),
            breadcrumbs,
        });
    }

    jobs.push(PageJob {
        output_path: "404.html".to_string(),
        target: Target::NotFound,
        breadcrumbs: vec![],
    });

    jobs
}

/// Prefix a root-relative path with the site base.
#[must_use]
pub fn prefix_base(base: &str, path: &str) -> String {
    if base.is_empty() || base == "/" {
        path.to_string()
    } else {
        format!("{}{}", base.trim_end_matches('/'), path)
    }
}

#[must_use]
pub fn home_url(base: &str) -> String {
    prefix_base(base, "/")
}

#[must_use]
pub fn landmark_url(base: &str, id: &str) -> String {
    prefix_base(base, &format!("/architecture/{id}"))
}

#[must_use]
pub fn page_url(base: &str, slug: &str) -> String {
    prefix_base(base, &format!("/{}", slug.trim_matches('/')))
}

/// Home URL carrying the active selections as a query string; unrestricted
/// facets are omitted.
#[must_use]
pub fn listing_url(base: &str, selection: &FilterSelection) -> String {
    let active = selection.active();
    if active.is_empty() {
        return home_url(base);
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (facet, value) in active {
        query.append_pair(facet.name(), value);
    }
    format!("{}?{}", home_url(base), query.finish())
}

/// Parse a home page query string (`type=Cathedral&country=France`).
/// Unknown keys are ignored; a missing or empty value means "All".
#[must_use]
pub fn parse_listing_query(query: &str) -> FilterSelection {
    let mut selection = FilterSelection::new();
    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match key.parse::<Facet>() {
            Ok(Facet::Type) => selection.kind = Selection::from(&*value),
            Ok(Facet::Country) => selection.country = Selection::from(&*value),
            Ok(Facet::Style) => selection.style = Selection::from(&*value),
            Err(_) => {}
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<ContentPage> {
        vec![ContentPage {
            name: "about".to_string(),
            slug: "about".to_string(),
            title: "About".to_string(),
            layout: "page".to_string(),
            body: "# About".to_string(),
        }]
    }

    #[test]
    fn test_expand_routes() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let jobs = expand_routes("", &catalog, &pages());
        assert_eq!(jobs.len(), catalog.len() + 3);
        assert_eq!(jobs[0].output_path, "index.html");
        assert_eq!(jobs[0].target, Target::Home);
        assert_eq!(jobs[1].output_path, "architecture/st-peters-basilica/index.html");
        assert_eq!(jobs[catalog.len() + 1].output_path, "about/index.html");
        assert_eq!(jobs.last().map(|j| j.target.clone()), Some(Target::NotFound));
    }

    #[test]
    fn test_breadcrumbs() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let jobs = expand_routes("/sacred", &catalog, &pages());
        let detail = &jobs[2];
        assert_eq!(
            detail.breadcrumbs,
            vec![
                ("Home".to_string(), "/sacred/".to_string()),
                (
                    "Notre-Dame Cathedral".to_string(),
                    "/sacred/architecture/notre-dame-cathedral".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_prefix_base() {
        assert_eq!(prefix_base("", "/about"), "/about");
        assert_eq!(prefix_base("/", "/about"), "/about");
        assert_eq!(prefix_base("/sacred/", "/about"), "/sacred/about");
        assert_eq!(landmark_url("", "x"), "/architecture/x");
        assert_eq!(page_url("/s", "/theory/"), "/s/theory");
    }

    #[test]
    fn test_listing_url_round_trip() {
        let selection = FilterSelection::new()
            .with_country("Vatican City")
            .with_style("Renaissance");
        let url = listing_url("", &selection);
        assert_eq!(url, "/?country=Vatican+City&style=Renaissance");

        let (_, query) = url.split_once('?').expect("query");
        assert_eq!(parse_listing_query(query), selection);
        assert_eq!(listing_url("", &FilterSelection::new()), "/");
    }

    #[test]
    fn test_parse_listing_query() {
        let selection = parse_listing_query("?type=Cathedral&country=&style=All&page=2");
        assert_eq!(selection.kind, Selection::Value("Cathedral".to_string()));
        assert!(selection.country.is_all());
        assert!(selection.style.is_all());
        assert!(parse_listing_query("").is_unrestricted());
    }

    #[test]
    fn test_parse_listing_query_keeps_padding() {
        let selection = parse_listing_query("type=%20Cathedral&style=+Gothic");
        assert_eq!(selection.kind, Selection::Value(" Cathedral".to_string()));
        assert_eq!(selection.style, Selection::Value(" Gothic".to_string()));
    }
}
