// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! A loaded site: config, catalog and parsed content pages, with one render
//! function per page kind. Both the static generator and the HTTP server
//! render through this type.

use crate::config::SiteConfig;
use crate::error::{Result, SitegenError};
use crate::layouts::{self, LayoutContext, NavLink};
use crate::markdown::{parse_page, render_markdown};
use crate::pages::{self, ListingMode};
use crate::routes::{self, ContentPage, PageJob, Target, home_url, landmark_url, page_url};
use catalog::{Catalog, FilterSelection};
use chrono::Datelike;
use std::collections::HashSet;

/// Markdown source of a page shipped with the site.
fn builtin_page(name: &str) -> Option<&'static str> {
    match name {
        "about" => Some(include_str!("../content/about.md")),
        "theory" => Some(include_str!("../content/theory.md")),
        "contact" => Some(include_str!("../content/contact.md")),
        _ => None,
    }
}

/// A page slug becomes one directory under the output root, next to the
/// `architecture/` detail pages.
fn valid_slug(slug: &str) -> bool {
    !matches!(slug, "" | "." | ".." | "architecture") && !slug.contains(['/', '\\'])
}

#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    catalog: Catalog,
    pages: Vec<ContentPage>,
    nav: Vec<NavLink>,
    year: i32,
}

impl Site {
    /// Assemble a site, loading and parsing every configured content page.
    pub fn new(config: SiteConfig, catalog: Catalog) -> Result<Self> {
        let mut pages = Vec::with_capacity(config.pages.len());
        let mut slugs = HashSet::new();

        for page in &config.pages {
            let source = match &page.path {
                Some(path) => std::fs::read_to_string(path).map_err(SitegenError::io(path))?,
                None => builtin_page(&page.name)
                    .ok_or_else(|| SitegenError::UnknownPage(page.name.clone()))?
                    .to_string(),
            };
            let (fm, body) = parse_page(&page.name, &source)?;

            let slug = page.slug.trim_matches('/').to_string();
            if !valid_slug(&slug) {
                return Err(SitegenError::InvalidSlug(page.slug.clone()));
            }
            if !slugs.insert(slug.clone()) {
                return Err(SitegenError::DuplicateSlug(slug));
            }
            diagnostics::debug!("Loaded page {name} at /{slug}", name: page.name.as_str(), slug: slug.as_str());

            pages.push(ContentPage {
                name: page.name.clone(),
                slug,
                title: fm.title,
                layout: fm.layout,
                body: body.to_string(),
            });
        }

        let base = config.base_path();
        let nav = std::iter::once(NavLink {
            label: "Home".to_string(),
            href: home_url(base),
        })
        .chain(pages.iter().map(|p| NavLink {
            label: p.title.clone(),
            href: page_url(base, &p.slug),
        }))
        .collect();

        Ok(Self {
            config,
            catalog,
            pages,
            nav,
            year: chrono::Local::now().year(),
        })
    }

    /// Build a site from config alone: the external catalog when the config
    /// names one, the built-in catalog otherwise.
    pub fn load(config: SiteConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::embedded()?,
        };
        Self::new(config, catalog)
    }

    /// Fix the footer year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn pages(&self) -> &[ContentPage] {
        &self.pages
    }

    fn base(&self) -> &str {
        self.config.base_path()
    }

    fn wrap(
        &self,
        layout: &str,
        title: &str,
        current: &str,
        breadcrumbs: &[(String, String)],
        content: &str,
    ) -> String {
        layouts::apply_layout(
            layout,
            &LayoutContext {
                title,
                site_title: &self.config.site.title,
                tagline: &self.config.site.tagline,
                base: self.base(),
                nav: &self.nav,
                current,
                breadcrumbs,
                content,
                year: self.year,
            },
        )
    }

    /// The home listing for `selection`.
    #[must_use]
    pub fn render_home(&self, selection: &FilterSelection, mode: ListingMode) -> String {
        let body = pages::listing(self.base(), &self.catalog, selection, mode).into_string();
        let home = home_url(self.base());
        self.wrap("default", &self.config.site.title, &home, &[], &body)
    }

    /// The detail page of landmark `id`; `None` when the id is unknown.
    #[must_use]
    pub fn render_landmark(&self, id: &str) -> Option<String> {
        let record = self.catalog.get(id)?;
        let url = landmark_url(self.base(), id);
        let breadcrumbs = vec![
            ("Home".to_string(), home_url(self.base())),
            (record.name.clone(), url.clone()),
        ];
        let body = pages::detail(self.base(), &self.catalog, record).into_string();
        Some(self.wrap("detail", &record.name, &url, &breadcrumbs, &body))
    }

    /// The content page at `slug`; `None` when no page has that slug.
    #[must_use]
    pub fn render_page(&self, slug: &str) -> Option<String> {
        let slug = slug.trim_matches('/');
        let page = self.pages.iter().find(|p| p.slug == slug)?;
        let url = page_url(self.base(), &page.slug);
        let breadcrumbs = vec![
            ("Home".to_string(), home_url(self.base())),
            (page.title.clone(), url.clone()),
        ];
        let body = render_markdown(&page.body);
        Some(self.wrap(&page.layout, &page.title, &url, &breadcrumbs, &body))
    }

    #[must_use]
    pub fn render_not_found(&self) -> String {
        let body = pages::not_found(self.base()).into_string();
        self.wrap("detail", "Architecture not found", "", &[], &body)
    }

    /// Render one expanded route for the static build.
    pub fn render_job(&self, job: &PageJob) -> Result<String> {
        let html = match &job.target {
            Target::Home => Some(self.render_home(&FilterSelection::new(), ListingMode::Static)),
            Target::Landmark(id) => self.render_landmark(id),
            Target::Page(slug) => self.render_page(slug),
            Target::NotFound => Some(self.render_not_found()),
        };
        html.ok_or_else(|| SitegenError::UnknownPage(job.output_path.clone()))
    }

    /// Every page of the static build.
    #[must_use]
    pub fn jobs(&self) -> Vec<PageJob> {
        routes::expand_routes(self.base(), &self.catalog, &self.pages)
    }

    /// The catalog as pretty-printed JSON, in catalog order.
    pub fn catalog_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.catalog.all())?)
    }
}
