// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layouts.
//!
//! Layouts wrap rendered content in a complete HTML document with the site
//! header, navigation and footer. Content pages pick one in frontmatter
//! (`layout: page|default`); the listing and detail pages use `default` and
//! `detail`.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One entry of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Context passed to layout functions.
pub struct LayoutContext<'a> {
    /// Page title
    pub title: &'a str,
    pub site_title: &'a str,
    pub tagline: &'a str,
    /// `base_url` without trailing slash ("" at the root)
    pub base: &'a str,
    pub nav: &'a [NavLink],
    /// href of the current page, for marking the active nav entry
    pub current: &'a str,
    /// Breadcrumb trail: (label, url), shown above detail and content pages
    pub breadcrumbs: &'a [(String, String)],
    /// Rendered HTML content
    pub content: &'a str,
    pub year: i32,
}

/// Apply a named layout to rendered content.
#[must_use]
pub fn apply_layout(name: &str, ctx: &LayoutContext) -> String {
    let markup = match name {
        "page" => page_layout(ctx),
        "detail" => detail_layout(ctx),
        _ => default_layout(ctx),
    };
    markup.into_string()
}

fn head(ctx: &LayoutContext) -> Markup {
    let title = if ctx.title == ctx.site_title {
        ctx.site_title.to_string()
    } else {
        format!("{} | {}", ctx.title, ctx.site_title)
    };
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="generator" content=(format!("sitegen v{VERSION}"));
            @if !ctx.tagline.is_empty() {
                meta name="description" content=(ctx.tagline);
            }
            title { (title) }
            link rel="stylesheet" href=(format!("{}/style.css", ctx.base));
        }
    }
}

fn site_header(ctx: &LayoutContext) -> Markup {
    html! {
        header class="site-header" {
            a class="site-title" href=(format!("{}/", ctx.base)) { (ctx.site_title) }
            nav class="site-nav" {
                @for link in ctx.nav {
                    @if link.href == ctx.current {
                        a href=(link.href) aria-current="page" { (link.label) }
                    } @else {
                        a href=(link.href) { (link.label) }
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &LayoutContext) -> Markup {
    html! {
        footer class="site-footer" {
            p { "© " (ctx.year) " " (ctx.site_title) ". All rights reserved." }
        }
    }
}

fn breadcrumbs(ctx: &LayoutContext) -> Markup {
    html! {
        @if ctx.breadcrumbs.len() > 1 {
            nav class="breadcrumbs" aria-label="Breadcrumb" {
                @for (i, (label, url)) in ctx.breadcrumbs.iter().enumerate() {
                    @if i > 0 { span class="sep" { "/" } }
                    @if i + 1 == ctx.breadcrumbs.len() {
                        span aria-current="page" { (label) }
                    } @else {
                        a href=(url) { (label) }
                    }
                }
            }
        }
    }
}

/// Listing layout: hero with the tagline, then content, plus the
/// client-side filter script.
fn default_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (site_header(ctx))
                section class="hero" {
                    h1 { (ctx.site_title) }
                    @if !ctx.tagline.is_empty() {
                        p class="tagline" { (ctx.tagline) }
                    }
                }
                main class="listing" {
                    (PreEscaped(ctx.content))
                }
                (site_footer(ctx))
                script src=(format!("{}/filter.js", ctx.base)) defer {}
            }
        }
    }
}

/// Layout for markdown content pages, wrapped in `<article>`.
fn page_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (site_header(ctx))
                main class="content-page" {
                    (breadcrumbs(ctx))
                    article {
                        (PreEscaped(ctx.content))
                    }
                }
                (site_footer(ctx))
            }
        }
    }
}

/// Layout for one landmark.
fn detail_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (site_header(ctx))
                main class="detail" {
                    (breadcrumbs(ctx))
                    (PreEscaped(ctx.content))
                }
                (site_footer(ctx))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<NavLink> {
        vec![
            NavLink {
                label: "Home".to_string(),
                href: "/".to_string(),
            },
            NavLink {
                label: "About".to_string(),
                href: "/about".to_string(),
            },
        ]
    }

    fn ctx<'a>(nav: &'a [NavLink], crumbs: &'a [(String, String)]) -> LayoutContext<'a> {
        LayoutContext {
            title: "About",
            site_title: "Sacred Structures",
            tagline: "Sacred spaces",
            base: "",
            nav,
            current: "/about",
            breadcrumbs: crumbs,
            content: "<h1>Hello</h1>",
            year: 2025,
        }
    }

    #[test]
    fn test_default_layout() {
        let nav = nav();
        let html = apply_layout("default", &ctx(&nav, &[]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About | Sacred Structures</title>"));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("class=\"tagline\""));
        assert!(html.contains("src=\"/filter.js\""));
        assert!(html.contains("© 2025 Sacred Structures. All rights reserved."));
    }

    #[test]
    fn test_page_layout() {
        let nav = nav();
        let crumbs = vec![
            ("Home".to_string(), "/".to_string()),
            ("About".to_string(), "/about".to_string()),
        ];
        let html = apply_layout("page", &ctx(&nav, &crumbs));
        assert!(html.contains("<article>"));
        assert!(html.contains("class=\"breadcrumbs\""));
        assert!(html.contains("<a href=\"/about\" aria-current=\"page\">About</a>"));
        assert!(!html.contains("filter.js"));
    }

    #[test]
    fn test_detail_layout_under_base() {
        let nav = nav();
        let mut c = ctx(&nav, &[]);
        c.base = "/sacred";
        let html = apply_layout("detail", &c);
        assert!(html.contains("class=\"detail\""));
        assert!(html.contains("href=\"/sacred/style.css\""));
        assert!(html.contains("href=\"/sacred/\""));
    }

    #[test]
    fn test_unknown_layout_falls_back_to_default() {
        let nav = nav();
        let html = apply_layout("nonexistent", &ctx(&nav, &[]));
        assert!(html.contains("class=\"listing\""));
    }

    #[test]
    fn test_title_not_repeated_on_home() {
        let nav = nav();
        let mut c = ctx(&nav, &[]);
        c.title = "Sacred Structures";
        let html = apply_layout("default", &c);
        assert!(html.contains("<title>Sacred Structures</title>"));
    }
}
