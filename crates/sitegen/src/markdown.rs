// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for content pages and catalog rich text.
//!
//! Content pages are site-owned and may embed raw HTML (the contact form).
//! Catalog overrides come from data files and are rendered with
//! [`render_untrusted`], which turns every raw HTML event into escaped text.

use crate::error::{Result, SitegenError};
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html::push_html};
use serde::Deserialize;

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES
}

/// Render site-owned markdown. Raw HTML passes through; headings get `id`
/// anchors.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let events = anchor_headings(Parser::new_ext(content, options()));
    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Render markdown from the catalog. Raw HTML is shown as text and
/// `javascript:` link targets are dropped.
#[must_use]
pub fn render_untrusted(content: &str) -> String {
    let events = Parser::new_ext(content, options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events);
    html
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("data:") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Slugify text for use as an HTML id attribute.
///
/// Lowercases, replaces non-alphanumeric runs with hyphens, strips
/// leading/trailing hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// A heading being buffered until its end tag, so its text can become an id.
struct OpenHeading<'a> {
    level: HeadingLevel,
    text: String,
    inner: Vec<Event<'a>>,
}

impl<'a> OpenHeading<'a> {
    fn close(self, out: &mut Vec<Event<'a>>) {
        let slug = slugify(&self.text);
        if slug.is_empty() {
            out.push(Event::Start(Tag::Heading {
                level: self.level,
                id: None,
                classes: vec![],
                attrs: vec![],
            }));
            out.extend(self.inner);
            out.push(Event::End(TagEnd::Heading(self.level)));
            return;
        }

        let n = self.level as u8;
        out.push(Event::Html(format!("<h{n} id=\"{slug}\">").into()));
        out.extend(self.inner);
        // h1 is the page title
        if n >= 2 {
            out.push(Event::Html(
                format!(" <a class=\"anchor\" href=\"#{slug}\" aria-hidden=\"true\">#</a>").into(),
            ));
        }
        out.push(Event::Html(format!("</h{n}>").into()));
    }
}

fn anchor_headings<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut open: Option<OpenHeading<'a>> = None;

    for event in events {
        let Some(heading) = open.as_mut() else {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    open = Some(OpenHeading {
                        level,
                        text: String::new(),
                        inner: Vec::new(),
                    });
                }
                other => out.push(other),
            }
            continue;
        };

        match event {
            Event::End(TagEnd::Heading(_)) => {
                if let Some(done) = open.take() {
                    done.close(&mut out);
                }
            }
            Event::Text(ref t) | Event::Code(ref t) => {
                heading.text.push_str(t);
                heading.inner.push(event);
            }
            other => heading.inner.push(other),
        }
    }
    out
}

/// Frontmatter parsed from the top of each markdown page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_layout")]
    pub layout: String,
}

fn default_layout() -> String {
    "page".to_string()
}

/// Separate a leading `---` YAML block from the markdown body.
#[must_use]
pub fn split_frontmatter(content: &str) -> (&str, &str) {
    let trimmed = content.trim_start();
    let Some(after) = trimmed.strip_prefix("---") else {
        return ("", content);
    };
    match after.find("\n---") {
        Some(end) => {
            let body = &after[end + 4..];
            (after[..end].trim(), body.strip_prefix('\n').unwrap_or(body))
        }
        None => ("", content),
    }
}

/// Parse frontmatter and body of page `name`. A page without frontmatter is
/// titled by its name.
pub fn parse_page<'c>(name: &str, content: &'c str) -> Result<(Frontmatter, &'c str)> {
    let (yaml, body) = split_frontmatter(content);
    let mut fm = if yaml.is_empty() {
        Frontmatter {
            title: String::new(),
            layout: default_layout(),
        }
    } else {
        serde_yaml_ng::from_str(yaml).map_err(|source| SitegenError::Frontmatter {
            page: name.to_string(),
            source,
        })?
    };
    if fm.title.is_empty() {
        fm.title = name.to_string();
    }
    Ok((fm, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("Some *emphasis* and ~~strike~~");
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<del>strike</del>"));
    }

    #[test]
    fn test_render_markdown_table() {
        let html = render_markdown("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_trusted_html_passthrough() {
        let html = render_markdown("<form class=\"contact-form\">\n<input id=\"name\">\n</form>\n");
        assert!(html.contains("<form class=\"contact-form\">"));
    }

    #[test]
    fn test_untrusted_escapes_script() {
        let html = render_untrusted("Hello <script>alert(1)</script>\n\n<div onclick=\"x()\">hi</div>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_untrusted_keeps_markdown() {
        let html = render_untrusted("Built by **fishermen**.");
        assert_eq!(html.trim(), "<p>Built by <strong>fishermen</strong>.</p>");
    }

    #[test]
    fn test_untrusted_drops_javascript_links() {
        let html = render_untrusted("[click](javascript:alert(1)) [ok](https://example.org)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"https://example.org\""));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Our Mission"), "our-mission");
        assert_eq!(slugify("  Byzantine (5th-15th centuries) "), "byzantine-5th-15th-centuries");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_heading_anchors() {
        let html = render_markdown("## What We Offer\n\ntext");
        assert!(html.contains("<h2 id=\"what-we-offer\">What We Offer"));
        assert!(html.contains("href=\"#what-we-offer\""));
        assert!(html.contains("</h2>"));
    }

    #[test]
    fn test_heading_anchors_h1() {
        let html = render_markdown("# About `Sacred` Architecture");
        assert!(html.contains("<h1 id=\"about-sacred-architecture\">"));
        assert!(html.contains("<code>Sacred</code>"));
        assert!(!html.contains("class=\"anchor\""));
    }

    #[test]
    fn test_split_frontmatter() {
        let (fm, body) = split_frontmatter("---\ntitle: Hi\n---\n\n# Body");
        assert_eq!(fm, "title: Hi");
        assert!(body.contains("# Body"));
    }

    #[test]
    fn test_split_frontmatter_none() {
        let (fm, body) = split_frontmatter("# Just markdown");
        assert!(fm.is_empty());
        assert_eq!(body, "# Just markdown");
    }

    #[test]
    fn test_parse_page_defaults() {
        let (fm, body) = parse_page("faq", "# FAQ").expect("parse page");
        assert_eq!(fm.title, "faq");
        assert_eq!(fm.layout, "page");
        assert_eq!(body, "# FAQ");

        let (fm, _) = parse_page("about", "---\ntitle: About\nlayout: default\n---\nx")
            .expect("parse page");
        assert_eq!(fm.title, "About");
        assert_eq!(fm.layout, "default");
    }

    #[test]
    fn test_parse_page_bad_frontmatter() {
        let err = parse_page("about", "---\ntitle: [\n---\nx").expect_err("bad yaml");
        assert!(err.to_string().contains("Bad frontmatter in page 'about'"));
    }
}
