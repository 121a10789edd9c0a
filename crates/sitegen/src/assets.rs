// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static files compiled into the binary and shared by the static build and
//! the server.

/// A file served at `/{path}`.
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

pub const STYLE_CSS: Asset = Asset {
    path: "style.css",
    content_type: "text/css; charset=utf-8",
    body: include_str!("../assets/style.css"),
};

pub const FILTER_JS: Asset = Asset {
    path: "filter.js",
    content_type: "text/javascript; charset=utf-8",
    body: include_str!("../assets/filter.js"),
};

pub const PLACEHOLDER_SVG: Asset = Asset {
    path: "placeholder.svg",
    content_type: "image/svg+xml",
    body: include_str!("../assets/placeholder.svg"),
};

pub const ASSETS: [Asset; 3] = [STYLE_CSS, FILTER_JS, PLACEHOLDER_SVG];

/// Look up an asset by its path without the leading slash.
#[must_use]
pub fn find(path: &str) -> Option<Asset> {
    ASSETS.iter().copied().find(|a| a.path == path)
}
