// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP server for the site.
//!
//! Serves the same pages as the static build, but the listing is filtered on
//! the server from the `type`, `country` and `style` query parameters.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path, RawQuery, Request, State},
    http::{StatusCode, header},
    middleware::{self as axum_mw, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use sitegen::assets::{ASSETS, Asset};
use sitegen::routes::parse_listing_query;
use sitegen::{CATALOG_JSON, ListingMode, Site};

type SharedSite = Arc<Site>;

/// Build the router with every route, the not-found fallback and request
/// logging. Routes are mounted under the site's `base_url`.
pub fn build_router(site: SharedSite) -> Router {
    let mut routes = Router::new()
        .route("/", get(home))
        .route("/architecture/{id}", get(landmark))
        .route(&format!("/{CATALOG_JSON}"), get(catalog_json))
        .route("/health", get(health))
        .route("/{slug}", get(content_page));

    for asset in ASSETS {
        routes = routes.route(
            &format!("/{}", asset.path),
            get(move || async move { asset_response(asset) }),
        );
    }

    let base = site.config().base_path().to_string();
    let app = if base.is_empty() {
        routes
    } else {
        Router::new()
            .route(&format!("{base}/"), get(home))
            .nest(&base, routes)
    };

    app.fallback(not_found)
        .layer(axum_mw::from_fn(log_request))
        .with_state(site)
}

/// Bind `bind` and serve until Ctrl-C.
pub async fn serve(site: SharedSite, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    let addr = listener.local_addr()?.to_string();
    diagnostics::info!("Serving {title} on http://{addr}", title: site.config().site.title.as_str(), addr: addr.as_str());

    axum::serve(listener, build_router(site))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    diagnostics::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        let error = e.to_string();
        diagnostics::error!("Cannot listen for Ctrl-C: {error}", error: error.as_str());
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    diagnostics::info!(
        "{method} {path} {status}",
        method: method.as_str(),
        path: path.as_str(),
        status: response.status().as_u16()
    );
    response
}

async fn home(State(site): State<SharedSite>, RawQuery(query): RawQuery) -> Html<String> {
    let selection = parse_listing_query(query.as_deref().unwrap_or_default());
    Html(site.render_home(&selection, ListingMode::Server))
}

async fn landmark(State(site): State<SharedSite>, Path(id): Path<String>) -> Response {
    match site.render_landmark(&id) {
        Some(html) => Html(html).into_response(),
        None => not_found_page(&site),
    }
}

async fn content_page(State(site): State<SharedSite>, Path(slug): Path<String>) -> Response {
    match site.render_page(&slug) {
        Some(html) => Html(html).into_response(),
        None => not_found_page(&site),
    }
}

async fn catalog_json(State(site): State<SharedSite>) -> Response {
    match site.catalog_json() {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            let error = e.to_string();
            diagnostics::error!("Cannot serialize catalog: {error}", error: error.as_str());
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found(State(site): State<SharedSite>) -> Response {
    not_found_page(&site)
}

fn not_found_page(site: &Site) -> Response {
    (StatusCode::NOT_FOUND, Html(site.render_not_found())).into_response()
}

fn asset_response(asset: Asset) -> Response {
    ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response()
}
