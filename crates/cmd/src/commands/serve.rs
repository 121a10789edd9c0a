// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use anyhow::Result;
use sitegen::Site;

use crate::server;

/// Serve the site until interrupted. `bind` overrides the config address.
pub async fn serve_command(site: Site, bind: Option<&str>) -> Result<()> {
    let bind = bind.map_or_else(|| site.config().server.bind.clone(), str::to_string);
    server::serve(Arc::new(site), &bind).await
}
