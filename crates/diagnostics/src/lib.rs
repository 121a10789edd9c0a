// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics for the Sacred Structures workspace
//!
//! Structured logging to stderr through `emit`, shared by every crate.
//!
//! Usage:
//! - Set SACRED_LOG=off (default) - no logs
//! - Set SACRED_LOG=info - requests served, pages written
//! - Set SACRED_LOG=debug - catalog loading, per-page rendering

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable selecting the minimum log level.
pub const LOG_ENV: &str = "SACRED_LOG";

static INIT: Once = Once::new();

/// Minimum level for a `SACRED_LOG` value. `Ok(None)` means logging is off;
/// `Err` carries the unrecognized value.
pub fn parse_level(value: &str) -> Result<Option<emit::Level>, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "info" => Ok(Some(emit::Level::Info)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        _ => Err(value.to_string()),
    }
}

/// Initialize diagnostics from the `SACRED_LOG` environment variable.
///
/// Call once at startup; later calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let value = std::env::var(LOG_ENV).unwrap_or_default();

        let (level, unknown) = match parse_level(&value) {
            Ok(None) => return,
            Ok(Some(level)) => (level, None),
            Err(unknown) => (emit::Level::Info, Some(unknown)),
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if let Some(unknown) = unknown {
            emit::warn!("Unknown {var} value {value}, using info", var: LOG_ENV, value: unknown.as_str());
        }

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log basic operations (pages written, requests served, catalog loaded)
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (record counts, per-page rendering)
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable conditions (fallbacks, not-found lookups)
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop an operation
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
