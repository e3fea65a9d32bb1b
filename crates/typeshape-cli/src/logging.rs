//! Tracing setup for the CLI.
//!
//! The subscriber is only installed when `TYPESHAPE_LOG` (or `RUST_LOG`) is
//! set. `TYPESHAPE_LOG_FORMAT=json` switches to one JSON object per event.
//!
//! ```bash
//! TYPESHAPE_LOG=debug typeshape generate types.json
//! TYPESHAPE_LOG=typeshape_lib=trace TYPESHAPE_LOG_FORMAT=json typeshape check types.json
//! ```
//!
//! Output goes to stderr; stdout carries only the schema.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TYPESHAPE_LOG_FORMAT").unwrap_or_default())
    }
}

/// `TYPESHAPE_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    match std::env::var("TYPESHAPE_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

pub fn init_tracing() {
    let has_own_log = std::env::var("TYPESHAPE_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
