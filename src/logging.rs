//! Tracing setup for hosts and tools embedding the overlay.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*, util::SubscriberInitExt};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Installs a console `tracing` subscriber (idempotent).
///
/// `RUST_LOG` takes precedence over `directives`; when neither is usable the
/// level defaults to `info`. Later calls do nothing, and an already installed
/// global subscriber is left in place.
pub fn init_tracing(directives: Option<&str>) {
    TRACING_INSTALLED.call_once(|| {
        let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), directives);
        let console = fmt::layer().with_target(true).with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("waterui-measure: a tracing subscriber is already installed");
        }
    });
}

fn build_filter(env: Option<&str>, directives: Option<&str>) -> EnvFilter {
    env.into_iter()
        .chain(directives)
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(DEFAULT_LOG_LEVEL.into()))
}
