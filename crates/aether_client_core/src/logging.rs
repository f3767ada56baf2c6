//! Native logging bootstrap. Web builds use the logger Dioxus installs at launch.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "aether_client_core=info,aether_frontend=info";

static INIT: OnceCell<()> = OnceCell::new();

/// Installs a fmt subscriber filtered by `RUST_LOG` (or the crate defaults).
/// Idempotent; a subscriber installed elsewhere first is left in place.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
