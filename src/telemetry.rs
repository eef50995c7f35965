//! Tracing initialization for embedding applications and tests

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global tracing subscriber once.
///
/// Respects `RUST_LOG` when set; defaults to `info` for the crate otherwise.
/// Safe to call multiple times (later calls are no-ops), so tests and the
/// host application can both call it without coordination.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,aula_speech=info"));

        // try_init: the host app may have installed its own subscriber already
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
