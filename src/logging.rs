//! Logger setup for both front-ends.
//!
//! Everything logs through the `log` facade; only the backend differs:
//! `env_logger` on native builds and the browser console on wasm.

use std::sync::Once;

static INIT: Once = Once::new();

/// Default filter for the terminal build. Anything chattier would scribble
/// over the alternate screen, so `RUST_LOG` has to ask for it explicitly.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FILTER: log::LevelFilter = log::LevelFilter::Warn;

/// Installs the global logger. Subsequent calls are ignored.
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut builder = env_logger::Builder::new();
            match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(DEFAULT_FILTER);
                }
            }
            // Another logger may already be installed (tests, embedding).
            if let Err(e) = builder.try_init() {
                log::debug!("keeping existing logger: {}", e);
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            if let Err(e) = console_log::init_with_level(log::Level::Info) {
                log::debug!("keeping existing logger: {}", e);
            }
        }

        log::debug!("logging initialized");
    });
}
