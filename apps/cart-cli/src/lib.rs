//! # Shopcart CLI Library
//!
//! Everything behind the `shopcart` binary: argument types, configuration,
//! cart state and the commands themselves.
//!
//! ## Module Organization
//! ```text
//! cart_cli/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── config.rs       ◄─── SHOPCART_* environment configuration
//! ├── error.rs        ◄─── CliError with machine-readable codes
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── cart.rs     ◄─── CartState (Arc<Mutex<ShoppingCart>>)
//! └── commands/
//!     ├── mod.rs      ◄─── Arguments and shared helpers
//!     ├── catalog.rs  ◄─── List templates
//!     ├── receipt.rs  ◄─── Print / save a receipt
//!     └── summary.rs  ◄─── Print totals
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `SHOPCART_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,cart_core=info,cart_cli=info";

/// Default filter with `-v`.
pub const VERBOSE_LOG_FILTER: &str = "warn,cart_core=debug,cart_cli=debug";

/// Picks the filter directives used when `RUST_LOG` is unset.
///
/// `SHOPCART_LOG` wins over `-v`, which only changes the default.
pub fn fallback_log_filter(verbose: bool, configured: Option<&str>) -> &str {
    match configured {
        Some(directives) => directives,
        None if verbose => VERBOSE_LOG_FILTER,
        None => DEFAULT_LOG_FILTER,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `SHOPCART_LOG=cart_core=trace` - Used when `RUST_LOG` is unset
/// - `-v` - Debug for the shopcart crates
/// - Default: warnings, plus info from the shopcart crates
///
/// Logs go to stderr; stdout carries only receipts and listings.
pub fn init_tracing(verbose: bool, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(fallback_log_filter(verbose, configured))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_log_filter() {
        assert_eq!(fallback_log_filter(false, None), DEFAULT_LOG_FILTER);
        assert_eq!(fallback_log_filter(true, None), VERBOSE_LOG_FILTER);
        assert_eq!(fallback_log_filter(true, Some("trace")), "trace");
    }

    #[test]
    fn test_filters_parse() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(EnvFilter::try_new(VERBOSE_LOG_FILTER).is_ok());
    }
}
