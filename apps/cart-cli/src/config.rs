//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--format`, `--output`)
//! 2. Environment variables (`SHOPCART_*`)
//! 3. Defaults (this file)
//!
//! The core crate reads no configuration; everything here is about how the
//! front-end calls it.

use std::path::{Path, PathBuf};

use cart_core::ReceiptFormat;

/// Environment variable holding the default receipt format.
pub const FORMAT_ENV: &str = "SHOPCART_FORMAT";

/// Environment variable naming the directory for bare `--output` file names.
pub const OUTPUT_DIR_ENV: &str = "SHOPCART_OUTPUT_DIR";

/// Environment variable consulted for the log filter when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "SHOPCART_LOG";

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Receipt format used when `--format` is not given.
    pub default_format: ReceiptFormat,

    /// Directory bare `--output` file names are placed in.
    pub output_dir: Option<PathBuf>,

    /// Log filter directives used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for CliConfig {
    /// Text receipts, output relative to the working directory, default
    /// log levels.
    fn default() -> Self {
        CliConfig {
            default_format: ReceiptFormat::Text,
            output_dir: None,
            log_filter: None,
        }
    }
}

impl CliConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPCART_FORMAT`: Override the default receipt format (any case;
    ///   an unknown name keeps the default)
    /// - `SHOPCART_OUTPUT_DIR`: Directory for bare output file names
    /// - `SHOPCART_LOG`: Log filter fallback
    pub fn from_env() -> Self {
        CliConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = CliConfig::default();

        if let Some(format) = get(FORMAT_ENV) {
            if let Ok(format) = format.trim().parse::<ReceiptFormat>() {
                config.default_format = format;
            }
        }

        if let Some(dir) = get(OUTPUT_DIR_ENV) {
            config.output_dir = Some(PathBuf::from(dir));
        }

        config.log_filter = get(LOG_ENV);
        config
    }

    /// Places a bare file name inside `output_dir`.
    ///
    /// Paths with any directory component, and absolute paths, are
    /// returned unchanged.
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        let is_bare = path.is_relative()
            && path
                .parent()
                .map_or(true, |parent| parent.as_os_str().is_empty());

        match &self.output_dir {
            Some(dir) if is_bare => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
