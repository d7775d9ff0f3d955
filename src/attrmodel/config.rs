//! # Configuration
//!
//! Settings are loaded with [`confique`] from TOML files and environment variables.
//!
//! ## Layers
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `ATTRMODEL_MIXED_DECODING`, `ATTRMODEL_PRETTY`,
//!    `ATTRMODEL_LOG_LEVEL`.
//! 2. **Explicit file**: the path given with `--config`. It must exist.
//! 3. **Local file**: `./attrmodel.toml`, if present.
//! 4. **Global file**: `config.toml` in the OS config directory (via `directories`).
//! 5. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `mixed_decoding` | `lenient` | `strict` makes malformed JSON in mixed attributes an error |
//! | `pretty` | `true` | Pretty-print JSON output |
//! | `log_level` | `warn` | Log level when `--verbose` and `RUST_LOG` are not given |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;

use crate::coerce::{DecodePolicy, Options};
use crate::error::{ModelError, Result};

pub const LOCAL_CONFIG_FILE: &str = "attrmodel.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How to treat malformed JSON written to mixed attributes: "lenient" or "strict".
    #[config(env = "ATTRMODEL_MIXED_DECODING", default = "lenient")]
    pub mixed_decoding: DecodePolicy,

    /// Pretty-print JSON output.
    #[config(env = "ATTRMODEL_PRETTY", default = true)]
    pub pretty: bool,

    /// Default log level.
    #[config(env = "ATTRMODEL_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mixed_decoding: DecodePolicy::Lenient,
            pretty: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load all layers. `explicit` is the `--config` path, if any.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ModelError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }

        builder = builder.file(LOCAL_CONFIG_FILE);
        if let Some(path) = global_config_path() {
            builder = builder.file(path);
        }

        builder
            .load()
            .map_err(|e| ModelError::Config(e.to_string()))
    }

    /// Coercion options for models built under these settings.
    pub fn model_options(&self) -> Options {
        Options {
            mixed_decoding: self.mixed_decoding,
        }
    }
}

pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "attrmodel").map(|dirs| dirs.config_dir().join(GLOBAL_CONFIG_FILE))
}
