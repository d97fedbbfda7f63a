//! Configuration file parsing for the AVELLON console
//!
//! Supports:
//! - `.avellon/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{
    init_config_dir, load_settings, parse_settings, AVELLON_DIR, CONFIG_FILENAME,
};
pub use types::*;
