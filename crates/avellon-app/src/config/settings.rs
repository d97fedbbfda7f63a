//! Settings loader for .avellon/config.toml

use std::path::Path;

use avellon_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const AVELLON_DIR: &str = ".avellon";

const DEFAULT_CONFIG: &str = r#"# AVELLON Console Configuration

[session]
# Page to open on launch (e.g. "Insights"). Secure pages open the login form.
# start_page = "Home"

[fixtures]
# Fix the risk trend series across runs
# seed = 42

[ui]
show_footer = true
tick_rate_ms = 50
map_resolution = "high"   # "high" or "low"
"#;

/// Parse settings from TOML text, validating value ranges.
pub fn parse_settings(content: &str, origin: &Path) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| Error::config_invalid(origin, e.to_string()))?;

    if settings.ui.tick_rate_ms == 0 {
        return Err(Error::config_invalid(
            origin,
            "ui.tick_rate_ms must be greater than zero",
        ));
    }

    Ok(settings)
}

/// Load settings from .avellon/config.toml
///
/// Returns default settings if the file doesn't exist or can't be used.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(AVELLON_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content, &config_path) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("{}", e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create .avellon/config.toml with commented defaults. Existing files are left alone.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let avellon_dir = project_path.join(AVELLON_DIR);

    if !avellon_dir.exists() {
        std::fs::create_dir_all(&avellon_dir)
            .with_context(|| format!("Failed to create {}", avellon_dir.display()))?;
    }

    let config_path = avellon_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created {:?}", config_path);
    }

    Ok(())
}
