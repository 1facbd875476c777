//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` from the site
//! source root. Configuration is sparse: stock defaults are overridden by
//! whatever keys the user's file provides, and unknown keys are rejected to
//! catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [identity]
//! name = "Government College of Technology, Bhakkar"
//! short_name = "GCT"
//! about = "..."             # Footer about text
//! address = ["Main Road, Bhakkar", "Punjab, Pakistan"]
//! phone = "+92 (453) 123456"
//! email = "info@gctbhakkar.edu.pk"
//! affiliation = "Punjab Board of Technical Education (PBTE)"
//!
//! [timing]
//! counter_duration_ms = 2000   # Counter animation length
//! carousel_interval_ms = 5000  # Automatic slide rotation period
//! loader_fallback_ms = 3000    # Force-hide deadline for the page loader
//! loader_fade_ms = 500         # Loader fade transition
//!
//! [behavior]
//! back_to_top_threshold = 400  # Scroll offset revealing the button
//! counter_visibility = 0.5     # Visible fraction that starts a counter
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the live site. User config files need
/// only specify the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Institutional identity strings shown in the footer.
    pub identity: IdentityConfig,
    /// Widget timing, all in milliseconds.
    pub timing: TimingConfig,
    /// Thresholds for scroll- and visibility-driven behavior.
    pub behavior: BehaviorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        for (name, value) in [
            ("timing.counter_duration_ms", t.counter_duration_ms),
            ("timing.carousel_interval_ms", t.carousel_interval_ms),
            ("timing.loader_fallback_ms", t.loader_fallback_ms),
            ("timing.loader_fade_ms", t.loader_fade_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{name} must be nonzero")));
            }
        }
        let v = self.behavior.counter_visibility;
        if !(v > 0.0 && v <= 1.0) {
            return Err(ConfigError::Validation(
                "behavior.counter_visibility must be in (0, 1]".into(),
            ));
        }
        if self.identity.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "identity.name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Institutional identity strings, rendered into the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Full institution name, used in the copyright line.
    pub name: String,
    /// Short name, used in the "About" column heading.
    pub short_name: String,
    /// About paragraph.
    pub about: String,
    /// Postal address lines, rendered one per line.
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    /// Affiliation credit in the footer bottom bar.
    pub affiliation: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "Government College of Technology, Bhakkar".to_string(),
            short_name: "GCT".to_string(),
            about: "Government College of Technology, Bhakkar provides quality \
                    technical education through PBTE-approved diploma programs."
                .to_string(),
            address: vec![
                "Main Road, Bhakkar".to_string(),
                "Punjab, Pakistan".to_string(),
            ],
            phone: "+92 (453) 123456".to_string(),
            email: "info@gctbhakkar.edu.pk".to_string(),
            affiliation: "Punjab Board of Technical Education (PBTE)".to_string(),
        }
    }
}

/// Widget timing settings, milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Counter animation length.
    pub counter_duration_ms: u64,
    /// Automatic carousel rotation period.
    pub carousel_interval_ms: u64,
    /// Deadline after which the page loader is hidden even if the window
    /// never reports load.
    pub loader_fallback_ms: u64,
    /// Fade transition used both for the post-load hide delay and for
    /// removal after hiding.
    pub loader_fade_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            carousel_interval_ms: 5000,
            loader_fallback_ms: 3000,
            loader_fade_ms: 500,
        }
    }
}

/// Scroll/visibility thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Scroll offset (px) past which the back-to-top button shows.
    pub back_to_top_threshold: u32,
    /// Fraction of a counter element that must be visible to start it.
    pub counter_visibility: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: 400,
            counter_visibility: 0.5,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// The canonical representation of all default values, used as the base
/// layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# campus-web Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults (the live site's values).
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Identity - footer content
# ---------------------------------------------------------------------------
[identity]
# Full institution name, used in the copyright line.
name = "Government College of Technology, Bhakkar"

# Short name, used in the "About" column heading.
short_name = "GCT"

# About paragraph shown in the footer's first column.
about = "Government College of Technology, Bhakkar provides quality technical education through PBTE-approved diploma programs."

# Postal address lines, rendered one per line in the contact column.
address = ["Main Road, Bhakkar", "Punjab, Pakistan"]

phone = "+92 (453) 123456"
email = "info@gctbhakkar.edu.pk"

# Affiliation credit in the footer bottom bar.
affiliation = "Punjab Board of Technical Education (PBTE)"

# ---------------------------------------------------------------------------
# Timing - all in milliseconds
# ---------------------------------------------------------------------------
[timing]
# Counter animation length.
counter_duration_ms = 2000

# Automatic carousel rotation period.
carousel_interval_ms = 5000

# Deadline after which the page loader is hidden even without a load event.
loader_fallback_ms = 3000

# Loader fade transition (post-load hide delay and removal delay).
loader_fade_ms = 500

# ---------------------------------------------------------------------------
# Behavior - scroll/visibility thresholds
# ---------------------------------------------------------------------------
[behavior]
# Scroll offset (px) past which the back-to-top button shows.
back_to_top_threshold = 400

# Fraction of a counter element that must be visible to start it (0-1].
counter_visibility = 0.5
"##
}
