//! Configuration file support for pageslider.
//!
//! Configuration is loaded from `~/.config/pageslider/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`PAGESLIDER_CONFIG`, `PAGESLIDER_LOCALE`)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/pageslider/config.toml
//! locale = "en"
//! initial_city = "New York"
//! initial_route = "Hotels"
//!
//! [slider]
//! live_update = true
//! snap_threshold = 5.0
//! active_threshold = 5.0
//! step = 5.0
//! orientation = "horizontal"
//! invert_axis = false
//!
//! # Replace the built-in city list
//! [[catalogs.cities]]
//! name = "Miami"
//! position = 0.0
//!
//! [[catalogs.cities]]
//! name = "Paris"
//! position = 50.0
//!
//! [[catalogs.cities]]
//! name = "New York"
//! position = 100.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CatalogResult, ConfigError};
use crate::log;
use crate::slider::{AxisLayout, CatalogSet, ControllerOptions, Locale, Orientation, SelectableItem, SliderMode};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Catalog language ("en" or "he")
    pub locale: Option<String>,

    /// City the city slider starts on
    pub initial_city: Option<String>,

    /// Route the app opens on
    pub initial_route: Option<String>,

    /// Slider behavior and layout
    pub slider: SliderConfig,

    /// Replacements for the built-in catalogs
    pub catalogs: CatalogOverrides,
}

/// Slider behavior and layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// City and year sliders report selection while dragging
    pub live_update: bool,

    /// Distance at which the page slider navigates mid-drag
    pub snap_threshold: f64,

    /// Distance at which a label is highlighted
    pub active_threshold: f64,

    /// Axis units moved per key press
    pub step: f64,

    pub orientation: Orientation,

    pub invert_axis: bool,

    /// Right-to-left layout. Defaults to the locale's direction.
    pub rtl: Option<bool>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            live_update: true,
            snap_threshold: 5.0,
            active_threshold: 5.0,
            step: 5.0,
            orientation: Orientation::Horizontal,
            invert_axis: false,
            rtl: None,
        }
    }
}

/// Catalog overrides. Any list present replaces the built-in one.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CatalogOverrides {
    pub navigation: Option<Vec<SelectableItem>>,
    pub cities: Option<Vec<SelectableItem>>,
    pub years: Option<Vec<SelectableItem>>,
}

impl CatalogOverrides {
    fn get(&self, mode: SliderMode) -> Option<&Vec<SelectableItem>> {
        match mode {
            SliderMode::Navigation => self.navigation.as_ref(),
            SliderMode::Cities => self.cities.as_ref(),
            SliderMode::Years => self.years.as_ref(),
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub city: Option<String>,
    pub route: Option<String>,
    pub locale: Option<String>,
    pub vertical: bool,
    pub no_live_update: bool,
}

impl Config {
    /// Load configuration from `path`, or the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                log::log(&format!("Config ignored: {}", e));
                Self::default()
            }
        }
    }

    /// Read and parse a configuration file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        std::env::var("PAGESLIDER_CONFIG")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join("config.toml"))
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pageslider")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.city.is_some() {
            self.initial_city = overrides.city;
        }
        if overrides.route.is_some() {
            self.initial_route = overrides.route;
        }
        if overrides.locale.is_some() {
            self.locale = overrides.locale;
        }
        if overrides.vertical {
            self.slider.orientation = Orientation::Vertical;
        }
        if overrides.no_live_update {
            self.slider.live_update = false;
        }
        self
    }

    /// Get the catalog locale, falling back to environment variable or English.
    pub fn locale(&self) -> CatalogResult<Locale> {
        match self
            .locale
            .clone()
            .or_else(|| std::env::var("PAGESLIDER_LOCALE").ok())
        {
            Some(code) => Locale::parse(&code),
            None => Ok(Locale::English),
        }
    }

    /// Build the catalogs for this configuration.
    ///
    /// Every catalog is validated here, so a bad override stops the app
    /// before any slider exists.
    pub fn catalogs(&self) -> Result<CatalogSet, ConfigError> {
        let mut set = CatalogSet::builtin(self.locale()?)?;
        for mode in SliderMode::ALL {
            if let Some(items) = self.catalogs.get(mode) {
                set = set.with_override(mode, items.clone())?;
            }
        }
        Ok(set)
    }

    pub fn controller_options(&self) -> Result<ControllerOptions, ConfigError> {
        let slider = &self.slider;
        for (key, value) in [
            ("slider.snap_threshold", slider.snap_threshold),
            ("slider.active_threshold", slider.active_threshold),
            ("slider.step", slider.step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: format!("{} is not a positive number", value),
                });
            }
        }

        Ok(ControllerOptions {
            live_update: slider.live_update,
            snap_threshold: slider.snap_threshold,
            active_threshold: slider.active_threshold,
        })
    }

    /// Whether labels run right to left.
    pub fn rtl(&self) -> bool {
        self.slider
            .rtl
            .unwrap_or_else(|| self.locale().map(Locale::is_rtl).unwrap_or(false))
    }

    /// Track layout. Right-to-left flips horizontal tracks only.
    pub fn axis_layout(&self) -> AxisLayout {
        let rtl_flip = self.rtl() && self.slider.orientation == Orientation::Horizontal;
        AxisLayout::new(self.slider.orientation, self.slider.invert_axis ^ rtl_flip)
    }

    pub fn initial_route(&self) -> &str {
        self.initial_route.as_deref().unwrap_or("Home")
    }

    pub fn initial_city(&self) -> Option<&str> {
        self.initial_city.as_deref()
    }
}
