//! Built-in catalogs.
//!
//! These are process-wide, read-only configuration. Each accessor hands out
//! a cheap clone of a catalog validated once on first use.

use once_cell::sync::Lazy;

use crate::error::{CatalogError, CatalogResult};

use super::catalog::{Catalog, SelectableItem, SliderMode};

/// Label language for the built-in catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Hebrew,
}

impl Locale {
    pub fn parse(code: &str) -> CatalogResult<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "he" | "hebrew" => Ok(Locale::Hebrew),
            other => Err(CatalogError::UnknownLocale(other.to_string())),
        }
    }

    /// Whether labels in this locale read right to left
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Hebrew)
    }
}

// (label, route, position)
const PAGES_EN: &[(&str, &str, f64)] = &[
    ("Home", "Home", 0.0),
    ("Flights", "Flights", 25.0),
    ("Hotels", "Hotels", 50.0),
    ("Beauty", "Beauty", 75.0),
    ("Events", "Events", 100.0),
];

const PAGES_HE: &[(&str, &str, f64)] = &[
    ("בית", "Home", 0.0),
    ("טיסות", "Flights", 25.0),
    ("מלונות", "Hotels", 50.0),
    ("יופי", "Beauty", 75.0),
    ("אירועים", "Events", 100.0),
];

const CITIES_EN: &[(&str, f64)] = &[("Miami", 0.0), ("New York", 100.0)];

const CITIES_HE: &[(&str, f64)] = &[("מיאמי", 0.0), ("ניו יורק", 100.0)];

const YEARS: &[(&str, f64)] = &[
    ("2020", 0.0),
    ("2021", 20.0),
    ("2022", 40.0),
    ("2023", 60.0),
    ("2024", 80.0),
    ("2025", 100.0),
];

fn build_pages(table: &[(&str, &str, f64)]) -> CatalogResult<Catalog> {
    let items = table
        .iter()
        .map(|(label, route, position)| SelectableItem::new(*label, *position).with_target(*route))
        .collect();
    Catalog::new(SliderMode::Navigation, items)
}

fn build(mode: SliderMode, table: &[(&str, f64)]) -> CatalogResult<Catalog> {
    let items = table
        .iter()
        .map(|(name, position)| SelectableItem::new(*name, *position))
        .collect();
    Catalog::new(mode, items)
}

static BUILTIN_EN: Lazy<CatalogResult<CatalogSet>> = Lazy::new(|| {
    Ok(CatalogSet {
        navigation: build_pages(PAGES_EN)?,
        cities: build(SliderMode::Cities, CITIES_EN)?,
        years: build(SliderMode::Years, YEARS)?,
    })
});

static BUILTIN_HE: Lazy<CatalogResult<CatalogSet>> = Lazy::new(|| {
    Ok(CatalogSet {
        navigation: build_pages(PAGES_HE)?,
        cities: build(SliderMode::Cities, CITIES_HE)?,
        years: build(SliderMode::Years, YEARS)?,
    })
});

/// The three catalogs one screen needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSet {
    pub navigation: Catalog,
    pub cities: Catalog,
    pub years: Catalog,
}

impl CatalogSet {
    /// Built-in catalogs for a locale
    pub fn builtin(locale: Locale) -> CatalogResult<Self> {
        let set = match locale {
            Locale::English => &*BUILTIN_EN,
            Locale::Hebrew => &*BUILTIN_HE,
        };
        set.clone()
    }

    /// Replace one catalog, validating the new items
    pub fn with_override(mut self, mode: SliderMode, items: Vec<SelectableItem>) -> CatalogResult<Self> {
        let catalog = Catalog::new(mode, items)?;
        match mode {
            SliderMode::Navigation => self.navigation = catalog,
            SliderMode::Cities => self.cities = catalog,
            SliderMode::Years => self.years = catalog,
        }
        Ok(self)
    }
}

#[cfg(test)]
pub fn navigation_pages() -> Catalog {
    build_pages(PAGES_EN).unwrap()
}

#[cfg(test)]
pub fn cities() -> Catalog {
    build(SliderMode::Cities, CITIES_EN).unwrap()
}

#[cfg(test)]
pub fn years() -> Catalog {
    build(SliderMode::Years, YEARS).unwrap()
}
