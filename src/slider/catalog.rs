//! Selectable items and the validated catalogs that hold them.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};

/// Lowest position on the slider axis.
pub const AXIS_MIN: f64 = 0.0;
/// Highest position on the slider axis.
pub const AXIS_MAX: f64 = 100.0;

/// Clamp a raw value onto the slider axis. NaN maps to the axis start.
pub fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        AXIS_MIN
    } else {
        value.clamp(AXIS_MIN, AXIS_MAX)
    }
}

/// What a slider selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderMode {
    /// Page turner: resolved items carry a route to navigate to
    Navigation,
    /// City picker: resolved item names go to the city callback
    Cities,
    /// Year picker: resolved item names are parsed as years
    Years,
}

impl SliderMode {
    pub const ALL: [SliderMode; 3] = [SliderMode::Navigation, SliderMode::Cities, SliderMode::Years];

    pub fn label(self) -> &'static str {
        match self {
            SliderMode::Navigation => "navigation",
            SliderMode::Cities => "cities",
            SliderMode::Years => "years",
        }
    }
}

impl fmt::Display for SliderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A discrete stop on the slider axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectableItem {
    /// Display name, unique within its catalog
    pub name: String,

    /// Canonical location on the 0..=100 axis
    pub position: f64,

    /// Route to navigate to when this item is selected (navigation mode only)
    #[serde(default)]
    pub target: Option<String>,
}

impl SelectableItem {
    pub fn new(name: impl Into<String>, position: f64) -> Self {
        Self {
            name: name.into(),
            position,
            target: None,
        }
    }

    /// Builder: attach a navigation target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Distance from this item's position to `value`
    pub fn distance_to(&self, value: f64) -> f64 {
        (self.position - value).abs()
    }

    /// Year value of this item, if its name is one.
    pub fn year(&self) -> Option<i32> {
        self.name.trim().parse().ok()
    }
}

/// An ordered, non-empty, immutable list of items for one slider mode.
///
/// Construction validates every invariant the resolver and controller rely
/// on, so a `Catalog` that exists is always usable. Clones share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    mode: SliderMode,
    items: Arc<[SelectableItem]>,
}

impl Catalog {
    /// Validate `items` and build a catalog.
    ///
    /// Rejects empty lists, positions that are non-finite or off the axis,
    /// duplicate names, duplicate positions, positions that decrease along the
    /// list, and (for year catalogs) names that do not parse as years.
    pub fn new(mode: SliderMode, items: Vec<SelectableItem>) -> CatalogResult<Self> {
        if items.is_empty() {
            return Err(CatalogError::Empty(mode.label()));
        }

        let mut names = HashSet::new();
        let mut previous: Option<&SelectableItem> = None;

        for item in &items {
            if !item.position.is_finite() {
                return Err(CatalogError::NonFinitePosition(item.name.clone()));
            }
            if !(AXIS_MIN..=AXIS_MAX).contains(&item.position) {
                return Err(CatalogError::PositionOutOfRange {
                    name: item.name.clone(),
                    position: item.position,
                });
            }
            if !names.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
            if mode == SliderMode::Years && item.year().is_none() {
                return Err(CatalogError::InvalidYear(item.name.clone()));
            }
            if let Some(prev) = previous {
                if item.position == prev.position {
                    return Err(CatalogError::DuplicatePosition {
                        first: prev.name.clone(),
                        second: item.name.clone(),
                        position: item.position,
                    });
                }
                if item.position < prev.position {
                    return Err(CatalogError::OutOfOrder {
                        name: item.name.clone(),
                        position: item.position,
                    });
                }
            }
            previous = Some(item);
        }

        Ok(Self {
            mode,
            items: items.into(),
        })
    }

    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Index of the item that navigates to `target`
    pub fn index_of_target(&self, target: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.target.as_deref() == Some(target))
    }
}
