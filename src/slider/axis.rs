//! Mapping between the 0..=100 axis and cells along a drawn track.
//!
//! Orientation and inversion only change where a value lands on screen; the
//! semantic axis is the same for every slider. Position 0 sits at the start
//! of the track (left or top) unless the layout is inverted, which is how
//! right-to-left label order is expressed.

use serde::Deserialize;

use super::catalog::{clamp_axis, AXIS_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// How a slider's axis is laid onto its track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisLayout {
    pub orientation: Orientation,
    /// Place position 0 at the end of the track instead of the start
    pub inverted: bool,
}

impl AxisLayout {
    pub fn new(orientation: Orientation, inverted: bool) -> Self {
        Self {
            orientation,
            inverted,
        }
    }

    /// Axis value for the cell at `offset` on a track `length` cells long.
    pub fn value_at(&self, offset: u16, length: u16) -> f64 {
        if length <= 1 {
            return 0.0;
        }
        let last = f64::from(length - 1);
        let fraction = f64::from(offset.min(length - 1)) / last;
        let value = fraction * AXIS_MAX;
        if self.inverted { AXIS_MAX - value } else { value }
    }

    /// Track cell for an axis value on a track `length` cells long.
    pub fn offset_for(&self, value: f64, length: u16) -> u16 {
        if length <= 1 {
            return 0;
        }
        let value = clamp_axis(value);
        let value = if self.inverted { AXIS_MAX - value } else { value };
        let last = f64::from(length - 1);
        ((value / AXIS_MAX) * last).round() as u16
    }
}
