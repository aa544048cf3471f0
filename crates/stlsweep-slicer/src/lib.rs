#![warn(missing_docs)]

//! Plane-sweep slicer for triangle meshes.
//!
//! Cuts an indexed mesh with evenly spaced horizontal planes and emits the
//! contour line segments of every cross-section. Each facet is split at its
//! middle-height vertex into two wedges whose cut edges are fixed; wedges
//! enter and leave an active set as the plane moves up, so each slice only
//! touches the facets it actually crosses.
//!
//! Segments are unordered within a slice. Linking them into closed
//! contours is left to the consumer.
//!
//! # Example
//!
//! ```no_run
//! use stlsweep_slicer::{slice_segments, SliceSettings};
//!
//! let mesh = stlsweep_mesh::read_stl("part.stl")?;
//! let settings = SliceSettings { z_min: 0.0, z_max: 20.0, slices: 100 };
//! for segment in slice_segments(&mesh, &settings)? {
//!     println!("{} -> {}", segment.start(), segment.end());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod active;
pub mod error;
pub mod event;
pub mod interpolate;
pub mod sweep;
pub mod wedge;

pub use active::ActiveSet;
pub use error::{Result, SlicerError};
pub use event::{Event, EventKind, EventQueue};
pub use interpolate::{cut_edge, intersect, Segment};
pub use sweep::{slice_layers, slice_segments, SliceLayer, Sweep};
pub use wedge::{classify, rank_vertices, Parity, Wedge, WedgeId};

use serde::{Deserialize, Serialize};

/// Sweep parameters.
///
/// Slice `i` is taken at `z_min + i * (z_max - z_min) / slices` for
/// `i in 0..slices`, so `z_max` itself is never sliced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliceSettings {
    /// Height of the first slice.
    pub z_min: f32,
    /// Upper bound of the sweep (exclusive).
    pub z_max: f32,
    /// Number of slices.
    pub slices: u32,
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            z_min: -10.0,
            z_max: 100.0,
            slices: 200,
        }
    }
}

impl SliceSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.z_min.is_finite() || !self.z_max.is_finite() {
            return Err(SlicerError::InvalidSettings(
                "z_min and z_max must be finite".into(),
            ));
        }
        if self.z_min > self.z_max {
            return Err(SlicerError::InvalidSettings(format!(
                "z_min ({}) must not exceed z_max ({})",
                self.z_min, self.z_max
            )));
        }
        if self.slices == 0 {
            return Err(SlicerError::InvalidSettings(
                "slices must be positive".into(),
            ));
        }
        if !self.step().is_finite() || !self.height(self.slices - 1).is_finite() {
            return Err(SlicerError::InvalidSettings(format!(
                "range {}..{} overflows the slice step",
                self.z_min, self.z_max
            )));
        }
        Ok(())
    }

    /// Distance between consecutive slices.
    pub fn step(&self) -> f32 {
        (self.z_max - self.z_min) / self.slices as f32
    }

    /// Height of slice `index`.
    pub fn height(&self, index: u32) -> f32 {
        self.z_min + index as f32 * self.step()
    }

    /// All slice heights in sweep order.
    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.slices).map(|i| self.height(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_settings() {
        let settings = SliceSettings::default();
        assert!(settings.validate().is_ok());
        assert_relative_eq!(settings.step(), 0.55);
        assert_eq!(settings.height(0), -10.0);
    }

    #[test]
    fn test_heights() {
        let settings = SliceSettings {
            z_min: 1.0,
            z_max: 3.0,
            slices: 4,
        };
        let heights: Vec<f32> = settings.heights().collect();
        assert_eq!(heights, vec![1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_invalid_settings() {
        let zero = SliceSettings {
            slices: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let inverted = SliceSettings {
            z_min: 5.0,
            z_max: 1.0,
            slices: 3,
        };
        assert!(inverted.validate().is_err());

        let infinite = SliceSettings {
            z_max: f32::INFINITY,
            ..Default::default()
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_overflowing_span_rejected() {
        let settings = SliceSettings {
            z_min: -3.0e38,
            z_max: 3.0e38,
            slices: 4,
        };
        assert!(!settings.step().is_finite());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_wide_finite_span_is_valid() {
        let settings = SliceSettings {
            z_min: -1.0e38,
            z_max: 1.0e38,
            slices: 4,
        };
        assert!(settings.validate().is_ok());
        assert!(settings.heights().all(f32::is_finite));
    }

    #[test]
    fn test_flat_range_is_valid() {
        let settings = SliceSettings {
            z_min: 2.0,
            z_max: 2.0,
            slices: 3,
        };
        assert!(settings.validate().is_ok());
        assert!(settings.heights().all(|z| z == 2.0));
    }
}
