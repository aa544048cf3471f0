//! The sweep driver: move a plane up the z axis and cut active wedges.

use stlsweep_mesh::Mesh;
use tracing::{debug, trace};

use crate::active::ActiveSet;
use crate::error::Result;
use crate::event::EventQueue;
use crate::interpolate::{intersect, Segment};
use crate::SliceSettings;

/// All segments at one slice height.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceLayer {
    /// Height of the slicing plane.
    pub z: f32,
    /// Slice index (0 = `z_min`).
    pub index: u32,
    /// Unordered segments, one per active wedge.
    pub segments: Vec<Segment>,
}

/// A streaming plane sweep over a mesh.
///
/// Before slice `i` at height `z`, every event strictly below `z` is applied
/// to the active set. A wedge activated exactly at `z` therefore first shows
/// up on the following slice, and a wedge deactivated exactly at `z` is
/// still cut at `z`. Each wedge is live on the half-open interval
/// `(bottom, top]`.
///
/// Iterating yields segments slice by slice; [`Sweep::next_layer`] yields
/// them grouped.
#[derive(Debug)]
pub struct Sweep<'m> {
    mesh: &'m Mesh,
    settings: SliceSettings,
    queue: EventQueue,
    cursor: usize,
    active: ActiveSet,
    next_slice: u32,
    pending: std::vec::IntoIter<Segment>,
}

impl<'m> Sweep<'m> {
    /// Prepare a sweep. Fails only on invalid settings.
    pub fn new(mesh: &'m Mesh, settings: &SliceSettings) -> Result<Self> {
        settings.validate()?;
        let queue = EventQueue::build(mesh);
        debug!(
            facets = mesh.num_facets(),
            events = queue.len(),
            slices = settings.slices,
            step = settings.step(),
            "starting sweep"
        );
        Ok(Self {
            mesh,
            settings: settings.clone(),
            queue,
            cursor: 0,
            active: ActiveSet::new(),
            next_slice: 0,
            pending: Vec::new().into_iter(),
        })
    }

    /// Apply every event below `z` that has not been applied yet.
    fn drain(&mut self, z: f32) {
        while let Some(event) = self.queue.get(self.cursor).filter(|e| e.z < z) {
            self.active.apply(event);
            self.cursor += 1;
        }
    }

    /// Advance to the next slice height and cut every active wedge.
    pub fn next_layer(&mut self) -> Option<SliceLayer> {
        if self.next_slice >= self.settings.slices {
            return None;
        }
        let index = self.next_slice;
        let z = self.settings.height(index);
        self.next_slice += 1;

        self.drain(z);
        trace!(index, z, active = self.active.len(), "slice");

        let segments = self
            .active
            .iter()
            .map(|wedge| intersect(self.mesh, wedge, z))
            .collect();
        Some(SliceLayer { z, index, segments })
    }

    /// Wedges currently crossed by the sweep plane.
    pub fn active(&self) -> &ActiveSet {
        &self.active
    }
}

impl Iterator for Sweep<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if let Some(segment) = self.pending.next() {
                return Some(segment);
            }
            self.pending = self.next_layer()?.segments.into_iter();
        }
    }
}

/// Slice a mesh into a flat list of segments, ordered by slice.
pub fn slice_segments(mesh: &Mesh, settings: &SliceSettings) -> Result<Vec<Segment>> {
    Ok(Sweep::new(mesh, settings)?.collect())
}

/// Slice a mesh into one layer per slice height, empty layers included.
pub fn slice_layers(mesh: &Mesh, settings: &SliceSettings) -> Result<Vec<SliceLayer>> {
    let mut sweep = Sweep::new(mesh, settings)?;
    Ok(std::iter::from_fn(|| sweep.next_layer()).collect())
}
