//! Sweep events: where wedges enter and leave the active set.

use stlsweep_mesh::Mesh;

use crate::wedge::{classify, cmp_height, Wedge};

/// What an event does to the active set.
///
/// The derived order puts activations first, so at a shared height the
/// upper wedge of a facet is activated before its lower wedge is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Insert the wedge.
    Activate,
    /// Remove the wedge.
    Deactivate,
}

/// A wedge entering or leaving the sweep at height `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Height at which the event applies.
    pub z: f32,
    /// Insert or remove.
    pub kind: EventKind,
    /// The wedge concerned.
    pub wedge: Wedge,
}

/// All events of a mesh, sorted by height then kind.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Classify every facet and sort the resulting events.
    ///
    /// Four events per facet are emitted in the order lower-activate,
    /// lower-deactivate, upper-activate, upper-deactivate. The sort is
    /// stable, so events with equal height and kind keep that order.
    pub fn build(mesh: &Mesh) -> Self {
        let mut events = Vec::with_capacity(mesh.num_facets() * 4);

        for (index, facet) in mesh.facets().iter().enumerate() {
            for wedge in classify(mesh, index, facet) {
                events.push(Event {
                    z: wedge.bottom,
                    kind: EventKind::Activate,
                    wedge,
                });
                events.push(Event {
                    z: wedge.top,
                    kind: EventKind::Deactivate,
                    wedge,
                });
            }
        }

        events.sort_by(|a, b| cmp_height(a.z, b.z).then(a.kind.cmp(&b.kind)));
        Self { events }
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if there are no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The sorted events.
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Event at `cursor`, if any.
    pub fn get(&self, cursor: usize) -> Option<&Event> {
        self.events.get(cursor)
    }
}
