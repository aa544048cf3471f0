//! The set of wedges crossed by the current sweep plane.

use std::collections::BTreeMap;

use tracing::warn;

use crate::event::{Event, EventKind};
use crate::wedge::{Wedge, WedgeId};

/// Wedges whose height interval contains the sweep plane, keyed by id.
///
/// Iteration is in ascending id order, which makes segment output
/// identical across runs.
#[derive(Debug, Clone, Default)]
pub struct ActiveSet {
    wedges: BTreeMap<WedgeId, Wedge>,
}

impl ActiveSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a wedge. A second activation of the same id replaces the first.
    pub fn activate(&mut self, wedge: Wedge) {
        let id = wedge.id();
        if self.wedges.insert(id, wedge).is_some() {
            warn!(facet = id.facet(), parity = ?id.parity(), "wedge activated twice");
        }
    }

    /// Remove a wedge. Removing an absent id does nothing.
    pub fn deactivate(&mut self, id: WedgeId) {
        if self.wedges.remove(&id).is_none() {
            warn!(facet = id.facet(), parity = ?id.parity(), "deactivating inactive wedge");
        }
    }

    /// Apply an event.
    pub fn apply(&mut self, event: &Event) {
        match event.kind {
            EventKind::Activate => self.activate(event.wedge),
            EventKind::Deactivate => self.deactivate(event.wedge.id()),
        }
    }

    /// True if the wedge is active.
    pub fn contains(&self, id: WedgeId) -> bool {
        self.wedges.contains_key(&id)
    }

    /// Active wedges in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Wedge> {
        self.wedges.values()
    }

    /// Number of active wedges.
    pub fn len(&self) -> usize {
        self.wedges.len()
    }

    /// True if no wedge is active.
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wedge::Parity;

    fn wedge(facet: usize, parity: Parity, bottom: f32) -> Wedge {
        Wedge {
            facet,
            parity,
            a: 0,
            b: 1,
            c: 0,
            d: 2,
            bottom,
            top: bottom + 1.0,
        }
    }

    #[test]
    fn test_activate_deactivate() {
        let mut set = ActiveSet::new();
        let lower = wedge(3, Parity::Lower, 0.0);
        let upper = wedge(3, Parity::Upper, 1.0);

        set.activate(lower);
        set.activate(upper);
        assert_eq!(set.len(), 2);

        set.deactivate(lower.id());
        assert!(!set.contains(lower.id()));
        assert!(set.contains(upper.id()));
    }

    #[test]
    fn test_later_activation_wins() {
        let mut set = ActiveSet::new();
        set.activate(wedge(1, Parity::Lower, 0.0));
        set.activate(wedge(1, Parity::Lower, 5.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().bottom, 5.0);
    }

    #[test]
    fn test_orphan_deactivation_is_ignored() {
        let mut set = ActiveSet::new();
        set.activate(wedge(0, Parity::Upper, 0.0));
        set.deactivate(WedgeId::new(9, Parity::Lower));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_in_id_order() {
        let mut set = ActiveSet::new();
        for (facet, parity) in [(5, Parity::Upper), (0, Parity::Lower), (5, Parity::Lower)] {
            set.apply(&Event {
                z: 0.0,
                kind: EventKind::Activate,
                wedge: wedge(facet, parity, 0.0),
            });
        }
        let ids: Vec<u64> = set.iter().map(|w| w.id().0).collect();
        assert_eq!(ids, vec![0, 10, 11]);
    }
}
