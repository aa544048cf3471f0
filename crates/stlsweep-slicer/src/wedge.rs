//! Triangle classification into wedges.
//!
//! A facet is split at its middle-height vertex into a lower and an upper
//! wedge. Inside one wedge every horizontal plane cuts the same two edges,
//! so the interpolator needs no per-slice case analysis:
//!
//! ```text
//!        max
//!        /|        UPPER: (mid, max) and (min, max)
//!   mid /_|  ----- split plane
//!       \ |        LOWER: (min, max) and (min, mid)
//!        \|
//!        min
//! ```

use std::cmp::Ordering;

use stlsweep_mesh::{Facet, Mesh};

/// Which half of a facet a wedge covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parity {
    /// Between the minimum and middle vertex.
    Lower = 0,
    /// Between the middle and maximum vertex.
    Upper = 1,
}

/// Stable key of a wedge within one sweep: `(facet << 1) | parity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WedgeId(pub u64);

impl WedgeId {
    /// Key for the given facet half.
    pub fn new(facet: usize, parity: Parity) -> Self {
        Self(((facet as u64) << 1) | parity as u64)
    }

    /// Facet index this wedge belongs to.
    pub fn facet(self) -> usize {
        (self.0 >> 1) as usize
    }

    /// Which half of the facet.
    pub fn parity(self) -> Parity {
        if self.0 & 1 == 0 {
            Parity::Lower
        } else {
            Parity::Upper
        }
    }
}

/// The part of a facet between two horizontal planes.
///
/// Edges `a -> b` and `c -> d` are the two edges every plane inside the
/// wedge's height interval crosses. Each edge runs from its lower to its
/// upper vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    /// Index of the owning facet.
    pub facet: usize,
    /// Which half of the facet.
    pub parity: Parity,
    /// Lower vertex of the first edge.
    pub a: u32,
    /// Upper vertex of the first edge.
    pub b: u32,
    /// Lower vertex of the second edge.
    pub c: u32,
    /// Upper vertex of the second edge.
    pub d: u32,
    /// Height of the bottom of the wedge.
    pub bottom: f32,
    /// Height of the top of the wedge.
    pub top: f32,
}

impl Wedge {
    /// Key used by the active set.
    pub fn id(&self) -> WedgeId {
        WedgeId::new(self.facet, self.parity)
    }

    /// Vertical extent. Zero for a wedge that never produces output.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// The two cut edges as vertex index pairs.
    pub fn edges(&self) -> [(u32, u32); 2] {
        [(self.a, self.b), (self.c, self.d)]
    }
}

/// Compare two heights. Finite inputs only; `-0.0` and `0.0` are equal.
pub(crate) fn cmp_height(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Order a facet's vertices as `[min, mid, max]` by height.
///
/// Equal heights are ordered by vertex index, so the ranking is total and
/// does not depend on the facet's winding.
pub fn rank_vertices(mesh: &Mesh, facet: &Facet) -> [u32; 3] {
    let mut ranked = facet.indices();
    ranked.sort_by(|&i, &j| cmp_height(mesh.vertex(i).z, mesh.vertex(j).z).then(i.cmp(&j)));
    ranked
}

/// Split a facet into its `[lower, upper]` wedges.
pub fn classify(mesh: &Mesh, index: usize, facet: &Facet) -> [Wedge; 2] {
    let [min, mid, max] = rank_vertices(mesh, facet);
    let z = |i: u32| mesh.vertex(i).z;

    let lower = Wedge {
        facet: index,
        parity: Parity::Lower,
        a: min,
        b: max,
        c: min,
        d: mid,
        bottom: z(min),
        top: z(mid),
    };
    let upper = Wedge {
        facet: index,
        parity: Parity::Upper,
        a: mid,
        b: max,
        c: min,
        d: max,
        bottom: z(mid),
        top: z(max),
    };
    [lower, upper]
}
