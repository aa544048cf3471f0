//! Plane/edge intersection for active wedges.

use serde::{Deserialize, Serialize};
use stlsweep_mesh::{Mesh, Point2, Point3};

use crate::wedge::Wedge;

/// A contour segment in the plane `z`.
///
/// Both endpoints share the height of the slice that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Slice height.
    pub z: f32,
    /// Cut point on the wedge's first edge.
    pub a: Point2,
    /// Cut point on the wedge's second edge.
    pub b: Point2,
}

impl Segment {
    /// First endpoint in 3-D.
    pub fn start(&self) -> Point3 {
        Point3::new(self.a.x, self.a.y, self.z)
    }

    /// Second endpoint in 3-D.
    pub fn end(&self) -> Point3 {
        Point3::new(self.b.x, self.b.y, self.z)
    }

    /// Midpoint in the slice plane.
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }
}

/// Where the plane at height `z` crosses the edge `p -> q`.
///
/// The caller guarantees `p.z != q.z`. A horizontal edge yields NaN or
/// infinite coordinates rather than a silently wrong point.
pub fn cut_edge(p: &Point3, q: &Point3, z: f32) -> Point2 {
    let t = (z - p.z) / (q.z - p.z);
    Point2::new(p.x + t * (q.x - p.x), p.y + t * (q.y - p.y))
}

/// Cut both edges of a wedge at height `z`.
pub fn intersect(mesh: &Mesh, wedge: &Wedge, z: f32) -> Segment {
    let [(a, b), (c, d)] = wedge.edges();
    Segment {
        z,
        a: cut_edge(mesh.vertex(a), mesh.vertex(b), z),
        b: cut_edge(mesh.vertex(c), mesh.vertex(d), z),
    }
}
