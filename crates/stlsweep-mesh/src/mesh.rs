//! Indexed mesh storage.

use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::Point3;

/// A triangular face: three indices into the vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facet(pub [u32; 3]);

impl Facet {
    /// Create a facet from three vertex indices.
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    /// The vertex indices in winding order.
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }
}

/// A vertex table plus a facet table.
///
/// Every index named by a facet is a valid vertex index and every
/// coordinate is finite; both are checked on construction.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Point3>,
    facets: Vec<Facet>,
}

impl Mesh {
    /// Create a mesh, validating facet indices and vertex coordinates.
    pub fn new(vertices: Vec<Point3>, facets: Vec<Facet>) -> Result<Self> {
        if let Some(i) = vertices
            .iter()
            .position(|v| !v.coords.iter().all(|c| c.is_finite()))
        {
            return Err(MeshError::NonFiniteVertex(i));
        }

        let vertex_count = vertices.len();
        for (facet, f) in facets.iter().enumerate() {
            if let Some(&index) = f.0.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    facet,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self { vertices, facets })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of facets.
    pub fn num_facets(&self) -> usize {
        self.facets.len()
    }

    /// True if the mesh has no facets.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// The vertex table.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The facet table.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Vertex at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range. Indices taken from this mesh's
    /// facets are always in range.
    pub fn vertex(&self, idx: u32) -> &Point3 {
        &self.vertices[idx as usize]
    }

    /// The three corner positions of a facet.
    pub fn facet_vertices(&self, facet: &Facet) -> [Point3; 3] {
        facet.0.map(|i| *self.vertex(i))
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` without vertices.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (lo.inf(v), hi.sup(v))
        }))
    }
}

/// Incremental mesh construction with vertex deduplication.
///
/// Vertices are unified when all three coordinates have identical bit
/// patterns, so `1` and `1.0` in a source file share an index.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Point3>,
    facets: Vec<Facet>,
    index: HashMap<[u32; 3], u32>,
    references: usize,
}

impl MeshBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, returning the index of an identical existing
    /// vertex if there is one.
    pub fn push_vertex(&mut self, p: Point3) -> u32 {
        self.references += 1;
        // -0.0 and 0.0 compare equal but differ in bits
        let key = [p.x, p.y, p.z].map(|c| (c + 0.0).to_bits());
        let next = self.vertices.len() as u32;
        *self.index.entry(key).or_insert_with(|| {
            self.vertices.push(p);
            next
        })
    }

    /// Insert a triangle given by corner positions.
    pub fn push_triangle(&mut self, a: Point3, b: Point3, c: Point3) {
        let facet = Facet::new(self.push_vertex(a), self.push_vertex(b), self.push_vertex(c));
        self.facets.push(facet);
    }

    /// Number of vertex references pushed so far, before deduplication.
    pub fn vertex_references(&self) -> usize {
        self.references
    }

    /// Finish construction.
    pub fn build(self) -> Result<Mesh> {
        Mesh::new(self.vertices, self.facets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_out_of_range_index() {
        let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let err = Mesh::new(vertices, vec![Facet::new(0, 1, 2)]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfRange {
                facet: 0,
                index: 2,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite_vertex() {
        let vertices = vec![Point3::origin(), Point3::new(f32::NAN, 0.0, 0.0)];
        let err = Mesh::new(vertices, Vec::new()).unwrap_err();
        assert!(matches!(err, MeshError::NonFiniteVertex(1)));
    }

    #[test]
    fn test_bounds() {
        let mut builder = MeshBuilder::new();
        builder.push_triangle(
            Point3::new(-1.0, 2.0, 0.5),
            Point3::new(3.0, -4.0, 1.0),
            Point3::new(0.0, 0.0, -2.0),
        );
        let mesh = builder.build().unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min, Point3::new(-1.0, -4.0, -2.0));
        assert_relative_eq!(max, Point3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Mesh::default().bounds().is_none());
    }

    #[test]
    fn test_builder_deduplicates() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(1.0, 1.0, 0.0);

        let mut builder = MeshBuilder::new();
        builder.push_triangle(a, b, c);
        builder.push_triangle(b, d, c);
        assert_eq!(builder.vertex_references(), 6);

        let mesh = builder.build().unwrap();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.facets(), &[Facet::new(0, 1, 2), Facet::new(1, 3, 2)]);
    }

    #[test]
    fn test_builder_unifies_signed_zero() {
        let mut builder = MeshBuilder::new();
        let i = builder.push_vertex(Point3::new(0.0, 1.0, 2.0));
        let j = builder.push_vertex(Point3::new(-0.0, 1.0, 2.0));
        assert_eq!(i, j);
    }
}
