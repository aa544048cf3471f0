//! Mesh fixtures shared by the integration tests.

#![allow(dead_code)]

use std::f32::consts::PI;

use stlsweep_mesh::{Facet, Mesh, Point3};

/// Build a mesh from coordinate triples and index triples.
pub fn mesh(points: &[[f32; 3]], facets: &[[u32; 3]]) -> Mesh {
    let vertices = points.iter().map(|p| Point3::new(p[0], p[1], p[2])).collect();
    let facets = facets.iter().map(|f| Facet(*f)).collect();
    Mesh::new(vertices, facets).unwrap()
}

/// Latitude/longitude sphere centred on the origin.
///
/// Vertex 0 is the north pole, the last vertex the south pole, and each
/// band between two rings is a strip of quads split into two triangles.
pub fn uv_sphere(radius: f32, stacks: u32, sectors: u32) -> Mesh {
    let mut vertices = vec![Point3::new(0.0, 0.0, radius)];
    for i in 1..stacks {
        let phi = PI * i as f32 / stacks as f32;
        let (rho, z) = (radius * phi.sin(), radius * phi.cos());
        for j in 0..sectors {
            let theta = 2.0 * PI * j as f32 / sectors as f32;
            vertices.push(Point3::new(rho * theta.cos(), rho * theta.sin(), z));
        }
    }
    vertices.push(Point3::new(0.0, 0.0, -radius));

    let south = vertices.len() as u32 - 1;
    let ring = |i: u32, j: u32| 1 + (i - 1) * sectors + j % sectors;

    let mut facets = Vec::new();
    for j in 0..sectors {
        facets.push(Facet::new(0, ring(1, j), ring(1, j + 1)));
    }
    for i in 1..stacks - 1 {
        for j in 0..sectors {
            let (a, b) = (ring(i, j), ring(i, j + 1));
            let (c, d) = (ring(i + 1, j), ring(i + 1, j + 1));
            facets.push(Facet::new(a, c, d));
            facets.push(Facet::new(a, d, b));
        }
    }
    for j in 0..sectors {
        facets.push(Facet::new(south, ring(stacks - 1, j + 1), ring(stacks - 1, j)));
    }

    Mesh::new(vertices, facets).unwrap()
}

/// Lowest and highest vertex height of a facet.
pub fn facet_z_range(mesh: &Mesh, facet: &Facet) -> (f32, f32) {
    let zs = mesh.facet_vertices(facet).map(|v| v.z);
    (
        zs.iter().copied().fold(f32::INFINITY, f32::min),
        zs.iter().copied().fold(f32::NEG_INFINITY, f32::max),
    )
}
