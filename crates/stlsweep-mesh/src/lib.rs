#![warn(missing_docs)]

//! Indexed triangle mesh for stlsweep.
//!
//! Holds a deduplicated vertex table and a facet table of vertex-index
//! triples, plus a reader for ASCII STL files.
//!
//! # Example
//!
//! ```no_run
//! use stlsweep_mesh::read_stl;
//!
//! let mesh = read_stl("part.stl")?;
//! println!("{} vertices, {} facets", mesh.num_vertices(), mesh.num_facets());
//! # Ok::<(), stlsweep_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod stl;

pub use error::{MeshError, Result};
pub use mesh::{Facet, Mesh, MeshBuilder};
pub use stl::{read_stl, read_stl_from_str};

/// A vertex position. The z axis is the sweep axis.
pub type Point3 = nalgebra::Point3<f32>;

/// A point in a slicing plane.
pub type Point2 = nalgebra::Point2<f32>;
