//! ASCII STL reader.
//!
//! Reads the textual STL format line by line:
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex x y z
//!       vertex x y z
//!       vertex x y z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! Facet normals are ignored. Vertices are deduplicated as they are read.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, MeshBuilder};
use crate::Point3;

/// Read an ASCII STL file from a path.
pub fn read_stl(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    info!("Loading mesh from {:?}", path);
    let text = std::fs::read_to_string(path)?;
    read_stl_from_str(&text)
}

/// Read ASCII STL data from a string.
pub fn read_stl_from_str(text: &str) -> Result<Mesh> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    match lines.next() {
        Some((_, header)) if header.starts_with("solid") => {}
        _ => return Err(MeshError::InvalidHeader),
    }

    let mut reader = FacetReader::new();
    let mut last_line = 1;
    for (line, text) in lines {
        last_line = line;
        if text.is_empty() {
            continue;
        }
        if text.starts_with("endsolid") {
            return reader.finish(line);
        }
        reader.feed(line, text)?;
    }

    Err(MeshError::parse(last_line, "unexpected end of input, expected `endsolid`"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingFacet,
    SeekingLoop,
    SeekingVertex,
    SeekingEndFacet,
}

struct FacetReader {
    state: State,
    corners: Vec<Point3>,
    builder: MeshBuilder,
}

impl FacetReader {
    fn new() -> Self {
        Self {
            state: State::SeekingFacet,
            corners: Vec::with_capacity(3),
            builder: MeshBuilder::new(),
        }
    }

    fn feed(&mut self, line: usize, text: &str) -> Result<()> {
        self.state = match self.state {
            State::SeekingFacet if text.starts_with("facet") => State::SeekingLoop,
            State::SeekingLoop if text.starts_with("outer loop") => {
                self.corners.clear();
                State::SeekingVertex
            }
            State::SeekingVertex if text.starts_with("vertex") => {
                if self.corners.len() == 3 {
                    return Err(MeshError::parse(line, "facet has more than three vertices"));
                }
                self.corners.push(parse_vertex(line, text)?);
                State::SeekingVertex
            }
            State::SeekingVertex if text.starts_with("endloop") => {
                let [a, b, c] = self.corners[..] else {
                    return Err(MeshError::parse(
                        line,
                        format!("facet has {} vertices, expected 3", self.corners.len()),
                    ));
                };
                self.builder.push_triangle(a, b, c);
                State::SeekingEndFacet
            }
            State::SeekingEndFacet if text.starts_with("endfacet") => State::SeekingFacet,
            state => {
                return Err(MeshError::parse(
                    line,
                    format!("unexpected `{}` while {}", text, state.describe()),
                ))
            }
        };
        Ok(())
    }

    fn finish(self, line: usize) -> Result<Mesh> {
        if self.state != State::SeekingFacet {
            return Err(MeshError::parse(line, "`endsolid` inside an unterminated facet"));
        }
        let references = self.builder.vertex_references();
        let mesh = self.builder.build()?;
        debug!(
            "Deduplicated {} vertex references into {} vertices",
            references,
            mesh.num_vertices()
        );
        info!(
            "Loaded STL: {} vertices, {} facets",
            mesh.num_vertices(),
            mesh.num_facets()
        );
        Ok(mesh)
    }
}

impl State {
    fn describe(self) -> &'static str {
        match self {
            State::SeekingFacet => "expecting `facet`",
            State::SeekingLoop => "expecting `outer loop`",
            State::SeekingVertex => "expecting `vertex` or `endloop`",
            State::SeekingEndFacet => "expecting `endfacet`",
        }
    }
}

fn parse_vertex(line: usize, text: &str) -> Result<Point3> {
    let mut fields = text.split_whitespace().skip(1);
    let mut coord = |axis: &str| -> Result<f32> {
        let field = fields
            .next()
            .ok_or_else(|| MeshError::parse(line, format!("vertex is missing its {} coordinate", axis)))?;
        let value: f32 = field
            .parse()
            .map_err(|_| MeshError::parse(line, format!("invalid {} coordinate `{}`", axis, field)))?;
        if !value.is_finite() {
            return Err(MeshError::parse(line, format!("non-finite {} coordinate", axis)));
        }
        Ok(value)
    };
    let x = coord("x")?;
    let y = coord("y")?;
    let z = coord("z")?;
    Ok(Point3::new(x, y, z))
}
