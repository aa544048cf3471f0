//! Error types for mesh construction and STL reading.

use thiserror::Error;

/// Errors that can occur while building or reading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first line is not an ASCII STL `solid` header.
    #[error("header malformed or file not in ASCII STL format")]
    InvalidHeader,

    /// Unexpected line or malformed value in the STL body.
    #[error("malformed ASCII STL at line {line}: {message}")]
    Parse {
        /// Line number (1-indexed).
        line: usize,
        /// Error message.
        message: String,
    },

    /// A facet names a vertex that does not exist.
    #[error("facet {facet} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Facet position in the facet table.
        facet: usize,
        /// Offending vertex index.
        index: u32,
        /// Size of the vertex table.
        vertex_count: usize,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
}

impl MeshError {
    /// Create a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
