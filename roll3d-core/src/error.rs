/// Error types shared by the core library
use thiserror::Error;

/// Invalid input to a transform builder
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    #[error("projection distance must be non-zero")]
    ZeroProjectionDistance,
}

/// Failure while mapping a transform over a vertex list
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameError {
    #[error("vertex {index} projects to w = 0")]
    DegenerateProjection { index: usize },
}

/// Invalid animation configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChoreographyError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("{field} must be non-zero")]
    ZeroPeriod { field: &'static str },
    #[error("phase {first} overlaps phase {second}")]
    OverlappingPhases {
        first: &'static str,
        second: &'static str,
    },
}

/// Wavefront OBJ loading failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: face index {index} out of range for {vertex_count} vertices")]
    FaceIndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
    #[error("file contains no faces")]
    Empty,
}

/// VRML IndexedFaceSet loading failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WrlError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: coordIndex {index} out of range for {vertex_count} points")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
    #[error("file contains no faces")]
    Empty,
}

/// Failure loading a mesh file of any supported format
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Obj(#[from] ObjError),
    #[error(transparent)]
    Wrl(#[from] WrlError),
}
