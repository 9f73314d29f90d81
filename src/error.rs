use thiserror::Error;

/// Top-level error type for wall mesh generation.
#[derive(Debug, Error)]
pub enum WallmeshError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

/// Errors raised while building or editing an occupancy grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("column {column} has {found} cells, expected {expected}")]
    RaggedColumns {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({x}, {y}) has value {value}, expected 0 or 1")]
    InvalidCellValue { x: usize, y: usize, value: i32 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors related to generation parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f64),

    #[error("wall height must be finite and non-negative, got {0}")]
    InvalidWallHeight(f64),
}

/// Broken internal invariants.
///
/// These never come from bad input data; they indicate a bug in lattice
/// construction or triangulation and must be reported, not recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("lattice point not found in arena")]
    UnknownPoint,

    #[error("cell configuration {0} is outside 0..=15")]
    InvalidConfiguration(u8),

    #[error("vertex {0} has no adjacency entry")]
    UnregisteredVertex(u32),

    #[error("vertex count {0} does not fit in a u32 index")]
    VertexOverflow(usize),

    #[error("outline references vertex {index} but only {vertex_count} vertices exist")]
    OutlineIndexOutOfRange { index: u32, vertex_count: usize },
}

/// Convenience type alias for results using [`WallmeshError`].
pub type Result<T> = std::result::Result<T, WallmeshError>;
