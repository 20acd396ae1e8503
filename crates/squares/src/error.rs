use crate::Cell;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    Empty { width: usize, height: usize },
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// The contour tracer found the registry or the connection table in a state
/// that well-formed tables never produce.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraceError {
    #[error("no outgoing direction at start cell {cell:?} (configuration {configuration})")]
    NoOutgoingDirection { cell: Cell, configuration: u8 },
    #[error("configuration {configuration} at {cell:?} has no connection for an incoming crossing")]
    MissingConnection { cell: Cell, configuration: u8 },
    #[error("walk reached {cell:?}, which has no crossings left")]
    Unregistered { cell: Cell },
    #[error("crossing between {cell:?} and its neighbor was walked twice")]
    CrossingRevisited { cell: Cell },
}
