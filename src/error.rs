//! Error types for grid generation and run configuration.
//!
//! Search outcomes such as "no path" or "stuck" are not errors, see
//! [Outcome](crate::solver::Outcome).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Endpoint selection needs two distinct free cells.
    #[error("the grid has {free} free cell(s), at least 2 are needed to place a start and a goal")]
    InsufficientFreeCells { free: usize },

    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("invalid obstacle density: {0}")]
    InvalidDensity(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
