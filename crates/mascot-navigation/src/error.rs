//! This module defines the error types used by the `mascot-navigation` crate.

#![warn(missing_docs)]

use thiserror::Error;

/// Error type for navigation operations.
///
/// Planning itself cannot fail once a grid exists; these variants cover the
/// inputs a grid is built from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    /// Error for an invalid cell size.
    /// This variant is returned when a cell size is not a positive, finite number.
    #[error("Invalid cell size: {0}")]
    InvalidCellSize(&'static str),
    /// Error for an invalid viewport.
    /// This variant is returned when the viewport width or height is not positive and finite.
    #[error("Invalid viewport: {0}")]
    InvalidViewport(&'static str),
    /// Error for invalid grid dimensions.
    /// This variant is returned when a grid is built with zero rows or columns.
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(&'static str),
}
