//! Uniform screen grid used to place flight waypoints.
//!
//! The viewport is partitioned into square cells of `cell_size` pixels. Every
//! waypoint the planner produces is the centre of one of these cells, which
//! keeps flights visually tidy regardless of where they start.

#![warn(missing_docs)]

use std::fmt;

use mascot_geometry::{ElementRect, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

/// Default edge length of a grid cell (px).
pub const DEFAULT_CELL_SIZE: f64 = 100.0;

/// Default offset from an element's centre when aiming next to it:
/// 150 px to the left, vertically centred.
pub const DEFAULT_ELEMENT_OFFSET: Point = Point::new(-150.0, 0.0);

/// Size of the visible drawing area in pixels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width (px).
    pub width: f64,
    /// Height (px).
    pub height: f64,
}

impl Viewport {
    /// Creates a new `Viewport`.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A cell centre on the grid.
///
/// Only a [`GridConfig`] can produce one, so `x`/`y` are always the exact
/// centre of cell `(row, col)` and the indices are always in range for the
/// grid that produced it.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    x: f64,
    y: f64,
    row: usize,
    col: usize,
}

impl GridPoint {
    /// Pixel x of the cell centre.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Pixel y of the cell centre.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Cell centre as a plain point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<GridPoint> for Point {
    fn from(p: GridPoint) -> Self {
        p.position()
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[r{} c{}] ({:.1}, {:.1})", self.row, self.col, self.x, self.y)
    }
}

/// Immutable partition of a viewport into square cells.
///
/// Built fresh for each flight from the current viewport. A grid built
/// before a resize keeps describing the old viewport.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    cell_size: f64,
    rows: usize,
    cols: usize,
}

impl GridConfig {
    /// Creates a grid with explicit dimensions.
    ///
    /// # Arguments
    /// * `cell_size` - Edge length of a cell in pixels
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    ///
    /// # Returns
    /// * `Result<Self, NavigationError>` - The grid or an error if parameters are invalid
    pub fn new(cell_size: f64, rows: usize, cols: usize) -> Result<Self, NavigationError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(NavigationError::InvalidCellSize(
                "Cell size must be positive and finite",
            ));
        }
        if rows == 0 || cols == 0 {
            return Err(NavigationError::InvalidDimensions(
                "Rows and columns must be non-zero",
            ));
        }
        // Snapping works in signed indices; the cell count must fit too.
        let max_index = i64::MAX as usize;
        if rows > max_index || cols > max_index || rows.checked_mul(cols).is_none() {
            return Err(NavigationError::InvalidDimensions("Grid has too many cells"));
        }

        Ok(Self {
            cell_size,
            rows,
            cols,
        })
    }

    /// Creates the grid covering `viewport`: `rows = ceil(height / cell_size)`,
    /// `cols = ceil(width / cell_size)`.
    pub fn from_viewport(viewport: Viewport, cell_size: f64) -> Result<Self, NavigationError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(NavigationError::InvalidCellSize(
                "Cell size must be positive and finite",
            ));
        }
        for extent in [viewport.width, viewport.height] {
            if !(extent.is_finite() && extent > 0.0) {
                return Err(NavigationError::InvalidViewport(
                    "Viewport dimensions must be positive and finite",
                ));
            }
        }

        let rows = (viewport.height / cell_size).ceil() as usize;
        let cols = (viewport.width / cell_size).ceil() as usize;
        Self::new(cell_size, rows, cols)
    }

    /// Gets the cell size in pixels.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Gets the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the total number of cells.
    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    fn center(&self, index: usize) -> f64 {
        index as f64 * self.cell_size + self.cell_size / 2.0
    }

    /// Returns the centre of cell `(row, col)`, or `None` if it lies outside the grid.
    pub fn point_at(&self, row: usize, col: usize) -> Option<GridPoint> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(GridPoint {
            x: self.center(col),
            y: self.center(row),
            row,
            col,
        })
    }

    /// Returns the centre of cell `(row, col)` after clamping both indices into the grid.
    pub fn clamped_point(&self, row: i64, col: i64) -> GridPoint {
        let row = row.clamp(0, self.rows as i64 - 1) as usize;
        let col = col.clamp(0, self.cols as i64 - 1) as usize;
        GridPoint {
            x: self.center(col),
            y: self.center(row),
            row,
            col,
        }
    }

    /// All cell centres in row-major order.
    pub fn points(&self) -> Vec<GridPoint> {
        let mut points = Vec::with_capacity(self.total_cells());
        for row in 0..self.rows {
            for col in 0..self.cols {
                points.push(GridPoint {
                    x: self.center(col),
                    y: self.center(row),
                    row,
                    col,
                });
            }
        }
        points
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridConfig ({}x{} cells, cell size: {:.1}px)",
            self.cols, self.rows, self.cell_size
        )
    }
}

/// Creates the grid for the current viewport.
///
/// Same as [`GridConfig::from_viewport`]; kept as the planner-facing entry point.
pub fn create_grid(viewport: Viewport, cell_size: f64) -> Result<GridConfig, NavigationError> {
    GridConfig::from_viewport(viewport, cell_size)
}

/// Snaps an arbitrary pixel position to the centre of its cell.
///
/// Positions outside the grid (off-screen staging areas, negative
/// coordinates) are pulled onto the nearest edge cell rather than rejected.
pub fn find_closest_grid_point(x: f64, y: f64, config: &GridConfig) -> GridPoint {
    let col = (x / config.cell_size).floor() as i64;
    let row = (y / config.cell_size).floor() as i64;
    config.clamped_point(row, col)
}

/// Snaps the point `offset` away from an element's centre.
pub fn get_grid_point_near_element(
    element: &ElementRect,
    config: &GridConfig,
    offset: Point,
) -> GridPoint {
    let target = element.center() + offset;
    find_closest_grid_point(target.x, target.y, config)
}
