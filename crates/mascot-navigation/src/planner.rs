//! Stateless flight planner combining grid snapping, waypoint generation and smoothing.

use mascot_geometry::{DEFAULT_SEGMENTS_PER_SPAN, Point, find_shortest_path, smooth_path};
use rand::Rng;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::flow::{DEFAULT_RANDOM_POINT_COUNT, generate_flowing_path_with_rng};
use crate::grid::{DEFAULT_CELL_SIZE, Viewport, create_grid, find_closest_grid_point};

/// Shape of the waypoint list a flight is smoothed from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Randomised intermediate waypoints drifting towards the target.
    #[default]
    Flowing,
    /// Deterministic three-point arc bowing upwards.
    Arc,
}

/// Planner tuning.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Grid cell edge length (px).
    pub cell_size: f64,
    /// Intermediate waypoints for [`PathStyle::Flowing`].
    pub random_point_count: usize,
    /// Animation samples per waypoint span.
    pub segments_per_span: usize,
    /// Waypoint shape.
    pub style: PathStyle,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            random_point_count: DEFAULT_RANDOM_POINT_COUNT,
            segments_per_span: DEFAULT_SEGMENTS_PER_SPAN,
            style: PathStyle::default(),
        }
    }
}

/// Plans the dense, per-frame path of a flight between two screen positions.
///
/// The planner holds no state between calls; the grid is rebuilt from the
/// viewport given to each call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathPlanner {
    config: PlannerConfig,
}

impl PathPlanner {
    /// Creates a planner, rejecting a cell size that cannot form a grid.
    pub fn new(config: PlannerConfig) -> Result<Self, NavigationError> {
        if !(config.cell_size.is_finite() && config.cell_size > 0.0) {
            return Err(NavigationError::InvalidCellSize(
                "Cell size must be positive and finite",
            ));
        }
        Ok(Self { config })
    }

    /// Gets the planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a flight using the thread-local RNG.
    pub fn plan(
        &self,
        viewport: Viewport,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, NavigationError> {
        self.plan_with_rng(viewport, from, to, &mut rand::rng())
    }

    /// Plans a flight from `from` to `to`.
    ///
    /// Both endpoints are snapped (and clamped) to the grid built from
    /// `viewport`. The resulting waypoints are smoothed into
    /// `(waypoints - 1) * segments_per_span + 1` samples, the first being the
    /// snapped start and the last the snapped target.
    pub fn plan_with_rng<R: Rng + ?Sized>(
        &self,
        viewport: Viewport,
        from: Point,
        to: Point,
        rng: &mut R,
    ) -> Result<Vec<Point>, NavigationError> {
        let grid = create_grid(viewport, self.config.cell_size)?;
        let start = find_closest_grid_point(from.x, from.y, &grid);
        let end = find_closest_grid_point(to.x, to.y, &grid);

        let samples = match self.config.style {
            PathStyle::Flowing => {
                let waypoints = generate_flowing_path_with_rng(
                    start,
                    end,
                    &grid,
                    self.config.random_point_count,
                    rng,
                );
                smooth_path(&waypoints, self.config.segments_per_span)
            }
            PathStyle::Arc => {
                let waypoints = find_shortest_path(start.position(), end.position());
                smooth_path(&waypoints, self.config.segments_per_span)
            }
        };

        debug!(
            %grid,
            %start,
            %end,
            style = ?self.config.style,
            samples = samples.len(),
            "Planned flight path"
        );
        Ok(samples)
    }
}
