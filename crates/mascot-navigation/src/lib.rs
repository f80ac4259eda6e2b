//! Grid-based flight planning for the on-screen mascot.
//!
//! The viewport is split into a uniform [`grid`], a few waypoints are placed on
//! it ([`flow`]), and the waypoints are smoothed into one sample per animation
//! frame by the [`planner`]. The [`flight`] state machine consumes those
//! samples and decides when the mascot is idle, flying or holding a card.

pub mod error;
pub mod flight;
pub mod flow;
pub mod grid;
pub mod planner;

pub use error::NavigationError;
pub use flight::{Arrival, FlightCommand, Frame, Mascot, MascotState, StateKind, run_flight_task};
pub use flow::{
    DEFAULT_RANDOM_POINT_COUNT, MAX_WANDER, generate_flowing_path, generate_flowing_path_with_rng,
};
pub use grid::{
    DEFAULT_CELL_SIZE, DEFAULT_ELEMENT_OFFSET, GridConfig, GridPoint, Viewport, create_grid,
    find_closest_grid_point, get_grid_point_near_element,
};
pub use planner::{PathPlanner, PathStyle, PlannerConfig};
