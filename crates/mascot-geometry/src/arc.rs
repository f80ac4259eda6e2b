//! Fixed-shape paths: the biased arc and the card holding position.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ElementRect, Point};

/// Upward shift (px) applied to the midpoint of an arc path.
pub const ARC_BIAS: f64 = 100.0;

/// Horizontal gap (px) between a held card's left edge and the mascot.
pub const HOLD_OFFSET_X: f64 = 100.0;

/// Vertical lift (px) of the mascot above a held card's centre line.
pub const HOLD_OFFSET_Y: f64 = 50.0;

/// Tilt (degrees) of the mascot while it holds a card.
pub const HOLD_ROTATION_DEG: f64 = 5.0;

/// Three-point arc from `start` to `end`.
///
/// The middle point sits halfway between the endpoints, lifted by
/// [`ARC_BIAS`] so the flight curves upward. No search is performed; the
/// result depends on the endpoints only.
///
/// # Returns
///
/// `[start, mid, end]` with `mid = ((start + end) / 2) - (0, ARC_BIAS)`.
pub fn find_shortest_path(start: Point, end: Point) -> [Point; 3] {
    let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0 - ARC_BIAS);
    [start, mid, end]
}

/// Where the mascot rests while holding a card, and how it is tilted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoldingPosition {
    /// Resting position (px).
    pub position: Point,
    /// Tilt towards the card (degrees, clockwise).
    pub rotation: f64,
}

impl fmt::Display for HoldingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.1}°", self.position, self.rotation)
    }
}

/// Computes the holding position beside a card.
///
/// The mascot always holds from the left: [`HOLD_OFFSET_X`] left of the card's
/// left edge and [`HOLD_OFFSET_Y`] above its vertical centre, tilted by
/// [`HOLD_ROTATION_DEG`].
///
/// # Arguments
///
/// * `card`: Bounding box of the card being held.
/// * `_robot_start`: Where the mascot currently is. The holding side does not
///   depend on it.
pub fn calculate_holding_position(card: &ElementRect, _robot_start: Point) -> HoldingPosition {
    HoldingPosition {
        position: Point::new(
            card.left - HOLD_OFFSET_X,
            card.top + card.height / 2.0 - HOLD_OFFSET_Y,
        ),
        rotation: HOLD_ROTATION_DEG,
    }
}
