#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for the pixel-space geometry behind the mascot's flight."]
#![doc = ""]
#![doc = "This crate provides screen points, Catmull-Rom path smoothing, the biased"]
#![doc = "arc path and the position the mascot takes when holding a card."]

extern crate alloc;

use core::fmt;
use core::ops::{Add, Mul, Sub};
use libm::sqrt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod arc;
pub mod spline;

pub use arc::{
    ARC_BIAS, HOLD_OFFSET_X, HOLD_OFFSET_Y, HOLD_ROTATION_DEG, HoldingPosition,
    calculate_holding_position, find_shortest_path,
};
pub use spline::{DEFAULT_SEGMENTS_PER_SPAN, catmull_rom, generate_smooth_path, smooth_path};

/// A pixel coordinate in screen space (x to the right, y downwards).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position (px).
    pub x: f64,
    /// Vertical position (px).
    pub y: f64,
}

impl Point {
    /// Construct a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

/// Bounding box of a rendered UI element, in pixels.
///
/// This is the layout system's view of an element (its `left`/`top`
/// corner and its size); the planner only ever needs its centre.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    /// Left edge (px).
    pub left: f64,
    /// Top edge (px).
    pub top: f64,
    /// Width (px).
    pub width: f64,
    /// Height (px).
    pub height: f64,
}

impl ElementRect {
    /// Construct a new bounding box.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        ElementRect {
            left,
            top,
            width,
            height,
        }
    }

    /// Centre of the box.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether `p` lies inside the box (edges included).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// Euclidean distance between two points.
///
/// # Arguments
///
/// * `a`: First point.
/// * `b`: Second point.
///
/// # Returns
///
/// `sqrt((b.x - a.x)^2 + (b.y - a.y)^2)`, which is `0.0` for coincident points.
pub fn calculate_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    sqrt(dx * dx + dy * dy)
}
