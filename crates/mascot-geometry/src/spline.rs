//! Catmull-Rom smoothing of coarse waypoint lists.
//!
//! A flight is planned as a handful of waypoints and then densified into one
//! sample per animation frame. The curve passes through every waypoint; between
//! waypoints it is the uniform Catmull-Rom cubic, which may overshoot the
//! control polygon.

use alloc::vec::Vec;

use crate::Point;

/// Samples generated per span between two consecutive waypoints.
pub const DEFAULT_SEGMENTS_PER_SPAN: usize = 20;

/// Evaluates the uniform Catmull-Rom segment running from `p1` to `p2`.
///
/// `P(u) = 0.5 * [2p1 + (-p0 + p2)u + (2p0 - 5p1 + 4p2 - p3)u² + (-p0 + 3p1 - 3p2 + p3)u³]`
///
/// # Arguments
///
/// * `p0`, `p3`: Neighbours shaping the tangents at `p1` and `p2`.
/// * `p1`, `p2`: Span endpoints; `u = 0` yields `p1`, `u = 1` yields `p2`.
/// * `u`: Curve parameter, normally in `[0, 1]`.
pub fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, u: f64) -> Point {
    let u2 = u * u;
    let u3 = u2 * u;

    0.5 * (2.0 * p1
        + (p2 - p0) * u
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3)
}

/// Densifies a waypoint list into a smooth polyline.
///
/// Each span `points[i] -> points[i + 1]` contributes `segments_per_span`
/// samples at `u = t / segments_per_span` for `t in 0..segments_per_span`,
/// i.e. the span's own end is left to the next span. Neighbours are taken with
/// clamped indexing so the boundary waypoints are repeated rather than
/// extrapolated. The last waypoint is appended once at the end.
///
/// # Arguments
///
/// * `points`: Waypoints in traversal order. Anything convertible to [`Point`].
/// * `segments_per_span`: Samples per span.
///
/// # Returns
///
/// `(points.len() - 1) * segments_per_span + 1` samples, with sample
/// `i * segments_per_span` equal to waypoint `i`. Inputs with fewer than two
/// waypoints are returned unchanged.
pub fn smooth_path<P>(points: &[P], segments_per_span: usize) -> Vec<Point>
where
    P: Copy + Into<Point>,
{
    let waypoints: Vec<Point> = points.iter().map(|&p| p.into()).collect();
    if waypoints.len() < 2 {
        return waypoints;
    }

    let last = waypoints.len() - 1;
    let mut samples = Vec::with_capacity(last * segments_per_span + 1);

    for i in 0..last {
        let p0 = waypoints[i.saturating_sub(1)];
        let p1 = waypoints[i];
        let p2 = waypoints[i + 1];
        let p3 = waypoints[(i + 2).min(last)];

        for t in 0..segments_per_span {
            let u = t as f64 / segments_per_span as f64;
            samples.push(catmull_rom(p0, p1, p2, p3, u));
        }
    }

    samples.push(waypoints[last]);
    samples
}

/// Smooths a raw point path, leaving trivial paths alone.
///
/// Same curve as [`smooth_path`], except that a path of one or two points is
/// returned as-is: two points already describe a straight flight.
pub fn generate_smooth_path(points: &[Point], segments: usize) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    smooth_path(points, segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const EPSILON: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_catmull_rom_endpoints() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(100.0, 50.0);
        let p2 = Point::new(200.0, 300.0);
        let p3 = Point::new(400.0, 0.0);
        assert!(close(catmull_rom(p0, p1, p2, p3, 0.0), p1));
        assert!(close(catmull_rom(p0, p1, p2, p3, 1.0), p2));
    }

    #[test]
    fn test_catmull_rom_midpoint_formula() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(100.0, 0.0);
        let p2 = Point::new(200.0, 100.0);
        let p3 = Point::new(300.0, 100.0);
        // u = 0.5: 0.5 * (2p1 + 0.5(p2-p0) + 0.25(2p0-5p1+4p2-p3) + 0.125(-p0+3p1-3p2+p3))
        // x: 0.5 * (200 + 100 + 0.25*(0-500+800-300) + 0.125*(0+300-600+300)) = 150
        // y: 0.5 * (0 + 50 + 0.25*(0-0+400-100) + 0.125*(0+0-300+100)) = 50
        let mid = catmull_rom(p0, p1, p2, p3, 0.5);
        assert!(close(mid, Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_collinear_evenly_spaced_is_linear() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
        ];
        let mid = catmull_rom(points[0], points[1], points[2], points[3], 0.25);
        assert!(close(mid, Point::new(12.5, 0.0)));
    }

    #[test]
    fn test_smooth_path_length() {
        let points = [
            Point::new(50.0, 50.0),
            Point::new(250.0, 150.0),
            Point::new(450.0, 350.0),
            Point::new(650.0, 150.0),
            Point::new(950.0, 750.0),
        ];
        for segments in [1, 5, 20] {
            let smooth = smooth_path(&points, segments);
            assert_eq!(smooth.len(), (points.len() - 1) * segments + 1);
        }
    }

    #[test]
    fn test_smooth_path_passes_through_waypoints() {
        let points = [
            Point::new(50.0, 50.0),
            Point::new(350.0, 250.0),
            Point::new(150.0, 650.0),
            Point::new(950.0, 750.0),
        ];
        let segments = DEFAULT_SEGMENTS_PER_SPAN;
        let smooth = smooth_path(&points, segments);
        for (i, waypoint) in points.iter().enumerate() {
            assert!(close(smooth[i * segments], *waypoint), "waypoint {} missed", i);
        }
        assert_eq!(*smooth.last().unwrap(), points[points.len() - 1]);
    }

    #[test]
    fn test_smooth_path_degenerate_input_unchanged() {
        let empty: [Point; 0] = [];
        assert!(smooth_path(&empty, 20).is_empty());

        let single = [Point::new(3.0, 4.0)];
        assert_eq!(smooth_path(&single, 20), vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_smooth_path_two_points_is_straight() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 200.0)];
        let smooth = smooth_path(&points, 4);
        assert_eq!(smooth.len(), 5);
        // Clamped neighbours make the single span a straight line.
        for (i, p) in smooth.iter().enumerate() {
            let u = i as f64 / 4.0;
            let expected_x = 50.0 * u + 150.0 * u * u - 100.0 * u * u * u;
            assert!((p.x - expected_x).abs() < EPSILON);
            assert!((p.y - 2.0 * p.x).abs() < EPSILON);
        }
    }

    #[test]
    fn test_smooth_path_zero_segments() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        assert_eq!(smooth_path(&points, 0), vec![Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_generate_smooth_path_keeps_short_paths() {
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        assert_eq!(generate_smooth_path(&two, 20), two.to_vec());

        let three = [
            Point::new(0.0, 0.0),
            Point::new(50.0, -100.0),
            Point::new(100.0, 0.0),
        ];
        assert_eq!(generate_smooth_path(&three, 20).len(), 41);
    }
}
