//! Randomised "flowing" waypoint generation.
//!
//! A straight line between two cells looks mechanical on screen. Instead the
//! planner places a few intermediate waypoints evenly along the line and nudges
//! each one by up to [`MAX_WANDER`] cells in both directions. Output is not
//! reproducible unless a seeded RNG is passed to
//! [`generate_flowing_path_with_rng`].

use rand::Rng;

use crate::grid::{GridConfig, GridPoint};

/// Default number of intermediate waypoints.
pub const DEFAULT_RANDOM_POINT_COUNT: usize = 3;

/// Largest random offset (in cells) applied to an intermediate waypoint, per axis.
pub const MAX_WANDER: i64 = 2;

/// Generates a wandering waypoint list using the thread-local RNG.
///
/// See [`generate_flowing_path_with_rng`].
pub fn generate_flowing_path(
    start: GridPoint,
    end: GridPoint,
    config: &GridConfig,
    random_point_count: usize,
) -> Vec<GridPoint> {
    generate_flowing_path_with_rng(start, end, config, random_point_count, &mut rand::rng())
}

/// Generates a wandering waypoint list from `start` to `end`.
///
/// For `i` in `1..=random_point_count` the waypoint's base cell is the
/// start-to-end interpolation at `progress = i / (random_point_count + 1)`,
/// floored per axis. Row and column each receive an independent offset drawn
/// uniformly from `[-MAX_WANDER, MAX_WANDER]`, and the result is clamped into
/// the grid.
///
/// # Arguments
/// * `start` - First waypoint, returned as-is.
/// * `end` - Last waypoint, returned as-is.
/// * `config` - Grid the intermediate waypoints are placed on.
/// * `random_point_count` - Number of intermediate waypoints.
/// * `rng` - Source of the offsets.
///
/// # Returns
/// * `Vec<GridPoint>` - `random_point_count + 2` waypoints, `start` first and `end` last.
pub fn generate_flowing_path_with_rng<R: Rng + ?Sized>(
    start: GridPoint,
    end: GridPoint,
    config: &GridConfig,
    random_point_count: usize,
    rng: &mut R,
) -> Vec<GridPoint> {
    let mut path = Vec::with_capacity(random_point_count + 2);
    path.push(start);

    let delta_row = end.row() as f64 - start.row() as f64;
    let delta_col = end.col() as f64 - start.col() as f64;

    for i in 1..=random_point_count {
        let progress = i as f64 / (random_point_count + 1) as f64;

        let base_row = (start.row() as f64 + delta_row * progress).floor() as i64;
        let base_col = (start.col() as f64 + delta_col * progress).floor() as i64;

        let offset_row = rng.random_range(-MAX_WANDER..=MAX_WANDER);
        let offset_col = rng.random_range(-MAX_WANDER..=MAX_WANDER);

        path.push(config.clamped_point(base_row + offset_row, base_col + offset_col));
    }

    path.push(end);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DEFAULT_CELL_SIZE, Viewport, create_grid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_1000x800() -> GridConfig {
        create_grid(Viewport::new(1000.0, 800.0), DEFAULT_CELL_SIZE).unwrap()
    }

    fn in_bounds(p: &GridPoint, grid: &GridConfig) -> bool {
        p.row() < grid.rows() && p.col() < grid.cols()
    }

    #[test]
    fn test_flowing_path_shape() {
        let grid = grid_1000x800();
        let start = grid.point_at(0, 0).unwrap();
        let end = grid.point_at(7, 9).unwrap();

        let path = generate_flowing_path(start, end, &grid, DEFAULT_RANDOM_POINT_COUNT);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], start);
        assert_eq!(path[4], end);
        for p in &path[1..4] {
            assert!(p.row() <= 7 && p.col() <= 9);
        }
    }

    #[test]
    fn test_flowing_path_lengths_and_bounds() {
        let grid = create_grid(Viewport::new(640.0, 360.0), 64.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let start = grid.point_at(5, 9).unwrap();
        let end = grid.point_at(0, 0).unwrap();

        for n in 0..12 {
            let path = generate_flowing_path_with_rng(start, end, &grid, n, &mut rng);
            assert_eq!(path.len(), n + 2);
            assert_eq!(path[0], start);
            assert_eq!(*path.last().unwrap(), end);
            assert!(path.iter().all(|p| in_bounds(p, &grid)));
        }
    }

    #[test]
    fn test_flowing_path_zero_intermediates() {
        let grid = grid_1000x800();
        let start = grid.point_at(3, 3).unwrap();
        let end = grid.point_at(4, 8).unwrap();
        let path = generate_flowing_path(start, end, &grid, 0);
        assert_eq!(path, vec![start, end]);
    }

    #[test]
    fn test_flowing_path_reproducible_with_seed() {
        let grid = grid_1000x800();
        let start = grid.point_at(0, 0).unwrap();
        let end = grid.point_at(7, 9).unwrap();

        let a = generate_flowing_path_with_rng(start, end, &grid, 5, &mut StdRng::seed_from_u64(42));
        let b = generate_flowing_path_with_rng(start, end, &grid, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_offsets_stay_within_wander() {
        // A large grid keeps every base cell far from the edges, so no clamping happens.
        let grid = GridConfig::new(10.0, 100, 100).unwrap();
        let start = grid.point_at(20, 20).unwrap();
        let end = grid.point_at(80, 60).unwrap();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen_row = [false; 5];
        let mut seen_col = [false; 5];

        for _ in 0..500 {
            let path = generate_flowing_path_with_rng(start, end, &grid, 3, &mut rng);
            for (i, p) in path[1..4].iter().enumerate() {
                let progress = (i + 1) as f64 / 4.0;
                let base_row = (20.0 + 60.0 * progress).floor() as i64;
                let base_col = (20.0 + 40.0 * progress).floor() as i64;
                let dr = p.row() as i64 - base_row;
                let dc = p.col() as i64 - base_col;
                assert!(dr.abs() <= MAX_WANDER && dc.abs() <= MAX_WANDER);
                seen_row[(dr + MAX_WANDER) as usize] = true;
                seen_col[(dc + MAX_WANDER) as usize] = true;
            }
        }

        assert!(seen_row.iter().all(|&s| s), "every row offset should occur");
        assert!(seen_col.iter().all(|&s| s), "every column offset should occur");
    }

    #[test]
    fn test_flowing_path_clamps_at_edges() {
        // Start and end in the same corner: bases are all (0, 0), offsets can go negative.
        let grid = grid_1000x800();
        let corner = grid.point_at(0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let path = generate_flowing_path_with_rng(corner, corner, &grid, 4, &mut rng);
            for p in &path {
                assert!(p.row() <= 2 && p.col() <= 2);
            }
        }
    }

    #[test]
    fn test_flowing_path_reverse_direction() {
        let grid = GridConfig::new(10.0, 50, 50).unwrap();
        let start = grid.point_at(40, 40).unwrap();
        let end = grid.point_at(0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let path = generate_flowing_path_with_rng(start, end, &grid, 1, &mut rng);
        // progress 0.5 -> base (20, 20)
        let mid = path[1];
        assert!((mid.row() as i64 - 20).abs() <= MAX_WANDER);
        assert!((mid.col() as i64 - 20).abs() <= MAX_WANDER);
    }
}
