use mascot_geometry::Point;
use mascot_navigation::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    // 1000x800 viewport with 100px cells -> 10 columns, 8 rows
    let viewport = Viewport::new(1000.0, 800.0);
    let grid = create_grid(viewport, DEFAULT_CELL_SIZE)?;
    println!("{}", grid);

    // The mascot rests off-screen; snapping pulls it onto the edge cell.
    let start = find_closest_grid_point(-150.0, 20.0, &grid);
    let end = find_closest_grid_point(950.0, 770.0, &grid);
    println!("Start: {}\nEnd:   {}", start, end);

    let waypoints = generate_flowing_path(start, end, &grid, DEFAULT_RANDOM_POINT_COUNT);
    println!("\nWaypoints (random on every run):");
    for (i, p) in waypoints.iter().enumerate() {
        println!("  {}: {}", i, p);
    }

    print_grid(&grid, &waypoints);

    let planner = PathPlanner::new(PlannerConfig::default())?;
    let samples = planner.plan(viewport, Point::new(-150.0, 20.0), Point::new(950.0, 770.0))?;
    println!("\nPlanned {} animation frames", samples.len());
    for p in samples.iter().step_by(10) {
        println!("  {}", p);
    }

    Ok(())
}

fn print_grid(grid: &GridConfig, waypoints: &[GridPoint]) {
    println!();
    for row in 0..grid.rows() {
        print!("{:2} ", row);
        for col in 0..grid.cols() {
            let index = waypoints
                .iter()
                .position(|p| p.row() == row && p.col() == col);
            match index {
                Some(0) => print!("S "),
                Some(i) if i == waypoints.len() - 1 => print!("E "),
                Some(i) => print!("{} ", i),
                None => print!(". "),
            }
        }
        println!();
    }

    print!("   ");
    for col in 0..grid.cols() {
        print!("{} ", col % 10);
    }
    println!();
}
