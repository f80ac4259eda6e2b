use mascot_geometry::*;

fn main() {
    let start = Point::new(-150.0, 600.0); // Staging area, off-screen to the left
    let end = Point::new(700.0, 250.0);
    let segments = 10;

    let arc = find_shortest_path(start, end);

    println!("Arc waypoints:");
    for (i, p) in arc.iter().enumerate() {
        println!("  {}: {}", i, p);
    }

    let samples = generate_smooth_path(&arc, segments);
    println!("\nSmoothed into {} frames:", samples.len());

    let mut travelled = 0.0;
    for (i, pair) in samples.windows(2).enumerate() {
        travelled += calculate_distance(pair[0], pair[1]);
        println!("Frame {:>2}: {} (travelled {:.1} px)", i + 1, pair[1], travelled);
    }

    println!(
        "\nStraight-line distance: {:.1} px",
        calculate_distance(start, end)
    );

    let card = ElementRect::new(760.0, 180.0, 320.0, 200.0);
    let hold = calculate_holding_position(&card, end);
    println!("Holding position beside card: {}", hold);
}
