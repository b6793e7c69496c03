//! Example: generate a floe field and drift it for a few ticks
//!
//! Demonstrates the generate -> advect -> retessellate loop a renderer
//! would drive once per frame.

use voronoi_floe::*;

fn main() {
    println!("Floe Field Drift Example");
    println!("========================\n");

    let config = FloeConfigBuilder::new()
        .seed(42)
        .density(FloeDensity::Custom {
            seed_count: 20,
            grid_resolution: 200, // coarse grid keeps the example fast
        })
        .relaxation_iterations(5)
        .unwrap()
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Density: {}", config.density.name());
    println!("  Floe Count: {}", config.seed_count());
    println!("  Grid Resolution: {}", config.grid_resolution());
    println!("  Domain Size: {}", config.domain_size);
    println!();

    let mut field = FloeField::generate(config).expect("failed to generate field");
    println!("Generated {} floes\n", field.floe_count());

    println!("Sample floes:");
    for floe in field.floes().iter().take(5) {
        println!(
            "  Floe {}: seed=({:.2}, {:.2}), {} points, area={:.3}, drift=({:.4}, {:.4})",
            floe.id,
            floe.seed.x,
            floe.seed.y,
            floe.point_count(),
            floe.approximate_area(),
            floe.decor.velocity.x,
            floe.decor.velocity.y,
        );
    }
    println!();

    // Drift for a second of simulated time at 60 fps
    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        field.advect(dt);
    }
    field.retessellate();

    let drifted = field
        .floes()
        .iter()
        .filter(|f| f.seed.length() > 0.01)
        .count();
    println!("After 1s of drift: {} floes moved, {} grid points partitioned",
        drifted,
        field.total_points()
    );
}
