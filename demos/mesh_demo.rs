//! Example: build renderable mesh data from a floe field

use voronoi_floe::*;

fn main() {
    let config = FloeConfigBuilder::new()
        .seed(7)
        .density(FloeDensity::Custom {
            seed_count: 15,
            grid_resolution: 150,
        })
        .build()
        .unwrap();

    let field = FloeField::generate(config).expect("failed to generate field");
    let mesh = generate_mesh(&field, &DriftColorMapper);

    println!("Mesh from {} floes:", field.floe_count());
    println!("  {} vertices", mesh.vertex_count());
    println!("  {} triangles", mesh.triangle_count());

    // First few vertices with their colors
    for (pos, color) in mesh.positions.iter().zip(mesh.colors.iter()).take(5) {
        println!(
            "  vertex ({:.3}, {:.3}) rgba({:.2}, {:.2}, {:.2}, {:.2})",
            pos[0], pos[1], color[0], color[1], color[2], color[3]
        );
    }
}
