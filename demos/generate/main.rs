//! Generates ground and wall meshes from an ASCII map and prints a summary.
//!
//! Usage:
//! ```text
//! cargo run --example generate                     # built-in cave
//! cargo run --example generate -- map.txt          # `#` filled, `.` empty
//! cargo run --example generate -- map.txt --border --flip
//! ```

use std::error::Error;

use wallmesh::{GenerateMap, GenerationParams, Grid};

const CAVE: &str = "
    ############
    #....##....#
    #.##....##.#
    #.#..##..#.#
    #...####...#
    #.#..##..#.#
    #.##....##.#
    #....##....#
    ############
";

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, DEBUG for wallmesh.
    // Override with RUST_LOG (e.g. RUST_LOG=wallmesh=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wallmesh=debug".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut params = GenerationParams::default();
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--border" => params.use_border = true,
            "--flip" => params.flip = true,
            _ => path = Some(arg),
        }
    }

    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => CAVE.to_string(),
    };
    let grid = Grid::from_ascii(&text);
    let map = GenerateMap::new(params).execute(&grid)?;

    println!(
        "grid {}x{} ({} filled)",
        grid.width(),
        grid.height(),
        grid.filled_count()
    );
    println!(
        "ground: {} vertices, {} triangles",
        map.ground.vertices.len(),
        map.ground.triangle_count()
    );
    println!(
        "walls:  {} vertices, {} triangles",
        map.walls.vertices.len(),
        map.walls.triangle_count()
    );
    for (i, outline) in map.outlines.iter().enumerate() {
        println!("outline {i}: {} segments", outline.segment_count());
    }

    Ok(())
}
