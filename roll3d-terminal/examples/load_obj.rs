/// Example: print where every entity lands on screen for a few frames
///
/// Usage: cargo run --example load_obj -- [path/to/ball.obj]

use std::env;
use std::fs;
use std::io;
use roll3d_core::{obj, Mesh, Scene, Timeline};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let ball = match args.get(1) {
        Some(path) => {
            println!("Loading OBJ file: {}", path);
            let text = fs::read_to_string(path).map_err(|e| {
                io::Error::new(io::ErrorKind::NotFound, format!("Failed to read OBJ file: {}", e))
            })?;
            obj::parse_obj(&text).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse OBJ: {}", e))
            })?
        }
        None => {
            eprintln!("No OBJ file provided, using the built-in ball...");
            Mesh::ball()
        }
    };

    println!("Loaded {} faces, {} vertices", ball.polylines.len(), ball.vertex_count());

    let scene = Scene::standard(&Mesh::house(), &ball, 3.0, 2.0);
    let timeline = Timeline::default();

    for frame in (0..150).step_by(15) {
        let output = scene.frame(&timeline, frame);
        for (role, phase, projected) in &output.actors {
            let first = projected.polylines.iter().flatten().next();
            let position = match first {
                Some(p) => format!("({:7.2}, {:7.2})", p.x, p.y),
                None => "nothing".to_string(),
            };
            println!("frame {:3} {:?} [{}] first vertex at {}", frame, role, phase, position);
        }
    }

    Ok(())
}
