/// roll3d - the rolling ball animation in a terminal
///
/// A ball rolls towards the viewer, then sideways, then the camera circles
/// the scene once. Press Q/ESC to quit.

use clap::Parser;
use log::info;
use roll3d_core::{Choreography, Mesh, MeshFormat, Scene, Timeline};
use roll3d_terminal::AnimationApp;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "roll3d")]
#[command(about = "Scripted wireframe animation of a ball and a house")]
struct Args {
    /// OBJ or VRML (.wrl) file for the house (built-in wireframe if omitted)
    #[arg(long)]
    house: Option<PathBuf>,

    /// OBJ or VRML (.wrl) file for the ball (built-in icosahedron if omitted)
    #[arg(long)]
    ball: Option<PathBuf>,

    /// Target frames per second
    #[arg(long, default_value_t = 25)]
    fps: u32,

    /// Distance from the viewpoint to the viewing plane
    #[arg(short, long, default_value_t = 100.0)]
    distance: f64,

    #[arg(long, default_value_t = 3.0)]
    house_scale: f64,

    #[arg(long, default_value_t = 2.0)]
    ball_scale: f64,

    /// Number of frames to play
    #[arg(short, long, default_value_t = 150)]
    frames: u32,
}

fn load_mesh(path: Option<&Path>, fallback: fn() -> Mesh) -> io::Result<Mesh> {
    let Some(path) = path else {
        return Ok(fallback());
    };
    info!("loading {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read {}: {}", path.display(), e),
        )
    })?;
    MeshFormat::from_path(path).parse(&text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse {}: {}", path.display(), e),
        )
    })
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let house = load_mesh(args.house.as_deref(), Mesh::house)?;
    let ball = load_mesh(args.ball.as_deref(), Mesh::ball)?;
    let scene = Scene::standard(&house, &ball, args.house_scale, args.ball_scale);

    let config = Choreography {
        projection_distance: args.distance,
        frame_count: args.frames,
        ..Choreography::default()
    };
    let timeline = Timeline::new(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let mut app = AnimationApp::new(scene, timeline, args.fps)?;
    app.run()?;

    Ok(())
}
