//! Standalone demo binary: opens a window with a small orbit-navigable
//! scene. Pass a TOML options file path as the first argument to override
//! the defaults.

use glam::Vec3;
use glint::mesh::MeshKind;
use glint::options::Options;
use glint::scene::{DrawCommandBuilder, Scene};
use glint::Viewer;

/// Demo scene: a white sphere at the origin with small axis-marker cubes
/// at +4 on each axis (red = X, green = Y, blue = Z).
fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene.push(
        DrawCommandBuilder::new(MeshKind::Sphere)
            .with_scale(0.5)
            .with_color_u8(255, 255, 255, 255)
            .build(),
    );
    scene.push(
        DrawCommandBuilder::new(MeshKind::Cube)
            .with_position(Vec3::new(4.0, 0.0, 0.0))
            .with_scale(0.1)
            .with_color_u8(255, 0, 0, 255)
            .build(),
    );
    scene.push(
        DrawCommandBuilder::new(MeshKind::Cube)
            .with_position(Vec3::new(0.0, 4.0, 0.0))
            .with_scale(0.1)
            .with_color_u8(0, 255, 0, 255)
            .build(),
    );
    scene.push(
        DrawCommandBuilder::new(MeshKind::Cube)
            .with_position(Vec3::new(0.0, 0.0, 4.0))
            .with_scale(0.1)
            .with_color_u8(0, 0, 255, 255)
            .build(),
    );
    scene
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder()
        .with_title("Glint")
        .with_options(options)
        .with_scene(demo_scene())
        .build();

    if let Err(e) = viewer.run() {
        log::error!("viewer error: {e}");
        std::process::exit(1);
    }
}
