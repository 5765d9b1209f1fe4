//! tilehop demo entry point.
//!
//! A 2D platformer demo written in Rust using:
//! - **raylib** for windowing, graphics, image loading and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), open the window
//! 2. Load textures, insert resources, spawn the player and a critter
//! 3. Every frame: update time, then run the frame schedule
//!    (input, movement, collision, animation, camera, render)
//! 4. Release textures and close the window on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! RUST_LOG=debug cargo run -- --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use tilehop::error::EngineError;
use tilehop::game;
use tilehop::resources::debugmode::DebugMode;
use tilehop::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use tilehop::resources::renderwindow::RenderWindow;
use tilehop::resources::texturestore::TextureStore;
use tilehop::systems::time::update_world_time;

/// tilehop 2D platformer demo
#[derive(Parser)]
#[command(version, about = "Camera + animation platformer demo on raylib.")]
struct Cli {
    /// INI file with window, world and player settings.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start with the debug overlay enabled (F11 toggles it).
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    info!("Hello, world! This is tilehop!");

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // --------------- Window & assets ---------------
    let mut window = RenderWindow::create(&config)?;
    let textures = game::load_textures(&mut window, &config)?;
    let tile = textures
        .get(game::GRASS)
        .map(|grass| grass.draw_size())
        .ok_or_else(|| EngineError::Config(format!("texture '{}' missing", game::GRASS)))?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::setup_world(&mut world, &config, tile);
    if cli.debug {
        world.insert_resource(DebugMode);
    }
    world.insert_resource(textures);
    world.insert_resource(config);
    world.insert_non_send_resource(window);

    let mut update = game::build_frame_schedule();

    // --------------- Main loop ---------------
    while !world.non_send_resource::<RenderWindow>().should_close() {
        let dt = world.non_send_resource::<RenderWindow>().frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }

    // Textures must go before the window that owns the GL context.
    if let Some(mut textures) = world.remove_resource::<TextureStore>() {
        textures.destroy_all();
    }
    if let Some(window) = world.remove_non_send_resource::<RenderWindow>() {
        window.destroy();
    }

    info!("Bye!");
    Ok(())
}
