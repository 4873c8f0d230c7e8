//! sheetsprite demo entry point.
//!
//! Opens a raylib window and plays the sprites described in a JSON
//! definitions file (see [`sheetsprite::resources::spritedefs`]).
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the sprite definitions
//! 2. Load one texture per distinct image id into an `ImageStore`
//! 3. Spawn one entity per definition
//! 4. Each frame: update `WorldTime`, advance sprites, draw them in z order
//! 5. One-shot sprites are despawned by an observer when they finish
//! 6. Sprites whose image cannot be resolved are reported once and despawned
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --sprites assets/sprites.json
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

use sheetsprite::events::animation::despawn_finished_observer;
use sheetsprite::resources::appconfig::AppConfig;
use sheetsprite::resources::spritedefs::SpriteDefs;
use sheetsprite::resources::worldtime::WorldTime;
use sheetsprite::surface::raylib::{RaylibSurface, load_textures};
use sheetsprite::systems::animatedsprite::{
    advance_animated_sprites, despawn_unrenderable, render_animated_sprites,
};
use sheetsprite::systems::time::update_world_time;

/// Sprite sheet player
#[derive(Parser)]
#[command(version, about = "Plays sprite sheet animations described in a JSON file.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Sprite definitions JSON. Overrides `[assets] sprites` from the config.
    #[arg(long, value_name = "PATH")]
    sprites: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.sprites {
        config.sprites_path = path;
    }

    let defs = match SpriteDefs::load_from_file(&config.sprites_path) {
        Ok(defs) => defs,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);

    let images = match load_textures(&mut rl, &thread, &defs) {
        Ok(images) => images,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.add_observer(despawn_finished_observer);
    world.flush();

    match defs.spawn_into(&mut world) {
        Ok(entities) => info!("Spawned {} sprites", entities.len()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }

    let mut update = Schedule::default();
    update.add_systems(advance_animated_sprites);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        update.run(&mut world);

        let failures = {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            let mut surface = RaylibSurface(&mut d);
            render_animated_sprites(&mut world, &mut surface, &images)
        };
        despawn_unrenderable(&mut world, &failures);
    }
}
