//! Demo host for the isle generator.
//!
//! Loads `isle.ron`, applies CLI overrides, generates a world, and prints a
//! text map with terrain counts and tile yields. Optionally writes scalar and
//! terrain PNG debug images.
//!
//! Run with `cargo run -p isle-demo -- --seed 7 --png-dir out`.

mod png_out;

use std::path::Path;

use clap::Parser;
use isle_config::{CliArgs, Config, default_config_dir};
use isle_terrain::debug_viz::{render_ascii, render_scalar_debug, render_terrain_debug};
use isle_terrain::{GeneratedWorld, GenerationError, generate, resource_rng};
use tracing::{error, info};

use crate::png_out::{PngWriteError, write_png};

/// Generate the world described by `config`, picking the resource RNG it asks for.
fn generate_world(config: &Config) -> Result<GeneratedWorld, GenerationError> {
    let world = &config.world;
    if config.resources.random {
        generate(world, world.seed, &mut rand::rng())
    } else {
        let resource_seed = config.resources.seed.unwrap_or(world.seed);
        generate(world, world.seed, &mut resource_rng(resource_seed))
    }
}

fn print_summary(config: &Config, world: &GeneratedWorld) {
    println!(
        "{}x{} world, seed {}",
        world.width(),
        world.height(),
        config.world.seed
    );
    for (terrain, count) in world.counts().iter() {
        println!("  {:<9} {count}", terrain.name());
    }
    let y = world.total_yields(&config.tiles);
    println!(
        "  yields    food {} production {} gold {} water {} air {}",
        y.food, y.production, y.gold, y.water, y.air
    );
}

fn write_images(dir: &Path, config: &Config, world: &GeneratedWorld) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        error!("Failed to create {}: {e}", dir.display());
        return;
    }
    let scale = config.output.pixels_per_cell;
    let images = [
        (
            "scalars.png",
            render_scalar_debug(
                world.scalars(),
                config.world.sea_level,
                config.world.mount_level,
                scale,
            ),
        ),
        ("terrain.png", render_terrain_debug(world, scale)),
    ];
    for (name, image) in images {
        let path = dir.join(name);
        let written = image
            .map_err(PngWriteError::from)
            .and_then(|image| write_png(&path, &image));
        match written {
            Ok(()) => info!("Wrote {}", path.display()),
            Err(e) => error!("{}: {e}", path.display()),
        }
    }
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    let log_to_file = cfg!(debug_assertions) || config.debug.log_to_file;
    isle_log::init_logging(Some(&log_dir), log_to_file, Some(&config));

    if let Err(e) = config.validate() {
        error!("{e}");
        std::process::exit(2);
    }

    let world = match generate_world(&config) {
        Ok(world) => world,
        Err(e) => {
            error!("Generation failed: {e}");
            std::process::exit(1);
        }
    };

    if config.output.ascii {
        print!("{}", render_ascii(&world, config.output.show_edges));
    }
    print_summary(&config, &world);

    if let Some(dir) = &config.output.png_dir {
        write_images(dir, &config, &world);
    }
}
