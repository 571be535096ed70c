//! Command-line argument parsing for the isle generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// isle command-line arguments.
///
/// CLI values override settings loaded from `isle.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "isle", about = "Procedural island terrain generator")]
pub struct CliArgs {
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// World seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Radial falloff strength (> 0).
    #[arg(long)]
    pub falloff: Option<f64>,

    /// Scalars below this become water.
    #[arg(long, allow_negative_numbers = true)]
    pub sea_level: Option<f64>,

    /// Scalars at or above this become mountain.
    #[arg(long, allow_negative_numbers = true)]
    pub mount_level: Option<f64>,

    /// Seed for the mountain resource draw.
    #[arg(long, allow_negative_numbers = true)]
    pub resource_seed: Option<i64>,

    /// Write PNG debug images into this directory.
    #[arg(long)]
    pub png_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(falloff) = args.falloff {
            self.world.falloff = falloff;
        }
        if let Some(sea) = args.sea_level {
            self.world.sea_level = sea;
        }
        if let Some(mount) = args.mount_level {
            self.world.mount_level = mount;
        }
        if let Some(seed) = args.resource_seed {
            self.resources.seed = Some(seed);
            self.resources.random = false;
        }
        if let Some(ref dir) = args.png_dir {
            self.output.png_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(200),
            seed: Some(-5),
            mount_level: Some(-1.0),
            resource_seed: Some(3),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.width, 200);
        assert_eq!(config.world.seed, -5);
        assert_eq!(config.world.mount_level, -1.0);
        assert_eq!(config.resources.seed, Some(3));
        // Non-overridden fields retain defaults
        assert_eq!(config.world.height, 64);
        assert_eq!(config.world.sea_level, 0.1);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_negative_values() {
        let args = CliArgs::try_parse_from([
            "isle",
            "--seed",
            "-12",
            "--mount-level",
            "-0.5",
            "--png-dir",
            "out",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(-12));
        assert_eq!(args.mount_level, Some(-0.5));
        assert_eq!(args.png_dir, Some(PathBuf::from("out")));
    }
}
