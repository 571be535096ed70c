//! Configuration for the isle world generator.
//!
//! Settings persist to disk as RON, can be overridden from the command line
//! via clap, and are validated against the generator's preconditions before
//! use.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, OutputConfig, ResourceConfig, default_config_dir,
};
pub use error::ConfigError;
