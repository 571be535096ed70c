//! Procedural island terrain: layered noise, radial falloff, threshold
//! classification with mountain resources, and shoreline sprite variants.
//!
//! [`generate`] is the entry point. It is a pure function of the config, the
//! seed and the injected resource RNG; rendering the resulting grids is left
//! to the caller.

mod classify;
mod config;
mod error;
mod grid;
mod layer;
mod noise_field;
mod seed;
mod terrain;
mod tiles;
mod world;

pub mod debug_viz;

pub use classify::{
    COAL_THRESHOLD, RESOURCE_CANDIDATE_THRESHOLD, TerrainClassifier, resource_for_draw,
    select_variants, variant_at,
};
pub use config::GenerationConfig;
pub use error::GenerationError;
pub use grid::Grid;
pub use layer::{Combinator, Layer};
pub use noise_field::{NoiseField, falloff_factor};
pub use seed::{derive_resource_seed, draw_resource_percent, resource_rng};
pub use terrain::{TerrainType, VariantSelector};
pub use tiles::{TileSet, TileYields};
pub use world::{GeneratedWorld, TerrainCounts, generate, generate_seeded};
