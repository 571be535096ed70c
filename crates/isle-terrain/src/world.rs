//! Full generation pipeline: config and seed in, terrain and variant grids out.

use rand::Rng;
use tracing::info;

use crate::classify::TerrainClassifier;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::noise_field::NoiseField;
use crate::seed::resource_rng;
use crate::terrain::{TerrainType, VariantSelector};
use crate::tiles::{TileSet, TileYields};

/// The result of one generation call.
///
/// All three grids share the config's dimensions and are never mutated after
/// construction; regenerate to change the world.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedWorld {
    scalars: Grid<f64>,
    terrain: Grid<TerrainType>,
    variants: Grid<VariantSelector>,
}

impl GeneratedWorld {
    /// Post-falloff scalar per cell.
    pub fn scalars(&self) -> &Grid<f64> {
        &self.scalars
    }

    /// Terrain type per cell.
    pub fn terrain(&self) -> &Grid<TerrainType> {
        &self.terrain
    }

    /// Sprite variant per cell.
    pub fn variants(&self) -> &Grid<VariantSelector> {
        &self.variants
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.terrain.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.terrain.height()
    }

    /// `(terrain, variant)` for the cell at `(x, y)`, or `None` off-grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<(TerrainType, VariantSelector)> {
        Some((*self.terrain.get(x, y)?, *self.variants.get(x, y)?))
    }

    /// Number of cells of each terrain type.
    pub fn counts(&self) -> TerrainCounts {
        TerrainCounts::from_grid(&self.terrain)
    }

    /// Sum of tile yields over the whole world.
    pub fn total_yields(&self, tiles: &TileSet) -> TileYields {
        self.counts()
            .iter()
            .fold(TileYields::default(), |acc, (terrain, count)| {
                acc + tiles.yields(terrain).scaled(count)
            })
    }

    /// Consume the world, returning `(scalars, terrain, variants)`.
    pub fn into_parts(self) -> (Grid<f64>, Grid<TerrainType>, Grid<VariantSelector>) {
        (self.scalars, self.terrain, self.variants)
    }
}

/// Cell count per terrain type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerrainCounts {
    counts: [usize; TerrainType::COUNT],
}

impl TerrainCounts {
    /// Tally a terrain grid.
    pub fn from_grid(terrain: &Grid<TerrainType>) -> Self {
        let mut counts = [0; TerrainType::COUNT];
        for t in terrain.values() {
            counts[t.index()] += 1;
        }
        Self { counts }
    }

    /// Count for one terrain type.
    pub fn get(&self, terrain: TerrainType) -> usize {
        self.counts[terrain.index()]
    }

    /// Total number of cells counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(terrain, count)` pairs in [`TerrainType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TerrainType, usize)> + '_ {
        TerrainType::ALL.iter().map(|&t| (t, self.get(t)))
    }
}

/// Generate a world from `config` at `seed`, drawing resources from `rng`.
///
/// Runs noise evaluation, then terrain classification, then the variant pass
/// over the finished terrain grid. For a fixed config, seed and RNG state the
/// result is identical across calls.
///
/// # Errors
///
/// Returns a [`GenerationError`] if `config` is invalid; nothing is evaluated
/// in that case.
pub fn generate<R: Rng>(
    config: &GenerationConfig,
    seed: i64,
    rng: &mut R,
) -> Result<GeneratedWorld, GenerationError> {
    let scalars = NoiseField::new().evaluate(config, seed)?;
    let (terrain, variants) = TerrainClassifier::from_config(config).classify(&scalars, rng);
    let world = GeneratedWorld {
        scalars,
        terrain,
        variants,
    };

    let counts = world.counts();
    info!(
        width = world.width(),
        height = world.height(),
        seed,
        water = counts.get(TerrainType::Water),
        grass = counts.get(TerrainType::Grass),
        mountain = counts.get(TerrainType::Mountain),
        coal = counts.get(TerrainType::Coal),
        "world generated"
    );

    Ok(world)
}

/// Generate a world whose resource draw is also derived from `seed`.
///
/// # Errors
///
/// Returns a [`GenerationError`] if `config` is invalid.
pub fn generate_seeded(
    config: &GenerationConfig,
    seed: i64,
) -> Result<GeneratedWorld, GenerationError> {
    generate(config, seed, &mut resource_rng(seed))
}
