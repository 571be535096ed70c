//! Layered noise field with radial island falloff.
//!
//! Each cell folds the configured layers, in order, into one scalar and then
//! attenuates it by distance from the grid center so land concentrates in the
//! middle and the edges sink below sea level.

use noise::{NoiseFn, Perlin};
use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::grid::Grid;

/// Evaluates per-cell scalars for a [`GenerationConfig`].
///
/// The seed does not reseed the permutation table; it offsets the sample
/// coordinates, so nearby seeds sample nearby regions of the same field.
pub struct NoiseField {
    noise: Perlin,
}

impl NoiseField {
    /// Create a field over the default Perlin permutation.
    pub fn new() -> Self {
        Self {
            noise: Perlin::new(Perlin::DEFAULT_SEED),
        }
    }

    /// Sample coherent noise at `(x, y)`, normalized to `[0, 1]`.
    #[inline]
    pub fn sample_unit(&self, x: f64, y: f64) -> f64 {
        let raw = self.noise.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Fold every layer at cell `(x, y)` into a single pre-falloff scalar.
    pub fn fold_layers(&self, config: &GenerationConfig, seed: i64, x: usize, y: usize) -> f64 {
        let (width, height) = config.dimensions();
        let u = x as f64 / width as f64;
        let v = y as f64 / height as f64;
        let offset = seed as f64;

        config.layers.iter().fold(0.0, |acc, layer| {
            let noise = self.sample_unit(
                offset + u * layer.frequency,
                offset + v * layer.frequency,
            );
            layer.combinator.apply(acc, layer.rescale(noise))
        })
    }

    /// Evaluate the scalar grid for `config` at `seed`.
    ///
    /// Layer folds may produce NaN or infinities (division by a zero sample,
    /// logarithm of a non-positive value); those are propagated to the grid.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if `config` fails validation.
    pub fn evaluate(
        &self,
        config: &GenerationConfig,
        seed: i64,
    ) -> Result<Grid<f64>, GenerationError> {
        config.validate()?;
        let (width, height) = config.dimensions();

        let grid = Grid::from_fn(width, height, |x, y| {
            self.fold_layers(config, seed, x, y) * falloff_factor(config, x, y)
        });

        let non_finite = grid.values().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            warn!(
                non_finite,
                total = grid.len(),
                "layer fold produced non-finite scalars; those cells classify as water"
            );
        }
        debug!(width, height, layers = config.layers.len(), seed, "noise field evaluated");

        Ok(grid)
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

/// Radial attenuation for cell `(x, y)`: `1 - distance / (min(w, h) * falloff)`.
///
/// `1.0` at the grid center, decreasing linearly with Euclidean distance and
/// going negative beyond `min(w, h) * falloff`. Requires `falloff > 0`.
pub fn falloff_factor(config: &GenerationConfig, x: usize, y: usize) -> f64 {
    let (width, height) = config.dimensions();
    let cx = width as f64 * 0.5 - 0.5;
    let cy = height as f64 * 0.5 - 0.5;
    let distance = (x as f64 - cx).hypot(y as f64 - cy);
    1.0 - distance / (width.min(height) as f64 * config.falloff)
}
