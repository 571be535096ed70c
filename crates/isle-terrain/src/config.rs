//! World generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::layer::{Combinator, Layer};

/// Parameters for one world generation.
///
/// `generate` is a pure function of this config and a seed; nothing here is
/// mutated during generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Grid width in cells. Must be positive.
    pub width: u32,
    /// Grid height in cells. Must be positive.
    pub height: u32,
    /// Default world seed, offsetting every noise sample coordinate.
    pub seed: i64,
    /// Reserved top-level frequency. Layers carry their own frequency and
    /// this value is not consulted during generation.
    pub base_frequency: f64,
    /// Radial falloff strength in `(0, 1]`. Smaller values shrink the island.
    pub falloff: f64,
    /// Scalars below this become water.
    pub sea_level: f64,
    /// Scalars at or above this become mountain (or a resource on a mountain).
    pub mount_level: f64,
    /// Noise layers, folded in order.
    pub layers: Vec<Layer>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed: 0,
            base_frequency: 0.1,
            falloff: 0.5,
            sea_level: 0.1,
            mount_level: 0.5,
            layers: vec![
                Layer::new(Combinator::Add, 4.0, 0.0, 1.0),
                Layer::new(Combinator::Multiply, 8.0, 0.8, 1.2),
            ],
        }
    }
}

impl GenerationConfig {
    /// Check the preconditions generation relies on.
    ///
    /// Sea and mountain levels are deliberately not range-checked: a negative
    /// `mount_level` is a valid way to ask for an all-mountain world.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerationError`] found, in field order.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width == 0 {
            return Err(GenerationError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(GenerationError::ZeroHeight);
        }
        if !self.falloff.is_finite() || self.falloff <= 0.0 {
            return Err(GenerationError::InvalidFalloff(self.falloff));
        }
        for (index, layer) in self.layers.iter().enumerate() {
            for (field, value) in [
                ("frequency", layer.frequency),
                ("minimum", layer.minimum),
                ("maximum", layer.maximum),
            ] {
                if !value.is_finite() {
                    return Err(GenerationError::NonFiniteLayerParameter { index, field });
                }
            }
            if layer.maximum < layer.minimum {
                return Err(GenerationError::InvertedLayerRange {
                    index,
                    minimum: layer.minimum,
                    maximum: layer.maximum,
                });
            }
        }
        Ok(())
    }

    /// Grid dimensions as `(width, height)` in cells.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}
