//! Per-terrain tile yields.
//!
//! Each terrain type carries a fixed economic yield. Sprites for the tile
//! variants are the rendering host's business and are not modelled here.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::terrain::TerrainType;

/// Resources a single tile provides, or a world's total.
///
/// Arithmetic saturates at the `i64` bounds so large configured yields over
/// large worlds cannot overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TileYields {
    pub food: i64,
    pub production: i64,
    pub gold: i64,
    pub water: i64,
    pub air: i64,
}

impl TileYields {
    /// Convenience constructor in field order.
    pub const fn new(food: i64, production: i64, gold: i64, water: i64, air: i64) -> Self {
        Self {
            food,
            production,
            gold,
            water,
            air,
        }
    }

    /// Yields multiplied by a tile count.
    pub fn scaled(self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self::new(
            self.food.saturating_mul(count),
            self.production.saturating_mul(count),
            self.gold.saturating_mul(count),
            self.water.saturating_mul(count),
            self.air.saturating_mul(count),
        )
    }
}

impl Add for TileYields {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.food.saturating_add(rhs.food),
            self.production.saturating_add(rhs.production),
            self.gold.saturating_add(rhs.gold),
            self.water.saturating_add(rhs.water),
            self.air.saturating_add(rhs.air),
        )
    }
}

impl AddAssign for TileYields {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Yield table for every terrain type, including the reserved iron tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSet {
    pub water: TileYields,
    pub grass: TileYields,
    pub mountain: TileYields,
    pub coal: TileYields,
    pub iron: TileYields,
}

impl TileSet {
    /// Yields of a single tile of `terrain`.
    pub fn yields(&self, terrain: TerrainType) -> TileYields {
        match terrain {
            TerrainType::Water => self.water,
            TerrainType::Grass => self.grass,
            TerrainType::Mountain => self.mountain,
            TerrainType::Coal => self.coal,
            TerrainType::Iron => self.iron,
        }
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self {
            water: TileYields::new(1, 0, 0, 3, 1),
            grass: TileYields::new(2, 1, 0, 1, 1),
            mountain: TileYields::new(0, 2, 0, 0, 1),
            coal: TileYields::new(0, 4, 1, 0, 0),
            iron: TileYields::new(0, 5, 2, 0, 0),
        }
    }
}
