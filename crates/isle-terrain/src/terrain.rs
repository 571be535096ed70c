//! Terrain types and sprite variant selectors.

use serde::{Deserialize, Serialize};

/// Discrete classification of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    /// Below sea level, or a non-finite scalar.
    #[default]
    Water,
    /// Between sea level and mountain level.
    Grass,
    /// At or above mountain level without a resource.
    Mountain,
    /// A mountain cell promoted by the resource draw.
    Coal,
    /// Reserved resource; the classifier never produces it.
    Iron,
}

impl TerrainType {
    /// Number of terrain types.
    pub const COUNT: usize = 5;

    /// All terrain types in declaration order.
    pub const ALL: [TerrainType; Self::COUNT] = [
        TerrainType::Water,
        TerrainType::Grass,
        TerrainType::Mountain,
        TerrainType::Coal,
        TerrainType::Iron,
    ];

    /// Stable index into [`TerrainType::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name for logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            TerrainType::Water => "water",
            TerrainType::Grass => "grass",
            TerrainType::Mountain => "mountain",
            TerrainType::Coal => "coal",
            TerrainType::Iron => "iron",
        }
    }

    /// Whether this cell is water for edge-variant purposes.
    pub const fn is_water(self) -> bool {
        matches!(self, TerrainType::Water)
    }
}

/// Which sprite of a tile set a cell should use.
///
/// Only grass cells bordering water pick an edge or corner; everything else is
/// [`VariantSelector::Center`]. "Top" is the `y + 1` neighbor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantSelector {
    /// Interior sprite.
    #[default]
    Center,
    /// Water to the west.
    Left,
    /// Water to the east.
    Right,
    /// Water to the north.
    Top,
    /// Water to the south.
    Bottom,
    /// Water to the west and north.
    TopLeft,
    /// Water to the east and north.
    TopRight,
    /// Water to the west and south.
    BottomLeft,
    /// Water to the east and south.
    BottomRight,
}
