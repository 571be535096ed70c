//! Debug renderers for scalar and terrain grids.

use super::image::{DebugImage, DebugImageError};
use crate::grid::Grid;
use crate::terrain::{TerrainType, VariantSelector};
use crate::world::GeneratedWorld;

/// Color used for non-finite scalars.
const NON_FINITE_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Map a scalar to an RGBA color relative to the sea and mountain levels.
///
/// Below sea level: dark to light blue. Between the levels: green shading
/// toward brown. At or above mountain level: grey to white. Non-finite
/// scalars are magenta so fold hazards stand out.
pub fn scalar_to_color(v: f64, sea_level: f64, mount_level: f64) -> [u8; 4] {
    if !v.is_finite() {
        return NON_FINITE_COLOR;
    }
    if v < sea_level {
        // Deepest blue one full band below sea level.
        let band = (mount_level - sea_level).abs().max(f64::EPSILON);
        let t = (1.0 - (sea_level - v) / band).clamp(0.0, 1.0);
        [
            (10.0 + t * 40.0) as u8,
            (30.0 + t * 90.0) as u8,
            (110.0 + t * 110.0) as u8,
            255,
        ]
    } else if v < mount_level {
        let t = ((v - sea_level) / (mount_level - sea_level)).clamp(0.0, 1.0);
        [
            (50.0 + t * 90.0) as u8,
            (170.0 - t * 60.0) as u8,
            (50.0 + t * 10.0) as u8,
            255,
        ]
    } else {
        let t = (v - mount_level).clamp(0.0, 1.0);
        let base = (130.0 + t * 125.0) as u8;
        [base, base, base, 255]
    }
}

/// Base color of a terrain type.
pub fn terrain_color(terrain: TerrainType) -> [u8; 4] {
    match terrain {
        TerrainType::Water => [30, 80, 200, 255],
        TerrainType::Grass => [90, 170, 60, 255],
        TerrainType::Mountain => [130, 115, 95, 255],
        TerrainType::Coal => [40, 40, 40, 255],
        TerrainType::Iron => [170, 90, 60, 255],
    }
}

/// Darken a color so shoreline grass is visible against interior grass.
fn shade_edge(rgba: [u8; 4]) -> [u8; 4] {
    [
        (rgba[0] as u16 * 3 / 5) as u8,
        (rgba[1] as u16 * 3 / 5) as u8,
        (rgba[2] as u16 * 3 / 5) as u8,
        rgba[3],
    ]
}

/// Render a scalar grid, `scale` pixels per cell, north up.
///
/// # Errors
///
/// Returns [`DebugImageError::TooLarge`] if the scaled image does not fit in memory.
pub fn render_scalar_debug(
    scalars: &Grid<f64>,
    sea_level: f64,
    mount_level: f64,
    scale: u32,
) -> Result<DebugImage, DebugImageError> {
    let scale = scale.max(1);
    let mut image = DebugImage::for_cells(scalars.width(), scalars.height(), scale)?;
    let h = scalars.height() as u32;
    for (x, y, &v) in scalars.iter() {
        let row = h - 1 - y as u32;
        image.fill_cell(x as u32, row, scale, scalar_to_color(v, sea_level, mount_level));
    }
    Ok(image)
}

/// Render terrain types, `scale` pixels per cell, north up.
///
/// Grass cells whose variant is not [`VariantSelector::Center`] are drawn darker.
///
/// # Errors
///
/// Returns [`DebugImageError::TooLarge`] if the scaled image does not fit in memory.
pub fn render_terrain_debug(
    world: &GeneratedWorld,
    scale: u32,
) -> Result<DebugImage, DebugImageError> {
    let scale = scale.max(1);
    let mut image = DebugImage::for_cells(world.width(), world.height(), scale)?;
    let h = world.height() as u32;
    for (x, y, &terrain) in world.terrain().iter() {
        let mut color = terrain_color(terrain);
        if world.variants()[(x, y)] != VariantSelector::Center {
            color = shade_edge(color);
        }
        let row = h - 1 - y as u32;
        image.fill_cell(x as u32, row, scale, color);
    }
    Ok(image)
}
