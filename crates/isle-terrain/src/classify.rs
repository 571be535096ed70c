//! Threshold classification, mountain resource promotion and edge variants.
//!
//! Classification and variant selection are two separate passes: variants read
//! the completed terrain grid and never a partially classified one.

use rand::Rng;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::grid::Grid;
use crate::seed::draw_resource_percent;
use crate::terrain::{TerrainType, VariantSelector};

/// Draws above this become candidates for a resource.
pub const RESOURCE_CANDIDATE_THRESHOLD: f64 = 0.5;

/// Draws above this promote a mountain to coal.
pub const COAL_THRESHOLD: f64 = 0.8;

/// Turns a scalar grid into terrain types and sprite variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainClassifier {
    /// Scalars below this become water.
    pub sea_level: f64,
    /// Scalars at or above this become mountain.
    pub mount_level: f64,
}

impl TerrainClassifier {
    /// Create a classifier with explicit thresholds.
    pub fn new(sea_level: f64, mount_level: f64) -> Self {
        Self {
            sea_level,
            mount_level,
        }
    }

    /// Take the thresholds from a generation config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.sea_level, config.mount_level)
    }

    /// Classify one scalar before resource promotion.
    ///
    /// Any non-finite scalar is water. The mountain test runs first, so a
    /// `mount_level` below `sea_level` still yields mountains.
    pub fn classify_scalar(&self, v: f64) -> TerrainType {
        if !v.is_finite() {
            TerrainType::Water
        } else if v >= self.mount_level {
            TerrainType::Mountain
        } else if v >= self.sea_level {
            TerrainType::Grass
        } else {
            TerrainType::Water
        }
    }

    /// Classify every cell, drawing once from `rng` per mountain cell.
    ///
    /// Cells are visited row by row, so a seeded `rng` gives a reproducible grid.
    pub fn classify_terrain<R: Rng>(
        &self,
        scalars: &Grid<f64>,
        rng: &mut R,
    ) -> Grid<TerrainType> {
        let terrain = scalars.map(|_, _, &v| match self.classify_scalar(v) {
            TerrainType::Mountain => resource_for_draw(draw_resource_percent(rng)),
            other => other,
        });
        debug!(
            width = terrain.width(),
            height = terrain.height(),
            "terrain classified"
        );
        terrain
    }

    /// Full classification: terrain pass, then variant pass over the result.
    pub fn classify<R: Rng>(
        &self,
        scalars: &Grid<f64>,
        rng: &mut R,
    ) -> (Grid<TerrainType>, Grid<VariantSelector>) {
        let terrain = self.classify_terrain(scalars, rng);
        let variants = select_variants(&terrain);
        (terrain, variants)
    }
}

/// Resource sub-typing of a mountain for a draw in `[0, 1]`.
///
/// Only coal is currently assigned; iron is reserved.
pub fn resource_for_draw(draw: f64) -> TerrainType {
    if draw > RESOURCE_CANDIDATE_THRESHOLD && draw > COAL_THRESHOLD {
        TerrainType::Coal
    } else {
        TerrainType::Mountain
    }
}

/// Compute the sprite variant of every cell from a completed terrain grid.
pub fn select_variants(terrain: &Grid<TerrainType>) -> Grid<VariantSelector> {
    terrain.map(|x, y, _| variant_at(terrain, x, y))
}

/// Variant for the cell at `(x, y)`.
///
/// West and east water take precedence over north and south; a second water
/// neighbor on the vertical axis turns an edge into a corner. Off-grid
/// neighbors count as land.
pub fn variant_at(terrain: &Grid<TerrainType>, x: usize, y: usize) -> VariantSelector {
    if terrain.get(x, y) != Some(&TerrainType::Grass) {
        return VariantSelector::Center;
    }

    let (x, y) = (x as i64, y as i64);
    let water = |dx: i64, dy: i64| {
        terrain
            .get_signed(x + dx, y + dy)
            .is_some_and(|t| t.is_water())
    };
    let west = water(-1, 0);
    let east = water(1, 0);
    let north = water(0, 1);
    let south = water(0, -1);

    match (west, east, north, south) {
        (true, _, true, _) => VariantSelector::TopLeft,
        (true, _, false, true) => VariantSelector::BottomLeft,
        (true, _, false, false) => VariantSelector::Left,
        (false, true, true, _) => VariantSelector::TopRight,
        (false, true, false, true) => VariantSelector::BottomRight,
        (false, true, false, false) => VariantSelector::Right,
        (false, false, true, _) => VariantSelector::Top,
        (false, false, false, true) => VariantSelector::Bottom,
        (false, false, false, false) => VariantSelector::Center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::resource_rng;

    use crate::terrain::TerrainType::{Grass as G, Mountain as M, Water as W};

    /// Build a terrain grid from rows listed top (`y = h - 1`) to bottom (`y = 0`).
    fn terrain_from_rows(rows: &[&[TerrainType]]) -> Grid<TerrainType> {
        let height = rows.len();
        let width = rows[0].len();
        Grid::from_fn(width, height, |x, y| rows[height - 1 - y][x])
    }

    #[test]
    fn test_thresholds() {
        let c = TerrainClassifier::new(0.1, 0.5);
        assert_eq!(c.classify_scalar(0.05), TerrainType::Water);
        assert_eq!(c.classify_scalar(0.1), TerrainType::Grass);
        assert_eq!(c.classify_scalar(0.49), TerrainType::Grass);
        assert_eq!(c.classify_scalar(0.5), TerrainType::Mountain);
        assert_eq!(c.classify_scalar(7.0), TerrainType::Mountain);
    }

    #[test]
    fn test_non_finite_scalars_are_water() {
        let c = TerrainClassifier::new(-10.0, -5.0);
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(c.classify_scalar(v), TerrainType::Water, "scalar {v}");
        }
    }

    #[test]
    fn test_negative_mount_level_is_all_mountain() {
        let c = TerrainClassifier::new(0.1, -0.5);
        for v in [-0.4, 0.0, 0.05, 0.3, 12.0] {
            assert_eq!(c.classify_scalar(v), TerrainType::Mountain, "scalar {v}");
        }
    }

    #[test]
    fn test_resource_for_draw_boundaries() {
        assert_eq!(resource_for_draw(0.01), TerrainType::Mountain);
        assert_eq!(resource_for_draw(0.5), TerrainType::Mountain);
        assert_eq!(resource_for_draw(0.51), TerrainType::Mountain);
        assert_eq!(resource_for_draw(0.8), TerrainType::Mountain);
        assert_eq!(resource_for_draw(0.81), TerrainType::Coal);
        assert_eq!(resource_for_draw(1.0), TerrainType::Coal);
    }

    #[test]
    fn test_coal_rate_is_about_twenty_percent() {
        let scalars = Grid::new(100, 100, 1.0);
        let c = TerrainClassifier::new(0.1, 0.5);
        let terrain = c.classify_terrain(&scalars, &mut resource_rng(11));
        let coal = terrain.values().filter(|t| **t == TerrainType::Coal).count();
        let mountain = terrain
            .values()
            .filter(|t| **t == TerrainType::Mountain)
            .count();
        assert_eq!(coal + mountain, 10_000);
        assert!(
            (1_700..=2_300).contains(&coal),
            "expected ~20% coal, got {coal}/10000"
        );
    }

    #[test]
    fn test_rng_only_consumed_by_mountains() {
        let scalars = Grid::new(10, 10, 0.3);
        let c = TerrainClassifier::new(0.1, 0.5);
        let mut rng = resource_rng(3);
        let terrain = c.classify_terrain(&scalars, &mut rng);
        assert!(terrain.values().all(|t| *t == TerrainType::Grass));

        let mut fresh = resource_rng(3);
        assert_eq!(
            draw_resource_percent(&mut rng),
            draw_resource_percent(&mut fresh),
            "grass cells must not advance the resource stream"
        );
    }

    #[test]
    fn test_iron_never_produced() {
        let scalars = Grid::from_fn(50, 50, |x, y| (x as f64 - y as f64) / 25.0);
        let c = TerrainClassifier::new(-0.2, 0.4);
        let (terrain, _) = c.classify(&scalars, &mut resource_rng(1));
        assert!(terrain.values().all(|t| *t != TerrainType::Iron));
    }

    #[test]
    fn test_variant_single_edges() {
        let cases = [
            (terrain_from_rows(&[&[G, G, G], &[W, G, G], &[G, G, G]]), VariantSelector::Left),
            (terrain_from_rows(&[&[G, G, G], &[G, G, W], &[G, G, G]]), VariantSelector::Right),
            (terrain_from_rows(&[&[G, W, G], &[G, G, G], &[G, G, G]]), VariantSelector::Top),
            (terrain_from_rows(&[&[G, G, G], &[G, G, G], &[G, W, G]]), VariantSelector::Bottom),
            (terrain_from_rows(&[&[G, G, G], &[G, G, G], &[G, G, G]]), VariantSelector::Center),
        ];
        for (terrain, expected) in cases {
            assert_eq!(variant_at(&terrain, 1, 1), expected);
        }
    }

    #[test]
    fn test_variant_corners() {
        let cases = [
            (terrain_from_rows(&[&[G, W, G], &[W, G, G], &[G, G, G]]), VariantSelector::TopLeft),
            (terrain_from_rows(&[&[G, G, G], &[W, G, G], &[G, W, G]]), VariantSelector::BottomLeft),
            (terrain_from_rows(&[&[G, W, G], &[G, G, W], &[G, G, G]]), VariantSelector::TopRight),
            (terrain_from_rows(&[&[G, G, G], &[G, G, W], &[G, W, G]]), VariantSelector::BottomRight),
        ];
        for (terrain, expected) in cases {
            assert_eq!(variant_at(&terrain, 1, 1), expected);
        }
    }

    #[test]
    fn test_variant_precedence() {
        // West beats east; north beats south within a side.
        let all_water = terrain_from_rows(&[&[W, W, W], &[W, G, W], &[W, W, W]]);
        assert_eq!(variant_at(&all_water, 1, 1), VariantSelector::TopLeft);

        let west_and_east = terrain_from_rows(&[&[G, G, G], &[W, G, W], &[G, G, G]]);
        assert_eq!(variant_at(&west_and_east, 1, 1), VariantSelector::Left);

        let north_and_south = terrain_from_rows(&[&[G, W, G], &[G, G, G], &[G, W, G]]);
        assert_eq!(variant_at(&north_and_south, 1, 1), VariantSelector::Top);
    }

    #[test]
    fn test_non_grass_is_always_center() {
        let terrain = terrain_from_rows(&[&[W, W, W], &[W, M, W], &[W, W, W]]);
        let variants = select_variants(&terrain);
        assert!(variants.values().all(|v| *v == VariantSelector::Center));
    }

    #[test]
    fn test_mountain_neighbors_are_not_water() {
        let terrain = terrain_from_rows(&[&[M, M, M], &[M, G, M], &[M, M, M]]);
        assert_eq!(variant_at(&terrain, 1, 1), VariantSelector::Center);
    }

    #[test]
    fn test_boundary_neighbors_treated_as_land() {
        let terrain = Grid::new(4, 3, G);
        let variants = select_variants(&terrain);
        assert!(variants.values().all(|v| *v == VariantSelector::Center));

        let single = Grid::new(1, 1, G);
        assert_eq!(variant_at(&single, 0, 0), VariantSelector::Center);
    }

    #[test]
    fn test_boundary_cell_still_sees_in_grid_water() {
        // Bottom-left corner cell: west and south are off-grid, north is water.
        let terrain = terrain_from_rows(&[&[W, G], &[G, G]]);
        assert_eq!(variant_at(&terrain, 0, 0), VariantSelector::Top);
    }

    #[test]
    fn test_variant_pass_reads_completed_grid() {
        let scalars = terrain_from_rows(&[&[G, G, G], &[G, W, G], &[G, G, G]])
            .map(|_, _, t| if *t == W { 0.0 } else { 0.3 });
        let c = TerrainClassifier::new(0.1, 0.5);
        let (terrain, variants) = c.classify(&scalars, &mut resource_rng(0));
        assert_eq!(terrain[(1, 1)], TerrainType::Water);
        // Cells after the water cell in row order still see it as water.
        assert_eq!(variants[(0, 1)], VariantSelector::Right);
        assert_eq!(variants[(2, 1)], VariantSelector::Left);
        assert_eq!(variants[(1, 0)], VariantSelector::Top);
        assert_eq!(variants[(1, 2)], VariantSelector::Bottom);
    }
}
