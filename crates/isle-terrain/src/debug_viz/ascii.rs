//! Plain-text world maps for terminals and logs.

use crate::terrain::{TerrainType, VariantSelector};
use crate::world::GeneratedWorld;

/// Single-character symbol for a terrain type.
pub fn terrain_glyph(terrain: TerrainType) -> char {
    match terrain {
        TerrainType::Water => '~',
        TerrainType::Grass => '.',
        TerrainType::Mountain => '^',
        TerrainType::Coal => 'c',
        TerrainType::Iron => 'i',
    }
}

/// Box-drawing symbol pointing at the water a shoreline cell borders.
pub fn variant_glyph(variant: VariantSelector) -> char {
    match variant {
        VariantSelector::Center => '.',
        VariantSelector::Left => '│',
        VariantSelector::Right => '│',
        VariantSelector::Top => '─',
        VariantSelector::Bottom => '─',
        VariantSelector::TopLeft => '┌',
        VariantSelector::TopRight => '┐',
        VariantSelector::BottomLeft => '└',
        VariantSelector::BottomRight => '┘',
    }
}

/// Render the world as text, north up, one line per grid row.
///
/// With `show_edges`, grass cells use [`variant_glyph`] so coastlines are outlined.
pub fn render_ascii(world: &GeneratedWorld, show_edges: bool) -> String {
    let (w, h) = (world.width(), world.height());
    let mut out = String::with_capacity((w * 3 + 1) * h);
    for y in (0..h).rev() {
        for x in 0..w {
            let terrain = world.terrain()[(x, y)];
            let glyph = if show_edges && terrain == TerrainType::Grass {
                variant_glyph(world.variants()[(x, y)])
            } else {
                terrain_glyph(terrain)
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::layer::{Combinator, Layer};
    use crate::world::generate_seeded;

    fn island() -> GeneratedWorld {
        let config = GenerationConfig {
            width: 5,
            height: 5,
            falloff: 0.5,
            sea_level: 0.15,
            mount_level: 10.0,
            layers: vec![Layer::constant(Combinator::Add, 1.0)],
            ..Default::default()
        };
        generate_seeded(&config, 0).unwrap()
    }

    #[test]
    fn test_ascii_has_one_line_per_row() {
        let text = render_ascii(&island(), false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 5));
    }

    #[test]
    fn test_ascii_plain_glyphs() {
        let text = render_ascii(&island(), false);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with('~'), "corner should be water: {first:?}");
        assert_eq!(text.lines().nth(2).unwrap().chars().nth(2), Some('.'));
    }

    #[test]
    fn test_ascii_edges_outline_coast() {
        let text = render_ascii(&island(), true);
        // Middle row, west edge: water to the north → top edge glyph.
        assert_eq!(text.lines().nth(2).unwrap().chars().next(), Some('─'));
    }
}
