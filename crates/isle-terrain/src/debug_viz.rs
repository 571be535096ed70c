//! Debug visualization of generated worlds: RGBA images and ASCII maps.
//!
//! Images and text are drawn north-up: grid row `y = height - 1` is the first
//! image row, matching the `y + 1` = "top" convention of the variant selector.

mod ascii;
mod image;
mod renderers;

pub use self::ascii::{render_ascii, terrain_glyph, variant_glyph};
pub use self::image::{DebugImage, DebugImageError, MAX_IMAGE_BYTES};
pub use renderers::{render_scalar_debug, render_terrain_debug, scalar_to_color, terrain_color};
