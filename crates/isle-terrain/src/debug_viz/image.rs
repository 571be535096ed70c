//! A 2D debug image represented as a flat array of RGBA pixels.

/// Largest pixel buffer a debug image may allocate (1 GiB).
pub const MAX_IMAGE_BYTES: usize = 1 << 30;

/// A debug image whose pixel buffer cannot be allocated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DebugImageError {
    /// `width × height × 4` overflows or exceeds [`MAX_IMAGE_BYTES`].
    #[error("debug image of {width}x{height} pixels exceeds {MAX_IMAGE_BYTES} bytes")]
    TooLarge {
        /// Requested width in pixels.
        width: u64,
        /// Requested height in pixels.
        height: u64,
    },
}

/// A 2D debug image, stored as row-major RGBA pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a new black (all-zero) image with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the buffer would exceed [`MAX_IMAGE_BYTES`]; use
    /// [`DebugImage::try_new`] for sizes derived from user input.
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Ok(image) => image,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a new black image, failing if the buffer would be too large.
    pub fn try_new(width: u32, height: u32) -> Result<Self, DebugImageError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .filter(|&n| n <= MAX_IMAGE_BYTES)
            .ok_or(DebugImageError::TooLarge {
                width: u64::from(width),
                height: u64::from(height),
            })?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Create an image of `cells_x × cells_y` cells at `scale` pixels per cell.
    pub fn for_cells(cells_x: usize, cells_y: usize, scale: u32) -> Result<Self, DebugImageError> {
        let too_large = || DebugImageError::TooLarge {
            width: (cells_x as u64).saturating_mul(u64::from(scale)),
            height: (cells_y as u64).saturating_mul(u64::from(scale)),
        };
        let width = u32::try_from(cells_x)
            .ok()
            .and_then(|w| w.checked_mul(scale))
            .ok_or_else(too_large)?;
        let height = u32::try_from(cells_y)
            .ok()
            .and_then(|h| h.checked_mul(scale))
            .ok_or_else(too_large)?;
        Self::try_new(width, height)
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Fill a `scale × scale` block whose top-left pixel is `(x * scale, y * scale)`.
    pub fn fill_cell(&mut self, x: u32, y: u32, scale: u32, rgba: [u8; 4]) {
        for py in y * scale..(y + 1) * scale {
            for px in x * scale..(x + 1) * scale {
                self.set_pixel(px, py, rgba);
            }
        }
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Count the number of unique colors (ignoring alpha) in the image.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }
}
