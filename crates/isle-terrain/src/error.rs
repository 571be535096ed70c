//! Generation error types.

/// Configuration problems detected before any noise is evaluated.
///
/// Each variant names the offending field so callers can point users at the
/// exact setting to fix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// `width` must be at least one cell.
    #[error("width must be positive, got 0")]
    ZeroWidth,

    /// `height` must be at least one cell.
    #[error("height must be positive, got 0")]
    ZeroHeight,

    /// `falloff` must be finite and strictly positive; it divides the radial distance.
    #[error("falloff must be finite and > 0, got {0}")]
    InvalidFalloff(f64),

    /// A layer declares `maximum < minimum`.
    #[error("layer {index}: maximum ({maximum}) is less than minimum ({minimum})")]
    InvertedLayerRange {
        /// Position of the layer in the fold order.
        index: usize,
        /// Declared minimum.
        minimum: f64,
        /// Declared maximum.
        maximum: f64,
    },

    /// A layer parameter is NaN or infinite.
    #[error("layer {index}: {field} must be finite")]
    NonFiniteLayerParameter {
        /// Position of the layer in the fold order.
        index: usize,
        /// Name of the offending field (`frequency`, `minimum` or `maximum`).
        field: &'static str,
    },
}
