//! Noise layers and the combinators that fold them into a running scalar.

use serde::{Deserialize, Serialize};

/// How a layer's rescaled sample is folded into the running value.
///
/// The fold is not commutative: layers are applied strictly in declared order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinator {
    /// `v += sample`
    Add,
    /// `v -= sample`
    Subtract,
    /// `v *= sample`
    Multiply,
    /// `v /= sample`. A zero sample yields ±inf or NaN, which is propagated.
    Divide,
    /// `v %= sample` (floating-point remainder, sign follows `v`).
    Modulo,
    /// `v = v.powf(sample)`
    Power,
    /// `v = log_sample(v)`. NaN for `v <= 0`, `sample <= 0` or `sample == 1`.
    Logarithm,
}

impl Combinator {
    /// All combinators in declaration order.
    pub const ALL: [Combinator; 7] = [
        Combinator::Add,
        Combinator::Subtract,
        Combinator::Multiply,
        Combinator::Divide,
        Combinator::Modulo,
        Combinator::Power,
        Combinator::Logarithm,
    ];

    /// Fold `sample` into `acc`.
    ///
    /// Non-finite results are returned as-is; dividing by zero or taking the
    /// logarithm of a non-positive value is a configuration hazard, not an error.
    #[inline]
    pub fn apply(self, acc: f64, sample: f64) -> f64 {
        match self {
            Combinator::Add => acc + sample,
            Combinator::Subtract => acc - sample,
            Combinator::Multiply => acc * sample,
            Combinator::Divide => acc / sample,
            Combinator::Modulo => acc % sample,
            Combinator::Power => acc.powf(sample),
            Combinator::Logarithm => log_base(acc, sample),
        }
    }
}

/// `log_base(value)`, NaN wherever the logarithm is undefined.
///
/// `f64::log` returns finite garbage or ±inf for some of these inputs, so the
/// undefined domain is mapped to NaN explicitly.
#[inline]
fn log_base(value: f64, base: f64) -> f64 {
    if value <= 0.0 || base <= 0.0 || base == 1.0 {
        return f64::NAN;
    }
    value.ln() / base.ln()
}

/// One noise contribution: combinator, sampling frequency and output range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// How this layer folds into the running value.
    pub combinator: Combinator,
    /// Noise frequency across the whole grid. `0.0` samples a single point.
    pub frequency: f64,
    /// Value produced by a noise sample of `0.0`.
    pub minimum: f64,
    /// Value produced by a noise sample of `1.0`.
    pub maximum: f64,
}

impl Layer {
    /// Convenience constructor.
    pub fn new(combinator: Combinator, frequency: f64, minimum: f64, maximum: f64) -> Self {
        Self {
            combinator,
            frequency,
            minimum,
            maximum,
        }
    }

    /// A layer that contributes the same `value` everywhere.
    pub fn constant(combinator: Combinator, value: f64) -> Self {
        Self::new(combinator, 0.0, value, value)
    }

    /// Rescale a unit noise sample into `[minimum, maximum]`.
    ///
    /// An inverted range collapses to `minimum` rather than flipping.
    #[inline]
    pub fn rescale(&self, noise: f64) -> f64 {
        self.minimum + noise * (self.maximum - self.minimum).max(0.0)
    }
}
