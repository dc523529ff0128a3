//! Sampling of simple potential shapes over the well.
//!
//! Every shape is scaled by a single amplitude parameter, so that an amplitude
//! of zero always gives the bare infinite square well.
//!
//! ```
//! use ritzwell::potential::{ PotentialKind, sample };
//!
//! let v = sample(0.0, 1.0, 100, PotentialKind::Linear, 2.0).unwrap();
//! assert_eq!(v.len(), 100);
//! assert_eq!(v.get_y()[0], 0.0);
//! assert!((v.get_y()[50] - 1.0).abs() < 1e-12);
//! ```

use crate::{ grid::SampledFunction, solve::SolveResult };

/// Specifies the shape of a potential inside the well.
#[derive(Copy, Clone, Debug)]
pub enum PotentialKind {
    /// Flat potential, `V(x) = amplitude`.
    Square,
    /// Linear ramp from 0 at the left edge, `V(x) = amplitude * s` with
    /// `s = (x - x_min) / (x_max - x_min)`.
    Linear,
    /// Parabola centered on the middle of the interval,
    /// `V(x) = amplitude * (s - 1/2)²`.
    Harmonic,
    /// Rectangular barrier of height `amplitude` over the middle third of the
    /// interval, zero elsewhere.
    Barrier,
    /// Arbitrary shape `V(x) = amplitude * f(x)`.
    Custom(fn(f64) -> f64),
}

impl PotentialKind {
    /// Evaluate the potential at `x` for a well covering `[x_min, x_max)`.
    pub fn eval(&self, x: f64, x_min: f64, x_max: f64, amplitude: f64) -> f64 {
        let s = (x - x_min) / (x_max - x_min);
        match self {
            Self::Square => amplitude,
            Self::Linear => amplitude * s,
            Self::Harmonic => amplitude * (s - 0.5).powi(2),
            Self::Barrier => {
                if (1.0 / 3.0..2.0 / 3.0).contains(&s) { amplitude } else { 0.0 }
            },
            Self::Custom(f) => amplitude * f(x),
        }
    }

    /// Get a short, human-readable name for the shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Linear => "linear",
            Self::Harmonic => "harmonic",
            Self::Barrier => "barrier",
            Self::Custom(_) => "custom",
        }
    }
}

/// Sample a potential of the given kind and amplitude over `steps` uniformly
/// spaced points covering `[x_min, x_max)`.
pub fn sample(
    x_min: f64,
    x_max: f64,
    steps: usize,
    kind: PotentialKind,
    amplitude: f64,
) -> SolveResult<SampledFunction>
{
    SampledFunction::new_fn(
        (x_min, x_max, steps),
        |x| kind.eval(x, x_min, x_max, amplitude),
    )
}
