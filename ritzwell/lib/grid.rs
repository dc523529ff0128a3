//! Uniform coordinate grids and real functions sampled over them.

use ndarray as nd;
use crate::{
    DEF_DOMAIN_TOL,
    error::SolveError,
    solve::SolveResult,
    utils::mean_value,
};

/// Generate `steps` uniformly spaced coordinates covering the half-open
/// interval `[x_min, x_max)`, i.e. `x[k] = x_min + k * (x_max - x_min) / steps`.
pub fn half_open_grid(x_min: f64, x_max: f64, steps: usize)
    -> SolveResult<nd::Array1<f64>>
{
    SolveError::check_interval(x_min, x_max)?;
    SolveError::check_steps(steps)?;
    let dx = (x_max - x_min) / steps as f64;
    Ok((0..steps).map(|k| x_min + k as f64 * dx).collect())
}

/// A function sampled over a uniform, half-open coordinate grid.
///
/// Arrays borrowed from this type are guaranteed to have the same length and to
/// be sampled over a grid with uniform spacing covering `[x_min, x_max)`. This
/// is used both for potentials and for reconstructed wavefunctions.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledFunction {
    // coordinate array
    x: nd::Array1<f64>,
    // function values
    y: nd::Array1<f64>,
    // grid spacing
    dx: f64,
    // interval bounds
    x_min: f64,
    x_max: f64,
}

impl SampledFunction {
    /// Sample a function over `steps` points covering `[x_min, x_max)`.
    pub fn new_fn<F>(xargs: (f64, f64, usize), f: F) -> SolveResult<Self>
    where F: FnMut(f64) -> f64
    {
        let (x_min, x_max, steps) = xargs;
        let x = half_open_grid(x_min, x_max, steps)?;
        let y: nd::Array1<f64> = x.mapv(f);
        let dx = (x_max - x_min) / steps as f64;
        Ok(Self { x, y, dx, x_min, x_max })
    }

    /// Wrap a bare array of samples, generating the coordinate grid from its
    /// length.
    pub fn new_array(x_min: f64, x_max: f64, y: nd::Array1<f64>)
        -> SolveResult<Self>
    {
        let steps = y.len();
        let x = half_open_grid(x_min, x_max, steps)?;
        let dx = (x_max - x_min) / steps as f64;
        Ok(Self { x, y, dx, x_min, x_max })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the sampled values.
    pub fn get_y(&self) -> &nd::Array1<f64> { &self.y }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the (inclusive) lower bound of the interval.
    pub fn x_min(&self) -> f64 { self.x_min }

    /// Get the (exclusive) upper bound of the interval.
    pub fn x_max(&self) -> f64 { self.x_max }

    /// Get the width of the interval.
    pub fn width(&self) -> f64 { self.x_max - self.x_min }

    /// Get the number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.y.len() }

    /// Approximate the integral of the function over its interval by the
    /// mean-value theorem.
    pub fn integral(&self) -> f64 { mean_value(&self.y, self.width()) }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Return `true` if `self` covers `[x_min, x_max)`, up to a tolerance
    /// relative to the interval width.
    pub fn spans(&self, x_min: f64, x_max: f64) -> bool {
        let tol = DEF_DOMAIN_TOL * self.width().abs().max(1.0);
        (self.x_min - x_min).abs() <= tol && (self.x_max - x_max).abs() <= tol
    }

    /// Decompose into coordinate and value arrays.
    pub fn into_arrays(self) -> (nd::Array1<f64>, nd::Array1<f64>) {
        (self.x, self.y)
    }
}
