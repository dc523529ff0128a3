//! Eigenstates of the infinite square well, sampled on a uniform grid.
//!
//! For a well of width *a* starting at *x*₀, the basis states and their
//! (kinetic) energies in natural units (*ħ* = *m* = 1) are
//! ```text
//! ψ[n](x) = √(2/a) sin(n π (x - x₀) / a)
//!
//!         π² n²
//! E[n] = -------
//!         2 a²
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use tracing::debug;
use crate::{
    error::SolveError,
    grid::{ SampledFunction, half_open_grid },
    solve::SolveResult,
    utils::wf_dot,
};

/// Evaluate the `n`-th infinite square well eigenfunction for a well of width
/// `a` starting at the origin.
pub fn isw_wf(a: f64, n: usize, x: f64) -> f64 {
    (2.0 / a).sqrt() * (n as f64 * PI * x / a).sin()
}

/// Compute the `n`-th infinite square well eigenenergy for a well of width `a`.
pub fn isw_energy(a: f64, n: usize) -> f64 {
    (PI * n as f64 / a).powi(2) / 2.0
}

/// Convention relating a position in the basis to a quantum number.
///
/// Under `FromZero` the first basis state is the (identically zero) `n = 0`
/// state, so that a basis of size `M` holds `n = 0, ..., M`. Under `FromOne`
/// the basis holds `n = 1, ..., M + 1` and every state is non-trivial.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BasisIndexing {
    #[default]
    FromZero,
    FromOne,
}

impl BasisIndexing {
    /// Get the quantum number of the `i`-th basis state.
    pub fn quantum_number(self, i: usize) -> usize {
        match self {
            Self::FromZero => i,
            Self::FromOne => i + 1,
        }
    }
}

/// A single sampled basis state.
#[derive(Clone, Debug)]
pub struct BasisState {
    /// Quantum number
    pub n: usize,
    /// Kinetic energy
    pub e: f64,
    /// Sampled wavefunction
    pub wf: nd::Array1<f64>,
}

/// The first `basis_size + 1` infinite square well eigenstates, sampled on a
/// common grid, together with their analytic energies.
///
/// A `BasisSet` is immutable once created.
#[derive(Clone, Debug)]
pub struct BasisSet {
    x: nd::Array1<f64>,
    x_min: f64,
    well_width: f64,
    basis_size: usize,
    indexing: BasisIndexing,
    states: Vec<BasisState>,
}

impl BasisSet {
    /// Generate the basis for a well covering `[0, well_width)` sampled at
    /// `steps` points, with states `n = 0, ..., basis_size`.
    pub fn generate(well_width: f64, steps: usize, basis_size: usize)
        -> SolveResult<Self>
    {
        Self::generate_with(well_width, steps, basis_size, BasisIndexing::FromZero)
    }

    /// Like [`Self::generate`], but with an explicit indexing convention.
    pub fn generate_with(
        well_width: f64,
        steps: usize,
        basis_size: usize,
        indexing: BasisIndexing,
    ) -> SolveResult<Self>
    {
        Self::build(0.0, well_width, steps, basis_size, indexing)
    }

    /// Generate the basis on the grid of an already sampled function, taking
    /// the well to cover exactly the function's interval.
    pub fn on_grid(
        grid: &SampledFunction,
        basis_size: usize,
        indexing: BasisIndexing,
    ) -> SolveResult<Self>
    {
        Self::build(grid.x_min(), grid.width(), grid.len(), basis_size, indexing)
    }

    fn build(
        x_min: f64,
        well_width: f64,
        steps: usize,
        basis_size: usize,
        indexing: BasisIndexing,
    ) -> SolveResult<Self>
    {
        SolveError::check_width(well_width)?;
        SolveError::check_steps(steps)?;
        debug!(well_width, steps, basis_size, ?indexing, "generating basis");
        let x = half_open_grid(x_min, x_min + well_width, steps)?;
        let states: Vec<BasisState>
            = (0..=basis_size)
            .map(|i| {
                let n = indexing.quantum_number(i);
                BasisState {
                    n,
                    e: isw_energy(well_width, n),
                    wf: x.mapv(|xk| isw_wf(well_width, n, xk - x_min)),
                }
            })
            .collect();
        Ok(Self { x, x_min, well_width, basis_size, indexing, states })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the width of the well.
    pub fn well_width(&self) -> f64 { self.well_width }

    /// Get the left edge of the well.
    pub fn x_min(&self) -> f64 { self.x_min }

    /// Get the right edge of the well.
    pub fn x_max(&self) -> f64 { self.x_min + self.well_width }

    /// Get the number of grid points.
    pub fn steps(&self) -> usize { self.x.len() }

    /// Get the basis size `M`; the basis holds `M + 1` states.
    pub fn basis_size(&self) -> usize { self.basis_size }

    /// Get the indexing convention.
    pub fn indexing(&self) -> BasisIndexing { self.indexing }

    /// Get the number of basis states, `M + 1`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.states.len() }

    /// Get all basis states.
    pub fn states(&self) -> &[BasisState] { &self.states }

    /// Get the sampled wavefunction of the `i`-th state.
    ///
    /// *Panics if `i` is out of bounds*.
    pub fn wf(&self, i: usize) -> &nd::Array1<f64> { &self.states[i].wf }

    /// Get the kinetic energies of all states as an array.
    pub fn energies(&self) -> nd::Array1<f64> {
        self.states.iter().map(|s| s.e).collect()
    }

    /// Compute the average-value inner product of the `i`-th and `j`-th
    /// states.
    ///
    /// *Panics if either index is out of bounds*.
    pub fn inner(&self, i: usize, j: usize) -> f64 {
        wf_dot(self.wf(i), self.wf(j), self.well_width)
    }

    /// Compute the matrix of all average-value inner products.
    pub fn overlap(&self) -> nd::Array2<f64> {
        let n = self.len();
        nd::Array2::from_shape_fn((n, n), |(i, j)| self.inner(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energies_match_formula() {
        let basis = BasisSet::generate(2.0, 100, 3).unwrap();
        assert_eq!(basis.len(), 4);
        let expected = nd::array![
            0.0,
            PI.powi(2) / 8.0,
            PI.powi(2) / 2.0,
            9.0 * PI.powi(2) / 8.0,
        ];
        basis.energies().iter().zip(&expected)
            .for_each(|(e, ex)| assert!((e - ex).abs() < 1e-12));
    }

    #[test]
    fn zero_state_is_zero() {
        let basis = BasisSet::generate(1.0, 64, 2).unwrap();
        assert_eq!(basis.states()[0].n, 0);
        assert!(basis.wf(0).iter().all(|v| *v == 0.0));
        assert_eq!(basis.energies()[0], 0.0);
    }

    #[test]
    fn from_one_shifts_quantum_numbers() {
        let basis
            = BasisSet::generate_with(1.0, 64, 2, BasisIndexing::FromOne)
            .unwrap();
        let ns: Vec<usize> = basis.states().iter().map(|s| s.n).collect();
        assert_eq!(ns, vec![1, 2, 3]);
        assert!((basis.energies()[0] - PI.powi(2) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn orthonormal_on_fine_grid() {
        let basis
            = BasisSet::generate_with(1.5, 2000, 4, BasisIndexing::FromOne)
            .unwrap();
        let s = basis.overlap();
        for i in 0..basis.len() {
            for j in 0..basis.len() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((s[[i, j]] - expected).abs() < 1e-9, "S[{i}, {j}]");
            }
        }
    }

    #[test]
    fn overlap_error_shrinks_with_steps() {
        let err = |steps: usize| {
            let b = BasisSet::generate(1.0, steps, 3).unwrap();
            (b.inner(1, 1) - 1.0).abs() + b.inner(1, 2).abs()
        };
        assert!(err(1000) <= err(10) + 1e-12);
    }

    #[test]
    fn shifted_grid() {
        let f = SampledFunction::new_fn((2.0, 3.0, 50), |_| 0.0).unwrap();
        let basis = BasisSet::on_grid(&f, 2, BasisIndexing::FromZero).unwrap();
        assert_eq!(basis.steps(), 50);
        assert_eq!(basis.x_min(), 2.0);
        assert!(basis.wf(1)[0].abs() < 1e-12);
        assert!((basis.well_width() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn bad_parameters() {
        assert!(BasisSet::generate(0.0, 10, 2).unwrap_err().is_invalid_parameter());
        assert!(BasisSet::generate(1.0, 0, 2).unwrap_err().is_invalid_parameter());
    }
}
