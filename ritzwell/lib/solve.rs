//! Top-level solving routines for the one-dimensional, time-independent
//! Schrödinger equation (TISE) in a finite well via the Rayleigh-Ritz method.
//!
//! ```
//! use std::f64::consts::PI;
//! use ritzwell::{ potential::PotentialKind, solve::solve };
//!
//! // bare infinite square well: energies are -π²n²/2 for n = 0, 1, 2
//! let solved = solve(1.0, 250, PotentialKind::Square, 0.0, 2).unwrap();
//! let e = solved.energies();
//! assert!(e[0].abs() < 1e-12);
//! assert!((e[1] + PI.powi(2) / 2.0).abs() < 1e-9);
//! assert!((e[2] + 2.0 * PI.powi(2)).abs() < 1e-9);
//! ```

use ndarray as nd;
use tracing::debug;
use crate::{
    basis::{ BasisIndexing, BasisSet },
    eigen::decompose,
    error::SolveError,
    grid::SampledFunction,
    hamiltonian::assemble_cancellable,
    postprocess::{ Normalization, SolvedState, SortOrder, postprocess },
    potential::{ PotentialKind, sample },
    task::{ CancelToken, SolveTask },
};

pub type SolveResult<T> = Result<T, SolveError>;

/// Physical inputs to a single solve.
#[derive(Copy, Clone, Debug)]
pub struct SolveParams {
    /// Width `a` of the well, which covers `[0, a)`.
    pub well_width: f64,
    /// Number of grid points.
    pub steps: usize,
    /// Shape of the potential.
    pub kind: PotentialKind,
    /// Amplitude of the potential.
    pub amplitude: f64,
    /// Basis size `M`; `M + 1` basis states are used.
    pub basis_size: usize,
}

impl SolveParams {
    /// Create a new `SolveParams`.
    pub fn new(
        well_width: f64,
        steps: usize,
        kind: PotentialKind,
        amplitude: f64,
        basis_size: usize,
    ) -> Self
    {
        Self { well_width, steps, kind, amplitude, basis_size }
    }

    /// Check that the parameters describe a valid problem.
    pub fn check(&self) -> SolveResult<()> {
        SolveError::check_width(self.well_width)?;
        SolveError::check_steps(self.steps)?;
        SolveError::check_amplitude(self.amplitude)?;
        Ok(())
    }

    /// Sample the potential described by `self` over the well.
    pub fn potential(&self) -> SolveResult<SampledFunction> {
        sample(0.0, self.well_width, self.steps, self.kind, self.amplitude)
    }
}

/// Conventions applied when turning eigenpairs into eigenstates.
///
/// Defaults:
/// - `sort`: [`SortOrder::Descending`]
/// - `normalization`: [`Normalization::Unit`]
/// - `indexing`: [`BasisIndexing::FromZero`]
/// - `levels`: all states
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Order of returned states.
    pub sort: SortOrder,
    /// Rescaling of reconstructed eigenfunctions.
    pub normalization: Normalization,
    /// Quantum number of the first basis state.
    pub indexing: BasisIndexing,
    /// Keep only this many states (after sorting).
    pub levels: Option<usize>,
}

impl SolverConfig {
    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the normalization policy.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Set the basis indexing convention.
    pub fn with_indexing(mut self, indexing: BasisIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Keep only the first `levels` states.
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = Some(levels);
        self
    }
}

/// Output of a single solve: the potential and the ordered eigenstates.
#[derive(Clone, Debug)]
pub struct Solved {
    /// Sampled potential.
    pub potential: SampledFunction,
    /// Eigenstates, in the configured order.
    pub states: Vec<SolvedState>,
}

impl Solved {
    /// Get the number of states.
    pub fn len(&self) -> usize { self.states.len() }

    /// Return `true` if there are no states.
    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    /// Collect all energies into an array, in state order.
    pub fn energies(&self) -> nd::Array1<f64> {
        self.states.iter().map(|s| s.e).collect()
    }

    /// Stack all wavefunctions into a 2D array, one state per row.
    pub fn wfs(&self) -> nd::Array2<f64> {
        let rows = self.states.len();
        let cols = self.potential.len();
        let mut out: nd::Array2<f64> = nd::Array2::zeros((rows, cols));
        out.outer_iter_mut().zip(&self.states)
            .for_each(|(mut row, s)| row.assign(s.wf.get_y()));
        out
    }
}

/// Rayleigh-Ritz solver with a fixed set of conventions.
///
/// Every call returns a fresh [`Solved`]; the solver itself holds no results.
#[derive(Copy, Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a new `Solver`.
    pub fn new(config: SolverConfig) -> Self { Self { config } }

    /// Get the solver's configuration.
    pub fn config(&self) -> &SolverConfig { &self.config }

    /// Sample the potential and solve for its eigenstates.
    ///
    /// Parameters are validated before any matrix work begins.
    pub fn solve(&self, params: &SolveParams) -> SolveResult<Solved> {
        self.solve_cancellable(params, &CancelToken::new())
    }

    /// Like [`Self::solve`], but stop with [`SolveError::Cancelled`] once
    /// `cancel` is triggered.
    pub fn solve_cancellable(&self, params: &SolveParams, cancel: &CancelToken)
        -> SolveResult<Solved>
    {
        params.check()?;
        debug!(
            kind = params.kind.name(),
            amplitude = params.amplitude,
            "sampling potential"
        );
        let potential = params.potential()?;
        self.run(potential, params.basis_size, cancel)
    }

    /// Solve for the eigenstates of an already sampled potential. The well is
    /// taken to cover exactly the potential's interval.
    ///
    /// Fails with an invalid-parameter error if any sample is non-finite.
    pub fn solve_potential(&self, potential: SampledFunction, basis_size: usize)
        -> SolveResult<Solved>
    {
        self.run(potential, basis_size, &CancelToken::new())
    }

    /// Run [`Self::solve`] on a background thread.
    pub fn spawn(&self, params: SolveParams) -> SolveTask {
        let solver = *self;
        SolveTask::spawn(move |cancel| solver.solve_cancellable(&params, cancel))
    }

    fn run(
        &self,
        potential: SampledFunction,
        basis_size: usize,
        cancel: &CancelToken,
    ) -> SolveResult<Solved>
    {
        cancel.check()?;
        if let Some((k, v))
            = potential.get_y().iter().enumerate().find(|(_, v)| !v.is_finite())
        {
            return Err(SolveError::NonFinitePotential(k, *v));
        }
        let basis
            = BasisSet::on_grid(&potential, basis_size, self.config.indexing)?;
        let H = assemble_cancellable(&basis, &potential, cancel)?;
        cancel.check()?;
        let decomp = decompose(&H)?;
        cancel.check()?;
        let mut states = postprocess(
            &basis,
            &decomp,
            self.config.sort,
            self.config.normalization,
        )?;
        if let Some(levels) = self.config.levels {
            states.truncate(levels);
        }
        debug!(states = states.len(), "solve complete");
        Ok(Solved { potential, states })
    }
}

/// Master solving function, using the default [`SolverConfig`].
pub fn solve(
    well_width: f64,
    steps: usize,
    kind: PotentialKind,
    amplitude: f64,
    basis_size: usize,
) -> SolveResult<Solved>
{
    let params = SolveParams::new(well_width, steps, kind, amplitude, basis_size);
    Solver::default().solve(&params)
}

/// Caller-owned holder for the most recent successful solve.
///
/// Results are only replaced by successful solves, so a failure leaves the
/// previous result untouched.
#[derive(Clone, Debug, Default)]
pub struct ResultStore {
    last: Option<Solved>,
}

impl ResultStore {
    /// Create a new, empty store.
    pub fn new() -> Self { Self::default() }

    /// Record the outcome of a solve. On success the stored result is replaced
    /// and a reference to it returned; on failure the store is unchanged and
    /// the error is passed through.
    pub fn record(&mut self, res: SolveResult<Solved>) -> SolveResult<&Solved> {
        let solved = res?;
        Ok(self.last.insert(solved))
    }

    /// Get the most recent result, if any.
    pub fn latest(&self) -> Option<&Solved> { self.last.as_ref() }

    /// Return `true` if no result is held.
    pub fn is_empty(&self) -> bool { self.last.is_none() }

    /// Discard any held result.
    pub fn clear(&mut self) { self.last = None; }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn square_well_round_trip() {
        let solved = solve(1.0, 250, PotentialKind::Square, 0.0, 2).unwrap();
        assert_eq!(solved.len(), 3);
        assert_eq!(solved.potential.len(), 250);
        let e = solved.energies();
        let expected = [0.0, -PI.powi(2) / 2.0, -2.0 * PI.powi(2)];
        e.iter().zip(expected)
            .for_each(|(e, ex)| assert!((e - ex).abs() < 1e-9));
        assert_eq!(solved.wfs().dim(), (3, 250));
    }

    #[test]
    fn ascending_order() {
        let solver = Solver::new(
            SolverConfig::default().with_sort(SortOrder::Ascending));
        let params = SolveParams::new(1.0, 250, PotentialKind::Square, 0.0, 2);
        let e = solver.solve(&params).unwrap().energies();
        assert!(e[0] < e[1] && e[1] < e[2]);
        assert!(e[2].abs() < 1e-12);
    }

    #[test]
    fn levels_truncate() {
        let solver = Solver::new(SolverConfig::default().with_levels(2));
        let params = SolveParams::new(1.0, 100, PotentialKind::Linear, 1.0, 5);
        assert_eq!(solver.solve(&params).unwrap().len(), 2);
    }

    #[test]
    fn zero_steps_rejected() {
        let err = solve(1.0, 0, PotentialKind::Square, 0.0, 2).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = solve(-1.0, 10, PotentialKind::Square, 0.0, 2).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn non_finite_potential_rejected() {
        let err = solve(1.0, 10, PotentialKind::Linear, f64::NAN, 2).unwrap_err();
        assert!(matches!(err, SolveError::BadAmplitude(..)));
        let err = solve(1.0, 10, PotentialKind::Custom(|x| 1.0 / x), 1.0, 2)
            .unwrap_err();
        assert!(matches!(err, SolveError::NonFinitePotential(0, _)));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn cancelled_before_start() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let params = SolveParams::new(1.0, 100, PotentialKind::Square, 0.0, 3);
        let err
            = Solver::default().solve_cancellable(&params, &cancel).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn store_keeps_prior_result_on_failure() {
        let mut store = ResultStore::new();
        assert!(store.is_empty());
        let first = store.record(solve(1.0, 50, PotentialKind::Square, 0.0, 1))
            .unwrap()
            .energies();
        assert!(store.record(solve(1.0, 0, PotentialKind::Square, 0.0, 1)).is_err());
        assert_eq!(store.latest().unwrap().energies(), first);
        store.clear();
        assert!(store.latest().is_none());
    }

    #[test]
    fn store_passes_factorization_error_through() {
        use ndarray_linalg::error::LinalgError;
        let mut store = ResultStore::new();
        store.record(solve(1.0, 50, PotentialKind::Square, 0.0, 1)).unwrap();
        let failed: SolveResult<Solved> = Err(LinalgError::MemoryNotCont.into());
        let err = store.record(failed).unwrap_err();
        assert!(matches!(err, SolveError::Factorization(LinalgError::MemoryNotCont)));
        assert_eq!(store.latest().unwrap().len(), 2);
    }
}
