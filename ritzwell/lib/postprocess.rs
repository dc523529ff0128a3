//! Turning raw eigenpairs into sorted, normalized real-space eigenstates.
//!
//! Each eigenvector `c` of the Hamiltonian holds the expansion coefficients of
//! an approximate eigenfunction in the square well basis,
//! ```text
//! f(x[k]) = Σ_n Re(c[n]) ψ[n](x[k])
//! ```
//! which is then given a conventional overall sign and rescaled according to a
//! [`Normalization`] policy.

use std::cmp;
use ndarray as nd;
use tracing::{ debug, trace, warn };
use crate::{
    Arr1,
    basis::BasisSet,
    eigen::EigenDecomposition,
    error::LengthError,
    grid::SampledFunction,
    solve::SolveResult,
    utils::wf_norm,
};

/// Order in which eigenpairs are returned.
///
/// Since the Hamiltonian carries the kinetic energies with a negative sign,
/// `Descending` places the `n = 0` (least negative) state first when the
/// potential vanishes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest eigenvalue first.
    #[default]
    Descending,
    /// Smallest eigenvalue first.
    Ascending,
}

impl SortOrder {
    /// Compare two eigenvalues according to `self`.
    pub fn compare(self, a: f64, b: f64) -> cmp::Ordering {
        match self {
            Self::Descending => b.total_cmp(&a),
            Self::Ascending => a.total_cmp(&b),
        }
    }
}

/// Rescaling applied to reconstructed eigenfunctions.
///
/// All policies use the mean-square value `N² = a/N Σ f²`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Divide by `N²`. This does not produce a unit-norm function.
    MeanSquare,
    /// Divide by `N`, so that `a/N Σ f² = 1`.
    #[default]
    Unit,
    /// Leave amplitudes as reconstructed.
    Raw,
}

impl Normalization {
    /// Get the factor that samples are divided by for a function with
    /// mean-square value `norm2`.
    pub fn divisor(self, norm2: f64) -> f64 {
        match self {
            Self::MeanSquare => norm2,
            Self::Unit => norm2.sqrt(),
            Self::Raw => 1.0,
        }
    }
}

/// A single approximate eigenstate in the potential.
#[derive(Clone, Debug)]
pub struct SolvedState {
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub wf: SampledFunction,
    /// Expansion coefficients in the basis
    pub coeffs: nd::Array1<f64>,
}

impl SolvedState {
    /// Compare two `SolvedState`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Compute the indices of eigenpairs in the requested order.
///
/// The sort is stable, so degenerate eigenvalues keep the solver's order.
pub fn sort_indices(decomp: &EigenDecomposition, order: SortOrder)
    -> Vec<usize>
{
    let mut idx: Vec<usize> = (0..decomp.len()).collect();
    idx.sort_by(|&l, &r| order.compare(decomp.re[l], decomp.re[r]));
    idx
}

/// Form the linear combination `Σ_n c[n] ψ[n]` of basis states on the basis
/// grid.
///
/// Fails if the number of coefficients differs from the number of basis
/// states.
pub fn reconstruct<S>(basis: &BasisSet, coeffs: &Arr1<S>)
    -> SolveResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    LengthError::check_len(coeffs.len(), basis.len())?;
    let mut f: nd::Array1<f64> = nd::Array1::zeros(basis.steps());
    coeffs.iter().zip(basis.states())
        .for_each(|(c, state)| f.scaled_add(*c, &state.wf));
    Ok(f)
}

/// Fix the overall sign of a reconstructed function and rescale it in place.
///
/// The sign is flipped if the raw sum of samples is negative. A function with
/// zero mean-square value (e.g. the `n = 0` basis state) is left unscaled.
/// Returns `true` if the sign was flipped.
pub fn normalize(f: &mut nd::Array1<f64>, width: f64, policy: Normalization)
    -> bool
{
    let flip = f.sum() < 0.0;
    if flip { f.mapv_inplace(|fk| -fk); }
    let norm2 = wf_norm(f, width);
    if norm2 == 0.0 {
        if policy != Normalization::Raw {
            warn!("skipping normalization of an identically zero function");
        }
        return flip;
    }
    let div = policy.divisor(norm2);
    f.mapv_inplace(|fk| fk / div);
    flip
}

/// Sort eigenpairs, reconstruct their eigenfunctions on the basis grid, and
/// normalize them.
///
/// Only the real parts of the eigenvectors are used.
pub fn postprocess(
    basis: &BasisSet,
    decomp: &EigenDecomposition,
    order: SortOrder,
    policy: Normalization,
) -> SolveResult<Vec<SolvedState>>
{
    LengthError::check_len(decomp.len(), basis.len())?;
    debug!(states = decomp.len(), ?order, ?policy, "post-processing eigenpairs");
    let x_min = basis.x_min();
    let width = basis.well_width();
    sort_indices(decomp, order).into_iter()
        .map(|j| -> SolveResult<SolvedState> {
            let mut coeffs = decomp.vec_re(j);
            let mut f = reconstruct(basis, &coeffs)?;
            if normalize(&mut f, width, policy) {
                coeffs.mapv_inplace(|c| -c);
            }
            let e = decomp.re[j];
            trace!(j, e, "reconstructed eigenstate");
            let wf = SampledFunction::new_array(x_min, x_min + width, f)?;
            Ok(SolvedState { e, wf, coeffs })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64 as C64;
    use super::*;
    use crate::basis::BasisIndexing;

    fn toy_decomp(re: Vec<f64>, vecs: nd::Array2<f64>) -> EigenDecomposition {
        let n = re.len();
        EigenDecomposition {
            re: nd::Array1::from(re),
            im: nd::Array1::zeros(n),
            vecs: vecs.mapv(C64::from),
        }
    }

    #[test]
    fn sort_orders() {
        let d = toy_decomp(vec![-1.0, 3.0, 0.5], nd::Array2::eye(3));
        assert_eq!(sort_indices(&d, SortOrder::Descending), vec![1, 2, 0]);
        assert_eq!(sort_indices(&d, SortOrder::Ascending), vec![0, 2, 1]);
    }

    #[test]
    fn reconstruct_unit_coefficient_gives_basis_state() {
        let basis = BasisSet::generate(1.0, 100, 2).unwrap();
        let f = reconstruct(&basis, &nd::array![1.0, 0.0, 0.0]).unwrap();
        assert_eq!(&f, basis.wf(0));
        let f = reconstruct(&basis, &nd::array![0.0, 1.0, 0.0]).unwrap();
        assert_eq!(&f, basis.wf(1));
    }

    #[test]
    fn reconstruct_is_linear() {
        let basis = BasisSet::generate(1.0, 100, 2).unwrap();
        let c = nd::array![0.3, -1.2, 2.5];
        let f = reconstruct(&basis, &c).unwrap();
        let direct = basis.wf(0) * 0.3 + basis.wf(1) * -1.2 + basis.wf(2) * 2.5;
        assert!(f.iter().zip(&direct).all(|(a, b)| (a - b).abs() < 1e-12));
        assert!(reconstruct(&basis, &nd::array![1.0, 0.0]).is_err());
    }

    #[test]
    fn normalization_policies() {
        let basis
            = BasisSet::generate_with(2.0, 400, 0, BasisIndexing::FromOne)
            .unwrap();
        let raw: nd::Array1<f64> = basis.wf(0) * 3.0;
        // mean-square value of 3 ψ₁ is 9

        let mut f = raw.clone();
        normalize(&mut f, 2.0, Normalization::Unit);
        assert!((wf_norm(&f, 2.0) - 1.0).abs() < 1e-10);

        let mut f = raw.clone();
        normalize(&mut f, 2.0, Normalization::MeanSquare);
        assert!(f.iter().zip(&raw).all(|(a, b)| (a - b / 9.0).abs() < 1e-10));

        let mut f = raw.clone();
        normalize(&mut f, 2.0, Normalization::Raw);
        assert_eq!(f, raw);
    }

    #[test]
    fn sign_is_flipped_for_negative_sum() {
        let basis
            = BasisSet::generate_with(1.0, 100, 0, BasisIndexing::FromOne)
            .unwrap();
        let mut f: nd::Array1<f64> = -basis.wf(0);
        assert!(normalize(&mut f, 1.0, Normalization::Raw));
        assert!(f.sum() > 0.0);
        assert_eq!(&f, basis.wf(0));
    }

    #[test]
    fn zero_function_left_alone() {
        let mut f: nd::Array1<f64> = nd::Array1::zeros(10);
        normalize(&mut f, 1.0, Normalization::Unit);
        assert!(f.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn postprocess_toy() {
        let basis = BasisSet::generate(1.0, 100, 2).unwrap();
        let d = toy_decomp(vec![-4.0, 0.0, -1.0], nd::Array2::eye(3));
        let states
            = postprocess(&basis, &d, SortOrder::Descending, Normalization::Unit)
            .unwrap();
        let energies: Vec<f64> = states.iter().map(|s| s.e).collect();
        assert_eq!(energies, vec![0.0, -1.0, -4.0]);
        // eigenvalue 0 belongs to the second column, i.e. ψ₁
        assert_eq!(states[0].coeffs, nd::array![0.0, 1.0, 0.0]);
        assert!((wf_norm(states[0].wf.get_y(), 1.0) - 1.0).abs() < 1e-10);
        // eigenvalue -1 belongs to ψ₂
        assert!((wf_norm(states[1].wf.get_y(), 1.0) - 1.0).abs() < 1e-10);
        // eigenvalue -4 belongs to ψ₀, which is identically zero
        assert!(states[2].wf.get_y().iter().all(|v| *v == 0.0));
        assert_eq!(states[0].wf.len(), 100);
        assert_eq!(states[0].cmp_energy(&states[1]), Some(cmp::Ordering::Greater));
    }
}
