//! Assembly of the Hamiltonian matrix in the infinite square well basis.

use ndarray as nd;
use tracing::debug;
use crate::{
    Arr2,
    basis::BasisSet,
    error::{ LengthError, SolveError },
    grid::SampledFunction,
    solve::SolveResult,
    task::CancelToken,
    utils::wf_sandwich,
};

/// Assemble the dense Hamiltonian matrix for a sampled potential.
///
/// Matrix elements are
/// ```text
/// H[i, j] = ⟨ψ[i]|V|ψ[j]⟩ - δ[i, j] E[i]
/// ```
/// where the potential term is computed with the mean-value approximation over
/// the basis grid and `E[i]` is the analytic kinetic energy of the `i`-th
/// basis state. Since the basis states are already kinetic eigenstates, no
/// off-diagonal kinetic terms appear.
///
/// Only the upper triangle is computed; the lower triangle is mirrored, so the
/// result is exactly symmetric.
///
/// Fails with [`SolveError::DimensionMismatch`] if the potential and basis have
/// different sample counts, and with [`SolveError::DomainMismatch`] if they
/// cover different intervals.
pub fn assemble(basis: &BasisSet, V: &SampledFunction)
    -> SolveResult<nd::Array2<f64>>
{
    assemble_cancellable(basis, V, &CancelToken::new())
}

/// Like [`assemble`], but check `cancel` once per matrix row.
pub fn assemble_cancellable(
    basis: &BasisSet,
    V: &SampledFunction,
    cancel: &CancelToken,
) -> SolveResult<nd::Array2<f64>>
{
    LengthError::check_len(V.len(), basis.steps())?;
    if !V.spans(basis.x_min(), basis.x_max()) {
        return Err(SolveError::DomainMismatch(
            basis.x_min(), basis.x_max(), V.x_min(), V.x_max()));
    }
    let n = basis.len();
    let width = basis.well_width();
    let pot = V.get_y();
    debug!(dim = n, steps = basis.steps(), "assembling hamiltonian");
    let mut H: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for i in 0..n {
        cancel.check()?;
        let psi_i = basis.wf(i);
        for j in i..n {
            let vij = wf_sandwich(psi_i, pot, basis.wf(j), width);
            H[[i, j]] = vij;
            H[[j, i]] = vij;
        }
        H[[i, i]] -= basis.states()[i].e;
    }
    Ok(H)
}

/// Return `true` if `H` is square and `|H[i, j] - H[j, i]| <= tol` for all
/// `i, j`.
pub fn is_symmetric<S>(H: &Arr2<S>, tol: f64) -> bool
where S: nd::Data<Elem = f64>
{
    let (r, c) = H.dim();
    r == c
        && (0..r).all(|i| {
            (i + 1..c).all(|j| (H[[i, j]] - H[[j, i]]).abs() <= tol)
        })
}
