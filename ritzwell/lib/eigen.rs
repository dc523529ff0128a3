//! General dense eigen-decomposition of real square matrices.
//!
//! The Hamiltonian is symmetric by construction, but it is diagonalized here
//! with the general (non-symmetric) LAPACK driver `?geev` rather than `?syev`,
//! so that any residual asymmetry shows up as small imaginary parts instead of
//! being silently ignored.
//!
//! `?geev` returns real eigenvectors in a packed form: for a conjugate pair of
//! eigenvalues at indices `j, j + 1`, columns `j` and `j + 1` hold the real and
//! imaginary parts of `v[j]`, with `v[j + 1]` its conjugate. The
//! [`ndarray_linalg::Eig`] wrapper performs the workspace-size query and
//! unpacks these columns into true complex vectors, so every column of
//! [`EigenDecomposition::vecs`] is a proper (complex) right eigenvector.

use ndarray as nd;
use ndarray_linalg::Eig;
use num_complex::Complex64 as C64;
use tracing::{ debug, warn };
use crate::{
    Arr2,
    error::SolveError,
    solve::SolveResult,
    DEF_IMAG_TOL,
};

/// Eigenvalues and right eigenvectors of a real square matrix.
#[derive(Clone, Debug)]
pub struct EigenDecomposition {
    /// Real parts of the eigenvalues.
    pub re: nd::Array1<f64>,
    /// Imaginary parts of the eigenvalues.
    pub im: nd::Array1<f64>,
    /// Right eigenvectors, stored as columns in the same order as the
    /// eigenvalues.
    pub vecs: nd::Array2<C64>,
}

impl EigenDecomposition {
    /// Get the number of eigenpairs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.re.len() }

    /// Get the `j`-th eigenvector.
    ///
    /// *Panics if `j` is out of bounds*.
    pub fn vec(&self, j: usize) -> nd::ArrayView1<'_, C64> {
        self.vecs.column(j)
    }

    /// Get the real part of the `j`-th eigenvector.
    ///
    /// *Panics if `j` is out of bounds*.
    pub fn vec_re(&self, j: usize) -> nd::Array1<f64> {
        self.vecs.column(j).mapv(|c| c.re)
    }

    /// Get the largest imaginary part magnitude among the eigenvalues.
    pub fn max_imag(&self) -> f64 {
        self.im.iter().fold(0.0, |acc, im| acc.max(im.abs()))
    }

    /// Get the spectral radius, i.e. the largest eigenvalue magnitude.
    pub fn spectral_radius(&self) -> f64 {
        self.re.iter().zip(&self.im)
            .fold(0.0, |acc, (re, im)| acc.max(re.hypot(*im)))
    }
}

/// Compute all eigenvalues and right eigenvectors of a real square matrix.
///
/// Fails with [`SolveError::NotSquare`] for non-square input and with
/// [`SolveError::Factorization`] if LAPACK reports a nonzero status.
pub fn decompose<S>(H: &Arr2<S>) -> SolveResult<EigenDecomposition>
where S: nd::Data<Elem = f64>
{
    let (r, c) = H.dim();
    if r != c { return Err(SolveError::NotSquare(r, c)); }
    debug!(dim = r, "diagonalizing");
    let (evals, vecs): (nd::Array1<C64>, nd::Array2<C64>) = H.eig()?;
    let decomp = EigenDecomposition {
        re: evals.mapv(|l| l.re),
        im: evals.mapv(|l| l.im),
        vecs,
    };
    let max_imag = decomp.max_imag();
    if max_imag > DEF_IMAG_TOL * decomp.spectral_radius().max(1.0) {
        warn!(
            max_imag,
            "eigenvalues have non-negligible imaginary parts; \
            hamiltonian may be asymmetric"
        );
    } else {
        debug!(max_imag, "eigenvalues are real");
    }
    Ok(decomp)
}
