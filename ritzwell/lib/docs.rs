//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Matrix elements](#matrix-elements)
//! - [Diagonalization](#diagonalization)
//! - [Reconstruction](#reconstruction)
//! - [Conventions](#conventions)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation (TISE)
//! amounts to finding eigenpairs of the Hamiltonian operator,
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(x) + V(x) ψ(x) = E ψ(x)
//!   2 m ∂x²
//! ```
//! for a particle confined to a well `[0, a)` (i.e. with infinite walls at the
//! edges) under some conservative potential *V*(*x*). All quantities in this
//! crate are given in natural units with *ħ* = *m* = 1.
//!
//! When *V* = 0, the problem is the infinite square well, whose solutions are
//! known analytically:
//! ```text
//! ψ[n](x) = √(2/a) sin(n π x / a)
//!
//!         π² n²
//! E[n] = -------
//!         2 a²
//! ```
//! These form a complete, orthonormal set on `[0, a)`, so any solution to the
//! full problem can be written as
//! ```text
//! ψ(x) = Σ_n c[n] ψ[n](x)
//! ```
//! The Rayleigh-Ritz method[^1] truncates this expansion to a finite number of
//! terms *M* + 1 and projects the TISE onto the truncated basis, which turns
//! the differential eigenproblem into a finite matrix eigenproblem
//! ```text
//! H c = E c
//!
//! H[i, j] = ⟨ψ[i]|H|ψ[j]⟩
//! ```
//! The eigenvalues of the truncated problem are variational: as *M* grows,
//! each converges to the corresponding exact energy.
//!
//! # Matrix elements
//! The kinetic part of *H* is diagonal in this basis, with entries *E*\[*n*\],
//! because the basis states are themselves kinetic eigenstates. The potential
//! part is generally dense:
//! ```text
//!                  a
//! ⟨ψ[i]|V|ψ[j]⟩ = ∫ ψ[i](x) V(x) ψ[j](x) dx
//!                  0
//! ```
//! This integral is approximated by the mean-value theorem over a uniform grid
//! of *N* points `x[k] = k a / N`,
//! ```text
//!                  a
//! ⟨ψ[i]|V|ψ[j]⟩ ≈ --- Σ_k ψ[i](x[k]) V(x[k]) ψ[j](x[k])
//!                  N
//! ```
//! whose accuracy improves as *N* grows. On such a grid the sampled basis
//! states happen to be exactly orthonormal under the same approximation for
//! 0 < *n* < *N*.
//!
//! The assembled matrix is
//! ```text
//! H[i, j] = ⟨ψ[i]|V|ψ[j]⟩ - δ[i, j] E[i]
//! ```
//! Note the sign on the kinetic term. It is fixed by construction, so that with
//! *V* = 0 the eigenvalues are exactly -*E*\[*n*\]; see
//! [Conventions](#conventions) for how this interacts with sorting.
//!
//! # Diagonalization
//! *H* is real and symmetric, but it is diagonalized with the general real
//! eigensolver (LAPACK `dgeev`) rather than a symmetric one. Any asymmetry
//! introduced by rounding then shows up as (small) imaginary parts in the
//! eigenvalues, which are reported, instead of being hidden by a solver that
//! reads only one triangle of the matrix.
//!
//! # Reconstruction
//! Each eigenvector *c* is mapped back to real space on the basis grid,
//! ```text
//! f(x[k]) = Σ_n Re(c[n]) ψ[n](x[k])
//! ```
//! after which the overall sign is chosen so that Σ_k *f*(*x*\[*k*\]) ≥ 0 and
//! the amplitude is rescaled using the mean-square value
//! ```text
//!       a
//! N² = --- Σ_k f(x[k])²
//!       N
//! ```
//!
//! # Conventions
//! Three conventions are left explicit, as parameters of
//! [`SolverConfig`][crate::solve::SolverConfig]:
//! - Sort order ([`SortOrder`][crate::postprocess::SortOrder]): eigenpairs are
//!   returned in descending order by default. Combined with the sign of the
//!   kinetic term above, this places the *n* = 0 state of the bare well first.
//! - Normalization ([`Normalization`][crate::postprocess::Normalization]):
//!   eigenfunctions are divided by *N* (unit norm) by default. Dividing by *N*²
//!   instead is available, but does not give a unit-norm function.
//! - Basis indexing ([`BasisIndexing`][crate::basis::BasisIndexing]): the basis
//!   holds *n* = 0, ..., *M* by default, the first state being identically
//!   zero. Alternatively it can hold *n* = 1, ..., *M* + 1.
//!
//! [^1]: W. Ritz, "Über eine neue Methode zur Lösung gewisser Variationsprobleme
//! der mathematischen Physik." J. Reine Angew. Math. **135** 1-61 (1909).
