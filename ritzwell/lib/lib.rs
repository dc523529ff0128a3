#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of the
//! one-dimensional, time-independent Schrödinger equation in a finite well via
//! the Rayleigh-Ritz variational method.
//!
//! The unknown eigenfunctions are expanded in a finite basis of infinite square
//! well eigenstates; the Hamiltonian is assembled in that basis, diagonalized
//! with a general dense eigensolver, and the resulting eigenvectors are mapped
//! back to real space. The pipeline is split into stages:
//! - [`potential`]: sampling of simple potential shapes
//! - [`basis`]: infinite square well basis states and energies
//! - [`hamiltonian`]: Hamiltonian matrix assembly
//! - [`eigen`]: dense eigen-decomposition
//! - [`postprocess`]: sorting, reconstruction, and normalization
//! - [`solve`]: the whole pipeline in one call
//! - [`task`]: cancellable background solves
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod utils;
pub mod potential;
pub mod basis;
pub mod hamiltonian;
pub mod eigen;
pub mod postprocess;
pub mod solve;
pub mod task;

pub mod docs;

pub(crate) const DEF_IMAG_TOL: f64 = 1e-8;
pub(crate) const DEF_DOMAIN_TOL: f64 = 1e-12;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
