#![allow(dead_code, non_snake_case)]

//! Provides constructs for numerical integration of the time-dependent,
//! one-dimensional Schrödinger equation for a particle in a box via the
//! Crank-Nicolson finite-difference scheme, together with simulated projective
//! measurement of energy and momentum observables.
//!
//! Provides implementations of the following:
//! - Construction of the discretized unitary time-evolution operator
//!   *U* = *A*⁻¹ *B* from an arbitrary (complex-valued) potential
//! - Time evolution of a wavefunction under repeated application of *U*
//! - Recovery of the discrete Hamiltonian *H* = *iħ* (*U* − *I*) / *δt* and
//!   its eigendecomposition
//! - Wavefunction normalization, expectation values against an arbitrary
//!   eigenbasis, momentum-space analysis, and stochastic collapse onto the
//!   eigenstate of a measured observable
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod evolve;
pub mod wavefunction;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
