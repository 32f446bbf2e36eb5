//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [The Crank-Nicolson propagator](#the-crank-nicolson-propagator)
//! - [Unitarity](#unitarity)
//! - [The discrete Hamiltonian](#the-discrete-hamiltonian)
//! - [Measurement and collapse](#measurement-and-collapse)
//!
//! # Background
//! The time-dependent Schrödinger equation (TDSE) for a particle of mass *m*
//! moving in one dimension under a potential *V*(*x*) reads
//! ```text
//!      ∂ψ       ħ²  ∂²ψ
//! i ħ ---- = - --- ----- + V(x) ψ
//!      ∂t      2 m  ∂x²
//! ```
//! Discretizing the box `[x₀, x₀ + L]` over `N` points with spacing
//! *δx* = *L* / *N* turns ψ into a complex vector of length *N* and the
//! right-hand side into the action of a tridiagonal matrix, with the second
//! derivative approximated by the usual three-point stencil.
//!
//! # The Crank-Nicolson propagator
//! Forward-Euler integration of the discretized TDSE is unstable and the
//! backward (implicit) variant is lossy; the Crank-Nicolson scheme[^1]
//! averages the two, evaluating the Hamiltonian half at the current and half
//! at the next time step:
//! ```text
//!                 i δt                      i δt
//! ψ(t + δt) + ---- H ψ(t + δt) = ψ(t) - ---- H ψ(t)
//!              2 ħ                       2 ħ
//! ```
//! Collecting terms gives the linear system `A ψ(t + δt) = B ψ(t)` with
//! ```text
//! A[i][i] = 1 + 2 K + J V[i]      B[i][i] = 1 - 2 K - J V[i]
//! A[i][i±1] = -K                  B[i][i±1] = +K
//!
//!      δt i ħ            δt i
//! K = --------       J = ----
//!     4 m δx²            2 ħ
//! ```
//! and all other entries zero. The propagator advancing the state by one time
//! step is then the dense matrix `U = A⁻¹ B`. `A` is strictly diagonally
//! dominant for physically reasonable parameters, so the solve is
//! well-conditioned; it is performed via a single LU factorization of `A`
//! applied to each column of `B` rather than through an explicit inverse.
//!
//! # Unitarity
//! For real (more generally, Hermitian) potentials, both `2 K` and `J V[i]`
//! are purely imaginary, so `A = I + i C` and `B = I - i C` with `C`
//! Hermitian. `U` is therefore a Cayley transform of `C`,
//! ```text
//! U = (I + i C)⁻¹ (I - i C)
//! ```
//! which is exactly unitary: the scheme preserves ∫|ψ|² dx to floating-point
//! precision regardless of step size, with no secular norm drift over long
//! runs. This is the property that makes Crank-Nicolson the method of choice
//! here over explicit schemes of nominally higher order.
//!
//! # The discrete Hamiltonian
//! Since `U ≈ exp(-i H δt / ħ)`, the generator of time evolution can be
//! recovered from the propagator through the first-order quotient
//! ```text
//!      i ħ
//! H = ----- (U - I)
//!      δt
//! ```
//! `H` is Hermitian (and its eigenvalues real) up to the truncation error of
//! this quotient, which grows with *δt* / *δx*²; eigendecomposition of `H`
//! yields the energy eigenbasis used for expectation values and measurement
//! simulation. Note that the eigenpairs come back in whatever order the
//! underlying LAPACK driver produces them; nothing sorts them by energy.
//!
//! # Measurement and collapse
//! Given the eigendecomposition {(λₖ, vₖ)} of a Hermitian observable, the
//! probability of measuring λₖ on a normalized state ψ is the squared overlap
//! ```text
//! P(k) = |⟨ψ, vₖ⟩|²
//! ```
//! renormalized to sum to one. The expectation value of the observable is
//! Σₖ re(λₖ) P(k), and a projective measurement is simulated by drawing a
//! single index from P via inverse-CDF sampling and replacing ψ with the
//! drawn eigenvector.
//!
//! Momentum is handled in the Fourier basis instead: the discrete transform
//! of ψ gives amplitudes over the DFT frequency grid, each frequency *f*
//! corresponding to a momentum *p* = 2π *f* *ħ* / *L*. A momentum measurement
//! draws a frequency from the |Fψ|² distribution, zeroes every other Fourier
//! coefficient, and transforms back. Retaining a single discrete mode only
//! approximates a momentum eigenstate — strictly speaking no momentum
//! eigenstate exists for a particle confined to a finite box — and the
//! approximation is deliberate.
//!
//! [^1]: Newman, M. (2013). Partial differential equations. In *Computational
//!     Physics*, chapter 9, exercise 9.8. CreateSpace Independent Publishing
//!     Platform.
