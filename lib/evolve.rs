//! Construction and application of the Crank-Nicolson time-evolution operator
//! for the 1+1-dimensional (time-dependent) Schrödinger equation (TDSE), plus
//! recovery of the discrete Hamiltonian and its eigendecomposition.
//!
//! The Crank-Nicolson discretization of the TDSE over a uniform `N`-point
//! grid yields two tridiagonal matrices `A` and `B` such that
//! `A ψ(t + δt) = B ψ(t)`; the propagator is the dense matrix `U = A⁻¹ B`,
//! which is unitary by construction for Hermitian potentials. See
//! [`docs`][crate::docs] for the derivation.

use ndarray as nd;
use ndarray_linalg::{
    Eig,
    FactorizeInto,
    ReciprocalConditionNum,
    Solve,
};
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    error::{ EvolveError, LengthError },
    grid::{ GridConfig, Profile },
    wavefunction::Wavefunction,
};

pub type EvolveResult<T> = Result<T, EvolveError>;

/// The eigenvalues and eigenvectors of a dense complex matrix.
///
/// Eigenvectors are the columns of `vectors`, with `vectors.column(k)`
/// belonging to `values[k]`. The ordering of eigenpairs is whatever the
/// underlying LAPACK driver produces; it is **not** sorted by eigenvalue.
#[derive(Clone, Debug)]
pub struct EigenDecomposition {
    /// Eigenvalues. For Hermitian input these are real up to floating-point
    /// error.
    pub values: nd::Array1<C64>,
    /// Eigenvectors, one per column.
    pub vectors: nd::Array2<C64>,
}

impl EigenDecomposition {
    /// Number of eigenpairs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.values.len() }

    /// Iterate over `(eigenvalue, eigenvector)` pairs.
    pub fn pairs(&self)
        -> impl Iterator<Item = (C64, nd::ArrayView1<'_, C64>)> + '_
    {
        self.values.iter().copied().zip(self.vectors.columns())
    }
}

/// Compute the eigendecomposition of a dense complex matrix.
///
/// For Hermitian input, the eigenvalues are real up to floating-point error
/// and the eigenvectors form an orthonormal basis. No ordering of the
/// eigenpairs is guaranteed.
pub fn eigendecompose<S>(M: &Arr2<S>) -> EvolveResult<EigenDecomposition>
where S: nd::Data<Elem = C64>
{
    let (values, vectors) = M.eig()?;
    Ok(EigenDecomposition { values, vectors })
}

/// Assemble the Crank-Nicolson system matrices for potential `V` and solve
/// `A U = B` for the propagator `U`.
///
/// `V` must already carry any desired scale factor. `A` is strictly
/// diagonally dominant for physically reasonable `δt`, `m`, and `δx`, so the
/// solve is performed through a single LU factorization rather than an
/// explicit inverse; a near-singular `A` is surfaced as
/// [`EvolveError::Singular`] instead of returning garbage.
pub fn build_propagator<S>(grid: &GridConfig, V: &Arr1<S>)
    -> EvolveResult<nd::Array2<C64>>
where S: nd::Data<Elem = C64>
{
    let n = grid.N();
    LengthError::check_len(V, n)?;
    let K: C64 = C64::i() * grid.dt() * grid.hbar()
        / (4.0 * grid.m() * grid.dx().powi(2));
    let J: C64 = C64::i() * grid.dt() / (2.0 * grid.hbar());

    let mut A: nd::Array2<C64> = nd::Array2::zeros((n, n));
    let mut B: nd::Array2<C64> = nd::Array2::zeros((n, n));
    nd::Zip::from(A.diag_mut()).and(B.diag_mut()).and(V)
        .for_each(|Ak, Bk, Vk| {
            *Ak = 1.0 + 2.0 * K + J * *Vk;
            *Bk = 1.0 - 2.0 * K - J * *Vk;
        });
    A.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(-K);
    A.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(-K);
    B.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(K);
    B.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(K);

    let rcond = A.rcond()?;
    if !rcond.is_finite() || rcond < f64::EPSILON {
        return Err(EvolveError::Singular(rcond));
    }
    let lu = A.factorize_into()?;
    let mut U: nd::Array2<C64> = nd::Array2::zeros((n, n));
    for (Bcol, mut Ucol) in B.columns().into_iter().zip(U.columns_mut()) {
        let x = lu.solve(&Bcol)?;
        Ucol.assign(&x);
    }
    Ok(U)
}

/// The unitary operator advancing a wavefunction by one time step.
///
/// The wrapped matrix is immutable once built for a given potential; repeated
/// [`apply`][Self::apply] calls drive the time evolution.
#[derive(Clone, Debug)]
pub struct Propagator {
    grid: GridConfig,
    U: nd::Array2<C64>,
}

impl Propagator {
    /// Build the propagator for a potential given as a [`Profile`].
    ///
    /// The potential is multiplied by the grid's [scale
    /// factor][GridConfig::scale] before the system matrices are assembled.
    pub fn new<F>(grid: GridConfig, potential: Profile<F>)
        -> EvolveResult<Self>
    where F: FnMut(f64) -> C64
    {
        let scale = grid.scale();
        let mut V = potential.sample(&grid)?;
        V.map_inplace(|Vk| { *Vk *= scale; });
        let U = build_propagator(&grid, &V)?;
        Ok(Self { grid, U })
    }

    /// Get the grid configuration this propagator was built for.
    pub fn grid(&self) -> &GridConfig { &self.grid }

    /// Get a reference to the propagator matrix.
    pub fn matrix(&self) -> &nd::Array2<C64> { &self.U }

    /// Advance a wavefunction by one time step, *mutating it in place*.
    ///
    /// This is the only operation in the crate that mutates a wavefunction's
    /// state besides the collapse operations on
    /// [`Wavefunction`][crate::wavefunction::Wavefunction] itself.
    pub fn apply(&self, psi: &mut Wavefunction) -> EvolveResult<()> {
        LengthError::check_len(&psi.x, self.grid.N())?;
        psi.x = self.U.dot(&psi.x);
        Ok(())
    }

    /// Compute the discrete Hamiltonian `H = iħ (U − I) / δt`.
    ///
    /// `H` approximates the generator of time evolution and is Hermitian up
    /// to the truncation error of the finite-difference quotient, which
    /// shrinks with `δt / δx²`.
    pub fn hamiltonian(&self) -> nd::Array2<C64> {
        let ihbar_dt: C64 = C64::i() * self.grid.hbar() / self.grid.dt();
        let mut H = self.U.to_owned();
        H.diag_mut().iter_mut().for_each(|Hk| { *Hk -= 1.0; });
        H.map_inplace(|Hk| { *Hk *= ihbar_dt; });
        H
    }

    /// Compute the energy eigenbasis, i.e. the eigendecomposition of
    /// [`hamiltonian`][Self::hamiltonian].
    ///
    /// Eigenpairs are not sorted by energy.
    pub fn energy_eigen(&self) -> EvolveResult<EigenDecomposition> {
        eigendecompose(&self.hamiltonian())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::{ GridConfig, Profile };

    fn zero_potential(grid: GridConfig) -> Propagator {
        let n = grid.N();
        Propagator::new(grid, Profile::samples(nd::Array1::zeros(n))).unwrap()
    }

    #[test]
    fn unitary_4x4_zero_potential() {
        let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, 4, 1e-5);
        let prop = zero_potential(grid);
        let U = prop.matrix();
        assert_eq!(U.dim(), (4, 4));
        let UhU = U.t().mapv(|u| u.conj()).dot(U);
        let eye: nd::Array2<C64> = nd::Array2::eye(4);
        nd::Zip::from(&UhU).and(&eye)
            .for_each(|p, i| assert!((p - i).norm() < 1e-8));
    }

    #[test]
    fn unitary_with_potential() {
        let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, 16, 1e-5)
            .with_scale(1.0);
        let prop = Propagator::new(
            grid, Profile::real_func(|x| 1e3 * x * x)).unwrap();
        let U = prop.matrix();
        let UhU = U.t().mapv(|u| u.conj()).dot(U);
        let eye: nd::Array2<C64> = nd::Array2::eye(16);
        nd::Zip::from(&UhU).and(&eye)
            .for_each(|p, i| assert!((p - i).norm() < 1e-10));
    }

    #[test]
    fn hamiltonian_hermitian() {
        // keep δt/δx² small so the finite-difference generator stays close to
        // the true (Hermitian) Hamiltonian
        let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, 8, 1e-6)
            .with_scale(1.0);
        let prop = Propagator::new(
            grid, Profile::real_func(|x| x * x)).unwrap();
        let H = prop.hamiltonian();
        let Hh = H.t().mapv(|h| h.conj());
        let hmax = H.iter().map(|h| h.norm()).fold(0.0, f64::max);
        nd::Zip::from(&H).and(&Hh)
            .for_each(|h, hh| assert!((h - hh).norm() < 1e-3 * hmax));

        let eigen = prop.energy_eigen().unwrap();
        let emax = eigen.values.iter().map(|e| e.norm()).fold(0.0, f64::max);
        eigen.values.iter()
            .for_each(|e| assert!(e.im.abs() < 1e-3 * emax));
    }

    #[test]
    fn eigenvectors_orthonormal() {
        let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, 8, 1e-5);
        let prop = zero_potential(grid);
        let eigen = prop.energy_eigen().unwrap();
        assert_eq!(eigen.len(), 8);
        for (k, (_, vk)) in eigen.pairs().enumerate() {
            for (l, (_, vl)) in eigen.pairs().enumerate() {
                let d: C64
                    = vk.iter().zip(&vl)
                    .map(|(a, b)| a.conj() * *b)
                    .sum();
                let expected = if k == l { 1.0 } else { 0.0 };
                assert!((d.norm() - expected).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn wrong_length_potential() {
        let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, 4, 1e-5);
        let res = Propagator::new(
            grid, Profile::samples(nd::Array1::zeros(3)));
        assert!(matches!(res, Err(EvolveError::Length(..))));
    }
}
