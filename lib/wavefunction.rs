//! A complex-valued wavefunction over the spatial grid, with normalization,
//! expectation values, momentum-space analysis, and simulated measurement
//! collapse.
//!
//! Measurement draws are weighted random choices performed via inverse-CDF
//! sampling over the relevant probability distribution. All stochastic
//! operations take an explicit [`Rng`]; pass a seeded generator (e.g.
//! [`rand::rngs::StdRng`]) for reproducible runs.

use std::f64::consts::TAU;
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use rand::Rng;
use crate::{
    error::{ LengthError, WfError },
    evolve::EigenDecomposition,
    grid::{ GridConfig, Profile },
    utils::{ fft, fft_freq, ifft, wf_norm, wf_overlap },
};

pub type WfResult<T> = Result<T, WfError>;

// single weighted draw via inverse-CDF sampling over `prob`
//
// returns `None` when `prob` has no positive, finite weight
fn sample_weighted<R>(prob: &nd::Array1<f64>, rng: &mut R) -> Option<usize>
where R: Rng
{
    let total: f64 = prob.sum();
    if !total.is_finite() || total <= 0.0 { return None; }
    let u: f64 = rng.gen::<f64>() * total;
    let mut acc: f64 = 0.0;
    let mut last: Option<usize> = None;
    for (k, &p) in prob.iter().enumerate() {
        if p <= 0.0 { continue; }
        acc += p;
        last = Some(k);
        if u < acc { return Some(k); }
    }
    // `u` can escape the final bin through roundoff in the running sum
    last
}

/// A wavefunction sampled over the spatial grid.
///
/// Operations are ordered by physical necessity rather than an enforced state
/// machine: [`normalize`][Self::normalize] should be called after any
/// construction or collapse that does not already guarantee unit norm before
/// expectation values or further evolution are physically meaningful.
#[derive(Clone, Debug)]
pub struct Wavefunction {
    pub(crate) grid: GridConfig,
    pub(crate) x: nd::Array1<C64>,
}

impl Wavefunction {
    /// Create a new `Wavefunction` from a waveform given as a [`Profile`].
    pub fn new<F>(grid: GridConfig, waveform: Profile<F>) -> WfResult<Self>
    where F: FnMut(f64) -> C64
    {
        let x = waveform.sample(&grid)?;
        Ok(Self { grid, x })
    }

    /// Get the grid configuration.
    pub fn grid(&self) -> &GridConfig { &self.grid }

    /// Get a reference to the position-basis amplitudes.
    pub fn psi(&self) -> &nd::Array1<C64> { &self.x }

    /// Compute the squared norm ∫|ψ|² dx via trapezoidal integration.
    pub fn norm_sqr(&self) -> f64 { wf_norm(&self.x, self.grid.dx()) }

    /// Compute the position-space probability density |ψ|².
    pub fn probability_density(&self) -> nd::Array1<f64> {
        self.x.mapv(|xk| xk.norm_sqr())
    }

    /// Normalize `self` such that ∫|ψ|² dx = 1.
    ///
    /// A zero or non-finite norm integral is an error; `self` is left
    /// untouched in that case.
    pub fn normalize(&mut self) -> WfResult<()> {
        let norm2 = self.norm_sqr();
        if !norm2.is_finite() || norm2 <= 0.0 {
            return Err(WfError::DegenerateNorm(norm2));
        }
        let norm = norm2.sqrt();
        self.x.map_inplace(|xk| { *xk /= norm; });
        Ok(())
    }

    // |⟨ψ, v_k⟩|² for each eigenvector column, renormalized to sum to 1
    // unless all overlaps vanish
    fn eigenbasis_probs(&self, vectors: &nd::Array2<C64>)
        -> nd::Array1<f64>
    {
        let mut prob: nd::Array1<f64>
            = vectors.columns().into_iter()
            .map(|v| wf_overlap(&self.x, &v).norm_sqr())
            .collect();
        let pmax = prob.iter().copied().fold(0.0, f64::max);
        if pmax != 0.0 && pmax.is_finite() {
            let total = prob.sum();
            prob.map_inplace(|p| { *p /= total; });
        }
        prob
    }

    // |F ψ|² over the frequency grid, renormalized to sum to 1 unless all
    // components vanish; also returns the transform itself
    fn momentum_probs(&self) -> (nd::Array1<C64>, nd::Array1<f64>) {
        let F = fft(&self.x);
        let mut prob: nd::Array1<f64> = F.mapv(|Fk| Fk.norm_sqr());
        let pmax = prob.iter().copied().fold(0.0, f64::max);
        if pmax != 0.0 && pmax.is_finite() {
            let total = prob.sum();
            prob.map_inplace(|p| { *p /= total; });
        }
        (F, prob)
    }

    /// Compute the expectation value of a Hermitian observable given its
    /// eigendecomposition, Σₖ re(λₖ) |⟨ψ, vₖ⟩|².
    ///
    /// If every overlap probability collapses to zero (a degenerate numerical
    /// case), this returns `0.0` and prints a warning rather than failing, so
    /// that isolated degeneracies do not abort a long time-stepping run.
    ///
    /// *Panics if the eigenvector length does not match the grid*.
    pub fn expectation_value(&self, eigen: &EigenDecomposition) -> f64 {
        assert_eq!(eigen.vectors.nrows(), self.x.len());
        let prob = self.eigenbasis_probs(&eigen.vectors);
        let pmax = prob.iter().copied().fold(0.0, f64::max);
        if pmax == 0.0 || !pmax.is_finite() {
            println!(
                "wavefunction::expectation_value: WARNING: degenerate \
                probability distribution; returning 0"
            );
            return 0.0;
        }
        eigen.values.iter().zip(&prob)
            .map(|(ek, pk)| ek.re * *pk)
            .sum()
    }

    /// Compute the momentum expectation value via the discrete Fourier
    /// transform, Σₖ pₖ |Fₖ|² with pₖ = 2π fₖ ħ / L over the DFT frequency
    /// grid.
    ///
    /// Returns `0.0` for an all-zero wavefunction.
    pub fn expected_momentum(&self) -> f64 {
        let (_, prob) = self.momentum_probs();
        let freq = fft_freq(self.grid.N(), self.grid.dx());
        freq.iter().zip(&prob)
            .map(|(fk, pk)| TAU * fk * self.grid.hbar() / self.grid.L() * pk)
            .sum()
    }

    /// Simulate a momentum measurement: draw a frequency from the
    /// momentum-space probability distribution, zero every other Fourier
    /// coefficient, inverse-transform, and renormalize. Returns the measured
    /// momentum value.
    ///
    /// Retaining a single discrete Fourier mode only approximates a momentum
    /// eigenstate of the boxed particle; true momentum eigenstates are not
    /// defined on a finite interval.
    pub fn set_to_momentum_eigenstate<R>(&mut self, rng: &mut R)
        -> WfResult<f64>
    where R: Rng
    {
        let (mut F, prob) = self.momentum_probs();
        let k = sample_weighted(&prob, rng)
            .ok_or(WfError::DegenerateDistribution)?;
        F.iter_mut().enumerate()
            .for_each(|(i, Fi)| { if i != k { *Fi = C64::zero(); } });
        let collapsed = ifft(&F);
        let prev = std::mem::replace(&mut self.x, collapsed);
        if let Err(err) = self.normalize() {
            self.x = prev;
            return Err(err);
        }
        let freq = fft_freq(self.grid.N(), self.grid.dx());
        Ok(TAU * freq[k] * self.grid.hbar() / self.grid.L())
    }

    /// Simulate a measurement of an arbitrary Hermitian observable: draw an
    /// eigenstate index from the overlap probability distribution, set `self`
    /// to the drawn eigenvector, and renormalize. Returns the real part of
    /// the corresponding eigenvalue.
    ///
    /// Fails if the eigenvector length does not match the grid.
    pub fn set_to_eigenstate<R>(
        &mut self,
        eigen: &EigenDecomposition,
        rng: &mut R,
    ) -> WfResult<f64>
    where R: Rng
    {
        LengthError::check_len(&self.x, eigen.vectors.nrows())?;
        let prob = self.eigenbasis_probs(&eigen.vectors);
        let k = sample_weighted(&prob, rng)
            .ok_or(WfError::DegenerateDistribution)?;
        let prev
            = std::mem::replace(&mut self.x, eigen.vectors.column(k).to_owned());
        if let Err(err) = self.normalize() {
            self.x = prev;
            return Err(err);
        }
        Ok(eigen.values[k].re)
    }
}
