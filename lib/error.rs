//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check_len<S, A>(a: &nd::ArrayBase<S, nd::Ix1>, n: usize)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let na = a.len();
        (na == n).then_some(()).ok_or(Self(na, n))
    }
}

/// Returned from propagator construction and application.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Returned when the Crank-Nicolson system matrix is singular or too
    /// ill-conditioned to invert meaningfully.
    #[error("near-singular system matrix; reciprocal condition number {0:.3e}")]
    Singular(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Returned from wavefunction operations.
#[derive(Debug, Error)]
pub enum WfError {
    /// Returned from [`normalize`][crate::wavefunction::Wavefunction::normalize]
    /// when the norm integral is zero or non-finite.
    #[error("cannot normalize; got squared norm {0:.3e}")]
    DegenerateNorm(f64),

    /// Returned when a measurement draw is attempted on an all-zero or
    /// non-finite probability distribution.
    #[error("cannot sample from a degenerate probability distribution")]
    DegenerateDistribution,

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}
