//! Physical and numerical constants for a single simulation run, plus the
//! input forms accepted for potentials and waveforms.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::error::LengthError;

/// Physical constants and discretization parameters for a particle-in-a-box
/// simulation.
///
/// The spatial step `dx = L / N` and the default potential scale factor are
/// derived at construction and cannot be set independently. A single
/// `GridConfig` is shared (by copy) between every component of one simulation;
/// `N` is fixed for the lifetime of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    // mass
    m: f64,
    // reduced Planck constant
    hbar: f64,
    // charge; reserved, unused in the current dynamics
    e: f64,
    // left edge of the box
    x0: f64,
    // length of the box
    L: f64,
    // number of spatial grid points
    N: usize,
    // spatial stepsize, L / N
    dx: f64,
    // time stepsize
    dt: f64,
    // potential scale factor
    scale: f64,
}

impl Default for GridConfig {
    fn default() -> Self { Self::new(1.0, 1.0, 1.0, -0.5, 1.0, 512, 1e-5) }
}

impl GridConfig {
    /// Create a new `GridConfig`, deriving `dx` and the potential scale
    /// factor.
    ///
    /// The default scale factor is tuned inversely to `N` so that potentials
    /// expressed in box units keep the same effective magnitude when the grid
    /// is refined.
    ///
    /// *Panics if `N < 2`, or if any of `m`, `hbar`, or `L` is non-positive,
    /// or if `dt` is zero or non-finite*.
    pub fn new(
        m: f64,
        hbar: f64,
        e: f64,
        x0: f64,
        L: f64,
        N: usize,
        dt: f64,
    ) -> Self
    {
        assert!(N >= 2, "grid must have at least 2 points; got {}", N);
        assert!(m > 0.0, "mass must be positive; got {}", m);
        assert!(hbar > 0.0, "hbar must be positive; got {}", hbar);
        assert!(L > 0.0, "box length must be positive; got {}", L);
        assert!(
            dt != 0.0 && dt.is_finite(),
            "time step must be nonzero and finite; got {}", dt,
        );
        let dx = L / N as f64;
        let scale = (128.0 / N as f64) * 5e5;
        Self { m, hbar, e, x0, L, N, dx, dt, scale }
    }

    /// Like [`Self::new`], but with an explicit potential scale factor
    /// replacing the derived default.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Mass.
    pub fn m(&self) -> f64 { self.m }

    /// Reduced Planck constant.
    pub fn hbar(&self) -> f64 { self.hbar }

    /// Charge. Reserved; does not enter the current dynamics.
    pub fn e(&self) -> f64 { self.e }

    /// Left edge of the box.
    pub fn x0(&self) -> f64 { self.x0 }

    /// Length of the box.
    pub fn L(&self) -> f64 { self.L }

    /// Number of spatial grid points.
    pub fn N(&self) -> usize { self.N }

    /// Spatial stepsize, `L / N`.
    pub fn dx(&self) -> f64 { self.dx }

    /// Time stepsize.
    pub fn dt(&self) -> f64 { self.dt }

    /// Potential scale factor.
    pub fn scale(&self) -> f64 { self.scale }

    /// Generate the coordinate array, `N` points evenly spaced over
    /// `[x0, x0 + L]` (endpoints included).
    pub fn x(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(self.x0, self.x0 + self.L, self.N)
    }
}

/// A complex-valued quantity defined over the spatial grid, given either as a
/// function of position or as a pre-sampled array.
///
/// Both potentials and initial waveforms are accepted in this form. The
/// variant is resolved into a concrete array exactly once, at construction of
/// the consuming component; downstream code never re-inspects the original
/// form.
pub enum Profile<F>
where F: FnMut(f64) -> C64
{
    /// A function of position, to be sampled over the grid.
    Func(F),
    /// Pre-sampled values; must have length `N`.
    Samples(nd::Array1<C64>),
}

impl<F> Profile<F>
where F: FnMut(f64) -> C64
{
    /// Create a `Profile` from a complex-valued function of position.
    pub fn func(f: F) -> Self { Self::Func(f) }

    /// Resolve `self` into an array sampled over the grid of `grid`.
    pub fn sample(self, grid: &GridConfig)
        -> Result<nd::Array1<C64>, LengthError>
    {
        match self {
            Self::Func(mut f) => Ok(grid.x().mapv(|xk| f(xk))),
            Self::Samples(values) => {
                LengthError::check_len(&values, grid.N())?;
                Ok(values)
            },
        }
    }
}

impl Profile<fn(f64) -> C64> {
    /// Create a `Profile` from pre-sampled values.
    pub fn samples(values: nd::Array1<C64>) -> Self { Self::Samples(values) }

    /// Create a `Profile` from a real-valued function of position.
    pub fn real_func<G>(mut g: G) -> Profile<impl FnMut(f64) -> C64>
    where G: FnMut(f64) -> f64
    {
        Profile::Func(move |x| C64::from(g(x)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_complex::Complex64 as C64;

    #[test]
    fn derived_quantities() {
        let grid = GridConfig::default();
        assert_eq!(grid.N(), 512);
        assert_eq!(grid.dx(), 1.0 / 512.0);
        assert_eq!(grid.scale(), (128.0 / 512.0) * 5e5);
        let grid = GridConfig::new(1.0, 1.0, 1.0, 0.0, 2.0, 128, 1e-5);
        assert_eq!(grid.dx(), 2.0 / 128.0);
        assert_eq!(grid.scale(), 5e5);
    }

    #[test]
    fn coordinate_array() {
        let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, 5, 1e-5);
        let x = grid.x();
        assert_eq!(x.len(), 5);
        assert!((x[0] - (-0.5)).abs() < 1e-15);
        assert!((x[4] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn profile_sampling() {
        let grid = GridConfig::new(1.0, 1.0, 1.0, 0.0, 1.0, 4, 1e-5);
        let v = Profile::real_func(|x| x * x).sample(&grid).unwrap();
        assert_eq!(v.len(), 4);
        assert!((v[3].re - 1.0).abs() < 1e-15);

        let v = Profile::samples(ndarray::Array1::from_elem(4, C64::i()))
            .sample(&grid)
            .unwrap();
        assert_eq!(v.len(), 4);

        let bad = Profile::samples(ndarray::Array1::from_elem(3, C64::i()))
            .sample(&grid);
        assert!(bad.is_err());
    }

    #[test]
    #[should_panic]
    fn bad_grid_panics() { let _ = GridConfig::new(1.0, 1.0, 1.0, 0.0, 1.0, 1, 1e-5); }
}
