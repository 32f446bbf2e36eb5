//! Miscellaneous numerical tools: trapezoidal integration, wavefunction inner
//! products, and FFT plumbing.

use ndarray::{ self as nd, Ix1 };
use rustfft as fft;
use num_complex::Complex64 as C64;

/// Integrate a real-valued sampled function using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S>(y: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    (dx / 2.0) * (y[0] + 2.0 * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the squared norm ∫|ψ|² dx of a wavefunction via the trapezoidal
/// rule.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    let n: usize = q.len();
    (dx / 2.0) * (
        q[0].norm_sqr()
        + 2.0 * q.iter().skip(1).take(n - 2)
            .map(|qk| qk.norm_sqr())
            .sum::<f64>()
        + q[n - 1].norm_sqr()
    )
}

/// Calculate the bare (non-integrated) inner product ⟨q, p⟩ = Σ q*ₖ pₖ of two
/// state vectors.
pub fn wf_overlap<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
) -> C64
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    q.iter().zip(p)
        .map(|(qk, pk)| qk.conj() * *pk)
        .sum()
}

/// Generate the array of frequency-space coordinates to accompany a FFT of `n`
/// points with sample spacing `d`.
///
/// Frequencies follow the usual DFT ordering: non-negative frequencies first
/// in increasing order, then negative frequencies increasing toward zero.
pub fn fft_freq(n: usize, d: f64) -> nd::Array1<f64> {
    let m = if n % 2 == 0 { n / 2 } else { (n + 1) / 2 };
    (0..n)
        .map(|k| {
            let k = if k < m { k as f64 } else { k as f64 - n as f64 };
            k / (n as f64 * d)
        })
        .collect()
}

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = x.len();
    let mut f = x.to_owned();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(f.as_slice_mut().unwrap());
    f
}

/// Perform the one-dimensional, complex-valued inverse FFT.
pub fn ifft<S>(f: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = f.len();
    let mut x = f.to_owned();
    let mut plan = fft::FftPlanner::new();
    let ifft_plan = plan.plan_fft_inverse(n);
    ifft_plan.process(x.as_slice_mut().unwrap());
    let n = n as f64;
    x.map_inplace(|xk| { *xk /= n; });
    x
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray as nd;

    #[test]
    fn trapz_linear() {
        let y: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        let i = trapz(&y, 0.1);
        assert!((i - 0.5).abs() < 1e-12);
    }

    #[test]
    fn fft_freq_convention() {
        let f = fft_freq(4, 0.25);
        let expected = [0.0, 1.0, -2.0, -1.0];
        f.iter().zip(expected)
            .for_each(|(fk, ek)| assert!((fk - ek).abs() < 1e-12));
        let f = fft_freq(5, 0.2);
        let expected = [0.0, 1.0, 2.0, -2.0, -1.0];
        f.iter().zip(expected)
            .for_each(|(fk, ek)| assert!((fk - ek).abs() < 1e-12));
    }

    #[test]
    fn fft_roundtrip() {
        let x: nd::Array1<C64>
            = (0..8)
            .map(|k| C64::new(k as f64, -(k as f64) / 2.0))
            .collect();
        let y = ifft(&fft(&x));
        x.iter().zip(&y)
            .for_each(|(xk, yk)| assert!((xk - yk).norm() < 1e-12));
    }

    #[test]
    fn overlap_conjugates_left() {
        let q: nd::Array1<C64> = nd::array![C64::i(), C64::new(1.0, 0.0)];
        let p: nd::Array1<C64> = nd::array![C64::i(), C64::i()];
        let d = wf_overlap(&q, &p);
        assert!((d - C64::new(1.0, 1.0)).norm() < 1e-12);
    }
}
