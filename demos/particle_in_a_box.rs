use std::f64::consts::PI;
use num_complex::Complex64 as C64;
use rand::prelude as rnd;
use cnbox::{
    evolve::Propagator,
    grid::{ GridConfig, Profile },
    wavefunction::Wavefunction,
};

// evolve a gaussian wave packet in a harmonic well, then measure energy and
// momentum

fn main() {
    const N: usize = 128; // grid resolution
    const STEPS: usize = 2000; // evolution steps between reports
    const SIGMA: f64 = 0.05; // initial packet width
    const P0: f64 = 40.0 * PI; // initial packet momentum

    let grid = GridConfig::new(1.0, 1.0, 1.0, -0.5, 1.0, N, 1e-5);
    let prop
        = Propagator::new(grid, Profile::real_func(|x| x * x))
        .expect("propagator construction");

    let mut psi
        = Wavefunction::new(
            grid,
            Profile::func(|x| {
                C64::cis(P0 * x) * (-x * x / (2.0 * SIGMA * SIGMA)).exp()
            }),
        )
        .expect("waveform sampling");
    psi.normalize().expect("initial normalization");

    let eigen = prop.energy_eigen().expect("eigendecomposition");
    println!("initial <E> = {:.6e}", psi.expectation_value(&eigen));
    println!("initial <p> = {:.6e}", psi.expected_momentum());

    for _ in 0..STEPS {
        prop.apply(&mut psi).expect("time step");
    }
    println!("after {} steps:", STEPS);
    println!("  <E> = {:.6e}", psi.expectation_value(&eigen));
    println!("  <p> = {:.6e}", psi.expected_momentum());
    println!("  norm² = {:.12}", psi.norm_sqr());

    let mut rng = rnd::thread_rng();
    let p = psi.set_to_momentum_eigenstate(&mut rng)
        .expect("momentum measurement");
    println!("measured p = {:.6e}", p);

    let e = psi.set_to_eigenstate(&eigen, &mut rng)
        .expect("energy measurement");
    println!("measured E = {:.6e}", e);
    println!("post-measurement <E> = {:.6e}", psi.expectation_value(&eigen));
}
