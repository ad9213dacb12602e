//! Independent Bernoulli occupation of lattice sites.
use rand::rand_core::RngCore;

use crate::lattice::Site;
use crate::percolate::rand01;

/// Re-draw every site's occupation flag with probability `p`.
///
/// Each site gets an independent Bernoulli(p) draw. The call is safely
/// repeatable against the same geometry without reallocating anything;
/// previously computed bonds and clusters are invalidated and must be
/// rediscovered afterwards.
pub fn sample_occupation(sites: &mut [Site], p: f32, rng: &mut dyn RngCore) {
    debug_assert!(
        (0.0..=1.0).contains(&p),
        "occupation probability out of range"
    );
    for site in sites.iter_mut() {
        site.occupied = rand01(rng) < p;
    }
}
