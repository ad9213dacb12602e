//! Percolation pipeline over a constructed lattice: occupation sampling,
//! cluster discovery, and the generation engine.
use rand::rand_core::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod cluster;
pub mod engine;
pub mod occupation;

/// A lattice edge between two occupied sites.
///
/// Bonds are derived data: they are recomputed on every discovery run and
/// never survive a re-sample of the occupation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// Index of the site the bond was discovered from.
    pub site_a: usize,
    /// Index of the site the bond was discovered towards.
    pub site_b: usize,
    /// Position in the global discovery order; unique and strictly
    /// increasing across one whole run, never reset between clusters.
    pub discovery_index: usize,
}

/// A maximal connected component of occupied sites.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Cluster {
    /// Member site indices, in expansion order (seed first).
    pub sites: Vec<usize>,
    /// Member bonds, in discovery order. Both ends of every bond are
    /// members of this cluster.
    pub bonds: Vec<Bond>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
