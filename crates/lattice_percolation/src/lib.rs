#![forbid(unsafe_code)]
//! lattice_percolation: site-percolation lattice construction and cluster discovery.
//!
//! Modules:
//! - lattice: site positions and symmetric adjacency for square, skewed-square,
//!   triangular and honeycomb geometries
//! - percolate: Bernoulli occupation sampling, cluster discovery with a stable
//!   bond reveal order, and the generation engine
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod lattice;
pub mod percolate;

/// Convenient re-exports for common types. Import with `use lattice_percolation::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::lattice::{
        GeometryKind, HoneycombLattice, LatticeLayout, Site, SkewedSquareLattice, SquareLattice,
        TriangularLattice,
    };
    pub use crate::percolate::cluster::find_clusters;
    pub use crate::percolate::engine::{
        build_generation, resample_generation, Generation, PercolationConfig, PercolationEngine,
    };
    pub use crate::percolate::occupation::sample_occupation;
    pub use crate::percolate::{Bond, Cluster};
}
