//! Lattice geometries producing site positions and adjacency in a 2D domain.
//!
//! This module defines the [`LatticeLayout`] trait and the concrete geometries
//! used by the percolation pipeline to build the site arena prior to
//! occupation sampling. Sites are stored in one flat vector; neighbor
//! relations are indices into that vector, so adjacency never needs a
//! spatial lookup after construction.
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub mod honeycomb;
pub mod skewed_square;
pub mod square;
pub mod triangular;

pub use honeycomb::HoneycombLattice;
pub use skewed_square::SkewedSquareLattice;
pub use square::SquareLattice;
pub use triangular::TriangularLattice;

/// Extra whitespace kept between the lattice margin and the domain edge,
/// on top of the site radius.
pub(crate) const SITE_MARGIN_PAD: f32 = 5.0;

/// A single lattice position.
///
/// Identity is the site's index in the flat vector returned by
/// [`LatticeLayout::generate`]. Neighbor lists are fixed at construction
/// and symmetric; only `occupied` mutates afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Site {
    /// Plane coordinates of the site.
    pub position: Vec2,
    /// Whether the site is currently occupied.
    pub occupied: bool,
    /// Indices of lattice-adjacent sites, in construction order.
    pub neighbors: Vec<usize>,
}

impl Site {
    /// Create an unoccupied site with no neighbors yet.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            occupied: false,
            neighbors: Vec::new(),
        }
    }
}

/// Selector for the lattice geometries supported by the engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Regular grid, equal spacing on both axes, 4-neighbor adjacency.
    Square,
    /// Square adjacency with per-axis spacing, filling both axes.
    SkewedSquare,
    /// Equilateral triangular lattice, 6-neighbor adjacency.
    Triangular,
    /// Hexagonal tiling, 3-neighbor adjacency.
    Honeycomb,
}

impl GeometryKind {
    /// All supported kinds, in selector order.
    pub const ALL: [GeometryKind; 4] = [
        GeometryKind::Square,
        GeometryKind::SkewedSquare,
        GeometryKind::Triangular,
        GeometryKind::Honeycomb,
    ];

    /// The configuration selector string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Square => "square",
            GeometryKind::SkewedSquare => "skewed_square",
            GeometryKind::Triangular => "triangular",
            GeometryKind::Honeycomb => "honeycomb",
        }
    }

    /// Create the layout implementing this kind for an `nx` by `ny` grid.
    pub fn layout(self, nx: usize, ny: usize) -> Box<dyn LatticeLayout> {
        match self {
            GeometryKind::Square => Box::new(SquareLattice::new(nx, ny)),
            GeometryKind::SkewedSquare => Box::new(SkewedSquareLattice::new(nx, ny)),
            GeometryKind::Triangular => Box::new(TriangularLattice::new(nx, ny)),
            GeometryKind::Honeycomb => Box::new(HoneycombLattice::new(nx, ny)),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(GeometryKind::Square),
            "skewed_square" => Ok(GeometryKind::SkewedSquare),
            "triangular" => Ok(GeometryKind::Triangular),
            "honeycomb" => Ok(GeometryKind::Honeycomb),
            other => Err(Error::UnknownGeometry(other.to_owned())),
        }
    }
}

/// Trait for lattice construction.
///
/// Implementations map a grid of `nx` by `ny` logical positions into plane
/// coordinates fitted to `domain_extent` and populate the symmetric
/// neighbor lists. A non-positive or non-finite extent yields an empty
/// vector.
pub trait LatticeLayout: Send + Sync {
    /// Generate the full site arena for the given domain extent.
    fn generate(&self, domain_extent: Vector2<f32>) -> Vec<Site>;

    /// Visual site radius for this layout; the lattice keeps a margin of
    /// radius plus [`SITE_MARGIN_PAD`] from the domain edge.
    fn site_radius(&self, domain_extent: Vector2<f32>) -> f32;
}

/// Site radius derived from the grid cell size: a third of the tightest
/// cell dimension, with axis weights for layouts whose rows are denser
/// than their grid count suggests.
pub(crate) fn site_radius_weighted(extent: Vec2, nx: usize, ny: usize, wx: f32, wy: f32) -> f32 {
    if nx == 0 || ny == 0 {
        return 0.0;
    }
    (extent.x * wx / nx as f32).min(extent.y * wy / ny as f32) / 3.0
}

/// Step between `count` positions filling `span`; zero for a single position.
pub(crate) fn spacing(span: f32, count: usize) -> f32 {
    if count > 1 {
        span / (count - 1) as f32
    } else {
        0.0
    }
}

/// Start offset that centers `count` positions with step `step` in `span`.
///
/// For a span-filling step this collapses to the margin itself; a single
/// position lands on the span center.
pub(crate) fn centered_start(span: f32, step: f32, count: usize) -> f32 {
    (span - step * count.saturating_sub(1) as f32) * 0.5
}

/// Symmetrically link a site under construction to an already-stored one.
pub(crate) fn connect(sites: &mut [Site], site: &mut Site, id: usize, other: usize) {
    sites[other].neighbors.push(id);
    site.neighbors.push(other);
}

/// Returns true when the extent cannot host any sites.
pub(crate) fn degenerate_extent(extent: Vec2) -> bool {
    !extent.x.is_finite() || !extent.y.is_finite() || extent.x <= 0.0 || extent.y <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_selector_roundtrip() {
        for kind in GeometryKind::ALL {
            assert_eq!(kind.as_str().parse::<GeometryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_selector_is_rejected() {
        let err = "kagome".parse::<GeometryKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownGeometry(ref s) if s == "kagome"));
    }

    #[test]
    fn spacing_fills_span_between_first_and_last() {
        assert_eq!(spacing(90.0, 10), 10.0);
        assert_eq!(spacing(90.0, 2), 90.0);
    }

    #[test]
    fn spacing_degenerates_to_zero_for_single_position() {
        assert_eq!(spacing(90.0, 1), 0.0);
    }

    #[test]
    fn centered_start_centers_single_position() {
        assert_eq!(centered_start(100.0, 0.0, 1), 50.0);
    }

    #[test]
    fn centered_start_equals_margin_for_filled_span() {
        // 5 positions, step 20 -> natural extent 80, margin 10 on each side.
        assert_eq!(centered_start(100.0, 20.0, 5), 10.0);
    }

    #[test]
    fn site_radius_uses_tightest_axis() {
        let extent = Vec2::new(300.0, 100.0);
        let r = site_radius_weighted(extent, 10, 10, 1.0, 1.0);
        assert_eq!(r, 100.0 / 10.0 / 3.0);
    }

    #[test]
    fn connect_is_symmetric() {
        let mut sites = vec![Site::new(Vec2::ZERO)];
        let mut site = Site::new(Vec2::new(1.0, 0.0));
        connect(&mut sites, &mut site, 1, 0);
        sites.push(site);
        assert_eq!(sites[0].neighbors, vec![1]);
        assert_eq!(sites[1].neighbors, vec![0]);
    }

    fn generate_all(nx: usize, ny: usize, extent: Vec2) -> Vec<(GeometryKind, Vec<Site>)> {
        GeometryKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.layout(nx, ny).generate(extent.into())))
            .collect()
    }

    #[test]
    fn adjacency_is_symmetric_and_clean_for_every_kind() {
        for (kind, sites) in generate_all(5, 4, Vec2::new(300.0, 200.0)) {
            assert!(!sites.is_empty(), "{kind}: no sites");
            for (i, site) in sites.iter().enumerate() {
                let mut seen = std::collections::HashSet::new();
                for &n in &site.neighbors {
                    assert_ne!(n, i, "{kind}: site {i} lists itself");
                    assert!(n < sites.len(), "{kind}: neighbor {n} out of range");
                    assert!(seen.insert(n), "{kind}: duplicate neighbor {n} of site {i}");
                    assert!(
                        sites[n].neighbors.contains(&i),
                        "{kind}: edge {i}-{n} is not symmetric"
                    );
                }
            }
        }
    }

    #[test]
    fn site_coordinates_are_distinct_for_every_kind() {
        for (kind, sites) in generate_all(6, 5, Vec2::new(400.0, 300.0)) {
            for (i, a) in sites.iter().enumerate() {
                for b in sites.iter().skip(i + 1) {
                    assert!(
                        a.position.distance(b.position) > 1e-3,
                        "{kind}: coincident sites at {:?}",
                        a.position
                    );
                }
            }
        }
    }

    #[test]
    fn sites_fit_within_the_domain_for_every_kind() {
        let extent = Vec2::new(400.0, 250.0);
        for (kind, sites) in generate_all(7, 5, extent) {
            for site in &sites {
                assert!(
                    site.position.x >= 0.0 && site.position.x <= extent.x,
                    "{kind}: x out of domain"
                );
                assert!(
                    site.position.y >= 0.0 && site.position.y <= extent.y,
                    "{kind}: y out of domain"
                );
            }
        }
    }

    #[test]
    fn single_row_and_column_grids_degenerate_gracefully() {
        for (kind, sites) in generate_all(1, 1, Vec2::new(100.0, 100.0)) {
            // Role 0 columns of the honeycomb are empty at ny = 1.
            if kind != GeometryKind::Honeycomb {
                assert_eq!(sites.len(), 1, "{kind}");
            }
            assert!(sites.iter().all(|s| s.neighbors.is_empty()), "{kind}");
        }
        for (kind, sites) in generate_all(1, 6, Vec2::new(100.0, 100.0)) {
            assert!(!sites.is_empty(), "{kind}");
        }
        for (_, sites) in generate_all(6, 1, Vec2::new(100.0, 100.0)) {
            assert!(!sites.is_empty());
        }
    }
}
