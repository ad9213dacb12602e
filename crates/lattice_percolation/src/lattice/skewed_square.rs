//! Square-adjacency lattice stretched to fill both axes independently.
use glam::Vec2;
use mint::Vector2;

use crate::lattice::{
    centered_start, connect, degenerate_extent, site_radius_weighted, spacing, LatticeLayout, Site,
    SITE_MARGIN_PAD,
};

/// `nx` by `ny` grid with per-axis spacing and square 4-neighbor adjacency.
///
/// Unlike [`crate::lattice::SquareLattice`] this layout does not preserve
/// the grid's aspect ratio: both axes are filled to the margin, so cells
/// become rectangles whenever the domain and grid aspects differ.
#[derive(Debug, Clone)]
pub struct SkewedSquareLattice {
    /// Number of grid columns.
    pub nx: usize,
    /// Number of grid rows.
    pub ny: usize,
}

impl SkewedSquareLattice {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }
}

impl LatticeLayout for SkewedSquareLattice {
    fn generate(&self, domain_extent: Vector2<f32>) -> Vec<Site> {
        let extent = Vec2::from(domain_extent);
        let (nx, ny) = (self.nx, self.ny);
        if degenerate_extent(extent) || nx == 0 || ny == 0 {
            return Vec::new();
        }

        let margin = self.site_radius(domain_extent) + SITE_MARGIN_PAD;
        let dx = spacing(extent.x - 2.0 * margin, nx);
        let dy = spacing(extent.y - 2.0 * margin, ny);
        let x0 = centered_start(extent.x, dx, nx);
        let y0 = centered_start(extent.y, dy, ny);

        let mut sites = Vec::with_capacity(nx * ny);
        for x in 0..nx {
            for y in 0..ny {
                let id = sites.len();
                let mut site = Site::new(Vec2::new(x0 + dx * x as f32, y0 + dy * y as f32));
                if x != 0 {
                    connect(&mut sites, &mut site, id, (x - 1) * ny + y);
                }
                if y != 0 {
                    connect(&mut sites, &mut site, id, x * ny + (y - 1));
                }
                sites.push(site);
            }
        }
        sites
    }

    fn site_radius(&self, domain_extent: Vector2<f32>) -> f32 {
        site_radius_weighted(Vec2::from(domain_extent), self.nx, self.ny, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(w: f32, h: f32) -> Vector2<f32> {
        Vec2::new(w, h).into()
    }

    #[test]
    fn fills_both_axes_with_distinct_spacing() {
        let lattice = SkewedSquareLattice::new(4, 3);
        let sites = lattice.generate(extent(300.0, 100.0));
        let dx = sites[3].position.x - sites[0].position.x; // (1,0) - (0,0)
        let dy = sites[1].position.y - sites[0].position.y; // (0,1) - (0,0)
        assert!(dx > dy);

        let margin = lattice.site_radius(extent(300.0, 100.0)) + SITE_MARGIN_PAD;
        let max_x = sites.iter().map(|s| s.position.x).fold(f32::NEG_INFINITY, f32::max);
        let max_y = sites.iter().map(|s| s.position.y).fold(f32::NEG_INFINITY, f32::max);
        assert!((max_x - (300.0 - margin)).abs() < 1e-3);
        assert!((max_y - (100.0 - margin)).abs() < 1e-3);
    }

    #[test]
    fn adjacency_matches_square_rule() {
        let sites = SkewedSquareLattice::new(3, 3).generate(extent(300.0, 100.0));
        assert_eq!(sites[0].neighbors.len(), 2);
        assert_eq!(sites[4].neighbors.len(), 4);
        assert!(sites[4].neighbors.contains(&1));
        assert!(sites[4].neighbors.contains(&3));
        assert!(sites[4].neighbors.contains(&5));
        assert!(sites[4].neighbors.contains(&7));
    }

    #[test]
    fn empty_for_degenerate_extent() {
        let lattice = SkewedSquareLattice::new(3, 3);
        assert!(lattice.generate(extent(-5.0, 100.0)).is_empty());
        assert!(lattice.generate(extent(100.0, 0.0)).is_empty());
    }
}
