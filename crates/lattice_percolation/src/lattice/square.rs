//! Regular square lattice with 4-neighbor adjacency.
use glam::Vec2;
use mint::Vector2;

use crate::lattice::{
    centered_start, connect, degenerate_extent, site_radius_weighted, spacing, LatticeLayout, Site,
    SITE_MARGIN_PAD,
};

/// Regular `nx` by `ny` grid with equal spacing on both axes.
///
/// Site `(x, y)` lives at index `x * ny + y`; adjacency links left, right,
/// up and down wherever in bounds. The grid is uniformly scaled so the
/// relatively wider side fills its axis and the other axis is centered.
#[derive(Debug, Clone)]
pub struct SquareLattice {
    /// Number of grid columns.
    pub nx: usize,
    /// Number of grid rows.
    pub ny: usize,
}

impl SquareLattice {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }
}

impl LatticeLayout for SquareLattice {
    fn generate(&self, domain_extent: Vector2<f32>) -> Vec<Site> {
        let extent = Vec2::from(domain_extent);
        let (nx, ny) = (self.nx, self.ny);
        if degenerate_extent(extent) || nx == 0 || ny == 0 {
            return Vec::new();
        }

        let margin = self.site_radius(domain_extent) + SITE_MARGIN_PAD;
        let width_bound = (nx - 1) as f32 * extent.y >= (ny - 1) as f32 * extent.x;
        let step = if width_bound && nx > 1 {
            spacing(extent.x - 2.0 * margin, nx)
        } else if ny > 1 {
            spacing(extent.y - 2.0 * margin, ny)
        } else if nx > 1 {
            spacing(extent.x - 2.0 * margin, nx)
        } else {
            0.0
        };
        let x0 = centered_start(extent.x, step, nx);
        let y0 = centered_start(extent.y, step, ny);

        let mut sites = Vec::with_capacity(nx * ny);
        for x in 0..nx {
            for y in 0..ny {
                let id = sites.len();
                let mut site =
                    Site::new(Vec2::new(x0 + step * x as f32, y0 + step * y as f32));
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
