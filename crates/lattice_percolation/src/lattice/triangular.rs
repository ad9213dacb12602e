//! Equilateral triangular lattice with parity-offset columns.
use glam::Vec2;
use mint::Vector2;

use crate::lattice::{
    centered_start, connect, degenerate_extent, site_radius_weighted, spacing, LatticeLayout, Site,
    SITE_MARGIN_PAD,
};

/// Triangular lattice on an `nx` by `ny` grid of columns and rows.
///
/// Odd columns hold one row fewer and sit half a row-spacing lower, so
/// site centers are equilateral. Each site connects to its vertical
/// neighbors in the same column and to the two diagonal sites in the
/// adjacent column picked by column parity, giving interior sites six
/// neighbors.
///
/// Column `x` starts at flat index `x * ny - floor(x / 2)`.
#[derive(Debug, Clone)]
pub struct TriangularLattice {
    /// Number of grid columns.
    pub nx: usize,
    /// Number of grid rows in even columns.
    pub ny: usize,
}

impl TriangularLattice {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }
}

impl LatticeLayout for TriangularLattice {
    fn generate(&self, domain_extent: Vector2<f32>) -> Vec<Site> {
        let extent = Vec2::from(domain_extent);
        let (nx, ny) = (self.nx, self.ny);
        if degenerate_extent(extent) || nx == 0 || ny == 0 {
            return Vec::new();
        }

        let margin = self.site_radius(domain_extent) + SITE_MARGIN_PAD;
        // Column spacing over row spacing for equilateral triangles.
        let xbyy = 3.0_f32.sqrt() * 0.5;
        let width_bound = (nx - 1) as f32 * xbyy * extent.y >= (ny - 1) as f32 * extent.x;
        let (dx, dy) = if width_bound && nx > 1 {
            let dx = spacing(extent.x - 2.0 * margin, nx);
            (dx, dx / xbyy)
        } else if ny > 1 {
            let dy = spacing(extent.y - 2.0 * margin, ny);
            (dy * xbyy, dy)
        } else if nx > 1 {
            let dx = spacing(extent.x - 2.0 * margin, nx);
            (dx, dx / xbyy)
        } else {
            (0.0, 0.0)
        };
        let x0 = centered_start(extent.x, dx, nx);
        let y0 = centered_start(extent.y, dy, ny);

        let index = |x: usize, y: usize| x * ny + y - x / 2;

        let mut sites = Vec::with_capacity(nx * ny);
        for x in 0..nx {
            let fac = x % 2;
            for y in 0..ny - fac {
                let id = sites.len();
                let mut site = Site::new(Vec2::new(
                    x0 + dx * x as f32,
                    y0 + dy * y as f32 + fac as f32 * dy * 0.5,
                ));
                if x != 0 && y != ny - 1 {
                    connect(&mut sites, &mut site, id, index(x - 1, y));
                }
                // Even columns reach up-left, odd columns down-left.
                if x != 0 && y + 2 * fac != 0 {
                    connect(&mut sites, &mut site, id, index(x - 1, y + 2 * fac - 1));
                }
                if y != 0 {
                    connect(&mut sites, &mut site, id, index(x, y - 1));
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
