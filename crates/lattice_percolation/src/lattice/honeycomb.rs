//! Honeycomb lattice built from a four-column repeating period.
use glam::Vec2;
use mint::Vector2;

use crate::lattice::{
    connect, degenerate_extent, site_radius_weighted, spacing, LatticeLayout, Site,
    SITE_MARGIN_PAD,
};

/// Hexagonal tiling on an `nx` by `ny` column/row grid.
///
/// Columns cycle through four roles. Role 0 bonds straight back to the
/// previous column, role 1 forks up and down into it, role 2 bonds
/// straight, and role 3 forks with the opposite vertical offset. Role 1
/// and 2 columns carry one extra row and sit half a row-spacing lower,
/// which produces the brick-like hexagon tiling. Horizontally, columns
/// advance by alternating half and full bond lengths.
///
/// Column `x` starts at flat index `x * ny - (ceil(x / 4) + floor(x / 4))`,
/// the correction being the number of short columns seen so far.
#[derive(Debug, Clone)]
pub struct HoneycombLattice {
    /// Number of grid columns.
    pub nx: usize,
    /// Nominal number of grid rows; role 0/3 columns hold `ny - 1`.
    pub ny: usize,
}

impl HoneycombLattice {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }
}

/// Horizontal advance of column `x` in bond-length units.
fn x_units(x: usize) -> f32 {
    x as f32 - ((x + 1) / 2) as f32 * 0.5
}

impl LatticeLayout for HoneycombLattice {
    fn generate(&self, domain_extent: Vector2<f32>) -> Vec<Site> {
        let extent = Vec2::from(domain_extent);
        let (nx, ny) = (self.nx, self.ny);
        if degenerate_extent(extent) || nx == 0 || ny == 0 {
            return Vec::new();
        }

        let margin = self.site_radius(domain_extent) + SITE_MARGIN_PAD;
        let sqrt3 = 3.0_f32.sqrt();
        let width_units = x_units(nx - 1);
        let width_bound = width_units * extent.y >= (ny - 1) as f32 * sqrt3 * extent.x;
        let (dx, dy) = if width_bound && nx > 1 {
            let dx = (extent.x - 2.0 * margin) / width_units;
            (dx, dx * sqrt3)
        } else if ny > 1 {
            let dy = spacing(extent.y - 2.0 * margin, ny);
            (dy / sqrt3, dy)
        } else if nx > 1 {
            let dx = (extent.x - 2.0 * margin) / width_units;
            (dx, dx * sqrt3)
        } else {
            (0.0, 0.0)
        };
        let x_min = (extent.x - dx * width_units) * 0.5;
        // Role 1/2 columns reach half a row below the role 0/3 baseline,
        // so the natural vertical extent is dy * (ny - 1) from y_min.
        let y_min = (extent.y - dy * (ny - 1) as f32) * 0.5;
        let y0 = y_min + dy * 0.5;

        let index = |x: usize, y: usize| x * ny + y - ((x + 3) / 4 + x / 4);

        let mut sites = Vec::with_capacity(nx * ny);
        for x in 0..nx {
            let period = x % 4;
            let fac = usize::from(period == 1 || period == 2);
            let rows = ny - 1 + fac;
            for y in 0..rows {
                let id = sites.len();
                let mut site = Site::new(Vec2::new(
                    x_min + dx * x_units(x),
                    y0 + dy * y as f32 - fac as f32 * dy * 0.5,
                ));
                match period {
                    0 => {
                        if x != 0 {
                            connect(&mut sites, &mut site, id, index(x - 1, y));
                        }
                    }
                    1 => {
                        if y != 0 {
                            connect(&mut sites, &mut site, id, index(x - 1, y - 1));
                        }
                        if y + 1 != rows {
                            connect(&mut sites, &mut site, id, index(x - 1, y));
                        }
                    }
                    2 => {
                        connect(&mut sites, &mut site, id, index(x - 1, y));
                    }
                    _ => {
                        connect(&mut sites, &mut site, id, index(x - 1, y + 1));
                        connect(&mut sites, &mut site, id, index(x - 1, y));
                    }
                }
                sites.push(site);
            }
        }
        sites
    }

    fn site_radius(&self, domain_extent: Vector2<f32>) -> f32 {
        site_radius_weighted(Vec2::from(domain_extent), self.nx, self.ny, 1.0, 0.5)
    }
}
