use glam::Vec2;
use lattice_percolation::prelude::*;
use lattice_percolation_examples::{init_tracing, render_generation_to_svg, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Build the same grid at the same probability on all four geometries and
/// write one SVG per kind, for a side-by-side comparison of the layouts.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vec2::new(800.0, 600.0);
    let (nx, ny) = (24, 18);
    let p = 0.55;
    let mut rng = StdRng::seed_from_u64(42);

    for kind in GeometryKind::ALL {
        let config = PercolationConfig::new(kind, extent)
            .with_grid(nx, ny)
            .with_occupation_probability(p);
        let generation = build_generation(&config, &mut rng)?;

        let radius = kind.layout(nx, ny).site_radius(extent.into());
        let render = RenderConfig::new(extent, radius);
        let path = format!("lattices-four-geometries-{kind}.svg");
        render_generation_to_svg(&generation, &render, &path)?;

        info!(
            "{kind}: {} sites, {} bonds, {} clusters -> {path}",
            generation.sites.len(),
            generation.bonds.len(),
            generation.clusters.len()
        );
    }

    Ok(())
}
