use glam::Vec2;
use lattice_percolation::prelude::*;
use lattice_percolation_examples::{init_tracing, render_generation_to_svg, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Render a triangular lattice whose bonds appear one at a time in
/// discovery order, driven entirely by each bond's discovery index.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Vec2::new(900.0, 700.0);
    let (nx, ny) = (20, 16);
    let config = PercolationConfig::new(GeometryKind::Triangular, extent)
        .with_grid(nx, ny)
        .with_occupation_probability(0.6);

    let mut rng = StdRng::seed_from_u64(1234);
    let generation = build_generation(&config, &mut rng)?;

    // Scale the step so the full reveal takes about ten seconds.
    let step = 10.0 / generation.bonds.len().max(1) as f32;
    let radius = config.kind.layout(nx, ny).site_radius(extent.into());
    let render = RenderConfig::new(extent, radius).with_reveal(step);

    let path = "reveal-sequential-bonds.svg";
    render_generation_to_svg(&generation, &render, path)?;
    info!(
        "{} bonds reveal over ~10s ({}ms each) -> {path}",
        generation.bonds.len(),
        (step * 1000.0) as u32
    );

    Ok(())
}
