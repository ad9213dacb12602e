use glam::Vec2;
use lattice_percolation::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Sweep the occupation probability on a fixed square lattice and log the
/// largest-cluster fraction per step. Geometry is built once; each step
/// only re-samples occupation, which is the cheap path of the engine.
///
/// Around p = 0.59 the largest cluster starts to span a sizable fraction
/// of the lattice, the classic site-percolation transition.
fn main() -> anyhow::Result<()> {
    lattice_percolation_examples::init_tracing();

    let config = PercolationConfig::new(GeometryKind::Square, Vec2::new(1000.0, 1000.0))
        .with_grid(48, 48)
        .with_occupation_probability(0.0);
    let mut engine = PercolationEngine::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(7);
    engine.regenerate(&mut rng);

    let site_count = engine.generation().sites.len();
    for step in 1..=19 {
        let p = step as f32 * 0.05;
        engine.set_occupation_probability(p)?;
        let generation = engine.resample(&mut rng);

        let occupied = generation.occupied_count();
        let largest = generation.largest_cluster().map_or(0, |c| c.len());
        info!(
            "p={p:.2}: {occupied}/{site_count} occupied, {} clusters, largest spans {:.1}% of the lattice",
            generation.clusters.len(),
            largest as f32 * 100.0 / site_count as f32
        );
    }

    Ok(())
}
