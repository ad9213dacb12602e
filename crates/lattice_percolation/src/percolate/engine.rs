//! Engine composing lattice construction, occupation and cluster discovery.
use glam::Vec2;
use rand::rand_core::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::lattice::{GeometryKind, LatticeLayout, Site};
use crate::percolate::cluster::find_clusters;
use crate::percolate::occupation::sample_occupation;
use crate::percolate::{Bond, Cluster};

/// Configuration for building a percolation generation.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct PercolationConfig {
    /// Lattice geometry to construct.
    pub kind: GeometryKind,
    /// Number of grid columns, at least 1.
    pub grid_width: usize,
    /// Number of grid rows, at least 1.
    pub grid_height: usize,
    /// Independent Bernoulli parameter applied per site, in [0, 1].
    pub occupation_probability: f32,
    /// Size of the target plane in world units.
    pub domain_extent: Vec2,
}

impl Default for PercolationConfig {
    fn default() -> Self {
        Self {
            kind: GeometryKind::Square,
            grid_width: 16,
            grid_height: 16,
            occupation_probability: 0.5,
            domain_extent: Vec2::new(0.0, 0.0),
        }
    }
}

impl PercolationConfig {
    /// Creates a new [`PercolationConfig`] for the given kind and plane size.
    pub fn new(kind: GeometryKind, domain_extent: Vec2) -> Self {
        Self {
            kind,
            domain_extent,
            ..Default::default()
        }
    }

    /// Sets the grid dimensions.
    pub fn with_grid(mut self, grid_width: usize, grid_height: usize) -> Self {
        self.grid_width = grid_width;
        self.grid_height = grid_height;
        self
    }

    /// Sets the occupation probability.
    pub fn with_occupation_probability(mut self, p: f32) -> Self {
        self.occupation_probability = p;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 1 {
            return Err(Error::InvalidDimension {
                axis: "width",
                value: self.grid_width,
            });
        }
        if self.grid_height < 1 {
            return Err(Error::InvalidDimension {
                axis: "height",
                value: self.grid_height,
            });
        }
        if !(0.0..=1.0).contains(&self.occupation_probability) {
            return Err(Error::InvalidProbability(self.occupation_probability));
        }
        Ok(())
    }
}

/// One fully built generation of sites, bonds and clusters.
///
/// A generation is owned exclusively by its producer and replaced
/// wholesale on the next build; consumers must treat it as immutable once
/// returned.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// The site arena, geometry plus occupation flags.
    pub sites: Vec<Site>,
    /// All bonds of the run, ordered by discovery index.
    pub bonds: Vec<Bond>,
    /// Clusters partitioning the occupied sites.
    pub clusters: Vec<Cluster>,
}

impl Generation {
    /// Number of occupied sites.
    pub fn occupied_count(&self) -> usize {
        self.sites.iter().filter(|s| s.occupied).count()
    }

    /// The cluster with the most member sites, if any.
    pub fn largest_cluster(&self) -> Option<&Cluster> {
        self.clusters.iter().max_by_key(|c| c.sites.len())
    }
}

fn build_unchecked(config: &PercolationConfig, rng: &mut dyn RngCore) -> Generation {
    let layout = config.kind.layout(config.grid_width, config.grid_height);
    let mut sites = layout.generate(config.domain_extent.into());
    if sites.is_empty() {
        warn!(
            "Lattice '{}' produced no sites; domain extent {:?} is degenerate.",
            config.kind, config.domain_extent
        );
    }
    sample_occupation(&mut sites, config.occupation_probability, rng);
    let (bonds, clusters) = find_clusters(&sites);
    info!(
        "Built '{}' generation: {} sites, {} bonds, {} clusters.",
        config.kind,
        sites.len(),
        bonds.len(),
        clusters.len()
    );
    Generation {
        sites,
        bonds,
        clusters,
    }
}

/// Build a full generation: geometry, occupation, then cluster discovery.
pub fn build_generation(config: &PercolationConfig, rng: &mut impl RngCore) -> Result<Generation> {
    config.validate()?;
    Ok(build_unchecked(config, rng))
}

/// Re-draw occupation on existing geometry and rediscover clusters.
///
/// Skips lattice construction entirely; use when only the occupation
/// probability changed. The returned bonds and clusters replace any
/// previously derived ones.
pub fn resample_generation(
    sites: &mut [Site],
    p: f32,
    rng: &mut impl RngCore,
) -> Result<(Vec<Bond>, Vec<Cluster>)> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidProbability(p));
    }
    sample_occupation(sites, p, rng);
    Ok(find_clusters(sites))
}

/// Owns the current generation and the configuration that produced it.
///
/// The two entry points mirror the two ways the surrounding layer reacts
/// to input: [`PercolationEngine::regenerate`] after structural changes
/// (kind, grid size, extent), [`PercolationEngine::resample`] when only
/// the occupation should be redrawn.
pub struct PercolationEngine {
    config: PercolationConfig,
    generation: Generation,
}

impl PercolationEngine {
    /// Create an engine with a validated configuration and an empty
    /// generation; call [`PercolationEngine::regenerate`] to build one.
    pub fn try_new(config: PercolationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generation: Generation::default(),
        })
    }

    pub fn config(&self) -> &PercolationConfig {
        &self.config
    }

    /// The current generation; empty until the first regenerate.
    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Rebuild geometry, occupation and clusters from scratch, replacing
    /// the previous generation as a whole.
    pub fn regenerate(&mut self, rng: &mut impl RngCore) -> &Generation {
        self.generation = build_unchecked(&self.config, rng);
        &self.generation
    }

    /// Re-draw occupation on the current geometry and rediscover clusters.
    pub fn resample(&mut self, rng: &mut impl RngCore) -> &Generation {
        sample_occupation(
            &mut self.generation.sites,
            self.config.occupation_probability,
            rng,
        );
        let (bonds, clusters) = find_clusters(&self.generation.sites);
        self.generation.bonds = bonds;
        self.generation.clusters = clusters;
        &self.generation
    }

    /// Change the occupation probability used by subsequent samples.
    pub fn set_occupation_probability(&mut self, p: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability(p));
        }
        self.config.occupation_probability = p;
        Ok(())
    }

    /// Change structural parameters; takes effect on the next regenerate.
    pub fn set_grid(&mut self, kind: GeometryKind, grid_width: usize, grid_height: usize) -> Result<()> {
        let candidate = PercolationConfig {
            kind,
            grid_width,
            grid_height,
            ..self.config.clone()
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn config() -> PercolationConfig {
        PercolationConfig::new(GeometryKind::Square, Vec2::new(400.0, 400.0))
            .with_grid(4, 4)
            .with_occupation_probability(1.0)
    }

    #[test]
    fn validation_rejects_zero_dimensions() {
        let err = config().with_grid(0, 4).validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension {
                axis: "width",
                value: 0
            }
        ));

        let err = config().with_grid(4, 0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { axis: "height", .. }));
    }

    #[test]
    fn validation_rejects_out_of_range_probability() {
        for p in [-0.1, 1.1, f32::NAN] {
            let err = config().with_occupation_probability(p).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidProbability(_)));
        }
    }

    #[test]
    fn fully_occupied_build_has_every_lattice_edge() {
        let mut rng = StdRng::seed_from_u64(1);
        let generation = build_generation(&config(), &mut rng).unwrap();
        assert_eq!(generation.sites.len(), 16);
        assert_eq!(generation.clusters.len(), 1);
        // A 4x4 grid has 2 * 4 * 3 edges.
        assert_eq!(generation.bonds.len(), 24);
        assert_eq!(generation.occupied_count(), 16);
    }

    #[test]
    fn same_seed_builds_identical_generations() {
        let config = config().with_occupation_probability(0.5);
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        let a = build_generation(&config, &mut rng_a).unwrap();
        let b = build_generation(&config, &mut rng_b).unwrap();

        let occ_a: Vec<bool> = a.sites.iter().map(|s| s.occupied).collect();
        let occ_b: Vec<bool> = b.sites.iter().map(|s| s.occupied).collect();
        assert_eq!(occ_a, occ_b);
        assert_eq!(a.bonds, b.bonds);
    }

    #[test]
    fn resample_preserves_geometry() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut generation = build_generation(&config(), &mut rng).unwrap();
        let positions: Vec<Vec2> = generation.sites.iter().map(|s| s.position).collect();

        let (bonds, clusters) = resample_generation(&mut generation.sites, 0.0, &mut rng).unwrap();
        assert!(bonds.is_empty());
        assert!(clusters.is_empty());
        for (site, position) in generation.sites.iter().zip(positions) {
            assert_eq!(site.position, position);
        }
    }

    #[test]
    fn resample_rejects_out_of_range_probability() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut generation = build_generation(&config(), &mut rng).unwrap();
        let err = resample_generation(&mut generation.sites, 2.0, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidProbability(p) if p == 2.0));
    }

    #[test]
    fn engine_replaces_generation_wholesale() {
        let mut engine = PercolationEngine::try_new(config()).unwrap();
        assert!(engine.generation().sites.is_empty());

        let mut rng = StdRng::seed_from_u64(11);
        engine.regenerate(&mut rng);
        assert_eq!(engine.generation().sites.len(), 16);
        assert_eq!(engine.generation().clusters.len(), 1);

        engine.set_occupation_probability(0.0).unwrap();
        engine.resample(&mut rng);
        assert_eq!(engine.generation().sites.len(), 16);
        assert!(engine.generation().clusters.is_empty());
        assert!(engine.generation().bonds.is_empty());
    }

    #[test]
    fn engine_set_grid_applies_on_next_regenerate() {
        let mut engine = PercolationEngine::try_new(config()).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        engine.regenerate(&mut rng);

        engine.set_grid(GeometryKind::Triangular, 3, 3).unwrap();
        engine.regenerate(&mut rng);
        // Triangular 3x3 drops one site in the odd column.
        assert_eq!(engine.generation().sites.len(), 8);

        assert!(engine.set_grid(GeometryKind::Square, 0, 3).is_err());
    }

    #[test]
    fn largest_cluster_tracks_member_count() {
        let mut rng = StdRng::seed_from_u64(19);
        let generation = build_generation(
            &config().with_occupation_probability(0.6),
            &mut rng,
        )
        .unwrap();
        if let Some(largest) = generation.largest_cluster() {
            assert!(generation
                .clusters
                .iter()
                .all(|c| c.sites.len() <= largest.sites.len()));
        }
    }
}
