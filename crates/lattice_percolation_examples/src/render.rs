//! SVG rendering helpers shared by the example binaries.
//!
//! Engine output is consumed purely as data: clusters pick the hue,
//! bonds optionally reveal one by one in discovery order.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;
use glam::Vec2;
use lattice_percolation::prelude::*;

/// Install a stdout tracing subscriber honoring `RUST_LOG`, defaulting to
/// `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Visual options for [`render_generation_to_svg`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Domain extent the generation was built for; becomes the viewBox.
    pub extent: Vec2,
    /// Fill behind the lattice.
    pub background: &'static str,
    /// Circle radius for sites.
    pub site_radius: f32,
    /// Seconds between consecutive bond reveals; `None` renders statically.
    pub reveal_step_secs: Option<f32>,
}

impl RenderConfig {
    pub fn new(extent: Vec2, site_radius: f32) -> Self {
        Self {
            extent,
            background: "#1a1c23",
            site_radius,
            reveal_step_secs: None,
        }
    }

    /// Enable the sequential bond reveal with the given step.
    pub fn with_reveal(mut self, step_secs: f32) -> Self {
        self.reveal_step_secs = Some(step_secs);
        self
    }
}

/// Hue wheel over the cluster list, matching one distinct color per cluster.
fn cluster_color(index: usize, total: usize) -> String {
    format!("hsl({}, 90%, 31%)", index * 360 / total.max(1))
}

/// Write the generation as an SVG document.
///
/// Bonds are drawn beneath sites, grouped and colored per cluster. With a
/// reveal step configured, each bond grows from its first endpoint at
/// `discovery_index * step` seconds, reproducing the build-up animation
/// order guaranteed by the engine.
pub fn render_generation_to_svg(
    generation: &Generation,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> Result<()> {
    let (w, h) = (config.extent.x, config.extent.y);
    let stroke_width = config.site_radius * 0.5;

    let mut cluster_of = vec![None; generation.sites.len()];
    for (c, cluster) in generation.clusters.iter().enumerate() {
        for &site in &cluster.sites {
            cluster_of[site] = Some(c);
        }
    }

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )?;
    writeln!(svg, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, config.background)?;

    let total = generation.clusters.len();
    for (c, cluster) in generation.clusters.iter().enumerate() {
        let color = cluster_color(c, total);
        writeln!(svg, r#"<g stroke="{color}" stroke-width="{stroke_width}">"#)?;
        for bond in &cluster.bonds {
            let a = generation.sites[bond.site_a].position;
            let b = generation.sites[bond.site_b].position;
            match config.reveal_step_secs {
                Some(step) => {
                    let begin = bond.discovery_index as f32 * step;
                    writeln!(
                        svg,
                        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}">"#,
                        a.x, a.y, a.x, a.y
                    )?;
                    writeln!(
                        svg,
                        r#"<animate attributeName="x2" to="{:.2}" begin="{begin:.3}s" dur="{step:.3}s" fill="freeze"/>"#,
                        b.x
                    )?;
                    writeln!(
                        svg,
                        r#"<animate attributeName="y2" to="{:.2}" begin="{begin:.3}s" dur="{step:.3}s" fill="freeze"/>"#,
                        b.y
                    )?;
                    writeln!(svg, "</line>")?;
                }
                None => {
                    writeln!(
                        svg,
                        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                        a.x, a.y, b.x, b.y
                    )?;
                }
            }
        }
        writeln!(svg, "</g>")?;
    }

    for (i, site) in generation.sites.iter().enumerate() {
        let fill = match cluster_of[i] {
            Some(c) => cluster_color(c, total),
            None => "none".to_owned(),
        };
        writeln!(
            svg,
            r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{fill}" stroke="#555"/>"##,
            site.position.x, site.position.y, config.site_radius
        )?;
    }

    writeln!(svg, "</svg>")?;
    fs::write(out_path, svg)?;
    Ok(())
}
