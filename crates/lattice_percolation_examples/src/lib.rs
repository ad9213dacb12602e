#![forbid(unsafe_code)]

mod render;

pub use render::{init_tracing, render_generation_to_svg, RenderConfig};
