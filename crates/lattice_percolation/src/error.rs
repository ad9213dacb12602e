//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! All variants are deterministic validation failures surfaced before any
//! construction work starts; nothing in the pipeline fails once inputs
//! pass validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid {axis}: {value} (must be at least 1)")]
    InvalidDimension { axis: &'static str, value: usize },

    #[error("invalid occupation probability {0} (must be within [0, 1])")]
    InvalidProbability(f32),

    #[error("unknown geometry kind '{0}'")]
    UnknownGeometry(String),
}
