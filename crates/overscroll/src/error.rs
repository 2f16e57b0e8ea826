//! Error types for overscroll configuration and wiring.
//!
//! The physics itself never fails: invalid extents damp to zero and
//! out-of-range ratios are clamped. Errors only arise while wiring a
//! surface up.

use thiserror::Error;

use crate::edge::EdgeId;

/// Errors raised while configuring or addressing edge springs.
///
/// # Recovery Strategies
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`UnknownDirection`](Error::UnknownDirection) | Use a code in `0..=3` |
/// | [`UnknownEdge`](Error::UnknownEdge) | Use an id returned by this manager |
/// | [`InvalidConfig`](Error::InvalidConfig) | Fix the offending parameter |
/// | [`ConfigParse`](Error::ConfigParse) | Fix the TOML document |
/// | [`ConfigSerialize`](Error::ConfigSerialize) | Report as a bug |
#[derive(Error, Debug)]
pub enum Error {
    /// Direction code outside left/top/right/bottom.
    #[error("unknown edge direction code: {0}")]
    UnknownDirection(i32),

    /// Edge id not created by this manager.
    #[error("unknown edge: {0}")]
    UnknownEdge(EdgeId),

    /// A configuration value is out of range.
    ///
    /// Contains a description of the parameter and the rejected value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration TOML could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML.
    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// A specialized [`Result`] type for overscroll operations.
pub type Result<T> = std::result::Result<T, Error>;
