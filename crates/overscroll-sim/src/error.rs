//! Simulator errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or playing a scenario.
#[derive(Error, Debug)]
pub enum SimError {
    /// Reading a scenario or config file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Scenario TOML could not be parsed.
    #[error("scenario parse error: {0}")]
    ScenarioParse(#[from] toml::de::Error),

    /// The overscroll engine rejected its configuration or input.
    #[error(transparent)]
    Overscroll(#[from] overscroll::Error),

    /// Frame rate of zero.
    #[error("frame rate must be positive")]
    InvalidFrameRate,

    /// A `settle` step ran out of frames.
    #[error("springs still moving after {frames} frames")]
    NotSettled { frames: u32 },
}

/// A specialized [`Result`] type for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;
