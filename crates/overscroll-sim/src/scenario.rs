//! Gesture scenarios.
//!
//! A scenario is a surface size plus an ordered list of steps, usually
//! loaded from TOML:
//!
//! ```toml
//! [surface]
//! width = 1080
//! height = 1920
//!
//! [[steps]]
//! kind = "pull"
//! edge = "top"
//! delta = -0.02
//! samples = 12
//!
//! [[steps]]
//! kind = "release"
//! edge = "top"
//!
//! [[steps]]
//! kind = "settle"
//! ```

use std::path::Path;

use overscroll::VerticalEdge;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Default frame budget for a `settle` step.
pub const DEFAULT_SETTLE_FRAMES: u32 = 600;

/// Size of the simulated surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

/// Edge of the simulated scroll view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

impl From<Edge> for VerticalEdge {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::Top,
            Edge::Bottom => Self::Bottom,
        }
    }
}

const fn one() -> u32 {
    1
}

const fn default_settle_frames() -> u32 {
    DEFAULT_SETTLE_FRAMES
}

/// One scripted input or clock advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// `samples` drag samples of `delta` each past `edge`.
    Pull {
        edge: Edge,
        delta: f32,
        #[serde(default = "one")]
        samples: u32,
    },
    /// Finger lifted from `edge`.
    Release { edge: Edge },
    /// A fling hit `edge` with `velocity` pixels per second.
    Absorb { edge: Edge, velocity: i32 },
    /// Advance exactly `count` frames.
    Frames { count: u32 },
    /// Advance until every spring rests, failing after `max_frames`.
    Settle {
        #[serde(default = "default_settle_frames")]
        max_frames: u32,
    },
    /// Change the surface size.
    Resize { width: i32, height: i32 },
}

/// A complete gesture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub surface: SurfaceSize,
    pub steps: Vec<Step>,
}

impl Default for Scenario {
    /// Drag the top edge, let go, then fling into the bottom edge.
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            steps: vec![
                Step::Pull {
                    edge: Edge::Top,
                    delta: -0.02,
                    samples: 12,
                },
                Step::Release { edge: Edge::Top },
                Step::Settle {
                    max_frames: DEFAULT_SETTLE_FRAMES,
                },
                Step::Absorb {
                    edge: Edge::Bottom,
                    velocity: 3000,
                },
                Step::Settle {
                    max_frames: DEFAULT_SETTLE_FRAMES,
                },
            ],
        }
    }
}

impl Scenario {
    /// Parses a scenario from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
