//! Tuning parameters for the overscroll effect.
//!
//! [`OverscrollConfig`] is the single source of truth for every constant
//! the physics uses. The defaults reproduce the stock feel: a stiff,
//! under-damped spring and a 7% travel cap.
//!
//! # Examples
//!
//! ```rust
//! use overscroll::OverscrollConfig;
//!
//! let config = OverscrollConfig::new()
//!     .stiffness(600.0)
//!     .damping_ratio(0.75);
//! assert!(config.validate().is_ok());
//!
//! let parsed = OverscrollConfig::from_toml_str("stiffness = 1200.0").unwrap();
//! assert_eq!(parsed.stiffness, 1200.0);
//! assert_eq!(parsed.damping_ratio, 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::damping::DAMP_FACTOR;
use crate::direction::Extent;
use crate::error::{Error, Result};
use crate::spring::{DEFAULT_DAMPING_RATIO, DEFAULT_STIFFNESS, SpringForce};

/// Magnitude of the per-edge velocity multiplier.
pub const DEFAULT_VELOCITY_MULTIPLIER: f32 = 0.3;

/// Smallest offset change worth redrawing, in pixels.
pub const DEFAULT_MIN_VISIBLE_CHANGE: f32 = 1.0;

/// Overscroll tuning.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverscrollConfig {
    /// Spring stiffness used for release and absorb.
    pub stiffness: f32,

    /// Spring damping ratio; below 1 the offset overshoots before settling.
    pub damping_ratio: f32,

    /// Magnitude of the edge velocity multiplier. The sign comes from the
    /// edge direction.
    pub velocity_multiplier: f32,

    /// Largest visible travel as a fraction of the scroll extent.
    pub damp_factor: f32,

    /// Smallest offset change worth drawing; sets the spring rest thresholds.
    pub min_visible_change: f32,

    /// Extent the bottom edge measures against.
    ///
    /// Defaults to width, matching long-standing behavior even though the
    /// other vertical edge uses height.
    pub bottom_edge_extent: Extent,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping_ratio: DEFAULT_DAMPING_RATIO,
            velocity_multiplier: DEFAULT_VELOCITY_MULTIPLIER,
            damp_factor: DAMP_FACTOR,
            min_visible_change: DEFAULT_MIN_VISIBLE_CHANGE,
            bottom_edge_extent: Extent::Width,
        }
    }
}

impl OverscrollConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spring stiffness.
    #[must_use]
    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the spring damping ratio.
    #[must_use]
    pub fn damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    /// Sets the velocity multiplier magnitude.
    #[must_use]
    pub fn velocity_multiplier(mut self, multiplier: f32) -> Self {
        self.velocity_multiplier = multiplier;
        self
    }

    /// Sets the damp factor.
    #[must_use]
    pub fn damp_factor(mut self, factor: f32) -> Self {
        self.damp_factor = factor;
        self
    }

    /// Sets the minimum visible change.
    #[must_use]
    pub fn min_visible_change(mut self, change: f32) -> Self {
        self.min_visible_change = change;
        self
    }

    /// Sets the extent the bottom edge measures against.
    #[must_use]
    pub fn bottom_edge_extent(mut self, extent: Extent) -> Self {
        self.bottom_edge_extent = extent;
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML and
    /// [`Error::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigSerialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every parameter is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        fn check(name: &str, value: f32, ok: bool) -> Result<()> {
            if value.is_finite() && ok {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!("{name} = {value}")))
            }
        }

        check("stiffness", self.stiffness, self.stiffness > 0.0)?;
        check("damping_ratio", self.damping_ratio, self.damping_ratio >= 0.0)?;
        check(
            "velocity_multiplier",
            self.velocity_multiplier,
            self.velocity_multiplier >= 0.0,
        )?;
        check(
            "damp_factor",
            self.damp_factor,
            self.damp_factor > 0.0 && self.damp_factor <= 1.0,
        )?;
        check(
            "min_visible_change",
            self.min_visible_change,
            self.min_visible_change > 0.0,
        )?;
        Ok(())
    }

    /// Spring force built from these parameters.
    pub fn spring_force(&self) -> SpringForce {
        SpringForce::new(self.stiffness, self.damping_ratio)
    }
}
