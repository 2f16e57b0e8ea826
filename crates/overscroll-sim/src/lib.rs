#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

//! # Overscroll Simulator
//!
//! Headless playback of overscroll gestures.
//!
//! Plays a [`Scenario`] against a [`overscroll::SpringScrollView`] on a
//! virtual surface and records the vertical shift after every input sample
//! and every frame. Useful for tuning spring parameters without a UI.
//!
//! ## Quick start (library)
//!
//! ```rust
//! use overscroll::OverscrollConfig;
//! use overscroll_sim::{Scenario, Simulator};
//!
//! let scenario = Scenario::default();
//! let mut sim = Simulator::new(OverscrollConfig::default(), scenario.surface, 60).unwrap();
//! sim.run(&scenario).unwrap();
//!
//! assert_eq!(sim.records().last().unwrap().shift_y, 0.0);
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! overscroll-sim                      # built-in drag + fling scenario
//! overscroll-sim bounce.toml --json   # JSON lines, one per record
//! overscroll-sim --config stiff.toml  # custom spring tuning
//! overscroll-sim --print-config       # dump the effective tuning
//! ```

pub mod error;
pub mod output;
pub mod scenario;
pub mod sim;

pub use error::{Result, SimError};
pub use scenario::{Edge, Scenario, Step, SurfaceSize};
pub use sim::{Event, FrameRecord, Simulator, VirtualSurface};
