#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_panics_doc)]

//! # Overscroll
//!
//! Spring-driven overscroll for scrollable surfaces.
//!
//! Pulling past a content boundary moves the surface by a damped offset
//! that grows quickly at first and flattens out; letting go (or flinging
//! into the boundary) lets an under-damped spring carry the offset back to
//! rest.
//!
//! Overscroll provides:
//! - **[`damp`]**: the curve mapping raw drag distance to a bounded offset
//! - **[`EdgeSpring`]**: per-edge drag accumulator and release spring
//! - **[`AxisManager`]**: the two axis offsets, edge ownership, and the
//!   render-time translation
//! - **[`SpringScrollView`]**: scroll view glue with the stock edge wiring
//!
//! The host supplies a [`Surface`] (dimensions and redraw requests), a
//! [`Canvas`] to translate, and a per-frame ticker calling
//! [`AxisManager::tick`]. Everything runs on the UI thread.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use overscroll::{Canvas, Surface, SpringScrollView, VerticalEdge};
//!
//! struct Screen {
//!     redraws: Cell<u32>,
//! }
//!
//! impl Surface for Screen {
//!     fn width(&self) -> i32 { 1080 }
//!     fn height(&self) -> i32 { 1920 }
//!     fn invalidate(&self) { self.redraws.set(self.redraws.get() + 1); }
//! }
//!
//! struct Offset(f32);
//!
//! impl Canvas for Offset {
//!     fn translate(&mut self, _dx: f32, dy: f32) { self.0 += dy; }
//! }
//!
//! let mut view = SpringScrollView::new(Rc::new(Screen { redraws: Cell::new(0) }));
//!
//! // Drag down past the top edge, then let go
//! view.on_pull(VerticalEdge::Top, -0.05, 0.5).unwrap();
//! view.on_release(VerticalEdge::Top).unwrap();
//!
//! let mut canvas = Offset(0.0);
//! while view.tick(Duration::from_millis(16)) {
//!     view.draw(&mut canvas, |_c| {
//!         // paint content at the translated origin
//!     });
//! }
//! assert_eq!(view.springs().shift_y(), 0.0);
//! ```
//!
//! ## Tuning
//!
//! [`OverscrollConfig`] carries every constant (stiffness 850, damping
//! ratio 0.5, velocity multiplier 0.3, damp factor 0.07) and can be loaded
//! from TOML.

mod config;
mod damping;
mod direction;
mod edge;
mod error;
mod host;
mod manager;
mod spring;
mod view;

pub use config::{DEFAULT_MIN_VISIBLE_CHANGE, DEFAULT_VELOCITY_MULTIPLIER, OverscrollConfig};
pub use damping::{DAMP_FACTOR, damp, damp_with_factor};
pub use direction::{Axis, Direction, Extent};
pub use edge::{EdgeId, EdgeSpring, EdgeState};
pub use error::{Error, Result};
pub use host::{Canvas, Surface};
pub use manager::AxisManager;
pub use spring::{DEFAULT_DAMPING_RATIO, DEFAULT_STIFFNESS, SpringAnimation, SpringForce};
pub use view::{SpringScrollView, VerticalEdge};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        AxisManager, Canvas, Direction, EdgeId, OverscrollConfig, SpringScrollView, Surface,
        VerticalEdge, damp,
    };
}
