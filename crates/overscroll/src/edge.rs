//! Per-edge overscroll spring.
//!
//! An [`EdgeSpring`] turns drag and fling input at one boundary into a
//! target offset for its axis. It never owns that offset: the
//! [`AxisManager`](crate::AxisManager) stores it and hands the current
//! value in whenever the edge needs it. Edges are addressed through the
//! manager by [`EdgeId`].

use std::fmt;
use std::time::Duration;

use tracing::warn;

use crate::config::OverscrollConfig;
use crate::damping::damp_with_factor;
use crate::direction::{Axis, Direction, Extent};
use crate::host::Canvas;
use crate::spring::SpringAnimation;

/// Handle to an edge spring installed in an [`AxisManager`](crate::AxisManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in its manager, in creation order.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// Lifecycle of an edge spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// At rest, no input.
    Idle,
    /// The user is pulling past the boundary.
    Dragging,
    /// The spring is bringing the offset back to rest.
    Releasing,
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Releasing => "releasing",
        })
    }
}

/// Spring state for one edge.
#[derive(Debug, Clone)]
pub struct EdgeSpring {
    direction: Direction,
    extent: Extent,
    velocity_multiplier: f32,
    reverse_absorb: bool,
    damp_factor: f32,
    distance: f32,
    dragging: bool,
    animation: SpringAnimation,
}

impl EdgeSpring {
    pub(crate) fn new(
        direction: Direction,
        extent: Extent,
        reverse_absorb: bool,
        config: &OverscrollConfig,
    ) -> Self {
        Self {
            direction,
            extent,
            velocity_multiplier: direction.polarity() * config.velocity_multiplier,
            reverse_absorb,
            damp_factor: config.damp_factor,
            distance: 0.0,
            dragging: false,
            animation: SpringAnimation::new(config.spring_force(), config.min_visible_change),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }

    /// Surface dimension read as the maximum extent on every pull.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Signed multiplier: polarity of the edge times the tuning magnitude.
    pub fn velocity_multiplier(&self) -> f32 {
        self.velocity_multiplier
    }

    pub fn reverse_absorb(&self) -> bool {
        self.reverse_absorb
    }

    /// Accumulated drag distance, as a fraction of the extent.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn animation(&self) -> &SpringAnimation {
        &self.animation
    }

    pub fn state(&self) -> EdgeState {
        if self.dragging {
            EdgeState::Dragging
        } else if self.animation.is_running() {
            EdgeState::Releasing
        } else {
            EdgeState::Idle
        }
    }

    /// Paint hook. Edge springs draw nothing; the effect is the axis
    /// translation alone. Returns whether another frame is needed.
    pub fn draw<C: Canvas + ?Sized>(&self, _canvas: &mut C) -> bool {
        false
    }

    pub(crate) fn inherit_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    /// Gives up drag input after another edge on the axis took over.
    pub(crate) fn surrender(&mut self) {
        self.dragging = false;
    }

    /// Stops any running spring without touching the drag distance.
    pub(crate) fn halt(&mut self) {
        self.animation.cancel();
    }

    /// Accumulates `delta` and returns the new damped target offset.
    pub(crate) fn pull(&mut self, delta: f32, max_extent: i32) -> f32 {
        self.dragging = true;
        self.animation.cancel();
        if delta.is_finite() {
            self.distance += delta * (self.velocity_multiplier * 2.0);
        } else {
            warn!(delta, direction = %self.direction, "ignoring non-finite pull delta");
        }

        damp_with_factor(self.distance * max_extent as f32, max_extent, self.damp_factor) as f32
    }

    /// Kicks the spring with a fling velocity, starting from `current`.
    pub(crate) fn absorb(&mut self, velocity: f32, current: f32) {
        let mut kick = self.velocity_multiplier * velocity;
        if self.reverse_absorb {
            kick = -kick;
        }
        self.dragging = false;
        self.animation.start(current, kick);
    }

    /// Ends a drag and lets the spring decay from `current`.
    pub(crate) fn release(&mut self, current: f32) {
        self.distance = 0.0;
        self.dragging = false;
        self.animation.start(current, 0.0);
    }

    /// Steps the spring; `Some(offset)` while it is running.
    pub(crate) fn advance(&mut self, delta: Duration) -> Option<f32> {
        self.animation.advance(delta)
    }
}
