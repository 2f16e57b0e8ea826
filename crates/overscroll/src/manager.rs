//! Two-axis offset manager.
//!
//! The [`AxisManager`] owns the horizontal and vertical shift that edge
//! springs produce, keeps track of which edge owns drag input on each
//! axis, and wraps render passes in the matching translation.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use overscroll::{AxisManager, Direction, Surface};
//!
//! struct Panel {
//!     redraws: Cell<u32>,
//! }
//!
//! impl Surface for Panel {
//!     fn width(&self) -> i32 { 1000 }
//!     fn height(&self) -> i32 { 1000 }
//!     fn invalidate(&self) { self.redraws.set(self.redraws.get() + 1); }
//! }
//!
//! let panel = Rc::new(Panel { redraws: Cell::new(0) });
//! let mut springs = AxisManager::new(panel.clone());
//! let top = springs.create_edge_spring(Direction::Top, false);
//!
//! springs.on_pull(top, 50.0, 0.5).unwrap();
//! assert_eq!(springs.shift_y(), 70.0);
//!
//! springs.on_release(top).unwrap();
//! while springs.tick(Duration::from_millis(16)) {}
//! assert_eq!(springs.shift_y(), 0.0);
//! assert!(panel.redraws.get() > 1);
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::OverscrollConfig;
use crate::direction::{Axis, Direction, Extent};
use crate::edge::{EdgeId, EdgeSpring};
use crate::error::{Error, Result};
use crate::host::{Canvas, Surface, TranslateGuard};

/// Owns both axis offsets and the edge springs that drive them.
///
/// Holds the surface through `Rc`, so a manager stays on the thread that
/// created it.
pub struct AxisManager {
    surface: Rc<dyn Surface>,
    config: OverscrollConfig,
    shift: [f32; 2],
    active: [Option<EdgeId>; 2],
    edges: Vec<EdgeSpring>,
}

impl fmt::Debug for AxisManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisManager")
            .field("config", &self.config)
            .field("shift", &self.shift)
            .field("active", &self.active)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}

impl AxisManager {
    /// Creates a manager with the default tuning.
    pub fn new(surface: Rc<dyn Surface>) -> Self {
        Self {
            surface,
            config: OverscrollConfig::default(),
            shift: [0.0; 2],
            active: [None; 2],
            edges: Vec::with_capacity(4),
        }
    }

    /// Creates a manager with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration fails validation.
    pub fn with_config(surface: Rc<dyn Surface>, config: OverscrollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(surface)
        })
    }

    pub fn config(&self) -> &OverscrollConfig {
        &self.config
    }

    pub fn surface(&self) -> &Rc<dyn Surface> {
        &self.surface
    }

    /// Installs an edge spring for `direction` and returns its handle.
    ///
    /// Left and right measure against the width and move X; top measures
    /// against the height and moves Y. Bottom moves Y but measures against
    /// [`OverscrollConfig::bottom_edge_extent`], which defaults to width.
    pub fn create_edge_spring(&mut self, direction: Direction, reverse_absorb: bool) -> EdgeId {
        let extent = match direction {
            Direction::Left | Direction::Right => Extent::Width,
            Direction::Top => Extent::Height,
            Direction::Bottom => self.config.bottom_edge_extent,
        };

        let id = EdgeId(self.edges.len());
        self.edges
            .push(EdgeSpring::new(direction, extent, reverse_absorb, &self.config));
        debug!(%id, %direction, ?extent, reverse_absorb, "edge spring created");
        id
    }

    /// Like [`create_edge_spring`](Self::create_edge_spring), from an
    /// integer direction code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDirection`] for codes outside `0..=3`.
    pub fn create_edge_spring_for_code(&mut self, code: i32, reverse_absorb: bool) -> Result<EdgeId> {
        let direction = Direction::try_from(code)?;
        Ok(self.create_edge_spring(direction, reverse_absorb))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeSpring> {
        self.edges.get(id.0)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeSpring)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Edge currently owning drag input on `axis`.
    pub fn active_edge(&self, axis: Axis) -> Option<EdgeId> {
        self.active[axis.index()]
    }

    pub fn shift(&self, axis: Axis) -> f32 {
        self.shift[axis.index()]
    }

    pub fn shift_x(&self) -> f32 {
        self.shift(Axis::X)
    }

    pub fn shift_y(&self) -> f32 {
        self.shift(Axis::Y)
    }

    /// Writes an axis offset, invalidating the surface if it changed.
    #[allow(clippy::float_cmp)]
    pub fn set_shift(&mut self, axis: Axis, value: f32) {
        let slot = &mut self.shift[axis.index()];
        if *slot != value {
            *slot = value;
            self.surface.invalidate();
        }
    }

    /// Whether any edge spring is still animating.
    pub fn is_animating(&self) -> bool {
        self.edges.iter().any(|e| e.animation().is_running())
    }

    fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeSpring> {
        self.edges.get_mut(id.0).ok_or(Error::UnknownEdge(id))
    }

    /// Makes `id` the drag owner of its axis.
    ///
    /// An outgoing owner hands its accumulated distance to the newcomer so
    /// the damping curve continues instead of restarting at zero, and stops
    /// dragging.
    fn claim(&mut self, axis: Axis, id: EdgeId) {
        let slot = axis.index();
        if let Some(previous) = self.active[slot].filter(|&p| p != id) {
            let outgoing = &mut self.edges[previous.0];
            outgoing.surrender();
            let inherited = outgoing.distance();
            self.edges[id.0].inherit_distance(inherited);
            debug!(from = %previous, to = %id, ?axis, inherited, "axis ownership transferred");
        }
        self.active[slot] = Some(id);
    }

    /// Handles a drag sample past the boundary of edge `id`.
    ///
    /// `delta` is the pull since the previous sample as a fraction of the
    /// extent. `displacement` locates the touch along the edge; the spring
    /// ignores it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEdge`] if `id` was not created here.
    pub fn on_pull(&mut self, id: EdgeId, delta: f32, displacement: f32) -> Result<()> {
        let (axis, extent) = {
            let edge = self.edge_mut(id)?;
            (edge.axis(), edge.extent())
        };

        self.claim(axis, id);
        for edge in self.edges.iter_mut().filter(|e| e.axis() == axis) {
            edge.halt();
        }

        let max_extent = self.surface.extent(extent);
        let target = self.edges[id.0].pull(delta, max_extent);
        trace!(%id, delta, displacement, max_extent, target, "pull");
        self.set_shift(axis, target);
        Ok(())
    }

    /// Handles a fling reaching the boundary of edge `id` with `velocity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEdge`] if `id` was not created here.
    pub fn on_absorb(&mut self, id: EdgeId, velocity: i32) -> Result<()> {
        let axis = self.edge_mut(id)?.axis();
        let current = self.shift(axis);
        let edge = &mut self.edges[id.0];
        edge.absorb(velocity as f32, current);
        debug!(
            %id,
            velocity,
            kick = edge.animation().start_velocity(),
            "absorb"
        );
        Ok(())
    }

    /// Handles the end of a drag on edge `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEdge`] if `id` was not created here.
    pub fn on_release(&mut self, id: EdgeId) -> Result<()> {
        let axis = self.edge_mut(id)?.axis();
        let current = self.shift(axis);
        self.edges[id.0].release(current);
        debug!(%id, from = current, "release");
        Ok(())
    }

    /// Advances every running spring by one frame of length `delta`.
    ///
    /// Each running spring writes its position into its axis offset before
    /// this returns, so a render pass in the same frame sees it. Returns
    /// whether any spring is still running.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let mut running = false;
        for i in 0..self.edges.len() {
            let edge = &mut self.edges[i];
            let axis = edge.axis();
            if let Some(value) = edge.advance(delta) {
                running |= edge.animation().is_running();
                trace!(id = %EdgeId(i), value, "spring step");
                self.set_shift(axis, value);
            }
        }
        running
    }

    /// Runs `body` with the canvas shifted by the current offsets.
    ///
    /// The shift applies only when `allow` is set and at least one offset
    /// is nonzero. The canvas is translated back afterwards, also if
    /// `body` panics.
    #[allow(clippy::float_cmp)]
    pub fn with_spring<C, R, F>(&self, canvas: &mut C, allow: bool, body: F) -> R
    where
        C: Canvas + ?Sized,
        F: FnOnce(&mut C) -> R,
    {
        let [dx, dy] = self.shift;
        if !allow || (dx == 0.0 && dy == 0.0) {
            return body(canvas);
        }

        let mut guard = TranslateGuard::new(canvas, dx, dy);
        body(guard.canvas())
    }
}
