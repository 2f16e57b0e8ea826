//! Vertical scroll container with spring overscroll.
//!
//! [`SpringScrollView`] is the glue a toolkit's scroll view needs: it
//! installs the top and bottom edge springs, routes edge callbacks to them,
//! and wraps the two paint phases in the spring translation.
//!
//! Both edges are created as bottom-direction springs. The top edge
//! reverses absorbed velocity so a fling into either edge bounces the
//! content away from it. Overscroll is always enabled, even when the
//! content fits.

use std::rc::Rc;
use std::time::Duration;

use crate::config::OverscrollConfig;
use crate::direction::Direction;
use crate::edge::{EdgeId, EdgeState};
use crate::error::Result;
use crate::host::{Canvas, Surface};
use crate::manager::AxisManager;

/// The two vertical edges of a scroll view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Scroll view glue around an [`AxisManager`].
#[derive(Debug)]
pub struct SpringScrollView {
    springs: AxisManager,
    top: EdgeId,
    bottom: EdgeId,
    translate_self: bool,
    top_fading_edge_enabled: bool,
}

impl SpringScrollView {
    /// Creates the view glue with default tuning.
    pub fn new(surface: Rc<dyn Surface>) -> Self {
        Self::install(AxisManager::new(surface))
    }

    /// Creates the view glue with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(surface: Rc<dyn Surface>, config: OverscrollConfig) -> Result<Self> {
        Ok(Self::install(AxisManager::with_config(surface, config)?))
    }

    fn install(mut springs: AxisManager) -> Self {
        let top = springs.create_edge_spring(Direction::Bottom, true);
        let bottom = springs.create_edge_spring(Direction::Bottom, false);
        Self {
            springs,
            top,
            bottom,
            translate_self: true,
            top_fading_edge_enabled: true,
        }
    }

    pub fn springs(&self) -> &AxisManager {
        &self.springs
    }

    pub fn edge_id(&self, edge: VerticalEdge) -> EdgeId {
        match edge {
            VerticalEdge::Top => self.top,
            VerticalEdge::Bottom => self.bottom,
        }
    }

    pub fn edge_state(&self, edge: VerticalEdge) -> EdgeState {
        self.springs
            .edge(self.edge_id(edge))
            .map_or(EdgeState::Idle, crate::EdgeSpring::state)
    }

    /// Whether the self-paint phase (rather than the child phase) carries
    /// the translation.
    pub fn translate_self(&self) -> bool {
        self.translate_self
    }

    pub fn set_translate_self(&mut self, translate_self: bool) {
        self.translate_self = translate_self;
    }

    pub fn set_top_fading_edge_enabled(&mut self, enabled: bool) {
        self.top_fading_edge_enabled = enabled;
    }

    /// Top fading edge strength: `default` unless the top fade is suppressed.
    pub fn top_fading_edge_strength(&self, default: f32) -> f32 {
        if self.top_fading_edge_enabled {
            default
        } else {
            0.0
        }
    }

    /// Forwards a drag sample past `edge`.
    ///
    /// # Errors
    ///
    /// Never fails for the edges this view installs.
    pub fn on_pull(&mut self, edge: VerticalEdge, delta: f32, displacement: f32) -> Result<()> {
        self.springs.on_pull(self.edge_id(edge), delta, displacement)
    }

    /// Forwards a fling that hit `edge`.
    ///
    /// # Errors
    ///
    /// Never fails for the edges this view installs.
    pub fn on_absorb(&mut self, edge: VerticalEdge, velocity: i32) -> Result<()> {
        self.springs.on_absorb(self.edge_id(edge), velocity)
    }

    /// Forwards the end of a drag on `edge`.
    ///
    /// # Errors
    ///
    /// Never fails for the edges this view installs.
    pub fn on_release(&mut self, edge: VerticalEdge) -> Result<()> {
        self.springs.on_release(self.edge_id(edge))
    }

    /// Advances running springs by one frame. Returns whether any still run.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.springs.tick(delta)
    }

    /// Self-paint phase. Translated when `translate_self` is set.
    pub fn draw<C, R, F>(&self, canvas: &mut C, body: F) -> R
    where
        C: Canvas + ?Sized,
        F: FnOnce(&mut C) -> R,
    {
        self.springs.with_spring(canvas, self.translate_self, body)
    }

    /// Child-paint phase. Translated when `translate_self` is cleared.
    pub fn dispatch_draw<C, R, F>(&self, canvas: &mut C, body: F) -> R
    where
        C: Canvas + ?Sized,
        F: FnOnce(&mut C) -> R,
    {
        self.springs.with_spring(canvas, !self.translate_self, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Screen {
        redraws: Cell<u32>,
    }

    impl Surface for Screen {
        fn width(&self) -> i32 {
            1080
        }

        fn height(&self) -> i32 {
            1920
        }

        fn invalidate(&self) {
            self.redraws.set(self.redraws.get() + 1);
        }
    }

    #[derive(Default)]
    struct Origin {
        y: f32,
    }

    impl Canvas for Origin {
        fn translate(&mut self, _dx: f32, dy: f32) {
            self.y += dy;
        }
    }

    fn view() -> SpringScrollView {
        SpringScrollView::new(Rc::new(Screen {
            redraws: Cell::new(0),
        }))
    }

    #[test]
    fn test_installs_two_bottom_edges() {
        let view = view();
        let top = view.springs().edge(view.edge_id(VerticalEdge::Top)).unwrap();
        let bottom = view
            .springs()
            .edge(view.edge_id(VerticalEdge::Bottom))
            .unwrap();
        assert_eq!(top.direction(), Direction::Bottom);
        assert_eq!(bottom.direction(), Direction::Bottom);
        assert!(top.reverse_absorb());
        assert!(!bottom.reverse_absorb());
    }

    #[test]
    fn test_paint_phase_pairing() {
        let mut view = view();
        view.on_pull(VerticalEdge::Top, -0.1, 0.5).unwrap();
        let shift = view.springs().shift_y();
        assert!(shift > 0.0);

        let mut canvas = Origin::default();
        assert_eq!(view.draw(&mut canvas, |c| c.y), shift);
        assert_eq!(view.dispatch_draw(&mut canvas, |c| c.y), 0.0);

        view.set_translate_self(false);
        assert_eq!(view.draw(&mut canvas, |c| c.y), 0.0);
        assert_eq!(view.dispatch_draw(&mut canvas, |c| c.y), shift);
        assert_eq!(canvas.y, 0.0);
    }

    #[test]
    fn test_top_fading_edge_suppression() {
        let mut view = view();
        assert_eq!(view.top_fading_edge_strength(0.8), 0.8);
        view.set_top_fading_edge_enabled(false);
        assert_eq!(view.top_fading_edge_strength(0.8), 0.0);
    }

    #[test]
    fn test_flings_bounce_away_from_each_edge() {
        let mut top_view = view();
        top_view.on_absorb(VerticalEdge::Top, 4000).unwrap();
        top_view.tick(Duration::from_millis(16));
        assert!(top_view.springs().shift_y() > 0.0);

        let mut bottom_view = view();
        bottom_view.on_absorb(VerticalEdge::Bottom, 4000).unwrap();
        bottom_view.tick(Duration::from_millis(16));
        assert!(bottom_view.springs().shift_y() < 0.0);
    }

    #[test]
    fn test_edge_states() {
        let mut view = view();
        assert_eq!(view.edge_state(VerticalEdge::Top), EdgeState::Idle);
        view.on_pull(VerticalEdge::Top, -0.05, 0.5).unwrap();
        assert_eq!(view.edge_state(VerticalEdge::Top), EdgeState::Dragging);
        view.on_release(VerticalEdge::Top).unwrap();
        assert_eq!(view.edge_state(VerticalEdge::Top), EdgeState::Releasing);
        while view.tick(Duration::from_millis(16)) {}
        assert_eq!(view.edge_state(VerticalEdge::Top), EdgeState::Idle);
        assert_eq!(view.springs().shift_y(), 0.0);
    }
}
