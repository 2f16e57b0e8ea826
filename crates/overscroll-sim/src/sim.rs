//! Frame-by-frame playback of a [`Scenario`].
//!
//! The simulator plays the host role: it owns a [`VirtualSurface`], feeds
//! scripted input to a [`SpringScrollView`], and acts as the per-frame
//! ticker. Every input sample and every frame produces a [`FrameRecord`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use overscroll::{OverscrollConfig, SpringScrollView, Surface, VerticalEdge};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SimError};
use crate::scenario::{Scenario, Step, SurfaceSize};

/// In-memory surface that counts redraw requests.
#[derive(Debug, Default)]
pub struct VirtualSurface {
    width: Cell<i32>,
    height: Cell<i32>,
    redraws: Cell<u64>,
}

impl VirtualSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            width: Cell::new(size.width),
            height: Cell::new(size.height),
            redraws: Cell::new(0),
        }
    }

    pub fn resize(&self, width: i32, height: i32) {
        self.width.set(width);
        self.height.set(height);
    }

    pub fn redraws(&self) -> u64 {
        self.redraws.get()
    }
}

impl Surface for VirtualSurface {
    fn width(&self) -> i32 {
        self.width.get()
    }

    fn height(&self) -> i32 {
        self.height.get()
    }

    fn invalidate(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}

/// What produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Pull,
    Release,
    Absorb,
    Resize,
    Tick,
}

/// Observable state after one input sample or frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Frames elapsed since the start of the scenario.
    pub frame: u64,
    /// Simulated time in milliseconds.
    pub time_ms: f64,
    pub event: Event,
    pub shift_y: f32,
    pub top: String,
    pub bottom: String,
    /// Redraw requests so far.
    pub redraws: u64,
}

/// Drives a [`SpringScrollView`] through a scenario.
pub struct Simulator {
    surface: Rc<VirtualSurface>,
    view: SpringScrollView,
    frame_time: Duration,
    frame: u64,
    records: Vec<FrameRecord>,
}

impl Simulator {
    /// Creates a simulator ticking at `fps`.
    ///
    /// # Errors
    ///
    /// Fails for a zero frame rate or an invalid configuration.
    pub fn new(config: OverscrollConfig, size: SurfaceSize, fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(SimError::InvalidFrameRate);
        }

        let surface = Rc::new(VirtualSurface::new(size));
        let view = SpringScrollView::with_config(surface.clone(), config)?;
        Ok(Self {
            surface,
            view,
            frame_time: Duration::from_secs(1) / fps,
            frame: 0,
            records: Vec::new(),
        })
    }

    pub fn view(&self) -> &SpringScrollView {
        &self.view
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    pub fn redraws(&self) -> u64 {
        self.surface.redraws()
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Plays every step of `scenario` in order.
    ///
    /// # Errors
    ///
    /// Fails if a `settle` step runs out of frames.
    pub fn run(&mut self, scenario: &Scenario) -> Result<()> {
        for (index, step) in scenario.steps.iter().enumerate() {
            debug!(index, ?step, "step");
            self.apply(step)?;
        }
        info!(
            frames = self.frame,
            redraws = self.redraws(),
            "scenario finished"
        );
        Ok(())
    }

    fn apply(&mut self, step: &Step) -> Result<()> {
        match *step {
            Step::Pull {
                edge,
                delta,
                samples,
            } => {
                for _ in 0..samples {
                    self.view.on_pull(edge.into(), delta, 0.5)?;
                    self.record(Event::Pull);
                }
            }
            Step::Release { edge } => {
                self.view.on_release(edge.into())?;
                self.record(Event::Release);
            }
            Step::Absorb { edge, velocity } => {
                self.view.on_absorb(edge.into(), velocity)?;
                self.record(Event::Absorb);
            }
            Step::Frames { count } => {
                for _ in 0..count {
                    self.tick();
                }
            }
            Step::Settle { max_frames } => {
                let mut used = 0;
                while self.view.springs().is_animating() {
                    if used == max_frames {
                        return Err(SimError::NotSettled { frames: max_frames });
                    }
                    self.tick();
                    used += 1;
                }
                debug!(frames = used, "settled");
            }
            Step::Resize { width, height } => {
                self.surface.resize(width, height);
                self.record(Event::Resize);
            }
        }
        Ok(())
    }

    fn tick(&mut self) {
        self.view.tick(self.frame_time);
        self.frame += 1;
        self.record(Event::Tick);
    }

    fn record(&mut self, event: Event) {
        let state = |edge| self.view.edge_state(edge).to_string();
        let record = FrameRecord {
            frame: self.frame,
            time_ms: self.frame_time.as_secs_f64() * 1000.0 * self.frame as f64,
            event,
            shift_y: self.view.springs().shift_y(),
            top: state(VerticalEdge::Top),
            bottom: state(VerticalEdge::Bottom),
            redraws: self.surface.redraws(),
        };
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Edge;

    fn simulator() -> Simulator {
        Simulator::new(OverscrollConfig::default(), SurfaceSize::default(), 60).unwrap()
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(matches!(
            Simulator::new(OverscrollConfig::default(), SurfaceSize::default(), 0),
            Err(SimError::InvalidFrameRate)
        ));
    }

    #[test]
    fn test_default_scenario_returns_to_rest() {
        let mut sim = simulator();
        sim.run(&Scenario::default()).unwrap();

        let last = sim.records().last().unwrap();
        assert_eq!(last.shift_y, 0.0);
        assert_eq!(last.top, "idle");
        assert_eq!(last.bottom, "idle");
        assert!(sim.frames() > 0);
        assert!(sim.redraws() > 0);
    }

    #[test]
    fn test_pull_records_each_sample() {
        let mut sim = simulator();
        sim.run(&Scenario {
            surface: SurfaceSize::default(),
            steps: vec![Step::Pull {
                edge: Edge::Top,
                delta: -0.02,
                samples: 4,
            }],
        })
        .unwrap();

        let records = sim.records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.event == Event::Pull));
        assert!(records.windows(2).all(|w| w[1].shift_y >= w[0].shift_y));
        assert!(records[3].shift_y > 0.0);
        assert_eq!(records[3].top, "dragging");
    }

    #[test]
    fn test_settle_budget_exhausted() {
        let mut sim = simulator();
        let err = sim
            .run(&Scenario {
                surface: SurfaceSize::default(),
                steps: vec![
                    Step::Absorb {
                        edge: Edge::Top,
                        velocity: 5000,
                    },
                    Step::Settle { max_frames: 2 },
                ],
            })
            .unwrap_err();
        assert!(matches!(err, SimError::NotSettled { frames: 2 }));
    }

    #[test]
    fn test_resize_changes_extent() {
        let mut sim = simulator();
        sim.run(&Scenario {
            surface: SurfaceSize {
                width: 1000,
                height: 1000,
            },
            steps: vec![
                Step::Pull {
                    edge: Edge::Top,
                    delta: -50.0,
                    samples: 1,
                },
                Step::Resize {
                    width: 2000,
                    height: 1000,
                },
                Step::Pull {
                    edge: Edge::Top,
                    delta: 0.0,
                    samples: 1,
                },
            ],
        })
        .unwrap();

        let shifts: Vec<f32> = sim.records().iter().map(|r| r.shift_y).collect();
        // The scroll view's edges measure against the width.
        assert_eq!(shifts, vec![70.0, 70.0, 140.0]);
    }
}
