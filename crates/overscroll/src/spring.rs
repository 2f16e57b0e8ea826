//! Damped harmonic spring used to settle an overscroll offset.
//!
//! [`SpringForce`] holds the physical parameters (stiffness, damping ratio,
//! rest position) and steps a `(position, velocity)` pair by an arbitrary
//! frame time using the closed-form solution of the damped oscillator.
//! [`SpringAnimation`] wraps a force with the running state a frame ticker
//! advances until the value comes to rest.
//!
//! The stepping coefficients follow Ryan Juckett's damped harmonic motion
//! derivation: <https://www.ryanjuckett.com/damped-springs/>. Mass is fixed
//! at 1, so the natural frequency is `sqrt(stiffness)`.
//!
//! # License
//!
//! ```text
//! Copyright (c) 2008-2012 Ryan Juckett
//! http://www.ryanjuckett.com/
//!
//! This software is provided 'as-is', without any express or implied
//! warranty. In no event will the authors be held liable for any damages
//! arising from the use of this software.
//!
//! Permission is granted to anyone to use this software for any purpose,
//! including commercial applications, and to alter it and redistribute it
//! freely, subject to the following restrictions:
//!
//! 1. The origin of this software must not be misrepresented; you must not
//!    claim that you wrote the original software. If you use this software
//!    in a product, an acknowledgment in the product documentation would be
//!    appreciated but is not required.
//!
//! 2. Altered source versions must be plainly marked as such, and must not be
//!    misrepresented as being the original software.
//!
//! 3. This notice may not be removed or altered from any source
//!    distribution.
//!
//! Ported to Go by Charmbracelet, Inc. in 2021.
//! Ported to Rust by Charmed Rust in 2026.
//! Altered for overscroll: coefficients are computed per frame `dt`
//! from stiffness and damping ratio, and rest detection was added.
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use overscroll::{SpringAnimation, SpringForce};
//!
//! let mut anim = SpringAnimation::new(SpringForce::new(850.0, 0.5), 1.0);
//! anim.start(70.0, 0.0);
//!
//! while anim.is_running() {
//!     anim.advance(Duration::from_millis(16));
//! }
//! assert_eq!(anim.value(), 0.0);
//! ```

use std::time::Duration;

/// Stiffness used for overscroll release and absorb.
pub const DEFAULT_STIFFNESS: f32 = 850.0;

/// Damping ratio used for overscroll release and absorb (under-damped).
pub const DEFAULT_DAMPING_RATIO: f32 = 0.5;

/// Value threshold as a multiple of the minimum visible change.
const VALUE_THRESHOLD_MULTIPLIER: f32 = 0.75;

/// Velocity threshold as a multiple of the value threshold.
const VELOCITY_THRESHOLD_MULTIPLIER: f32 = 62.5;

const EPSILON: f64 = f64::EPSILON;

/// Physical parameters of a damped spring with unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringForce {
    stiffness: f32,
    damping_ratio: f32,
    final_position: f32,
}

impl Default for SpringForce {
    fn default() -> Self {
        Self::new(DEFAULT_STIFFNESS, DEFAULT_DAMPING_RATIO)
    }
}

impl SpringForce {
    /// Creates a spring resting at 0.
    ///
    /// Negative stiffness or damping ratio are clamped to 0. A spring with
    /// no stiffness never moves.
    pub fn new(stiffness: f32, damping_ratio: f32) -> Self {
        Self {
            stiffness: stiffness.max(0.0),
            damping_ratio: damping_ratio.max(0.0),
            final_position: 0.0,
        }
    }

    /// Sets the rest position.
    pub fn with_final_position(mut self, final_position: f32) -> Self {
        self.final_position = final_position;
        self
    }

    /// Spring stiffness.
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Damping ratio: `< 1` oscillates, `1` is critical, `> 1` creeps.
    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    /// Position the spring pulls toward.
    pub fn final_position(&self) -> f32 {
        self.final_position
    }

    /// Undamped angular frequency, `sqrt(stiffness / mass)`.
    pub fn natural_frequency(&self) -> f64 {
        f64::from(self.stiffness).sqrt()
    }

    /// Advances `(position, velocity)` by `delta_time` seconds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use overscroll::SpringForce;
    ///
    /// let force = SpringForce::new(850.0, 0.5);
    /// let (pos, _vel) = force.step(70.0, 0.0, 1.0 / 60.0);
    /// assert!(pos < 70.0);
    /// ```
    pub fn step(&self, position: f32, velocity: f32, delta_time: f64) -> (f32, f32) {
        let coefficients = Coefficients::new(
            delta_time.max(0.0),
            self.natural_frequency(),
            f64::from(self.damping_ratio),
        );

        let target = f64::from(self.final_position);
        let old_pos = f64::from(position) - target;
        let old_vel = f64::from(velocity);

        let new_pos = old_pos * coefficients.pos_pos + old_vel * coefficients.pos_vel + target;
        let new_vel = old_pos * coefficients.vel_pos + old_vel * coefficients.vel_vel;

        (new_pos as f32, new_vel as f32)
    }

    /// Whether the spring is close enough to rest to stop animating.
    pub fn is_at_equilibrium(
        &self,
        position: f32,
        velocity: f32,
        value_threshold: f32,
        velocity_threshold: f32,
    ) -> bool {
        velocity.abs() < velocity_threshold
            && (position - self.final_position).abs() < value_threshold
    }
}

/// Precomputed state-transition coefficients for one time step.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    pos_pos: f64,
    pos_vel: f64,
    vel_pos: f64,
    vel_vel: f64,
}

impl Coefficients {
    const IDENTITY: Self = Self {
        pos_pos: 1.0,
        pos_vel: 0.0,
        vel_pos: 0.0,
        vel_vel: 1.0,
    };

    fn new(delta_time: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        if angular_frequency < EPSILON {
            return Self::IDENTITY;
        }

        if damping_ratio > 1.0 + EPSILON {
            Self::over_damped(delta_time, angular_frequency, damping_ratio)
        } else if damping_ratio < 1.0 - EPSILON {
            Self::under_damped(delta_time, angular_frequency, damping_ratio)
        } else {
            Self::critically_damped(delta_time, angular_frequency)
        }
    }

    fn over_damped(delta_time: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let za = -angular_frequency * damping_ratio;
        let zb = angular_frequency * (damping_ratio * damping_ratio - 1.0).sqrt();
        let z1 = za - zb;
        let z2 = za + zb;

        let e1 = (z1 * delta_time).exp();
        let e2 = (z2 * delta_time).exp();

        let inv_two_zb = 1.0 / (2.0 * zb);

        let e1_over_two_zb = e1 * inv_two_zb;
        let e2_over_two_zb = e2 * inv_two_zb;

        let z1e1_over_two_zb = z1 * e1_over_two_zb;
        let z2e2_over_two_zb = z2 * e2_over_two_zb;

        Self {
            pos_pos: e1_over_two_zb * z2 - z2e2_over_two_zb + e2,
            pos_vel: -e1_over_two_zb + e2_over_two_zb,
            vel_pos: (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2,
            vel_vel: -z1e1_over_two_zb + z2e2_over_two_zb,
        }
    }

    fn under_damped(delta_time: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let omega_zeta = angular_frequency * damping_ratio;
        let alpha = angular_frequency * (1.0 - damping_ratio * damping_ratio).sqrt();

        let exp_term = (-omega_zeta * delta_time).exp();
        let cos_term = (alpha * delta_time).cos();
        let sin_term = (alpha * delta_time).sin();

        let inv_alpha = 1.0 / alpha;

        let exp_sin = exp_term * sin_term;
        let exp_cos = exp_term * cos_term;
        let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term * inv_alpha;

        Self {
            pos_pos: exp_cos + exp_omega_zeta_sin_over_alpha,
            pos_vel: exp_sin * inv_alpha,
            vel_pos: -exp_sin * alpha - omega_zeta * exp_omega_zeta_sin_over_alpha,
            vel_vel: exp_cos - exp_omega_zeta_sin_over_alpha,
        }
    }

    fn critically_damped(delta_time: f64, angular_frequency: f64) -> Self {
        let exp_term = (-angular_frequency * delta_time).exp();
        let time_exp = delta_time * exp_term;
        let time_exp_freq = time_exp * angular_frequency;

        Self {
            pos_pos: time_exp_freq + exp_term,
            pos_vel: time_exp,
            vel_pos: -angular_frequency * time_exp_freq,
            vel_vel: -time_exp_freq + exp_term,
        }
    }
}

/// A spring-driven value advanced one frame at a time.
///
/// The animation remembers the value and velocity it was started with so
/// callers can inspect how a release or absorb kicked it off.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimation {
    force: SpringForce,
    value: f32,
    velocity: f32,
    start_value: f32,
    start_velocity: f32,
    running: bool,
    value_threshold: f32,
    velocity_threshold: f32,
}

impl SpringAnimation {
    /// Creates an idle animation.
    ///
    /// `min_visible_change` is the smallest value delta worth drawing
    /// (one pixel for offsets); the rest thresholds are derived from it.
    pub fn new(force: SpringForce, min_visible_change: f32) -> Self {
        let value_threshold = min_visible_change.abs() * VALUE_THRESHOLD_MULTIPLIER;
        Self {
            force,
            value: force.final_position(),
            velocity: 0.0,
            start_value: force.final_position(),
            start_velocity: 0.0,
            running: false,
            value_threshold,
            velocity_threshold: value_threshold * VELOCITY_THRESHOLD_MULTIPLIER,
        }
    }

    /// The spring parameters.
    pub fn force(&self) -> &SpringForce {
        &self.force
    }

    /// Starts (or restarts) the animation from `value` with `velocity`.
    pub fn start(&mut self, value: f32, velocity: f32) {
        self.value = value;
        self.velocity = velocity;
        self.start_value = value;
        self.start_velocity = velocity;
        self.running = true;
    }

    /// Stops the animation where it is.
    pub fn cancel(&mut self) {
        self.running = false;
        self.velocity = 0.0;
    }

    /// Steps the animation by `delta`.
    ///
    /// Returns the new value, or `None` if the animation was not running.
    /// Once value and velocity fall inside the rest thresholds the value
    /// snaps to the final position and the animation stops.
    pub fn advance(&mut self, delta: Duration) -> Option<f32> {
        if !self.running {
            return None;
        }

        let (value, velocity) = self
            .force
            .step(self.value, self.velocity, delta.as_secs_f64());

        if !value.is_finite() || !velocity.is_finite() {
            tracing::warn!(value, velocity, "spring diverged, snapping to rest");
            self.settle();
        } else if self.force.is_at_equilibrium(
            value,
            velocity,
            self.value_threshold,
            self.velocity_threshold,
        ) {
            self.settle();
        } else {
            self.value = value;
            self.velocity = velocity;
        }

        Some(self.value)
    }

    fn settle(&mut self) {
        self.value = self.force.final_position();
        self.velocity = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value passed to the most recent [`start`](Self::start).
    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    /// Velocity passed to the most recent [`start`](Self::start).
    pub fn start_velocity(&self) -> f32 {
        self.start_velocity
    }

    pub fn value_threshold(&self) -> f32 {
        self.value_threshold
    }

    pub fn velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }
}
