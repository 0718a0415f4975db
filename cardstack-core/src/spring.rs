//! Snap animation spring

/// Frames longer than this (tab switches, debugger pauses) are clamped so a
/// single integration step cannot go unstable.
const MAX_STEP_SECONDS: f64 = 0.064;

/// Position/velocity magnitudes below which the spring settles on its target.
const SETTLE_THRESHOLD: f64 = 0.1;

/// Spring parameters. `no_bounce` picks critical damping, so the value
/// approaches its target without overshooting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    pub fn no_bounce(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::no_bounce(170.0)
    }
}

/// A spring animating a scalar toward a fixed target.
///
/// Integrated with semi-implicit Euler; if a step carries the position past
/// the target it snaps there instead, so the animated value never leaves
/// the interval between its start and the target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(position: f64, target: f64, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advances the simulation by `dt` seconds. Returns `true` while the
    /// spring is still in motion, `false` once it has settled on the target.
    pub fn step(&mut self, dt: f64) -> bool {
        let dt = dt.clamp(0.0, MAX_STEP_SECONDS);
        let before = self.position - self.target;
        if before == 0.0 && self.velocity == 0.0 {
            return false;
        }

        let accel = -self.config.stiffness * before - self.config.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        let after = self.position - self.target;
        let crossed = after != 0.0 && after.signum() != before.signum();
        if crossed || (after.abs() < SETTLE_THRESHOLD && self.velocity.abs() < SETTLE_THRESHOLD) {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}
