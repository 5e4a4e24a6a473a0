//! Damped mass-spring used to smooth the pointer and ease the active-object
//! kick.
//!
//! Steps use the closed-form solution of `m x'' + c x' + k x = 0` rather than
//! numerical integration, so the motion is identical at any frame rate and a
//! long frame (background tab) cannot destabilise it.

use crate::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STIFFNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringConfig {
    /// Undamped natural frequency (rad/s).
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1 is critical, above 1 overdamped.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One-dimensional spring chasing a target.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without disturbing the current value or velocity.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() <= SPRING_REST_DELTA
            && self.velocity.abs() <= SPRING_REST_SPEED
    }

    /// Advance by `dt_sec` and return the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() {
            self.snap_to(self.target);
            return self.value;
        }
        if dt_sec <= 0.0 {
            return self.value;
        }
        let (x, v) = solve(
            &self.config,
            self.value - self.target,
            self.velocity,
            dt_sec,
        );
        self.value = self.target + x;
        self.velocity = v;
        self.value
    }
}

/// Displacement and velocity after `t` seconds, from displacement `x0` and
/// velocity `v0` relative to the rest point.
fn solve(cfg: &SpringConfig, x0: f32, v0: f32, t: f32) -> (f32, f32) {
    let omega = cfg.natural_frequency();
    let zeta = cfg.damping_ratio();
    if !omega.is_finite() || omega <= 0.0 {
        return (x0, v0);
    }

    if (zeta - 1.0).abs() < 1e-4 {
        // critical
        let c2 = v0 + omega * x0;
        let decay = (-omega * t).exp();
        let x = (x0 + c2 * t) * decay;
        let v = (v0 - omega * c2 * t) * decay;
        (x, v)
    } else if zeta > 1.0 {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let a = (v0 - r2 * x0) / (r1 - r2);
        let b = x0 - a;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
    } else {
        let decay_rate = zeta * omega;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + decay_rate * x0) / omega_d;
        let decay = (-decay_rate * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let x = decay * (x0 * cos + b * sin);
        let v = decay * (v0 * cos - (decay_rate * b + x0 * omega_d) * sin);
        (x, v)
    }
}

/// A pair of independent springs for X/Y.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: [f32; 2]) -> Self {
        Self {
            x: Spring::new(config, initial[0]),
            y: Spring::new(config, initial[1]),
        }
    }

    pub fn set_target(&mut self, target: [f32; 2]) {
        self.x.set_target(target[0]);
        self.y.set_target(target[1]);
    }

    pub fn step(&mut self, dt_sec: f32) -> [f32; 2] {
        [self.x.step(dt_sec), self.y.step(dt_sec)]
    }

    #[inline]
    pub fn value(&self) -> [f32; 2] {
        [self.x.value(), self.y.value()]
    }
}
