//! Damped smoothing for the page scroll-progress indicator.

/// With unit mass these constants give an overdamped spring (damping
/// ratio ≈ 1.37), so the output approaches the target without overshoot.
const STIFFNESS: f64 = 120.0;
const DAMPING: f64 = 30.0;

/// Snap window: once position and velocity are both inside it, the spring
/// locks onto the target so the animation tick can go quiescent.
const SETTLE_EPSILON: f64 = 1e-3;

/// Cap on a single integration step. A long frame gap (background tab,
/// debugger pause) fed straight into Euler integration would blow up.
const MAX_STEP_SECONDS: f64 = 0.064;

/// A damped spring tracking the raw scroll fraction. The raw signal can
/// be noisy and jumpy; the spring output converges toward it over a few
/// hundred milliseconds and always stays in [0, 1].
#[derive(Debug, Clone)]
pub struct ProgressSpring {
    position: f64,
    velocity: f64,
    target: f64,
}

impl Default for ProgressSpring {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSpring {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    /// Sets the raw scroll fraction the spring should converge to.
    /// Out-of-range and non-finite input is clamped; a document shorter
    /// than the viewport reports 0.
    pub fn set_target(&mut self, raw: f64) {
        self.target = if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        let dt = dt.clamp(0.0, MAX_STEP_SECONDS);
        let acceleration =
            STIFFNESS * (self.target - self.position) - DAMPING * self.velocity;
        self.velocity += acceleration * dt;
        self.position = (self.position + self.velocity * dt).clamp(0.0, 1.0);
        if (self.position - self.target).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    /// True once the output has locked onto the target; stepping a
    /// settled spring is a no-op until the target moves again.
    pub fn settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 0.016;

    fn run(spring: &mut ProgressSpring, frames: usize) {
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn converges_and_locks_onto_the_target() {
        let mut spring = ProgressSpring::new();
        spring.set_target(1.0);
        // Visually close after ~0.5s, inside the snap window well before
        // 150 frames.
        run(&mut spring, 31);
        assert!(spring.value() > 0.75);
        run(&mut spring, 119);
        assert!(spring.settled());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn never_overshoots_the_target() {
        let mut spring = ProgressSpring::new();
        spring.set_target(0.6);
        for _ in 0..200 {
            spring.step(FRAME);
            assert!(spring.value() <= 0.6 + 1e-9);
        }
    }

    #[test]
    fn stays_in_unit_range_under_noisy_input() {
        let mut spring = ProgressSpring::new();
        let noise = [
            2.5, -1.0, 0.4, f64::NAN, 0.9, f64::INFINITY, 0.1, -0.3, 1.0,
        ];
        for (frame, raw) in noise.iter().cycle().take(500).enumerate() {
            spring.set_target(*raw);
            let value = spring.step(FRAME);
            assert!(
                (0.0..=1.0).contains(&value),
                "frame {frame}: value {value} escaped [0, 1]"
            );
        }
    }

    #[test]
    fn non_finite_target_is_treated_as_zero() {
        let mut spring = ProgressSpring::new();
        spring.set_target(0.8);
        run(&mut spring, 100);
        spring.set_target(f64::NAN);
        run(&mut spring, 200);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn huge_frame_gap_does_not_destabilise_the_integrator() {
        let mut spring = ProgressSpring::new();
        spring.set_target(1.0);
        spring.step(5.0);
        let first = spring.value();
        assert!((0.0..=1.0).contains(&first));
        run(&mut spring, 100);
        assert!(spring.settled());
    }

    #[test]
    fn settled_spring_reports_quiescent() {
        let mut spring = ProgressSpring::new();
        assert!(spring.settled());
        spring.set_target(0.5);
        assert!(!spring.settled());
        run(&mut spring, 200);
        assert!(spring.settled());
        let before = spring.value();
        spring.step(FRAME);
        assert_eq!(spring.value(), before);
    }
}
