//! Time-bounded camera fly-to.
//!
//! A transition is an optional field of the app state, advanced once per
//! tick. Starting a new one simply overwrites the field, so rapid clicks
//! resolve as last-click-wins instead of two interpolations fighting over
//! the camera.

use glam::Vec3;

/// Camera offset from a focused body, so the target fills the view instead
/// of sitting inside the lens.
pub const FLY_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 5.0);

/// Fly duration in seconds.
pub const FLY_DURATION: f32 = 1.0;

/// An in-flight camera move: linear position interpolation with continuous
/// re-aiming at a fixed focus point. No easing, no overshoot.
#[derive(Debug, Clone, Copy)]
pub struct CameraTransition {
    start: Vec3,
    target: Vec3,
    focus: Vec3,
    elapsed: f32,
    duration: f32,
}

impl CameraTransition {
    pub fn new(start: Vec3, target: Vec3, focus: Vec3, duration: f32) -> Self {
        Self {
            start,
            target,
            focus,
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
        }
    }

    /// Fly from the camera's current position to just behind a clicked body.
    /// The focus point is captured at click time and does not track the
    /// body afterwards.
    pub fn fly_to(camera_pos: Vec3, hit_pos: Vec3) -> Self {
        Self::new(camera_pos, hit_pos + FLY_OFFSET, hit_pos, FLY_DURATION)
    }

    /// Normalized progress in [0, 1].
    pub fn t(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn done(&self) -> bool {
        self.t() >= 1.0
    }

    /// Point the camera re-aims at every tick.
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Advance by one tick and return the new camera position.
    /// Lands on the target exactly at completion, no lerp residue.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt;
        let t = self.t();
        if t >= 1.0 {
            self.target
        } else {
            self.start.lerp(self.target, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_start_and_ends_at_target() {
        let start = Vec3::new(0.0, 2.0, 40.0);
        let target = Vec3::new(12.0, 2.0, 5.0);
        let mut tr = CameraTransition::new(start, target, Vec3::ZERO, 1.0);

        assert_eq!(tr.t(), 0.0);
        let mut pos = start;
        for _ in 0..60 {
            pos = tr.advance(1.0 / 60.0);
        }
        assert!(tr.done());
        assert!((pos - target).length() < 1e-3, "pos = {pos}");
    }

    #[test]
    fn interpolation_is_monotonic() {
        let start = Vec3::ZERO;
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut tr = CameraTransition::new(start, target, Vec3::ZERO, 1.0);

        let mut prev = 0.0;
        for _ in 0..80 {
            let pos = tr.advance(1.0 / 60.0);
            assert!(pos.x >= prev, "went backwards: {} < {prev}", pos.x);
            prev = pos.x;
        }
    }

    #[test]
    fn clamps_past_duration() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let mut tr = CameraTransition::new(Vec3::ZERO, target, Vec3::ZERO, 0.5);
        // Overshoot the duration by a lot; position must pin to the target.
        let pos = tr.advance(10.0);
        assert_eq!(pos, target);
        assert_eq!(tr.t(), 1.0);
        assert!(tr.done());
    }

    #[test]
    fn fly_to_applies_viewing_offset() {
        let hit = Vec3::new(12.0, 0.0, 0.0);
        let mut tr = CameraTransition::fly_to(Vec3::new(0.0, 2.0, 40.0), hit);
        assert_eq!(tr.focus(), hit);
        let end = tr.advance(FLY_DURATION);
        assert_eq!(end, hit + FLY_OFFSET);
    }

    #[test]
    fn zero_duration_is_instant_not_nan() {
        let target = Vec3::new(5.0, 0.0, 0.0);
        let mut tr = CameraTransition::new(Vec3::ZERO, target, Vec3::ZERO, 0.0);
        let pos = tr.advance(1.0 / 60.0);
        assert_eq!(pos, target);
    }
}
