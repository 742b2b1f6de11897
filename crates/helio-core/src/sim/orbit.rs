//! Circular orbital motion.
//!
//! Speeds are radians per simulation tick, not per second: the simulation
//! runs on a fixed 60 Hz timestep and each tick advances every planet by
//! exactly its speed. Changing a speed takes effect on the next tick.

use glam::Vec3;

use crate::scene::Scene;

/// Position on an orbit circle in the XZ plane. Planets never leave y = 0.
pub fn orbit_pos(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Advance every orbiting body by one tick. The pause flag is the caller's
/// concern; this function always steps.
pub fn step(scene: &mut Scene) {
    for body in scene.iter_mut() {
        if let Some(orbit) = body.orbit.as_mut() {
            orbit.angle += orbit.speed;
            body.pos = orbit_pos(orbit.radius, orbit.angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::body::{Body, BodyId, BodyKind, Orbit};

    fn scene_with_planet(radius: f32, angle: f32, speed: f32) -> Scene {
        let mut scene = Scene::new();
        scene.spawn(
            Body::new(BodyId(1), "Earth", BodyKind::Planet)
                .with_pos(orbit_pos(radius, angle))
                .with_orbit(Orbit { radius, angle, speed }),
        );
        scene
    }

    #[test]
    fn one_step_adds_exactly_speed() {
        let mut scene = scene_with_planet(12.0, 1.0, 0.01);
        step(&mut scene);
        let orbit = scene.get(BodyId(1)).unwrap().orbit.unwrap();
        assert_eq!(orbit.angle, 1.0 + 0.01);
    }

    #[test]
    fn position_stays_on_orbit_circle() {
        let mut scene = scene_with_planet(12.0, 0.0, 0.03);
        for _ in 0..500 {
            step(&mut scene);
            let body = scene.get(BodyId(1)).unwrap();
            let r2 = body.pos.x * body.pos.x + body.pos.z * body.pos.z;
            assert!((r2 - 144.0).abs() < 1e-3, "r² = {r2}");
            assert_eq!(body.pos.y, 0.0);
        }
    }

    #[test]
    fn angle_is_monotonic_for_nonnegative_speed() {
        let mut scene = scene_with_planet(6.0, 0.0, 0.0);
        step(&mut scene);
        let orbit = scene.get(BodyId(1)).unwrap().orbit.unwrap();
        assert_eq!(orbit.angle, 0.0);

        let mut scene = scene_with_planet(6.0, 0.0, 0.05);
        let mut prev = 0.0;
        for _ in 0..100 {
            step(&mut scene);
            let angle = scene.get(BodyId(1)).unwrap().orbit.unwrap().angle;
            assert!(angle >= prev);
            prev = angle;
        }
    }

    #[test]
    fn sun_does_not_move() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1), "Sun", BodyKind::Sun));
        scene.spawn(
            Body::new(BodyId(2), "Mars", BodyKind::Planet)
                .with_orbit(Orbit { radius: 15.0, angle: 0.0, speed: 0.01 }),
        );
        step(&mut scene);
        assert_eq!(scene.get(BodyId(1)).unwrap().pos, Vec3::ZERO);
        assert!(scene.get(BodyId(2)).unwrap().pos != Vec3::ZERO);
    }
}
