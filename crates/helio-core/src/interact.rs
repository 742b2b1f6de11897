//! Pointer picking: which planet is under the cursor.
//!
//! Builds a ray from the camera through the pointer's NDC position and
//! intersects it against planet spheres. The sun is deliberately not
//! pickable — hovering it shows nothing and clicking it does nothing.

use glam::Vec2;

use crate::math::camera::Camera3D;
use crate::math::ray::ray_sphere;
use crate::scene::body::BodyId;
use crate::scene::Scene;

/// Nearest planet hit by the pointer ray, or `None`.
pub fn pick_planet(scene: &Scene, camera: &Camera3D, ndc: Vec2) -> Option<BodyId> {
    let ray = camera.ray_from_ndc(ndc);

    let mut best: Option<(BodyId, f32)> = None;
    for body in scene.planets() {
        if let Some(t) = ray_sphere(&ray, body.pos, body.radius) {
            if best.map_or(true, |(_, best_t)| t < best_t) {
                best = Some((body.id, t));
            }
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::scene::body::{Body, BodyKind, Orbit};

    fn camera() -> Camera3D {
        Camera3D::new(Vec3::new(0.0, 0.0, 40.0), Vec3::ZERO, 800.0, 600.0)
    }

    fn planet(id: u32, name: &str, pos: Vec3, radius: f32) -> Body {
        Body::new(BodyId(id), name, BodyKind::Planet)
            .with_pos(pos)
            .with_radius(radius)
            .with_orbit(Orbit { radius: pos.length(), angle: 0.0, speed: 0.01 })
    }

    #[test]
    fn center_ray_hits_planet_at_origin() {
        let mut scene = Scene::new();
        scene.spawn(planet(1, "Earth", Vec3::ZERO, 0.6));
        let hit = pick_planet(&scene, &camera(), Vec2::ZERO);
        assert_eq!(hit, Some(BodyId(1)));
    }

    #[test]
    fn empty_space_misses() {
        let mut scene = Scene::new();
        scene.spawn(planet(1, "Earth", Vec3::ZERO, 0.6));
        assert_eq!(pick_planet(&scene, &camera(), Vec2::new(0.9, 0.9)), None);
    }

    #[test]
    fn nearest_of_two_aligned_planets_wins() {
        let mut scene = Scene::new();
        scene.spawn(planet(1, "Far", Vec3::new(0.0, 0.0, -20.0), 1.0));
        scene.spawn(planet(2, "Near", Vec3::new(0.0, 0.0, 10.0), 1.0));
        let hit = pick_planet(&scene, &camera(), Vec2::ZERO);
        assert_eq!(hit, Some(BodyId(2)));
    }

    #[test]
    fn sun_is_not_pickable() {
        let mut scene = Scene::new();
        scene.spawn(
            Body::new(BodyId(1), "Sun", BodyKind::Sun)
                .with_pos(Vec3::ZERO)
                .with_radius(3.0),
        );
        assert_eq!(pick_planet(&scene, &camera(), Vec2::ZERO), None);
    }

    #[test]
    fn off_center_planet_is_picked_through_its_ndc() {
        let cam = camera();
        let mut scene = Scene::new();
        let pos = Vec3::new(12.0, 0.0, 0.0);
        scene.spawn(planet(1, "Earth", pos, 0.6));

        // Project the planet center, convert back to NDC, and pick there.
        let proj = cam.project(pos).unwrap();
        let ndc = Vec2::new(
            proj.pos.x / cam.viewport_w * 2.0 - 1.0,
            1.0 - proj.pos.y / cam.viewport_h * 2.0,
        );
        assert_eq!(pick_planet(&scene, &cam, ndc), Some(BodyId(1)));
    }
}
