//! Perspective camera: NDC-to-ray unprojection for picking and
//! world-to-screen projection for frame building.

use glam::{Vec2, Vec3};

use crate::math::ray::Ray;

/// Projection result from 3D world space to 2D screen space.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Screen position in pixels, origin top-left, Y down.
    pub pos: Vec2,
    /// View-space depth along the camera forward axis (positive = in front).
    pub depth: f32,
    /// Pixels per world unit at this depth, for sizing projected spheres.
    pub scale: f32,
}

/// Free-position perspective camera aimed at a look target.
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub pos: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub viewport_w: f32,
    pub viewport_h: f32,
}

impl Camera3D {
    pub const DEFAULT_FOV_DEG: f32 = 60.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 1000.0;

    pub fn new(pos: Vec3, target: Vec3, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            pos,
            target,
            fov_y: Self::DEFAULT_FOV_DEG.to_radians(),
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
            viewport_w,
            viewport_h,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_w / self.viewport_h
    }

    /// Re-aim the camera at a world point without moving it.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_viewport(&mut self, w: f32, h: f32) {
        if w > 0.0 && h > 0.0 {
            self.viewport_w = w;
            self.viewport_h = h;
        }
    }

    /// Orthonormal view basis: (forward, right, up).
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.pos).normalize_or_zero();
        let forward = if forward == Vec3::ZERO { Vec3::NEG_Z } else { forward };
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        // Degenerate when looking straight up/down the Y axis.
        let right = if right == Vec3::ZERO { Vec3::X } else { right };
        let up = right.cross(forward);
        (forward, right, up)
    }

    /// Build a world-space ray through a normalized device coordinate,
    /// x and y in [-1, 1] with Y pointing up.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let (forward, right, up) = self.basis();
        let tan_half = (self.fov_y * 0.5).tan();
        let dir = forward + right * (ndc.x * tan_half * self.aspect()) + up * (ndc.y * tan_half);
        Ray::new(self.pos, dir)
    }

    /// Project a world position to screen pixels. Returns `None` for points
    /// outside the near/far range.
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let (forward, right, up) = self.basis();
        let rel = world - self.pos;
        let depth = rel.dot(forward);
        if depth < self.near || depth > self.far {
            return None;
        }

        let tan_half = (self.fov_y * 0.5).tan();
        let half_h = depth * tan_half;
        let half_w = half_h * self.aspect();

        let ndc_x = rel.dot(right) / half_w;
        let ndc_y = rel.dot(up) / half_h;

        let sx = (ndc_x + 1.0) * 0.5 * self.viewport_w;
        let sy = (1.0 - ndc_y) * 0.5 * self.viewport_h;

        Some(Projection {
            pos: Vec2::new(sx, sy),
            depth,
            scale: (self.viewport_h * 0.5) / half_h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera3D {
        Camera3D::new(Vec3::new(0.0, 2.0, 40.0), Vec3::ZERO, 800.0, 600.0)
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = test_camera();
        let proj = camera.project(Vec3::ZERO).unwrap();
        assert!((proj.pos.x - 400.0).abs() < 1e-2, "x = {}", proj.pos.x);
        assert!((proj.pos.y - 300.0).abs() < 1e-2, "y = {}", proj.pos.y);
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = test_camera();
        let ray = camera.ray_from_ndc(Vec2::ZERO);
        let to_target = (camera.target - camera.pos).normalize();
        assert!((ray.dir - to_target).length() < 1e-5);
    }

    #[test]
    fn projection_inverts_unprojection() {
        let camera = test_camera();
        // A point 10 units along the ray through an off-center NDC must
        // project back onto the same screen pixel.
        let ndc = Vec2::new(0.4, -0.3);
        let ray = camera.ray_from_ndc(ndc);
        let proj = camera.project(ray.at(10.0)).unwrap();
        let expected_x = (ndc.x + 1.0) * 0.5 * camera.viewport_w;
        let expected_y = (1.0 - ndc.y) * 0.5 * camera.viewport_h;
        assert!((proj.pos.x - expected_x).abs() < 0.1, "x = {}", proj.pos.x);
        assert!((proj.pos.y - expected_y).abs() < 0.1, "y = {}", proj.pos.y);
    }

    #[test]
    fn near_plane_culls() {
        let camera = test_camera();
        // Behind the camera.
        assert!(camera.project(Vec3::new(0.0, 2.0, 50.0)).is_none());
    }

    #[test]
    fn closer_points_project_larger() {
        let camera = test_camera();
        let near = camera.project(Vec3::new(0.0, 0.0, 20.0)).unwrap();
        let far = camera.project(Vec3::new(0.0, 0.0, -20.0)).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn screen_y_is_inverted() {
        let camera = test_camera();
        // A point above the look target lands in the upper half of the screen.
        let above = camera.project(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert!(above.pos.y < 300.0, "y = {}", above.pos.y);
    }
}
