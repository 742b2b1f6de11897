use glam::Vec3;

/// A ray in world space. `dir` is unit length.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Minimum hit parameter — rejects intersections at the ray origin itself.
const T_MIN: f32 = 1e-4;

/// Intersect a ray with a sphere, returning the nearest hit parameter in
/// front of the origin, or `None` on a miss.
///
/// Assumes `ray.dir` is normalized, so the quadratic's leading coefficient
/// is 1 and the parameter is a world-space distance.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    // Near root first; fall back to the far root when inside the sphere.
    let t = -b - sq;
    if t > T_MIN {
        return Some(t);
    }
    let t = -b + sq;
    if t > T_MIN {
        return Some(t);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_sphere_ahead() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, 10.0), 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5, "t = {t}");
        assert!((ray.at(t) - Vec3::new(0.0, 0.0, 9.0)).length() < 1e-4);
    }

    #[test]
    fn misses_off_axis_sphere() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(ray_sphere(&ray, Vec3::new(5.0, 0.0, 10.0), 1.0).is_none());
    }

    #[test]
    fn ignores_sphere_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, -10.0), 1.0).is_none());
    }

    #[test]
    fn grazing_hit_counts() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        // Sphere offset by slightly less than its radius — still a hit.
        let t = ray_sphere(&ray, Vec3::new(0.99, 0.0, 10.0), 1.0);
        assert!(t.is_some());
    }

    #[test]
    fn inside_sphere_returns_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray_sphere(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5, "t = {t}");
    }
}
