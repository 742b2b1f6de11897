//! Randomized starfield backdrop.
//!
//! Stars are scattered uniformly in a cube centered on the sun and live in
//! world space, so the camera moves through them like everything else. The
//! field is regenerated on every theme change with the theme's foreground
//! color, inverting the points against the new background.

use glam::Vec3;

use crate::math::rng::Rng;

pub struct Starfield {
    positions: Vec<Vec3>,
    color: [f32; 3],
}

impl Starfield {
    /// Scatter `count` stars in a cube with the given edge length.
    pub fn generate(rng: &mut Rng, count: usize, spread: f32, color: [f32; 3]) -> Self {
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.next_f32() - 0.5) * spread,
                (rng.next_f32() - 0.5) * spread,
                (rng.next_f32() - 0.5) * spread,
            ));
        }
        Self { positions, color }
    }

    /// Replace the field with freshly scattered stars in a new color.
    pub fn regenerate(&mut self, rng: &mut Rng, spread: f32, color: [f32; 3]) {
        let count = self.positions.len();
        *self = Self::generate(rng, count, spread, color);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        let mut rng = Rng::new(42);
        let field = Starfield::generate(&mut rng, 1000, 1000.0, [1.0, 1.0, 1.0]);
        assert_eq!(field.len(), 1000);
    }

    #[test]
    fn stars_stay_inside_cube() {
        let mut rng = Rng::new(42);
        let field = Starfield::generate(&mut rng, 500, 1000.0, [1.0, 1.0, 1.0]);
        for p in field.positions() {
            assert!(p.x.abs() <= 500.0 && p.y.abs() <= 500.0 && p.z.abs() <= 500.0);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        let fa = Starfield::generate(&mut a, 100, 1000.0, [1.0, 1.0, 1.0]);
        let fb = Starfield::generate(&mut b, 100, 1000.0, [1.0, 1.0, 1.0]);
        assert_eq!(fa.positions(), fb.positions());
    }

    #[test]
    fn regenerate_keeps_count_and_updates_color() {
        let mut rng = Rng::new(42);
        let mut field = Starfield::generate(&mut rng, 200, 1000.0, [1.0, 1.0, 1.0]);
        let before = field.positions().to_vec();
        field.regenerate(&mut rng, 1000.0, [0.0, 0.0, 0.0]);
        assert_eq!(field.len(), 200);
        assert_eq!(field.color(), [0.0, 0.0, 0.0]);
        assert_ne!(field.positions(), before.as_slice());
    }
}
