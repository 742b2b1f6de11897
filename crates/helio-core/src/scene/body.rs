use glam::Vec3;

/// Unique identifier for a body in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
}

/// Visual appearance of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    /// Flat RGB color.
    Color([f32; 3]),
    /// Texture slot in the registry, with a flat-color fallback used when
    /// the host reports the texture failed to load.
    Texture { slot: u32, fallback: [f32; 3] },
}

impl Visual {
    /// The flat color to use when no texture is available.
    pub fn flat_color(&self) -> [f32; 3] {
        match *self {
            Visual::Color(rgb) => rgb,
            Visual::Texture { fallback, .. } => fallback,
        }
    }
}

/// Circular-orbit state for a planet. Angle advances by `speed` once per
/// simulation tick; the radius never changes.
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    pub radius: f32,
    /// Current angle in radians. Wraps implicitly via trig.
    pub angle: f32,
    /// Radians per simulation tick, in [0, 0.05].
    pub speed: f32,
}

/// Fat body struct — the sun or one planet, with optional orbit state.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    /// Position in world space. For planets, always on the XZ plane.
    pub pos: Vec3,
    /// Body sphere radius in world units.
    pub radius: f32,
    pub visual: Visual,
    /// Self-illumination, 0 for lit bodies, 1 for the sun.
    pub emissive: f32,
    /// Orbit state — `None` for the sun.
    pub orbit: Option<Orbit>,
}

impl Body {
    pub fn new(id: BodyId, name: impl Into<String>, kind: BodyKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            pos: Vec3::ZERO,
            radius: 1.0,
            visual: Visual::Color([1.0, 1.0, 1.0]),
            emissive: 0.0,
            orbit: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let body = Body::new(BodyId(3), "Saturn", BodyKind::Planet)
            .with_radius(1.0)
            .with_orbit(Orbit { radius: 23.0, angle: 0.0, speed: 0.01 });
        assert_eq!(body.name, "Saturn");
        assert_eq!(body.orbit.unwrap().radius, 23.0);
        assert_eq!(body.emissive, 0.0);
    }

    #[test]
    fn flat_color_falls_back_for_textures() {
        let v = Visual::Texture { slot: 2, fallback: [0.2, 0.4, 0.8] };
        assert_eq!(v.flat_color(), [0.2, 0.4, 0.8]);
        let c = Visual::Color([1.0, 0.0, 0.0]);
        assert_eq!(c.flat_color(), [1.0, 0.0, 0.0]);
    }
}
