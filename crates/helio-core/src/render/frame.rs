//! Per-frame projection of the 3D scene into the flat buffers the host
//! renderer consumes: depth-sorted sphere instances, stroked orbit rings,
//! and star points.

#[cfg(feature = "vectors")]
use glam::Vec2;

use crate::assets::TextureRegistry;
use crate::config::AppConfig;
use crate::math::camera::Camera3D;
use crate::render::instance::{SphereBuffer, SphereInstance};
use crate::render::stars::{StarBuffer, StarVertex};
#[cfg(feature = "vectors")]
use crate::render::vector::{VectorColor, VectorState};
use crate::scene::body::Visual;
use crate::scene::starfield::Starfield;
use crate::scene::Scene;
#[cfg(any(feature = "vectors", test))]
use crate::sim::orbit::orbit_pos;

/// Sample count per orbit ring.
#[cfg(feature = "vectors")]
const ORBIT_SEGMENTS: usize = 64;
#[cfg(feature = "vectors")]
const ORBIT_LINE_WIDTH: f32 = 1.0;
/// Muted grey, readable on both themes.
#[cfg(feature = "vectors")]
const ORBIT_RING_COLOR: VectorColor = VectorColor::new(0.267, 0.267, 0.267, 1.0);

/// Star point sizing: nominal 1 world unit, attenuated by depth and clamped
/// so stars right next to the camera don't become blobs.
const STAR_SIZE_MIN: f32 = 0.5;
const STAR_SIZE_MAX: f32 = 6.0;

/// All per-frame output buffers.
pub struct FrameBuffers {
    pub spheres: SphereBuffer,
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    pub stars: StarBuffer,
}

impl FrameBuffers {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            spheres: SphereBuffer::with_capacity(config.max_instances),
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            stars: StarBuffer::with_capacity(config.max_star_vertices),
        }
    }
}

/// Rebuild every buffer from the current scene and camera.
pub fn build_frame(
    scene: &Scene,
    starfield: &Starfield,
    camera: &Camera3D,
    textures: &TextureRegistry,
    out: &mut FrameBuffers,
) {
    out.spheres.clear();
    out.stars.clear();
    #[cfg(feature = "vectors")]
    out.vectors.clear();

    project_bodies(scene, camera, textures, &mut out.spheres);
    #[cfg(feature = "vectors")]
    project_rings(scene, camera, &mut out.vectors);
    project_stars(starfield, camera, &mut out.stars);
}

/// Project sun and planets, sorted back-to-front (painter's algorithm).
fn project_bodies(
    scene: &Scene,
    camera: &Camera3D,
    textures: &TextureRegistry,
    out: &mut SphereBuffer,
) {
    let mut items: Vec<SphereInstance> = Vec::with_capacity(scene.len());

    for body in scene.iter() {
        let Some(proj) = camera.project(body.pos) else {
            continue;
        };

        let (slot, [r, g, b]) = match body.visual {
            Visual::Color(rgb) => (SphereInstance::NO_TEXTURE, rgb),
            Visual::Texture { slot, fallback } => {
                if textures.is_failed(slot) {
                    (SphereInstance::NO_TEXTURE, fallback)
                } else {
                    (slot as f32, fallback)
                }
            }
        };

        items.push(SphereInstance {
            x: proj.pos.x,
            y: proj.pos.y,
            radius: body.radius * proj.scale,
            slot,
            r,
            g,
            b,
            emissive: body.emissive,
            depth: proj.depth,
            ..Default::default()
        });
    }

    items.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));
    for item in items {
        out.push(item);
    }
}

/// Stroke one guide circle per orbiting body. A ring that crosses the near
/// plane is drawn as its visible arcs instead of a closed polygon.
#[cfg(feature = "vectors")]
fn project_rings(scene: &Scene, camera: &Camera3D, out: &mut VectorState) {
    for body in scene.iter() {
        let Some(orbit) = body.orbit else { continue };

        let mut points: Vec<Option<Vec2>> = Vec::with_capacity(ORBIT_SEGMENTS);
        for i in 0..ORBIT_SEGMENTS {
            let angle = i as f32 / ORBIT_SEGMENTS as f32 * std::f32::consts::TAU;
            points.push(camera.project(orbit_pos(orbit.radius, angle)).map(|p| p.pos));
        }

        if points.iter().all(|p| p.is_some()) {
            let ring: Vec<Vec2> = points.into_iter().flatten().collect();
            out.stroke_polygon(&ring, ORBIT_LINE_WIDTH, ORBIT_RING_COLOR);
        } else {
            // Partially visible: stroke each contiguous visible run.
            let mut run: Vec<Vec2> = Vec::new();
            for p in points.into_iter().chain(std::iter::once(None)) {
                match p {
                    Some(p) => run.push(p),
                    None => {
                        out.stroke_polyline(&run, ORBIT_LINE_WIDTH, ORBIT_RING_COLOR);
                        run.clear();
                    }
                }
            }
        }
    }
}

fn project_stars(starfield: &Starfield, camera: &Camera3D, out: &mut StarBuffer) {
    let [r, g, b] = starfield.color();
    for &pos in starfield.positions() {
        let Some(proj) = camera.project(pos) else {
            continue;
        };
        out.push(StarVertex {
            x: proj.pos.x,
            y: proj.pos.y,
            size: proj.scale.clamp(STAR_SIZE_MIN, STAR_SIZE_MAX),
            r,
            g,
            b,
        });
    }
}
