//! The orrery itself — one owned state struct tying the scene, the orbit
//! simulation, pointer interaction, the camera, and the theme together.
//!
//! The host drives it with three calls per animation frame: drain input
//! into [`Orrery::handle_input`], run zero or more fixed simulation steps
//! via [`Orrery::step`], then [`Orrery::build_frame`] to refresh the render
//! buffers and the UI event stream.

use glam::{Vec2, Vec3};

use crate::assets::{TextureManifest, TextureRegistry};
use crate::bodies::{self, PlanetVisual, PLANET_COUNT, SPEED_MAX, SPEED_MIN};
use crate::bridge::protocol::UiEvent;
use crate::config::AppConfig;
use crate::input::InputEvent;
use crate::interact::pick_planet;
use crate::math::camera::Camera3D;
use crate::math::rng::Rng;
use crate::render::frame::{self, FrameBuffers};
use crate::scene::body::{Body, BodyId, BodyKind, Orbit, Visual};
use crate::scene::starfield::Starfield;
use crate::scene::Scene;
use crate::sim::orbit;
use crate::sim::transition::{CameraTransition, FLY_DURATION};
use crate::theme::Theme;

// ── Control-surface event kinds from the host ────────────────────────

pub const CUSTOM_TOGGLE_PAUSE: u32 = 1;
pub const CUSTOM_SET_PAUSED: u32 = 2;
pub const CUSTOM_TOGGLE_THEME: u32 = 3;
/// Viewport resize: a = width, b = height.
pub const CUSTOM_RESIZE: u32 = 99;

// ── UI event kinds to the host ───────────────────────────────────────

/// a = hovered planet index or -1, b/c = pointer NDC.
pub const EVENT_HOVER: f32 = 1.0;
/// a = 1 when paused.
pub const EVENT_PAUSE: f32 = 2.0;
/// a = 1 for light theme, 0 for dark.
pub const EVENT_THEME: f32 = 3.0;

// ── Camera home pose ─────────────────────────────────────────────────

const CAMERA_HOME_POS: Vec3 = Vec3::new(0.0, 2.0, 40.0);
const CAMERA_HOME_TARGET: Vec3 = Vec3::ZERO;

pub struct Orrery {
    config: AppConfig,
    scene: Scene,
    camera: Camera3D,
    /// Camera pose captured at startup, restored by double-click.
    home_pos: Vec3,
    home_target: Vec3,
    /// At most one in-flight camera move; a new request overwrites it.
    transition: Option<CameraTransition>,
    /// Hovered planet as a catalog index.
    hover: Option<usize>,
    /// Last pointer NDC, forwarded with hover events as the tooltip anchor.
    pointer: Vec2,
    paused: bool,
    theme: Theme,
    rng: Rng,
    starfield: Starfield,
    textures: TextureRegistry,
    /// Scene IDs of the planets, in catalog order.
    planet_ids: Vec<BodyId>,
    events: Vec<UiEvent>,
    frame: FrameBuffers,
    frame_counter: u64,
}

impl Orrery {
    pub fn new(config: AppConfig) -> Self {
        let camera = Camera3D::new(
            CAMERA_HOME_POS,
            CAMERA_HOME_TARGET,
            config.viewport_w,
            config.viewport_h,
        );
        let mut rng = Rng::new(config.rng_seed);
        let starfield = Starfield::generate(
            &mut rng,
            config.star_count,
            config.star_spread,
            Theme::default().foreground(),
        );
        let frame = FrameBuffers::new(&config);

        Self {
            scene: Scene::new(),
            camera,
            home_pos: CAMERA_HOME_POS,
            home_target: CAMERA_HOME_TARGET,
            transition: None,
            hover: None,
            pointer: Vec2::ZERO,
            paused: false,
            theme: Theme::default(),
            rng,
            starfield,
            textures: TextureRegistry::from_catalog(),
            planet_ids: Vec::with_capacity(PLANET_COUNT),
            events: Vec::with_capacity(config.max_events),
            frame,
            frame_counter: 0,
            config,
        }
    }

    /// Build the scene and apply the persisted theme (or the default).
    /// Call once before the first tick.
    pub fn init(&mut self, saved_theme: Option<Theme>) {
        let mut next_id = 0u32;
        let mut id = || {
            next_id += 1;
            BodyId(next_id)
        };

        self.scene.spawn(
            Body::new(id(), bodies::SUN_NAME, BodyKind::Sun)
                .with_radius(bodies::SUN_SIZE)
                .with_visual(Visual::Color(bodies::rgb(bodies::SUN_COLOR)))
                .with_emissive(bodies::SUN_EMISSIVE),
        );

        for def in bodies::planet_defs() {
            let visual = match def.visual {
                PlanetVisual::Color(hex) => Visual::Color(bodies::rgb(hex)),
                PlanetVisual::Texture { fallback, .. } => Visual::Texture {
                    // Catalog and registry are built from the same table,
                    // so every textured planet has a slot.
                    slot: self.textures.slot_for(def.name).unwrap_or(u32::MAX),
                    fallback: bodies::rgb(fallback),
                },
            };
            let angle = self.rng.next_range(0.0, std::f32::consts::TAU);
            let body_id = id();
            self.scene.spawn(
                Body::new(body_id, def.name, BodyKind::Planet)
                    .with_pos(orbit::orbit_pos(def.orbit_radius, angle))
                    .with_radius(def.size)
                    .with_visual(visual)
                    .with_orbit(Orbit {
                        radius: def.orbit_radius,
                        angle,
                        speed: bodies::DEFAULT_SPEED,
                    }),
            );
            self.planet_ids.push(body_id);
        }

        self.apply_theme(saved_theme.unwrap_or_default());
        log::info!(
            "orrery initialized: {} bodies, theme {}",
            self.scene.len(),
            self.theme.as_str()
        );
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Process one batch of host events. Runs on every tick, before any
    /// simulation steps, so hover reacts even on frames with no step.
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    self.pointer = Vec2::new(x, y);
                    self.hover = pick_planet(&self.scene, &self.camera, self.pointer)
                        .and_then(|id| self.planet_index(id));
                }
                InputEvent::Click { x, y } => {
                    if let Some(id) = pick_planet(&self.scene, &self.camera, Vec2::new(x, y)) {
                        // Safe: pick only returns IDs that are in the scene.
                        if let Some(body) = self.scene.get(id) {
                            self.transition =
                                Some(CameraTransition::fly_to(self.camera.pos, body.pos));
                        }
                    }
                }
                InputEvent::DoubleClick => {
                    self.transition = Some(CameraTransition::new(
                        self.camera.pos,
                        self.home_pos,
                        self.home_target,
                        FLY_DURATION,
                    ));
                }
                InputEvent::Custom { kind, a, b, .. } => match kind {
                    CUSTOM_TOGGLE_PAUSE => self.paused = !self.paused,
                    CUSTOM_SET_PAUSED => self.paused = a != 0.0,
                    CUSTOM_TOGGLE_THEME => self.toggle_theme(),
                    CUSTOM_RESIZE => self.camera.set_viewport(a, b),
                    _ => log::warn!("unknown control event kind {kind}"),
                },
            }
        }
    }

    // ── Simulation ───────────────────────────────────────────────────

    /// One fixed simulation tick: orbit advancement (unless paused) and
    /// camera transition progress. Transitions run even while paused.
    pub fn step(&mut self) {
        if !self.paused {
            orbit::step(&mut self.scene);
        }

        if let Some(tr) = self.transition.as_mut() {
            self.camera.pos = tr.advance(self.config.fixed_dt);
            self.camera.look_at(tr.focus());
            if tr.done() {
                self.transition = None;
            }
        }
    }

    /// Rebuild the render buffers and the per-frame UI event stream.
    pub fn build_frame(&mut self) {
        self.frame_counter += 1;
        frame::build_frame(
            &self.scene,
            &self.starfield,
            &self.camera,
            &self.textures,
            &mut self.frame,
        );

        self.events.clear();
        let hover = self.hover.map(|i| i as f32).unwrap_or(-1.0);
        self.push_event(UiEvent { kind: EVENT_HOVER, a: hover, b: self.pointer.x, c: self.pointer.y });
        self.push_event(UiEvent {
            kind: EVENT_PAUSE,
            a: if self.paused { 1.0 } else { 0.0 },
            ..Default::default()
        });
        self.push_event(UiEvent {
            kind: EVENT_THEME,
            a: if self.theme == Theme::Light { 1.0 } else { 0.0 },
            ..Default::default()
        });
    }

    fn push_event(&mut self, event: UiEvent) {
        if self.events.len() >= self.config.max_events {
            log::warn!("event buffer full ({} events), dropping", self.config.max_events);
            return;
        }
        self.events.push(event);
    }

    // ── Controls ─────────────────────────────────────────────────────

    /// Overwrite one planet's angular speed, clamped to the slider range.
    /// Unknown names are ignored with a warning.
    pub fn set_speed(&mut self, name: &str, value: f32) {
        let clamped = value.clamp(SPEED_MIN, SPEED_MAX);
        match self.scene.find_by_name_mut(name).and_then(|b| b.orbit.as_mut()) {
            Some(orbit) => orbit.speed = clamped,
            None => log::warn!("speed change for unknown planet {name:?}"),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Switch themes: new clear color, starfield rebuilt in the inverted
    /// point color. Persistence is the bridge's concern.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.starfield
            .regenerate(&mut self.rng, self.config.star_spread, theme.foreground());
    }

    pub fn toggle_theme(&mut self) {
        self.apply_theme(self.theme.toggled());
    }

    /// Override texture paths from a host-supplied JSON manifest.
    pub fn load_textures(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let manifest = TextureManifest::from_json(json)?;
        self.textures.apply_manifest(&manifest);
        Ok(())
    }

    /// Host report: the texture in `slot` failed to load. The planet falls
    /// back to its flat catalog color from the next frame on.
    pub fn texture_failed(&mut self, slot: u32) {
        self.textures.mark_failed(slot);
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn planet_count(&self) -> usize {
        self.planet_ids.len()
    }

    pub fn planet_name(&self, index: usize) -> Option<&str> {
        self.planet_ids
            .get(index)
            .and_then(|&id| self.scene.get(id))
            .map(|b| b.name.as_str())
    }

    pub fn planet_speed(&self, index: usize) -> Option<f32> {
        self.planet_ids
            .get(index)
            .and_then(|&id| self.scene.get(id))
            .and_then(|b| b.orbit)
            .map(|o| o.speed)
    }

    /// Hovered planet catalog index, or -1.
    pub fn hover_index(&self) -> i32 {
        self.hover.map(|i| i as i32).unwrap_or(-1)
    }

    pub fn hover_name(&self) -> Option<&str> {
        self.hover.and_then(|i| self.planet_name(i))
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Renderer clear color for the current theme.
    pub fn clear_color(&self) -> [f32; 3] {
        self.theme.background()
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn frame(&self) -> &FrameBuffers {
        &self.frame
    }

    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn transition_active(&self) -> bool {
        self.transition.is_some()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn planet_index(&self, id: BodyId) -> Option<usize> {
        self.planet_ids.iter().position(|&p| p == id)
    }
}
