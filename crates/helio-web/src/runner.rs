use helio_core::{AppConfig, InputEvent, InputQueue, Orrery, ProtocolLayout, Theme};

/// Drives the orrery from the browser's animation-frame callback.
///
/// Holds the input queue the exported functions write into, runs the fixed
/// simulation timestep over variable frame deltas, and persists the theme
/// to localStorage whenever a processed event changed it.
pub struct AppRunner {
    app: Orrery,
    input: InputQueue,
    layout: ProtocolLayout,
    fixed_dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    initialized: bool,
}

/// Cap on catch-up steps per frame, against the spiral of death after a
/// background-tab stall.
const MAX_STEPS_PER_TICK: u32 = 10;

impl AppRunner {
    pub fn new() -> Self {
        let config = AppConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        let fixed_dt = config.fixed_dt;
        Self {
            app: Orrery::new(config),
            input: InputQueue::new(),
            layout,
            fixed_dt,
            accumulator: 0.0,
            initialized: false,
        }
    }

    /// Initialize the scene, restoring the persisted theme if one exists.
    /// Call once after construction.
    pub fn init(&mut self) {
        self.app.init(load_saved_theme());
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: drain input, step the fixed timestep, rebuild buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let theme_before = self.app.theme();

        // Input is handled every frame, even when no simulation step is
        // due, so hover picking never lags the pointer.
        let events = self.input.drain();
        self.app.handle_input(&events);

        self.accumulator = (self.accumulator + dt).min(self.fixed_dt * MAX_STEPS_PER_TICK as f32);
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.app.step();
        }

        self.app.build_frame();

        if self.app.theme() != theme_before {
            save_theme(self.app.theme());
        }
    }

    /// Set one planet's speed by name (slider input). Values outside the
    /// slider range are clamped, never rejected.
    pub fn set_speed(&mut self, name: &str, value: f32) {
        self.app.set_speed(name, value);
    }

    pub fn load_textures(&mut self, json: &str) {
        if let Err(err) = self.app.load_textures(json) {
            log::warn!("ignoring malformed texture manifest: {err}");
        }
    }

    pub fn texture_failed(&mut self, slot: u32) {
        self.app.texture_failed(slot);
    }

    pub fn app(&self) -> &Orrery {
        &self.app
    }

    // ---- Pointer accessors for zero-copy buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.app.frame().spheres.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.app.frame().spheres.instance_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.app.frame().vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.app.frame().vectors.vertex_count() as u32
    }

    pub fn star_vertices_ptr(&self) -> *const f32 {
        self.app.frame().stars.vertices_ptr()
    }

    pub fn star_vertex_count(&self) -> u32 {
        self.app.frame().stars.vertex_count() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.app.events().as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.app.events().len() as u32
    }

    // ---- Capacity accessors (read once by TypeScript at startup) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_star_vertices(&self) -> u32 {
        self.layout.max_star_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

impl Default for AppRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the persisted theme, if the browser gives us storage at all.
fn load_saved_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let name = storage.get_item(Theme::STORAGE_KEY).ok()??;
    Theme::from_name(&name)
}

/// Persist the theme. Failures (private browsing, quota) are non-fatal.
fn save_theme(theme: Theme) {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|s| s.set_item(Theme::STORAGE_KEY, theme.as_str()));
    match stored {
        Some(Ok(())) => {}
        _ => log::warn!("could not persist theme {:?}", theme.as_str()),
    }
}
