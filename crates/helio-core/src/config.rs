/// Configuration for the visualization, provided by the host at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed simulation timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in pixels.
    pub viewport_w: f32,
    /// Initial viewport height in pixels.
    pub viewport_h: f32,
    /// Number of backdrop stars.
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in, centered on the sun.
    pub star_spread: f32,
    /// Maximum number of sphere instances per frame.
    pub max_instances: usize,
    /// Maximum number of tessellated ring vertices per frame.
    pub max_vector_vertices: usize,
    /// Maximum number of star vertices per frame.
    pub max_star_vertices: usize,
    /// Maximum number of UI events per frame.
    pub max_events: usize,
    /// Seed for starfield generation and initial planet phases.
    pub rng_seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_w: 1280.0,
            viewport_h: 720.0,
            star_count: 1000,
            star_spread: 1000.0,
            max_instances: 64,
            max_vector_vertices: 16384,
            max_star_vertices: 2048,
            max_events: 32,
            rng_seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_star_capacity_fits_star_count() {
        let config = AppConfig::default();
        assert!(config.max_star_vertices >= config.star_count);
    }

    #[test]
    fn default_instance_capacity_fits_scene() {
        // Sun + eight planets, with headroom.
        let config = AppConfig::default();
        assert!(config.max_instances >= 9);
    }
}
