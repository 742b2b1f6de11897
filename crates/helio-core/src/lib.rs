pub mod app;
pub mod assets;
pub mod bodies;
pub mod bridge;
pub mod config;
pub mod input;
pub mod interact;
pub mod math;
pub mod render;
pub mod scene;
pub mod sim;
pub mod theme;

// Re-export key types at crate root for convenience
pub use app::{
    Orrery, CUSTOM_RESIZE, CUSTOM_SET_PAUSED, CUSTOM_TOGGLE_PAUSE, CUSTOM_TOGGLE_THEME,
    EVENT_HOVER, EVENT_PAUSE, EVENT_THEME,
};
pub use assets::{TextureManifest, TextureRegistry};
pub use bodies::{planet_defs, PlanetDef, PlanetVisual, PLANET_COUNT};
pub use bridge::protocol::{ProtocolLayout, UiEvent};
pub use config::AppConfig;
pub use input::{InputEvent, InputQueue};
pub use math::camera::{Camera3D, Projection};
pub use math::ray::Ray;
pub use math::rng::Rng;
pub use render::frame::FrameBuffers;
pub use render::instance::{SphereBuffer, SphereInstance};
pub use render::stars::{StarBuffer, StarVertex};
pub use scene::body::{Body, BodyId, BodyKind, Orbit, Visual};
pub use scene::starfield::Starfield;
pub use scene::Scene;
pub use sim::transition::CameraTransition;
pub use theme::Theme;

#[cfg(feature = "vectors")]
pub use render::vector::{VectorColor, VectorState, VectorVertex};
