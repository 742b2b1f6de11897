//! Wire format shared with the host renderer.
//!
//! All per-frame data is exposed as flat f32 buffers read directly out of
//! wasm memory. Layout (all values in f32 / 4 bytes):
//!
//! ```text
//! [Header: 16 floats]
//! [Sphere instances: max_instances × 12 floats]
//! [Ring vertices: max_vector_vertices × 6 floats]
//! [Star vertices: max_star_vertices × 6 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init; the TypeScript side
//! reads them to compute section offsets dynamically.

use bytemuck::{Pod, Zeroable};

use crate::config::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_INSTANCES: usize = 1;
pub const HEADER_INSTANCE_COUNT: usize = 2;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 3;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 4;
pub const HEADER_MAX_STAR_VERTICES: usize = 5;
pub const HEADER_STAR_VERTEX_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_VIEWPORT_W: usize = 9;
pub const HEADER_VIEWPORT_H: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 12;

/// Floats per ring vertex: x, y, r, g, b, a.
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per star vertex: x, y, size, r, g, b.
pub const STAR_VERTEX_FLOATS: usize = 6;

/// Floats per UI event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// A UI event communicated to the host each frame.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = EVENT_FLOATS;
}

/// Runtime-computed buffer layout derived from the app's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_vector_vertices: usize,
    pub max_star_vertices: usize,
    pub max_events: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where ring vertex data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where star vertex data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_instances: usize,
        max_vector_vertices: usize,
        max_star_vertices: usize,
        max_events: usize,
    ) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let vector_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let star_data_offset = vector_data_offset + max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let event_data_offset = star_data_offset + max_star_vertices * STAR_VERTEX_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_vector_vertices,
            max_star_vertices,
            max_events,
            instance_data_offset,
            vector_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_vector_vertices,
            config.max_star_vertices,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_event_is_16_bytes() {
        assert_eq!(std::mem::size_of::<UiEvent>(), 16);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(64, 1000, 2000, 32);

        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.vector_data_offset,
            layout.instance_data_offset + 64 * INSTANCE_FLOATS
        );
        assert_eq!(
            layout.star_data_offset,
            layout.vector_data_offset + 1000 * VECTOR_VERTEX_FLOATS
        );
        assert_eq!(
            layout.event_data_offset,
            layout.star_data_offset + 2000 * STAR_VERTEX_FLOATS
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + 32 * EVENT_FLOATS
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn from_default_config() {
        let config = AppConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.max_events, config.max_events);
    }
}
