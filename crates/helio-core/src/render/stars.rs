use bytemuck::{Pod, Zeroable};

/// One projected star point. 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    /// Point size in pixels, attenuated by depth.
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Bounded buffer of star points, rebuilt every frame.
pub struct StarBuffer {
    vertices: Vec<StarVertex>,
    max: usize,
}

impl StarBuffer {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max),
            max,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn push(&mut self, vertex: StarVertex) {
        if self.vertices.len() >= self.max {
            log::warn!("star buffer full ({} vertices), dropping", self.max);
            return;
        }
        self.vertices.push(vertex);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn max_vertices(&self) -> usize {
        self.max
    }

    pub fn vertices(&self) -> &[StarVertex] {
        &self.vertices
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}
