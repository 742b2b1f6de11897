use bytemuck::{Pod, Zeroable};

/// One projected sphere for the host renderer.
/// 12 floats = 48 bytes per instance, read straight out of wasm memory.
///
/// `slot` is a texture slot index, or -1 for a flat-color body.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub slot: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub depth: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    /// Slot value meaning "no texture".
    pub const NO_TEXTURE: f32 = -1.0;
}

/// Bounded buffer of sphere instances, rebuilt every frame.
pub struct SphereBuffer {
    instances: Vec<SphereInstance>,
    max: usize,
}

impl SphereBuffer {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            max,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Push an instance, dropping it with a warning when the buffer is full.
    pub fn push(&mut self, instance: SphereInstance) {
        if self.instances.len() >= self.max {
            log::warn!("sphere buffer full ({} instances), dropping", self.max);
            return;
        }
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn max_instances(&self) -> usize {
        self.max
    }

    pub fn instances(&self) -> &[SphereInstance] {
        &self.instances
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
