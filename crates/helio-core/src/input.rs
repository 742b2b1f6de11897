/// Input event types the core understands.
/// Pointer coordinates are normalized device coordinates: [-1, 1] on both
/// axes relative to the render surface, Y pointing up.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor moved. Drives hover picking on every event, no debouncing.
    PointerMove { x: f32, y: f32 },
    /// A click was released without dragging.
    Click { x: f32, y: f32 },
    /// A double-click anywhere on the surface.
    DoubleClick,
    /// A control-surface event from the host UI (buttons, resize).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host writes events into the queue between frames; the app reads and
/// drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the bridge).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
