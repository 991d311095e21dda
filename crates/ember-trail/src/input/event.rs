/// Host events the trail reacts to.
/// Coordinates are viewport pixels, origin top-left, Y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The viewport was resized to `width` × `height` pixels.
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    pub fn pointer_move(x: f32, y: f32) -> Self {
        InputEvent::PointerMove { x, y }
    }
}
