use bytemuck::{Pod, Zeroable};

use super::commands::{DrawCommand, FrameCommands};

/// One drawn ember, laid out for direct reads from wasm memory.
/// Must match the JS reader: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// X position in viewport pixels.
    pub x: f32,
    /// Y position in viewport pixels.
    pub y: f32,
    /// Radius in pixels.
    pub radius: f32,
    /// Global opacity the circle is drawn with (the particle's life).
    pub alpha: f32,
    /// Fill color, channels 0.0..=1.0.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Circles of the latest frame, for hosts that render from shared memory
/// instead of replaying draw commands.
pub struct InstanceBuffer {
    pub instances: Vec<CircleInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(128),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Replace the contents with the circles of `frame`.
    pub fn rebuild(&mut self, frame: &FrameCommands) {
        self.instances.clear();
        for command in frame.iter() {
            if let DrawCommand::Circle { center, radius, alpha, color } = *command {
                let [r, g, b, a] = color.to_array();
                self.instances.push(CircleInstance {
                    x: center.x,
                    y: center.y,
                    radius,
                    alpha,
                    r,
                    g,
                    b,
                    a,
                });
            }
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The instances as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
