//! A single ember of the cursor trail.

use glam::Vec2;

use crate::api::types::Rgba;

/// One ember: drifts at constant velocity while it shrinks and fades.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Radius in pixels.
    pub size: f32,
    /// Pixels per tick.
    pub velocity: Vec2,
    /// 1.0 at spawn; also the draw opacity.
    pub life: f32,
    pub color: Rgba,
}

impl Particle {
    pub const INITIAL_LIFE: f32 = 1.0;

    pub fn new(position: Vec2, size: f32, velocity: Vec2, color: Rgba) -> Self {
        Particle {
            position,
            size,
            velocity,
            life: Self::INITIAL_LIFE,
            color,
        }
    }

    /// Advance one tick: lose `decay` life, move, shrink by `shrink`.
    pub fn advance(&mut self, decay: f32, shrink: f32) {
        self.life -= decay;
        self.position += self.velocity;
        self.size *= shrink;
    }

    /// Still worth drawing. Invisible particles are culled.
    pub fn is_visible(&self, min_size: f32) -> bool {
        self.life > 0.0 && self.size > min_size
    }
}
