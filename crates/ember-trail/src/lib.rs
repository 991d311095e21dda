//! Headless cursor particle trail.
//!
//! Embers spawn along the pointer's path, drift upward, shrink and fade.
//! The simulation records draw commands instead of drawing, so it runs and
//! tests without a browser; `ember-web` replays them onto a canvas.

pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{TrailConfig, DEFAULT_SEED};
pub use api::error::TrailError;
pub use api::overlay::{Lifecycle, TrailOverlay};
pub use api::types::{Rgba, EMBER_GLOW, EMBER_PALETTE};
pub use crate::core::rng::{RandomSource, Rng};
pub use crate::core::time::FramePacer;
pub use input::event::InputEvent;
pub use renderer::commands::{DrawCommand, FrameCommands, Surface};
pub use renderer::instance::{CircleInstance, InstanceBuffer};
pub use systems::particle::Particle;
pub use systems::trail::{PointerState, TrailSimulator};
