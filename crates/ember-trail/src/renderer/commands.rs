//! Draw commands recorded by a simulation tick, and the `Surface` trait that
//! replays them.
//!
//! The simulator never touches a real canvas. It records what one tick would
//! draw; the host replays that onto a 2D context (`ember-web` does this for
//! `CanvasRenderingContext2d`), and tests replay onto a recorder.

use glam::Vec2;

use crate::api::types::Rgba;

/// One immediate-mode 2D drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear { width: f32, height: f32 },
    /// Set the shadow glow used by subsequent fills.
    Glow { blur: f32, color: Rgba },
    /// Fill a circle with `color` at global opacity `alpha`.
    Circle {
        center: Vec2,
        radius: f32,
        alpha: f32,
        color: Rgba,
    },
    /// Restore global alpha to 1 and remove the glow.
    ResetState,
}

/// A 2D drawing target with the handful of operations the trail needs.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn set_glow(&mut self, blur: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32, color: Rgba);
    /// Global alpha back to 1, shadow blur back to 0.
    fn reset(&mut self);
}

/// The commands of one frame, in draw order.
#[derive(Debug, Clone, Default)]
pub struct FrameCommands {
    commands: Vec<DrawCommand>,
}

impl FrameCommands {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of `Circle` commands.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Play every command onto `surface`, in order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear { width, height } => surface.clear(width, height),
                DrawCommand::Glow { blur, color } => surface.set_glow(blur, color),
                DrawCommand::Circle { center, radius, alpha, color } => {
                    surface.fill_circle(center, radius, alpha, color)
                }
                DrawCommand::ResetState => surface.reset(),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Surface that logs every call as a string.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f32, height: f32) {
            self.calls.push(format!("clear {}x{}", width, height));
        }

        fn set_glow(&mut self, blur: f32, color: Rgba) {
            self.calls.push(format!("glow {} {}", blur, color.css()));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32, color: Rgba) {
            self.calls.push(format!(
                "circle ({}, {}) r={} alpha={} {}",
                center.x,
                center.y,
                radius,
                alpha,
                color.css()
            ));
        }

        fn reset(&mut self) {
            self.calls.push("reset".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;
    use crate::api::types::{EMBER_GLOW, EMBER_PALETTE};

    #[test]
    fn replay_preserves_order() {
        let mut frame = FrameCommands::new();
        frame.push(DrawCommand::Clear { width: 800.0, height: 600.0 });
        frame.push(DrawCommand::Glow { blur: 2.0, color: EMBER_GLOW });
        frame.push(DrawCommand::Circle {
            center: Vec2::new(5.0, 6.0),
            radius: 1.5,
            alpha: 0.5,
            color: EMBER_PALETTE[1],
        });
        frame.push(DrawCommand::ResetState);

        let mut surface = RecordingSurface::default();
        frame.replay(&mut surface);
        assert_eq!(
            surface.calls,
            vec![
                "clear 800x600",
                "glow 2 rgba(212, 27, 43, 1)",
                "circle (5, 6) r=1.5 alpha=0.5 rgba(255, 69, 0, 0.6)",
                "reset",
            ]
        );
    }

    #[test]
    fn circle_count_ignores_state_commands() {
        let mut frame = FrameCommands::new();
        frame.push(DrawCommand::ResetState);
        assert_eq!(frame.circle_count(), 0);
        frame.push(DrawCommand::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
            alpha: 1.0,
            color: EMBER_PALETTE[0],
        });
        assert_eq!(frame.circle_count(), 1);
        assert_eq!(frame.len(), 2);
        frame.clear();
        assert!(frame.is_empty());
    }
}
