//! The cursor trail simulation: spawns embers along pointer motion, then
//! fades, shrinks and culls them once per tick.

use glam::Vec2;

use super::particle::Particle;
use crate::api::config::TrailConfig;
use crate::core::rng::RandomSource;
use crate::renderer::commands::{DrawCommand, FrameCommands};

/// Last two pointer positions, used to fill the gap between move events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub last: Vec2,
}

/// Live embers plus the state needed to spawn and draw them.
pub struct TrailSimulator<R: RandomSource> {
    particles: Vec<Particle>,
    pointer: PointerState,
    surface: Vec2,
    config: TrailConfig,
    rng: R,
}

impl<R: RandomSource> TrailSimulator<R> {
    /// The config is expected to be validated already.
    pub fn new(config: TrailConfig, rng: R, width: u32, height: u32) -> Self {
        Self {
            particles: Vec::with_capacity(64),
            pointer: PointerState::default(),
            surface: Vec2::new(width as f32, height as f32),
            config,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface
    }

    /// Particles to spawn for a pointer jump of `distance` pixels.
    pub fn spawn_count(&self, distance: f32) -> u32 {
        let wanted = (distance / self.config.spawn_spacing).ceil();
        (wanted.max(0.0) as u32).min(self.config.max_spawn_per_move)
    }

    /// Handle a pointer move to (x, y). Returns how many embers were spawned.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> u32 {
        self.pointer.current = Vec2::new(x, y);
        let last = self.pointer.last;
        let current = self.pointer.current;

        let count = self.spawn_count(last.distance(current));
        for _ in 0..count {
            let t = self.rng.next_f32();
            self.spawn(last.lerp(current, t));
        }

        self.pointer.last = current;
        count
    }

    fn spawn(&mut self, at: Vec2) {
        let cfg = &self.config;
        let rng = &mut self.rng;

        let jitter = cfg.spawn_jitter;
        let position = at + Vec2::new(rng.range(-jitter, jitter), rng.range(-jitter, jitter));
        let size = rng.range(cfg.size_range.0, cfg.size_range.1);
        let velocity = Vec2::new(
            rng.range(cfg.velocity_x_range.0, cfg.velocity_x_range.1),
            rng.range(cfg.velocity_y_range.0, cfg.velocity_y_range.1),
        );
        let color = cfg.palette[rng.index(cfg.palette.len())];

        self.particles.push(Particle::new(position, size, velocity, color));
    }

    /// Resize the drawing surface. Live particles keep their coordinates,
    /// even if those now fall outside it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Vec2::new(width as f32, height as f32);
    }

    /// Run one tick and record what it draws into `out`.
    /// Returns the number of embers drawn (= still alive).
    pub fn step(&mut self, out: &mut FrameCommands) -> usize {
        let cfg = &self.config;
        let rng = &mut self.rng;

        out.push(DrawCommand::Clear {
            width: self.surface.x,
            height: self.surface.y,
        });
        out.push(DrawCommand::Glow {
            blur: cfg.glow_blur,
            color: cfg.glow_color,
        });

        self.particles.retain_mut(|p| {
            let decay = cfg.life_decay + cfg.life_decay_jitter * rng.next_f32();
            p.advance(decay, cfg.shrink);
            if !p.is_visible(cfg.min_size) {
                return false;
            }
            out.push(DrawCommand::Circle {
                center: p.position,
                radius: p.size,
                alpha: p.life,
                color: p.color,
            });
            true
        });

        out.push(DrawCommand::ResetState);
        self.particles.len()
    }

    /// Drop every live particle and forget the pointer.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.pointer = PointerState::default();
    }
}
