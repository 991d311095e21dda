use glam::Vec2;

use crate::api::config::{TrailConfig, DEFAULT_SEED};
use crate::api::error::Result;
use crate::core::rng::{RandomSource, Rng};
use crate::core::time::FramePacer;
use crate::input::event::InputEvent;
use crate::renderer::commands::FrameCommands;
use crate::renderer::instance::InstanceBuffer;
use crate::systems::particle::Particle;
use crate::systems::trail::TrailSimulator;

/// Mounted/unmounted state of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// The cursor trail as the host sees it: created at mount, fed events and
/// animation frames, torn down at unmount.
///
/// The host owns the platform side (listeners, frame scheduling, the actual
/// canvas). Once `unmount` has run, events and frames are ignored, so a stray
/// callback that slips through the host's cleanup can't draw or mutate.
pub struct TrailOverlay<R: RandomSource = Rng> {
    sim: TrailSimulator<R>,
    pacer: FramePacer,
    commands: FrameCommands,
    instances: InstanceBuffer,
    state: Lifecycle,
    frames: u64,
}

impl TrailOverlay<Rng> {
    /// Validate `config` and mount a trail on a `width` × `height` surface.
    pub fn mount(config: TrailConfig, width: u32, height: u32) -> Result<Self> {
        let rng = Rng::new(config.seed.unwrap_or(DEFAULT_SEED));
        Self::mount_with_rng(config, rng, width, height)
    }
}

impl<R: RandomSource> TrailOverlay<R> {
    /// Like `mount`, drawing all randomness from `rng`.
    pub fn mount_with_rng(config: TrailConfig, rng: R, width: u32, height: u32) -> Result<Self> {
        config.validate()?;
        log::debug!("trail mounted on {}x{} surface", width, height);
        Ok(Self {
            pacer: FramePacer::from_fixed_dt(config.fixed_dt),
            sim: TrailSimulator::new(config, rng, width, height),
            commands: FrameCommands::new(),
            instances: InstanceBuffer::new(),
            state: Lifecycle::Mounted,
            frames: 0,
        })
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == Lifecycle::Mounted
    }

    /// Feed one host event. Ignored after unmount.
    pub fn handle(&mut self, event: InputEvent) {
        if !self.is_mounted() {
            return;
        }
        match event {
            InputEvent::PointerMove { x, y } => {
                self.sim.pointer_move(x, y);
            }
            InputEvent::Resize { width, height } => {
                log::debug!("trail surface resized to {}x{}", width, height);
                self.sim.resize(width, height);
            }
        }
    }

    /// Run the tick(s) for one animation frame, `dt` seconds after the last.
    ///
    /// Returns the draw commands to replay this frame. Only the last tick's
    /// commands are kept when a frame runs several; a frame that runs none
    /// returns nothing, leaving the previous picture in place.
    pub fn frame(&mut self, dt: f32) -> &FrameCommands {
        self.commands.clear();
        if !self.is_mounted() {
            self.instances.clear();
            return &self.commands;
        }

        let ticks = self.pacer.ticks(dt);
        for _ in 0..ticks {
            self.commands.clear();
            self.sim.step(&mut self.commands);
        }
        if ticks > 0 {
            self.instances.rebuild(&self.commands);
        }
        self.frames += 1;
        &self.commands
    }

    /// Stop reacting to events and frames, and drop every live particle.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.state == Lifecycle::Unmounted {
            return;
        }
        log::debug!(
            "trail unmounted after {} frames, {} particles dropped",
            self.frames,
            self.sim.particle_count()
        );
        self.state = Lifecycle::Unmounted;
        self.sim.clear();
        self.commands.clear();
        self.instances.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        self.sim.particles()
    }

    pub fn particle_count(&self) -> usize {
        self.sim.particle_count()
    }

    /// Circles of the most recent frame that ran a tick.
    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    pub fn surface_size(&self) -> Vec2 {
        self.sim.surface_size()
    }

    /// Animation frames processed while mounted.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::TrailError;
    use crate::renderer::commands::testing::RecordingSurface;
    use crate::renderer::commands::DrawCommand;

    fn overlay() -> TrailOverlay {
        TrailOverlay::mount(TrailConfig::default().with_seed(42), 800, 600).unwrap()
    }

    #[test]
    fn mount_rejects_invalid_config() {
        let config = TrailConfig::default().with_palette(Vec::new());
        let err = TrailOverlay::mount(config, 800, 600).err().unwrap();
        assert!(matches!(err, TrailError::InvalidConfig(_)));
    }

    #[test]
    fn pointer_moves_spawn_and_frames_draw() {
        let mut o = overlay();
        o.handle(InputEvent::pointer_move(0.0, 100.0));
        assert_eq!(o.particle_count(), 3);

        let frame = o.frame(1.0 / 60.0);
        assert_eq!(frame.circle_count(), 3);
        assert_eq!(o.instances().instance_count(), 3);
        assert_eq!(o.frames(), 1);
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = overlay();
        let mut b = overlay();
        for o in [&mut a, &mut b] {
            o.handle(InputEvent::pointer_move(10.0, 10.0));
            o.handle(InputEvent::pointer_move(60.0, 35.0));
        }
        for _ in 0..5 {
            let fa = a.frame(0.016).as_slice().to_vec();
            let fb = b.frame(0.016).as_slice().to_vec();
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn unmount_stops_all_mutation_and_drawing() {
        let mut o = overlay();
        o.handle(InputEvent::pointer_move(0.0, 100.0));
        o.frame(0.016);
        o.unmount();
        assert!(!o.is_mounted());
        assert_eq!(o.particle_count(), 0);
        let frames = o.frames();

        o.handle(InputEvent::pointer_move(300.0, 300.0));
        o.handle(InputEvent::Resize { width: 10, height: 10 });
        let mut surface = RecordingSurface::default();
        for _ in 0..3 {
            o.frame(0.016).replay(&mut surface);
        }

        assert!(surface.calls.is_empty());
        assert_eq!(o.particle_count(), 0);
        assert_eq!(o.instances().instance_count(), 0);
        assert_eq!(o.surface_size(), Vec2::new(800.0, 600.0));
        assert_eq!(o.frames(), frames);
    }

    #[test]
    fn unmount_twice_is_harmless() {
        let mut o = overlay();
        o.unmount();
        o.unmount();
        assert_eq!(o.state(), Lifecycle::Unmounted);
    }

    #[test]
    fn resize_mid_flight_keeps_particles() {
        let mut o = overlay();
        o.handle(InputEvent::pointer_move(25.0, 0.0));
        o.frame(0.016);
        let alive = o.particle_count();
        assert!(alive > 0);

        o.handle(InputEvent::Resize { width: 1024, height: 768 });
        assert_eq!(o.particle_count(), alive);
        let frame = o.frame(0.016);
        assert_eq!(frame.as_slice()[0], DrawCommand::Clear { width: 1024.0, height: 768.0 });
    }

    #[test]
    fn fixed_pacing_skips_and_repeats_ticks() {
        let config = TrailConfig::default().with_seed(3).with_fixed_dt(0.01);
        let mut o = TrailOverlay::mount(config, 800, 600).unwrap();
        o.handle(InputEvent::pointer_move(30.0, 0.0));

        // Less than one tick of time: nothing drawn, nothing aged.
        assert!(o.frame(0.004).is_empty());
        assert!(o.particles().iter().all(|p| p.life == 1.0));

        // Two ticks' worth: particles age twice, one tick's worth of commands kept.
        let frame = o.frame(0.0205);
        assert_eq!(frame.iter().filter(|c| matches!(c, DrawCommand::Clear { .. })).count(), 1);
        assert!(o.particles().iter().all(|p| p.life <= 1.0 - 2.0 * 0.04 + 1e-6));
    }

    #[test]
    fn particles_expire_without_new_input() {
        let mut o = overlay();
        o.handle(InputEvent::pointer_move(400.0, 300.0));
        for _ in 0..30 {
            o.frame(0.016);
        }
        assert_eq!(o.particle_count(), 0);
        assert_eq!(o.instances().instance_count(), 0);
        assert_eq!(o.frame(0.016).circle_count(), 0);
    }
}
