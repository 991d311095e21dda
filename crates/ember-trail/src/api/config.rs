use serde::{Deserialize, Serialize};

use crate::api::error::{Result, TrailError};
use crate::api::types::{Rgba, EMBER_GLOW, EMBER_PALETTE};

/// Seed used when the config doesn't name one.
pub const DEFAULT_SEED: u64 = 0x5EED_E3BE;

/// Tuning for the particle trail. Every field has a default, so a partial
/// JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Maximum particles spawned by one pointer-move event.
    pub max_spawn_per_move: u32,
    /// Pointer travel (px) per spawned particle, before the cap.
    pub spawn_spacing: f32,
    /// Spawn points are offset by up to ± this many pixels on each axis.
    pub spawn_jitter: f32,
    /// Initial radius range, [min, max).
    pub size_range: (f32, f32),
    /// Horizontal velocity range in px/tick, [min, max).
    pub velocity_x_range: (f32, f32),
    /// Vertical velocity range in px/tick, [min, max). Negative floats upward.
    pub velocity_y_range: (f32, f32),
    /// Life lost every tick.
    pub life_decay: f32,
    /// Extra life lost every tick, uniform in [0, life_decay_jitter).
    pub life_decay_jitter: f32,
    /// Radius multiplier applied every tick.
    pub shrink: f32,
    /// Particles at or below this radius are culled.
    pub min_size: f32,
    /// Shadow blur radius of the glow.
    pub glow_blur: f32,
    /// Shadow color of the glow.
    pub glow_color: Rgba,
    /// Colors picked uniformly at spawn.
    pub palette: Vec<Rgba>,
    /// Tick length in seconds. `None` runs one tick per animation frame.
    pub fixed_dt: Option<f32>,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_spawn_per_move: 3,
            spawn_spacing: 10.0,
            spawn_jitter: 2.0,
            size_range: (0.5, 2.0),
            velocity_x_range: (-0.4, 0.4),
            velocity_y_range: (-2.0, -0.5),
            life_decay: 0.04,
            life_decay_jitter: 0.03,
            shrink: 0.92,
            min_size: 0.1,
            glow_blur: 2.0,
            glow_color: EMBER_GLOW,
            palette: EMBER_PALETTE.to_vec(),
            fixed_dt: None,
            seed: None,
        }
    }
}

impl TrailConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TrailConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fixed_dt(mut self, dt: f32) -> Self {
        self.fixed_dt = Some(dt);
        self
    }

    pub fn with_palette(mut self, palette: Vec<Rgba>) -> Self {
        self.palette = palette;
        self
    }

    /// Check that every particle this config spawns eventually expires.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(invalid("palette must name at least one color"));
        }
        if !(self.shrink > 0.0 && self.shrink < 1.0) {
            return Err(invalid(format!("shrink must be in (0, 1), got {}", self.shrink)));
        }
        if !(self.spawn_spacing > 0.0) {
            return Err(invalid(format!(
                "spawn_spacing must be positive, got {}",
                self.spawn_spacing
            )));
        }
        for (name, value) in [
            ("spawn_jitter", self.spawn_jitter),
            ("life_decay", self.life_decay),
            ("life_decay_jitter", self.life_decay_jitter),
            ("min_size", self.min_size),
            ("glow_blur", self.glow_blur),
        ] {
            if !(value >= 0.0) {
                return Err(invalid(format!("{} must be non-negative, got {}", name, value)));
            }
        }
        for (name, (lo, hi)) in [
            ("size_range", self.size_range),
            ("velocity_x_range", self.velocity_x_range),
            ("velocity_y_range", self.velocity_y_range),
        ] {
            if !(lo <= hi) {
                return Err(invalid(format!("{} is reversed: ({}, {})", name, lo, hi)));
            }
        }
        if self.size_range.0 <= 0.0 {
            return Err(invalid("size_range must be positive"));
        }
        if let Some(dt) = self.fixed_dt {
            if !(dt > 0.0) {
                return Err(invalid(format!("fixed_dt must be positive, got {}", dt)));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> TrailError {
    TrailError::InvalidConfig(msg.into())
}
