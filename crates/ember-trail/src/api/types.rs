use serde::{Deserialize, Serialize};

/// An 8-bit RGB color with a float alpha, as written in CSS `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0 to 1.0.
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    /// CSS color string, e.g. `rgba(212, 27, 43, 0.6)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Channels normalized to 0.0..=1.0.
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

/// Ember palette: red, orange-red, dark orange, white-hot core.
pub const EMBER_PALETTE: [Rgba; 4] = [
    Rgba::new(212, 27, 43, 0.6),
    Rgba::new(255, 69, 0, 0.6),
    Rgba::new(255, 140, 0, 0.5),
    Rgba::new(255, 255, 255, 0.4),
];

/// Glow drawn around every particle (`#D41B2B`).
pub const EMBER_GLOW: Rgba = Rgba::opaque(212, 27, 43);
