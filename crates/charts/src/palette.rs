//! Series colors
//!
//! The fixed palette assigned to the first data points of a series and
//! the random fallback used once the palette head is exhausted.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// The fixed series palette. The order is part of the visual contract:
/// point colors are assigned by index, and rendered output must not
/// change between releases.
pub const SERIES_PALETTE: [Color; 39] = [
    Color::rgb(51, 102, 204),
    Color::rgb(220, 57, 18),
    Color::rgb(225, 153, 0),
    Color::rgb(16, 150, 24),
    Color::rgb(153, 0, 153),
    Color::rgb(0, 153, 198),
    Color::rgb(221, 68, 119),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 0, 139),
    Color::rgb(0, 205, 0),
    Color::rgb(233, 30, 99),
    Color::rgb(255, 255, 0),
    Color::rgb(244, 67, 54),
    Color::rgb(156, 39, 176),
    Color::rgb(103, 58, 183),
    Color::rgb(63, 81, 181),
    Color::rgb(33, 153, 243),
    Color::rgb(0, 150, 136),
    Color::rgb(78, 175, 80),
    Color::rgb(139, 195, 74),
    Color::rgb(205, 228, 57),
    Color::rgb(0, 139, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 235, 59),
    Color::rgb(255, 193, 7),
    Color::rgb(255, 152, 0),
    Color::rgb(255, 87, 34),
    Color::rgb(121, 85, 72),
    Color::rgb(158, 158, 158),
    Color::rgb(96, 125, 139),
    Color::rgb(241, 153, 185),
    Color::rgb(64, 64, 64),
    Color::rgb(188, 229, 218),
    Color::rgb(139, 0, 0),
    Color::rgb(139, 139, 0),
    Color::rgb(171, 130, 255),
    Color::rgb(139, 123, 139),
    Color::rgb(255, 0, 255),
    Color::rgb(139, 69, 19),
];

/// Only the first 32 palette entries are handed out by index; beyond
/// that, point colors are generated.
const PALETTE_HEAD: usize = 32;

/// Generate a random color with each channel in [1, 255]. Channel 0 is
/// excluded so a generated color never degenerates to pure black or a
/// zero channel that some hosts special-case as transparent.
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::rgb(
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
        rng.gen_range(1..=255),
    )
}

/// Color for the data point at `index`: palette head by index, random
/// beyond it.
pub fn point_color<R: Rng>(index: usize, rng: &mut R) -> Color {
    if index < PALETTE_HEAD {
        SERIES_PALETTE[index]
    } else {
        random_color(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_palette_head_exact() {
        assert_eq!(SERIES_PALETTE[0], Color::rgb(51, 102, 204));
        assert_eq!(SERIES_PALETTE[1], Color::rgb(220, 57, 18));
        assert_eq!(SERIES_PALETTE[31], Color::rgb(64, 64, 64));
        assert_eq!(SERIES_PALETTE[38], Color::rgb(139, 69, 19));
        assert_eq!(SERIES_PALETTE.len(), 39);
    }

    #[test]
    fn test_point_color_uses_palette_head() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..32 {
            assert_eq!(point_color(i, &mut rng), SERIES_PALETTE[i]);
        }
    }

    #[test]
    fn test_random_color_channels_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = random_color(&mut rng);
            assert!(c.r >= 1);
            assert!(c.g >= 1);
            assert!(c.b >= 1);
        }
    }

    #[test]
    fn test_point_color_past_head_is_generated() {
        // Seeded, so the sequence is stable; just assert the range.
        let mut rng = StdRng::seed_from_u64(42);
        let c = point_color(32, &mut rng);
        assert!(c.r >= 1 && c.g >= 1 && c.b >= 1);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::rgb(51, 102, 204).to_css(), "rgb(51, 102, 204)");
    }
}
