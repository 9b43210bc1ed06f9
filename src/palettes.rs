//! Static color palette tables and animation speed tiers.
//!
//! Each palette row is a pre-sorted 8-step fade between two colors; index 0
//! and index 7 are the visual extremes of the animation. The renderer sweeps
//! forward and backward through a row, so the tables are laid out once at
//! compile time and never derived at runtime.

use palette::Srgb;

/// Number of color steps in every palette row.
pub const STEP_COUNT: usize = 8;

/// Number of selectable palettes.
pub const PALETTE_COUNT: usize = 8;

/// Animation speed tiers, in milliseconds per palette step. Higher is slower.
pub const SPEED_TIERS_MS: [u64; 5] = [400, 200, 100, 50, 25];

const fn rgb(r: u8, g: u8, b: u8) -> Srgb<u8> {
    Srgb::new(r, g, b)
}

/// Color animation lookup table: one row per palette, one column per step.
pub static PALETTES: [[Srgb<u8>; STEP_COUNT]; PALETTE_COUNT] = [
    // Complementary color fades.
    [
        // red - cyan
        rgb(255, 0, 0),
        rgb(218, 36, 36),
        rgb(182, 72, 72),
        rgb(145, 109, 109),
        rgb(109, 145, 145),
        rgb(72, 182, 182),
        rgb(36, 218, 218),
        rgb(0, 255, 255),
    ],
    [
        // yellow - blue
        rgb(255, 255, 0),
        rgb(218, 218, 36),
        rgb(182, 182, 72),
        rgb(145, 145, 109),
        rgb(109, 109, 145),
        rgb(72, 72, 182),
        rgb(36, 36, 218),
        rgb(0, 0, 255),
    ],
    [
        // green - magenta
        rgb(0, 255, 0),
        rgb(36, 218, 36),
        rgb(72, 182, 72),
        rgb(109, 145, 109),
        rgb(145, 109, 145),
        rgb(182, 72, 182),
        rgb(218, 36, 218),
        rgb(255, 0, 255),
    ],
    // Adjacent colors on the color wheel.
    [
        // yellow - green
        rgb(255, 255, 0),
        rgb(218, 255, 0),
        rgb(182, 255, 0),
        rgb(145, 255, 0),
        rgb(109, 255, 0),
        rgb(72, 255, 0),
        rgb(36, 255, 0),
        rgb(0, 255, 0),
    ],
    [
        // green - cyan
        rgb(0, 255, 0),
        rgb(0, 255, 36),
        rgb(0, 255, 72),
        rgb(0, 255, 109),
        rgb(0, 255, 145),
        rgb(0, 255, 182),
        rgb(0, 255, 218),
        rgb(0, 255, 255),
    ],
    [
        // cyan - blue
        rgb(0, 255, 255),
        rgb(0, 218, 255),
        rgb(0, 182, 255),
        rgb(0, 145, 255),
        rgb(0, 109, 255),
        rgb(0, 72, 255),
        rgb(0, 36, 255),
        rgb(0, 0, 255),
    ],
    [
        // blue - magenta
        rgb(0, 0, 255),
        rgb(36, 0, 255),
        rgb(72, 0, 255),
        rgb(109, 0, 255),
        rgb(145, 0, 255),
        rgb(182, 0, 255),
        rgb(218, 0, 255),
        rgb(255, 0, 255),
    ],
    [
        // magenta - red
        rgb(255, 0, 255),
        rgb(255, 0, 218),
        rgb(255, 0, 182),
        rgb(255, 0, 145),
        rgb(255, 0, 109),
        rgb(255, 0, 72),
        rgb(255, 0, 36),
        rgb(255, 0, 0),
    ],
];
