//! Time-driven palette animation.
//!
//! The renderer sweeps a palette row with a triangular (ping-pong) waveform:
//! the step index climbs from 0 to the last step, then mirrors back down, with
//! no jump at either end. The waveform period is `2 * (STEP_COUNT - 1)` time
//! units, where one unit is the current speed tier's interval.
//!
//! Elapsed time divides by the interval with integer (floor) division, so
//! fractional phases always land on the lower discrete palette step.

use crate::COLOR_OFF;
use crate::palettes::{PALETTES, STEP_COUNT};
use crate::state::{AnimationMode, TorchState};
use palette::Srgb;

/// Waveform period in time units.
pub const PERIOD: u64 = (2 * STEP_COUNT - 2) as u64;

/// Computes the color of one pixel at a given elapsed time.
///
/// In [`AnimationMode::Pulse`] every pixel shares the same phase; in
/// [`AnimationMode::MovingPulse`] each pixel's phase shifts by its index, so
/// the pulse travels along the strip one pixel per time unit:
/// `color_at(state, t, i) == color_at(state, t + interval, i + 1)`.
///
/// When the torch is powered off this returns [`COLOR_OFF`] unconditionally.
pub fn color_at(state: &TorchState, elapsed_ms: u64, pixel: usize) -> Srgb<u8> {
    if !state.powered {
        return COLOR_OFF;
    }

    let units = elapsed_ms / state.speed_interval_ms();
    let phase = match state.mode {
        AnimationMode::Pulse => units % PERIOD,
        AnimationMode::MovingPulse => {
            let offset = PERIOD - (pixel as u64 % PERIOD);
            (units + offset) % PERIOD
        }
    };

    let step = if phase < STEP_COUNT as u64 {
        phase as usize
    } else {
        // Mirrored descent back toward step 0.
        2 * STEP_COUNT - 2 - phase as usize
    };

    PALETTES[state.palette_index][step]
}

/// Renders a full frame, one color per physical LED.
pub fn fill_frame<const N: usize>(
    state: &TorchState,
    elapsed_ms: u64,
    frame: &mut [Srgb<u8>; N],
) {
    for (pixel, slot) in frame.iter_mut().enumerate() {
        *slot = color_at(state, elapsed_ms, pixel);
    }
}
