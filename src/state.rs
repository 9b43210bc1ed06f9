//! Torch animation state and its transition rules.

use crate::palettes::{PALETTE_COUNT, SPEED_TIERS_MS};
use crate::remote::TorchAction;

/// The two supported animation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationMode {
    /// The whole strip pulses through the palette in unison.
    Pulse,

    /// The pulse travels along the strip, one pixel per time step.
    MovingPulse,
}

impl AnimationMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AnimationMode::Pulse => AnimationMode::MovingPulse,
            AnimationMode::MovingPulse => AnimationMode::Pulse,
        }
    }
}

/// Mutable animation state, owned by the controller and mutated only through
/// [`TorchState::apply`].
///
/// Indices always stay within their table bounds: every cycle action wraps
/// with modulo arithmetic, so lookups never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TorchState {
    /// Index into [`crate::palettes::PALETTES`].
    pub palette_index: usize,

    /// Current animation style.
    pub mode: AnimationMode,

    /// Index into [`crate::palettes::SPEED_TIERS_MS`].
    pub speed_index: usize,

    /// Whether the pixels are lit. When false the renderer emits the off
    /// color without consulting the palette.
    pub powered: bool,
}

impl Default for TorchState {
    /// The torch's startup configuration: first palette, moving pulse,
    /// middle speed tier, powered on.
    fn default() -> Self {
        Self {
            palette_index: 0,
            mode: AnimationMode::MovingPulse,
            speed_index: 2,
            powered: true,
        }
    }
}

impl TorchState {
    /// Applies one remote action as a pure state transition.
    ///
    /// Powering off only clears the `powered` flag here; blanking and
    /// flushing the strip is the controller's side effect. Powering on takes
    /// effect on a single press.
    pub fn apply(&mut self, action: TorchAction) {
        match action {
            TorchAction::CycleColor => {
                self.palette_index = (self.palette_index + 1) % PALETTE_COUNT;
            }
            TorchAction::CycleAnimation => {
                self.mode = self.mode.toggled();
            }
            TorchAction::CycleSpeed => {
                self.speed_index = (self.speed_index + 1) % SPEED_TIERS_MS.len();
            }
            TorchAction::PowerOff => {
                self.powered = false;
            }
            TorchAction::PowerOn => {
                self.powered = true;
            }
        }
    }

    /// Milliseconds per animation step at the current speed tier.
    pub fn speed_interval_ms(&self) -> u64 {
        SPEED_TIERS_MS[self.speed_index]
    }
}
