//! Remote button code table and command-to-action mapping.
//!
//! The torch is driven by a small NEC-protocol media remote. Every physical
//! button transmits a fixed 8-bit code; only five of the nineteen buttons are
//! bound to torch actions, the rest are ignored. The table is configuration,
//! not something derived at runtime.

/// Button codes transmitted by the remote, one per physical button.
pub mod buttons {
    pub const VOLUME_DOWN: u8 = 255;
    pub const PLAY_PAUSE: u8 = 127;
    pub const VOLUME_UP: u8 = 191;
    pub const SETUP: u8 = 223;
    pub const UP_ARROW: u8 = 95;
    pub const STOP_MODE: u8 = 159;
    pub const LEFT_ARROW: u8 = 239;
    pub const ENTER_SAVE: u8 = 111;
    pub const RIGHT_ARROW: u8 = 175;
    pub const DOWN_ARROW: u8 = 79;
    pub const NUM_1: u8 = 247;
    pub const NUM_2: u8 = 119;
    pub const NUM_3: u8 = 183;
    pub const NUM_4: u8 = 215;
    pub const NUM_5: u8 = 87;
    pub const NUM_6: u8 = 151;
    pub const NUM_7: u8 = 231;
    pub const NUM_8: u8 = 103;
    pub const NUM_9: u8 = 167;
}

/// Actions the remote can trigger on the torch.
///
/// Button bindings:
/// - right arrow cycles the color palette
/// - left arrow cycles the animation style
/// - up arrow cycles the animation speed
/// - volume down powers the pixels off
/// - volume up powers them back on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TorchAction {
    /// Advance to the next color palette.
    CycleColor,
    /// Toggle between the two animation styles.
    CycleAnimation,
    /// Advance to the next speed tier.
    CycleSpeed,
    /// Blank the pixels.
    PowerOff,
    /// Resume animating.
    PowerOn,
}

impl TorchAction {
    /// Maps a decoded command byte to its bound action.
    ///
    /// Returns `None` for every unbound button. Most presses on the physical
    /// remote are irrelevant to the torch, so an unrecognized code is the
    /// expected steady state, not an error.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            buttons::RIGHT_ARROW => Some(TorchAction::CycleColor),
            buttons::LEFT_ARROW => Some(TorchAction::CycleAnimation),
            buttons::UP_ARROW => Some(TorchAction::CycleSpeed),
            buttons::VOLUME_DOWN => Some(TorchAction::PowerOff),
            buttons::VOLUME_UP => Some(TorchAction::PowerOn),
            _ => None,
        }
    }
}
