//! NEC-style infrared pulse decoding.
//!
//! Turns a raw pulse-duration capture from an IR receiver into a single
//! command byte. The receiver hardware hands over one transmission burst as a
//! sequence of mark/space durations in microseconds; this module validates
//! the burst length, decodes the pulse-width bit scheme, and extracts the
//! command byte from the payload.
//!
//! All failure paths are soft: a burst that is too short, too long, a repeat
//! frame (remote button held down), or malformed in any way degrades to "no
//! command observed". The bit-level [`decode_frame`] keeps the distinction as
//! a [`DecodeError`] so the repeat path stays testable; [`PulseDecoder::decode`]
//! collapses everything to `Option` at the public seam.

use heapless::Vec;

/// Capacity of the pulse capture buffer handed over by the receiver.
pub const MAX_CAPTURE_PULSES: usize = 100;

/// One captured transmission burst: mark/space durations in microseconds.
pub type PulseCapture = Vec<u16, MAX_CAPTURE_PULSES>;

/// Maximum payload bytes a single decoded frame can carry.
pub const MAX_FRAME_BYTES: usize = 8;

/// A well-formed command frame carries at least this many payload bytes
/// (address, inverted address, command, inverted command).
pub const MIN_FRAME_BYTES: usize = 4;

/// Payload index of the command identifier. The surrounding address and
/// checksum bytes are ignored by this application.
pub const COMMAND_INDEX: usize = 2;

// NEC nominal timings, microseconds.
const HEADER_MARK_US: u32 = 9000;
const HEADER_SPACE_US: u32 = 4500;
const BIT_MARK_US: u32 = 562;
const ZERO_SPACE_US: u32 = 562;
const ONE_SPACE_US: u32 = 1687;
const REPEAT_SPACE_US: u32 = 2250;

// Receivers and remotes both jitter; accept measurements within this margin.
const TOLERANCE_PCT: u32 = 25;

/// Bit-level decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The burst is an NEC repeat frame: the remote is retransmitting a
    /// "button still held" marker instead of a full code.
    Repeat,

    /// The burst does not decode as an NEC command frame (bad header, bad
    /// mark width, ambiguous space width, or a partial byte).
    Malformed,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::Repeat => write!(f, "repeat frame, no command payload"),
            DecodeError::Malformed => write!(f, "pulse train is not a valid command frame"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Validates and decodes captured pulse trains into command bytes.
///
/// The length gate is tunable: bursts shorter than `min_pulses` or longer
/// than `max_pulses` are discarded before any bit decoding is attempted. The
/// defaults of `[60, 70]` bracket a standard 32-bit NEC frame (2 header
/// pulses, 64 bit pulses, and an optional stop mark) with room for capture
/// jitter at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseDecoder {
    /// Minimum plausible burst length, inclusive.
    pub min_pulses: usize,

    /// Maximum plausible burst length, inclusive.
    pub max_pulses: usize,
}

impl Default for PulseDecoder {
    fn default() -> Self {
        Self::new(60, 70)
    }
}

impl PulseDecoder {
    /// Creates a decoder with a custom burst length gate.
    pub const fn new(min_pulses: usize, max_pulses: usize) -> Self {
        Self {
            min_pulses,
            max_pulses,
        }
    }

    /// Decodes one captured burst into a command byte.
    ///
    /// Returns `None` for anything that is not a complete, well-formed
    /// command frame: an empty or out-of-range capture, a repeat frame, or a
    /// malformed bit pattern. This method never panics and never surfaces an
    /// error; a bad reading is indistinguishable from no reading.
    pub fn decode(&self, pulses: &[u16]) -> Option<u8> {
        if pulses.len() < self.min_pulses || pulses.len() > self.max_pulses {
            return None;
        }

        match decode_frame(pulses) {
            Ok(frame) if frame.len() >= MIN_FRAME_BYTES => Some(frame[COMMAND_INDEX]),
            _ => None,
        }
    }
}

/// Decodes a pulse train into its payload bytes.
///
/// Expects an NEC command frame: header mark and space, then one mark/space
/// pair per bit with the bit value carried in the space width, optionally
/// terminated by a stop mark. Bits pack MSB-first into bytes.
pub fn decode_frame(pulses: &[u16]) -> Result<Vec<u8, MAX_FRAME_BYTES>, DecodeError> {
    if is_repeat(pulses) {
        return Err(DecodeError::Repeat);
    }

    if pulses.len() < 4
        || !within(pulses[0], HEADER_MARK_US)
        || !within(pulses[1], HEADER_SPACE_US)
    {
        return Err(DecodeError::Malformed);
    }

    // A trailing stop mark leaves an odd body length; drop it before pairing.
    let body = &pulses[2..];
    let body = if body.len() % 2 == 1 {
        &body[..body.len() - 1]
    } else {
        body
    };

    // 16 pulses per byte: 8 bits, each a mark/space pair.
    if body.is_empty() || body.len() % 16 != 0 {
        return Err(DecodeError::Malformed);
    }

    let mut frame = Vec::new();
    for byte_pulses in body.chunks_exact(16) {
        let mut byte = 0u8;
        for pair in byte_pulses.chunks_exact(2) {
            if !within(pair[0], BIT_MARK_US) {
                return Err(DecodeError::Malformed);
            }
            byte <<= 1;
            if within(pair[1], ONE_SPACE_US) {
                byte |= 1;
            } else if !within(pair[1], ZERO_SPACE_US) {
                return Err(DecodeError::Malformed);
            }
        }
        frame.push(byte).map_err(|_| DecodeError::Malformed)?;
    }

    Ok(frame)
}

/// An NEC repeat frame is exactly three pulses: header mark, repeat space,
/// stop mark.
fn is_repeat(pulses: &[u16]) -> bool {
    matches!(pulses, [mark, space, stop]
        if within(*mark, HEADER_MARK_US)
            && within(*space, REPEAT_SPACE_US)
            && within(*stop, BIT_MARK_US))
}

fn within(measured: u16, nominal: u32) -> bool {
    let measured = measured as u32;
    let margin = nominal * TOLERANCE_PCT / 100;
    measured + margin >= nominal && measured <= nominal + margin
}
