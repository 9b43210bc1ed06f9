#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TorchController`**: runs the render / poll / apply / flush cycle
//! - **`TorchState`**: the animation state (palette, mode, speed, power)
//! - **`TorchAction`**: a remote button bound to a state transition
//! - **`PulseDecoder`**: NEC-style pulse-width decoding of IR captures
//! - **`LedStrip`**: trait to implement for your strip hardware
//! - **`IrReceiver`**: trait to implement for your IR capture hardware
//! - **`TimeSource`**: trait to implement for your timing system
//!
//! Colors are `palette::Srgb<u8>`, matching the 8-bit palette tables. When
//! implementing `LedStrip` for your hardware, feed the channels to your
//! driver's native format and apply any fixed brightness scaling there.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod controller;
pub mod decoder;
pub mod palettes;
pub mod remote;
pub mod render;
pub mod state;
pub mod time;

pub use controller::{CycleTiming, IrReceiver, LedStrip, POLL_INTERVAL_MS, TorchController};
pub use decoder::{DecodeError, PulseCapture, PulseDecoder};
pub use remote::TorchAction;
pub use state::{AnimationMode, TorchState};
pub use time::{TimeDuration, TimeInstant, TimeSource};

/// All channels dark.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
