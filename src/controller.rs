//! Torch controller: the render / poll / apply / flush cycle.
//!
//! Ties the renderer, decoder, and state machine together around two hardware
//! seams ([`LedStrip`] and [`IrReceiver`]) and a [`TimeSource`]. One cycle
//! renders the frame from elapsed time, writes it to the strip, polls the
//! receiver once, applies any decoded action, and flushes. Everything runs on
//! a single execution context; the only suspension point is the receiver's
//! bounded capture wait.

use crate::COLOR_OFF;
use crate::decoder::{PulseCapture, PulseDecoder};
use crate::remote::TorchAction;
use crate::render;
use crate::state::TorchState;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use palette::Srgb;

/// How long to idle between cycles when no command was observed, in
/// milliseconds. Short enough that polling never stalls the animation for
/// more than one frame.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Trait for abstracting the LED strip hardware.
///
/// Implement this for your strip driver (SPI ws2812, PIO, RMT, etc.).
/// A `write` stages a full frame; `show` makes the staged frame visible.
/// Brightness scaling, if any, is fixed when the strip is constructed and
/// applied inside the implementation.
pub trait LedStrip<const N: usize> {
    /// Stages a full frame, one color per physical LED.
    fn write(&mut self, frame: &[Srgb<u8>; N]);

    /// Makes the last staged frame visible on the hardware.
    fn show(&mut self);
}

/// Trait for abstracting the IR receiver hardware.
pub trait IrReceiver {
    /// Captures one transmission burst as mark/space durations in
    /// microseconds.
    ///
    /// Must return promptly: an empty capture means no transmission was
    /// observed within the implementation's bounded capture window.
    /// Implementations reset their capture buffer internally, so each call
    /// yields a fresh burst.
    fn read_pulses(&mut self) -> PulseCapture;
}

/// Timing hint returned by [`TorchController::run_cycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleTiming<D> {
    /// A command was handled this cycle; run the next cycle immediately.
    Immediate,

    /// Nothing was decoded; idle this long before the next cycle.
    Idle(D),
}

/// Drives an addressable LED strip through animated palettes under IR remote
/// control.
///
/// The controller owns the strip, the receiver, the animation state, and the
/// pixel frame. Animation timing is monotonic-elapsed relative to the instant
/// the controller was constructed.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - LED strip implementation type
/// * `R` - IR receiver implementation type
/// * `T` - Time source implementation type
/// * `N` - Number of physical LEDs on the strip
pub struct TorchController<'t, I, S, R, T, const N: usize>
where
    I: TimeInstant,
    S: LedStrip<N>,
    R: IrReceiver,
    T: TimeSource<I>,
{
    strip: S,
    receiver: R,
    time_source: &'t T,
    decoder: PulseDecoder,
    state: TorchState,
    frame: [Srgb<u8>; N],
    started: I,
}

impl<'t, I, S, R, T, const N: usize> TorchController<'t, I, S, R, T, N>
where
    I: TimeInstant,
    S: LedStrip<N>,
    R: IrReceiver,
    T: TimeSource<I>,
{
    /// Creates a controller with the default state and pulse decoder.
    pub fn new(strip: S, receiver: R, time_source: &'t T) -> Self {
        Self {
            strip,
            receiver,
            time_source,
            decoder: PulseDecoder::default(),
            state: TorchState::default(),
            frame: [COLOR_OFF; N],
            started: time_source.now(),
        }
    }

    /// Runs one cycle: render, write, poll, apply, show.
    ///
    /// Never fails: a malformed or absent IR reading is a normal cycle with
    /// no command. Returns a hint for pacing the next cycle; callers with a
    /// blocking receiver can ignore it, since the capture wait already paces
    /// the loop.
    pub fn run_cycle(&mut self) -> CycleTiming<I::Duration> {
        let elapsed = self.time_source.now().duration_since(self.started);
        render::fill_frame(&self.state, elapsed.as_millis(), &mut self.frame);
        self.strip.write(&self.frame);

        let capture = self.receiver.read_pulses();
        let action = self.decode_action(&capture);
        if let Some(action) = action {
            self.handle_action(action);
        }

        self.strip.show();

        match action {
            Some(_) => CycleTiming::Immediate,
            None => CycleTiming::Idle(I::Duration::from_millis(POLL_INTERVAL_MS)),
        }
    }

    /// Runs the cycle forever. The loop never terminates in steady state;
    /// pacing comes from the receiver's bounded capture wait.
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.run_cycle();
        }
    }

    /// Returns the current animation state.
    pub fn state(&self) -> TorchState {
        self.state
    }

    fn decode_action(&self, capture: &PulseCapture) -> Option<TorchAction> {
        let code = self.decoder.decode(capture)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("IR command: {=u8:x}", code);
        TorchAction::from_code(code)
    }

    fn handle_action(&mut self, action: TorchAction) {
        self.state.apply(action);
        if action == TorchAction::PowerOff {
            // Blank within the same cycle instead of waiting a frame.
            self.frame = [COLOR_OFF; N];
            self.strip.write(&self.frame);
        }
    }
}
