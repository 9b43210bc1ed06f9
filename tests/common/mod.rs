//! Shared test infrastructure for tiki-torch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use palette::Srgb;
use tiki_torch::{IrReceiver, LedStrip, PulseCapture, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Everything a mock strip observed, shared with the test via `Rc`.
#[derive(Debug, Default)]
pub struct StripLog<const N: usize> {
    /// Every staged frame, in write order.
    pub staged: Vec<[Srgb<u8>; N]>,
    /// The frame made visible by each show call.
    pub visible: Vec<[Srgb<u8>; N]>,
    pending: Option<[Srgb<u8>; N]>,
}

impl<const N: usize> StripLog<N> {
    /// The frame currently visible on the "hardware".
    pub fn displayed(&self) -> Option<[Srgb<u8>; N]> {
        self.visible.last().copied()
    }
}

/// Mock strip that records writes and shows for later assertions
pub struct MockStrip<const N: usize> {
    log: Rc<RefCell<StripLog<N>>>,
}

impl<const N: usize> MockStrip<N> {
    /// Returns the strip and a shared handle to its log; the strip itself
    /// moves into the controller.
    pub fn new() -> (Self, Rc<RefCell<StripLog<N>>>) {
        let log = Rc::new(RefCell::new(StripLog::default()));
        (Self { log: log.clone() }, log)
    }
}

impl<const N: usize> LedStrip<N> for MockStrip<N> {
    fn write(&mut self, frame: &[Srgb<u8>; N]) {
        let mut log = self.log.borrow_mut();
        log.staged.push(*frame);
        log.pending = Some(*frame);
    }

    fn show(&mut self) {
        let mut log = self.log.borrow_mut();
        if let Some(frame) = log.pending {
            log.visible.push(frame);
        }
    }
}

// ============================================================================
// Mock IR Receiver
// ============================================================================

/// Mock receiver that replays queued captures, then nothing
pub struct MockReceiver {
    captures: VecDeque<PulseCapture>,
}

impl MockReceiver {
    pub fn new() -> Self {
        Self {
            captures: VecDeque::new(),
        }
    }

    /// Queue a capture to hand out on a future poll
    pub fn queue(&mut self, capture: PulseCapture) {
        self.captures.push_back(capture);
    }
}

impl IrReceiver for MockReceiver {
    fn read_pulses(&mut self) -> PulseCapture {
        self.captures.pop_front().unwrap_or_default()
    }
}

// ============================================================================
// NEC Pulse Train Builders
// ============================================================================

const HEADER_MARK: u16 = 9000;
const HEADER_SPACE: u16 = 4500;
const BIT_MARK: u16 = 562;
const ZERO_SPACE: u16 = 562;
const ONE_SPACE: u16 = 1687;
const REPEAT_SPACE: u16 = 2250;

/// Builds a well-formed NEC frame carrying the given payload bytes
/// (header, MSB-first bit pairs, trailing stop mark).
pub fn nec_frame(payload: &[u8]) -> PulseCapture {
    let mut pulses = PulseCapture::new();
    pulses.extend_from_slice(&[HEADER_MARK, HEADER_SPACE]).unwrap();
    for byte in payload {
        for bit in (0..8).rev() {
            pulses.push(BIT_MARK).unwrap();
            let space = if byte & (1 << bit) != 0 {
                ONE_SPACE
            } else {
                ZERO_SPACE
            };
            pulses.push(space).unwrap();
        }
    }
    pulses.push(BIT_MARK).unwrap();
    pulses
}

/// Builds the standard 4-byte command frame a remote transmits for a code
pub fn command_frame(code: u8) -> PulseCapture {
    nec_frame(&[0x00, 0xFF, code, !code])
}

/// Builds the 3-pulse NEC repeat frame (button held down)
pub fn repeat_frame() -> PulseCapture {
    let mut pulses = PulseCapture::new();
    pulses
        .extend_from_slice(&[HEADER_MARK, REPEAT_SPACE, BIT_MARK])
        .unwrap();
    pulses
}

/// Builds an arbitrary-length capture of uniform noise pulses
pub fn noise(len: usize) -> PulseCapture {
    let mut pulses = PulseCapture::new();
    for _ in 0..len {
        pulses.push(300).unwrap();
    }
    pulses
}
