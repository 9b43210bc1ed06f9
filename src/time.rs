//! Time abstraction traits for platform-agnostic timing.
//!
//! The torch animates against monotonic elapsed time, not frame counts, so
//! animation speed stays stable no matter how long the IR poll takes in a
//! given cycle. Implement these traits for your platform's clock (e.g.
//! `embassy_time::Instant`, a SysTick counter, or `std::time::Instant` on a
//! host).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
