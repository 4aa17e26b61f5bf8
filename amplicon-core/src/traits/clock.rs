//! Monotonic clock trait

/// Trait for a monotonic millisecond clock
///
/// Components that need elapsed-time tracking take this as an injected
/// capability instead of reading a global tick counter, so tests can
/// simulate elapsed time without real delays.
pub trait MonotonicClock {
    /// Milliseconds elapsed since an arbitrary fixed origin
    ///
    /// The value never decreases within a power cycle; wrapping arithmetic
    /// is used by callers so a rollover does not matter.
    fn now_ms(&self) -> u64;
}

impl<C: MonotonicClock> MonotonicClock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
