//! Monotonic time source for the alert loop
//!
//! Delays go through `embedded_hal_async::delay::DelayNs`; this trait only
//! covers reading the current instant, which the HAL traits do not.

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin (usually boot)
    fn now_ms(&self) -> u64;
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embedded")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embedded")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

/// Delay backed by the embassy time driver
#[cfg(feature = "embedded")]
pub use embassy_time::Delay as EmbassyDelay;
