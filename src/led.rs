//! Status LED feedback
//!
//! Blink sequences are awaited in full by the caller; nothing else on the
//! alert loop runs while a pattern plays.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::feedback;

/// A blink sequence: `times` pulses, each on for `period_ms` then off for `period_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    pub times: u8,
    pub period_ms: u32,
}

impl BlinkPattern {
    pub const fn new(times: u8, period_ms: u32) -> Self {
        Self { times, period_ms }
    }

    /// Network join completed
    pub const JOINED: Self = Self::new(feedback::JOINED.0, feedback::JOINED.1);

    /// Radio reported the uplink as transmitted
    pub const TX_COMPLETE: Self = Self::new(feedback::TX_COMPLETE.0, feedback::TX_COMPLETE.1);

    /// An alert was handed to the send gate
    pub const ALERT_DISPATCHED: Self =
        Self::new(feedback::ALERT_DISPATCHED.0, feedback::ALERT_DISPATCHED.1);

    /// Total wall-clock time the pattern takes to play
    pub const fn duration_ms(&self) -> u32 {
        self.times as u32 * self.period_ms * 2
    }
}

/// Active-high status LED
pub struct StatusLed<L> {
    pin: L,
}

impl<L: OutputPin> StatusLed<L> {
    /// Wrap the LED pin and drive it off
    pub fn new(mut pin: L) -> Self {
        if let Err(e) = pin.set_low() {
            log::debug!("LED pin write failed: {:?}", e);
        }
        Self { pin }
    }

    /// Play `pattern`, leaving the LED off afterwards
    pub async fn blink<D: DelayNs>(&mut self, delay: &mut D, pattern: BlinkPattern) {
        for _ in 0..pattern.times {
            self.drive(true);
            delay.delay_ms(pattern.period_ms).await;
            self.drive(false);
            delay.delay_ms(pattern.period_ms).await;
        }
    }

    fn drive(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if let Err(e) = result {
            log::debug!("LED pin write failed: {:?}", e);
        }
    }
}
