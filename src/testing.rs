//! Shared test doubles for pins and simulated time
//!
//! Time only moves when something awaits `MockDelay`, so elapsed-time
//! assertions are exact.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::time::Clock;

/// Simulated monotonic time in nanoseconds
#[derive(Debug, Default)]
pub struct SimTime {
    nanos: Cell<u64>,
}

impl SimTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.nanos.get() / 1_000_000
    }

    pub fn advance_ms(&self, ms: u64) {
        self.nanos.set(self.nanos.get() + ms * 1_000_000);
    }

    pub fn clock(&self) -> MockClock<'_> {
        MockClock { time: self }
    }

    pub fn delay(&self) -> MockDelay<'_> {
        MockDelay { time: self }
    }
}

/// Clock reading a shared `SimTime`
#[derive(Debug, Clone, Copy)]
pub struct MockClock<'a> {
    time: &'a SimTime,
}

impl Clock for MockClock<'_> {
    fn now_ms(&self) -> u64 {
        self.time.now_ms()
    }
}

/// Delay that advances a shared `SimTime` instead of sleeping
#[derive(Debug)]
pub struct MockDelay<'a> {
    time: &'a SimTime,
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.time.nanos.set(self.time.nanos.get() + u64::from(ns));
    }
}

/// Input pin whose level is controlled by the test through a shared cell
///
/// `low == true` means the pin reads electrically low (button pressed).
#[derive(Debug, Clone, Copy)]
pub struct MockInputPin<'a> {
    low: &'a Cell<bool>,
}

impl<'a> MockInputPin<'a> {
    pub fn new(low: &'a Cell<bool>) -> Self {
        Self { low }
    }
}

impl ErrorType for MockInputPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockInputPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.low.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.low.get())
    }
}

/// Observable state of a mock output pin
#[derive(Debug, Default)]
pub struct PinProbe {
    pub high: Cell<bool>,
    pub rising_edges: Cell<u32>,
}

impl PinProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Output pin recording its level and the number of low-to-high edges
#[derive(Debug, Clone, Copy)]
pub struct MockOutputPin<'a> {
    probe: &'a PinProbe,
}

impl<'a> MockOutputPin<'a> {
    pub fn new(probe: &'a PinProbe) -> Self {
        Self { probe }
    }
}

impl ErrorType for MockOutputPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.probe.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.probe.high.get() {
            self.probe.rising_edges.set(self.probe.rising_edges.get() + 1);
        }
        self.probe.high.set(true);
        Ok(())
    }
}
