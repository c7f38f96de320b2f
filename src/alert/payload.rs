//! Alert payload encoding
//!
//! Format: `{"GPS":"<lat>,<lon>","Battery":<volts>}` with six decimals for
//! coordinates and two for the voltage. Output beyond `MAX_PAYLOAD` bytes is
//! cut off, which can leave the object unterminated.

use core::fmt::{self, Write};
use heapless::Vec;

use crate::config::alert::MAX_PAYLOAD;
use crate::gps::Fix;
use crate::power::BatteryReading;

/// Encoded payload bytes
pub type PayloadBytes = Vec<u8, MAX_PAYLOAD>;

/// One alert's telemetry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPayload {
    pub fix: Fix,
    pub battery: BatteryReading,
}

impl AlertPayload {
    pub fn new(fix: Fix, battery: BatteryReading) -> Self {
        Self { fix, battery }
    }

    /// Render the payload, truncated to `MAX_PAYLOAD` bytes
    pub fn encode(&self) -> PayloadBytes {
        let mut out = TruncatingWriter { buf: Vec::new() };
        // The writer never reports an error
        let _ = write!(
            out,
            "{{\"GPS\":\"{:.6},{:.6}\",\"Battery\":{:.2}}}",
            self.fix.latitude, self.fix.longitude, self.battery.volts
        );
        out.buf
    }
}

/// `fmt::Write` sink that keeps the first `MAX_PAYLOAD` bytes and drops the rest
struct TruncatingWriter {
    buf: PayloadBytes,
}

impl Write for TruncatingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.capacity() - self.buf.len();
        let take = s.len().min(room);
        let _ = self.buf.extend_from_slice(&s.as_bytes()[..take]);
        Ok(())
    }
}
