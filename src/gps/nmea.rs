//! NMEA 0183 fix provider
//!
//! Thin adapter over `nmea0183::Parser`. Position comes from `RMC` and `GGA`
//! sentences of any talker (`GP`, `GN`, `GL`, ...). The parser rejects bad
//! checksums and reports void `RMC` or no-fix `GGA` as empty results.

use crate::gps::traits::FixProvider;
use nmea0183::{ParseResult, Parser};

/// Fix provider decoding an NMEA byte stream
pub struct NmeaFixProvider {
    parser: Parser,
    latitude: f64,
    longitude: f64,
    updated: bool,
}

impl NmeaFixProvider {
    /// Create a provider with no fix
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            latitude: 0.0,
            longitude: 0.0,
            updated: false,
        }
    }

    /// Discard any partial sentence
    pub fn reset(&mut self) {
        self.parser = Parser::new();
    }

    fn store(&mut self, latitude: f64, longitude: f64) {
        self.latitude = latitude;
        self.longitude = longitude;
        self.updated = true;
    }
}

impl Default for NmeaFixProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FixProvider for NmeaFixProvider {
    fn feed(&mut self, byte: u8) {
        match self.parser.parse_from_byte(byte) {
            Some(Ok(ParseResult::RMC(Some(rmc)))) => {
                self.store(rmc.latitude.as_f64(), rmc.longitude.as_f64());
            }
            Some(Ok(ParseResult::GGA(Some(gga)))) => {
                self.store(gga.latitude.as_f64(), gga.longitude.as_f64());
            }
            // Void status, other sentence types, checksum or framing errors
            _ => {}
        }
    }

    fn has_updated_fix(&self) -> bool {
        self.updated
    }

    fn current_fix(&mut self) -> (f64, f64) {
        self.updated = false;
        (self.latitude, self.longitude)
    }
}
