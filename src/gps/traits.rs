//! GPS fix provider trait and fix value type

/// A position report in decimal degrees
///
/// `Fix::UNAVAILABLE` (0, 0, invalid) stands in when no fix was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    pub valid: bool,
}

impl Fix {
    /// Sentinel used when the acquisition window elapses
    pub const UNAVAILABLE: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
        valid: false,
    };

    /// A valid fix at the given coordinates
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            valid: true,
        }
    }
}

/// Incremental positioning-stream decoder
///
/// Bytes are fed one at a time. `has_updated_fix` reports whether a new
/// position has been decoded since the last `current_fix` call.
pub trait FixProvider {
    /// Consume one byte of the positioning stream
    fn feed(&mut self, byte: u8);

    /// Whether a position was decoded since `current_fix` was last called
    fn has_updated_fix(&self) -> bool;

    /// Latest decoded (latitude, longitude); clears the updated flag
    fn current_fix(&mut self) -> (f64, f64);
}
