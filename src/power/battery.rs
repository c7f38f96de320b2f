//! Battery sampling

use crate::power::traits::PowerProvider;

/// A single battery voltage reading
///
/// Failed reads carry the `-1.0` sentinel and `valid == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub volts: f32,
    pub valid: bool,
}

impl BatteryReading {
    /// Sentinel voltage reported when the chip cannot be read
    pub const FAILURE_VOLTS: f32 = -1.0;

    /// Reading used when the power-management chip is unavailable
    pub const UNAVAILABLE: Self = Self {
        volts: Self::FAILURE_VOLTS,
        valid: false,
    };

    /// Valid reading from a millivolt measurement
    pub fn from_millivolts(millivolts: u16) -> Self {
        Self {
            volts: f32::from(millivolts) / 1000.0,
            valid: true,
        }
    }
}

/// Re-queries the power provider on every sample
pub struct BatteryMonitor<P> {
    provider: P,
}

impl<P: PowerProvider> BatteryMonitor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Take one reading, degrading to `BatteryReading::UNAVAILABLE` on any failure
    pub fn sample(&mut self) -> BatteryReading {
        if let Err(e) = self.provider.initialize() {
            log::warn!("Power chip init failed: {:?}", e);
            return BatteryReading::UNAVAILABLE;
        }

        match self.provider.battery_millivolts() {
            Ok(mv) => BatteryReading::from_millivolts(mv),
            Err(e) => {
                log::warn!("Battery read failed: {:?}", e);
                BatteryReading::UNAVAILABLE
            }
        }
    }
}
