//! Hardware and alert configuration constants for the TTGO T-Beam

/// Digital I/O pins
pub mod pins {
    /// Alert button (active low, internal pull-up)
    pub const ALERT_BUTTON: u8 = 38;
    /// Confirmation LED
    pub const LED: u8 = 2;
    /// GPS UART pins
    pub const GPS_RX: u8 = 34;
    pub const GPS_TX: u8 = 12;
}

/// GPS receiver configuration
pub mod gps {
    pub const BAUD_RATE: u32 = 9600;

    /// Maximum time to wait for a fresh fix once an alert is confirmed
    pub const FIX_TIMEOUT_MS: u32 = 10_000;

    /// Delay between polls of the GPS stream while waiting for a fix
    pub const POLL_INTERVAL_MS: u32 = 10;
}

/// Power management chip
pub mod power {
    /// AXP192 I2C slave address
    pub const AXP192_ADDRESS: u8 = 0x34;
}

/// Alert trigger and uplink constants
pub mod alert {
    /// Continuous hold required to confirm an alert
    pub const PRESS_THRESHOLD_MS: u64 = 3000;

    /// Idle delay at the end of every loop iteration
    pub const IDLE_DELAY_MS: u32 = 10;

    /// Payload bytes actually handed to the radio
    pub const MAX_PAYLOAD: usize = 51;

    /// Fixed transmission buffer
    pub const TX_BUFFER_SIZE: usize = 64;

    /// LoRaWAN application port for alert uplinks
    pub const UPLINK_PORT: u8 = 1;

    /// Alerts are sent unconfirmed (no downlink ACK awaited)
    pub const CONFIRMED_UPLINK: bool = false;
}

/// LED feedback patterns: (blinks, half-period in ms)
pub mod feedback {
    pub const JOINED: (u8, u32) = (2, 300);
    pub const TX_COMPLETE: (u8, u32) = (3, 200);
    pub const ALERT_DISPATCHED: (u8, u32) = (3, 300);
}

/// Tunable alert-loop parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AlertConfig {
    /// Hold duration before a press is confirmed
    pub press_threshold_ms: u64,
    /// Upper bound on the fix acquisition wait
    pub fix_timeout_ms: u32,
    /// Delay between GPS polls during acquisition
    pub fix_poll_interval_ms: u32,
    /// Delay at the end of each tick
    pub idle_delay_ms: u32,
    /// Application port used for uplinks
    pub uplink_port: u8,
    /// Request a confirmed uplink
    pub confirmed_uplink: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            press_threshold_ms: alert::PRESS_THRESHOLD_MS,
            fix_timeout_ms: gps::FIX_TIMEOUT_MS,
            fix_poll_interval_ms: gps::POLL_INTERVAL_MS,
            idle_delay_ms: alert::IDLE_DELAY_MS,
            uplink_port: alert::UPLINK_PORT,
            confirmed_uplink: alert::CONFIRMED_UPLINK,
        }
    }
}
