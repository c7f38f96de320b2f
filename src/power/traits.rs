//! Power-management chip trait for abstraction and testability

/// Errors that can occur while talking to the power-management chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerError {
    /// Chip did not acknowledge on the bus
    NotResponding,
    /// Chip answered with an unexpected identity
    UnexpectedChip(u8),
    /// Bus transfer failed after the chip was found
    Bus,
}

/// One-shot battery voltage source
pub trait PowerProvider {
    /// (Re-)initialise the driver handle
    fn initialize(&mut self) -> Result<(), PowerError>;

    /// Read the battery voltage in millivolts
    fn battery_millivolts(&mut self) -> Result<u16, PowerError>;
}
