//! Radio session trait for abstraction and testability
//!
//! The LoRaWAN MAC (join, channel plan, duty cycle, crypto) lives behind
//! this trait. The alert loop only advances its scheduler, checks whether an
//! operation is in flight, and schedules uplinks.

use core::future::Future;
use heapless::Vec;

/// Most events a single scheduler step can report
pub const MAX_EVENTS_PER_STEP: usize = 4;

/// Events raised by the session while its scheduler runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioEvent {
    /// Join handshake with the network completed
    Joined,
    /// A scheduled uplink finished transmitting (including RX windows)
    TxComplete,
}

/// Ordered events from one scheduler step
pub type RadioEvents = Vec<RadioEvent, MAX_EVENTS_PER_STEP>;

/// Errors that can occur when scheduling an uplink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioError {
    /// A join or transmission is already pending
    Busy,
    /// Payload exceeds what the session accepts
    PayloadTooLarge,
    /// The session refused the request for another reason
    Rejected,
}

/// Abstract join/transmit session
///
/// Events are returned from `advance_scheduler` in the order they occurred
/// rather than delivered through callbacks.
pub trait RadioSession {
    /// Run one step of the session's internal scheduler
    ///
    /// Must be called frequently. A single call never waits on airtime.
    fn advance_scheduler(&mut self) -> impl Future<Output = RadioEvents>;

    /// Whether a join or transmission is currently in flight
    fn is_operation_pending(&self) -> bool;

    /// Schedule an uplink on `port`
    ///
    /// Returns once the frame is queued in the MAC; completion is reported
    /// later as `RadioEvent::TxComplete`.
    fn submit(&mut self, port: u8, data: &[u8], confirmed: bool) -> Result<(), RadioError>;
}
