//! Busy-gated uplink submission
//!
//! At most one operation may be in flight in the session. When one is, the
//! alert is dropped: there is no queue and no retry.

use crate::config::alert::{MAX_PAYLOAD, TX_BUFFER_SIZE};
use crate::radio::traits::{RadioError, RadioSession};

/// Submit `payload` unless the session is busy
///
/// Copies at most `MAX_PAYLOAD` bytes into a fixed transmission buffer
/// before handing them to the session.
pub fn send_alert<R: RadioSession>(
    radio: &mut R,
    payload: &[u8],
    port: u8,
    confirmed: bool,
) -> Result<(), RadioError> {
    if radio.is_operation_pending() {
        log::warn!("Radio busy, alert dropped");
        return Err(RadioError::Busy);
    }

    let mut buffer = [0u8; TX_BUFFER_SIZE];
    let len = payload.len().min(MAX_PAYLOAD);
    buffer[..len].copy_from_slice(&payload[..len]);

    radio.submit(port, &buffer[..len], confirmed)?;
    log::info!("Uplink queued: {} bytes on port {}", len, port);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::traits::mock::MockRadioSession;

    #[test]
    fn test_send_when_idle() {
        let mut radio = MockRadioSession::new();

        send_alert(&mut radio, b"{\"GPS\":\"1.000000,2.000000\",\"Battery\":4.10}", 1, false)
            .unwrap();

        let uplinks = radio.uplinks();
        assert_eq!(uplinks.len(), 1);
        assert_eq!(uplinks[0].port, 1);
        assert!(!uplinks[0].confirmed);
        assert_eq!(
            uplinks[0].data.as_slice(),
            b"{\"GPS\":\"1.000000,2.000000\",\"Battery\":4.10}"
        );
    }

    #[test]
    fn test_busy_submits_nothing() {
        let mut radio = MockRadioSession::new();
        radio.set_pending(true);

        let result = send_alert(&mut radio, b"payload", 1, false);

        assert_eq!(result, Err(RadioError::Busy));
        assert_eq!(radio.submits(), 0);
        assert!(radio.uplinks().is_empty());
    }

    #[test]
    fn test_oversized_payload_clamped() {
        let mut radio = MockRadioSession::new();
        let payload = [b'x'; 60];

        send_alert(&mut radio, &payload, 1, false).unwrap();

        assert_eq!(radio.uplinks()[0].data.len(), MAX_PAYLOAD);
    }

    #[test]
    fn test_second_send_while_pending_is_dropped() {
        let mut radio = MockRadioSession::new();
        radio.set_pending_after_submit(true);

        send_alert(&mut radio, b"first", 1, false).unwrap();
        let second = send_alert(&mut radio, b"second", 1, false);

        assert_eq!(second, Err(RadioError::Busy));
        assert_eq!(radio.submits(), 1);
        assert_eq!(radio.uplinks().len(), 1);
    }
}
