//! Bounded-time fix acquisition
//!
//! Drains the GPS byte stream into the fix provider until a fresh fix shows
//! up or the window closes. The caller is stalled for up to the full window.

use embedded_hal_async::delay::DelayNs;
use embedded_io::{Read, ReadReady};

use crate::gps::traits::{Fix, FixProvider};
use crate::time::Clock;

/// GPS receiver: byte stream plus decoder
pub struct FixReceiver<S, F> {
    stream: S,
    provider: F,
}

impl<S, F> FixReceiver<S, F>
where
    S: Read + ReadReady,
    F: FixProvider,
{
    /// Pair a GPS byte stream with a decoder
    pub fn new(stream: S, provider: F) -> Self {
        Self { stream, provider }
    }

    /// The underlying decoder
    pub fn provider(&self) -> &F {
        &self.provider
    }

    /// Feed every byte currently available on the stream to the decoder
    fn drain(&mut self) {
        let mut buf = [0u8; 32];
        while let Ok(true) = self.stream.read_ready() {
            match self.stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        self.provider.feed(byte);
                    }
                }
            }
        }
    }

    /// Wait up to `timeout_ms` for an updated fix
    ///
    /// Returns the fix as soon as the decoder reports one. If the window
    /// elapses first, returns `Fix::UNAVAILABLE` exactly at the boundary.
    pub async fn acquire<C, D>(
        &mut self,
        clock: &C,
        delay: &mut D,
        timeout_ms: u32,
        poll_interval_ms: u32,
    ) -> Fix
    where
        C: Clock,
        D: DelayNs,
    {
        let start = clock.now_ms();
        let window = u64::from(timeout_ms);

        loop {
            let elapsed = clock.now_ms().saturating_sub(start);
            if elapsed >= window {
                break;
            }

            self.drain();
            if self.provider.has_updated_fix() {
                let (latitude, longitude) = self.provider.current_fix();
                log::debug!("GPS fix after {} ms", elapsed);
                return Fix::new(latitude, longitude);
            }

            // Never sleep past the window boundary
            let remaining = (window - elapsed) as u32;
            delay.delay_ms(poll_interval_ms.clamp(1, remaining)).await;
        }

        log::warn!("No GPS fix within {} ms", timeout_ms);
        Fix::UNAVAILABLE
    }
}
