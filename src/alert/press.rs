//! Long-press detection on the alert button
//!
//! The button is active low. A confirmation requires one continuous hold of
//! at least the threshold from a single press edge; releasing at any point
//! restarts the timer. After a confirmation the button must be released
//! before another hold can confirm.

use embedded_hal::digital::InputPin;

/// Press-and-hold detector
pub struct LongPressDetector<B> {
    button: B,
    threshold_ms: u64,
    /// Instant the current press started, `None` while released
    press_start_ms: Option<u64>,
    /// Set after a confirmation until the button is released
    awaiting_release: bool,
}

impl<B: InputPin> LongPressDetector<B> {
    pub fn new(button: B, threshold_ms: u64) -> Self {
        Self {
            button,
            threshold_ms,
            press_start_ms: None,
            awaiting_release: false,
        }
    }

    /// Sample the button at `now_ms`
    ///
    /// Returns true exactly once per qualifying hold; the press must be
    /// released and pressed again to re-arm.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let pressed = self.button.is_low().unwrap_or(false);
        if !pressed {
            self.press_start_ms = None;
            self.awaiting_release = false;
            return false;
        }
        if self.awaiting_release {
            return false;
        }

        match self.press_start_ms {
            None => {
                self.press_start_ms = Some(now_ms);
                false
            }
            Some(start) if now_ms.saturating_sub(start) >= self.threshold_ms => {
                self.press_start_ms = None;
                self.awaiting_release = true;
                true
            }
            Some(_) => false,
        }
    }

    /// Forget any press in progress
    ///
    /// A latched confirmation still waits for release.
    pub fn reset(&mut self) {
        self.press_start_ms = None;
    }

    /// Start of the press in progress
    pub fn press_start_ms(&self) -> Option<u64> {
        self.press_start_ms
    }
}
