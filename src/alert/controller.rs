//! Alert control loop
//!
//! One `tick` per loop iteration, in order:
//! 1. advance the radio scheduler and react to its events
//! 2. while not joined, skip straight to the idle delay
//! 3. sample the long-press detector
//! 4. on confirmation: acquire a fix (bounded stall), sample the battery,
//!    encode, submit through the busy gate, blink
//! 5. idle delay
//!
//! Fix acquisition stalls the whole loop, radio servicing included.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_io::{Read, ReadReady};

use crate::alert::payload::AlertPayload;
use crate::alert::press::LongPressDetector;
use crate::config::AlertConfig;
use crate::gps::{FixProvider, FixReceiver};
use crate::led::{BlinkPattern, StatusLed};
use crate::power::{BatteryMonitor, PowerProvider};
use crate::radio::{send_alert, RadioError, RadioEvent, RadioSession};
use crate::time::Clock;

/// What happened to a confirmed alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Uplink scheduled on the radio session
    Submitted,
    /// Alert discarded; nothing was handed to the radio
    Dropped(RadioError),
}

/// Hardware and services the controller drives
pub struct Peripherals<R, S, F, P, B, L, C, D> {
    pub radio: R,
    pub gps_stream: S,
    pub fix_provider: F,
    pub power: P,
    pub button: B,
    pub led: L,
    pub clock: C,
    pub delay: D,
}

/// Long-press alert controller
pub struct AlertController<R, S, F, P, B, L, C, D> {
    config: AlertConfig,
    radio: R,
    gps: FixReceiver<S, F>,
    battery: BatteryMonitor<P>,
    detector: LongPressDetector<B>,
    led: StatusLed<L>,
    clock: C,
    delay: D,
    joined: bool,
    alert_sent: bool,
}

impl<R, S, F, P, B, L, C, D> AlertController<R, S, F, P, B, L, C, D>
where
    R: RadioSession,
    S: Read + ReadReady,
    F: FixProvider,
    P: PowerProvider,
    B: InputPin,
    L: OutputPin,
    C: Clock,
    D: DelayNs,
{
    pub fn new(peripherals: Peripherals<R, S, F, P, B, L, C, D>, config: AlertConfig) -> Self {
        log::info!("Waiting for network join...");
        Self {
            radio: peripherals.radio,
            gps: FixReceiver::new(peripherals.gps_stream, peripherals.fix_provider),
            battery: BatteryMonitor::new(peripherals.power),
            detector: LongPressDetector::new(peripherals.button, config.press_threshold_ms),
            led: StatusLed::new(peripherals.led),
            clock: peripherals.clock,
            delay: peripherals.delay,
            config,
            joined: false,
            alert_sent: false,
        }
    }

    /// Whether the network join has completed
    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// Whether the most recent alert was handed to the radio
    pub fn alert_sent(&self) -> bool {
        self.alert_sent
    }

    /// The radio session
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// The radio session, mutably
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// The GPS receiver
    pub fn gps(&self) -> &FixReceiver<S, F> {
        &self.gps
    }

    /// The battery monitor
    pub fn battery(&self) -> &BatteryMonitor<P> {
        &self.battery
    }

    /// Run the loop forever
    pub async fn run(&mut self) -> ! {
        loop {
            self.tick().await;
        }
    }

    /// One loop iteration
    ///
    /// Returns the outcome when this tick confirmed an alert.
    pub async fn tick(&mut self) -> Option<AlertOutcome> {
        let events = self.radio.advance_scheduler().await;
        for event in events {
            self.handle_event(event).await;
        }

        let mut outcome = None;
        if self.joined {
            let now = self.clock.now_ms();
            if self.detector.poll(now) {
                outcome = Some(self.raise_alert().await);
            }
        }

        self.delay.delay_ms(self.config.idle_delay_ms).await;
        outcome
    }

    async fn handle_event(&mut self, event: RadioEvent) {
        match event {
            RadioEvent::Joined => {
                if self.joined {
                    return;
                }
                log::info!("Joined network");
                self.joined = true;
                self.led.blink(&mut self.delay, BlinkPattern::JOINED).await;
            }
            RadioEvent::TxComplete => {
                log::info!("Transmission complete");
                self.led
                    .blink(&mut self.delay, BlinkPattern::TX_COMPLETE)
                    .await;
            }
        }
    }

    async fn raise_alert(&mut self) -> AlertOutcome {
        log::info!("Alert triggered");
        self.alert_sent = false;

        let fix = self
            .gps
            .acquire(
                &self.clock,
                &mut self.delay,
                self.config.fix_timeout_ms,
                self.config.fix_poll_interval_ms,
            )
            .await;
        let battery = self.battery.sample();
        log::info!(
            "GPS: {:.6},{:.6} Battery: {:.2}",
            fix.latitude,
            fix.longitude,
            battery.volts
        );

        let payload = AlertPayload::new(fix, battery).encode();
        let outcome = match send_alert(
            &mut self.radio,
            &payload,
            self.config.uplink_port,
            self.config.confirmed_uplink,
        ) {
            Ok(()) => {
                self.alert_sent = true;
                AlertOutcome::Submitted
            }
            Err(e) => AlertOutcome::Dropped(e),
        };

        self.led
            .blink(&mut self.delay, BlinkPattern::ALERT_DISPATCHED)
            .await;
        self.detector.reset();
        log::info!("Ready for next alert");
        outcome
    }
}
