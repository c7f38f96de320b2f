#![cfg_attr(not(test), no_std)]

pub mod alert;
pub mod config;
pub mod gps;
pub mod led;
pub mod power;
pub mod radio;
pub mod time;

#[cfg(test)]
pub mod testing;

pub use alert::{AlertController, AlertOutcome, Peripherals};
pub use config::AlertConfig;
