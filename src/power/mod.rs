pub mod axp192;
pub mod battery;
pub mod traits;

pub use axp192::Axp192;
pub use battery::{BatteryMonitor, BatteryReading};
pub use traits::{PowerError, PowerProvider};
