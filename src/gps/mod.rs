pub mod acquire;
pub mod nmea;
pub mod traits;

pub use acquire::FixReceiver;
pub use nmea::NmeaFixProvider;
pub use traits::{Fix, FixProvider};
