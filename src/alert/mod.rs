pub mod controller;
pub mod payload;
pub mod press;

pub use controller::{AlertController, AlertOutcome, Peripherals};
pub use payload::{AlertPayload, PayloadBytes};
pub use press::LongPressDetector;
