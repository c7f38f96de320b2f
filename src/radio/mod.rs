pub mod gate;
pub mod traits;

pub use gate::send_alert;
pub use traits::{RadioError, RadioEvent, RadioEvents, RadioSession};
