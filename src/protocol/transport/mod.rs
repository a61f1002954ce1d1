//! CAN transport layer: frame representation, message identifiers, and the
//! bus abstraction the driver implements.

pub mod can_frame;
pub mod can_id;
pub mod traits;
