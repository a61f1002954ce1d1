//! Bus-wide constants shared by the decoder contract and the dispatcher.
//!
//! Every concrete decoder falls back to these values unless the bus
//! documentation of its message states otherwise.

/// Standard CAN payload size in bytes. Default value of
/// [`ProtocolDecoder::length`](crate::infra::codec::traits::ProtocolDecoder::length).
pub const CANBUS_MESSAGE_LENGTH: usize = 8;

/// Default inter-arrival period of a message, in microseconds (100 ms).
pub const DEFAULT_PERIOD_US: u64 = 100 * 1000;

