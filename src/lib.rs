//! `canbus-protocol` library: the per-message decoding contract shared by every
//! CAN message decoder of a vehicle/sensor driver stack, in a `no_std`
//! environment. The crate exposes the codec infrastructure (decoder trait,
//! checksum, value bounding, bit helpers) and the protocol layer (frames,
//! identifiers, bus abstraction, message registry).
#![no_std]
//==================================================================================
/// Constants shared by the codec and the dispatcher (payload size, default period).
pub mod core;
/// Registry, dispatch, bit-access and bus errors.
pub mod error;
/// Decoder contract and the pure helpers every concrete decoder relies on.
pub mod infra;
/// CAN transport types and the message registry built on top of the decoder contract.
pub mod protocol;
//==================================================================================
pub use crate::core::{CANBUS_MESSAGE_LENGTH, DEFAULT_PERIOD_US};
pub use crate::infra::codec::bounds::bounded_value;
pub use crate::infra::codec::checksum::{calculate_checksum, seal_checksum, verify_checksum};
pub use crate::infra::codec::traits::{InertDecoder, ProtocolDecoder};
pub use crate::protocol::dispatch::{DispatchConfig, LengthPolicy, MessageRegistry};
pub use crate::protocol::transport::{can_frame::CanFrame, can_id::MessageId};
