//! Error definitions shared across library modules.
//!
//! The decoder contract itself never fails: these types only model the
//! policies enforced around it (registry bookkeeping, frame-length policy,
//! bit access, bus I/O).
use crate::protocol::transport::can_id::MessageId;
use thiserror_no_std::Error;

//==================================================================================REGISTRY_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Failures while populating a [`MessageRegistry`](crate::protocol::dispatch::MessageRegistry).
pub enum RegistryError {
    /// Every slot of the fixed-capacity registry is already taken.
    #[error("Registry is full")]
    Full,
    /// A decoder is already registered for this identifier.
    #[error("Decoder already registered for message {id}")]
    Duplicate { id: MessageId },
}

//==================================================================================DISPATCH_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Reasons a frame could not be routed to, or produced by, a decoder.
pub enum DispatchError {
    /// No decoder is registered for the identifier.
    #[error("Unknown message {id}")]
    UnknownMessage { id: MessageId },
    /// Frame length violates the configured length policy.
    #[error("Invalid length for message {id} -> expected: {expected}, actual: {actual}")]
    LengthMismatch {
        id: MessageId,
        expected: usize,
        actual: usize,
    },
    /// Output buffer cannot hold the encoded message.
    #[error("Buffer too small for message {id} -> needed: {needed}, available: {available}")]
    BufferTooSmall {
        id: MessageId,
        needed: usize,
        available: usize,
    },
}

//==================================================================================BIT_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised by the byte/bit field helpers.
pub enum BitError {
    /// Bit position outside of `0..8`.
    #[error("Invalid bit position: {pos}")]
    InvalidPosition { pos: u8 },
    /// `start + len` does not fit in a single byte.
    #[error("Bit range out of byte -> start: {start}, len: {len}")]
    InvalidRange { start: u8, len: u8 },
    /// Signal extends past the end of the payload.
    #[error("Attempted to access out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Signal width does not fit in a `u64`.
    #[error("Cannot handle more than {max} bytes. Requested: {asked}")]
    TooLongForType { max: usize, asked: usize },
    /// Signal of zero bytes.
    #[error("Signal length must be at least one byte")]
    EmptySignal,
}

//==================================================================================BUS_ERROR
#[derive(Debug, Error)]
/// Errors surfaced by the async receive/transmit helpers of the registry.
pub enum BusError<E: core::fmt::Debug> {
    /// CAN layer refused or failed to move the frame.
    #[error("CAN bus error: {0:?}")]
    Bus(E),
    /// The frame moved but the registry rejected it.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
