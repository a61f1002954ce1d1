//! Protocol layer around the decoder contract: CAN transport types and the
//! message registry that routes frames to decoders.
pub mod dispatch;
pub mod transport;
