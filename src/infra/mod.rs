//! Infrastructure shared by every message decoder.
pub mod codec;
