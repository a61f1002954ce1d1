//! Decoder contract and the pure helpers concrete decoders build on:
//! checksum convention, value bounding, and bit/byte access.
pub mod bits;
pub mod bounds;
pub mod checksum;
pub mod traits;
