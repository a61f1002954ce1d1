//! One's-complement byte-sum checksum shared by every message of the bus
//! family: `(SUM(input) mod 256) ^ 0xFF`.

/// Sum every byte modulo 256, then complement the result.
///
/// An empty input yields `0xFF`.
///
/// ```
/// use canbus_protocol::calculate_checksum;
///
/// assert_eq!(calculate_checksum(&[0x01, 0x02]), 0xFC);
/// assert_eq!(calculate_checksum(&[]), 0xFF);
/// ```
#[inline]
pub fn calculate_checksum(input: &[u8]) -> u8 {
    input.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte)) ^ 0xFF
}

/// `true` when the last byte of `frame` is the checksum of the bytes before it.
/// Always `false` for an empty frame.
pub fn verify_checksum(frame: &[u8]) -> bool {
    match frame.split_last() {
        Some((trailer, body)) => calculate_checksum(body) == *trailer,
        None => false,
    }
}

/// Overwrite the last byte of `frame` with the checksum of the bytes before it.
pub fn seal_checksum(frame: &mut [u8]) {
    if let Some((trailer, body)) = frame.split_last_mut() {
        *trailer = calculate_checksum(body);
    }
}
