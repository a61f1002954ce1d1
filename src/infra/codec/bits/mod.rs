//! Low-level bit and byte helpers used by concrete decoders to pull signals
//! out of a CAN payload and to lay them back in before transmission.
//!
//! Single-byte fields go through [`Byte`]; byte-aligned multi-byte signals go
//! through [`read_signal`] / [`write_signal`]. Nothing here allocates.
use crate::error::BitError;

//==================================================================================BYTE
/// Bit-addressable view over one payload byte. Bit `0` is the least
/// significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Byte(pub u8);

impl Byte {
    /// Wrap a raw byte.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Read bit `pos`.
    pub fn is_bit_set(&self, pos: u8) -> Result<bool, BitError> {
        check_position(pos)?;
        Ok((self.0 >> pos) & 0x01 == 0x01)
    }

    /// Force bit `pos` to 1.
    pub fn set_bit(&mut self, pos: u8) -> Result<(), BitError> {
        check_position(pos)?;
        self.0 |= 1 << pos;
        Ok(())
    }

    /// Force bit `pos` to 0.
    pub fn clear_bit(&mut self, pos: u8) -> Result<(), BitError> {
        check_position(pos)?;
        self.0 &= !(1 << pos);
        Ok(())
    }

    /// Extract `len` bits starting at `start`, right-aligned.
    pub fn bits(&self, start: u8, len: u8) -> Result<u8, BitError> {
        let mask = range_mask(start, len)?;
        Ok((self.0 & mask) >> start)
    }

    /// Replace `len` bits starting at `start` with the low bits of `value`.
    /// Bits of `value` above `len` are discarded.
    pub fn set_bits(&mut self, value: u8, start: u8, len: u8) -> Result<(), BitError> {
        let mask = range_mask(start, len)?;
        self.0 = (self.0 & !mask) | ((value << start) & mask);
        Ok(())
    }
}

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Byte> for u8 {
    fn from(byte: Byte) -> Self {
        byte.0
    }
}

fn check_position(pos: u8) -> Result<(), BitError> {
    if pos >= 8 {
        return Err(BitError::InvalidPosition { pos });
    }
    Ok(())
}

// Mask covering bits `start..start + len` of a byte.
fn range_mask(start: u8, len: u8) -> Result<u8, BitError> {
    if len == 0 || start >= 8 || start as u16 + len as u16 > 8 {
        return Err(BitError::InvalidRange { start, len });
    }
    let width = ((1u16 << len) - 1) as u8;
    Ok(width << start)
}

//==================================================================================SIGNALS
/// Byte order of a multi-byte signal inside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    /// Least significant byte first ("Intel").
    LittleEndian,
    /// Most significant byte first ("Motorola").
    BigEndian,
}

/// Read an unsigned signal of `byte_len` bytes starting at `start_byte`.
pub fn read_signal(
    data: &[u8],
    start_byte: usize,
    byte_len: usize,
    order: ByteOrder,
) -> Result<u64, BitError> {
    let window = signal_window(data.len(), start_byte, byte_len)?;
    let bytes = &data[window];

    let fold = |acc: u64, byte: &u8| (acc << 8) | *byte as u64;
    Ok(match order {
        ByteOrder::BigEndian => bytes.iter().fold(0, fold),
        ByteOrder::LittleEndian => bytes.iter().rev().fold(0, fold),
    })
}

/// Write the low `byte_len` bytes of `value` starting at `start_byte`.
pub fn write_signal(
    data: &mut [u8],
    value: u64,
    start_byte: usize,
    byte_len: usize,
    order: ByteOrder,
) -> Result<(), BitError> {
    let window = signal_window(data.len(), start_byte, byte_len)?;
    let bytes = &mut data[window];

    for (i, slot) in bytes.iter_mut().enumerate() {
        let shift = match order {
            ByteOrder::LittleEndian => i,
            ByteOrder::BigEndian => byte_len - 1 - i,
        } * 8;
        *slot = (value >> shift) as u8;
    }
    Ok(())
}

/// Interpret the low `bits` bits of `raw` as a two's-complement integer.
/// `bits` outside `1..=64` leaves the value reinterpreted as-is.
pub fn sign_extend(raw: u64, bits: u8) -> i64 {
    if bits == 0 || bits >= 64 {
        return raw as i64;
    }
    let shift = 64 - bits as u32;
    ((raw << shift) as i64) >> shift
}

fn signal_window(
    available: usize,
    start_byte: usize,
    byte_len: usize,
) -> Result<core::ops::Range<usize>, BitError> {
    if byte_len == 0 {
        return Err(BitError::EmptySignal);
    }
    if byte_len > 8 {
        return Err(BitError::TooLongForType {
            max: 8,
            asked: byte_len,
        });
    }
    let end = start_byte
        .checked_add(byte_len)
        .filter(|end| *end <= available)
        .ok_or(BitError::OutOfBounds {
            asked: start_byte.saturating_add(byte_len),
            available,
        })?;
    Ok(start_byte..end)
}
