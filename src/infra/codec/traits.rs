//! Public traits exposed by the codec layer. They decouple concrete message
//! decoders from the dispatcher and provide a uniform API to upper layers.
use crate::core::{CANBUS_MESSAGE_LENGTH, DEFAULT_PERIOD_US};
use embassy_time::{Duration, Instant};

//==================================================================================PROTOCOL_DECODER
/// Decoding/encoding rules for exactly one CAN message identifier.
///
/// `S` is the sensor or vehicle-state record the message contributes to. The
/// caller owns it; a decoder only writes the fields its message carries.
///
/// Every method has an inert default so that a decoder which overrides
/// nothing can still be registered and dispatched to without faulting:
///
/// | Method | Default |
/// |---|---|
/// | [`period`](Self::period) | 100 ms |
/// | [`length`](Self::length) | [`CANBUS_MESSAGE_LENGTH`] (8) |
/// | [`decode`](Self::decode) | no-op |
/// | [`decode_at`](Self::decode_at) | forwards to `decode`, timestamp dropped |
/// | [`encode`](Self::encode) | no-op |
/// | [`reset`](Self::reset) | no-op |
///
/// # Frame length
///
/// `bytes` may be shorter (or longer) than [`length`](Self::length). The
/// trait does not enforce equality: the length policy lives in the
/// [`MessageRegistry`](crate::protocol::dispatch::MessageRegistry), and
/// implementations must bound-check against `bytes.len()` themselves when
/// they are used outside of it.
///
/// # Concurrency
///
/// The trait carries no `Send`/`Sync` bound and implementations are not
/// required to tolerate concurrent calls on the same value. A decoder that
/// keeps calibration state documents its own discipline; the registry hands
/// out decoders through `&mut`, so one receive task drives each of them.
///
/// # Example
///
/// ```
/// use canbus_protocol::{bounded_value, ProtocolDecoder};
/// use embassy_time::Duration;
///
/// #[derive(Default)]
/// struct Wheel { speed_kph: f32 }
///
/// struct WheelSpeed;
///
/// impl ProtocolDecoder<Wheel> for WheelSpeed {
///     fn period(&self) -> Duration {
///         Duration::from_millis(20)
///     }
///
///     fn decode(&self, bytes: &[u8], output: &mut Wheel) {
///         if let [lo, hi, ..] = *bytes {
///             let raw = u16::from_le_bytes([lo, hi]) as f32 / 100.0;
///             output.speed_kph = bounded_value(0.0, 300.0, raw);
///         }
///     }
/// }
///
/// let mut wheel = Wheel::default();
/// WheelSpeed.decode(&[0x10, 0x27], &mut wheel);
/// assert_eq!(wheel.speed_kph, 100.0);
/// assert_eq!(WheelSpeed.length(), 8);
/// ```
pub trait ProtocolDecoder<S> {
    /// Expected interval between two frames of this message.
    fn period(&self) -> Duration {
        Duration::from_micros(DEFAULT_PERIOD_US)
    }

    /// Expected payload length of this message, in bytes.
    fn length(&self) -> usize {
        CANBUS_MESSAGE_LENGTH
    }

    /// Parse `bytes` according to this message's layout and write the result
    /// into `output`.
    fn decode(&self, _bytes: &[u8], _output: &mut S) {}

    /// Timestamp-aware variant of [`decode`](Self::decode). Override it when
    /// the decoded record needs the arrival time.
    fn decode_at(&self, bytes: &[u8], _timestamp: Instant, output: &mut S) {
        self.decode(bytes, output)
    }

    /// Write the current field values of this message into `data` for
    /// transmission. `data` holds at least [`length`](Self::length) bytes.
    fn encode(&mut self, _data: &mut [u8]) {}

    /// Restore any calibration or accumulator state to its initial value.
    fn reset(&mut self) {}
}

//==================================================================================INERT_DECODER
/// Descriptor that overrides nothing: default length, default period, and
/// no-op decode/encode/reset. Useful to reserve an identifier in a registry
/// before its real decoder exists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InertDecoder;

impl<S> ProtocolDecoder<S> for InertDecoder {}
