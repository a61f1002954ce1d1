//! Message registry: maps each CAN identifier to the decoder that owns it and
//! routes received frames into the caller's output record.
//!
//! The registry is where the frame-length policy lives. Decoders never check
//! `len == length()` themselves; the registry applies one explicit
//! [`LengthPolicy`] to every frame before calling into them.
//!
//! Storage is a fixed pool of `N` slots (no allocation), in the same spirit as
//! a receive loop running on a microcontroller:
//!
//! ```
//! use canbus_protocol::{CanFrame, MessageId, MessageRegistry, ProtocolDecoder};
//!
//! #[derive(Default)]
//! struct Vehicle { gear: u8 }
//!
//! struct GearReport;
//! impl ProtocolDecoder<Vehicle> for GearReport {
//!     fn length(&self) -> usize { 1 }
//!     fn decode(&self, bytes: &[u8], out: &mut Vehicle) {
//!         if let Some(gear) = bytes.first() { out.gear = *gear; }
//!     }
//! }
//!
//! let id = MessageId::standard(0x300).unwrap();
//! let mut gear = GearReport;
//! let mut registry: MessageRegistry<'_, Vehicle, 4> = MessageRegistry::default();
//! registry.register(id, &mut gear).unwrap();
//!
//! let mut vehicle = Vehicle::default();
//! registry.dispatch(&CanFrame::new(id, &[3]).unwrap(), &mut vehicle).unwrap();
//! assert_eq!(vehicle.gear, 3);
//! ```
use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::error::{BusError, DispatchError, RegistryError};
use crate::infra::codec::traits::ProtocolDecoder;
use crate::protocol::transport::{can_frame::CanFrame, can_id::MessageId, traits::can_bus::CanBus};

pub mod monitor;

pub use monitor::ArrivalStats;

//==================================================================================CONFIG
/// How the registry treats a frame whose length differs from the decoder's
/// [`length`](ProtocolDecoder::length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LengthPolicy {
    /// Only frames of exactly the declared length reach the decoder.
    #[default]
    Exact,
    /// Longer frames are forwarded, shorter ones rejected.
    AtLeast,
    /// Every frame is forwarded; decoders bound-check against the slice.
    Lenient,
}

impl LengthPolicy {
    /// `true` when a frame of `actual` bytes may be handed to a decoder
    /// declaring `expected` bytes.
    pub fn accepts(&self, expected: usize, actual: usize) -> bool {
        match self {
            LengthPolicy::Exact => actual == expected,
            LengthPolicy::AtLeast => actual >= expected,
            LengthPolicy::Lenient => true,
        }
    }
}

/// Registry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchConfig {
    /// Frame-length policy applied before every decode.
    pub length_policy: LengthPolicy,
}

//==================================================================================REGISTRY
struct Entry<'a, S> {
    id: MessageId,
    decoder: &'a mut dyn ProtocolDecoder<S>,
    stats: ArrivalStats,
}

/// Fixed-capacity table of decoders keyed by [`MessageId`].
///
/// Decoders are borrowed mutably for `'a`: the registry is their only user
/// while it lives, which is what makes the non-thread-safe decoder contract
/// sound.
pub struct MessageRegistry<'a, S, const N: usize> {
    config: DispatchConfig,
    entries: Vec<Entry<'a, S>, N>,
}

impl<S, const N: usize> Default for MessageRegistry<'_, S, N> {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

impl<'a, S, const N: usize> MessageRegistry<'a, S, N> {
    /// Empty registry with the given settings.
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Active settings.
    pub fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Bind `decoder` to `id`.
    pub fn register(
        &mut self,
        id: MessageId,
        decoder: &'a mut dyn ProtocolDecoder<S>,
    ) -> Result<(), RegistryError> {
        if self.contains(id) {
            return Err(RegistryError::Duplicate { id });
        }
        self.entries
            .push(Entry {
                id,
                decoder,
                stats: ArrivalStats::default(),
            })
            .map_err(|_| RegistryError::Full)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Registered decoder for {}", id);
        Ok(())
    }

    /// `true` when a decoder is bound to `id`.
    pub fn contains(&self, id: MessageId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered identifiers, in registration order.
    pub fn ids(&self) -> Vec<MessageId, N> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Period hint of the decoder bound to `id`.
    pub fn period_of(&self, id: MessageId) -> Option<Duration> {
        self.entry(id).map(|e| e.decoder.period())
    }

    /// Expected frame length of the decoder bound to `id`.
    pub fn length_of(&self, id: MessageId) -> Option<usize> {
        self.entry(id).map(|e| e.decoder.length())
    }

    /// Reception history of `id`.
    pub fn stats(&self, id: MessageId) -> Option<ArrivalStats> {
        self.entry(id).map(|e| e.stats)
    }

    //==================================================================================RECEIVE
    /// Route `frame` to its decoder, writing into `output`.
    ///
    /// Frames carrying a timestamp go through
    /// [`decode_at`](ProtocolDecoder::decode_at), the others through
    /// [`decode`](ProtocolDecoder::decode). Rejected frames leave `output`
    /// and the arrival stats untouched.
    pub fn dispatch(&mut self, frame: &CanFrame, output: &mut S) -> Result<(), DispatchError> {
        let policy = self.config.length_policy;
        let id = frame.id;
        let Some(entry) = self.entry_mut(id) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("No decoder for {}", id);
            return Err(DispatchError::UnknownMessage { id });
        };

        let expected = entry.decoder.length();
        if !policy.accepts(expected, frame.len) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Dropping {}: length {} violates {} (expected {})",
                id,
                frame.len,
                policy,
                expected
            );
            return Err(DispatchError::LengthMismatch {
                id,
                expected,
                actual: frame.len,
            });
        }

        match frame.timestamp {
            Some(timestamp) => entry.decoder.decode_at(frame.payload(), timestamp, output),
            None => entry.decoder.decode(frame.payload(), output),
        }
        entry.stats.record(frame.timestamp);
        Ok(())
    }

    //==================================================================================TRANSMIT
    /// Let the decoder bound to `id` fill `buffer`. Returns the number of
    /// bytes belonging to the message (its declared length).
    pub fn encode(&mut self, id: MessageId, buffer: &mut [u8]) -> Result<usize, DispatchError> {
        let entry = self
            .entry_mut(id)
            .ok_or(DispatchError::UnknownMessage { id })?;

        let needed = entry.decoder.length();
        if buffer.len() < needed {
            return Err(DispatchError::BufferTooSmall {
                id,
                needed,
                available: buffer.len(),
            });
        }
        entry.decoder.encode(&mut buffer[..needed]);
        Ok(needed)
    }

    /// Encode `id` into a ready-to-send frame.
    pub fn build_frame(&mut self, id: MessageId) -> Result<CanFrame, DispatchError> {
        let mut payload = [0u8; crate::core::CANBUS_MESSAGE_LENGTH];
        let len = match self.length_of(id) {
            Some(len) if len > payload.len() => {
                return Err(DispatchError::BufferTooSmall {
                    id,
                    needed: len,
                    available: payload.len(),
                })
            }
            Some(_) => self.encode(id, &mut payload)?,
            None => return Err(DispatchError::UnknownMessage { id }),
        };
        CanFrame::new(id, &payload[..len]).ok_or(DispatchError::BufferTooSmall {
            id,
            needed: len,
            available: payload.len(),
        })
    }

    //==================================================================================LIFECYCLE
    /// Reset every decoder and forget all arrival history.
    pub fn reset_all(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.decoder.reset();
            entry.stats.clear();
        }
        #[cfg(feature = "defmt")]
        defmt::info!("Reset {} decoders", self.entries.len());
    }

    /// Identifiers whose last timestamped frame is older than
    /// `period * tolerance` at `now`. Identifiers never received with a
    /// timestamp are skipped; check [`stats`](Self::stats) for those.
    pub fn overdue(&self, now: Instant, tolerance: u32) -> Vec<MessageId, N> {
        self.entries
            .iter()
            .filter(|e| {
                let limit = e
                    .decoder
                    .period()
                    .checked_mul(tolerance)
                    .unwrap_or(Duration::MAX);
                e.stats.is_overdue(now, limit)
            })
            .map(|e| e.id)
            .collect()
    }

    //==================================================================================BUS
    /// Pull one frame from `bus` and dispatch it. Returns the identifier of
    /// the frame that was decoded.
    pub async fn receive<C: CanBus>(
        &mut self,
        bus: &mut C,
        output: &mut S,
    ) -> Result<MessageId, BusError<C::Error>> {
        let frame = bus.recv().await.map_err(BusError::Bus)?;
        self.dispatch(&frame, output)?;
        Ok(frame.id)
    }

    /// Encode `id` and push it onto `bus`.
    pub async fn transmit<C: CanBus>(
        &mut self,
        bus: &mut C,
        id: MessageId,
    ) -> Result<(), BusError<C::Error>> {
        let frame = self.build_frame(id)?;
        bus.send(&frame).await.map_err(BusError::Bus)
    }

    fn entry(&self, id: MessageId) -> Option<&Entry<'a, S>> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn entry_mut(&mut self, id: MessageId) -> Option<&mut Entry<'a, S>> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}
