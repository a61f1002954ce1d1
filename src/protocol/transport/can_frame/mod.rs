//! In-memory representation of a classic CAN data frame as delivered by the
//! bus driver, with its optional arrival timestamp.
use crate::core::CANBUS_MESSAGE_LENGTH;
use crate::protocol::transport::can_id::MessageId;
use embassy_time::Instant;
use embedded_can::Id;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Raw CAN frame as read from, or written to, the bus.
pub struct CanFrame {
    /// Message identifier.
    pub id: MessageId,
    /// Payload buffer. Classic CAN frames carry at most eight bytes.
    pub data: [u8; CANBUS_MESSAGE_LENGTH],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
    /// Arrival time stamped by the driver, when it provides one.
    pub timestamp: Option<Instant>,
}

impl CanFrame {
    /// Creates a data frame. Returns `None` when `data` exceeds eight bytes.
    pub fn new(id: impl Into<MessageId>, data: &[u8]) -> Option<Self> {
        if data.len() > CANBUS_MESSAGE_LENGTH {
            return None;
        }
        let mut buffer = [0u8; CANBUS_MESSAGE_LENGTH];
        buffer[..data.len()].copy_from_slice(data);

        Some(Self {
            id: id.into(),
            data: buffer,
            len: data.len(),
            timestamp: None,
        })
    }

    /// Attaches the arrival time.
    pub fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Valid payload bytes only.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        CanFrame::new(MessageId::from(id.into()), data)
    }

    // Remote frames never carry a decodable payload.
    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        self.id.is_extended()
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        self.id.id()
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        self.payload()
    }
}
