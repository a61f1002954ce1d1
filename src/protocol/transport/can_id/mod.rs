//! CAN message identifiers (11-bit standard or 29-bit extended), used as the
//! lookup key of the message registry.
use core::fmt;
use embedded_can::{ExtendedId, Id, StandardId};

//==================================================================================MESSAGE_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of one CAN message type. Wraps [`embedded_can::Id`] so the
/// registry and the bus drivers share the same representation.
pub struct MessageId(Id);

impl MessageId {
    /// Builds an 11-bit identifier. Returns `None` above `0x7FF`.
    pub fn standard(raw: u16) -> Option<Self> {
        StandardId::new(raw).map(|id| Self(Id::Standard(id)))
    }

    /// Builds a 29-bit identifier. Returns `None` above `0x1FFF_FFFF`.
    pub fn extended(raw: u32) -> Option<Self> {
        ExtendedId::new(raw).map(|id| Self(Id::Extended(id)))
    }

    /// Numeric value of the identifier, without the format flag.
    pub fn raw(&self) -> u32 {
        match self.0 {
            Id::Standard(id) => id.as_raw() as u32,
            Id::Extended(id) => id.as_raw(),
        }
    }

    /// `true` for 29-bit identifiers.
    pub fn is_extended(&self) -> bool {
        matches!(self.0, Id::Extended(_))
    }

    /// Underlying `embedded-can` identifier.
    pub fn id(&self) -> Id {
        self.0
    }
}

impl From<Id> for MessageId {
    fn from(id: Id) -> Self {
        Self(id)
    }
}

impl From<StandardId> for MessageId {
    fn from(id: StandardId) -> Self {
        Self(Id::Standard(id))
    }
}

impl From<ExtendedId> for MessageId {
    fn from(id: ExtendedId) -> Self {
        Self(Id::Extended(id))
    }
}

impl From<MessageId> for Id {
    fn from(id: MessageId) -> Self {
        id.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extended() {
            write!(f, "0x{:08X}", self.raw())
        } else {
            write!(f, "0x{:03X}", self.raw())
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MessageId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:#x}", self.raw())
    }
}
