//! Minimal abstraction for an asynchronous CAN bus. Lets the registry plug
//! into any driver (embedded HAL, SocketCAN, test double) without owning it.
use crate::protocol::transport::can_frame::CanFrame;
use futures_util::Future;

/// Contract to send and receive CAN frames asynchronously.
///
/// Drivers that know the arrival time fill [`CanFrame::timestamp`] on `recv`;
/// the registry then routes the frame through the timestamp-aware decode path.
pub trait CanBus {
    type Error: core::fmt::Debug;
    /// Emit a frame on the bus.
    fn send<'a>(
        &'a mut self,
        frame: &'a CanFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
    /// Wait for the next frame.
    fn recv<'a>(
        &'a mut self,
    ) -> impl core::future::Future<Output = Result<CanFrame, Self::Error>> + 'a;
}
