//! Test doubles: an in-memory CAN bus and a few concrete message decoders
//! shaped like real chassis messages.
use canbus_protocol::{
    bounded_value, calculate_checksum,
    infra::codec::bits::{read_signal, sign_extend, write_signal, ByteOrder},
    protocol::transport::traits::can_bus::CanBus,
    seal_checksum, verify_checksum, CanFrame, ProtocolDecoder,
};
use embassy_time::{Duration, Instant};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior.
pub struct MockCanBus {
    tx: mpsc::UnboundedSender<CanFrame>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<CanFrame>>>,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Construct a pair of interconnected buses (DUT ↔ host).
    pub fn create_pair() -> (Self, Self) {
        let (dut_tx, host_rx) = mpsc::unbounded_channel();
        let (host_tx, dut_rx) = mpsc::unbounded_channel();

        let dut_bus = Self {
            tx: dut_tx,
            rx: Arc::new(Mutex::new(dut_rx)),
        };

        let host_bus = Self {
            tx: host_tx,
            rx: Arc::new(Mutex::new(host_rx)),
        };

        (dut_bus, host_bus)
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.tx.send(frame.clone()).map_err(|_| ())?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(())
    }
}

//==================================================================================RECORDS
/// Output record filled by the chassis decoders below.
#[derive(Debug, Default, Clone, PartialEq)]
#[allow(dead_code)]
pub struct ChassisState {
    pub speed_mps: f64,
    pub steering_deg: f64,
    pub speed_stamp: Option<Instant>,
    pub checksum_faults: u32,
}

//==================================================================================DECODERS
/// 0x1A0: vehicle speed, u16 LE at 0.01 m/s, clamped to 0..=70 m/s,
/// trailing checksum in byte 7. Broadcast every 20 ms.
#[allow(dead_code)]
pub struct VehicleSpeed;

impl ProtocolDecoder<ChassisState> for VehicleSpeed {
    fn period(&self) -> Duration {
        Duration::from_millis(20)
    }

    fn decode(&self, bytes: &[u8], output: &mut ChassisState) {
        if !verify_checksum(bytes) {
            output.checksum_faults += 1;
            return;
        }
        if let Ok(raw) = read_signal(bytes, 0, 2, ByteOrder::LittleEndian) {
            output.speed_mps = bounded_value(0.0, 70.0, raw as f64 * 0.01);
        }
    }

    fn decode_at(&self, bytes: &[u8], timestamp: Instant, output: &mut ChassisState) {
        self.decode(bytes, output);
        output.speed_stamp = Some(timestamp);
    }
}

/// 0x2B0: steering angle, i16 BE at 0.1 deg, clamped to ±500 deg. Four bytes.
#[allow(dead_code)]
pub struct SteeringAngle;

impl ProtocolDecoder<ChassisState> for SteeringAngle {
    fn length(&self) -> usize {
        4
    }

    fn decode(&self, bytes: &[u8], output: &mut ChassisState) {
        if let Ok(raw) = read_signal(bytes, 0, 2, ByteOrder::BigEndian) {
            let angle = sign_extend(raw, 16) as f64 * 0.1;
            output.steering_deg = bounded_value(-500.0, 500.0, angle);
        }
    }
}

/// Outgoing steering command with a rolling counter in byte 6 and the
/// checksum in byte 7.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct SteeringCommand {
    pub target_deg: f64,
    pub counter: u8,
}

impl ProtocolDecoder<ChassisState> for SteeringCommand {
    fn period(&self) -> Duration {
        Duration::from_millis(10)
    }

    fn encode(&mut self, data: &mut [u8]) {
        if data.len() < 8 {
            return;
        }
        let target = bounded_value(-500.0, 500.0, self.target_deg);
        let raw = ((target * 10.0).round() as i16) as u16;
        if write_signal(data, raw as u64, 0, 2, ByteOrder::BigEndian).is_ok() {
            data[6] = self.counter & 0x0F;
            self.counter = self.counter.wrapping_add(1) & 0x0F;
            seal_checksum(data);
        }
    }

    fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Build an eight-byte speed frame payload with a valid checksum.
#[allow(dead_code)]
pub fn speed_payload(centi_mps: u16) -> [u8; 8] {
    let mut payload = [0u8; 8];
    payload[..2].copy_from_slice(&centi_mps.to_le_bytes());
    payload[7] = calculate_checksum(&payload[..7]);
    payload
}
