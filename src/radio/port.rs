//! Radio driver abstraction — the vendor nRF24L01 library contract.
//!
//! Concrete implementations:
//! - vendor SPI driver on real hardware (external crate, CE/CSN per `pins`)
//! - loopback / scripted fakes in tests
//!
//! The link engine is generic over `RadioPort`, so swapping the radio
//! module requires zero changes to the exchange logic.

use super::PAYLOAD_LEN;

/// Fixed-payload packet radio.
pub trait RadioPort {
    /// Power up and apply base configuration.
    fn begin(&mut self);

    /// Auto-retry config: `delay` in 250 µs units, `count` attempts.
    fn set_retries(&mut self, delay: u8, count: u8);

    /// Select the transmit pipe address (40-bit).
    fn open_writing_pipe(&mut self, addr: u64);

    /// Open a receive pipe at `addr` (40-bit).
    fn open_reading_pipe(&mut self, pipe: u8, addr: u64);

    /// Enter receive mode.
    fn start_listening(&mut self);

    /// Leave receive mode so the pipe can transmit.
    fn stop_listening(&mut self);

    /// Blocking transmit with auto-ack.  `true` when the ack arrived.
    fn write(&mut self, payload: &[u8; PAYLOAD_LEN]) -> bool;

    /// Whether a received payload is waiting.
    fn available(&self) -> bool;

    /// Pop one payload into `payload`.  `true` when the RX FIFO is now
    /// empty (this was the last one).
    fn read(&mut self, payload: &mut [u8; PAYLOAD_LEN]) -> bool;
}

/// A radio that transmits into the void and never receives.
/// Stands in until the vendor driver is wired to the SPI bus.
pub struct NullRadio;

impl RadioPort for NullRadio {
    fn begin(&mut self) {}

    fn set_retries(&mut self, _delay: u8, _count: u8) {}

    fn open_writing_pipe(&mut self, _addr: u64) {}

    fn open_reading_pipe(&mut self, _pipe: u8, _addr: u64) {}

    fn start_listening(&mut self) {}

    fn stop_listening(&mut self) {}

    fn write(&mut self, _payload: &[u8; PAYLOAD_LEN]) -> bool {
        false
    }

    fn available(&self) -> bool {
        false
    }

    fn read(&mut self, _payload: &mut [u8; PAYLOAD_LEN]) -> bool {
        true
    }
}
