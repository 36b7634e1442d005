//! Integration tests for the point-to-point radio link.
//!
//! Two link halves are wired back-to-back through an in-memory pipe pair,
//! standing in for the vendor radio's air interface.  The pong side runs
//! on its own thread, as the second node would on a real bench.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use voxhome::adapters::time::BoardClock;
use voxhome::radio::{PAYLOAD_LEN, PingPongLink, RadioError, RadioPort, Role};

// ── Shared-air loopback pair ──────────────────────────────────

type Air = Arc<Mutex<VecDeque<[u8; PAYLOAD_LEN]>>>;

/// One end of a wired pair: writes land in the peer's RX queue.
struct PipeRadio {
    rx: Air,
    peer_rx: Air,
}

fn radio_pair() -> (PipeRadio, PipeRadio) {
    let a: Air = Arc::new(Mutex::new(VecDeque::new()));
    let b: Air = Arc::new(Mutex::new(VecDeque::new()));
    (
        PipeRadio {
            rx: Arc::clone(&a),
            peer_rx: Arc::clone(&b),
        },
        PipeRadio {
            rx: b,
            peer_rx: a,
        },
    )
}

impl RadioPort for PipeRadio {
    fn begin(&mut self) {}
    fn set_retries(&mut self, _delay: u8, _count: u8) {}
    fn open_writing_pipe(&mut self, _addr: u64) {}
    fn open_reading_pipe(&mut self, _pipe: u8, _addr: u64) {}
    fn start_listening(&mut self) {}
    fn stop_listening(&mut self) {}

    fn write(&mut self, payload: &[u8; PAYLOAD_LEN]) -> bool {
        self.peer_rx.lock().unwrap().push_back(*payload);
        true
    }

    fn available(&self) -> bool {
        !self.rx.lock().unwrap().is_empty()
    }

    fn read(&mut self, payload: &mut [u8; PAYLOAD_LEN]) -> bool {
        let mut rx = self.rx.lock().unwrap();
        if let Some(p) = rx.pop_front() {
            *payload = p;
        }
        rx.is_empty()
    }
}

// ── Exchange tests ────────────────────────────────────────────

#[test]
fn ping_pong_round_trips_the_timestamp() {
    let (ping_radio, pong_radio) = radio_pair();
    let mut ping_side = PingPongLink::new(ping_radio, Role::PingOut, 1000);
    let mut pong_side = PingPongLink::new(pong_radio, Role::PongBack, 1000);
    ping_side.configure();
    pong_side.configure();

    // Second node: service the pong side until one echo goes out.
    let peer = std::thread::spawn(move || {
        loop {
            if let Some(echoed) = pong_side.pong() {
                return echoed;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    });

    let stamp: u64 = 0xDEAD_BEEF_0000_0042;
    let clock = BoardClock::new();
    let rt = ping_side.ping(stamp, &clock).unwrap();

    assert_eq!(rt.payload, stamp, "echo must carry the timestamp back");
    assert_eq!(peer.join().unwrap(), stamp);
    assert_eq!(ping_side.pings_sent(), 1);
    assert_eq!(ping_side.echoes_seen(), 1);
}

#[test]
fn pong_echoes_the_last_waiting_payload() {
    let (ping_radio, pong_radio) = radio_pair();
    let mut pong_side = PingPongLink::new(pong_radio, Role::PongBack, 1000);
    pong_side.configure();

    assert_eq!(pong_side.pong(), None, "nothing waiting yet");

    // Two stamps land before the pong side gets serviced; the last wins.
    ping_radio.peer_rx.lock().unwrap().push_back(7u64.to_le_bytes());
    ping_radio.peer_rx.lock().unwrap().push_back(9u64.to_le_bytes());

    assert_eq!(pong_side.pong(), Some(9));
    // The echo is now waiting on the ping side's queue.
    assert_eq!(
        ping_radio.rx.lock().unwrap().front(),
        Some(&9u64.to_le_bytes())
    );
}

#[test]
fn ping_times_out_when_the_peer_is_silent() {
    let (ping_radio, _pong_radio) = radio_pair();
    let mut ping_side = PingPongLink::new(ping_radio, Role::PingOut, 50);
    ping_side.configure();
    let clock = BoardClock::new();

    // The peer never services its FIFO, so no echo ever appears.
    assert_eq!(ping_side.ping(7, &clock), Err(RadioError::ResponseTimeout));
    assert_eq!(ping_side.pings_sent(), 1);
    assert_eq!(ping_side.echoes_seen(), 0);
}
