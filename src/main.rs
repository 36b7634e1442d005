//! VoxHome Firmware — Main Entry Point
//!
//! Hexagonal architecture with channel-driven execution.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  ConsoleRecognizer   GpioOutputAdapter   LogEventSink          │
//! │  (recognition ch.)   (OutputPort)        (EventSink)           │
//! │  ChannelIndicator    DisplayPanel        NvsAdapter  BoardClock│
//! │  (IndicatorPort)     (display ch.)       (ConfigPort)(TimePort)│
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Dispatcher (pure logic)                   │    │
//! │  │  tags → rule table → one pin write                     │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  PingPongLink (radio experiment, independent of dispatch)      │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod channels;
mod grammar;
mod pins;
mod speech;

pub mod app;
mod adapters;
mod drivers;
pub mod radio;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{info, warn};

use adapters::display::{ChannelIndicator, ChannelStatusSink, DisplayPanel};
use adapters::gpio::GpioOutputAdapter;
use adapters::log_sink::LogEventSink;
use adapters::nvs::NvsAdapter;
use adapters::recognizer::ConsoleRecognizer;
use adapters::time::BoardClock;
use app::dispatch::Dispatcher;
use app::events::AppEvent;
use app::ports::{ConfigPort, EventSink, TimePort};
use channels::{RECOGNITION_CHANNEL, RecognitionMsg};
use config::SystemConfig;
use grammar::Grammar;
use radio::{NullRadio, PingPongLink, Role};

// ── Event fan-out ─────────────────────────────────────────────
//
// Every domain event goes to both sinks: the serial log and the display
// panel's status line (the original demo wrote each diagnostic to the
// debugger and the on-screen status text).

struct Sinks {
    log: LogEventSink,
    panel: ChannelStatusSink,
}

impl EventSink for Sinks {
    fn emit(&mut self, event: &AppEvent) {
        self.log.emit(event);
        self.panel.emit(event);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  VoxHome v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Load config from NVS (or defaults) ─────────────────
    let config = match NvsAdapter::new() {
        Ok(nvs) => match nvs.load() {
            Ok(cfg) => {
                info!("Config loaded from NVS");
                cfg
            }
            Err(e) => {
                warn!("NVS config load failed ({}), using defaults", e);
                SystemConfig::default()
            }
        },
        Err(e) => {
            warn!("NVS init failed ({}), using defaults and no persistence", e);
            SystemConfig::default()
        }
    };

    // ── 4. Compile the grammar constraint ─────────────────────
    let grammar = match &config.grammar_file {
        Some(path) => match Grammar::load(path) {
            Ok(g) => g,
            Err(e) => {
                warn!("Grammar '{}' failed ({}), using built-in vocabulary", path, e);
                Grammar::builtin()
            }
        },
        None => Grammar::builtin(),
    };

    // ── 5. Construct adapters ─────────────────────────────────
    let mut hw = GpioOutputAdapter::new();
    let mut indicator = ChannelIndicator::new();
    let mut sinks = Sinks {
        log: LogEventSink::new(),
        panel: ChannelStatusSink::new(),
    };
    let mut panel = DisplayPanel::new();
    let clock = BoardClock::new();

    sinks.emit(&AppEvent::GrammarReady {
        entries: grammar.entry_count(),
    });

    // ── 6. Construct the dispatcher + recognition session ─────
    let mut dispatcher = Dispatcher::new();
    dispatcher.start(&mut sinks);

    let _recognizer = ConsoleRecognizer::start(grammar);

    // ── 7. Radio experiment (opt-in) ──────────────────────────
    // The vendor SPI driver slots in behind RadioPort; until it is wired
    // to the bus, NullRadio keeps the link code exercised end to end.
    let mut radio_link = if config.radio_enabled {
        let mut link = PingPongLink::new(
            NullRadio,
            config.radio_role,
            config.radio_response_timeout_ms,
        );
        link.configure();
        info!("Radio link up: role '{}'", link.role().friendly_name());
        Some(link)
    } else {
        None
    };
    let mut last_ping_ms: u32 = 0;

    info!("System ready. Entering event loop.");

    // ── 8. Event loop ─────────────────────────────────────────
    loop {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.loop_poll_interval_ms,
        )));

        // Recognition channel: results arrive one at a time, serialized
        // by the session thread.
        while let Ok(msg) = RECOGNITION_CHANNEL.try_receive() {
            match msg {
                RecognitionMsg::StateChanged(state) => {
                    sinks.emit(&AppEvent::RecognizerState(state));
                }
                RecognitionMsg::Result(result) => {
                    dispatcher.handle_result(&result, &mut hw, &mut indicator, &mut sinks);
                }
            }
        }

        // Radio service.
        if let Some(link) = radio_link.as_mut() {
            match link.role() {
                Role::PingOut => {
                    let now = clock.uptime_ms();
                    if now.wrapping_sub(last_ping_ms) >= config.radio_ping_interval_ms {
                        last_ping_ms = now;
                        match link.ping(clock.uptime_us(), &clock) {
                            Ok(rt) => sinks.emit(&AppEvent::RadioRoundTrip {
                                payload: rt.payload,
                                rtt_ms: rt.rtt_ms,
                            }),
                            Err(radio::RadioError::ResponseTimeout) => {
                                sinks.emit(&AppEvent::RadioTimeout);
                            }
                            Err(e) => warn!("Radio ping failed: {}", e),
                        }
                    }
                }
                Role::PongBack => {
                    // Turnaround pause lets the other side flip back to RX.
                    if link.pong().is_some() {
                        std::thread::sleep(std::time::Duration::from_millis(u64::from(
                            config.radio_turnaround_delay_ms,
                        )));
                    }
                }
            }
        }

        // Display hand-off: drain pending indicator/status updates.
        if panel.drain() > 0 {
            log::debug!(
                "PANEL | red={} green={} bedroom={} | {}",
                panel.is_visible(app::rules::OutputId::RedLed),
                panel.is_visible(app::rules::OutputId::GreenLed),
                panel.is_visible(app::rules::OutputId::BedroomLight),
                panel.status(),
            );
        }
    }
}
