//! GPIO / peripheral pin assignments for the VoxHome main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Voice-controlled outputs
// ---------------------------------------------------------------------------

/// Digital output: red demo LED (active HIGH).
pub const RED_LED_GPIO: i32 = 5;
/// Digital output: green demo LED (active HIGH).
pub const GREEN_LED_GPIO: i32 = 6;
/// Digital output: bedroom-light relay driver (active HIGH).
pub const BEDROOM_LIGHT_GPIO: i32 = 13;

// The porch light has no pin assignment: the grammar recognises it but the
// output is not wired on this board revision.  See `app::rules`.

// ---------------------------------------------------------------------------
// nRF24L01 radio link (SPI2)
// ---------------------------------------------------------------------------

/// Chip-enable line (RX/TX mode strobe), driven by the vendor radio driver.
pub const RADIO_CE_GPIO: i32 = 21;
/// SPI chip-select for the radio.
pub const RADIO_CSN_GPIO: i32 = 10;
pub const RADIO_SCLK_GPIO: i32 = 12;
pub const RADIO_MOSI_GPIO: i32 = 11;
pub const RADIO_MISO_GPIO: i32 = 14;

/// SPI clock for the radio bus (nRF24L01 tops out at 10 MHz; 1 MHz is plenty).
pub const RADIO_SPI_FREQ_HZ: u32 = 1_000_000;
