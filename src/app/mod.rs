//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the VoxHome system: tag
//! extraction, the dispatch rule table, and the dispatcher service.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod dispatch;
pub mod events;
pub mod ports;
pub mod rules;
pub mod tags;
