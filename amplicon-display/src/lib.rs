//! Status display controller for the Amplicon thermocycler
//!
//! This crate renders the machine's current operating state onto a 20×4
//! character display:
//!
//! - `controller` — the display controller; owns the surface exclusively and
//!   repaints the fixed layout once per refresh tick
//! - `format` — field formatting into fixed-capacity buffers
//! - `screen` — in-memory character grid for host-side tests and simulators
//!
//! # Architecture
//!
//! The controller observes the machine through the `StatusSource` trait and
//! never decides machine behavior. An external periodic caller (the firmware
//! scheduler loop) drives it by invoking [`controller::StatusDisplay::update`];
//! there are no internal threads or timers. Long unattended runs are guarded
//! by a blind periodic reinitialization of the display hardware, which
//! recovers it from electrical noise-induced corruption.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod controller;
pub mod format;
pub mod screen;

pub use controller::{StatusDisplay, REINIT_INTERVAL_MS};
pub use screen::Screen;
