//! Board-agnostic core logic for the Amplicon thermocycler firmware
//!
//! This crate contains the application-facing model that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display surface, monotonic clock)
//! - The machine-state view queried by UI components
//!
//! Firmware crates bind the traits to real peripherals; host-side tests and
//! simulators bind them to in-memory fakes.

#![no_std]
#![deny(unsafe_code)]

pub mod state;
pub mod traits;
