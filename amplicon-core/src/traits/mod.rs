//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod clock;
pub mod display;
pub mod status;

pub use clock::MonotonicClock;
pub use display::{DisplaySurface, SCREEN_COLS, SCREEN_ROWS};
pub use status::StatusSource;
