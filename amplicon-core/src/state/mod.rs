//! Machine state model observed by the display
//!
//! Read-only types describing what the thermocycler is doing right now.
//! The control loop produces them; UI components only consume them.

pub mod machine;
pub mod snapshot;

pub use machine::{RunState, ThermalDirection};
pub use snapshot::{CycleProgress, MachineSnapshot, StepInfo};
