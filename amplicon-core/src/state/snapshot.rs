//! Machine snapshot types
//!
//! A snapshot is pulled once per display refresh tick and is valid for the
//! duration of that call only; the step name borrows from the source.

use super::machine::{RunState, ThermalDirection};

/// Active program step as seen by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepInfo<'a> {
    /// Short display name, at most 13 characters
    pub name: &'a str,
    /// Whether this is the terminal step of its program
    pub is_final: bool,
}

/// Cycle repetition counters for a step inside a repeated block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleProgress {
    /// Current repetition, 1-based
    pub current: u16,
    /// Total repetitions in the block
    pub total: u16,
}

/// Read-only machine view pulled once per display update
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineSnapshot<'a> {
    /// Top-level run state
    pub state: RunState,
    /// Current plate temperature in °C
    pub plate_temp_c: f32,
    /// Current heated-lid temperature in °C
    pub lid_temp_c: f32,
    /// Ramping direction, `None` while holding at a setpoint
    pub ramp: Option<ThermalDirection>,
    /// Active step
    pub step: StepInfo<'a>,
    /// Repetition counters, absent outside a repeated block
    pub cycle: Option<CycleProgress>,
    /// Estimated remaining run time in whole seconds
    pub time_remaining_s: u32,
}
