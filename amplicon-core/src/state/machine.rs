//! Run state and thermal direction
//!
//! The run state is the top-level program status. UI code keys off two
//! things only: whether the machine is off, and whether a run is actively
//! executing steps.

/// Top-level machine run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// No program loaded, outputs idle
    Off,
    /// Waiting for the heated lid to reach temperature before the run starts
    LidWait,
    /// Program executing steps
    Running,
    /// Program finished, holding the final temperature
    Complete,
    /// Fault detected; outputs disabled
    Error,
}

impl RunState {
    /// Check whether the machine is powered off
    pub const fn is_off(self) -> bool {
        matches!(self, RunState::Off)
    }
}

/// Direction the plate temperature is being driven while ramping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermalDirection {
    /// Ramping up toward a hotter setpoint
    Heat,
    /// Ramping down toward a cooler setpoint
    Cool,
}

impl ThermalDirection {
    /// Status label shown while ramping in this direction
    pub const fn label(self) -> &'static str {
        match self {
            ThermalDirection::Heat => "Heating",
            ThermalDirection::Cool => "Cooling",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_off() {
        assert!(RunState::Off.is_off());
        assert!(!RunState::Running.is_off());
        assert!(!RunState::Complete.is_off());
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(ThermalDirection::Heat.label(), "Heating");
        assert_eq!(ThermalDirection::Cool.label(), "Cooling");
    }
}
