//! Status display controller
//!
//! Repaints the machine status onto the 20×4 character grid once per
//! refresh tick. Layout of the live view:
//!
//! ```text
//! ┌────────────────────┐
//! │Annealing    72.3 C │  state label / plate temperature
//! │                    │
//! │          Lid: 110 C│  lid temperature
//! │3 of 30    ETA: 0:02│  cycle progress / time remaining
//! └────────────────────┘
//! ```
//!
//! Every field is rewritten on every call; the only whole-screen operations
//! are the clear on a run-state transition and the periodic blind
//! reinitialization that recovers the display from noise corruption.

use amplicon_core::state::{MachineSnapshot, RunState};
use amplicon_core::traits::clock::MonotonicClock;
use amplicon_core::traits::display::{DisplaySurface, SCREEN_COLS, SCREEN_ROWS};
use amplicon_core::traits::status::StatusSource;

use crate::format;

/// Interval between blind display reinitializations (ms)
///
/// Electrical noise can desynchronize the display controller over a long
/// unattended run; re-issuing the geometry setup at this interval recovers
/// it without needing to detect the corruption.
pub const REINIT_INTERVAL_MS: u64 = 60_000;

/// Product name shown on the idle screen
const PRODUCT_NAME: &str = "Amplicon";

/// Display controller
///
/// Owns the display surface exclusively; no other component may write to
/// it, which keeps frames from interleaving. The status source is borrowed
/// and must outlive the controller.
pub struct StatusDisplay<'a, D, C, S> {
    surface: D,
    clock: C,
    source: &'a S,
    last_state: RunState,
    last_reinit: u64,
}

impl<'a, D, C, S> StatusDisplay<'a, D, C, S>
where
    D: DisplaySurface,
    C: MonotonicClock,
    S: StatusSource,
{
    /// Create the controller and perform the initial display setup
    pub fn new(mut surface: D, clock: C, source: &'a S) -> Self {
        surface.begin(SCREEN_COLS, SCREEN_ROWS);
        let last_reinit = clock.now_ms();
        Self {
            surface,
            clock,
            source,
            last_state: RunState::Off,
            last_reinit,
        }
    }

    /// Access the display surface
    ///
    /// Used by firmware to flush buffered surfaces and by tests to assert
    /// on rendered rows.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Render one frame of the current machine state
    ///
    /// Called once per refresh tick by the scheduler loop; completes in
    /// bounded time and never blocks. Clears the screen on run-state
    /// transitions and reinitializes the display once per
    /// [`REINIT_INTERVAL_MS`].
    pub fn update(&mut self) {
        let snapshot = self.source.snapshot();

        if snapshot.state != self.last_state {
            self.surface.clear();
        }
        self.last_state = snapshot.state;

        let now = self.clock.now_ms();
        let since_reinit = now.wrapping_sub(self.last_reinit);
        if since_reinit >= REINIT_INTERVAL_MS {
            #[cfg(feature = "defmt")]
            defmt::debug!("display reinit after {} ms", since_reinit);
            self.surface.begin(SCREEN_COLS, SCREEN_ROWS);
            self.last_reinit = now;
        }

        if snapshot.state.is_off() {
            self.draw_idle();
        } else {
            self.draw_status(&snapshot);
        }
    }

    fn draw_idle(&mut self) {
        self.surface.set_cursor(6, 1);
        self.surface.write_text(PRODUCT_NAME);
        self.surface.set_cursor(4, 2);
        self.surface.write_text("Powered Off");
    }

    fn draw_status(&mut self, snapshot: &MachineSnapshot<'_>) {
        // Plate temperature, top right
        self.surface.set_cursor(13, 0);
        self.surface.write_text(&format::plate_temp(snapshot.plate_temp_c));

        // Lid temperature
        self.surface.set_cursor(10, 2);
        self.surface.write_text(&format::lid_temp(snapshot.lid_temp_c));

        // State label: the ramping direction wins over the step name
        let label = match snapshot.ramp {
            Some(direction) => direction.label(),
            None => snapshot.step.name,
        };
        self.surface.set_cursor(0, 0);
        self.surface.write_text(&format::state_label(label));

        // Bottom row: cycle/ETA while the run still has steps left, the
        // completion banner otherwise. Ramping is deliberately ignored
        // here; it only affects the state label above.
        if snapshot.state == RunState::Running && !snapshot.step.is_final {
            if let Some(cycle) = &snapshot.cycle {
                self.surface.set_cursor(0, 3);
                self.surface.write_text(&format::cycle_progress(cycle));
            }
            self.surface.set_cursor(11, 3);
            self.surface.write_text(&format::eta(snapshot.time_remaining_s));
        } else {
            self.surface.set_cursor(0, 3);
            self.surface.write_text("*** Run Complete ***");
        }
    }
}
