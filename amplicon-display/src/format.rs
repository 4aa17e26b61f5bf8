//! Field formatting helpers
//!
//! Each helper formats into a fresh fixed-capacity buffer on the stack;
//! there is no formatting state shared between fields or across calls.
//! Buffer capacities cover every value the machine can produce, so the
//! discarded `fmt` results can only signal truncation of oversized input.

use core::fmt::Write;

use amplicon_core::state::CycleProgress;
use heapless::String;

/// Width of the left-justified state label field
pub const STATE_LABEL_WIDTH: usize = 13;

/// Plate temperature to one decimal place: "37.0 C"
pub fn plate_temp(temp_c: f32) -> String<8> {
    let mut out = String::new();
    let _ = write!(out, "{:.1} C", temp_c);
    out
}

/// Lid temperature rounded to whole degrees: "Lid: 110 C"
///
/// Rounding is value + 0.5 truncated, the convention the lid controller
/// itself uses. The integer field is right-aligned in 3 columns.
pub fn lid_temp(temp_c: f32) -> String<12> {
    let mut out = String::new();
    let _ = write!(out, "Lid: {:3} C", (temp_c + 0.5) as i32);
    out
}

/// State label, left-justified and space-padded to 13 columns
pub fn state_label(label: &str) -> String<16> {
    let mut out = String::new();
    let _ = write!(out, "{:<width$}", label, width = STATE_LABEL_WIDTH);
    out
}

/// Cycle progress counter: "5 of 30"
///
/// The current repetition is clamped to the total so a final increment
/// racing the transition to program completion never overshoots on screen.
pub fn cycle_progress(cycle: &CycleProgress) -> String<12> {
    let current = cycle.current.min(cycle.total);
    let mut out = String::new();
    let _ = write!(out, "{} of {}", current, cycle.total);
    out
}

/// Estimated time remaining, at most 9 columns
///
/// Three forms by magnitude: "ETA: >10h" at ten hours or more,
/// "ETA: h:mm" down to one minute, "ETA:  {s:2}s" below that.
pub fn eta(remaining_s: u32) -> String<12> {
    let hours = remaining_s / 3600;
    let mins = (remaining_s % 3600) / 60;
    let secs = remaining_s % 60;

    let mut out = String::new();
    if hours >= 10 {
        let _ = out.push_str("ETA: >10h");
    } else if mins >= 1 {
        let _ = write!(out, "ETA: {}:{:02}", hours, mins);
    } else {
        let _ = write!(out, "ETA:  {:2}s", secs);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plate_temp_rounds_to_tenths() {
        assert_eq!(plate_temp(37.04), "37.0 C");
        assert_eq!(plate_temp(95.96), "96.0 C");
        assert_eq!(plate_temp(4.0), "4.0 C");
    }

    #[test]
    fn test_lid_temp_rounds_to_whole_degrees() {
        assert_eq!(lid_temp(109.6), "Lid: 110 C");
        assert_eq!(lid_temp(109.4), "Lid: 109 C");
    }

    #[test]
    fn test_lid_temp_right_aligned() {
        assert_eq!(lid_temp(95.4), "Lid:  95 C");
    }

    #[test]
    fn test_state_label_padding() {
        assert_eq!(state_label("Heating"), "Heating      ");
        assert_eq!(state_label("Denaturation1"), "Denaturation1");
    }

    #[test]
    fn test_eta_over_ten_hours() {
        assert_eq!(eta(36005), "ETA: >10h");
    }

    #[test]
    fn test_eta_hours_and_minutes() {
        assert_eq!(eta(150), "ETA: 0:02");
        assert_eq!(eta(3661), "ETA: 1:01");
        assert_eq!(eta(35999), "ETA: 9:59");
    }

    #[test]
    fn test_eta_under_a_minute() {
        assert_eq!(eta(45), "ETA:  45s");
        assert_eq!(eta(5), "ETA:   5s");
        assert_eq!(eta(0), "ETA:   0s");
    }

    #[test]
    fn test_cycle_progress_clamps_current() {
        let cycle = CycleProgress {
            current: 6,
            total: 5,
        };
        assert_eq!(cycle_progress(&cycle), "5 of 5");

        let cycle = CycleProgress {
            current: 3,
            total: 30,
        };
        assert_eq!(cycle_progress(&cycle), "3 of 30");
    }

    proptest! {
        #[test]
        fn eta_always_fits_its_field(remaining in 0u32..2_000_000) {
            let out = eta(remaining);
            prop_assert!(out.len() <= 9);
            prop_assert!(out.starts_with("ETA: "));
        }

        #[test]
        fn state_label_is_always_full_width(name in "[A-Za-z ]{0,13}") {
            prop_assert_eq!(state_label(&name).len(), STATE_LABEL_WIDTH);
        }

        #[test]
        fn cycle_progress_never_overshoots(current in 0u16..200, total in 1u16..100) {
            let out = cycle_progress(&CycleProgress { current, total });
            let shown: u16 = out
                .split(' ')
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap();
            prop_assert!(shown <= total);
        }
    }
}
