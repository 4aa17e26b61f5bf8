//! Machine state source trait

use crate::state::MachineSnapshot;

/// Trait for the machine state source queried by UI components
///
/// A pure query with no side effects observable to the caller. The source
/// must present a coherent view within one call; if it is shared with a
/// concurrently-updating control loop it serializes access itself.
pub trait StatusSource {
    /// Current machine state as a read-only snapshot
    fn snapshot(&self) -> MachineSnapshot<'_>;
}
