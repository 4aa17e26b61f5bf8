//! Character-display surface trait

/// Number of character columns on the standard 2004 LCD
pub const SCREEN_COLS: u8 = 20;

/// Number of character rows on the standard 2004 LCD
pub const SCREEN_ROWS: u8 = 4;

/// Trait for the character display surface
///
/// Provides a hardware-agnostic interface to a fixed character grid
/// addressable by (column, row). The status controller has a no-fail
/// contract, so every operation is infallible: implementations absorb
/// hardware I/O errors rather than propagating them.
pub trait DisplaySurface {
    /// Initialize the display to the given character geometry
    ///
    /// Also clears the screen. Re-issuing this on live hardware resets the
    /// display controller's registers, which recovers it after noise-induced
    /// corruption.
    fn begin(&mut self, cols: u8, rows: u8);

    /// Clear the entire screen and home the cursor
    fn clear(&mut self);

    /// Position the cursor at (column, row), both 0-based
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write a text run starting at the cursor
    ///
    /// The run overwrites existing characters in place. Text never wraps or
    /// scrolls; anything past the last column is dropped.
    fn write_text(&mut self, text: &str);
}
