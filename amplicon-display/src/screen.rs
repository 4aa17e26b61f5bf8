//! In-memory character screen
//!
//! A host-side [`DisplaySurface`] backed by a plain character grid. Firmware
//! binds the controller to a real HD44780-class driver; tests and simulators
//! bind it to this buffer and assert on rendered rows.
//!
//! Content is ASCII only, matching what the character LCD can show.

use amplicon_core::traits::display::{DisplaySurface, SCREEN_COLS, SCREEN_ROWS};

const COLS: usize = SCREEN_COLS as usize;
const ROWS: usize = SCREEN_ROWS as usize;

/// Character grid with cursor tracking and init/clear counters
#[derive(Clone)]
pub struct Screen {
    cells: [[u8; COLS]; ROWS],
    cursor_col: u8,
    cursor_row: u8,
    inits: u32,
    clears: u32,
}

impl Screen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            cursor_col: 0,
            cursor_row: 0,
            inits: 0,
            clears: 0,
        }
    }

    /// Rendered content of one row, space-padded to the full width
    ///
    /// Returns an empty string for rows outside the grid.
    pub fn line(&self, row: usize) -> &str {
        match self.cells.get(row) {
            Some(cells) => core::str::from_utf8(cells).unwrap_or(""),
            None => "",
        }
    }

    /// Check whether every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == b' '))
    }

    /// Number of geometry initializations issued so far
    pub fn inits(&self) -> u32 {
        self.inits
    }

    /// Number of explicit clears issued so far (excludes `begin`)
    pub fn clears(&self) -> u32 {
        self.clears
    }

    fn blank(&mut self) {
        self.cells = [[b' '; COLS]; ROWS];
        self.cursor_col = 0;
        self.cursor_row = 0;
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for Screen {
    fn begin(&mut self, _cols: u8, _rows: u8) {
        self.inits += 1;
        self.blank();
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.blank();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor_col = col;
        self.cursor_row = row;
    }

    fn write_text(&mut self, text: &str) {
        let row = self.cursor_row as usize;
        if row >= ROWS {
            return;
        }
        let mut col = self.cursor_col as usize;
        for &byte in text.as_bytes() {
            if col >= COLS {
                break;
            }
            self.cells[row][col] = byte;
            col += 1;
        }
        self.cursor_col = col as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_at_cursor() {
        let mut screen = Screen::new();
        screen.set_cursor(13, 0);
        screen.write_text("72.3 C");
        assert_eq!(screen.line(0), "             72.3 C ");
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let mut screen = Screen::new();
        screen.set_cursor(0, 1);
        screen.write_text("Annealing");
        screen.set_cursor(0, 1);
        screen.write_text("Ext");
        assert_eq!(screen.line(1), "Extealing           ");
    }

    #[test]
    fn test_no_wrap_past_last_column() {
        let mut screen = Screen::new();
        screen.set_cursor(15, 2);
        screen.write_text("0123456789");
        assert_eq!(screen.line(2), "               01234");
        assert_eq!(screen.line(3), "                    ");
    }

    #[test]
    fn test_clear_blanks_everything() {
        let mut screen = Screen::new();
        screen.set_cursor(0, 0);
        screen.write_text("hello");
        screen.clear();
        assert!(screen.is_blank());
        assert_eq!(screen.clears(), 1);
    }

    #[test]
    fn test_begin_counts_separately_from_clear() {
        let mut screen = Screen::new();
        screen.write_text("x");
        screen.begin(SCREEN_COLS, SCREEN_ROWS);
        assert!(screen.is_blank());
        assert_eq!(screen.inits(), 1);
        assert_eq!(screen.clears(), 0);
    }

    #[test]
    fn test_out_of_range_row_ignored() {
        let mut screen = Screen::new();
        screen.set_cursor(0, 9);
        screen.write_text("lost");
        assert!(screen.is_blank());
    }
}
