//! # Terminal
//!
//! A fixed grid of 8-pixel-wide character cells on top of a [`Surface`],
//! plus the line editor and command prompt that the keyboard drives.
//!
//! ## Layers
//!
//! ```text
//! handle_input(byte)          line editing: buffer, prompt boundary, Enter
//!        │
//!        ▼
//! put_char(byte)              cursor movement, wrap, destructive newline
//!        │
//!        ▼
//! Font::draw_char             one cell = font.width() x font.height() px
//! ```
//!
//! ## Character Effects
//!
//! | Byte        | Effect                                                  |
//! |-------------|---------------------------------------------------------|
//! | `\n`        | column 0, next row; past the last row clears the screen |
//! | `\r`        | column 0                                                |
//! | backspace   | if column > 0: step left and blank the cell             |
//! | anything    | draw, step right; past the last column acts as `\n`     |
//!
//! The bottom-of-screen behavior is a wrap, not a scroll: everything on
//! screen is discarded and output continues from the top-left cell.

pub mod commands;
pub mod line_buffer;

pub use commands::{dispatch, Response};
pub use line_buffer::LineBuffer;

use crate::{
    framebuffer::{Font, Surface},
    input::{InputEventHandler, BACKSPACE, CARRIAGE_RETURN, NEWLINE},
    kernel::InitError,
    serial_println,
    ui::Theme,
};

pub const PROMPT: &str = "> ";
pub const GREETING: &str = "CONIX Kernel v0.1.1";

// =============================================================================
// TERMINAL
// =============================================================================

pub struct Terminal<'a> {
    surface: Surface<'a>,
    font: Font<'a>,
    theme: Theme,
    cursor_col: usize,
    cursor_row: usize,
    max_cols: usize,
    max_rows: usize,
    input: LineBuffer,
    /// First column after the most recent prompt. Line editing never
    /// erases left of it on the prompt's row.
    prompt_col: usize,
}

impl<'a> Terminal<'a> {
    /// Take over `surface`, clear it to the theme background and home the
    /// cursor. The grid size is fixed from here on.
    pub fn new(surface: Surface<'a>, font: Font<'a>, theme: Theme) -> Result<Self, InitError> {
        let max_cols = surface.width() / font.width();
        let max_rows = surface.height() / font.height();
        if max_cols == 0 || max_rows == 0 {
            return Err(InitError::ScreenTooSmall);
        }

        let mut terminal = Self {
            surface,
            font,
            theme,
            cursor_col: 0,
            cursor_row: 0,
            max_cols,
            max_rows,
            input: LineBuffer::new(),
            prompt_col: 0,
        };
        terminal.clear();
        Ok(terminal)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    pub fn put_char(&mut self, byte: u8) {
        match byte {
            NEWLINE => self.newline(),
            CARRIAGE_RETURN => self.cursor_col = 0,
            BACKSPACE => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                    self.draw_cell(b' ');
                }
            }
            _ => {
                self.draw_cell(byte);
                self.cursor_col += 1;
                if self.cursor_col >= self.max_cols {
                    self.newline();
                }
            }
        }
    }

    pub fn write(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.cursor_col = 0;
        self.cursor_row += 1;

        if self.cursor_row >= self.max_rows {
            self.clear();
        }
    }

    /// Paint the whole surface with the background color and home the cursor.
    pub fn clear(&mut self) {
        self.surface.clear(self.theme.background);
        self.cursor_col = 0;
        self.cursor_row = 0;
    }

    pub fn print_prompt(&mut self) {
        self.write(PROMPT);
        self.prompt_col = self.cursor_col;
    }

    /// Greeting line followed by the first prompt.
    pub fn start_session(&mut self) {
        self.write_line(GREETING);
        self.print_prompt();
    }

    fn draw_cell(&mut self, byte: u8) {
        let x = self.cursor_col * self.font.width();
        let y = self.cursor_row * self.font.height();
        self.font.draw_char(
            &mut self.surface,
            byte,
            x,
            y,
            self.theme.foreground,
            self.theme.background,
        );
    }

    // -------------------------------------------------------------------------
    // Line editing
    // -------------------------------------------------------------------------

    /// Feed one decoded key press into the line editor.
    pub fn handle_input(&mut self, byte: u8) {
        match byte {
            NEWLINE => self.submit_line(),
            BACKSPACE => self.rub_out(),
            _ => {
                if self.input.push(byte) {
                    self.put_char(byte);
                } else {
                    serial_println!("terminal: line full, dropped {:#04x}", byte);
                }
            }
        }
    }

    fn rub_out(&mut self) {
        if self.input.pop().is_none() {
            return;
        }

        if self.cursor_col > self.prompt_col || self.cursor_row > 0 {
            if self.cursor_col == 0 {
                // the guard above means we are below row 0 here
                self.cursor_row -= 1;
                self.cursor_col = self.max_cols - 1;
            } else {
                self.cursor_col -= 1;
            }
            self.draw_cell(b' ');
        }
    }

    fn submit_line(&mut self) {
        self.put_char(NEWLINE);

        let line = self.input.clone();
        self.input.clear();
        if !line.is_empty() {
            match dispatch(line.as_bytes()) {
                Response::Output(text) => self.write_line(text),
                Response::NotFound(input) => {
                    self.write(commands::NOT_FOUND_PREFIX);
                    self.write_bytes(input);
                    self.newline();
                }
            }
        }

        self.print_prompt();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// `(column, row)` of the next cell to be written
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_col, self.cursor_row)
    }

    pub fn input(&self) -> &[u8] {
        self.input.as_bytes()
    }

    pub fn prompt_col(&self) -> usize {
        self.prompt_col
    }

    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn surface(&self) -> &Surface<'a> {
        &self.surface
    }

    pub fn font(&self) -> &Font<'a> {
        &self.font
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

impl InputEventHandler for Terminal<'_> {
    fn handle_input(&mut self, byte: u8) {
        Terminal::handle_input(self, byte);
    }
}

// =============================================================================
// TEST SUPPORT
// =============================================================================


#[cfg(test)]
mod tests {
    use super::testing::{screen, terminal, type_str};
    use super::*;
    use crate::{
        drivers::ps2_keyboard::service_interrupt,
        framebuffer::FONT_DATA,
        interrupts::platform::mock::MockPlatform,
    };

    #[test]
    fn test_rejects_surface_smaller_than_a_cell() {
        let font = Font::parse(FONT_DATA).unwrap();

        let narrow = testing::surface(7, 64);
        assert_eq!(
            Terminal::new(narrow, font, Theme::default()).err(),
            Some(InitError::ScreenTooSmall)
        );

        let short = testing::surface(64, 15);
        assert_eq!(
            Terminal::new(short, font, Theme::default()).err(),
            Some(InitError::ScreenTooSmall)
        );
    }

    #[test]
    fn test_new_clears_and_sizes_grid() {
        let font = Font::parse(FONT_DATA).unwrap();
        // leftover pixels past the last whole cell still get cleared
        let term = Terminal::new(testing::surface(85, 40), font, Theme::default()).unwrap();

        assert_eq!(term.max_cols(), 10);
        assert_eq!(term.max_rows(), 2);
        assert_eq!(term.cursor(), (0, 0));
        for y in 0..40 {
            for x in 0..85 {
                assert_eq!(term.surface().pixel(x, y), Some(Theme::default().background));
            }
        }
    }

    #[test]
    fn test_put_char_advances_and_wraps() {
        let mut term = terminal(4, 3);
        term.write("abcd");
        assert_eq!(term.cursor(), (0, 1));
        term.write("ef");
        assert_eq!(screen(&term), ["abcd", "ef", ""]);
    }

    #[test]
    fn test_carriage_return_only_resets_column() {
        let mut term = terminal(10, 2);
        term.write("hello\rj");
        assert_eq!(term.cursor(), (1, 0));
        assert_eq!(screen(&term)[0], "jello");
    }

    #[test]
    fn test_put_char_backspace_erases_on_current_row() {
        let mut term = terminal(10, 2);
        term.write("ab");
        term.put_char(BACKSPACE);
        assert_eq!(term.cursor(), (1, 0));
        assert_eq!(screen(&term)[0], "a");

        term.write("\n");
        term.put_char(BACKSPACE);
        assert_eq!(term.cursor(), (0, 1));
    }

    #[test]
    fn test_newline_past_bottom_clears_screen() {
        let mut term = terminal(20, 3);
        term.write_line("one");
        term.write_line("two");
        assert_eq!(screen(&term), ["one", "two", ""]);

        term.write_line("three");
        assert_eq!(term.cursor(), (0, 0));
        assert_eq!(screen(&term), ["", "", ""]);

        term.write("four");
        assert_eq!(screen(&term), ["four", "", ""]);
    }

    #[test]
    fn test_cursor_stays_in_bounds_while_typing() {
        let mut term = terminal(7, 3);
        term.print_prompt();
        for i in 0..400usize {
            term.handle_input(b'a' + (i % 26) as u8);
            let (col, row) = term.cursor();
            assert!(col < term.max_cols(), "col {} after {} keys", col, i + 1);
            assert!(row < term.max_rows(), "row {} after {} keys", row, i + 1);
        }
    }

    #[test]
    fn test_backspace_at_origin_is_a_no_op() {
        let mut term = terminal(10, 3);
        for _ in 0..5 {
            term.handle_input(BACKSPACE);
            term.put_char(BACKSPACE);
        }
        assert_eq!(term.cursor(), (0, 0));
        assert!(term.input().is_empty());
    }

    #[test]
    fn test_backspace_cannot_erase_prompt() {
        let mut term = terminal(10, 3);
        term.print_prompt();
        type_str(&mut term, "ab");
        for _ in 0..5 {
            term.handle_input(BACKSPACE);
        }

        assert_eq!(term.cursor(), (2, 0));
        assert!(term.input().is_empty());
        assert_eq!(screen(&term)[0], ">");
    }

    #[test]
    fn test_backspace_crosses_row_boundary() {
        let mut term = terminal(10, 4);
        term.print_prompt();
        type_str(&mut term, "abcdefghi");
        assert_eq!(term.cursor(), (1, 1));
        assert_eq!(screen(&term)[..2], ["> abcdefgh", "i"]);

        term.handle_input(BACKSPACE);
        assert_eq!(term.cursor(), (0, 1));
        term.handle_input(BACKSPACE);
        assert_eq!(term.cursor(), (9, 0));

        assert_eq!(term.input(), b"abcdefg");
        assert_eq!(screen(&term)[..2], ["> abcdefg", ""]);
    }

    #[test]
    fn test_input_is_capped_at_255() {
        let mut term = terminal(40, 8);
        let typed: std::vec::Vec<u8> = (0..300usize).map(|i| b'a' + (i % 26) as u8).collect();
        for &byte in &typed {
            term.handle_input(byte);
        }

        assert_eq!(term.input().len(), 255);
        assert_eq!(term.input(), &typed[..255]);
    }

    #[test]
    fn test_conix_prints_banner_then_prompt() {
        let mut term = terminal(40, 8);
        term.start_session();
        type_str(&mut term, "conix\n");

        assert_eq!(
            screen(&term),
            [
                "CONIX Kernel v0.1.1",
                "> conix",
                "CONIX Kernel v0.1.1",
                "by Coen Buck",
                "Released November 3rd, 2025",
                ">",
                "",
                "",
            ]
        );
        assert_eq!(term.cursor(), (2, 5));
        assert_eq!(term.prompt_col(), 2);
        assert!(term.input().is_empty());
    }

    #[test]
    fn test_unknown_command_reports_not_found() {
        let mut term = terminal(40, 8);
        term.print_prompt();
        type_str(&mut term, "abc\n");

        assert_eq!(screen(&term)[..3], ["> abc", "command not found: abc", ">"]);
        assert_eq!(term.cursor(), (2, 2));
    }

    #[test]
    fn test_fixed_responses() {
        for (command, output) in [
            ("fortnite", "timmy this is NOT how the terminal works"),
            ("shimboot", "no"),
        ] {
            let mut term = terminal(48, 4);
            term.print_prompt();
            type_str(&mut term, command);
            term.handle_input(NEWLINE);
            assert_eq!(screen(&term)[1], output);
            assert_eq!(screen(&term)[2], ">");
        }
    }

    #[test]
    fn test_empty_line_just_reprompts() {
        let mut term = terminal(20, 4);
        term.print_prompt();
        term.handle_input(NEWLINE);
        assert_eq!(screen(&term)[..3], [">", ">", ""]);
    }

    #[test]
    fn test_edited_line_is_what_gets_dispatched() {
        let mut term = terminal(40, 4);
        term.print_prompt();
        type_str(&mut term, "shimbooo");
        term.handle_input(BACKSPACE);
        type_str(&mut term, "t\n");
        assert_eq!(screen(&term)[1], "no");
    }

    #[test]
    fn test_release_scancode_leaves_terminal_untouched() {
        let mut term = terminal(20, 4);
        term.start_session();
        type_str(&mut term, "ls");
        let before = (screen(&term), term.cursor(), term.input().to_vec());

        let mut platform = MockPlatform::with_scancodes(&[0x9E]);
        assert_eq!(service_interrupt(&mut platform, Some(&mut term)), None);

        assert_eq!(platform.end_of_interrupts(), 1);
        assert_eq!((screen(&term), term.cursor(), term.input().to_vec()), before);
    }

    #[test]
    fn test_keyboard_drives_terminal() {
        let mut term = terminal(40, 4);
        term.print_prompt();

        // a, b, c, Enter with releases in between
        let mut platform =
            MockPlatform::with_scancodes(&[0x1E, 0x9E, 0x30, 0xB0, 0x2E, 0xAE, 0x1C, 0x9C]);
        for _ in 0..8 {
            service_interrupt(&mut platform, Some(&mut term));
        }

        assert_eq!(screen(&term)[1], "command not found: abc");
        assert_eq!(platform.end_of_interrupts(), 8);
    }
}
