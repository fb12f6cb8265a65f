//! Serial terminal: prompts, digit choices and line entry
//!
//! Reads block by polling the port and sleeping between polls. There is
//! no timeout and no abort; the only way out of a read is valid input.

use core::fmt;

use embedded_hal::delay::DelayNs;

use super::buffer::LineBuffer;
use crate::config::{MenuConfig, ENTRY_FIELD_SIZE};

/// Printed after a rejected menu choice
pub const INVALID_CHOICE_MESSAGE: &str = " is invalid.  Digits 0-9 only";

/// Duplex byte stream the menu talks over
pub trait SerialPort {
    /// At least one byte can be read without blocking
    fn available(&mut self) -> bool;

    /// Take the next byte, or `None` when nothing is buffered
    fn read_byte(&mut self) -> Option<u8>;

    /// Write bytes. Failures are the port's own concern.
    fn write(&mut self, bytes: &[u8]);
}

/// Text typed at a `read_line` prompt
pub type Entry = LineBuffer<ENTRY_FIELD_SIZE>;

/// Blocking input reader and text output over a [`SerialPort`]
pub struct Terminal<'a> {
    port: &'a mut dyn SerialPort,
    delay: &'a mut dyn DelayNs,
    config: MenuConfig,
}

impl<'a> Terminal<'a> {
    pub fn new(port: &'a mut dyn SerialPort, delay: &'a mut dyn DelayNs, config: MenuConfig) -> Self {
        Self { port, delay, config }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn print(&mut self, s: &str) {
        self.port.write(s.as_bytes());
    }

    pub fn newline(&mut self) {
        self.port.write(b"\r\n");
    }

    /// Drop anything already buffered on the line
    pub fn flush_input(&mut self) {
        while self.port.available() {
            if self.port.read_byte().is_none() {
                break;
            }
        }
    }

    /// Block until a byte arrives
    fn next_byte(&mut self) -> u8 {
        loop {
            if self.port.available() {
                if let Some(byte) = self.port.read_byte() {
                    return byte;
                }
            }
            self.delay.delay_ms(self.config.poll_interval_ms);
        }
    }

    /// Prompt for a single digit no greater than `max_options`.
    ///
    /// Every typed character is echoed. Anything else is rejected with
    /// [`INVALID_CHOICE_MESSAGE`] and the read repeats.
    pub fn read_single_digit_choice(&mut self, prompt: &str, max_options: u8) -> u8 {
        self.flush_input();
        self.print(prompt);

        let choice = loop {
            let byte = self.next_byte();
            if self.config.echo_input {
                self.port.write(&[byte]);
            }

            if byte.is_ascii_digit() && byte - b'0' <= max_options {
                break byte - b'0';
            }

            self.print(INVALID_CHOICE_MESSAGE);
            self.newline();
        };

        self.newline();
        choice
    }

    /// Prompt for a line of at most `max_length - 1` characters.
    ///
    /// Ends at CR or LF, or as soon as the limit is reached. The result
    /// is echoed back once complete. Backspace removes the last character.
    /// A character cut in half by the limit is dropped.
    pub fn read_line(&mut self, prompt: &str, max_length: usize) -> Entry {
        let limit = max_length.saturating_sub(1).min(ENTRY_FIELD_SIZE);
        let mut line = Entry::new();

        self.flush_input();
        self.print(prompt);

        while line.len() < limit {
            match self.next_byte() {
                b'\r' | b'\n' => break,
                0x08 | 0x7F => line.backspace(),
                byte => {
                    line.push(byte);
                }
            }
        }
        // The limit may fall inside a multi-byte character
        line.trim_partial_char();

        if self.config.echo_input {
            self.port.write(line.as_bytes());
        }
        self.newline();
        line
    }
}

impl fmt::Write for Terminal<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.port.write(s.as_bytes());
        Ok(())
    }
}
