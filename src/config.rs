//! Module: config
//!
//! Purpose: Buffer sizes and runtime knobs for the menu engine.
//!
//! All buffers are sized at compile time. Nothing here is persisted;
//! a `MenuConfig` lives as long as the session that owns it.

/// Capacity of entry fields: resolved strings, typed lines, the setting.
pub const ENTRY_FIELD_SIZE: usize = 64;

/// Capacity of one rendered menu page.
pub const MENU_BUFFER_SIZE: usize = 150;

/// Capacity of a page rendered as HTML. Markup roughly doubles a page.
pub const HTML_BUFFER_SIZE: usize = 512;

/// Selectable items per level. Input is a single digit starting at 0.
pub const MAX_MENU_ITEMS: usize = 9;

/// Highest digit the menu prompt accepts.
pub const MAX_CHOICE: u8 = 9;

/// Delay between polls of an idle serial line.
pub const POLL_INTERVAL_MS: u32 = 1000;

/// Runtime configuration of a menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Sleep between `available()` polls while blocked on input.
    pub poll_interval_ms: u32,
    /// Upper bound passed to the digit prompt.
    pub max_choice: u8,
    /// Echo typed characters back to the terminal.
    pub echo_input: bool,
}

impl MenuConfig {
    pub const fn new() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
            max_choice: MAX_CHOICE,
            echo_input: true,
        }
    }

    pub const fn with_poll_interval(mut self, poll_interval_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}
