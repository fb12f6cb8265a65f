//! Menu page rendering
//!
//! Renders one level of a [`MenuTable`] and records which action each
//! displayed number selects.
//!
//! Page format (terminal):
//!
//! ```text
//!    Main Menu
//! 0.	Exit This Menu
//! 1.	Memory Report
//! ```

use core::fmt::Write;

use heapless::Vec;
use log::{debug, warn};

use super::buffer::LineBuffer;
use super::table::{ActionId, LevelId, MenuTable, StringCatalog};
use crate::config::{ENTRY_FIELD_SIZE, HTML_BUFFER_SIZE, MAX_MENU_ITEMS, MENU_BUFFER_SIZE};

/// Displayed item number to action, for the most recent render only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMap {
    actions: Vec<ActionId, MAX_MENU_ITEMS>,
}

impl ItemMap {
    pub const fn new() -> Self {
        Self { actions: Vec::new() }
    }

    /// Action bound to a typed digit
    pub fn action_for(&self, choice: u8) -> Option<ActionId> {
        self.actions.get(choice as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    fn push(&mut self, action: ActionId) -> bool {
        self.actions.push(action).is_ok()
    }
}

/// Line formatting strategy for a rendered page
pub trait MenuFormat {
    /// Unnumbered title line
    fn title(&self, out: &mut dyn Write, text: &str);
    /// Selectable line `number`
    fn item(&self, out: &mut dyn Write, number: usize, text: &str);

    /// Page capacity this format needs
    fn page_size(&self) -> usize {
        MENU_BUFFER_SIZE
    }
}

/// Plain text for a serial terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalFormat;

impl MenuFormat for TerminalFormat {
    fn title(&self, out: &mut dyn Write, text: &str) {
        let _ = write!(out, "   {}\r\n", text);
    }

    fn item(&self, out: &mut dyn Write, number: usize, text: &str) {
        let _ = write!(out, "{}.\t{}\r\n", number, text);
    }
}

/// Minimal HTML for serving the same menu as a web page
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl MenuFormat for HtmlFormat {
    fn title(&self, out: &mut dyn Write, text: &str) {
        let _ = write!(out, "<h3>{}</h3>\r\n", text);
    }

    fn item(&self, out: &mut dyn Write, number: usize, text: &str) {
        let _ = write!(out, "<a href=\"?choice={0}\">{0}. {1}</a><br>\r\n", number, text);
    }

    fn page_size(&self) -> usize {
        HTML_BUFFER_SIZE
    }
}

/// Render `level` into `out` and return its item map.
///
/// Titles are written unnumbered. Items are numbered densely from 0 in
/// table order. Output that does not fit `out` is truncated. Items cut
/// off by truncation, and items past [`MAX_MENU_ITEMS`], cannot be
/// selected.
pub fn render<const N: usize>(
    table: &MenuTable<'_>,
    catalog: &StringCatalog<'_>,
    level: LevelId,
    format: &dyn MenuFormat,
    out: &mut LineBuffer<N>,
) -> ItemMap {
    let mut map = ItemMap::new();
    let mut text = LineBuffer::<ENTRY_FIELD_SIZE>::new();
    let mut number = 0usize;

    out.clear();
    for row in table.level_rows(level) {
        catalog.lookup(row.text, &mut text);

        if row.is_title() {
            format.title(out, text.as_str());
            continue;
        }

        format.item(out, number, text.as_str());
        if out.is_truncated() || !map.push(row.action) {
            warn!("level {} item {} is not selectable", level.0, number);
        }
        number += 1;
    }

    if out.is_truncated() {
        warn!("menu page for level {} truncated at {} bytes", level.0, N);
    }
    debug!("rendered level {} with {} items", level.0, map.len());
    map
}
