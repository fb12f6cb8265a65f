//! Menu session: render, prompt, read, dispatch, repeat
//!
//! The session owns the only mutable state: the active level, whether it
//! is still running, and the user's setting. It ends when the generic
//! exit is chosen on the main level.

use log::{debug, info, warn};

use super::buffer::LineBuffer;
use super::dispatch::{dispatch, ActionContext, ActionDescriptor, Setting, SystemInfo};
use super::render::{render, ItemMap, MenuFormat, TerminalFormat};
use super::table::{ActionId, LevelId, MenuTable, StringCatalog};
use super::terminal::Terminal;
use super::MenuError;
use crate::config::{HTML_BUFFER_SIZE, MENU_BUFFER_SIZE};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Everything that defines a menu, all of it constant
#[derive(Clone, Copy)]
pub struct Menu<'a> {
    pub table: MenuTable<'a>,
    pub catalog: StringCatalog<'a>,
    pub actions: &'a [ActionDescriptor],
    /// Shown before every digit prompt
    pub prompt: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

/// Navigation state, changed only by dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    active_level: LevelId,
    status: Status,
}

impl SessionState {
    pub const fn new() -> Self {
        Self {
            active_level: LevelId::MAIN,
            status: Status::Running,
        }
    }

    pub fn active_level(&self) -> LevelId {
        self.active_level
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Make `level` the active level
    pub fn enter(&mut self, level: LevelId) {
        self.active_level = level;
    }

    /// Leave the active level. Sub-menus return to MAIN, MAIN terminates.
    pub fn exit(&mut self) {
        if self.active_level == LevelId::MAIN {
            self.status = Status::Terminated;
        } else {
            self.active_level = LevelId::MAIN;
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// One interactive menu session
pub struct Session<'m> {
    menu: Menu<'m>,
    format: &'m dyn MenuFormat,
    state: SessionState,
    setting: Setting,
}

impl<'m> Session<'m> {
    pub fn new(menu: Menu<'m>) -> Self {
        Self {
            menu,
            format: &TerminalFormat,
            state: SessionState::new(),
            setting: Setting::new(),
        }
    }

    /// Render pages with another format
    pub fn with_format(mut self, format: &'m dyn MenuFormat) -> Self {
        self.format = format;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn setting(&self) -> &Setting {
        &self.setting
    }

    pub fn setting_mut(&mut self) -> &mut Setting {
        &mut self.setting
    }

    /// Dispatch `id` as if it had been selected
    pub fn perform(
        &mut self,
        id: ActionId,
        terminal: &mut Terminal<'_>,
        system: &dyn SystemInfo,
    ) -> Result<(), MenuError> {
        let mut ctx = ActionContext {
            terminal,
            setting: &mut self.setting,
            system,
        };
        dispatch(self.menu.actions, id, &mut self.state, &mut ctx)
    }

    /// Render `level` into an `N`-byte page and write it out
    fn show_page<const N: usize>(&self, level: LevelId, terminal: &mut Terminal<'_>) -> ItemMap {
        let mut page = LineBuffer::<N>::new();
        let items = render(&self.menu.table, &self.menu.catalog, level, self.format, &mut page);

        terminal.newline();
        terminal.print(page.as_str());
        items
    }

    /// Show the active level, read one choice and act on it.
    ///
    /// A digit with no item on the page counts as an unknown action.
    pub fn step(&mut self, terminal: &mut Terminal<'_>, system: &dyn SystemInfo) -> Result<(), MenuError> {
        let level = self.state.active_level();
        // Pages larger than HTML_BUFFER_SIZE are truncated
        let items = if self.format.page_size() > MENU_BUFFER_SIZE {
            self.show_page::<HTML_BUFFER_SIZE>(level, terminal)
        } else {
            self.show_page::<MENU_BUFFER_SIZE>(level, terminal)
        };

        let max_choice = terminal.config().max_choice;
        let choice = terminal.read_single_digit_choice(self.menu.prompt, max_choice);
        let id = items.action_for(choice).unwrap_or(ActionId::UNASSIGNED);
        debug!("level {} choice {} -> action {}", level.0, choice, id.0);

        self.perform(id, terminal, system)
    }

    /// Run until the main menu is exited
    pub fn run(&mut self, terminal: &mut Terminal<'_>, system: &dyn SystemInfo) {
        if let Err(e) = self.menu.table.validate(&self.menu.catalog) {
            warn!("menu table: {}", e);
        }

        info!("menu session started");
        terminal.print("\r\n");
        terminal.print(VERSION);
        terminal.newline();

        while self.state.is_running() {
            if let Err(e) = self.step(terminal, system) {
                debug!("{}", e);
            }
        }
        info!("menu session ended");
    }
}
