//! Action registry and dispatch

use heapless::String;
use log::{debug, warn};

use super::session::SessionState;
use super::table::{ActionId, LevelId};
use super::terminal::Terminal;
use super::MenuError;
use crate::config::ENTRY_FIELD_SIZE;

/// Platform facts the built-in collaborators report
pub trait SystemInfo {
    /// Free heap, in bytes
    fn free_memory(&self) -> usize;
}

/// User-editable value owned by the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setting {
    value: String<ENTRY_FIELD_SIZE>,
}

impl Setting {
    pub const fn new() -> Self {
        Self { value: String::new() }
    }

    /// Replace the value, truncated to [`ENTRY_FIELD_SIZE`] bytes
    pub fn set(&mut self, s: &str) {
        self.value.clear();
        for c in s.chars() {
            if self.value.push(c).is_err() {
                break;
            }
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// What a collaborator gets to work with
pub struct ActionContext<'t, 'a> {
    /// Output, and re-entrant prompts
    pub terminal: &'t mut Terminal<'a>,
    pub setting: &'t mut Setting,
    pub system: &'t dyn SystemInfo,
}

/// Collaborator entry point
pub type ActionHandler = fn(&mut ActionContext<'_, '_>);

/// What selecting an action does
#[derive(Clone, Copy)]
pub enum Behavior {
    /// Leave the active level: back to MAIN, or end the session at MAIN
    Exit,
    /// Leave the active level for a named one
    ExitTo(LevelId),
    /// Open a sub-menu
    Enter(LevelId),
    /// Run a collaborator, then redisplay the active level
    Invoke(ActionHandler),
}

/// Action descriptor
#[derive(Clone, Copy)]
pub struct ActionDescriptor {
    pub id: ActionId,
    pub name: &'static str,
    pub behavior: Behavior,
}

impl ActionDescriptor {
    pub const fn new(id: ActionId, name: &'static str, behavior: Behavior) -> Self {
        Self { id, name, behavior }
    }
}

/// Find the descriptor registered for `id`
pub fn find_action(actions: &[ActionDescriptor], id: ActionId) -> Option<&ActionDescriptor> {
    actions.iter().find(|a| a.id == id)
}

/// Perform the behavior registered for `id`.
///
/// `ActionId::NONE` is always a no-op. An id with no descriptor is
/// echoed as `???` and returned as `UnhandledAction`; the session
/// carries on regardless.
pub fn dispatch(
    actions: &[ActionDescriptor],
    id: ActionId,
    state: &mut SessionState,
    ctx: &mut ActionContext<'_, '_>,
) -> Result<(), MenuError> {
    if id.is_none() {
        return Ok(());
    }

    let Some(action) = find_action(actions, id) else {
        warn!("unhandled action {} at level {}", id.0, state.active_level().0);
        ctx.terminal.print("???");
        ctx.terminal.newline();
        return Err(MenuError::UnhandledAction(id));
    };

    debug!("dispatch {} ({})", action.name, id.0);
    match action.behavior {
        Behavior::Exit => state.exit(),
        Behavior::ExitTo(level) | Behavior::Enter(level) => state.enter(level),
        Behavior::Invoke(handler) => handler(ctx),
    }
    Ok(())
}
