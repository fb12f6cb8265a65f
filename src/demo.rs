//! Demo menu: a main menu with two sub-menus and a handful of sample
//! actions.
//!
//! ```text
//!    Main Menu                 Sub-Menu Alpha            Sub-Menu Beta
//! 0. Exit This Menu         0. Exit This Menu         0. Exit This Menu
//! 1. Memory Report          1. Change A Setting       1. Enter a Sample Value
//! 2. Sample Action I        2. Enter a String         2. Inactive Item
//! 3. Sub-Menu Alpha  ───▶   3. Memory Report          3. Memory Report
//! 4. Sub-Menu Beta   ───────────────────────────▶
//! 5. Sample Action II
//! ```
//!
//! "Enter a Sample Value" and "Inactive Item" have no registered
//! behavior and answer `???`.

use core::fmt::Write;

use crate::config::ENTRY_FIELD_SIZE;
use crate::menu::{
    ActionContext, ActionDescriptor, ActionId, Behavior, LevelId, LineBuffer, Menu, MenuRow,
    MenuTable, StringCatalog, StringRef,
};

// --- Levels ---

pub const MENU_MAIN: LevelId = LevelId::MAIN;
pub const MENU_ALPHA: LevelId = LevelId(2);
pub const MENU_BETA: LevelId = LevelId(4);

// --- Actions ---

pub const ACTION_NONE: ActionId = ActionId::NONE;
pub const ACTION_EXIT: ActionId = ActionId::EXIT;
pub const ACTION_MEMORY_REPORT: ActionId = ActionId(2);
pub const ACTION_SAMPLE_I: ActionId = ActionId(3);
pub const ACTION_SUBMENU_ALPHA: ActionId = ActionId(4);
pub const ACTION_SUBMENU_BETA: ActionId = ActionId(5);
pub const ACTION_SAMPLE_II: ActionId = ActionId(6);
pub const ACTION_CHG_SETTING: ActionId = ActionId(7);
pub const ACTION_STRING_ENTRY: ActionId = ActionId(8);
pub const ACTION_SAMPLE_VALUE: ActionId = ActionId(9);
pub const ACTION_INACTIVE: ActionId = ActionId(10);
pub const ACTION_EXIT_ALPHA_MENU: ActionId = ActionId(11);
pub const ACTION_EXIT_BETA_MENU: ActionId = ActionId(12);

// --- Strings ---

pub const STI_EXIT: StringRef = StringRef(0);
pub const STI_MAIN_TITLE: StringRef = StringRef(1);
pub const STI_MEMORY_REPORT: StringRef = StringRef(2);
pub const STI_SAMPLE_I: StringRef = StringRef(3);
pub const STI_SUBMENU_ALPHA: StringRef = StringRef(4);
pub const STI_SUBMENU_BETA: StringRef = StringRef(5);
pub const STI_SAMPLE_II: StringRef = StringRef(6);
pub const STI_ALPHA_TITLE: StringRef = StringRef(7);
pub const STI_CHG_SETTING: StringRef = StringRef(8);
pub const STI_STRING_ENTRY: StringRef = StringRef(9);
pub const STI_BETA_TITLE: StringRef = StringRef(10);
pub const STI_SAMPLE_VALUE: StringRef = StringRef(11);
pub const STI_INACTIVE: StringRef = StringRef(12);
pub const STI_MENU_PROMPT: StringRef = StringRef(13);
pub const STI_NEW_VALUE_PROMPT: StringRef = StringRef(14);
pub const STI_STRING_PROMPT: StringRef = StringRef(15);

pub static STRINGS: &[&str] = &[
    "Exit This Menu",
    "Main Menu",
    "Memory Report",
    "Sample Main Menu Action I",
    "Sub-Menu Alpha",
    "Sub-Menu Beta",
    "Sample Main Menu Action II",
    "Sub-Menu Alpha",
    "Change A Setting",
    "Enter a String",
    "Sub-Menu Beta",
    "Enter a Sample Value",
    "Inactive Item",
    "Select from choices:",
    "New Value [",
    "Enter a string:",
];

pub static ROWS: &[MenuRow] = &[
    MenuRow::new(MENU_MAIN, STI_MAIN_TITLE, ACTION_NONE),
    MenuRow::new(MENU_MAIN, STI_EXIT, ACTION_EXIT),
    MenuRow::new(MENU_MAIN, STI_MEMORY_REPORT, ACTION_MEMORY_REPORT),
    MenuRow::new(MENU_MAIN, STI_SAMPLE_I, ACTION_SAMPLE_I),
    MenuRow::new(MENU_MAIN, STI_SUBMENU_ALPHA, ACTION_SUBMENU_ALPHA),
    MenuRow::new(MENU_MAIN, STI_SUBMENU_BETA, ACTION_SUBMENU_BETA),
    MenuRow::new(MENU_MAIN, STI_SAMPLE_II, ACTION_SAMPLE_II),
    MenuRow::new(MENU_ALPHA, STI_ALPHA_TITLE, ACTION_NONE),
    MenuRow::new(MENU_ALPHA, STI_EXIT, ACTION_EXIT_ALPHA_MENU),
    MenuRow::new(MENU_ALPHA, STI_CHG_SETTING, ACTION_CHG_SETTING),
    MenuRow::new(MENU_ALPHA, STI_STRING_ENTRY, ACTION_STRING_ENTRY),
    MenuRow::new(MENU_ALPHA, STI_MEMORY_REPORT, ACTION_MEMORY_REPORT),
    MenuRow::new(MENU_BETA, STI_BETA_TITLE, ACTION_NONE),
    MenuRow::new(MENU_BETA, STI_EXIT, ACTION_EXIT_BETA_MENU),
    MenuRow::new(MENU_BETA, STI_SAMPLE_VALUE, ACTION_SAMPLE_VALUE),
    MenuRow::new(MENU_BETA, STI_INACTIVE, ACTION_INACTIVE),
    MenuRow::new(MENU_BETA, STI_MEMORY_REPORT, ACTION_MEMORY_REPORT),
];

/// All registered actions
pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor::new(ACTION_EXIT, "exit", Behavior::Exit),
    ActionDescriptor::new(ACTION_MEMORY_REPORT, "memory-report", Behavior::Invoke(memory_report)),
    ActionDescriptor::new(ACTION_SAMPLE_I, "sample-i", Behavior::Invoke(sample_i)),
    ActionDescriptor::new(ACTION_SUBMENU_ALPHA, "submenu-alpha", Behavior::Enter(MENU_ALPHA)),
    ActionDescriptor::new(ACTION_SUBMENU_BETA, "submenu-beta", Behavior::Enter(MENU_BETA)),
    ActionDescriptor::new(ACTION_SAMPLE_II, "sample-ii", Behavior::Invoke(sample_ii)),
    ActionDescriptor::new(ACTION_CHG_SETTING, "change-setting", Behavior::Invoke(change_setting)),
    ActionDescriptor::new(ACTION_STRING_ENTRY, "string-entry", Behavior::Invoke(string_entry)),
    ActionDescriptor::new(ACTION_EXIT_ALPHA_MENU, "exit-alpha", Behavior::ExitTo(MENU_MAIN)),
    ActionDescriptor::new(ACTION_EXIT_BETA_MENU, "exit-beta", Behavior::ExitTo(MENU_MAIN)),
];

pub static CATALOG: StringCatalog<'static> = StringCatalog::new(STRINGS);
pub static TABLE: MenuTable<'static> = MenuTable::new(ROWS);

/// The demo menu, ready for a [`Session`](crate::menu::Session)
pub fn menu() -> Menu<'static> {
    Menu {
        table: TABLE,
        catalog: CATALOG,
        actions: ACTIONS,
        prompt: CATALOG.get(STI_MENU_PROMPT),
    }
}

// --- Action Implementations ---

fn memory_report(ctx: &mut ActionContext<'_, '_>) {
    let free = ctx.system.free_memory();
    let _ = write!(ctx.terminal, "Memory Available: {}\r\n", free);
}

fn sample_i(ctx: &mut ActionContext<'_, '_>) {
    ctx.terminal.print("Sample Menu Action I\r\n");
}

fn sample_ii(ctx: &mut ActionContext<'_, '_>) {
    ctx.terminal.print("Presenting Sample Menu Action II\r\n");
}

fn change_setting(ctx: &mut ActionContext<'_, '_>) {
    let mut prompt = LineBuffer::<ENTRY_FIELD_SIZE>::new();
    let _ = write!(prompt, "{}{}]", CATALOG.get(STI_NEW_VALUE_PROMPT), ctx.setting.as_str());

    let response = ctx.terminal.read_line(prompt.as_str(), ENTRY_FIELD_SIZE);
    // Empty answer keeps the current value
    if !response.is_empty() {
        ctx.setting.set(response.as_str());
    }
}

fn string_entry(ctx: &mut ActionContext<'_, '_>) {
    let response = ctx.terminal.read_line(CATALOG.get(STI_STRING_PROMPT), ENTRY_FIELD_SIZE);
    let _ = write!(ctx.terminal, "Thanks for the string {}\r\n", response.as_str());
}
