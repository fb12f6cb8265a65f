//! Table-driven serial menus
//!
//! Single-threaded and blocking, like the terminal it talks to.
//! Zero heap allocation - every buffer is a fixed-size local.

pub mod buffer;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod session;
pub mod table;
pub mod terminal;

pub use buffer::LineBuffer;
pub use dispatch::{dispatch, ActionContext, ActionDescriptor, ActionHandler, Behavior, Setting, SystemInfo};
pub use error::MenuError;
pub use render::{render, HtmlFormat, ItemMap, MenuFormat, TerminalFormat};
pub use session::{Menu, Session, SessionState, Status, VERSION};
pub use table::{ActionId, LevelId, MenuRow, MenuTable, StringCatalog, StringRef};
pub use terminal::{Entry, SerialPort, Terminal, INVALID_CHOICE_MESSAGE};
