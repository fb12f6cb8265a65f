//! Menu error types

use super::table::{ActionId, LevelId, StringRef};

/// Menu error with code and message
///
/// Only `UnhandledAction` is raised while a session runs, and it is never
/// fatal. The remaining variants come from [`MenuTable::validate`].
///
/// [`MenuTable::validate`]: super::table::MenuTable::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// M01: Action id has no registered behavior
    UnhandledAction(ActionId),
    /// M02: Level has no title row
    MissingTitle(LevelId),
    /// M03: Level has more than one title row
    DuplicateTitle(LevelId),
    /// M04: Level's first row is not its title
    TitleNotFirst(LevelId),
    /// M05: Level has more items than a single digit can select
    TooManyItems(LevelId),
    /// M06: Row refers to a string outside the catalog
    BadStringRef(StringRef),
}

impl MenuError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnhandledAction(_) => "M01",
            Self::MissingTitle(_) => "M02",
            Self::DuplicateTitle(_) => "M03",
            Self::TitleNotFirst(_) => "M04",
            Self::TooManyItems(_) => "M05",
            Self::BadStringRef(_) => "M06",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnhandledAction(_) => "unhandled action",
            Self::MissingTitle(_) => "level has no title",
            Self::DuplicateTitle(_) => "level has two titles",
            Self::TitleNotFirst(_) => "title is not the first row",
            Self::TooManyItems(_) => "too many items",
            Self::BadStringRef(_) => "string index out of range",
        }
    }
}

impl core::fmt::Display for MenuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())?;
        match self {
            Self::UnhandledAction(id) => write!(f, " ({})", id.0),
            Self::MissingTitle(level)
            | Self::DuplicateTitle(level)
            | Self::TitleNotFirst(level)
            | Self::TooManyItems(level) => write!(f, " (level {})", level.0),
            Self::BadStringRef(r) => write!(f, " ({})", r.0),
        }
    }
}
