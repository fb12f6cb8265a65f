//! Menu table and string catalog
//!
//! Both are build-time constant data. A menu level is the set of rows
//! sharing a `LevelId`; its first row is the title (`ActionId::NONE`),
//! the rest are selectable items in table order. Rows of one level do
//! not have to be adjacent.

use super::buffer::LineBuffer;
use super::error::MenuError;
use crate::config::MAX_MENU_ITEMS;

/// Identifies one menu level (screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelId(pub u8);

impl LevelId {
    /// Root level. Exiting it ends the session.
    pub const MAIN: LevelId = LevelId(1);
}

/// Identifies the behavior bound to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u8);

impl ActionId {
    /// Title rows. Never numbered, dispatching it does nothing.
    pub const NONE: ActionId = ActionId(0);
    /// Leave the active level.
    pub const EXIT: ActionId = ActionId(1);
    /// Stands in for a digit with no item on the page. Never registered.
    pub const UNASSIGNED: ActionId = ActionId(u8::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Index into a [`StringCatalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRef(pub u8);

/// One table record: a title or a selectable item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow {
    pub level: LevelId,
    pub text: StringRef,
    pub action: ActionId,
}

impl MenuRow {
    pub const fn new(level: LevelId, text: StringRef, action: ActionId) -> Self {
        Self { level, text, action }
    }

    pub fn is_title(&self) -> bool {
        self.action.is_none()
    }
}

/// Immutable display strings addressed by [`StringRef`]
#[derive(Debug, Clone, Copy)]
pub struct StringCatalog<'a> {
    strings: &'a [&'a str],
}

impl<'a> StringCatalog<'a> {
    pub const fn new(strings: &'a [&'a str]) -> Self {
        Self { strings }
    }

    /// Resolve a reference.
    ///
    /// An out-of-range reference is a table authoring error; it resolves
    /// to an empty string here and is reported by [`MenuTable::validate`].
    pub fn get(&self, r: StringRef) -> &'a str {
        self.strings.get(r.0 as usize).copied().unwrap_or("")
    }

    /// Copy a string into `buf`, truncated to its capacity
    pub fn lookup<const N: usize>(&self, r: StringRef, buf: &mut LineBuffer<N>) {
        buf.set(self.get(r));
    }

    pub fn contains(&self, r: StringRef) -> bool {
        (r.0 as usize) < self.strings.len()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Flat, read-only table of menu rows
#[derive(Debug, Clone, Copy)]
pub struct MenuTable<'a> {
    rows: &'a [MenuRow],
}

impl<'a> MenuTable<'a> {
    pub const fn new(rows: &'a [MenuRow]) -> Self {
        Self { rows }
    }

    /// Every row, in table order
    pub fn rows(&self) -> &'a [MenuRow] {
        self.rows
    }

    /// Rows of one level, in table order
    pub fn level_rows(&self, level: LevelId) -> impl Iterator<Item = &'a MenuRow> + 'a {
        let rows: &'a [MenuRow] = self.rows;
        rows.iter().filter(move |row| row.level == level)
    }

    pub fn has_level(&self, level: LevelId) -> bool {
        self.level_rows(level).next().is_some()
    }

    /// Title row of a level
    pub fn title_of(&self, level: LevelId) -> Option<&'a MenuRow> {
        self.level_rows(level).find(|row| row.is_title())
    }

    /// Number of selectable rows in a level
    pub fn item_count(&self, level: LevelId) -> usize {
        self.level_rows(level).filter(|row| !row.is_title()).count()
    }

    /// Check the authoring rules: one title per level, placed first, at
    /// most [`MAX_MENU_ITEMS`] items, every string reference resolvable.
    pub fn validate(&self, catalog: &StringCatalog<'_>) -> Result<(), MenuError> {
        for (idx, row) in self.rows.iter().enumerate() {
            if !catalog.contains(row.text) {
                return Err(MenuError::BadStringRef(row.text));
            }

            // Check each level once, at its first row
            if self.rows[..idx].iter().any(|r| r.level == row.level) {
                continue;
            }

            let titles = self.level_rows(row.level).filter(|r| r.is_title()).count();
            match titles {
                0 => return Err(MenuError::MissingTitle(row.level)),
                1 => {}
                _ => return Err(MenuError::DuplicateTitle(row.level)),
            }
            if !row.is_title() {
                return Err(MenuError::TitleNotFirst(row.level));
            }
            if self.item_count(row.level) > MAX_MENU_ITEMS {
                return Err(MenuError::TooManyItems(row.level));
            }
        }
        Ok(())
    }
}
