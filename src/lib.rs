//! # serial-menu
//!
//! Multi-level text menus for small microcontrollers, driven by a
//! constant table and a single-digit choice typed over a serial line.
//!
//! ## Architecture
//!
//! ```text
//! MenuTable + StringCatalog ──▶ render ──▶ page + ItemMap
//!                                              │
//! SerialPort ◀──▶ Terminal ── digit ──▶ ItemMap ──▶ dispatch ──▶ handler
//! ```
//!
//! - Tables and strings are `static` data (flash on the target)
//! - Item numbers are assigned while rendering and only valid for that page
//! - All mutable state lives in one [`Session`]

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod demo;
pub mod menu;

pub use config::MenuConfig;
pub use menu::{ActionId, LevelId, Menu, MenuError, MenuRow, SerialPort, Session, SystemInfo, Terminal};
