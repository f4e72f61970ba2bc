//! `pentaledger-desktop`
//!
//! Desktop shell: one window with File and Help menus, plus read views over
//! companies and the gambling diary. The window itself is rendered by Tauri
//! when the `tauri` feature is enabled; everything else is plain Rust.

pub mod shell;
pub mod state;

#[cfg(feature = "tauri")]
pub mod commands;

pub use shell::{MainFrame, Menu, MenuAction, MenuEntry, ShellEffect, UnknownMenuAction};
pub use state::{AppState, DesktopError, DiaryOverview};
