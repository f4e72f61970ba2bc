//! Main window model.
//!
//! The window is described as data so the frontend can render it and the
//! menu behaviour can be exercised without a display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const TITLE: &str = "PentaLedger Desktop";
pub const WELCOME_STATUS: &str = "Welcome to PentaLedger!";
pub const HELLO_MESSAGE: &str = "Hello from PentaLedger!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuAction {
    Hello,
    Exit,
    About,
}

impl MenuAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Exit => "exit",
            Self::About => "about",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown menu action: {0}")]
pub struct UnknownMenuAction(pub String);

impl FromStr for MenuAction {
    type Err = UnknownMenuAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "exit" => Ok(Self::Exit),
            "about" => Ok(Self::About),
            _ => Err(UnknownMenuAction(s.to_string())),
        }
    }
}

/// What the frontend should do after a menu item fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShellEffect {
    Log { message: String },
    Close,
    MessageBox { title: String, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Item {
        action: MenuAction,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        accelerator: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        help: Option<String>,
    },
    Separator,
}

impl MenuEntry {
    fn item(action: MenuAction, label: &str) -> Self {
        Self::Item {
            action,
            label: label.to_string(),
            accelerator: None,
            help: None,
        }
    }

    pub fn action(&self) -> Option<MenuAction> {
        match self {
            Self::Item { action, .. } => Some(*action),
            Self::Separator => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainFrame {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub status_text: String,
    pub menus: Vec<Menu>,
}

impl Default for MainFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl MainFrame {
    pub fn new() -> Self {
        let file = Menu {
            label: "File".to_string(),
            entries: vec![
                MenuEntry::Item {
                    action: MenuAction::Hello,
                    label: "Hello...".to_string(),
                    accelerator: Some("Ctrl-H".to_string()),
                    help: Some("Say hello in the log".to_string()),
                },
                MenuEntry::Separator,
                MenuEntry::item(MenuAction::Exit, "Exit"),
            ],
        };
        let help = Menu {
            label: "Help".to_string(),
            entries: vec![MenuEntry::item(MenuAction::About, "About")],
        };

        Self {
            title: TITLE.to_string(),
            width: 800,
            height: 600,
            status_text: WELCOME_STATUS.to_string(),
            menus: vec![file, help],
        }
    }

    pub fn actions(&self) -> impl Iterator<Item = MenuAction> + '_ {
        self.menus
            .iter()
            .flat_map(|m| m.entries.iter())
            .filter_map(MenuEntry::action)
    }

    pub fn handle(&self, action: MenuAction) -> ShellEffect {
        tracing::debug!(%action, "menu action");
        match action {
            MenuAction::Hello => ShellEffect::Log {
                message: HELLO_MESSAGE.to_string(),
            },
            MenuAction::Exit => ShellEffect::Close,
            MenuAction::About => ShellEffect::MessageBox {
                title: "About PentaLedger".to_string(),
                body: format!(
                    "PentaLedger Desktop Application\nVersion {}",
                    env!("CARGO_PKG_VERSION")
                ),
            },
        }
    }
}
