//! Tauri commands for frontend integration.

use std::sync::Arc;

use pentaledger_companies::Company;
use pentaledger_gambling::GamblingLog;
use tauri::State;

use crate::shell::{MainFrame, ShellEffect};
use crate::state::{AppState, DiaryOverview};

/// The window description, for the frontend to render its menus.
#[tauri::command]
pub fn main_frame(state: State<'_, Arc<AppState>>) -> MainFrame {
    state.frame().clone()
}

#[tauri::command]
pub fn menu_action(state: State<'_, Arc<AppState>>, action: String) -> Result<ShellEffect, String> {
    let effect = state.menu_action(&action).map_err(|e| e.to_string())?;
    if let ShellEffect::Log { message } = &effect {
        tracing::info!("{message}");
    }
    Ok(effect)
}

#[tauri::command]
pub async fn list_companies(state: State<'_, Arc<AppState>>) -> Result<Vec<Company>, String> {
    state.list_companies().await.map_err(|e| {
        tracing::error!(error = %e, "listing companies failed");
        e.to_string()
    })
}

#[tauri::command]
pub async fn list_gambling_logs(
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<GamblingLog>, String> {
    state.list_gambling_logs().await.map_err(|e| {
        tracing::error!(error = %e, "listing gambling logs failed");
        e.to_string()
    })
}

#[tauri::command]
pub async fn gambling_summary(state: State<'_, Arc<AppState>>) -> Result<DiaryOverview, String> {
    state.gambling_summary().await.map_err(|e| {
        tracing::error!(error = %e, "summarizing gambling logs failed");
        e.to_string()
    })
}
