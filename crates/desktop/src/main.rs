//! Tauri application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
use pentaledger_desktop::commands::*;

#[cfg(feature = "tauri")]
fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use pentaledger_desktop::AppState;
    use pentaledger_infra::{DbConfig, PgStore};

    pentaledger_observability::init();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let store = runtime.block_on(async {
        let config = DbConfig::from_env()?;
        let store = PgStore::connect(&config)
            .await
            .context("Failed to connect to database")?;
        store
            .ensure_schema()
            .await
            .context("Failed to prepare database schema")?;
        anyhow::Ok(store)
    })?;
    tauri::async_runtime::set(runtime.handle().clone());

    let state = Arc::new(AppState::postgres(store));
    tracing::info!(title = %state.frame().title, "starting desktop shell");

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            main_frame,
            menu_action,
            list_companies,
            list_gambling_logs,
            gambling_summary,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")?;

    Ok(())
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("This binary requires the 'tauri' feature to be enabled.");
    eprintln!("Build with: cargo build -p pentaledger-desktop --features tauri");
    std::process::exit(1);
}
