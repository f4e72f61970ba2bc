//! `pentaledger` command-line interface.

mod args;
mod commands;
mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use pentaledger_infra::{DbConfig, PgStore};

use args::{Cli, Command};

fn main() -> ExitCode {
    pentaledger_observability::init_cli();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.version {
        writeln!(out, "{}", render::version_line())?;
        return Ok(());
    }

    let Some(command) = cli.command else {
        let help = Cli::command().render_help().to_string();
        write!(out, "{}", render::welcome(&help))?;
        return Ok(());
    };

    match command {
        Command::Tax(cmd) => commands::tax(cmd, &mut out),
        Command::Mileage(cmd) => commands::mileage(cmd, &mut out),
        Command::Fuel(cmd) => commands::fuel(cmd, &mut out),
        Command::Company(cmd) => {
            let (runtime, store) = connect()?;
            runtime.block_on(commands::company(cmd, &store, &mut out))
        }
        Command::Gambling(cmd) => {
            let (runtime, store) = connect()?;
            runtime.block_on(commands::gambling(cmd, &store, &mut out))
        }
    }
}

/// Postgres store from `DATABASE_URL`, with the schema in place.
fn connect() -> anyhow::Result<(tokio::runtime::Runtime, PgStore)> {
    let config = DbConfig::from_env().context("Error")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Error starting async runtime")?;

    let store = runtime.block_on(async {
        let store = PgStore::connect(&config)
            .await
            .context("Failed to connect to database")?;
        store
            .ensure_schema()
            .await
            .context("Failed to prepare database schema")?;
        anyhow::Ok(store)
    })?;

    Ok((runtime, store))
}
