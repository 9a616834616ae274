// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Migrate | Update | FetchSvnAuthors | Options | Configs | Version
//! Ctrl-C --> CancellationToken --> running child is killed
//! ```

use std::process::ExitCode;

use svn2git::cli::global::GlobalOptions;
use svn2git::cli::{self, Command};
use svn2git::cmd::authors::run_fetch_authors_command;
use svn2git::cmd::config::{run_configs_command, run_options_command};
use svn2git::cmd::migrate::run_migrate_command;
use svn2git::cmd::update::run_update_command;
use svn2git::config::{Config, ConfigLoader, GlobalConfig};
use svn2git::logging::init_logging;
use svn2git::logging::LogConfig;
use tokio_util::sync::CancellationToken;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(loader.sources());
            return ExitCode::SUCCESS;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(_) => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let token = CancellationToken::new();
    spawn_interrupt_handler(token.clone());

    dispatch_command(&cli, &config, token).await
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_file_format(global.log_format)
        .with_show_timestamps(global.show_timestamps)
        .build()
}

/// Cancels `token` on the first Ctrl-C so the running child is killed.
fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, stopping the running command");
            token.cancel();
        }
    });
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, token: CancellationToken) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Migrate(args)) => run_migrate_command(args, config, token).await,
        Some(Command::Update(args)) => run_update_command(args, config, token).await,
        Some(Command::FetchSvnAuthors(args)) => {
            run_fetch_authors_command(args, config, token).await
        }
        Some(Command::Version | Command::Configs) | None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    global
        .configs
        .iter()
        .fold(ConfigLoader::new().local("."), |loader, path| loader.file(path))
        .env()
}

fn load_config(global: &GlobalOptions) -> svn2git::error::Result<Config> {
    build_config_loader(global)
        .overrides(global.to_config_overrides())?
        .build()
}
