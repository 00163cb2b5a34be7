// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! sftpgo-netauth - SFTPGo external authentication hook backed by NetAuth
//!
//! SFTPGo runs this binary once per login attempt with the attempt described
//! in environment variables, and reads a JSON user document from stdout.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sftpgo_netauth::config::{generate_config_template, load_config};
use sftpgo_netauth::hook::{authorize, Credentials, HookResponse};
use sftpgo_netauth::identity::NetAuthClient;
use sftpgo_netauth::utils::logging;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// SFTPGo external authentication hook backed by a NetAuth server
#[derive(Parser, Debug)]
#[command(name = "sftpgo-netauth")]
#[command(version)]
#[command(about = "SFTPGo external authentication hook backed by a NetAuth server", long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE", env = "NETAUTH_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Authorize the login described by the SFTPGO_AUTHD_* environment (default)
    Auth,

    /// Check the configuration file for errors
    CheckConfig,

    /// Generate a configuration file template
    GenConfig {
        /// Output path (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    match cli.command {
        None | Some(Commands::Auth) => run_hook(&cli).await,
        Some(Commands::CheckConfig) => report(check_config(&cli)),
        Some(Commands::GenConfig { ref output }) => report(gen_config(output.as_ref())),
    }
}

/// Run one authorization and print the hook response.
///
/// A denial is a normal outcome and exits 0. Only configuration and client
/// setup failures exit 1, after printing a denial so SFTPGo still gets a
/// well-formed answer.
async fn run_hook(cli: &Cli) -> ExitCode {
    let client = match build_client(cli) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let _ = HookResponse::deny().write_to(io::stdout().lock());
            return ExitCode::FAILURE;
        }
    };

    let response = match Credentials::from_env() {
        Ok(credentials) => HookResponse::from(&authorize(&client, credentials).await),
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable login parameters, denying");
            HookResponse::deny()
        }
    };

    match response.write_to(io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: failed to write hook response: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> Result<NetAuthClient> {
    let config = load_config(cli.config.as_deref()).context("Error reading config")?;
    NetAuthClient::new(&config).context("Error during client initialization")
}

/// Check configuration file
fn check_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    eprintln!("Configuration is valid.");
    eprintln!();
    eprintln!("  Server:          {}:{}", config.core.server, config.core.port);
    eprintln!("  Service name:    {}", config.core.service_name);
    match (&config.tls.certificate, config.tls.insecure) {
        (_, true) => eprintln!("  TLS:             disabled"),
        (Some(cert), false) => eprintln!("  TLS:             CA {}", cert.display()),
        (None, false) => eprintln!("  TLS:             system trust store"),
    }
    eprintln!(
        "  Timeouts:        connect {}s, request {}s",
        config.timeouts.connect_secs, config.timeouts.request_secs
    );

    Ok(())
}

/// Generate configuration template
fn gen_config(output: Option<&PathBuf>) -> Result<()> {
    let template = generate_config_template();

    if let Some(path) = output {
        fs::write(path, &template)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Configuration template written to {}", path.display());
    } else {
        print!("{template}");
    }

    Ok(())
}

fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_hook() {
        let cli = Cli::try_parse_from(["sftpgo-netauth"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["sftpgo-netauth", "check-config", "-vv", "--config", "/x.toml"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::CheckConfig)));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/x.toml")));
    }
}
