//! passvault - personal password vault
//!
//! Runs the credential REST service or the terminal vault that talks to it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use passvault_lib::config::{config_path, VaultConfig};
use passvault_lib::observability::{init_tracing, LogTarget};
use passvault_lib::vault::generate_password;

#[derive(Parser)]
#[command(name = "passvault")]
#[command(about = "Personal password vault - REST service and terminal client")]
#[command(version)]
#[command(after_help = r#"CONFIGURATION:
    MONGODB_URI                 MongoDB connection string
    PASSVAULT_DATABASE          database used when the URI names none
    PORT                        port the service listens on (default 5000)
    PASSVAULT_API_URL           base API URL for the UI (default http://localhost:5000/api)
    PASSVAULT_MASTER_PASSWORD   master password for revealing stored passwords

    Values may also come from a .env file or ~/.passvault/config.json.

EXAMPLES:
    passvault serve                     # Serve against MongoDB
    passvault serve --in-memory         # Serve without a database
    passvault ui                        # Open the vault
    passvault generate                  # Print a random password
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the credential REST service
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Keep records in memory instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },

    /// Open the terminal vault
    Ui {
        /// Base API URL (overrides PASSVAULT_API_URL)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Print a generated password
    Generate,

    /// Show the effective configuration
    Config {
        /// Write it to the per-user config file
        #[arg(long)]
        save: bool,
    },
}

impl Commands {
    /// Log destination for the command; set up before the config is read
    fn log_target(&self) -> LogTarget {
        match self {
            Commands::Serve { .. } => LogTarget::Stdout,
            Commands::Ui { .. } => LogTarget::File,
            Commands::Generate | Commands::Config { .. } => LogTarget::Stderr,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.log_target());
    let mut config = VaultConfig::load();

    match cli.command {
        Commands::Serve { port, in_memory } => {
            if let Some(port) = port {
                config.port = port;
            }
            passvault_lib::run_server(&config, in_memory)
                .await
                .context("server failed")?;
        }
        Commands::Ui { api_url } => {
            if let Some(api_url) = api_url {
                config.api_url = api_url;
            }
            passvault_lib::run_ui(&config).await.context("vault UI failed")?;
        }
        Commands::Generate => {
            println!("{}", generate_password());
        }
        Commands::Config { save } => {
            let mut shown = serde_json::to_value(&config)?;
            shown["master_password_set"] = serde_json::Value::Bool(config.has_master_password());
            println!("{}", serde_json::to_string_pretty(&shown)?);

            if save {
                let path = config_path();
                config
                    .save_to_file(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Saved to {}", path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_command_logs_somewhere_other_than_its_output() {
        let cli = Cli::parse_from(["passvault", "serve", "--in-memory", "--port", "5999"]);
        assert_eq!(cli.command.log_target(), LogTarget::Stdout);

        let cli = Cli::parse_from(["passvault", "ui"]);
        assert_eq!(cli.command.log_target(), LogTarget::File);

        let cli = Cli::parse_from(["passvault", "config"]);
        assert_eq!(cli.command.log_target(), LogTarget::Stderr);
    }
}
