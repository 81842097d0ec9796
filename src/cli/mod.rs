//! CLI module for democtl
//!
//! Provides the commands:
//! - `setup`: Interactive provider configuration wizard
//! - `run`: Launch and supervise the demo processes
//! - `doctor`: Environment diagnostics

use clap::{Parser, Subcommand};

pub mod doctor;
pub mod setup;

/// AI demo suite launcher
#[derive(Parser, Debug)]
#[command(name = "democtl")]
#[command(about = "Setup and launch supervisor for the AI demo suite")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive provider configuration wizard
    Setup,
    /// Launch all demos, or a single one by name
    Run {
        /// Demo to launch (resume, landing, intel); all when omitted
        demo: Option<String>,
    },
    /// Run environment diagnostics
    Doctor,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Setup) => setup::run().await,
        Some(Commands::Run { demo }) => run_demos(demo).await,
        Some(Commands::Doctor) => doctor::run().await,
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

async fn run_demos(demo: Option<String>) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let config = crate::config::ProviderConfig::load(root.join(crate::config::STORE_PATH))?;

    let selected: Vec<crate::demos::DemoSpec> = match demo {
        Some(name) => match crate::demos::find(&name) {
            Some(spec) => vec![*spec],
            None => {
                let known: Vec<&str> =
                    crate::demos::DEMOS.iter().map(|d| d.name).collect();
                anyhow::bail!("unknown demo '{name}' (expected one of: {})", known.join(", "));
            }
        },
        None => crate::demos::DEMOS.to_vec(),
    };

    crate::launcher::run(&root, &config, &selected).await?;
    Ok(())
}
