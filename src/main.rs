//! Repo Shuttle CLI
//!
//! Entry point for the `repo-shuttle` command-line tool. Only configuration
//! inspection lives here; sync runs are driven by the workflow engine.

use clap::{Parser, Subcommand};
use repo_shuttle::options::{GeneralOptions, OptionsBuilder, WorkflowOptions};
use repo_shuttle::FileSystem;
use serde_json::json;
use std::process;

#[derive(Parser)]
#[command(name = "repo-shuttle")]
#[command(about = "Multi-backend repository synchronization tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List option modules in build order
    Modules,

    /// Show the effective default configuration
    Config {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Modules => {
            let options = OptionsBuilder::new().build();
            for name in options.module_names() {
                println!("{name}");
            }
        }
        Commands::Config { human } => {
            if let Err(message) = show_config(human) {
                eprintln!("error: {message}");
                process::exit(2);
            }
        }
    }
}

fn show_config(human: bool) -> Result<(), String> {
    let options = OptionsBuilder::new().build();
    let general = options
        .get::<GeneralOptions>()
        .map_err(|e| e.to_string())?;
    let workflow = options
        .get::<WorkflowOptions>()
        .map_err(|e| e.to_string())?;

    if human {
        println!("modules:        {}", options.len());
        println!("filesystem:     {}", general.file_system().name());
        println!("verbose:        {}", general.is_verbose());
        println!("force:          {}", general.is_forced());
        println!("no_cleanup:     {}", general.is_no_cleanup());
        println!("env_vars:       {}", general.environment().len());
        println!(
            "output_root:    {}",
            general
                .output_root()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unset)".to_string())
        );
        println!(
            "last_revision:  {}",
            workflow.last_revision().unwrap_or("(unset)")
        );
    } else {
        let summary = json!({
            "modules": options.module_names(),
            "general": {
                "file_system": general.file_system().name(),
                "verbose": general.is_verbose(),
                "force": general.is_forced(),
                "no_cleanup": general.is_no_cleanup(),
                "disable_reversible_check": general.is_disable_reversible_check(),
                "env_vars": general.environment().len(),
                "config_root": general.config_root(),
                "output_root": general.output_root(),
            },
            "workflow": serde_json::to_value(workflow).map_err(|e| e.to_string())?,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?
        );
    }
    Ok(())
}
