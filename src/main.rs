use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tp_shell::bootstrap::tracing::init_tracing_subscriber;
use tp_shell::{run_app, run_scan, RunOptions};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "travel-planner")]
#[command(about = "Bootstraps the travel planner web app")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the bootstrap and write the application shell
    Run {
        /// Config file (defaults to travel-planner.toml in the data directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mount in memory without writing index.html
        #[arg(long)]
        headless: bool,

        /// Override the shell output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Wait for the document store reachability check before exiting
        #[arg(long)]
        wait_for_service: bool,
    },
    /// Report which theme tokens the project sources use
    Scan {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project root the content globs are matched against
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Service credentials may live in .env during development
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let output = match cli.command {
        Command::Run {
            config,
            headless,
            output_dir,
            wait_for_service,
        } => {
            info!("Starting travel planner bootstrap");
            let report = run_app(RunOptions {
                config_path: config,
                headless,
                output_dir,
                wait_for_service,
            })
            .await
            .inspect_err(|err| error!(error = %format!("{err:#}"), "Bootstrap failed"))?;

            let service = report.service.status();
            serde_json::json!({
                "report": report,
                "service": service,
            })
        }
        Command::Scan { config, root } => {
            let summary = run_scan(config, &root)
                .await
                .inspect_err(|err| error!(error = %format!("{err:#}"), "Theme scan failed"))?;
            serde_json::to_value(&summary)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
