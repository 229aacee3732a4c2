use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tp_app::{AppError, AppResult, load_summary, run};
use tp_sim::SimConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "thermopid - closed-loop PID temperature control simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference heater scenario and write data.csv (default)
    Run,
    /// Print descriptive statistics of a result log
    Summary {
        /// Path to the CSV log
        #[arg(default_value = "data.csv")]
        path: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(),
        Commands::Summary { path, json } => cmd_summary(&path, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_run() -> AppResult<()> {
    let config = SimConfig::default();
    tracing::debug!(?config, "running reference scenario");
    let outcome = run(&config)?;

    println!(
        "Done! Wrote {} (time,temp,setpoint,control)",
        outcome.output.display()
    );
    if outcome.report.dropped > 0 {
        println!(
            "  {} of {} records could not be written",
            outcome.report.dropped, outcome.report.steps
        );
    }
    println!(
        "Tip: Open {} in a spreadsheet or run `tp-cli summary` to inspect the response.",
        outcome.output.display()
    );
    Ok(())
}

fn cmd_summary(path: &Path, json: bool) -> AppResult<()> {
    let (count, summary) = load_summary(path)?;

    if json {
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::Results(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    match summary {
        Some(summary) => {
            println!("{}: {} records\n", path.display(), count);
            print!("{summary}");
        }
        None => println!("{}: no records", path.display()),
    }
    Ok(())
}
