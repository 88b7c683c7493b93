use anyhow::Result;
use clap::{Parser, Subcommand};
use errwatch::config::Config;
use errwatch::runner;

#[derive(Parser)]
#[command(name = "errwatch")]
#[command(about = "Records a terminal session and looks up errors on Stack Overflow")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Directory for session logs (overrides config file)
    #[arg(long, global = true)]
    log_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a session and watch it for errors (default)
    Watch,
    /// Delete all recorded session logs
    CleanLogs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("errwatch: {e:#}");
        eprintln!("errwatch: continuing with default configuration");
        Config::default()
    });
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir;
    }

    match cli.command {
        None | Some(Commands::Watch) => runner::run(&config).await,
        Some(Commands::CleanLogs) => {
            let dir = config.log_dir();
            if dir.exists() {
                std::fs::remove_dir_all(&dir)?;
                println!("Removed {}", dir.display());
            } else {
                println!("Nothing to remove at {}", dir.display());
            }
            Ok(())
        }
    }
}
