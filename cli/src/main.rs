mod report;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use callboard_core::{
    logging, resolve_selection, BundledCallRepository, CallRepository, CallStore, Config,
    DashboardUseCase, FileCallRepository, Selection,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "callboard")]
#[command(about = "PM-SVANidhi voice agent call analytics dashboard", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/callboard/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON call dataset to use instead of the bundled one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Tui {
        /// Initial day: "all", a day key, or a unique prefix such as "5th"
        #[arg(long)]
        day: Option<String>,
    },
    /// Print the dashboard metrics as text tables
    Summary {
        /// Day to summarise: "all", a day key, or a unique prefix such as "5th"
        #[arg(long)]
        day: Option<String>,
    },
    /// List the available days
    Days,
}

fn load_store(data_path: Option<PathBuf>) -> Result<CallStore> {
    let store = match data_path {
        Some(path) => FileCallRepository::new(path.clone())
            .load()
            .with_context(|| format!("failed to load call data from {}", path.display()))?,
        None => BundledCallRepository
            .load()
            .context("failed to load bundled call data")?,
    };
    Ok(store)
}

fn initial_selection(requested: Option<&str>, store: &CallStore) -> Result<Selection> {
    match requested {
        Some(day) => resolve_selection(day, &store.day_keys())
            .with_context(|| format!("cannot select day '{}'", day)),
        None => Ok(Selection::AllDays),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let _guard = logging::init(&config.logging).context("failed to initialise logging")?;

    let data_path = cli.data.clone().or(config.dashboard.data_path.clone());
    let store = load_store(data_path)?;
    let window = config.dashboard.moving_average_window;

    match cli.command {
        Some(Commands::Summary { day }) => {
            let requested = day.or(config.dashboard.default_day.clone());
            let selection = initial_selection(requested.as_deref(), &store)?;
            let usecase = DashboardUseCase::new(&store, window);
            let snapshot = usecase.snapshot(&selection);
            let generated_on = chrono::Local::now().format("%A, %-d %B %Y").to_string();
            print!("{}", report::build_summary(&snapshot, &generated_on));
        }
        Some(Commands::Days) => {
            println!("{}", report::build_day_list(&store));
        }
        Some(Commands::Tui { day }) => {
            let requested = day.or(config.dashboard.default_day.clone());
            let selection = initial_selection(requested.as_deref(), &store)?;
            tui::run(&store, selection, window)?;
        }
        None => {
            let selection = initial_selection(config.dashboard.default_day.as_deref(), &store)?;
            tui::run(&store, selection, window)?;
        }
    }

    Ok(())
}
