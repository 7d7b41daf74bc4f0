use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod console;
mod menu;
mod models;
mod store;

use config::Config;
use console::Console;
use store::RecipeStore;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(version)]
#[command(about = "A command-line recipe manager", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipebox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    let store = RecipeStore::new(config.data_file.clone());
    let mut recipes = store.load();

    tracing::info!(
        "recipe manager initialized; {} recipe(s) loaded from {}",
        recipes.len(),
        store.path().display()
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    menu::run(&mut recipes, &store, &mut console)?;

    Ok(())
}
