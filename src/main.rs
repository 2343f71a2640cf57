use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_book::cli::Session;
use contact_book::config::paths::DATA_DIR_ENV;
use contact_book::config::{ContactPaths, Settings, ViewKind};
use contact_book::display::view_factory;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Interactive command-line contact book",
    long_about = "Stores names, phone numbers and birthdays between sessions. \
                  Run without a subcommand to start the interactive prompt, \
                  then type 'help' to list the available commands."
)]
struct Cli {
    /// Directory holding settings and data (overrides the platform default)
    #[arg(long, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Output view (overrides the saved setting)
    #[arg(long, value_enum)]
    view: Option<ViewKind>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // stderr keeps log lines out of the interactive output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ContactPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    let book_path = paths.book_file(&settings.book_file);

    match cli.command {
        Some(Commands::Config) => {
            settings.save(&paths)?;
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Address book:     {}", book_path.display());
            println!();
            println!("Settings:");
            println!("  View: {}", cli.view.unwrap_or(settings.view));
        }
        None => {
            paths.ensure_directories()?;
            let view_kind = cli.view.unwrap_or(settings.view);
            info!(view = %view_kind, book = %book_path.display(), "starting session");

            let view = view_factory(view_kind, io::stdout());
            let mut session = Session::new(Storage::new(book_path), view);
            session.run(io::stdin().lock(), io::stdout())?;
        }
    }

    Ok(())
}
