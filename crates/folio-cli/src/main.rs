use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::Environment;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio CLI - edit and preview your portfolio", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store directory, overrides `storage.dir`
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the public view, probing the background video
    Show {
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the background preset catalog
    Presets,
    /// Set a profile field (camelCase name, e.g. profileImage)
    Set { field: String, value: String },
    /// Add or remove a skill
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },
    /// Choose the background
    Background {
        #[command(subcommand)]
        choice: BackgroundChoice,
    },
    /// Clear the stored portfolio and restore the defaults
    Reset,
    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum SkillAction {
    Add { name: String },
    Remove { name: String },
}

#[derive(Subcommand)]
enum BackgroundChoice {
    /// Animated gradient, no video
    Gradient,
    /// A preset from the catalog
    Preset { id: String },
    /// A video URL
    Url { url: String },
    /// A local video file (kept for this session only)
    File { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = Environment::load(cli.config.as_deref(), cli.store_dir)?;
    setup_tracing(&env.config.log.level, cli.verbose);

    match cli.command {
        Commands::Show { json } => commands::show::run(&env, json).await?,
        Commands::Presets => commands::show::presets(),
        Commands::Set { field, value } => commands::edit::set_field(&env, &field, &value).await?,
        Commands::Skill { action } => match action {
            SkillAction::Add { name } => commands::edit::add_skill(&env, &name).await?,
            SkillAction::Remove { name } => commands::edit::remove_skill(&env, &name).await?,
        },
        Commands::Background { choice } => {
            let choice = match choice {
                BackgroundChoice::Gradient => commands::background::Choice::Gradient,
                BackgroundChoice::Preset { id } => commands::background::Choice::Preset(id),
                BackgroundChoice::Url { url } => commands::background::Choice::Url(url),
                BackgroundChoice::File { path } => commands::background::Choice::File(path),
            };
            commands::background::run(&env, choice).await?
        }
        Commands::Reset => commands::edit::reset(&env).await?,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => commands::contact::run(&env, name, email, subject, message).await?,
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level; `-v` raises it to debug.
fn setup_tracing(level: &str, verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
