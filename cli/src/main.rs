//! Memo CLI entry point
//!
//! Parses the command line, loads (or auto-creates) the config, and runs one
//! command to completion. Exit codes: 0 on success, 1 for usage and data
//! errors and for fatal I/O failures.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_cli::commands;
use memo_cli::TermUi;
use memo_store::{Config, MemoStore, SearchScope};

#[derive(Parser)]
#[command(name = "memo")]
#[command(about = "Personal command-line memo manager")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new memo; opens $EDITOR when no content is given
    Add {
        title: String,
        content: Option<String>,
    },
    /// Edit a memo's content, previewing a diff before committing
    Edit {
        /// Accept changes without the diff confirmation
        #[arg(short = 'a', long = "accept")]
        accept: bool,
        /// Memo hash (prefix) or exact title
        identifier: String,
        content: Option<String>,
    },
    /// Delete a memo
    Rm { identifier: String },
    /// Print a single memo
    Show {
        /// Tab-separated single-line output
        #[arg(short = 'n', long = "no-format")]
        no_format: bool,
        identifier: String,
    },
    /// List memos, optionally limited to those carrying any of the tags
    Ls {
        /// Tab-separated single-line output
        #[arg(short = 'n', long = "no-format")]
        no_format: bool,
        /// Keep only memos with at least one of these tags (repeatable)
        #[arg(short = 't', long = "tag")]
        tag: Vec<String>,
    },
    /// Search memos by substring
    Search {
        /// Match titles only
        #[arg(short = 't', long = "title", conflicts_with = "content")]
        title: bool,
        /// Match contents only
        #[arg(short = 'c', long = "content")]
        content: bool,
        /// Tab-separated single-line output
        #[arg(short = 'n', long = "no-format")]
        no_format: bool,
        term: String,
    },
    /// Tag management
    Tag {
        #[command(subcommand)]
        command: TagCommand,
    },
    /// Alias for `memo tag ls`
    Tags,
}

#[derive(Subcommand)]
enum TagCommand {
    /// Add a tag to a memo
    Add { identifier: String, tag: String },
    /// Remove a tag from a memo
    Rm { identifier: String, tag: String },
    /// List all existing tags
    Ls,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_store=warn,memo_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Usage errors exit 1, not clap's default 2.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        let exit = if e.use_stderr() { 1 } else { 0 };
        std::process::exit(exit);
    });

    // Data and I/O errors alike: human-readable message, exit 1.
    if let Err(e) = run(cli) {
        tracing::debug!("command failed: {:?}", e);
        println!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> memo_store::Result<()> {
    let config = Config::load_or_init(&Config::default_path())?;
    config.ensure_saves_dir()?;
    let store = MemoStore::new(config.saves_dir.clone());
    let ui = TermUi;

    match cli.command {
        Command::Add { title, content } => commands::add(&store, &ui, &title, content),
        Command::Edit {
            accept,
            identifier,
            content,
        } => commands::edit(&store, &ui, &identifier, content, accept),
        Command::Rm { identifier } => commands::rm(&store, &identifier),
        Command::Show {
            no_format,
            identifier,
        } => commands::show(&store, &identifier, no_format),
        Command::Ls { no_format, tag } => commands::ls(&store, &tag, no_format),
        Command::Search {
            title,
            content,
            no_format,
            term,
        } => {
            let scope = if title {
                SearchScope::Title
            } else if content {
                SearchScope::Content
            } else {
                SearchScope::All
            };
            commands::search(&store, &term, scope, no_format)
        }
        Command::Tag { command } => match command {
            TagCommand::Add { identifier, tag } => commands::tag_add(&store, &identifier, &tag),
            TagCommand::Rm { identifier, tag } => commands::tag_rm(&store, &identifier, &tag),
            TagCommand::Ls => commands::tag_ls(&store),
        },
        Command::Tags => commands::tag_ls(&store),
    }
}
