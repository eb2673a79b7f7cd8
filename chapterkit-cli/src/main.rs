//! ChapterKit CLI - turns chapter drafts into a markdown book tree

mod commands;

use anyhow::Result;
use chapterkit_core::types::DEFAULT_ROOT;
use chapterkit_core::BookLayout;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chapterkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    chapterkit chapter-3-2.txt 3 2\n  \
    chapterkit batch ./drafts/\n  \
    chapterkit progress")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output root for converted chapters
    #[arg(long, global = true, default_value = DEFAULT_ROOT)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Draft file to convert
    #[arg(requires_all = ["part", "chapter"])]
    input: Option<PathBuf>,

    /// Part number
    part: Option<u32>,

    /// Chapter number within the part
    chapter: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Batch convert every .txt draft in a directory
    Batch {
        /// Directory holding the drafts
        input_dir: PathBuf,
    },

    /// Show how many chapters have been filled in
    Progress {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "chapterkit_cli=debug,chapterkit_core=debug"
    } else {
        "chapterkit_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let layout = BookLayout::new(cli.root);

    match (cli.command, cli.input, cli.part, cli.chapter) {
        (Some(Commands::Batch { input_dir }), ..) => commands::batch(&input_dir, &layout),

        (Some(Commands::Progress { json }), ..) => commands::progress(&layout, json),

        (None, Some(input), Some(part), Some(chapter)) => {
            commands::convert(&input, part, chapter, &layout)
        }

        _ => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
