//! Vocabulary Study - flashcard review in the terminal
//!
//! Single-user, file-backed CLI application.
//! Keeps a JSON dictionary of words and per-word progress, and runs
//! an interactive flashcard loop over stdin/stdout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use vocab_study::cli::commands;
use vocab_study::cli::{Display, InputHandler};
use vocab_study::config::{Config, DEFAULT_PROGRESS_PATH, DEFAULT_VOCAB_PATH};
use vocab_study::error::AppError;
use vocab_study::logging;
use vocab_study::session::ReviewMode;
use vocab_study::storage::NewWord;

const EXAMPLES: &str = "\
Examples:
  vocab --limit 20
  vocab --review=unknown
  vocab reset
  vocab stats
  vocab add --word=précis --pos=noun --definition=\"a summary or abstract\" --example=\"Read the précis.\"
  vocab remove --word=précis";

#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(about = "Study vocabulary with flashcards in the terminal")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Maximum number of flashcards in the session (0 = no limit)
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Which words to review
    #[arg(long, default_value = "all", value_parser = ["all", "unknown", "unseen"])]
    review: String,

    /// Path to the vocabulary file
    #[arg(long, global = true, env = "VOCAB_FILE", default_value = DEFAULT_VOCAB_PATH)]
    vocab: PathBuf,

    /// Path to the progress file
    #[arg(long, global = true, env = "VOCAB_PROGRESS_FILE", default_value = DEFAULT_PROGRESS_PATH)]
    progress: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show study statistics
    Stats,

    /// Reset all progress
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a new word
    Add {
        /// Word to add
        #[arg(long)]
        word: Option<String>,

        /// Part of speech (noun, verb, adjective, etc.)
        #[arg(long)]
        pos: Option<String>,

        /// Definition of the word
        #[arg(long)]
        definition: Option<String>,

        /// Example sentence using the word
        #[arg(long)]
        example: Option<String>,
    },

    /// Remove a word from the vocabulary
    Remove {
        /// Word to remove
        #[arg(long)]
        word: Option<String>,
    },
}

fn run(args: Args, config: &Config) -> Result<(), AppError> {
    let mut display = Display::stdout();

    match args.command {
        None => {
            let mut input = InputHandler::stdin();
            commands::study(
                config,
                ReviewMode::from_name(&args.review),
                args.limit,
                &mut input,
                &mut display,
            )?;
        }
        Some(Command::Stats) => {
            commands::stats(config, &mut display)?;
        }
        Some(Command::Reset { yes }) => {
            let mut input = InputHandler::stdin();
            commands::reset(config, yes, &mut input, &mut display)?;
        }
        Some(Command::Add {
            word,
            pos,
            definition,
            example,
        }) => {
            let new_word = NewWord {
                word: word.unwrap_or_default(),
                part_of_speech: pos.unwrap_or_default(),
                definition: definition.unwrap_or_default(),
                example_sentence: example.unwrap_or_default(),
            };
            commands::add(config, &new_word, &mut display)?;
        }
        Some(Command::Remove { word }) => {
            commands::remove(config, &word.unwrap_or_default(), &mut display)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::new(args.vocab.clone(), args.progress.clone()).with_debug(args.debug);
    logging::init_logging(&config);

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            let _ = Display::stderr().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
