//! Don't Wordle - CLI
//!
//! Interactive and one-shot helpers for Don't Wordle and other Wordle-like
//! games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dont_wordle::{
    commands::{
        FindQuery, SurvivorsQuery, run_find, run_helper, run_play, run_suggest, run_survivors,
    },
    output::{print_find_result, print_suggest_result, print_survivors_result},
    solver::{Objective, PhaseSelector, Session, SolverConfig},
    wordlists::{DEFAULT_FILES, load_from_files},
};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dont_wordle",
    about = "Don't Wordle helper: filter word lists and rank guesses by the pool they leave",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list files, one word per line (default: the answers and allowed-guesses lists)
    #[arg(short = 'w', long = "words", global = true, num_args = 1..)]
    words: Vec<PathBuf>,

    /// Seed for guess and bucket sampling
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Number of suggestions to show
    #[arg(short = 'n', long = "top", global = true, default_value_t = 20)]
    top: usize,

    /// Whether larger (maximize, Don't Wordle) or smaller (minimize) pools are better
    #[arg(long, global = true, default_value = "maximize")]
    objective: Objective,

    /// Pools larger than this use a sampled depth-1 search
    #[arg(long, global = true, default_value_t = 1000)]
    huge_threshold: usize,

    /// Guesses sampled in the huge phase
    #[arg(long, global = true, default_value_t = 1000)]
    huge_sample: usize,

    /// Pools of at most this many words use the depth-2 search
    #[arg(long, global = true, default_value_t = 500)]
    end_threshold: usize,

    /// Sample this many follow-up guesses per bucket in depth-2 search
    #[arg(long, global = true)]
    bucket_sample: Option<usize>,

    /// Hide progress bars
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive Don't Wordle mode (default)
    Play,

    /// Classic Wordle helper: greens mask, wrong spots, ruled-out letters
    Helper,

    /// Rank guesses after a history of played guesses
    Suggest {
        /// Played guesses as WORD:PATTERN, e.g. CRANE:wwywg
        history: Vec<String>,

        /// Letters that must not appear
        #[arg(short, long, default_value = "")]
        banned_letters: String,
    },

    /// Survivor table for a known answer
    Survivors {
        /// The answer word
        answer: String,

        /// Position rules, e.g. 0a+,1b-
        #[arg(long, default_value = "")]
        positions: String,

        /// Grey letters
        #[arg(long, default_value = "")]
        greys: String,

        /// Exact letter counts, e.g. a2,b1
        #[arg(long, default_value = "")]
        exact: String,

        /// Minimum letter counts, e.g. e2
        #[arg(long, default_value = "")]
        min: String,
    },

    /// Find words matching letter and position filters
    Find {
        /// Letters that must appear
        #[arg(long, default_value = "")]
        required: String,

        /// Letters that must not appear
        #[arg(long, default_value = "")]
        banned: String,

        /// Exact letter counts, e.g. a2,b1
        #[arg(long, default_value = "")]
        exact: String,

        /// Minimum letter counts, e.g. e2
        #[arg(long, default_value = "")]
        min: String,

        /// Position rules, e.g. 0a+,1b-
        #[arg(long, default_value = "")]
        positions: String,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            phases: PhaseSelector::new(self.huge_threshold, self.huge_sample, self.end_threshold),
            objective: self.objective,
            bucket_sample: self.bucket_sample,
            top_n: self.top,
            seed: self.seed,
            show_progress: !self.no_progress,
        }
    }

    fn word_files(&self) -> Vec<PathBuf> {
        if self.words.is_empty() {
            DEFAULT_FILES.iter().map(PathBuf::from).collect()
        } else {
            self.words.clone()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let files = cli.word_files();
    let words = load_from_files(&files).context("loading word lists")?;
    println!("Loaded {} words", words.len());
    info!("config: {:?}", cli.solver_config());

    let mut session = Session::new(words, cli.solver_config());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&mut session, &mut io::stdin().lock())?,
        Commands::Helper => run_helper(&mut session, &mut io::stdin().lock())?,
        Commands::Suggest {
            history,
            banned_letters,
        } => {
            let result = run_suggest(&mut session, &history, &banned_letters)?;
            print_suggest_result(&result);
        }
        Commands::Survivors {
            answer,
            positions,
            greys,
            exact,
            min,
        } => {
            let query = SurvivorsQuery {
                answer,
                positions,
                greys,
                exact,
                min,
            };
            let result = run_survivors(&mut session, &query)?;
            print_survivors_result(&result);
        }
        Commands::Find {
            required,
            banned,
            exact,
            min,
            positions,
        } => {
            let query = FindQuery {
                required,
                banned,
                exact,
                min,
                positions,
            };
            print_find_result(&run_find(&session, &query));
        }
    }

    Ok(())
}
