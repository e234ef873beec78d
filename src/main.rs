//! Word Scramble - CLI
//!
//! Unscramble-the-word game with TUI and line modes, plus one-shot helpers
//! for scrambling, checking guesses, hints and a scrambler benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{check_guess, run_benchmark, run_simple, scramble_words},
    core::{HintMode, RoundController, Vocabulary, get_hint, normalize_input},
    output::{print_benchmark_result, print_check_result, print_hint, print_scrambles},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word scramble game: unscramble the letters to find the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed the random generator for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line game without TUI)
    Simple,

    /// Print scrambles of a word
    Scramble {
        /// Word to scramble
        word: String,

        /// Number of scrambles to print
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Check a guess against an answer
    Check {
        guess: String,
        answer: String,

        /// Attempt number the guess is scored as
        #[arg(short, long, default_value = "1")]
        attempts: u32,
    },

    /// Show a hint for a word
    Hint {
        word: String,

        /// Hint mode: first (default), last, both
        #[arg(short, long, default_value = "first")]
        mode: String,
    },

    /// Benchmark the scrambler over the whole word list
    Benchmark {
        /// Scrambles per word
        #[arg(short, long, default_value = "1000")]
        trials: usize,
    },
}

/// Load the vocabulary based on the -w flag
///
/// - "builtin": the word list embedded at compile time
/// - "<path>": load a custom word list from file
fn load_vocabulary(wordlist_mode: &str) -> Result<Vocabulary> {
    use word_scramble::wordlists::loader::load_from_file;

    match wordlist_mode {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("could not load word list '{path}'")),
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default
fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines on stderr would tear the alternate screen
    init_tracing(if matches!(command, Commands::Play) {
        "off"
    } else {
        "warn"
    });

    match command {
        Commands::Play => {
            let vocabulary = load_vocabulary(&cli.wordlist)?;
            run_play_command(&vocabulary, make_rng(cli.seed))
        }
        Commands::Simple => {
            let vocabulary = load_vocabulary(&cli.wordlist)?;
            run_simple_command(&vocabulary, make_rng(cli.seed))
        }
        Commands::Scramble { word, count } => {
            let mut rng = make_rng(cli.seed);
            let scrambles = scramble_words(&word, count, &mut rng);
            print_scrambles(&word, &scrambles);
            Ok(())
        }
        Commands::Check {
            guess,
            answer,
            attempts,
        } => {
            let result = check_guess(&guess, &answer, attempts);
            print_check_result(&result, attempts.max(1));
            Ok(())
        }
        Commands::Hint { word, mode } => {
            let mode = HintMode::from_name(&mode);
            let hint = get_hint(&normalize_input(Some(word.as_str())), mode);
            print_hint(&word, mode, &hint);
            Ok(())
        }
        Commands::Benchmark { trials } => {
            let vocabulary = load_vocabulary(&cli.wordlist)?;
            run_benchmark_command(&vocabulary, trials, cli.seed.unwrap_or_default());
            Ok(())
        }
    }
}

fn run_benchmark_command(vocabulary: &Vocabulary, trials: usize, seed: u64) {
    println!(
        "Scrambling {} words {trials} times each...",
        vocabulary.len()
    );

    let pb = ProgressBar::new(vocabulary.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} words")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let result = run_benchmark(vocabulary, trials, seed, &pb);
    pb.finish_and_clear();

    print_benchmark_result(&result);
}

fn run_simple_command(vocabulary: &Vocabulary, mut rng: StdRng) -> Result<()> {
    let mut controller = RoundController::new(vocabulary, &mut rng);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_simple(&mut controller, &mut rng, stdin.lock(), &mut stdout)
}

fn run_play_command(vocabulary: &Vocabulary, rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(vocabulary, rng);
    run_tui(app)
}
