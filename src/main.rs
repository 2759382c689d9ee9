//! Wordle Expectimin - CLI
//!
//! Simulates single- and multi-board Wordle games with the expected-remaining
//! optimizer, and analyses individual guesses.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug, info};
use std::path::PathBuf;
use wordle_expectimin::{
    commands::{
        analyze_word, parse_answers, random_answers, run_test_all, solve_boards, solve_word,
    },
    core::{Word, WordSet},
    filter::{CacheMode, DEFAULT_MAX_ENTRIES, Evaluator},
    output::{
        print_analysis_result, print_multi_result, print_solve_result, print_test_all_statistics,
    },
    solver::{
        CancelFlag, MultiBoardOptimizer, OpeningGuess, SingleBoardOptimizer, SolverConfig,
        config::{DEFAULT_CANDIDATE_THRESHOLD, DEFAULT_OPENING},
    },
    wordlists::{AnswerTier, WordLists},
};

#[derive(Parser)]
#[command(
    name = "wordle_expectimin",
    about = "Wordle solver minimising the expected number of remaining answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guessable words, one per line
    #[arg(long, global = true, default_value = "words/guesses.txt")]
    guesses: PathBuf,

    /// Possible answers, one per line
    #[arg(long, global = true, default_value = "words/answers.txt")]
    answers: PathBuf,

    /// Common answers, a likelier subset that becomes the default answer pool
    #[arg(long, global = true)]
    common: Option<PathBuf>,

    /// Which list seeds the answer pool [default: common if loaded, else answers]
    #[arg(long, global = true, value_enum)]
    tier: Option<Tier>,

    /// Pools larger than this only guess words that could still be the answer
    #[arg(short, long, global = true, default_value_t = DEFAULT_CANDIDATE_THRESHOLD)]
    threshold: usize,

    /// First guess of every game
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Precomputed expected remaining of the opening guess, for display
    #[arg(long, global = true)]
    opening_score: Option<f64>,

    /// Score the first turn like any other instead of using the opening guess
    #[arg(long, global = true, conflicts_with = "opening_score")]
    no_opening: bool,

    /// Stop a game after this many guesses
    #[arg(long, global = true)]
    max_turns: Option<usize>,

    /// Disable memoisation of filter results
    #[arg(long, global = true)]
    no_cache: bool,

    /// Most filter results kept in memory before the cache is emptied
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ENTRIES, conflicts_with = "no_cache")]
    cache_entries: usize,

    /// More output: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Tier {
    Answers,
    Common,
}

impl From<Tier> for AnswerTier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Answers => Self::Answers,
            Tier::Common => Self::Common,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Solve several boards at once, sharing every guess
    Multi {
        /// Answers, one per board (random if omitted)
        #[arg(value_name = "ANSWER")]
        targets: Vec<String>,

        /// Number of random boards when no answers are given
        #[arg(short = 'n', long, default_value = "4")]
        boards: usize,

        /// Seed for drawing random answers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a word against the answer pool
    Analyze {
        /// Word to analyze
        word: String,

        /// Also rank it against every guessable word
        #[arg(short, long)]
        compare: bool,
    },

    /// Test the solver on every answer in the pool
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn solver_config(cli: &Cli, guesses: &WordSet) -> Result<SolverConfig> {
    let opening = if cli.no_opening {
        None
    } else {
        let word = Word::new(&cli.opening)
            .with_context(|| format!("invalid opening guess '{}'", cli.opening))?;
        if !guesses.contains(&word) {
            bail!("opening guess '{word}' is not in the guess list");
        }
        let opening = OpeningGuess::new(word);
        Some(match cli.opening_score {
            Some(score) => opening.with_expected_remaining(score),
            None => opening,
        })
    };

    Ok(SolverConfig::new(cli.threshold)
        .with_opening(opening)
        .with_max_turns(cli.max_turns))
}

fn log_cache_stats(evaluator: &Evaluator) {
    if let Some(stats) = evaluator.cache().stats() {
        debug!(
            "filter cache: {} hits, {} misses, {} entries",
            stats.hits, stats.misses, stats.entries
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lists = WordLists::load(&cli.guesses, &cli.answers, cli.common.as_deref())
        .context("failed to load word lists")?;
    let tier = cli.tier.map_or_else(|| lists.default_tier(), AnswerTier::from);
    let pool = lists.answer_pool(tier)?;
    info!(
        "{} guessable words, {} answers in the {tier} pool",
        lists.guesses().len(),
        pool.len()
    );

    let config = solver_config(&cli, lists.guesses())?;
    let cache_entries = if cli.no_cache { 0 } else { cli.cache_entries };
    let evaluator = Evaluator::new(CacheMode::with_max_entries(cache_entries));
    let detailed = cli.verbose > 0;

    match &cli.command {
        Commands::Solve { word } => {
            let optimizer = SingleBoardOptimizer::new(lists.guesses(), config, evaluator);
            let result = solve_word(&optimizer, pool, word)?;
            print_solve_result(&result, detailed);
            log_cache_stats(optimizer.evaluator());
        }
        Commands::Multi {
            targets,
            boards,
            seed,
        } => {
            let answers = if targets.is_empty() {
                random_answers(pool, *boards, *seed)?
            } else {
                parse_answers(pool, targets)?
            };
            let optimizer = MultiBoardOptimizer::new(lists.guesses(), config, evaluator);
            let result = solve_boards(&optimizer, pool, answers)?;
            print_multi_result(&result, detailed);
            log_cache_stats(optimizer.evaluator());
        }
        Commands::Analyze { word, compare } => {
            let result = analyze_word(
                &evaluator,
                lists.guesses(),
                pool,
                word,
                *compare,
                &CancelFlag::new(),
            )?;
            print_analysis_result(&result);
            log_cache_stats(&evaluator);
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} possible answers", pool.len());
            println!("Threshold: {}", config.candidate_threshold);
            match config.opening {
                Some(opening) => println!("Opening guess: {}", opening.word),
                None => println!("Opening guess: scored"),
            }
            println!();

            let optimizer = SingleBoardOptimizer::new(lists.guesses(), config, evaluator);
            let stats = run_test_all(&optimizer, pool, *limit)?;
            print_test_all_statistics(&stats);
            log_cache_stats(optimizer.evaluator());
        }
    }

    Ok(())
}
