//! Ghost - CLI
//!
//! Play Ghost against the computer in a TUI or a plain terminal, or inspect how
//! the computer rates the letters after any prefix.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ghost_solver::{
    commands::{analyze_prefix, run_openings, run_simple},
    core::{DEFAULT_HUMAN_PLAYERS, DEFAULT_MIN_WORD_LENGTH, GameConfig, Lexicon},
    game::GameError,
    output::{print_analysis_result, print_openings_survey},
    solver::StrategyType,
    wordlists::loader::load_lexicon,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "ghost",
    about = "Play the word game Ghost against a computer that never misses a forced win",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of human players taking turns before the computer
    #[arg(short, long, global = true, default_value_t = DEFAULT_HUMAN_PLAYERS)]
    players: usize,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Shortest string that counts as a completed word
    #[arg(short, long, global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_word_length: usize,

    /// Computer strategy: optimal (default) or random
    #[arg(short, long, global = true, default_value = "optimal")]
    strategy: String,

    /// Seed for the computer's random tie-breaks
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text prompts, no TUI)
    Simple,

    /// Show how every letter after a prefix plays out
    Analyze {
        /// Letters played so far (empty for the opening move)
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Survey the best move at every prefix up to a length
    Openings {
        /// Longest prefix to examine
        #[arg(short = 'n', long, default_value = "2")]
        depth: usize,

        /// Number of forced wins to list
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.players, cli.min_word_length)?;
    let lexicon = load_lexicon(&cli.dictionary)
        .with_context(|| format!("failed to load dictionary '{}'", cli.dictionary))?;
    if lexicon.is_empty() {
        bail!(GameError::EmptyDictionary);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&lexicon, config, &cli.strategy, cli.seed),
        Commands::Simple => {
            let mut strategy = StrategyType::from_name(&cli.strategy, cli.seed);
            let scoreboard =
                run_simple(&lexicon, config, &mut strategy).map_err(|e| anyhow::anyhow!(e))?;
            log::info!(
                "session over: computer lost {} of {} games",
                scoreboard.computer_losses,
                scoreboard.games
            );
            Ok(())
        }
        Commands::Analyze { prefix } => run_analyze_command(&prefix, &lexicon, &config, cli.seed),
        Commands::Openings { depth, limit } => {
            let survey = run_openings(&lexicon, &config, depth);
            print_openings_survey(&survey, limit);
            Ok(())
        }
    }
}

fn run_analyze_command(
    prefix: &str,
    lexicon: &Lexicon,
    config: &GameConfig,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let result =
        analyze_prefix(prefix, lexicon, config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(
    lexicon: &Lexicon,
    config: GameConfig,
    strategy_name: &str,
    seed: Option<u64>,
) -> Result<()> {
    use ghost_solver::interactive::{App, run_tui};

    let strategy = StrategyType::from_name(strategy_name, seed);
    let app = App::new(lexicon, config, strategy)?;
    run_tui(app)
}
