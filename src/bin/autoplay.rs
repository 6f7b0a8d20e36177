//! Headless self-play: runs games with a uniformly random move policy and
//! logs how far each one got.
//!
//! ```text
//! RUST_LOG=merge_grid=debug autoplay --seed 7 --games 3
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use merge_grid::{Direction, Engine, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Play merge-grid games with a random policy")]
struct Args {
    /// Base seed; game `i` uses `seed + i`. Omit for entropy-seeded games.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Probability that a spawned tile is a 4
    #[arg(long, default_value_t = merge_grid::core::DEFAULT_FOUR_PROBABILITY)]
    four_probability: f64,

    /// Print the final board of each game
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("merge_grid=info,autoplay=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut policy = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut best = 0u64;
    for game in 0..args.games {
        let config = EngineConfig {
            seed: args.seed.map(|seed| seed.wrapping_add(u64::from(game))),
            four_probability: args.four_probability,
        };
        let mut engine = Engine::new(&config).context("invalid engine configuration")?;

        while !engine.is_over() {
            let legal = engine.legal_moves();
            let choices: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|d| legal[d.index()])
                .collect();
            let Some(&direction) = choices.choose(&mut policy) else {
                break;
            };
            engine.make_move(direction);
        }

        let board = engine.board();
        info!(
            game,
            score = engine.score(),
            moves = engine.move_count(),
            max_tile = board.max_tile(),
            "finished"
        );
        if args.show_board {
            println!("{board}");
        }
        best = best.max(engine.score());
    }

    info!(games = args.games, best, "done");
    Ok(())
}
