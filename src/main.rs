#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    build_strategy, init_logging, play_out, take_turn, ui, Board, Difficulty, EngineConfig,
    ProbabilityStrategy, ShotOutcome,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// JSON file with `grid_size`, `ship_kinds` and `hit_bonus`.
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Let one opponent sweep a randomly laid out fleet, turn by turn.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Print the density grid before every shot (hard only).
        #[arg(long)]
        density: bool,
    },
    /// Play many games and report shot statistics as JSON.
    Bench {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn play(
    config: EngineConfig,
    difficulty: Difficulty,
    mut rng: SmallRng,
    density: bool,
) -> anyhow::Result<()> {
    let mut board = Board::randomized(config.clone(), &mut rng)?;
    println!("Fleet:\n{}", ui::render_board(&board));

    if density && difficulty == Difficulty::Hard {
        // Drive the concrete type so the density grid can be shown each turn.
        let mut strategy = ProbabilityStrategy::new(config)?;
        let mut shots = 0;
        while !board.all_sunk() {
            println!("{}", ui::render_density(&strategy.density()));
            let (coord, outcome) = take_turn(&mut strategy, &mut board, &mut rng)?;
            shots += 1;
            print_shot(shots, coord.label(), &outcome);
        }
        println!("\n{}", ui::render_status(strategy.status()));
        println!("Board cleared in {} shots", shots);
        return Ok(());
    }

    let mut strategy = build_strategy(difficulty, config.clone(), &mut rng)?;
    let limit = config.grid_size * config.grid_size;
    let report = play_out(strategy.as_mut(), &mut board, &mut rng, limit)?;
    for (turn, coord) in report.trail.iter().enumerate() {
        println!("{:3}: {}", turn + 1, coord.label());
    }
    println!("\n{}", ui::render_board(&board));
    println!(
        "{} cleared the board in {} shots ({} hits, sunk: {})",
        report.strategy,
        report.shots,
        report.hits,
        report.sunk.join(", ")
    );
    Ok(())
}

#[cfg(feature = "std")]
fn print_shot(turn: usize, label: impl std::fmt::Display, outcome: &ShotOutcome) {
    match outcome {
        ShotOutcome::Miss => println!("{:3}: {} miss", turn, label),
        ShotOutcome::Hit(kind) => println!("{:3}: {} hit {}", turn, label, kind),
        ShotOutcome::Sunk(kind) => println!("{:3}: {} sank {}", turn, label, kind),
    }
}

#[cfg(feature = "std")]
fn bench(
    config: EngineConfig,
    difficulty: Difficulty,
    games: usize,
    mut rng: SmallRng,
) -> anyhow::Result<()> {
    anyhow::ensure!(games > 0, "--games must be positive");
    let limit = config.grid_size * config.grid_size;
    let mut shots = Vec::with_capacity(games);
    for _ in 0..games {
        let mut board = Board::randomized(config.clone(), &mut rng)?;
        let mut strategy = build_strategy(difficulty, config.clone(), &mut rng)?;
        let report = play_out(strategy.as_mut(), &mut board, &mut rng, limit)?;
        shots.push(report.shots);
    }
    let total: usize = shots.iter().sum();
    let result = json!({
        "difficulty": difficulty,
        "games": games,
        "mean_shots": total as f64 / games as f64,
        "min_shots": shots.iter().min(),
        "max_shots": shots.iter().max(),
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            density,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            play(config, difficulty, seeded_rng(seed), density)
        }
        Commands::Bench {
            difficulty,
            games,
            seed,
        } => bench(config, difficulty, games, seeded_rng(seed)),
    }
}
