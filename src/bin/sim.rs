use broadside::{build_strategy, init_logging, play_out, Board, Difficulty, EngineConfig};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <easy|medium|hard>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let difficulty: Difficulty = args[2].parse()?;

    let config = EngineConfig::default();
    let limit = config.grid_size * config.grid_size;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut board = Board::randomized(config.clone(), &mut rng)?;
    let mut strategy = build_strategy(difficulty, config, &mut rng)?;
    let report = play_out(strategy.as_mut(), &mut board, &mut rng, limit)?;

    let result = json!({
        "seed": seed,
        "difficulty": difficulty,
        "report": report,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
