use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let b1 = random_board(&config, &mut rng1)?;
    let b2 = random_board(&config, &mut rng2)?;

    let mut session = Session::new(
        GameEngine::new(b1, b2),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );
    let outcome = session.run(&mut rng1, |_, _| {})?;

    let winner = match outcome {
        Outcome::Winner(Side::First) => Some("player1"),
        Outcome::Winner(Side::Second) => Some("player2"),
        Outcome::Quit(_) => None,
    };
    let engine = session.engine();
    let result = json!({
        "player1": {
            "shots": engine.shots(Side::First),
            "ships_afloat": engine.board(Side::First).live_ships(),
        },
        "player2": {
            "shots": engine.shots(Side::Second),
            "ships_afloat": engine.board(Side::Second).live_ships(),
        },
        "winner": winner,
        "status": engine.status(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
