use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::cli::{print_player_view, print_scores};
use seabattle::{
    init_logging, random_board, AiPlayer, CliPlayer, GameConfig, GameEngine, Outcome, Session,
    Side, Turn, BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on the console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play(GameArgs),
    /// Watch the computer play against itself.
    Auto(GameArgs),
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Board side length")]
    size: usize,
    #[arg(long, value_delimiter = ',', help = "Ship lengths, e.g. --fleet 3,2,2,1,1,1,1")]
    fleet: Option<Vec<usize>>,
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS, help = "Random placement attempts per ship")]
    max_attempts: usize,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            board_size: self.size,
            fleet: self.fleet.clone().unwrap_or_else(|| FLEET.to_vec()),
            max_placement_attempts: self.max_attempts,
            ..GameConfig::default()
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(&args),
        Commands::Auto(args) => auto(&args),
    }
}

fn build_engine(config: &GameConfig, rng: &mut SmallRng) -> anyhow::Result<GameEngine> {
    config.validate().context("cannot start a game with this fleet")?;
    let mine = random_board(config, rng)?;
    let theirs = random_board(config, rng)?;
    Ok(GameEngine::new(mine, theirs))
}

fn play(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config();
    let mut rng = args.rng();
    let mut engine = build_engine(&config, &mut rng)?;
    engine.board_mut(Side::Second).set_concealed(true);

    println!("Sea battle. Enter shots as <row> <col>, 'q' quits.");
    let labels = ["Your board", "Computer board"];
    let mut session = Session::new(engine, Box::new(CliPlayer::stdio()), Box::new(AiPlayer::new()));
    print_player_view(session.engine(), Side::First, labels);

    let outcome = session.run(&mut rng, |engine, turn| {
        if let Turn::Shot { shooter, coord, .. } = turn {
            if *shooter == Side::Second {
                println!("Computer fires at {}", coord);
            }
            print_scores(engine, labels);
            if engine.current() == Some(Side::First) {
                print_player_view(engine, Side::First, labels);
            }
        }
    })?;
    report(outcome, labels, &["You win!", "The computer wins!"]);
    Ok(())
}

fn auto(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config();
    let mut rng = args.rng();
    let engine = build_engine(&config, &mut rng)?;

    let labels = ["Computer 1", "Computer 2"];
    let mut session = Session::new(engine, Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
    let outcome = session.run(&mut rng, |engine, turn| {
        if let Turn::Shot { shooter, coord, outcome } = turn {
            println!("{} fires at {}: {:?}", labels[shooter.index()], coord, outcome);
            print_scores(engine, labels);
        }
    })?;
    print_player_view(session.engine(), Side::First, labels);
    report(outcome, labels, &["Computer 1 wins!", "Computer 2 wins!"]);
    Ok(())
}

fn report(outcome: Outcome, labels: [&str; 2], banners: &[&str; 2]) {
    println!("{}", "-".repeat(24));
    match outcome {
        Outcome::Winner(side) => println!("{}", banners[side.index()]),
        Outcome::Quit(side) => println!("{} left the game.", labels[side.index()]),
    }
}
