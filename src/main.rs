#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, CliPlayer, Game, GameConfig, Player, RandomAi, Session,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sea battle on a small grid against a computer that shoots at random.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Side length of both boards.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size)]
    size: usize,
    /// Random placement attempts allowed per board build.
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
    max_attempts: usize,
    /// Let the computer play your side as well.
    #[arg(long)]
    autoplay: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        size: cli.size,
        max_attempts: cli.max_attempts,
        ..GameConfig::default()
    };
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    greet(&config);
    let game = Game::random(&mut rng, &config)?;
    let human: Box<dyn Player> = if cli.autoplay {
        Box::new(RandomAi::new())
    } else {
        Box::new(CliPlayer::stdio())
    };
    let mut session = Session::new(game, human, Box::new(RandomAi::new()));

    session.run(&mut rng, &mut std::io::stdout())?;
    Ok(())
}

#[cfg(feature = "std")]
fn parse_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|e| format!("{}", e))?;
    if (1..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be between 1 and {}", MAX_BOARD_SIZE))
    }
}

#[cfg(feature = "std")]
fn greet(config: &GameConfig) {
    let mut lengths = config.fleet.clone();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    let fleet: Vec<String> = lengths.iter().map(|len| len.to_string()).collect();
    println!("Welcome to Sea Battle! You play against a computer that moves at random.");
    println!(
        "The board is {0}x{0}. Each side has {1} ships with lengths {2}.",
        config.size,
        config.fleet.len(),
        fleet.join(", ")
    );
    println!("Destroy all of the opponent's ships to win.");
    println!("Enter a move as two numbers separated by a space: the row, then the column.");
    println!("A hit or a sunk ship gives you another move.");
}
