use broadside::{
    init_logging, place_fleet, AiPlayer, Board, Difficulty, ManualPlayer, Match, Presenter,
    ShotStats, Side, TerminalPresenter, TerminalPrompt, Visibility,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Placement {
    Random,
    Manual,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,
        #[arg(long, value_enum, default_value_t = Placement::Random)]
        placement: Placement,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Ring the terminal bell on hits and at game end")]
        bell: bool,
    },
    /// Watch two computer opponents fight it out.
    Watch {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
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

fn print_stats(game: &Match) {
    let line = |label: &str, s: ShotStats| {
        println!(
            "  {:<8} shots: {:3}  hits: {:2}  misses: {:3}  sunk: {}  accuracy: {:.1}%",
            label,
            s.shots,
            s.hits,
            s.misses,
            s.sunk,
            s.accuracy()
        )
    };
    println!("\nBattle statistics:");
    line("You", game.stats(Side::Player));
    line("Enemy", game.stats(Side::Opponent));
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            placement,
            seed,
            bell,
        } => {
            let mut rng = make_rng(seed);
            let mut presenter = TerminalPresenter::stdout(bell);
            loop {
                let mut prompt = TerminalPrompt::stdio();
                let mut own = Board::new(Visibility::Owner);
                match placement {
                    Placement::Random => own.place_randomly(&mut rng),
                    Placement::Manual => {
                        if place_fleet(&mut own, &mut prompt, &mut presenter).is_none() {
                            println!("\nInput closed during deployment.");
                            return Ok(());
                        }
                    }
                }
                let mut enemy = Board::new(Visibility::Concealed);
                enemy.place_randomly(&mut rng);

                let mut game = Match::new(
                    own,
                    Box::new(ManualPlayer::new(prompt)),
                    enemy,
                    Box::new(AiPlayer::new(difficulty)),
                );
                println!("\nFleet deployed. Difficulty: {:?}. You fire first.", difficulty);
                let winner = game.run(&mut rng, &mut presenter);
                if winner.is_none() {
                    println!("\nInput closed; match abandoned.");
                    return Ok(());
                }
                print_stats(&game);
                // The manual player holds the stdin lock until the match is dropped.
                drop(game);
                if !TerminalPrompt::stdio().confirm("\nPlay again? (y/n): ") {
                    break;
                }
            }
        }
        Commands::Watch {
            difficulty,
            rounds,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut presenter = TerminalPresenter::stdout(false);
            let deploy = |rng: &mut SmallRng| {
                let mut a = Board::new(Visibility::Owner);
                let mut b = Board::new(Visibility::Concealed);
                a.place_randomly(rng);
                b.place_randomly(rng);
                (a, b)
            };
            let (a, b) = deploy(&mut rng);
            let mut game = Match::new(
                a,
                Box::new(AiPlayer::new(difficulty)),
                b,
                Box::new(AiPlayer::new(difficulty)),
            );
            for round in 1..=rounds.max(1) {
                if round > 1 {
                    let (a, b) = deploy(&mut rng);
                    game.rematch(a, b);
                }
                println!("\n=== Round {} ===", round);
                game.run(&mut rng, &mut presenter)
                    .ok_or_else(|| anyhow::anyhow!("automated players never give up"))?;
                print_stats(&game);
            }
            presenter.render(game.board(Side::Player), game.board(Side::Opponent));
        }
    }
    Ok(())
}
