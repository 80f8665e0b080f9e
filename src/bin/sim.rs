use broadside::{AiPlayer, Board, Difficulty, Match, Side, Silent, Visibility};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <seed1> <seed2> [normal|hard]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let difficulty = match args.get(3).map(|s| s.to_ascii_lowercase()) {
        None => Difficulty::Hard,
        Some(s) if s == "hard" => Difficulty::Hard,
        Some(s) if s == "normal" => Difficulty::Normal,
        Some(other) => anyhow::bail!("unknown difficulty '{}'", other),
    };

    // seed1 deploys both fleets, seed2 drives the shooting.
    let mut deploy_rng = SmallRng::seed_from_u64(seed1);
    let mut play_rng = SmallRng::seed_from_u64(seed2);

    let mut b1 = Board::new(Visibility::Concealed);
    let mut b2 = Board::new(Visibility::Concealed);
    b1.place_randomly(&mut deploy_rng);
    b2.place_randomly(&mut deploy_rng);

    let mut game = Match::new(
        b1,
        Box::new(AiPlayer::new(difficulty)),
        b2,
        Box::new(AiPlayer::new(difficulty)),
    );
    let winner = game
        .run(&mut play_rng, &mut Silent)
        .ok_or_else(|| anyhow::anyhow!("match ended without a winner"))?;

    let p1 = game.stats(Side::Player);
    let p2 = game.stats(Side::Opponent);
    let result = json!({
        "difficulty": difficulty,
        "status": game.status(),
        "player1": {"shots": p1.shots, "hits": p1.hits, "sunk": p1.sunk, "accuracy": p1.accuracy()},
        "player2": {"shots": p2.shots, "hits": p2.hits, "sunk": p2.sunk, "accuracy": p2.accuracy()},
        "winner": match winner {
            Side::Player => "player1",
            Side::Opponent => "player2",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
