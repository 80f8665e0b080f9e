#![cfg(feature = "std")]

use std::io::Cursor;

use broadside::player::cli::{parse_coord, parse_orientation};
use broadside::{
    AttackOutcome, Board, Notice, Orientation, Presenter, Prompt, Side, SoundCue,
    TerminalPresenter, TerminalPrompt, Visibility,
};

#[test]
fn test_parse_letter_number() {
    assert_eq!(parse_coord("A1"), Ok((0, 0)));
    assert_eq!(parse_coord("j10"), Ok((9, 9)));
    assert_eq!(parse_coord(" c5 "), Ok((4, 2)));
    // syntactically fine, rejected later by the board
    assert_eq!(parse_coord("K5"), Ok((4, 10)));
}

#[test]
fn test_parse_number_pair() {
    assert_eq!(parse_coord("4 0"), Ok((4, 0)));
    assert_eq!(parse_coord("9  9"), Ok((9, 9)));
    assert!(parse_coord("4 x").is_err());
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("5A").is_err());
    assert!(parse_coord("Afive").is_err());
}

#[test]
fn test_parse_orientation() {
    assert_eq!(parse_orientation("h"), Ok(Orientation::Horizontal));
    assert_eq!(parse_orientation("Vertical"), Ok(Orientation::Vertical));
    assert!(parse_orientation("d").is_err());
}

#[test]
fn test_prompt_retries_until_valid() {
    let input = Cursor::new("zz\nhelp\nB3\nsideways\nv\n");
    let mut prompt = TerminalPrompt::new(input, Vec::new());
    assert_eq!(prompt.request_coordinate(), Some((2, 1)));
    assert_eq!(prompt.request_orientation(), Some(Orientation::Vertical));
    assert_eq!(prompt.request_coordinate(), None);
}

#[test]
fn test_confirm() {
    let mut prompt = TerminalPrompt::new(Cursor::new("Y\nno\n"), Vec::new());
    assert!(prompt.confirm("again? "));
    assert!(!prompt.confirm("again? "));
    // end of input
    assert!(!prompt.confirm("again? "));
}

#[test]
fn test_presenter_hides_enemy_ships() {
    let mut own = Board::new(Visibility::Owner);
    own.place_manually((0, 0), Orientation::Horizontal, "Destroyer")
        .unwrap();
    let mut enemy = Board::new(Visibility::Concealed);
    enemy
        .place_manually((0, 0), Orientation::Horizontal, "Carrier")
        .unwrap();
    enemy.resolve_attack(0, 0).unwrap();

    let mut presenter = TerminalPresenter::new(Vec::new(), false);
    presenter.render(&own, &enemy);
    let text = String::from_utf8(presenter.into_inner()).unwrap();
    assert!(text.contains(" 1 D D ~"));
    // only the struck cell of the carrier shows
    assert!(text.contains(" 1 X ~ ~ ~ ~ ~"));
    assert!(text.contains("Carrier    4/5 afloat"));
}

#[test]
fn test_presenter_bell() {
    let hit = Notice::Outcome {
        side: Side::Player,
        coord: (0, 0),
        outcome: AttackOutcome::Hit("Carrier"),
    };
    let mut quiet = TerminalPresenter::new(Vec::new(), false);
    quiet.notify(hit);
    quiet.notify(Notice::Sound(SoundCue::Hit));
    let quiet = String::from_utf8(quiet.into_inner()).unwrap();
    assert!(quiet.contains("HIT on Carrier at A1"));
    assert!(!quiet.contains('\x07'));

    let mut loud = TerminalPresenter::new(Vec::new(), true);
    loud.notify(Notice::Sound(SoundCue::Hit));
    loud.notify(Notice::Sound(SoundCue::Miss));
    let loud = String::from_utf8(loud.into_inner()).unwrap();
    assert_eq!(loud.matches('\x07').count(), 1);
}
