//! Incremental summary snapshots, mid-game and final

use serde_json::json;
use tenpin::core::GameEngine;

fn roll_n(game: &mut GameEngine, n: usize, pins: u8) {
    for _ in 0..n {
        game.roll(pins).unwrap();
    }
}

#[test]
fn test_summary_is_exact_as_the_game_progresses() {
    let mut game = GameEngine::default();
    roll_n(&mut game, 6, 5);

    let mid = serde_json::to_value(game.summary()).unwrap();
    let empty = json!({"first": null, "second": null, "bonus": 0});
    assert_eq!(
        mid,
        json!({
            "guest": {
                "score": 40,
                "frames": {
                    "1": {"first": 5, "second": 5, "bonus": 5},
                    "2": {"first": 5, "second": 5, "bonus": 5},
                    "3": {"first": 5, "second": 5, "bonus": 0},
                    "4": empty, "5": empty, "6": empty, "7": empty,
                    "8": empty, "9": empty, "10": empty
                }
            }
        })
    );

    roll_n(&mut game, 14, 1);

    let open = json!({"first": 1, "second": 1, "bonus": 0});
    let fin = serde_json::to_value(game.summary()).unwrap();
    assert_eq!(
        fin,
        json!({
            "guest": {
                "score": 55,
                "frames": {
                    "1": {"first": 5, "second": 5, "bonus": 5},
                    "2": {"first": 5, "second": 5, "bonus": 5},
                    "3": {"first": 5, "second": 5, "bonus": 1},
                    "4": open, "5": open, "6": open, "7": open,
                    "8": open, "9": open, "10": open
                }
            }
        })
    );
}

#[test]
fn test_first_ball_of_a_frame_is_visible_immediately() {
    let mut game = GameEngine::default();
    game.roll(7).unwrap();
    let frame = *game.player_summary("guest").unwrap().frame(1).unwrap();
    assert_eq!(frame.first, Some(7));
    assert_eq!(frame.second, None);
}

#[test]
fn test_summary_and_replay_agree_after_every_roll() {
    // X 7/ 9- X -8 8/ -6 X X X81
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let mut game = GameEngine::default();
    for pins in rolls {
        game.roll(pins).unwrap();
        let sheet = game.sheet("guest").unwrap();
        assert_eq!(game.score()["guest"], sheet.replay_score());
    }
    assert!(game.is_over());
    assert_eq!(game.score()["guest"], 167);

    let json = serde_json::to_value(game.summary()).unwrap();
    assert_eq!(json["guest"]["frames"]["10"], json!({"first": 10, "second": 8, "third": 1}));
    assert_eq!(json["guest"]["frames"]["11"], json!({"first": 8, "second": 1}));
    assert_eq!(json["guest"]["frames"]["9"]["bonus"], 18);
}
