//! Turn rotation and per-player isolation

use tenpin::core::{GameEngine, GameError, TurnPhase};

#[test]
fn test_two_players_alternate_and_stay_independent() {
    let mut game = GameEngine::new(["ann", "bob"]).unwrap();

    for _ in 0..2 {
        assert_eq!(game.current_player(), "ann");
        game.roll(1).unwrap();
        game.roll(1).unwrap();
        assert_eq!(game.current_player(), "bob");
        game.roll(2).unwrap();
        game.roll(2).unwrap();
    }

    assert_eq!(game.current_player(), "ann");
    let score = game.score();
    assert_eq!(score["ann"], 4);
    assert_eq!(score["bob"], 8);

    let summary = game.summary();
    let ann = &summary["ann"];
    let bob = &summary["bob"];
    assert_eq!(ann.frame(2).unwrap().first, Some(1));
    assert_eq!(bob.frame(2).unwrap().first, Some(2));
    assert_eq!(ann.frame(3).unwrap().first, None);
    assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["ann", "bob"]);
}

#[test]
fn test_strike_passes_the_turn() {
    let mut game = GameEngine::new(["ann", "bob", "cy"]).unwrap();
    game.roll(10).unwrap();
    assert_eq!(game.current_player(), "bob");
    game.roll(10).unwrap();
    assert_eq!(game.current_player(), "cy");
    game.roll(10).unwrap();
    assert_eq!(game.current_player(), "ann");
    assert_eq!(game.frame_number(), 2);
}

#[test]
fn test_bonus_rolls_stay_with_the_player_who_earned_them() {
    let mut game = GameEngine::new(["ann", "bob"]).unwrap();
    for _ in 0..9 {
        for _ in 0..4 {
            game.roll(0).unwrap();
        }
    }

    // Ann strikes in the tenth and keeps the lane for two bonus balls.
    game.roll(10).unwrap();
    assert_eq!(game.current_player(), "ann");
    assert_eq!(game.phase(), TurnPhase::Bonus);
    game.roll(3).unwrap();
    assert_eq!(game.current_player(), "ann");
    game.roll(4).unwrap();

    assert_eq!(game.current_player(), "bob");
    assert_eq!(game.phase(), TurnPhase::Regular);
    game.roll(6).unwrap();
    game.roll(4).unwrap();
    assert_eq!(game.current_player(), "bob");
    game.roll(10).unwrap();

    assert!(game.is_over());
    assert_eq!(game.score()["ann"], 17);
    assert_eq!(game.score()["bob"], 20);
    assert_eq!(game.roll(0), Err(GameError::GameOver));
}

#[test]
fn test_game_ends_only_after_last_player() {
    let mut game = GameEngine::new(["ann", "bob"]).unwrap();
    for _ in 0..9 {
        for _ in 0..4 {
            game.roll(1).unwrap();
        }
    }
    game.roll(1).unwrap();
    game.roll(1).unwrap();
    assert!(!game.is_over());
    assert_eq!(game.current_player(), "bob");
    game.roll(1).unwrap();
    game.roll(1).unwrap();
    assert!(game.is_over());
    assert_eq!(game.score()["ann"], 20);
    assert_eq!(game.score()["bob"], 20);
}
