//! Property-based tests for the incremental scorer

use proptest::prelude::*;

use crate::{GameConfig, GameEngine, GameError};
use crate::types::{OverflowPolicy, PERFECT_SCORE};

/// Raw draws are folded onto the pins still standing, so every roll is legal.
fn raw_rolls(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=10, 0..max_len)
}

fn legal(game: &GameEngine, raw: u8) -> u8 {
    raw % (game.standing_pins() + 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the running score always equals a from-scratch replay,
    /// and decomposes into regular-frame pins plus credited bonuses.
    #[test]
    fn prop_incremental_score_matches_replay(raw in raw_rolls(30)) {
        let mut game = GameEngine::default();
        for r in raw {
            if game.is_over() {
                prop_assert_eq!(game.roll(0), Err(GameError::GameOver));
                break;
            }
            let pins = legal(&game, r);
            prop_assert!(game.roll(pins).is_ok());

            let sheet = game.sheet("guest").unwrap();
            let summary = game.player_summary("guest").unwrap();
            prop_assert_eq!(summary.score, sheet.replay_score());

            let bonus_frame_pins: u32 = sheet
                .frames()
                .filter(|f| f.is_bonus())
                .map(|f| u32::from(f.total()))
                .sum();
            prop_assert_eq!(
                summary.score,
                sheet.pin_total() + summary.bonus_total() + bonus_frame_pins
            );
        }
    }

    /// Property: a full game never exceeds 300 and always ends within 21 rolls.
    #[test]
    fn prop_games_end_in_bounds(raw in prop::collection::vec(0u8..=10, 21..40)) {
        let config = GameConfig::default().with_overflow(OverflowPolicy::Ignore);
        let mut game = GameEngine::with_config(config).unwrap();
        let mut thrown = 0;
        for r in raw {
            if game.is_over() {
                break;
            }
            let pins = legal(&game, r);
            game.roll(pins).unwrap();
            thrown += 1;
        }
        prop_assert!(game.is_over());
        prop_assert!(thrown <= 21);
        prop_assert!(game.score()["guest"] <= PERFECT_SCORE);
    }

    /// Property: rejected rolls never change the game.
    #[test]
    fn prop_illegal_rolls_do_not_mutate(raw in raw_rolls(25), extra in 1u8..=20) {
        let mut game = GameEngine::default();
        for r in raw {
            if game.is_over() {
                break;
            }
            let pins = legal(&game, r);
            game.roll(pins).unwrap();
        }
        if !game.is_over() {
            let before = game.summary();
            // Bonus frames offer ten pins, so this is always past the cap.
            let too_many = game.standing_pins() + extra;
            let rejected = matches!(game.roll(too_many), Err(GameError::IllegalRoll { .. }));
            prop_assert!(rejected);
            prop_assert_eq!(game.summary(), before);
        }
    }

    /// Property: interleaved players never see each other's pins.
    #[test]
    fn prop_players_are_independent(raw in raw_rolls(60)) {
        let mut together = GameEngine::new(["ann", "bob"]).unwrap();
        let mut ann_alone = GameEngine::new(["ann"]).unwrap();
        let mut bob_alone = GameEngine::new(["bob"]).unwrap();

        for r in raw {
            if together.is_over() {
                break;
            }
            let pins = legal(&together, r);
            match together.current_player() {
                "ann" => ann_alone.roll(pins).unwrap(),
                _ => bob_alone.roll(pins).unwrap(),
            }
            together.roll(pins).unwrap();
        }

        prop_assert_eq!(together.player_summary("ann"), ann_alone.player_summary("ann"));
        prop_assert_eq!(together.player_summary("bob"), bob_alone.player_summary("bob"));
    }
}
