//! Property tests over random play.

use blockdrop::core::{level_for_lines, Game, RandomPieces};
use blockdrop::types::GameAction;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Act(GameAction),
    Tick(u32),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => prop_oneof![
            Just(GameAction::MoveLeft),
            Just(GameAction::MoveRight),
            Just(GameAction::SoftDrop),
            Just(GameAction::HardDrop),
            Just(GameAction::Rotate),
        ]
        .prop_map(Step::Act),
        1 => Just(Step::Act(GameAction::Restart)),
        3 => (0u32..1_000).prop_map(Step::Tick),
    ]
}

proptest! {
    #[test]
    fn play_keeps_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..300)) {
        let mut game = Game::new(RandomPieces::seeded(seed));
        let mut episode = game.episode_id();
        let (mut score, mut lines) = (0, 0);

        for step in steps {
            match step {
                Step::Act(action) => { game.apply_action(action); }
                Step::Tick(ms) => { game.tick(ms); }
            }

            if game.episode_id() != episode {
                episode = game.episode_id();
                prop_assert_eq!((game.score(), game.lines(), game.level()), (0, 0, 1));
                score = 0;
                lines = 0;
            }

            prop_assert!(game.score() >= score);
            prop_assert!(game.lines() >= lines);
            score = game.score();
            lines = game.lines();

            prop_assert_eq!(game.level(), level_for_lines(game.lines()));
            prop_assert_eq!(game.level(), game.lines() / 10 + 1);
            if !game.game_over() {
                prop_assert!(game.state().fits(&game.current()));
            }
        }
    }

    #[test]
    fn game_over_is_frozen(seed in any::<u64>(), action in prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::SoftDrop),
        Just(GameAction::HardDrop),
        Just(GameAction::Rotate),
    ]) {
        let mut game = Game::new(RandomPieces::seeded(seed));
        // Hard drops without moving stack up the middle quickly.
        for _ in 0..200 {
            if game.game_over() {
                break;
            }
            game.hard_drop();
        }
        prop_assert!(game.game_over());

        let before = game.snapshot();
        game.apply_action(action);
        game.tick(5_000);
        prop_assert_eq!(game.snapshot(), before);
    }
}
