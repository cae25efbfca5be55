use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use termtoe::core::board::{Board, Cell};
use termtoe::{GameConfig, GameEngine, GameError, GameResult};

/// Longest run of any symbol anywhere on the board, found by walking every line start
fn longest_run(board: &Board) -> usize {
    let n = board.size() as isize;
    let mut best = 0;
    for row in 0..n {
        for col in 0..n {
            let Some(Cell::Mark(symbol)) = board.get(row as usize, col as usize) else {
                continue;
            };
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                let mut len = 0;
                let (mut r, mut c) = (row, col);
                while r >= 0 && c >= 0 && r < n && c < n
                    && board.get(r as usize, c as usize) == Some(Cell::Mark(symbol))
                {
                    len += 1;
                    r += dr;
                    c += dc;
                }
                best = best.max(len);
            }
        }
    }
    best
}

fn new_game(players: usize, grid_size: usize, seed: u64) -> GameEngine {
    let names = (0..players).map(|i| format!("player{}", i)).collect();
    GameEngine::with_rng(GameConfig::new(names, grid_size), &mut StdRng::seed_from_u64(seed))
        .unwrap()
}

proptest! {
    #[test]
    fn moves_follow_the_rules(
        players in 2usize..=4,
        grid_size in 5usize..=8,
        seed in any::<u64>(),
        moves in prop::collection::vec((0usize..8, 0usize..8), 1..120),
    ) {
        let mut game = new_game(players, grid_size, seed);
        let need = grid_size.div_ceil(2);
        let mut placed = 0;

        for (row, col) in moves {
            if row >= grid_size || col >= grid_size {
                let before = game.clone();
                let is_coordinate_error = matches!(
                    game.apply_move(row, col),
                    Err(GameError::InvalidCoordinate { .. })
                );
                prop_assert!(is_coordinate_error || game.is_over());
                prop_assert_eq!(game.board(), before.board());
                continue;
            }

            if game.is_over() {
                prop_assert_eq!(game.apply_move(row, col), Err(GameError::GameAlreadyOver));
                continue;
            }

            let before = game.clone();
            let mover = game.current_player().name.clone();
            let result = game.apply_move(row, col).unwrap();

            if result == GameResult::Occupied {
                prop_assert_eq!(game.board(), before.board());
                prop_assert_eq!(game.moves_left(), before.moves_left());
                prop_assert_eq!(game.current_player_index(), before.current_player_index());
                continue;
            }

            placed += 1;
            prop_assert_eq!(game.moves_left(), grid_size * grid_size - placed);

            // No run existed before this move, so a full scan sees only runs it made
            let won = longest_run(game.board()) >= need;
            match result {
                GameResult::Win(name) => {
                    prop_assert!(won);
                    prop_assert_eq!(name, mover);
                }
                GameResult::Draw => {
                    prop_assert!(!won);
                    prop_assert_eq!(game.moves_left(), 0);
                }
                GameResult::InProgress => {
                    prop_assert!(!won);
                    prop_assert_eq!(game.current_player_index(), placed % players);
                }
                GameResult::Occupied => unreachable!(),
            }
        }
    }

    #[test]
    fn after_move_matches_apply_move(
        grid_size in 5usize..=25,
        row in 0usize..25,
        col in 0usize..25,
    ) {
        prop_assume!(row < grid_size && col < grid_size);
        let game = new_game(2, grid_size, 0);

        let (next, result) = game.after_move(row, col).unwrap();
        let mut mutated = game.clone();
        prop_assert_eq!(mutated.apply_move(row, col).unwrap(), result);
        prop_assert_eq!(next.board(), mutated.board());
        prop_assert_eq!(game.moves_left(), grid_size * grid_size);
    }

    #[test]
    fn symbols_are_distinct(players in 2usize..=4, seed in any::<u64>()) {
        let game = new_game(players, 5, seed);
        let mut symbols: Vec<char> = game.players().iter().map(|p| p.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        prop_assert_eq!(symbols.len(), players);
    }
}
