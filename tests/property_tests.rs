//! Property-based tests for the automaton and the turn protocol.

use life_duel::core::{Board, CellStatus, Options, Player, Side, UndoQuota};
use life_duel::game::{Game, Phase};
use life_duel::rules::{detect_winner, finalize_compute, preview_compute, Topology};
use proptest::prelude::*;

/// Arbitrary board of side 1..8, including Dying/Reviving markers.
fn any_board() -> impl Strategy<Value = Board> {
    (1usize..8)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(0u8..7, n * n)))
        .prop_map(|(n, codes)| {
            let mut board = Board::new(n);
            for (i, code) in codes.into_iter().enumerate() {
                let status = CellStatus::from_code(code).unwrap_or_default();
                board.set(i / n, i % n, status);
            }
            board
        })
}

/// Arbitrary settled board (only empty and stable cells).
fn settled_board() -> impl Strategy<Value = Board> {
    any_board().prop_map(|b| b.map(|_, _, s| life_duel::rules::settle(s)))
}

fn any_topology() -> impl Strategy<Value = Topology> {
    prop_oneof![Just(Topology::Bounded), Just(Topology::Toroidal)]
}

fn shift(board: &Board, dr: usize, dc: usize) -> Board {
    let n = board.size();
    board.map(|r, c, _| {
        board
            .get((r + n - dr % n) % n, (c + n - dc % n) % n)
            .unwrap_or_default()
    })
}

// =============================================================================
// Automaton
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_finalize_output_is_settled(board in any_board(), topology in any_topology()) {
        let next = finalize_compute(&board, topology);
        prop_assert!(next.is_settled());
        prop_assert_eq!(next.size(), board.size());
    }

    #[test]
    fn test_finalize_ignores_preview_markers(board in any_board(), topology in any_topology()) {
        // A preview keeps ownership intact, so committing from it lands on
        // the same settled board as committing from the raw one.
        let previewed = preview_compute(&board, topology);
        prop_assert_eq!(finalize_compute(&previewed, topology), finalize_compute(&board, topology));
    }

    #[test]
    fn test_preview_settles_to_finalize(board in settled_board(), topology in any_topology()) {
        let settled = preview_compute(&board, topology).map(|_, _, s| life_duel::rules::settle(s));
        prop_assert_eq!(settled, finalize_compute(&board, topology));
    }

    #[test]
    fn test_torus_is_translation_invariant(
        board in settled_board(),
        dr in 0usize..8,
        dc in 0usize..8,
    ) {
        let stepped_then_shifted = shift(&finalize_compute(&board, Topology::Toroidal), dr, dc);
        let shifted_then_stepped = finalize_compute(&shift(&board, dr, dc), Topology::Toroidal);
        prop_assert_eq!(stepped_then_shifted, shifted_then_stepped);
    }

    #[test]
    fn test_empty_board_stays_empty(n in 1usize..12, topology in any_topology()) {
        let empty = Board::new(n);
        prop_assert_eq!(finalize_compute(&empty, topology), empty.clone());
        prop_assert_eq!(detect_winner(&empty), Player::Draw);
    }
}

// =============================================================================
// Turn protocol
// =============================================================================

fn moves(max: usize, len: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..max, 0..max), 0..len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_seeding_commits_place_stones_raw(cells in moves(8, 16)) {
        // 8 seeding rounds cover all 16 moves.
        let mut game = Game::new(Options::new(8).with_seeding_rounds(8));
        let mut expected = Board::new(8);

        for (row, col) in cells {
            let side = game.side();
            if expected.get(row, col) == Some(CellStatus::None) {
                expected.set(row, col, CellStatus::stable(side));
            }
            game = game.commit(row, col);

            prop_assert_eq!(game.phase(), Phase::Seeding);
            prop_assert_eq!(game.winner(), Player::None);
            prop_assert_eq!(game.board(), &expected);
        }
    }

    #[test]
    fn test_history_length_tracks_move_number(
        cells in moves(6, 40),
        seeding in 0u32..4,
        wrap in any::<bool>(),
    ) {
        let options = Options::new(6)
            .with_seeding_rounds(seeding)
            .with_wrap(wrap)
            .with_undos(UndoQuota::Unlimited);
        let mut game = Game::new(options);

        for (i, (row, col)) in cells.into_iter().enumerate() {
            game = if i % 5 == 4 { game.undo() } else { game.commit(row, col) };
            prop_assert_eq!(game.history().len(), game.move_number() as usize);
            prop_assert!(game.history().iter().all(Board::is_settled));
        }
    }

    #[test]
    fn test_commit_matches_manual_step(cells in moves(5, 12), wrap in any::<bool>()) {
        let topology = Topology::from_wrap(wrap);
        let mut game = Game::new(Options::new(5).with_seeding_rounds(1).with_wrap(wrap));

        for (row, col) in cells {
            if game.is_over() || !game.can_place(row, col) {
                continue;
            }
            let seeding = game.is_seeding();
            let mut placed = game.board().clone();
            placed.set(row, col, CellStatus::stable(game.side()));

            let next = game.commit(row, col);
            let expected = if seeding { placed } else { finalize_compute(&placed, topology) };
            prop_assert_eq!(next.board(), &expected);
            game = next;
        }
    }

    #[test]
    fn test_operations_never_modify_their_input(
        cells in moves(6, 20),
        side in prop_oneof![Just(Side::Player1), Just(Side::Player2)],
    ) {
        let mut game = Game::new(Options::new(5).with_seeding_rounds(1));

        for (row, col) in cells {
            let snapshot = game.clone();
            let _ = game.preview(row, col, side);
            let _ = game.cancel_preview();
            let _ = game.undo();
            let next = game.commit(row, col);
            prop_assert_eq!(&game, &snapshot);
            game = next;
        }
    }
}
