//! Undo quota and rollback tests.

use life_duel::core::{Options, Side, UndoQuota};
use life_duel::game::Game;

/// 6×6 board with a long seeding phase so no stone ever dies in these tests.
fn game(undos: UndoQuota) -> Game {
    Game::new(Options::new(6).with_seeding_rounds(10).with_undos(undos))
}

/// Commit the next free cell in row-major order.
fn play_next(game: &Game) -> Game {
    let size = game.options().size;
    for row in 0..size {
        for col in 0..size {
            if game.can_place(row, col) {
                return game.commit(row, col);
            }
        }
    }
    game.clone()
}

fn play(game: &Game, moves: usize) -> Game {
    (0..moves).fold(game.clone(), |g, _| play_next(&g))
}

// =============================================================================
// Quota accounting
// =============================================================================

#[test]
fn test_finite_quota_is_spent_per_side() {
    let g = play(&game(UndoQuota::Finite(2)), 2);
    assert_eq!(g.side(), Side::Player1);

    let g = g.undo();
    assert_eq!(g.undos_of(Side::Player1), UndoQuota::Finite(1));
    assert_eq!(g.undos_of(Side::Player2), UndoQuota::Finite(2));

    // Player2 to move after one more commit; its quota is untouched.
    let g = play(&g, 3);
    assert_eq!(g.side(), Side::Player2);
    assert_eq!(g.undos(), UndoQuota::Finite(2));

    let g = g.undo();
    assert_eq!(g.undos_of(Side::Player2), UndoQuota::Finite(1));
    assert_eq!(g.undos_of(Side::Player1), UndoQuota::Finite(1));
}

#[test]
fn test_quota_caps_successful_undos() {
    let quota = 3;
    let mut g = game(UndoQuota::Finite(quota));
    let mut successes = 0;

    // Player1 tries to undo after every full round.
    for _ in 0..8 {
        g = play(&g, 2);
        assert_eq!(g.side(), Side::Player1);
        let before = g.move_number();
        let undone = g.undo();
        if undone.move_number() != before {
            successes += 1;
            // re-play the round so the board keeps growing
            g = play(&undone, 2);
        }
    }

    assert_eq!(successes, quota);
    assert_eq!(g.undos_of(Side::Player1), UndoQuota::Finite(0));
    assert!(!g.can_undo());
}

#[test]
fn test_failed_undo_does_not_spend_quota() {
    let g = play(&game(UndoQuota::Finite(1)), 2).undo();
    assert_eq!(g.undos(), UndoQuota::Finite(0));

    // Blocked by the one-shot flag and by the empty quota: nothing changes.
    let again = g.undo();
    assert_eq!(again, g);

    let fresh = play(&game(UndoQuota::Finite(1)), 1);
    let blocked = fresh.undo();
    assert_eq!(blocked.undos(), UndoQuota::Finite(1));
    assert_eq!(blocked, fresh);
}

#[test]
fn test_unlimited_quota() {
    let mut g = play(&game(UndoQuota::Unlimited), 2);

    for _ in 0..8 {
        assert!(g.can_undo());
        g = g.undo();
        assert_eq!(g.undos(), UndoQuota::Unlimited);
        g = play(&g, 4);
    }
}

// =============================================================================
// Rollback shape
// =============================================================================

#[test]
fn test_history_shrinks_by_two_and_keeps_top() {
    let g = play(&game(UndoQuota::Unlimited), 6);
    assert_eq!(g.history().len(), 7);
    let expected_top = g.history().get(4).cloned();

    let undone = g.undo();

    assert_eq!(undone.history().len(), 5);
    assert_eq!(undone.move_number(), 5);
    assert_eq!(undone.history().top().cloned(), expected_top);
    assert_eq!(Some(undone.board().clone()), expected_top);
    for i in 0..5 {
        assert_eq!(undone.history().get(i), g.history().get(i));
    }
}

#[test]
fn test_undo_keeps_side_to_move() {
    for moves in 2..8 {
        let g = play(&game(UndoQuota::Unlimited), moves);
        let side = g.side();
        assert_eq!(g.undo().side(), side);
    }
}

#[test]
fn test_commit_after_undo_rearms_undo() {
    let g = play(&game(UndoQuota::Unlimited), 4).undo();
    assert!(!g.can_undo());

    let g = play_next(&g);
    assert!(g.can_undo());
}

#[test]
fn test_preview_blocks_undo_until_cancelled() {
    let g = play(&game(UndoQuota::Unlimited), 2);
    let hovering = g.preview(5, 5, Side::Player1);

    assert!(!hovering.can_undo());
    assert_eq!(hovering.undo(), hovering);
    assert_eq!(hovering.cancel_preview().undo().move_number(), 1);
}
