//! Depth-limited minimax with alpha-beta pruning.

use crate::board::Board;
use crate::config::MoveOrdering;
use crate::constants::SCORE_INF;
use crate::disc::Side;
use crate::eval;
use crate::move_list::MoveList;
use crate::search::search_context::SearchContext;
use crate::types::{Depth, Score};

/// Searches `board` with `side` to move.
///
/// Leaves are positions at `depth == 0` or where `side` has no legal move;
/// they are evaluated from `side`'s own perspective, whichever player the
/// caller is optimizing for. A side without moves is not passed: the
/// position is scored as is.
///
/// Maximizing nodes raise `alpha`, minimizing nodes lower `beta`, and the
/// remaining siblings are skipped once `beta <= alpha`. The returned value
/// is the best score seen at this node (fail-soft).
///
/// # Arguments
///
/// * `ctx` - Search configuration and node counter.
/// * `board` - Current position.
/// * `side` - Side to move.
/// * `depth` - Remaining plies.
/// * `maximizing` - Whether this node takes the maximum of its children.
/// * `alpha` - Lower bound of the search window.
/// * `beta` - Upper bound of the search window.
pub fn minimax(
    ctx: &mut SearchContext,
    board: &Board,
    side: Side,
    depth: Depth,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    ctx.increment_nodes();

    let moves_bb = board.generate_moves(side);
    if depth == 0 || moves_bb.is_empty() {
        return eval::evaluate(board, side, depth, ctx.config);
    }

    let move_list = MoveList::with_moves(board, side, moves_bb);
    let move_list = ordered_moves(ctx, board, side, depth, maximizing, move_list);

    if maximizing {
        let mut best_score = -SCORE_INF;
        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            let score = minimax(ctx, &next, side.opponent(), depth - 1, false, alpha, beta);
            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = SCORE_INF;
        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            let score = minimax(ctx, &next, side.opponent(), depth - 1, true, alpha, beta);
            best_score = best_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}

/// Sorts an interior node's moves according to the configured policy.
fn ordered_moves(
    ctx: &SearchContext,
    board: &Board,
    side: Side,
    depth: Depth,
    maximizing: bool,
    mut move_list: MoveList,
) -> MoveList {
    move_list.evaluate_moves(board, side, depth, ctx.config);
    match ctx.config.ordering() {
        MoveOrdering::NodeRelative if !maximizing => move_list.sort_ascending(),
        _ => move_list.sort_descending(),
    }
    move_list
}
