//! Scoring policies for ordering the best-first frontier

use crate::board::Board;
use crate::conflict;
use crate::search::config::Heuristic;

/// Score a partial board whose rows `0..cursor` are filled.
///
/// Lower scores are expanded first. The score only orders exploration;
/// correctness rests on the safety check applied at every placement.
pub fn score(heuristic: Heuristic, board: &Board, cursor: usize) -> usize {
    let n = board.size();
    match heuristic {
        Heuristic::Constant => 0,
        Heuristic::Depth => n - cursor,
        Heuristic::NextRowConflicts => {
            if cursor >= n {
                0
            } else {
                conflict::attacked_columns(board, cursor)
            }
        }
    }
}
