//! Best-first search over partial boards
//!
//! States are boards filled row by row with a cursor marking the next row.
//! The frontier is a min-priority queue keyed by a heuristic score:
//! 1. Start from the empty board at row 0 with score 0
//! 2. Pop the lowest-scored state (ties: oldest first)
//! 3. A state whose cursor reached N is a solution; record it
//! 4. Otherwise push one child per safe column of the cursor row
//!
//! Every child passes the safety check, so each complete state is conflict
//! free and the heuristic affects only the order solutions are found in.

pub mod heuristic;

use crate::board::Board;
use crate::conflict::is_safe;
use crate::error::SolveError;
use crate::search::cancel::StopCondition;
use crate::search::config::{Algorithm, Heuristic, SearchConfig};
use crate::search::result::{BestFirstResult, SearchStatistics};
use crate::search::SearchAlgorithm;
use log::{debug, info, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// A board with rows `0..cursor` holding one mutually safe queen each
#[derive(Debug, Clone)]
pub struct PartialState {
    pub board: Board,
    pub cursor: usize,
    pub score: usize,
    /// Insertion sequence number, used as tie-breaker
    order: u64,
}

impl PartialState {
    /// The empty board at row 0 with score 0
    pub fn root(n: usize) -> Self {
        Self {
            board: Board::new(n),
            cursor: 0,
            score: 0,
            order: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.board.size()
    }

    /// Place a queen at `(cursor, col)` on a copy of this state
    fn child(&self, col: usize, heuristic: Heuristic, order: u64) -> Self {
        let mut board = self.board.clone();
        board.place(self.cursor, col);
        let cursor = self.cursor + 1;
        let score = heuristic::score(heuristic, &board, cursor);
        Self {
            board,
            cursor,
            score,
            order,
        }
    }
}

impl PartialEq for PartialState {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.order == other.order
    }
}

impl Eq for PartialState {}

impl Ord for PartialState {
    // BinaryHeap is a max-heap: reverse so the lowest score (then oldest) pops first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for PartialState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exhaustive best-first N-Queens solver
pub struct BestFirstSearch {
    statistics: SearchStatistics,
}

impl BestFirstSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::BestFirst),
        }
    }
}

impl Default for BestFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for BestFirstSearch {
    type Output = BestFirstResult;

    fn search(
        &mut self,
        config: &SearchConfig,
        stop: &StopCondition,
    ) -> Result<BestFirstResult, SolveError> {
        self.reset();
        if config.n == 0 {
            return Err(SolveError::InvalidBoardSize(0));
        }
        let start_time = Instant::now();
        let n = config.n;
        let heuristic = config.best_first.heuristic;
        let cap = config.best_first.max_solutions;

        info!(
            "best-first search: n={}, heuristic={}, max_solutions={:?}",
            n, heuristic, cap
        );

        let mut solutions = Vec::new();
        let mut frontier = BinaryHeap::new();
        let mut next_order: u64 = 1;
        frontier.push(PartialState::root(n));
        self.statistics.states_generated = 1;
        self.statistics.peak_frontier = 1;

        if cap == Some(0) {
            self.statistics.truncated = true;
            frontier.clear();
        }

        loop {
            if stop.should_stop() {
                debug!(
                    "best-first search cancelled with {} state(s) pending",
                    frontier.len()
                );
                self.statistics.cancelled = true;
                break;
            }

            let Some(state) = frontier.pop() else {
                break;
            };

            if state.is_complete() {
                self.statistics.solutions_found += 1;
                trace!("solution #{}:\n{}", solutions.len() + 1, state.board);
                solutions.push(state.board);
                if cap.is_some_and(|max| solutions.len() >= max) {
                    self.statistics.truncated = !frontier.is_empty();
                    break;
                }
                continue;
            }

            self.statistics.states_expanded += 1;
            for col in 0..n {
                if is_safe(&state.board, state.cursor, col) {
                    frontier.push(state.child(col, heuristic, next_order));
                    next_order += 1;
                    self.statistics.states_generated += 1;
                }
            }
            self.statistics.peak_frontier = self.statistics.peak_frontier.max(frontier.len());

            if config.verbose && self.statistics.states_expanded % 100_000 == 0 {
                debug!(
                    "expanded {} states, frontier={}, solutions={}",
                    self.statistics.states_expanded,
                    frontier.len(),
                    solutions.len()
                );
            }
        }

        self.statistics.elapsed_time = start_time.elapsed();
        info!(
            "best-first search finished: {} solution(s), {} states expanded in {:.2?}",
            solutions.len(),
            self.statistics.states_expanded,
            self.statistics.elapsed_time
        );

        Ok(BestFirstResult {
            n,
            solutions,
            statistics: self.statistics.clone(),
        })
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::BestFirst);
    }
}
