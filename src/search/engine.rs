//! Iterative deepening minimax search with alpha-beta pruning.
//!
//! The engine searches depth 1, then 2, and so on until the wall-clock
//! budget expires, always answering from the deepest iteration that ran to
//! completion. Cancellation is an explicit per-episode token: a timer thread
//! flips an atomic flag after the budget elapses and the search checks it
//! cooperatively, between root moves and at leaf evaluation, so an episode
//! may overrun by at most one node visit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::board::apply::{apply_move, undo_move};
use crate::board::position::Position;
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::moves::generator::generate_legal_moves;
use crate::search::evaluation::Evaluation;
use crate::search::transposition::{Bound, TableEntry, TableStats, TranspositionTable};
use crate::search::zobrist::ZobristTable;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Wall-clock budget per `choose_move` call.
    pub budget: Duration,
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: Duration::from_millis(200),
            max_depth: 32,
        }
    }
}

/// Diagnostics for one completed `choose_move` episode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchReport {
    /// Deepest iteration that ran to completion.
    pub depth: u8,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub table_stats: TableStats,
}

pub struct SearchEngine<E: Evaluation> {
    evaluation: E,
    zobrist: ZobristTable,
    table: TranspositionTable,
    config: SearchConfig,
    nodes: u64,
}

impl<E: Evaluation> SearchEngine<E> {
    /// The root side to move is treated as the maximizing player, so the
    /// evaluation's perspective must be that side for scores to make sense.
    pub fn new(evaluation: E, config: SearchConfig) -> Self {
        Self {
            evaluation,
            zobrist: ZobristTable::new(),
            table: TranspositionTable::new(),
            config,
            nodes: 0,
        }
    }

    pub fn choose_move(&mut self, position: &mut Position) -> ChessResult<Option<Move>> {
        self.choose_move_with_report(position).map(|(mv, _)| mv)
    }

    /// Runs a full timed episode and returns the best root move together
    /// with search diagnostics.
    ///
    /// `Ok(None)` means the side to move has no legal move at all; the
    /// caller decides whether that is mate or stalemate. `NoMoveFound` is
    /// returned only when the budget expired before depth 1 completed.
    pub fn choose_move_with_report(
        &mut self,
        position: &mut Position,
    ) -> ChessResult<(Option<Move>, SearchReport)> {
        let started_at = Instant::now();
        self.nodes = 0;

        if generate_legal_moves(position)?.is_empty() {
            let report = SearchReport {
                elapsed: started_at.elapsed(),
                table_stats: self.table.stats(),
                ..SearchReport::default()
            };
            return Ok((None, report));
        }

        let stop = Arc::new(AtomicBool::new(false));
        spawn_budget_timer(Arc::clone(&stop), self.config.budget);

        let mut completed: Option<(Move, i32, u8)> = None;
        for depth in 1..=self.config.max_depth {
            if stop.load(Ordering::Relaxed) {
                break;
            }
            match self.search_root(position, depth, &stop)? {
                Some((mv, score)) => completed = Some((mv, score, depth)),
                // The iteration was cut off mid-way; its partial answer is
                // discarded in favor of the previous full one.
                None => break,
            }
        }

        match completed {
            Some((mv, score, depth)) => {
                let report = SearchReport {
                    depth,
                    score,
                    nodes: self.nodes,
                    elapsed: started_at.elapsed(),
                    table_stats: self.table.stats(),
                };
                Ok((Some(mv), report))
            }
            None => Err(ChessError::NoMoveFound),
        }
    }

    /// One fixed-depth root iteration. Returns `None` if the stop flag was
    /// raised before every root move was searched.
    fn search_root(
        &mut self,
        position: &mut Position,
        depth: u8,
        stop: &AtomicBool,
    ) -> ChessResult<Option<(Move, i32)>> {
        let key = self.zobrist.fingerprint(position);
        let mut moves = generate_legal_moves(position)?;
        // Searching the previous iteration's best move first tightens the
        // window early and sharpens pruning for the rest.
        if let Some(previous_best) = self.table.best_move(key) {
            if let Some(index) = moves.iter().position(|mv| *mv == previous_best) {
                moves.swap(0, index);
            }
        }

        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            if stop.load(Ordering::Relaxed) {
                return Ok(None);
            }
            apply_move(position, mv)?;
            let result = self.alpha_beta(position, depth - 1, alpha, beta, false, stop);
            undo_move(position)?;
            let score = result?;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }
        }
        if stop.load(Ordering::Relaxed) {
            return Ok(None);
        }

        if let Some((mv, score)) = best {
            self.table.record(TableEntry {
                key,
                depth,
                bound: Bound::Exact,
                score,
                best_move: Some(mv),
            });
        }
        Ok(best)
    }

    fn alpha_beta(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        stop: &AtomicBool,
    ) -> ChessResult<i32> {
        self.nodes += 1;

        let key = self.zobrist.fingerprint(position);
        if let Some(score) = self.table.probe(key, depth, alpha, beta) {
            return Ok(score);
        }

        if depth == 0 || stop.load(Ordering::Relaxed) {
            let score = self.evaluation.evaluate(position);
            self.table.record(TableEntry {
                key,
                depth: 0,
                bound: Bound::Exact,
                score,
                best_move: None,
            });
            return Ok(score);
        }

        let moves = generate_legal_moves(position)?;
        if moves.is_empty() {
            // Mate or stalemate; the static evaluation is the final word on
            // this line.
            let score = self.evaluation.evaluate(position);
            self.table.record(TableEntry {
                key,
                depth,
                bound: Bound::Exact,
                score,
                best_move: None,
            });
            return Ok(score);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;
        for mv in moves {
            apply_move(position, mv)?;
            let result = self.alpha_beta(position, depth - 1, alpha, beta, !maximizing, stop);
            undo_move(position)?;
            let score = result?;

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }

            if beta <= alpha {
                let bound = if maximizing { Bound::Lower } else { Bound::Upper };
                self.table.record(TableEntry {
                    key,
                    depth,
                    bound,
                    score: best,
                    best_move,
                });
                return Ok(best);
            }
        }

        self.table.record(TableEntry {
            key,
            depth,
            bound: Bound::Exact,
            score: best,
            best_move,
        });
        Ok(best)
    }
}

/// Arms the episode's cancellation token. The thread is detached; it holds
/// only its own clone of the flag, so a search that finishes early simply
/// lets it expire in the background.
fn spawn_budget_timer(stop: Arc<AtomicBool>, budget: Duration) {
    thread::spawn(move || {
        thread::sleep(budget);
        stop.store(true, Ordering::Relaxed);
    });
}
