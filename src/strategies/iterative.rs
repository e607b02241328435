//! An implementation of iterative deepening evaluation.
//!
//! Search at depth 1, then start over at depth 2, then depth 3, etc.,
//! keeping the move from the last depth that finished before the
//! deadline. The work thrown away on re-searching shallow plies is
//! small next to the cost of the final depth, and it is what makes the
//! deadline safe to honor at any moment.

use super::alphabeta::AlphaBeta;
use crate::interface::*;

use std::time::{Duration, Instant};

/// Options to use for the iterative search engine.
#[derive(Clone, Copy)]
pub struct IterativeOptions {
    verbose: bool,
}

impl IterativeOptions {
    pub fn new() -> Self {
        IterativeOptions { verbose: false }
    }

    /// Print a progress line to stderr after each completed depth.
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Default for IterativeOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub struct IterativeSearch<E: Evaluator> {
    // Depth is supplied per round through search_root; the strategy's
    // own limit is never consulted.
    search: AlphaBeta<E>,
    opts: IterativeOptions,

    // Runtime stats for the last move generated.

    // Deepest round that fully completed.
    actual_depth: usize,
    // Nodes explored across all completed rounds.
    nodes_explored: usize,
    // Nodes explored in the round the deadline interrupted; this is
    // thrown-away work.
    interrupted_nodes: usize,
    prev_value: Evaluation,
    wall_time: Duration,
}

impl<E: Evaluator> IterativeSearch<E> {
    pub fn new(eval: E, opts: IterativeOptions) -> IterativeSearch<E> {
        IterativeSearch {
            search: AlphaBeta::new(eval, 0),
            opts,
            actual_depth: 0,
            nodes_explored: 0,
            interrupted_nodes: 0,
            prev_value: 0.0,
            wall_time: Duration::default(),
        }
    }

    /// Deepest depth that completed within the budget on the last call.
    pub fn actual_depth(&self) -> usize {
        self.actual_depth
    }

    /// Value of the last committed move.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Return a human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        let throughput =
            (self.nodes_explored + self.interrupted_nodes) as f64 / self.wall_time.as_secs_f64();
        format!(
            "Explored {} nodes to depth {}.\nInterrupted exploration of the next depth explored {} nodes.\n{} nodes/sec",
            self.nodes_explored, self.actual_depth, self.interrupted_nodes, throughput as usize
        )
    }
}

impl<E: Evaluator> Strategy<E::G> for IterativeSearch<E> {
    fn choose_move(
        &mut self, s: &<E::G as Game>::S, player: <E::G as Game>::P, clock: &mut Clock<'_>,
    ) -> Option<<E::G as Game>::M> {
        self.actual_depth = 0;
        self.nodes_explored = 0;
        self.interrupted_nodes = 0;
        let start_time = Instant::now();
        let mut best_move = None;
        let mut depth = 1;
        loop {
            self.search.stats.reset();
            match self.search.search_root(s, player, depth, clock) {
                None => {
                    // Deadline. Keep whatever the last completed round
                    // produced.
                    self.interrupted_nodes = self.search.stats.nodes_explored;
                    break;
                }
                Some((m, value)) => {
                    best_move = m;
                    self.actual_depth = depth;
                    self.prev_value = value;
                    self.nodes_explored += self.search.stats.nodes_explored;
                    if self.opts.verbose {
                        eprintln!(
                            "Depth {} complete: {} nodes, value {}",
                            depth, self.search.stats.nodes_explored, value
                        );
                    }
                    if m.is_none() || self.search.stats.horizon_hits == 0 {
                        // Nothing was cut off by the depth limit, so the
                        // round's values derive from terminal positions
                        // alone and deeper rounds would repeat them.
                        break;
                    }
                    depth += 1;
                }
            }
        }
        self.wall_time = start_time.elapsed();
        best_move
    }
}
