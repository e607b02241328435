//! Depth-limited minimax with alpha-beta pruning.
//!
//! Same terminal and horizon semantics as the plain strategy. Bounds on
//! the achievable value are threaded through the recursion and a branch
//! is abandoned once it provably cannot matter to any ancestor.
//! Fail-soft: a cutoff returns the value actually computed, not the
//! bound that triggered it. Pruning never changes the chosen move, only
//! how many nodes it costs.

use super::util::SearchStats;
use crate::interface::*;

pub struct AlphaBeta<E: Evaluator> {
    max_depth: usize,
    eval: E,
    pub(super) stats: SearchStats,
    prev_value: Evaluation,
}

impl<E: Evaluator> AlphaBeta<E> {
    pub fn new(eval: E, max_depth: usize) -> AlphaBeta<E> {
        AlphaBeta { max_depth, eval, stats: SearchStats::default(), prev_value: 0.0 }
    }

    /// Value of the move chosen by the last search.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// States visited by the last search.
    pub fn nodes_explored(&self) -> usize {
        self.stats.nodes_explored
    }

    // `alpha` is the best value some maximizing ancestor can already
    // force, `beta` the same for a minimizing ancestor; alpha <= beta
    // at entry. Depth counts down to the horizon.
    fn value(
        &mut self, s: &<E::G as Game>::S, player: <E::G as Game>::P, depth: usize,
        mut alpha: Evaluation, mut beta: Evaluation, maximizing: bool, clock: &mut Clock<'_>,
    ) -> Option<Evaluation> {
        if clock.expired() {
            return None;
        }
        self.stats.nodes_explored += 1;
        let moves = E::G::legal_moves(s);
        if moves.is_empty() {
            return Some(if maximizing { WORST_EVAL } else { BEST_EVAL });
        }
        if depth == 0 {
            self.stats.horizon_hits += 1;
            return Some(self.eval.score(s, player));
        }
        if maximizing {
            let mut sc = WORST_EVAL;
            for m in moves {
                let value =
                    self.value(&E::G::forecast(s, m), player, depth - 1, alpha, beta, false, clock)?;
                sc = sc.max(value);
                if sc >= beta {
                    // The minimizing ancestor already has a better
                    // option; remaining siblings are irrelevant.
                    return Some(sc);
                }
                alpha = alpha.max(sc);
                if beta <= alpha {
                    break;
                }
            }
            Some(sc)
        } else {
            let mut sc = BEST_EVAL;
            for m in moves {
                let value =
                    self.value(&E::G::forecast(s, m), player, depth - 1, alpha, beta, true, clock)?;
                sc = sc.min(value);
                if sc <= alpha {
                    return Some(sc);
                }
                beta = beta.min(sc);
                if beta <= alpha {
                    break;
                }
            }
            Some(sc)
        }
    }

    /// Search to exactly `depth` plies (at least one); the deepening
    /// driver calls this on its own schedule.
    ///
    /// `None` means the clock fired somewhere inside and the round is
    /// unusable. Otherwise the chosen move (`None` for a position with
    /// no legal moves) and its value. One alpha/beta pair is carried
    /// across the root's siblings, and only the bound belonging to the
    /// root's own turn tightens here; the other direction belongs to
    /// the levels below.
    pub(crate) fn search_root(
        &mut self, s: &<E::G as Game>::S, player: <E::G as Game>::P, depth: usize,
        clock: &mut Clock<'_>,
    ) -> Option<(Option<<E::G as Game>::M>, Evaluation)> {
        debug_assert!(depth > 0);
        if clock.expired() {
            return None;
        }
        let moves = E::G::legal_moves(s);
        let maximizing = E::G::active_player(s) == player;
        let mut best_move = match moves.first() {
            Some(&m) => m,
            // The player to move is already stuck.
            None => return Some((None, if maximizing { WORST_EVAL } else { BEST_EVAL })),
        };
        let mut alpha = WORST_EVAL;
        let mut beta = BEST_EVAL;
        let mut best = if maximizing { WORST_EVAL } else { BEST_EVAL };
        for m in moves {
            let value = self.value(
                &E::G::forecast(s, m),
                player,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                clock,
            )?;
            if maximizing {
                if value > best {
                    best = value;
                    best_move = m;
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_move = m;
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        self.prev_value = best;
        Some((Some(best_move), best))
    }
}

impl<E: Evaluator> Strategy<E::G> for AlphaBeta<E> {
    fn choose_move(
        &mut self, s: &<E::G as Game>::S, player: <E::G as Game>::P, clock: &mut Clock<'_>,
    ) -> Option<<E::G as Game>::M> {
        if self.max_depth == 0 {
            return None;
        }
        self.stats.reset();
        self.search_root(s, player, self.max_depth, clock).and_then(|(m, _)| m)
    }
}
