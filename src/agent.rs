//! Binds a search strategy to a per-turn time budget.

use crate::interface::{Clock, Evaluator, Game, Strategy};
use crate::strategies::iterative::{IterativeOptions, IterativeSearch};
use crate::strategies::minimax::Minimax;
use std::marker::PhantomData;

/// A game-playing agent: one strategy, one timeout threshold, one
/// entry point for the game loop.
pub struct Agent<G: Game, S: Strategy<G>> {
    strategy: S,
    threshold_ms: f64,
    _game: PhantomData<G>,
}

impl<G: Game, S: Strategy<G>> Agent<G, S> {
    /// `threshold_ms` is the remaining time below which search stops;
    /// it must leave enough slack for the deepest unwind to return.
    pub fn new(strategy: S, threshold_ms: f64) -> Agent<G, S> {
        Agent { strategy, threshold_ms, _game: PhantomData }
    }

    /// Choose a move for the player whose turn it is at `s`.
    ///
    /// `time_left` reports the milliseconds remaining in the current
    /// turn. Returns `None` if there is no legal move, or if the clock
    /// ran out before any search result was completed. Deadline
    /// cancellations never escape this call.
    pub fn get_move(&mut self, s: &G::S, time_left: &mut dyn FnMut() -> f64) -> Option<G::M> {
        let mut clock = Clock::new(time_left, self.threshold_ms);
        self.strategy.choose_move(s, G::active_player(s), &mut clock)
    }

    /// Access the wrapped strategy, e.g. for its search stats.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<E: Evaluator> Agent<E::G, Minimax<E>> {
    /// An agent searching every turn to the same fixed depth.
    pub fn fixed_depth(eval: E, depth: usize, threshold_ms: f64) -> Self {
        Agent::new(Minimax::new(eval, depth), threshold_ms)
    }
}

impl<E: Evaluator> Agent<E::G, IterativeSearch<E>> {
    /// An agent deepening its pruned search until the clock interferes.
    pub fn iterative(eval: E, threshold_ms: f64) -> Self {
        Agent::new(IterativeSearch::new(eval, IterativeOptions::new()), threshold_ms)
    }
}
