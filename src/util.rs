//! Utility functions for testing, and tests.

use crate::agent::Agent;
use crate::interface::{Game, Strategy};
use std::time::Instant;

/// Play a complete, new game between two agents, giving each
/// `budget_ms` of wall clock per move.
///
/// The first agent owns the opening move. Returns the index of the
/// winning agent; the player left without a legal move has lost, and an
/// agent that fails to produce a move forfeits.
pub fn battle_royale<G, S1, S2>(
    a1: &mut Agent<G, S1>, a2: &mut Agent<G, S2>, budget_ms: f64,
) -> usize
where
    G: Game,
    G::S: Default,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let mut state = G::S::default();
    let mut s = 0;
    loop {
        if G::legal_moves(&state).is_empty() {
            return 1 - s;
        }
        let turn_start = Instant::now();
        let mut time_left = move || budget_ms - turn_start.elapsed().as_secs_f64() * 1e3;
        let m = if s == 0 {
            a1.get_move(&state, &mut time_left)
        } else {
            a2.get_move(&state, &mut time_left)
        };
        match m {
            Some(m) => state = G::forecast(&state, m),
            None => return 1 - s,
        }
        s = 1 - s;
    }
}
