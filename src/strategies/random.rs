//! A strategy that randomly chooses a move, for use in tests and as a
//! baseline opponent.

use crate::interface::{Clock, Game, Strategy};
use rand::rngs::ThreadRng;
use rand::Rng;

pub struct Random {
    rng: ThreadRng,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl<G: Game> Strategy<G> for Random {
    fn choose_move(&mut self, s: &G::S, _player: G::P, _clock: &mut Clock<'_>) -> Option<G::M> {
        let moves = G::legal_moves(s);
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.gen_range(0..moves.len())])
        }
    }
}
