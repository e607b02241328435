//! A subtraction game using the library, for use in tests.
//!
//! One pile of sticks; each turn removes one, two, or three of them.
//! Whoever faces an empty pile cannot move and loses. The theory is
//! closed-form (a pile that is a multiple of four is lost for the
//! player to move), which makes exact assertions about the searchers
//! easy.

use gametree::{Evaluation, Evaluator, Game, BEST_EVAL, WORST_EVAL};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Take {
    pub count: u8,
}

#[derive(Clone)]
pub struct Pile {
    pub sticks: u32,
    pub to_move: Side,
}

impl Pile {
    pub fn new(sticks: u32) -> Pile {
        Pile { sticks, to_move: Side::First }
    }
}

impl Default for Pile {
    fn default() -> Pile {
        Pile::new(13)
    }
}

pub struct Nim;

impl Game for Nim {
    type S = Pile;
    type M = Take;
    type P = Side;

    fn legal_moves(p: &Pile) -> Vec<Take> {
        (1..=3u8).filter(|&n| n as u32 <= p.sticks).map(|n| Take { count: n }).collect()
    }

    fn forecast(p: &Pile, m: Take) -> Pile {
        Pile { sticks: p.sticks - m.count as u32, to_move: p.to_move.other() }
    }

    fn active_player(p: &Pile) -> Side {
        p.to_move
    }

    fn opponent(s: Side) -> Side {
        s.other()
    }

    fn is_loser(p: &Pile, s: Side) -> bool {
        p.to_move == s && p.sticks == 0
    }

    fn is_winner(p: &Pile, s: Side) -> bool {
        Self::is_loser(p, s.other())
    }
}

/// Offers no guidance at all, forcing the searchers to resolve
/// positions on their own.
pub struct DumbEvaluator;

impl Evaluator for DumbEvaluator {
    type G = Nim;
    fn score(&self, p: &Pile, s: Side) -> Evaluation {
        if Nim::is_loser(p, s) {
            return WORST_EVAL;
        }
        if Nim::is_winner(p, s) {
            return BEST_EVAL;
        }
        0.0
    }
}

#[cfg(not(test))]
fn main() {
    use gametree::{Agent, Random};
    use std::time::Instant;

    let mut smart = Agent::iterative(DumbEvaluator, 5.0);
    let mut lucky: Agent<Nim, Random> = Agent::new(Random::new(), 5.0);

    let mut p = Pile::default();
    loop {
        if Nim::legal_moves(&p).is_empty() {
            println!("{:?} is out of sticks and loses", p.to_move);
            break;
        }
        let turn_start = Instant::now();
        let mut time_left = move || 100.0 - turn_start.elapsed().as_secs_f64() * 1e3;
        let m = match p.to_move {
            Side::First => smart.get_move(&p, &mut time_left),
            Side::Second => lucky.get_move(&p, &mut time_left),
        };
        match m {
            Some(m) => {
                println!("{:?} takes {} from {}", p.to_move, m.count, p.sticks);
                p = Nim::forecast(&p, m);
            }
            None => break,
        }
    }
}
