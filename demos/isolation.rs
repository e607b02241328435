//! Knight Isolation using the library, for use in tests and demos.
//!
//! Two knights share a small rectangular board. The active player hops
//! like a chess knight onto an open square (the opening hop may land
//! anywhere), and every square ever visited stays blocked for the rest
//! of the game. The first player left without a hop loses; there are no
//! draws.

use gametree::{Evaluation, Evaluator, Game, BEST_EVAL, WORST_EVAL};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Knight {
    White,
    Black,
}

impl Knight {
    pub fn other(self) -> Knight {
        match self {
            Knight::White => Knight::Black,
            Knight::Black => Knight::White,
        }
    }
}

/// One square of the board, and therefore one move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Hop {
    pub row: u8,
    pub col: u8,
}

#[derive(Clone)]
pub struct Board {
    width: u8,
    height: u8,
    // Bit row * width + col is set for every square ever visited,
    // including the squares the knights stand on.
    visited: u64,
    locations: [Option<Hop>; 2],
    to_move: Knight,
}

const KNIGHT_OFFSETS: [(i16, i16); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

impl Board {
    /// An empty board; neither knight has been placed yet.
    pub fn new(width: u8, height: u8) -> Board {
        assert!(width as u32 * height as u32 <= 64, "board does not fit in a bitboard");
        Board { width, height, visited: 0, locations: [None, None], to_move: Knight::White }
    }

    /// A mid-game position, for tests: the given squares are already
    /// blocked, both knights are placed, and it is `to_move`'s turn.
    pub fn setup(
        width: u8, height: u8, blocked: &[Hop], white: Hop, black: Hop, to_move: Knight,
    ) -> Board {
        let mut b = Board::new(width, height);
        for &h in blocked {
            b.visited |= b.bit(h);
        }
        b.visited |= b.bit(white);
        b.visited |= b.bit(black);
        b.locations = [Some(white), Some(black)];
        b.to_move = to_move;
        b
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn location(&self, k: Knight) -> Option<Hop> {
        self.locations[k as usize]
    }

    fn bit(&self, h: Hop) -> u64 {
        1 << (h.row as u32 * self.width as u32 + h.col as u32)
    }

    fn open(&self, row: i16, col: i16) -> bool {
        row >= 0
            && row < self.height as i16
            && col >= 0
            && col < self.width as i16
            && self.visited & self.bit(Hop { row: row as u8, col: col as u8 }) == 0
    }

    /// The hops `k` could make if it were their turn.
    pub fn hops_for(&self, k: Knight) -> Vec<Hop> {
        match self.location(k) {
            // Opening hop: anywhere still open.
            None => {
                let mut all = Vec::new();
                for row in 0..self.height {
                    for col in 0..self.width {
                        if self.open(row as i16, col as i16) {
                            all.push(Hop { row, col });
                        }
                    }
                }
                all
            }
            Some(at) => KNIGHT_OFFSETS
                .iter()
                .map(|&(dr, dc)| (at.row as i16 + dr, at.col as i16 + dc))
                .filter(|&(r, c)| self.open(r, c))
                .map(|(r, c)| Hop { row: r as u8, col: c as u8 })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(7, 7)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let here = Hop { row, col };
                let c = if self.location(Knight::White) == Some(here) {
                    'W'
                } else if self.location(Knight::Black) == Some(here) {
                    'B'
                } else if self.visited & self.bit(here) != 0 {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct Isolation;

impl Game for Isolation {
    type S = Board;
    type M = Hop;
    type P = Knight;

    fn legal_moves(b: &Board) -> Vec<Hop> {
        b.hops_for(b.to_move)
    }

    fn forecast(b: &Board, m: Hop) -> Board {
        let mut next = b.clone();
        let bit = next.bit(m);
        next.visited |= bit;
        next.locations[b.to_move as usize] = Some(m);
        next.to_move = b.to_move.other();
        next
    }

    fn active_player(b: &Board) -> Knight {
        b.to_move
    }

    fn opponent(p: Knight) -> Knight {
        p.other()
    }

    fn is_loser(b: &Board, p: Knight) -> bool {
        b.to_move == p && b.hops_for(p).is_empty()
    }

    fn is_winner(b: &Board, p: Knight) -> bool {
        Self::is_loser(b, p.other())
    }
}

/// Difference in mobility, weighted slightly toward the player's own
/// freedom of movement.
pub struct MobilityEvaluator;

impl Evaluator for MobilityEvaluator {
    type G = Isolation;
    fn score(&self, b: &Board, p: Knight) -> Evaluation {
        if Isolation::is_loser(b, p) {
            return WORST_EVAL;
        }
        if Isolation::is_winner(b, p) {
            return BEST_EVAL;
        }
        let own = b.hops_for(p).len() as f64;
        let opp = b.hops_for(p.other()).len() as f64;
        1.2 * own - opp
    }
}

/// Mobility difference scaled by how far the player's follow-up squares
/// sit from the center of the board, rewarding room on the rim once the
/// middle fills up.
pub struct CenterDistanceEvaluator;

impl Evaluator for CenterDistanceEvaluator {
    type G = Isolation;
    fn score(&self, b: &Board, p: Knight) -> Evaluation {
        if Isolation::is_loser(b, p) {
            return WORST_EVAL;
        }
        if Isolation::is_winner(b, p) {
            return BEST_EVAL;
        }
        let center_col = b.width() as f64 / 2.0;
        let center_row = b.height() as f64 / 2.0;
        let own = b.hops_for(p);
        let opp = b.hops_for(p.other()).len() as f64;
        let mut sum_dist = 0.0;
        for h in &own {
            sum_dist +=
                (h.row as f64 - center_row).powi(2) + (h.col as f64 - center_col).powi(2);
        }
        sum_dist * (1.2 * own.len() as f64 - opp)
    }
}

/// Squared distance between the knights: chase the opponent while ahead
/// on mobility, keep away while behind.
pub struct ChaseEvaluator;

impl Evaluator for ChaseEvaluator {
    type G = Isolation;
    fn score(&self, b: &Board, p: Knight) -> Evaluation {
        if Isolation::is_loser(b, p) {
            return WORST_EVAL;
        }
        if Isolation::is_winner(b, p) {
            return BEST_EVAL;
        }
        let own = b.hops_for(p).len();
        let opp = b.hops_for(p.other()).len();
        match (b.location(p), b.location(p.other())) {
            (Some(mine), Some(theirs)) => {
                let dist = (mine.row as f64 - theirs.row as f64).powi(2)
                    + (mine.col as f64 - theirs.col as f64).powi(2);
                if own >= opp {
                    dist
                } else {
                    -1.0 / dist
                }
            }
            // Before both knights are placed, fall back to mobility.
            _ => own as f64 - opp as f64,
        }
    }
}

#[cfg(not(test))]
fn main() {
    use gametree::Agent;
    use std::time::Instant;

    let mut white = Agent::iterative(MobilityEvaluator, 10.0);
    let mut black = Agent::fixed_depth(ChaseEvaluator, 3, 10.0);

    let mut b = Board::default();
    loop {
        println!("{}", b);
        if Isolation::legal_moves(&b).is_empty() {
            println!("{:?} is out of hops", Isolation::active_player(&b));
            break;
        }
        let turn_start = Instant::now();
        let mut time_left = move || 150.0 - turn_start.elapsed().as_secs_f64() * 1e3;
        let mover = Isolation::active_player(&b);
        let m = match mover {
            Knight::White => white.get_move(&b, &mut time_left),
            Knight::Black => black.get_move(&b, &mut time_left),
        };
        match m {
            Some(m) => {
                println!("{:?} hops to ({}, {})", mover, m.row, m.col);
                b = Isolation::forecast(&b, m);
            }
            None => {
                println!("{:?} forfeits", mover);
                break;
            }
        }
    }
    println!("{}", white.strategy().stats());
}
