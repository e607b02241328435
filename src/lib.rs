//! Deadline-bounded game-tree search for two-player, zero-sum,
//! perfect-information games.
//!
//! The game supplies its rules through the [`Game`] trait and a
//! position-scoring heuristic through [`Evaluator`]; the strategies in
//! this crate then pick moves by depth-limited minimax, alpha-beta
//! pruning, or iterative-deepening alpha-beta under a wall-clock
//! budget. An [`Agent`] binds a strategy to the per-turn time budget
//! and is the single entry point a game loop needs.

pub mod agent;
pub mod interface;
pub mod strategies;
pub mod util;

pub use agent::Agent;
pub use interface::{Clock, Evaluation, Evaluator, Game, Strategy, BEST_EVAL, WORST_EVAL};
pub use strategies::alphabeta::AlphaBeta;
pub use strategies::iterative::{IterativeOptions, IterativeSearch};
pub use strategies::minimax::Minimax;
pub use strategies::random::Random;
