//! The common structures and traits.

/// An assessment of a game state from one player's point of view.
/// Higher values favor that player; the infinities are reserved for
/// decided games. Evaluators never return NaN, so plain float
/// comparisons order every pair of values.
pub type Evaluation = f64;

/// The value of a won game.
pub const BEST_EVAL: Evaluation = f64::INFINITY;
/// The value of a lost game.
pub const WORST_EVAL: Evaluation = f64::NEG_INFINITY;

/// Defines the rules for a two-player, perfect-knowledge game.
///
/// States are immutable values: every transition goes through
/// [`forecast`](Game::forecast), which returns the successor and leaves
/// the input untouched. A state with no legal moves is terminal, and
/// the player to move in it has lost.
pub trait Game: Sized {
    /// The type of the game state.
    type S;
    /// The type of game moves.
    type M: Copy + Eq;
    /// The type of player identities. Exactly two exist per game.
    type P: Copy + Eq;

    /// The moves available to the player whose turn it is. Empty
    /// exactly when the state is terminal.
    fn legal_moves(s: &Self::S) -> Vec<Self::M>;
    /// The state reached by playing `m`, which must be legal in `s`.
    fn forecast(s: &Self::S, m: Self::M) -> Self::S;
    /// The player whose turn it is.
    fn active_player(s: &Self::S) -> Self::P;
    /// The other player.
    fn opponent(p: Self::P) -> Self::P;
    /// Whether `p` has won the game in `s`.
    fn is_winner(s: &Self::S, p: Self::P) -> bool;
    /// Whether `p` has lost the game in `s`.
    fn is_loser(s: &Self::S, p: Self::P) -> bool;
}

/// Evaluates a game's positions.
pub trait Evaluator {
    /// The type of game that can be evaluated.
    type G: Game;

    /// Evaluate a state from `p`'s point of view.
    ///
    /// Must return [`WORST_EVAL`] whenever `p` has lost and
    /// [`BEST_EVAL`] whenever `p` has won, no matter how the state was
    /// reached; the searchers rely on this to back decided games up
    /// through the tree. Non-terminal states get a finite heuristic
    /// value.
    fn score(&self, s: &<Self::G as Game>::S, p: <Self::G as Game>::P) -> Evaluation;
}

/// Watches the time remaining in the current turn.
///
/// Borrows the caller's milliseconds-remaining query together with the
/// safety threshold below which search must stop. The query is
/// consulted afresh on every check; no absolute time is stored.
pub struct Clock<'a> {
    time_left: &'a mut dyn FnMut() -> f64,
    threshold_ms: f64,
}

impl<'a> Clock<'a> {
    pub fn new(time_left: &'a mut dyn FnMut() -> f64, threshold_ms: f64) -> Clock<'a> {
        Clock { time_left, threshold_ms }
    }

    /// True once the remaining time has dropped below the threshold.
    /// Search must unwind without starting new work when this fires.
    pub fn expired(&mut self) -> bool {
        (self.time_left)() < self.threshold_ms
    }
}

/// Defines a method of choosing a move on behalf of `player`.
///
/// `player` is the perspective the search optimizes for; it is usually,
/// but not necessarily, the player to move at `s`. Returns `None` when
/// there is no move to report, either because the position has none or
/// because the clock expired before any result was completed.
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, s: &G::S, player: G::P, clock: &mut Clock<'_>) -> Option<G::M>;
}
