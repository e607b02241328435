// For a given evaluator and depth, pruning is only allowed to change
// how many nodes get visited, never the decision. This file checks the
// pruned strategies against plain minimax on randomly generated
// isolation boards, pins the pruning down exactly on a scripted tree,
// and exercises the deadline machinery with clocks that misbehave on
// purpose.


use gametree::{
    Agent, AlphaBeta, Clock, Evaluation, Evaluator, Game, IterativeOptions, IterativeSearch,
    Minimax, Strategy,
};
use isolation::{Board, Hop, Isolation, Knight, MobilityEvaluator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn unlimited() -> impl FnMut() -> f64 {
    || f64::MAX
}

// A clock that reports plenty of time for the first `budget` queries
// and then none at all.
fn countdown(budget: usize) -> impl FnMut() -> f64 {
    let mut calls = 0usize;
    move || {
        calls += 1;
        if calls > budget {
            0.0
        } else {
            1000.0
        }
    }
}

fn random_board(rng: &mut StdRng, plies: usize) -> Board {
    let mut b = Board::new(5, 5);
    for _ in 0..plies {
        let moves = Isolation::legal_moves(&b);
        if moves.is_empty() {
            break;
        }
        let next = Isolation::forecast(&b, moves[rng.gen_range(0..moves.len())]);
        if Isolation::legal_moves(&next).is_empty() {
            // Keep the position live.
            break;
        }
        b = next;
    }
    b
}

#[test]
fn alphabeta_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(26);
    for _ in 0..20 {
        let b = random_board(&mut rng, 6);
        let active = Isolation::active_player(&b);
        // Both perspectives: a maximizing root and a minimizing one.
        for player in [active, active.other()] {
            for depth in 1..4 {
                let mut plain = Minimax::new(MobilityEvaluator, depth);
                let mut pruned = AlphaBeta::new(MobilityEvaluator, depth);

                let mut f = unlimited();
                let mut clock = Clock::new(&mut f, 0.0);
                let plain_move = plain.choose_move(&b, player, &mut clock);

                let mut f = unlimited();
                let mut clock = Clock::new(&mut f, 0.0);
                let pruned_move = pruned.choose_move(&b, player, &mut clock);

                assert_eq!(plain_move, pruned_move, "depth {}\n{}", depth, b);
                assert_eq!(plain.root_value(), pruned.root_value(), "depth {}\n{}", depth, b);
                assert!(
                    pruned.nodes_explored() <= plain.nodes_explored(),
                    "pruning explored more nodes ({} > {}) at depth {}\n{}",
                    pruned.nodes_explored(),
                    plain.nodes_explored(),
                    depth,
                    b
                );
            }
        }
    }
}

// A fixed tree of scripted leaf values: the classic three-wide,
// two-deep example where alpha-beta skips exactly two leaves.
#[derive(Clone)]
struct Path(Vec<u8>);

struct TreeGame;

impl Game for TreeGame {
    type S = Path;
    type M = u8;
    type P = bool;

    fn legal_moves(_: &Path) -> Vec<u8> {
        vec![0, 1, 2]
    }
    fn forecast(s: &Path, m: u8) -> Path {
        let mut p = s.0.clone();
        p.push(m);
        Path(p)
    }
    fn active_player(s: &Path) -> bool {
        s.0.len() % 2 == 0
    }
    fn opponent(p: bool) -> bool {
        !p
    }
    fn is_winner(_: &Path, _: bool) -> bool {
        false
    }
    fn is_loser(_: &Path, _: bool) -> bool {
        false
    }
}

const LEAVES: [[f64; 3]; 3] = [[3.0, 12.0, 8.0], [2.0, 4.0, 6.0], [14.0, 5.0, 2.0]];

struct Scripted;

impl Evaluator for Scripted {
    type G = TreeGame;
    fn score(&self, s: &Path, p: bool) -> Evaluation {
        let v = LEAVES[s.0[0] as usize][s.0[1] as usize];
        if p {
            v
        } else {
            -v
        }
    }
}

#[test]
fn scripted_tree_node_counts() {
    let root = Path(Vec::new());

    let mut plain = Minimax::new(Scripted, 2);
    let mut f = unlimited();
    let mut clock = Clock::new(&mut f, 0.0);
    assert_eq!(plain.choose_move(&root, true, &mut clock), Some(0));
    assert_eq!(plain.root_value(), 3.0);
    // Three interior nodes and all nine leaves.
    assert_eq!(plain.nodes_explored(), 12);

    let mut pruned = AlphaBeta::new(Scripted, 2);
    let mut f = unlimited();
    let mut clock = Clock::new(&mut f, 0.0);
    assert_eq!(pruned.choose_move(&root, true, &mut clock), Some(0));
    assert_eq!(pruned.root_value(), 3.0);
    // The second subtree is cut after one leaf, saving two visits.
    assert_eq!(pruned.nodes_explored(), 10);
}

#[test]
fn expired_clock_yields_no_move() {
    let b = Board::default();
    let mut out_of_time = || 5.0;
    let mut clock = Clock::new(&mut out_of_time, 10.0);
    assert!(Minimax::new(MobilityEvaluator, 3)
        .choose_move(&b, Knight::White, &mut clock)
        .is_none());
    assert!(AlphaBeta::new(MobilityEvaluator, 3)
        .choose_move(&b, Knight::White, &mut clock)
        .is_none());
    assert!(IterativeSearch::new(MobilityEvaluator, IterativeOptions::new())
        .choose_move(&b, Knight::White, &mut clock)
        .is_none());
}

#[test]
fn cancellation_mid_search_never_escapes() {
    let b = Board::setup(
        5,
        5,
        &[Hop { row: 1, col: 1 }, Hop { row: 2, col: 3 }],
        Hop { row: 0, col: 0 },
        Hop { row: 4, col: 4 },
        Knight::White,
    );
    let legal = Isolation::legal_moves(&b);
    for budget in [1, 2, 5, 17, 60, 250, 1000, 5000] {
        let mut agent = Agent::iterative(MobilityEvaluator, 10.0);
        let mut clock_fn = countdown(budget);
        if let Some(m) = agent.get_move(&b, &mut clock_fn) {
            assert!(legal.contains(&m), "illegal move under budget {}", budget);
        }

        let mut fixed = Agent::fixed_depth(MobilityEvaluator, 3, 10.0);
        let mut clock_fn = countdown(budget);
        if let Some(m) = fixed.get_move(&b, &mut clock_fn) {
            assert!(legal.contains(&m), "illegal move under budget {}", budget);
        }
    }
}

#[test]
fn larger_budget_never_completes_less() {
    let b = Board::setup(
        5,
        5,
        &[Hop { row: 1, col: 1 }],
        Hop { row: 0, col: 0 },
        Hop { row: 4, col: 4 },
        Knight::White,
    );
    let mut prev_depth = 0;
    for budget in [10, 40, 160, 640, 2560, 10240] {
        let mut search = IterativeSearch::new(MobilityEvaluator, IterativeOptions::new());
        let mut clock_fn = countdown(budget);
        let mut clock = Clock::new(&mut clock_fn, 10.0);
        let _ = search.choose_move(&b, Knight::White, &mut clock);
        assert!(
            search.actual_depth() >= prev_depth,
            "budget {} completed depth {} after a smaller budget reached {}",
            budget,
            search.actual_depth(),
            prev_depth
        );
        prev_depth = search.actual_depth();
    }
}
