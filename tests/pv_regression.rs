// Regression values along the reference game: every position on the
// principal variation is worth -4 for Black, and node counts are fixed for a
// given algorithm and configuration.

use othello_solver::game_repr::{Board, PrincipalVariation, Side, PASS};
use othello_solver::search::{run_along_pv, Algorithm, SearchConfig, TestCondition};

const PV_VALUE: i32 = -4;

fn reference() -> PrincipalVariation {
    PrincipalVariation::reference().expect("reference game is legal")
}

#[test]
fn test_variation_shape() {
    let pv = reference();

    assert_eq!(pv.len(), 33);
    assert_eq!(pv.positions().len(), 34);
    assert_eq!(pv.positions()[33], Board::new());
    assert_eq!(pv.moves().iter().filter(|&&cell| cell == PASS).count(), 1);

    let last = pv.positions()[0];
    assert!(last.is_terminal());
    assert_eq!(last.value(), PV_VALUE);

    // Black opens the game, so Black is to move at the starting position
    assert_eq!(pv.side_to_move(33), Side::Black);
    assert_eq!(pv.side_to_move(32), Side::White);
}

#[test]
fn test_final_position() {
    let expected: Board = "WWWWWB WWBWBW BBWBWW BBBWWW WWBBWW BBBBBW".parse().unwrap();
    assert_eq!(reference().positions()[0], expected);
}

#[test]
fn test_alpha_beta_along_pv() {
    let pv = reference();
    let results =
        run_along_pv(Algorithm::AlphaBeta, SearchConfig::default(), &pv, Some(12), |_| {})
            .unwrap();

    assert_eq!(results.len(), 12);
    for (index, result) in results.iter().enumerate() {
        assert_eq!(result.value, PV_VALUE, "position {index}");
        assert_eq!(result.remaining, 34 - index);
        assert_eq!(result.side, pv.side_to_move(index));
        assert!(!result.cache_enabled);
    }

    let last = &results[11];
    assert_eq!((last.expanded, last.generated), (3168, 4067));
}

#[test]
fn test_pruning_algorithms_at_deepest_position() {
    let pv = reference();
    let cases = [
        (Algorithm::AlphaBeta, TestCondition::Strict, 1152, 1501),
        (Algorithm::Scout, TestCondition::Strict, 2126, 2601),
        (Algorithm::Scout, TestCondition::Inclusive, 2549, 3153),
        (Algorithm::Negascout, TestCondition::Strict, 1894, 2421),
    ];

    for (algorithm, condition, expanded, generated) in cases {
        let config = SearchConfig::default().with_test_condition(condition);
        let results = run_along_pv(algorithm, config, &pv, Some(11), |_| {}).unwrap();
        let last = &results[10];

        assert_eq!(last.value, PV_VALUE, "{algorithm}");
        assert_eq!(
            (last.expanded, last.generated),
            (expanded, generated),
            "{algorithm} {condition:?}"
        );
    }
}

#[test]
fn test_plain_negamax_along_pv() {
    let pv = reference();
    let results =
        run_along_pv(Algorithm::Negamax, SearchConfig::default(), &pv, Some(11), |_| {}).unwrap();

    assert!(results.iter().all(|r| r.value == PV_VALUE));
    assert_eq!((results[10].expanded, results[10].generated), (8597, 11977));
}

#[test]
fn test_cached_run_along_pv() {
    let pv = reference();
    let config = SearchConfig::default().with_tt(true).with_store_threshold(0);

    for &algorithm in Algorithm::all() {
        let results = run_along_pv(algorithm, config, &pv, Some(12), |_| {}).unwrap();
        assert!(results.iter().all(|r| r.value == PV_VALUE), "{algorithm}");
        assert!(results.iter().all(|r| r.cache_enabled), "{algorithm}");
    }

    let results = run_along_pv(Algorithm::Negascout, config, &pv, Some(12), |_| {}).unwrap();
    assert_eq!((results[11].expanded, results[11].generated), (2160, 2821));
}

#[test]
fn test_report_lines() {
    let pv = reference();
    let mut lines = Vec::new();

    run_along_pv(Algorithm::Scout, SearchConfig::default(), &pv, Some(3), |result| {
        lines.push(result.to_string())
    })
    .unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("34. White moves: value=-4, #expanded=0, #generated=0, seconds="));
    assert!(lines[1].starts_with("33. Black moves: value=-4, #expanded=1, #generated=1, seconds="));
    assert!(lines[2].starts_with("32. White moves: value=-4, #expanded=3, #generated=4, seconds="));
}
