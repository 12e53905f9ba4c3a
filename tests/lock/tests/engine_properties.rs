//! Lock tests for the engine's observable guarantees, driven only through
//! the public `wayfind_search` API.

use std::collections::HashMap;

use wayfind_search::{
    explore_within, reconstruct, search, search_weighted, search_with_policy, CostFrontier,
    SearchError, SearchPolicy,
};

/// `A->B, A->C, B->D, C->D, D->E`, all unit cost.
fn dag() -> HashMap<char, Vec<char>> {
    HashMap::from([
        ('A', vec!['B', 'C']),
        ('B', vec!['D']),
        ('C', vec!['D']),
        ('D', vec!['E']),
        ('E', vec![]),
    ])
}

fn zero_until(goal: char) -> impl Fn(&char) -> f64 {
    move |node: &char| if *node == goal { 0.0 } else { 1.0 }
}

// ---------------------------------------------------------------------------
// Best-first search
// ---------------------------------------------------------------------------

#[test]
fn dag_scenario_three_edges_cost_three() {
    let graph = dag();
    let found = search(
        'A',
        // Non-goal states need a nonzero estimate or the search stops at `A`.
        |n: &char| if *n == 'E' { 0.0 } else { 0.5 },
        |n: &char| graph[n].clone(),
    )
    .unwrap();

    assert_eq!(found.edges(), 3);
    assert!((found.cost - 3.0).abs() < f64::EPSILON);
    assert_eq!(found.start(), Some(&'A'));
    assert_eq!(found.goal(), Some(&'E'));
    assert!(found.states[1] == 'B' || found.states[1] == 'C');
    assert_eq!(found.states[2], 'D');
}

#[test]
fn start_that_is_goal_returns_single_state() {
    let found = search(7u32, |_: &u32| 0.0, |_: &u32| vec![8u32, 9]).unwrap();
    assert_eq!(found.states, vec![7]);
    assert_eq!(found.edges(), 0);
    assert_eq!(found.stats.expansions, 0);
}

#[test]
fn unreachable_goal_is_a_typed_failure() {
    let graph = dag();
    let err = search('A', zero_until('Z'), |n: &char| graph[n].clone()).unwrap_err();
    assert_eq!(err, SearchError::NoPathFound { expansions: 5 });
}

#[test]
fn shorter_route_wins_even_if_longer_is_enqueued_first() {
    // Long route S->L1->L2->L3->G is listed first; short route S->X->G second.
    let graph: HashMap<&str, Vec<&str>> = HashMap::from([
        ("S", vec!["L1", "X"]),
        ("L1", vec!["L2"]),
        ("L2", vec!["L3"]),
        ("L3", vec!["G"]),
        ("X", vec!["G"]),
        ("G", vec![]),
    ]);
    let found = search(
        "S",
        |n: &&str| if *n == "G" { 0.0 } else { 0.0001 },
        |n: &&str| graph[n].clone(),
    )
    .unwrap();
    assert_eq!(found.states, vec!["S", "X", "G"]);
}

#[test]
fn admissible_heuristic_matches_breadth_first_distance() {
    // Goal region is x >= 6 on the number line. The longest step is 3, so a
    // third of the remaining gap never overestimates.
    let moves = |x: &i32| vec![x + 1, x - 1, x + 3];
    let found = search(0i32, |x: &i32| f64::from((6 - x).max(0)) / 3.0, moves).unwrap();
    let bfs = explore_within(0i32, 10.0, moves);
    assert!((found.cost - bfs[&6]).abs() < f64::EPSILON);
    assert_eq!(found.edges(), 2);
}

#[test]
fn cyclic_space_terminates() {
    // A ring of 10 states; every state links both ways.
    let found = search(
        0u8,
        |n: &u8| f64::from(u8::from(*n != 5)),
        |n: &u8| vec![(n + 1) % 10, (n + 9) % 10],
    )
    .unwrap();
    assert_eq!(found.edges(), 5);
}

#[test]
fn weighted_edges_prefer_cheaper_total() {
    // Direct edge costs 10, detour through M costs 2 + 2.
    let found = search_weighted(
        'S',
        &SearchPolicy::default(),
        |n: &char| if *n == 'G' { 0.0 } else { 1.0 },
        |from: &char, to: &char| match (from, to) {
            ('S', 'G') => 10.0,
            _ => 2.0,
        },
        |n: &char| match n {
            'S' => vec!['G', 'M'],
            'M' => vec!['G'],
            _ => vec![],
        },
    )
    .unwrap();
    assert_eq!(found.states, vec!['S', 'M', 'G']);
    assert!((found.cost - 4.0).abs() < f64::EPSILON);
}

#[test]
fn budget_cuts_off_infinite_space() {
    let policy = SearchPolicy::default().with_max_expansions(50);
    let err = search_with_policy(0u64, &policy, |_: &u64| 1.0, |n: &u64| vec![n + 1]).unwrap_err();
    assert_eq!(err, SearchError::ExpansionBudgetExceeded { max_expansions: 50 });
}

#[test]
fn goal_epsilon_is_tunable() {
    let loose = SearchPolicy::default().with_goal_epsilon(0.5);
    let found = search_with_policy(
        0u32,
        &loose,
        |n: &u32| if *n >= 3 { 0.25 } else { 1.0 },
        |n: &u32| vec![n + 1],
    )
    .unwrap();
    assert_eq!(found.goal(), Some(&3));

    let strict = SearchPolicy::default().with_max_expansions(20);
    let err = search_with_policy(
        0u32,
        &strict,
        |n: &u32| if *n >= 3 { 0.25 } else { 1.0 },
        |n: &u32| vec![n + 1],
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::ExpansionBudgetExceeded { .. }));
}

// ---------------------------------------------------------------------------
// Path reconstruction
// ---------------------------------------------------------------------------

#[test]
fn reconstruction_is_idempotent_and_ordered() {
    let predecessors = HashMap::from([(4, 3), (3, 2), (2, 1)]);
    let first = reconstruct(&4, &predecessors).unwrap();
    let second = reconstruct(&4, &predecessors).unwrap();
    assert_eq!(first, vec![1, 2, 3, 4]);
    assert_eq!(first, second);
}

#[test]
fn reconstruction_detects_cycles() {
    let predecessors = HashMap::from([('a', 'b'), ('b', 'c'), ('c', 'a')]);
    let err = reconstruct(&'a', &predecessors).unwrap_err();
    assert!(matches!(err, SearchError::PredecessorCycle { .. }));
}

// ---------------------------------------------------------------------------
// Bounded exploration
// ---------------------------------------------------------------------------

#[test]
fn exploration_within_two_on_grid() {
    let reached = explore_within((0i32, 0i32), 2.0, |&(x, y): &(i32, i32)| {
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
    });
    assert_eq!(reached.len(), 13);
    for (&(x, y), &d) in &reached {
        let manhattan = f64::from(x.abs() + y.abs());
        assert!((d - manhattan).abs() < f64::EPSILON);
        assert!(d <= 2.0);
    }
}

#[test]
fn exploration_never_expands_boundary_states() {
    let expanded = std::cell::RefCell::new(Vec::new());
    let reached = explore_within(0i32, 3.0, |n: &i32| {
        expanded.borrow_mut().push(*n);
        vec![n + 1]
    });
    assert_eq!(reached.len(), 4);
    assert_eq!(*expanded.borrow(), vec![0, 1, 2]);
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

#[test]
fn frontier_pops_in_ascending_estimate() {
    let mut frontier = CostFrontier::new();
    for (state, f) in [("c", 3.0), ("a", 1.0), ("d", 4.0), ("b", 2.0)] {
        frontier.push(state, 0.0, f);
    }
    let order: Vec<&str> = std::iter::from_fn(|| frontier.pop().map(|c| c.state)).collect();
    assert_eq!(order, vec!["a", "b", "c", "d"]);
    assert_eq!(frontier.high_water(), 4);
}
