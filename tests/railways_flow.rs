use contest_graphs::graph::{
    cycle_triangle, find_cycle, is_acyclic, railway_verdict, RoadKind, RoadMap,
};
use contest_graphs::report::{render, OutputFormat, RailwayAnswer};
use contest_graphs::utils::parse::parse_railways;
use contest_graphs::utils::random_graph::{acyclic_road_map, random_road_map, seeded_rng};

fn solve_text(input: &str) -> String {
    let map = parse_railways(input).expect("valid contest input");
    railway_verdict(&map).to_string()
}

/// A tournament is acyclic exactly when its out-degrees are 0, 1, ..., n - 1.
fn acyclic_by_scores(map: &RoadMap) -> bool {
    let mut scores: Vec<usize> = (1..=map.city_count()).map(|v| map.successors(v).len()).collect();
    scores.sort_unstable();
    scores.iter().enumerate().all(|(rank, &score)| rank == score)
}

fn assert_is_cycle(map: &RoadMap, cycle: &[u32]) {
    assert!(cycle.len() >= 3, "tournament cycles have at least three cities");
    for (index, &from) in cycle.iter().enumerate() {
        let to = cycle[(index + 1) % cycle.len()];
        assert!(map.has_road(from, to), "missing road {from} -> {to}");
    }
}

#[test]
fn contest_samples() {
    assert_eq!(solve_text("3\nRB\nR\n"), "NO");
    assert_eq!(solve_text("4\nBBB\nRB\nB\n"), "YES");
    assert_eq!(solve_text("5\nRRRB\nBRR\nBR\nR\n"), "NO");
}

#[test]
fn tiny_maps_are_acyclic() {
    assert_eq!(solve_text("1\n"), "YES");
    assert_eq!(solve_text("2\nB\n"), "YES");
    assert!(is_acyclic(&RoadMap::new(0)));
}

#[test]
fn all_red_roads_point_forward() {
    let n = 6;
    let rows: Vec<Vec<RoadKind>> = (1..n).map(|i| vec![RoadKind::Red; (n - i) as usize]).collect();
    let map = RoadMap::from_rows(n, &rows).unwrap();
    assert!(is_acyclic(&map));
    assert_eq!(map.successors(1).len(), 5);
    assert!(map.successors(6).is_empty());
}

#[test]
fn witness_walks_real_roads() {
    let map = parse_railways("5\nRRRB\nBRR\nBR\nR\n").unwrap();
    let cycle = find_cycle(&map).expect("map has a cycle");
    assert_is_cycle(&map, &cycle);

    let triangle = cycle_triangle(&map, &cycle).unwrap();
    assert_is_cycle(&map, &triangle);
}

#[test]
fn long_cycle_shrinks_to_triangle() {
    // 1 -> 2 -> 3 -> 4 -> 1 with chords 1 -> 3 and 2 -> 4
    let map = parse_railways("4\nRRB\nRR\nR\n").unwrap();
    let triangle = cycle_triangle(&map, &[1, 2, 3, 4]).unwrap();
    assert_is_cycle(&map, &triangle);
}

#[test]
fn random_maps_agree_with_score_sequence() {
    for seed in 0..60u64 {
        let mut rng = seeded_rng(Some(seed));
        let n = 1 + (seed % 9) as u32;
        let map = random_road_map(n, &mut rng).unwrap();
        assert_eq!(is_acyclic(&map), acyclic_by_scores(&map), "seed {seed}, n {n}");
        if let Some(cycle) = find_cycle(&map) {
            assert_is_cycle(&map, &cycle);
            assert_is_cycle(&map, &cycle_triangle(&map, &cycle).unwrap());
        }
    }
}

#[test]
fn ranked_maps_are_acyclic() {
    let mut rng = seeded_rng(Some(11));
    for n in [1, 2, 3, 10, 64] {
        let map = acyclic_road_map(n, &mut rng).unwrap();
        assert_eq!(map.road_count() as u32, n * n.saturating_sub(1) / 2);
        assert!(is_acyclic(&map));
        assert!(acyclic_by_scores(&map));
    }
}

#[test]
fn deep_search_does_not_overflow() {
    let n = 3_000;
    // all red: the search dives 1 -> 2 -> ... -> n
    let mut rows: Vec<Vec<RoadKind>> =
        (1..n).map(|i| vec![RoadKind::Red; (n - i) as usize]).collect();
    let map = RoadMap::from_rows(n, &rows).unwrap();
    assert!(is_acyclic(&map));

    // turning n -> 1 around closes a cycle through every city
    rows[0][(n - 2) as usize] = RoadKind::Blue;
    let map = RoadMap::from_rows(n, &rows).unwrap();
    let cycle = find_cycle(&map).expect("map has a cycle");
    assert_eq!(cycle.len(), n as usize);
    assert_is_cycle(&map, &cycle);
    assert_is_cycle(&map, &cycle_triangle(&map, &cycle).unwrap());
}

#[test]
fn json_report_carries_witness() {
    let map = parse_railways("3\nRB\nR\n").unwrap();
    let answer = RailwayAnswer::solve(&map);
    assert!(!answer.optimal);
    assert_eq!(answer.cycle.as_deref(), Some(&[1, 2, 3][..]));
    assert_eq!(answer.triangle, Some([1, 2, 3]));

    let json = render(&answer, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["optimal"], false);
    assert_eq!(render(&answer, OutputFormat::Text).unwrap(), "NO");
}
