use contest_graphs::error::GraphError;
use contest_graphs::graph::WeightedGraph;
use contest_graphs::report::{NetworkAnswer, RailwayAnswer};
use contest_graphs::utils::parse::parse_railways;
use contest_graphs::utils::random_graph::{generate_network_instance, generate_railway_instance};
use contest_graphs::utils::serialization::{
    load_instance, save_instance, ProblemInstance, ProblemKind,
};
use contest_graphs::Error;
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("contest-graphs-{}-{name}", std::process::id()))
}

#[test]
fn network_instance_survives_disk() {
    let (graph, params) = generate_network_instance(40, 120, 1_000, true, Some(3)).unwrap();
    assert_eq!(params.edges, 120);
    let expected = NetworkAnswer::solve(&graph);
    assert!(expected.total_weight.is_some());

    let path = scratch_file("network.bin");
    let instance = ProblemInstance::with_metadata(ProblemKind::Network(graph), params);
    save_instance(&path, &instance).unwrap();
    let loaded = load_instance(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, instance);
    match loaded.problem {
        ProblemKind::Network(graph) => assert_eq!(NetworkAnswer::solve(&graph), expected),
        ProblemKind::Railways(_) => panic!("expected a network instance"),
    }
}

#[test]
fn railway_instance_survives_disk() {
    let (map, params) = generate_railway_instance(25, true, Some(9)).unwrap();
    let path = scratch_file("railways.bin");
    let instance = ProblemInstance::with_metadata(ProblemKind::Railways(map), params);
    save_instance(&path, &instance).unwrap();
    let loaded = load_instance(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.label(), "railways");
    match loaded.problem {
        ProblemKind::Railways(map) => assert!(RailwayAnswer::solve(&map).optimal),
        ProblemKind::Network(_) => panic!("expected a railway instance"),
    }
}

#[test]
fn same_seed_same_instance() {
    let (first, _) = generate_network_instance(30, 60, 100, true, Some(42)).unwrap();
    let (second, _) = generate_network_instance(30, 60, 100, true, Some(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn garbage_file_is_an_encoding_error() {
    let path = scratch_file("garbage.bin");
    std::fs::write(&path, [0xffu8; 3]).unwrap();
    let err = load_instance(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_instance(scratch_file("does-not-exist.bin")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

/// Two cities with the single road 1 -> 2, encoded as an instance file.
fn two_city_bytes() -> Vec<u8> {
    let map = parse_railways("2\nR\n").unwrap();
    bincode::serialize(&ProblemInstance::new(ProblemKind::Railways(map))).unwrap()
}

fn load_bytes(name: &str, bytes: &[u8]) -> Result<ProblemInstance, Error> {
    let path = scratch_file(name);
    std::fs::write(&path, bytes).unwrap();
    let result = load_instance(&path);
    std::fs::remove_file(&path).ok();
    result
}

#[test]
fn tampered_city_count_is_rejected() {
    let mut bytes = two_city_bytes();
    assert!(load_bytes("untouched.bin", &bytes).is_ok());

    // variant tag, then the u32 city count
    bytes[4..8].copy_from_slice(&1u32.to_le_bytes());
    let err = load_bytes("short-count.bin", &bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::AdjacencySize {
            len: 3,
            expected: 2
        })
    ));

    bytes[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
    let err = load_bytes("huge-count.bin", &bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::TooManyVertices { .. })
    ));
}

#[test]
fn tampered_road_target_is_rejected() {
    let mut bytes = two_city_bytes();
    // tag, n, table length, empty slot 0, slot 1 length, then the road 1 -> 2
    assert_eq!(&bytes[32..36], &2u32.to_le_bytes());
    bytes[32..36].copy_from_slice(&7u32.to_le_bytes());
    let err = load_bytes("far-road.bin", &bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::VertexOutOfRange { vertex: 7, n: 2 })
    ));
}

#[test]
fn tampered_network_is_rejected() {
    let graph = WeightedGraph::from_edges(2, &[(1, 2, 5)]).unwrap();
    let mut bytes = bincode::serialize(&ProblemInstance::new(ProblemKind::Network(graph))).unwrap();
    // tag, n, m, table length, empty slot 0, slot 1 length, then ray (from, to, weight)
    assert_eq!(&bytes[40..44], &2u32.to_le_bytes());
    bytes[40..44].copy_from_slice(&9u32.to_le_bytes());
    let err = load_bytes("far-ray.bin", &bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::VertexOutOfRange { vertex: 9, n: 2 })
    ));
}
