//! Known-topology regression tests for betweenness and central point dominance.
//!
//! Each test uses a hand-crafted graph whose scores can be worked out on
//! paper. Expected values are hardcoded, so any change to the accumulation,
//! halving or normalization rules shows up here.

use petgraph::graph::{DiGraph, UnGraph};

use centrality_core::{
    EdgeMap, ValueType, VertexMap, betweenness, central_point_dominance, compute_betweenness,
    normalization_factors,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const EPS: f64 = 1e-9;

fn star(leaves: u32) -> UnGraph<(), ()> {
    UnGraph::from_edges((1..=leaves).map(|leaf| (0, leaf)))
}

fn cycle(n: u32) -> UnGraph<(), ()> {
    UnGraph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

fn scores(map: &VertexMap) -> Vec<f64> {
    map.to_f64_vec().expect("numeric map")
}

fn edge_scores(map: &EdgeMap) -> Vec<f64> {
    map.to_f64_vec().expect("numeric map")
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPS, "slot {i}: got {a}, expected {e}");
    }
}

// ===========================================================================
// Topology 1: Star (center 0, k leaves), undirected
//
// Every leaf-to-leaf path runs through the center: k(k-1)/2 pairs.
// ===========================================================================

#[test]
fn star_raw_center_counts_leaf_pairs() {
    for k in 2..=6_u32 {
        let g = star(k);
        let bc = betweenness(&g, None, false).expect("valid call");
        let v = scores(&bc.vertex);
        let expected = f64::from(k * (k - 1) / 2);
        assert!((v[0] - expected).abs() < EPS, "k={k}: center {}", v[0]);
        assert!(v[1..].iter().all(|&x| x.abs() < EPS), "leaves stay at zero");
    }
}

#[test]
fn star_of_four_normalizes_to_one() {
    let g = star(4);
    let raw = betweenness(&g, None, false).expect("valid call");
    assert_close(&scores(&raw.vertex), &[6.0, 0.0, 0.0, 0.0, 0.0]);

    let norm = betweenness(&g, None, true).expect("valid call");
    assert_close(&scores(&norm.vertex), &[1.0, 0.0, 0.0, 0.0, 0.0]);

    let cpd = central_point_dominance(&g, &norm.vertex).expect("scalar map");
    assert!((cpd - 1.0).abs() < EPS, "star dominance = {cpd}");
}

// ===========================================================================
// Topology 2: Cycle of n vertices, undirected
//
// Vertex-transitive: every vertex scores the same, dominance is zero.
// ===========================================================================

#[test]
fn cycle_scores_are_uniform() {
    for n in 3..=9_u32 {
        let g = cycle(n);
        let bc = betweenness(&g, None, true).expect("valid call");
        let v = scores(&bc.vertex);
        assert!(
            v.iter().all(|&x| (x - v[0]).abs() < EPS),
            "n={n}: uneven scores {v:?}"
        );
        let cpd = central_point_dominance(&g, &bc.vertex).expect("scalar map");
        assert!(cpd.abs() < EPS, "n={n}: dominance {cpd}");
    }
}

#[test]
fn even_cycle_splits_antipodal_paths() {
    // C4: each vertex sits on one of the two shortest paths between its
    // two neighbours, so raw betweenness is 1/2.
    let bc = betweenness(&cycle(4), None, false).expect("valid call");
    assert_close(&scores(&bc.vertex), &[0.5; 4]);
}

// ===========================================================================
// Topology 3: Path graph, directed and undirected
// ===========================================================================

#[test]
fn undirected_path_interior_scores() {
    // 0 - 1 - 2 - 3 - 4: vertex i carries i * (4 - i) pairs.
    let g = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
    let bc = betweenness(&g, None, false).expect("valid call");
    assert_close(&scores(&bc.vertex), &[0.0, 3.0, 4.0, 3.0, 0.0]);
    // Edge (i, i+1) separates i + 1 vertices from 4 - i.
    assert_close(&edge_scores(&bc.edge), &[4.0, 6.0, 6.0, 4.0]);
}

#[test]
fn directed_path_only_counts_forward_pairs() {
    let g = DiGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
    let raw = betweenness(&g, None, false).expect("valid call");
    assert_close(&scores(&raw.vertex), &[0.0, 3.0, 4.0, 3.0, 0.0]);

    // Directed n = 5: vfactor = 1/12, no doubling.
    let norm = betweenness(&g, None, true).expect("valid call");
    assert_close(&scores(&norm.vertex), &[0.0, 0.25, 1.0 / 3.0, 0.25, 0.0]);
}

// ===========================================================================
// Topology 4: Disconnected graph
// ===========================================================================

#[test]
fn disjoint_union_is_sum_of_components() {
    // Path 0-1-2 and star 3..7 (center 3), no edges between them.
    let mut edges = vec![(0, 1), (1, 2)];
    edges.extend((4..=7).map(|leaf| (3, leaf)));
    let union = UnGraph::<(), ()>::from_edges(edges);
    let bc = betweenness(&union, None, false).expect("valid call");

    let path = betweenness(
        &UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]),
        None,
        false,
    )
    .expect("valid call");
    let st = betweenness(&star(4), None, false).expect("valid call");

    let mut expected = scores(&path.vertex);
    expected.extend(scores(&st.vertex));
    assert_close(&scores(&bc.vertex), &expected);
}

#[test]
fn isolated_vertices_score_zero() {
    let mut g = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
    g.add_node(());
    g.add_node(());
    let bc = betweenness(&g, None, false).expect("valid call");
    assert_close(&scores(&bc.vertex), &[0.0, 1.0, 0.0, 0.0, 0.0]);
}

// ===========================================================================
// Topology 5: Weighted graphs
// ===========================================================================

#[test]
fn unit_weights_match_unweighted() {
    let g = UnGraph::<(), ()>::from_edges([
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (1, 3),
        (3, 4),
        (4, 5),
    ]);
    let ones = EdgeMap::from(vec![1.0_f64; g.edge_count()]);

    let plain = betweenness(&g, None, true).expect("valid call");
    let weighted = betweenness(&g, Some(&ones), true).expect("valid call");
    assert_close(&scores(&weighted.vertex), &scores(&plain.vertex));
    assert_close(&edge_scores(&weighted.edge), &edge_scores(&plain.edge));
}

#[test]
fn heavy_edge_reroutes_paths() {
    // Square 0-1-2-3-0 with edge (0,1) made expensive: 0 reaches 1 via 3, 2.
    let g = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
    let w = EdgeMap::from(vec![10.0_f64, 1.0, 1.0, 1.0]);
    let bc = betweenness(&g, Some(&w), false).expect("valid call");
    let v = scores(&bc.vertex);

    // Pairs: {0,1} via 3,2 ; {0,2} via 3 ; {1,3} via 2.
    assert_close(&v, &[0.0, 0.0, 2.0, 2.0]);
    assert!(edge_scores(&bc.edge)[0].abs() < EPS, "heavy edge unused");
}

#[test]
fn zero_weight_edge_between_equidistant_vertices_is_not_a_tie() {
    // 0 → 1 (1), 0 → 2 (1), 2 → 1 (0): 1 is finalised before 2 relaxes
    // its zero-weight edge, so 0 → 1 keeps a single shortest path.
    let g = DiGraph::<(), ()>::from_edges([(0, 1), (0, 2), (2, 1)]);
    let w = EdgeMap::from(vec![1.0_f64, 1.0, 0.0]);
    let bc = betweenness(&g, Some(&w), false).expect("valid call");

    assert_close(&scores(&bc.vertex), &[0.0, 0.0, 0.0]);
    assert_close(&edge_scores(&bc.edge), &[1.0, 1.0, 1.0]);
}

#[test]
fn overflowing_weights_do_not_depend_on_thread_count() {
    // 0 → 4 → 3 sums past f64::MAX and is unreachable; 3 → 0 → 4 is not.
    let g = DiGraph::<(), ()>::from_edges([(0, 4), (4, 3), (3, 0)]);
    let w = EdgeMap::from(vec![f64::MAX, f64::MAX, 1.0]);
    let run = |threads: usize| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("thread pool")
            .install(|| betweenness(&g, Some(&w), false).expect("valid call"))
    };

    for threads in [1, 3] {
        let bc = run(threads);
        assert_close(&scores(&bc.vertex), &[1.0, 0.0, 0.0, 1.0, 0.0]);
        assert_close(&edge_scores(&bc.edge), &[2.0, 2.0, 3.0]);
    }
}

#[test]
fn infinite_weight_edge_is_impassable() {
    let g = DiGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
    let w = EdgeMap::from(vec![1.0_f64, f64::INFINITY]);
    let bc = betweenness(&g, Some(&w), false).expect("valid call");

    assert_close(&scores(&bc.vertex), &[0.0, 0.0, 0.0]);
    assert_close(&edge_scores(&bc.edge), &[1.0, 0.0]);
}

// ===========================================================================
// Normalization and output contracts
// ===========================================================================

#[test]
fn factors_follow_formula() {
    for n in 0..=2 {
        let f = normalization_factors(n, true);
        assert!((f.vertex - 1.0).abs() < EPS, "n={n}");
    }
    for n in 0..=1 {
        let f = normalization_factors(n, true);
        assert!((f.edge - 1.0).abs() < EPS, "n={n}");
    }
    let f = normalization_factors(10, false);
    assert!((f.vertex - 2.0 / 72.0).abs() < EPS);
    assert!((f.edge - 2.0 / 90.0).abs() < EPS);
}

#[test]
fn float_outputs_receive_same_scores() {
    let g = star(4);
    let mut vertex = VertexMap::new(ValueType::Float32, 5);
    let mut edge = EdgeMap::new(ValueType::Float32, 4);
    compute_betweenness(&g, None, &mut edge, &mut vertex, true).expect("valid call");

    assert_eq!(vertex.value_type(), ValueType::Float32);
    let v = scores(&vertex);
    assert!((v[0] - 1.0).abs() < 1e-6);
    assert!(edge_scores(&edge).iter().all(|&e| (e - 0.4).abs() < 1e-6));
}

#[test]
fn scores_are_never_negative() {
    let g = DiGraph::<(), ()>::from_edges([
        (0, 1),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 4),
        (4, 2),
        (1, 4),
        (5, 5),
    ]);
    let bc = betweenness(&g, None, true).expect("valid call");
    assert!(scores(&bc.vertex).iter().all(|&x| x >= 0.0));
    assert!(edge_scores(&bc.edge).iter().all(|&x| x >= 0.0));
}
