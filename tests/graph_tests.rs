// tests/graph_tests.rs
//! Tests voor de graafrepresentatie: DIMACS-parsing, buurlijsten en het
//! degeneracy-peeling-algoritme (inclusief de vastgelegde LIFO-afpelvolgorde).

extern crate amis;
use amis::graph::Graph;

fn path5() -> Graph {
    Graph::from_edge_list(5, &[(0, 1), (1, 2), (2, 3), (3, 4)])
}

#[test]
fn parse_dimacs_basic() {
    let input = b"c voorbeeldinstantie\n\
                  p edge 5 4\n\
                  e 1 2\n\
                  e 2 3\n\
                  e 3 4\n\
                  e 4 5\n";
    let g = Graph::parse_dimacs(&input[..]).expect("geldige DIMACS-invoer");
    assert_eq!(g.n(), 5);
    assert_eq!(g.m(), 4);
    assert!(g.is_neighbour(0, 1));
    assert!(g.is_neighbour(1, 0));
    assert!(!g.is_neighbour(0, 2));
    assert_eq!(g.degree(2), 2);
    assert_eq!(g.degree(0), 1);
}

#[test]
fn parse_dimacs_ignores_duplicates_and_self_loops() {
    let input = b"p edge 3 4\ne 1 2\ne 2 1\ne 1 2\ne 3 3\n";
    let g = Graph::parse_dimacs(&input[..]).expect("geldige DIMACS-invoer");
    assert_eq!(g.m(), 1);
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.degree(2), 0);
}

#[test]
fn parse_dimacs_rejects_edge_before_header() {
    let input = b"e 1 2\np edge 3 1\n";
    assert!(Graph::parse_dimacs(&input[..]).is_err());
}

#[test]
fn parse_dimacs_rejects_out_of_bounds_edge() {
    let input = b"p edge 3 1\ne 1 4\n";
    assert!(Graph::parse_dimacs(&input[..]).is_err());
}

#[test]
fn parse_dimacs_rejects_missing_header() {
    let input = b"c alleen commentaar\n";
    assert!(Graph::parse_dimacs(&input[..]).is_err());
}

#[test]
fn push_edge_is_one_directional() {
    let mut g = Graph::with_vertices(3);
    g.push_edge(0, 1);
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.degree(1), 0);
    assert!(g.is_neighbour(0, 1));
    assert!(!g.is_neighbour(1, 0));
}

#[test]
fn from_edge_list_skips_invalid_edges() {
    let g = Graph::from_edge_list(3, &[(0, 1), (1, 1), (2, 7)]);
    assert_eq!(g.m(), 1);
}

#[test]
fn degeneracy_path() {
    let mut g = path5();
    g.build_degeneracy();
    // LIFO-afpelvolgorde: 4, 3, 2, 1 op restgraad 1, daarna 0 op restgraad 0.
    assert_eq!(g.degeneracy().unwrap(), &[0, 1, 1, 1, 1]);
    assert_eq!(g.max_degeneracy(), 1);
}

#[test]
fn degeneracy_complete_graph() {
    let mut g = Graph::from_edge_list(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    g.build_degeneracy();
    // Elke afpelstap verlaagt de minimale restgraad met één.
    let mut cores: Vec<usize> = g.degeneracy().unwrap().to_vec();
    cores.sort_unstable();
    assert_eq!(cores, vec![0, 1, 2, 3]);
    assert_eq!(g.max_degeneracy(), 3);
}

#[test]
fn degeneracy_star() {
    let mut g = Graph::from_edge_list(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
    g.build_degeneracy();
    // Bladeren 5..2 vallen op restgraad 1, dan het centrum; het laatste
    // blad is dan al tot restgraad 0 gezakt.
    assert_eq!(g.degeneracy().unwrap(), &[1, 0, 1, 1, 1, 1]);
    assert_eq!(g.max_degeneracy(), 1);
}

#[test]
fn degeneracy_isolated_vertices() {
    let mut g = Graph::with_vertices(4);
    g.build_degeneracy();
    assert_eq!(g.degeneracy().unwrap(), &[0, 0, 0, 0]);
    assert_eq!(g.max_degeneracy(), 0);
}

#[test]
fn degeneracy_bounded_by_max_degree() {
    let mut g = Graph::from_edge_list(
        7,
        &[(0, 1), (0, 2), (0, 3), (1, 2), (3, 4), (4, 5), (5, 6), (6, 3)],
    );
    let max_degree = (0..g.n()).map(|v| g.degree(v)).max().unwrap();
    g.build_degeneracy();
    for &core in g.degeneracy().unwrap() {
        assert!(core <= max_degree);
    }
}
