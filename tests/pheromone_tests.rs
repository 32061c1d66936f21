// tests/pheromone_tests.rs
//! Contracttests voor de twee feromoon-backends. De eigenschappen gelden
//! voor beide; de generieke helpers draaien dus op de vlakke array én op de
//! segmentboom. De boom krijgt daarbovenop een verdelingstest (χ²) voor de
//! gewogen trekking.

extern crate amis;
use amis::pheromone::{PheromoneArray, PheromoneStore};
use amis::pheromone_tree::PheromoneTree;
use rand::rngs::StdRng;
use rand::SeedableRng;

const RHO: f64 = 0.5;
const TAU_MIN: f64 = 1.0;
const TAU_MAX: f64 = 100.0;

fn array(n: usize) -> PheromoneArray {
    PheromoneArray::new(n, RHO, TAU_MIN, TAU_MAX)
}

fn tree(n: usize) -> PheromoneTree {
    PheromoneTree::new(n, RHO, TAU_MIN, TAU_MAX)
}

/*────────── Generieke contracthelpers ──────────*/

fn check_initializes_at_tau_max<P: PheromoneStore>(store: &P) {
    assert_eq!(store.vertices(), 7);
    for v in 0..store.vertices() {
        assert_eq!(store.get(v), TAU_MAX);
    }
    assert!((store.total() - 7.0 * TAU_MAX).abs() < 1e-9);
}

fn check_deposit_clamps_above<P: PheromoneStore>(store: &mut P) {
    store.set(3, 5.0);
    store.deposit(3, 2.5);
    assert!((store.get(3) - 7.5).abs() < 1e-9);
    store.deposit(3, 1e9);
    assert_eq!(store.get(3), TAU_MAX);
}

fn check_evaporate_stays_within_bounds<P: PheromoneStore>(store: &mut P) {
    store.invalidate(2);
    store.evaporate();
    for v in 0..store.vertices() {
        assert!(store.get(v) >= TAU_MIN);
        assert!(store.get(v) <= TAU_MAX);
    }
    // Geïnvalideerde niveaus worden door verdamping weer opgetild tot τ_min.
    assert_eq!(store.get(2), TAU_MIN);
}

fn check_evaporate_multiplies<P: PheromoneStore>(store: &mut P) {
    store.evaporate();
    assert!((store.get(0) - TAU_MAX * (1.0 - RHO)).abs() < 1e-9);
    store.evaporate();
    assert!((store.get(0) - TAU_MAX * (1.0 - RHO) * (1.0 - RHO)).abs() < 1e-9);
}

fn check_set_clamps<P: PheromoneStore>(store: &mut P) {
    store.set(1, 42.5);
    assert!((store.get(1) - 42.5).abs() < 1e-9);
    store.set(1, 1e9);
    assert_eq!(store.get(1), TAU_MAX);
    store.set(1, -3.0);
    assert_eq!(store.get(1), TAU_MIN);
}

fn check_invalidate_many<P: PheromoneStore>(store: &mut P) {
    store.invalidate_many(&[0, 2, 4]);
    assert_eq!(store.get(0), 0.0);
    assert_eq!(store.get(2), 0.0);
    assert_eq!(store.get(4), 0.0);
    assert_eq!(store.get(1), TAU_MAX);
    assert!((store.total() - 4.0 * TAU_MAX).abs() < 1e-9);
}

fn check_clone_is_deep<P: PheromoneStore>(store: &P) {
    let mut copy = store.clone();
    copy.invalidate(0);
    assert_eq!(copy.get(0), 0.0);
    assert_eq!(store.get(0), TAU_MAX);
}

fn check_sample_skips_invalidated<P: PheromoneStore>(store: &mut P) {
    let keep = 2usize;
    let all_but_keep: Vec<usize> = (0..store.vertices()).filter(|&v| v != keep).collect();
    store.invalidate_many(&all_but_keep);

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        assert_eq!(store.weighted_sample(&mut rng), Some(keep));
    }
}

fn check_sample_exhausted<P: PheromoneStore>(store: &mut P) {
    let all: Vec<usize> = (0..store.vertices()).collect();
    store.invalidate_many(&all);
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(store.weighted_sample(&mut rng), None);
}

/// χ²-toets op 20 000 trekkingen uit niveaus 10/20/30/40; de kritieke
/// waarde 16.27 hoort bij df = 3 en p = 0.001.
fn check_sample_distribution<P: PheromoneStore>(store: &mut P) {
    store.set(0, 10.0);
    store.set(1, 20.0);
    store.set(2, 30.0);
    store.set(3, 40.0);

    let draws = 20_000usize;
    let mut counts = [0usize; 4];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..draws {
        let v = store.weighted_sample(&mut rng).expect("positieve totale τ");
        counts[v] += 1;
    }

    let expected = [0.1, 0.2, 0.3, 0.4].map(|p| p * draws as f64);
    let chi2: f64 = counts
        .iter()
        .zip(expected.iter())
        .map(|(&observed, &e)| {
            let d = observed as f64 - e;
            d * d / e
        })
        .sum();
    assert!(chi2 < 16.27, "χ² = {} wijkt te ver af", chi2);
}

/*────────── Vlakke array ──────────*/

#[test]
fn array_initializes_at_tau_max() {
    check_initializes_at_tau_max(&array(7));
}

#[test]
fn array_deposit_clamps_above() {
    check_deposit_clamps_above(&mut array(7));
}

#[test]
fn array_evaporate_stays_within_bounds() {
    check_evaporate_stays_within_bounds(&mut array(7));
}

#[test]
fn array_evaporate_multiplies() {
    check_evaporate_multiplies(&mut array(7));
}

#[test]
fn array_set_clamps() {
    check_set_clamps(&mut array(7));
}

#[test]
fn array_invalidate_many() {
    check_invalidate_many(&mut array(7));
}

#[test]
fn array_clone_is_deep() {
    check_clone_is_deep(&array(7));
}

#[test]
fn array_sample_skips_invalidated() {
    check_sample_skips_invalidated(&mut array(7));
}

#[test]
fn array_sample_exhausted() {
    check_sample_exhausted(&mut array(7));
}

#[test]
fn array_sample_distribution() {
    check_sample_distribution(&mut array(4));
}

/*────────── Segmentboom ──────────*/

#[test]
fn tree_initializes_at_tau_max() {
    check_initializes_at_tau_max(&tree(7));
}

#[test]
fn tree_deposit_clamps_above() {
    check_deposit_clamps_above(&mut tree(7));
}

#[test]
fn tree_evaporate_stays_within_bounds() {
    check_evaporate_stays_within_bounds(&mut tree(7));
}

#[test]
fn tree_evaporate_multiplies() {
    check_evaporate_multiplies(&mut tree(7));
}

#[test]
fn tree_set_clamps() {
    check_set_clamps(&mut tree(7));
}

#[test]
fn tree_invalidate_many() {
    check_invalidate_many(&mut tree(7));
}

#[test]
fn tree_clone_is_deep() {
    check_clone_is_deep(&tree(7));
}

#[test]
fn tree_sample_skips_invalidated() {
    check_sample_skips_invalidated(&mut tree(7));
}

#[test]
fn tree_sample_exhausted() {
    check_sample_exhausted(&mut tree(7));
}

#[test]
fn tree_sample_distribution() {
    check_sample_distribution(&mut tree(4));
}

/// De wortel moet na elke reeks mutaties de som van de bladeren blijven;
/// voor een bladaantal dat geen macht van twee is, blijven de
/// opvulbladeren daar buiten.
#[test]
fn tree_root_matches_leaf_sum_after_mixed_mutations() {
    let mut t = tree(5);
    t.set(0, 12.0);
    t.deposit(3, 7.0);
    t.invalidate(1);
    t.invalidate_many(&[2, 4]);
    t.evaporate();
    t.deposit(2, 3.0);

    let leaf_sum: f64 = (0..5).map(|v| t.get(v)).sum();
    assert!((t.total() - leaf_sum).abs() < 1e-9);
}

/// `set`/`get` werkt voor elke geldige knoop, ook als n geen macht van twee is.
#[test]
fn tree_leaf_mapping_round_trip() {
    let mut t = tree(5);
    for v in 0..5 {
        t.set(v, 10.0 + v as f64);
    }
    for v in 0..5 {
        assert!((t.get(v) - (10.0 + v as f64)).abs() < 1e-9);
    }
}

#[test]
#[should_panic(expected = "geen blad")]
fn tree_rejects_out_of_range_leaf() {
    let t = tree(5);
    let _ = t.get(5);
}

#[test]
fn single_vertex_tree_samples_its_only_leaf() {
    let t = tree(1);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(t.weighted_sample(&mut rng), Some(0));
}
