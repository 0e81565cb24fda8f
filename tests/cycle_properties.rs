use std::collections::BTreeSet;

use nolonely::cycles::{
    cycle_length_closed_by, monochromatic_cycle_lengths, scan_for_lonely_edges, CycleLengths,
};
use nolonely::{Color, ColoredGraph, Vertex, UNCOLORED};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Cycle = Vec<(Vertex, Vertex)>;

fn key(u: Vertex, v: Vertex) -> (Vertex, Vertex) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

fn random_graph(rng: &mut StdRng, max_color: Color) -> ColoredGraph {
    let n = rng.gen_range(3..=7);
    let mut g = ColoredGraph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(0.5) {
                g.add_colored_edge(u, v, rng.gen_range(0..=max_color)).unwrap();
            }
        }
    }
    g
}

/// Every simple cycle of `g`, each as its sorted list of edge keys.
fn all_simple_cycles(g: &ColoredGraph) -> Vec<Cycle> {
    fn walk(
        g: &ColoredGraph,
        start: Vertex,
        current: Vertex,
        path: &mut Vec<Vertex>,
        found: &mut BTreeSet<Cycle>,
    ) {
        for next in g.neighbors(current).unwrap() {
            if next == start && path.len() > 2 {
                let mut cycle: Cycle = path
                    .windows(2)
                    .map(|w| key(w[0], w[1]))
                    .chain(std::iter::once(key(current, start)))
                    .collect();
                cycle.sort();
                found.insert(cycle);
            } else if next > start && !path.contains(&next) {
                path.push(next);
                walk(g, start, next, path, found);
                path.pop();
            }
        }
    }

    let mut found = BTreeSet::new();
    for start in g.vertices() {
        let mut path = vec![start];
        walk(g, start, start, &mut path, &mut found);
    }
    found.into_iter().collect()
}

fn color_count(g: &ColoredGraph, cycle: &Cycle, color: Color) -> usize {
    cycle
        .iter()
        .filter(|&&(u, v)| g.label(u, v).unwrap() == color)
        .count()
}

fn edges_of_reported(cycle: &[Vertex]) -> Cycle {
    let n = cycle.len();
    let mut edges: Cycle = (0..n).map(|i| key(cycle[i], cycle[(i + 1) % n])).collect();
    edges.sort();
    edges
}

#[test]
fn test_lonely_scan_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let g = random_graph(&mut rng, 2);
        let cycles = all_simple_cycles(&g);

        for color in 1..=2 {
            let lonely_exists = cycles.iter().any(|c| color_count(&g, c, color) == 1);
            match scan_for_lonely_edges(&g, color) {
                None => assert!(!lonely_exists, "missed a lonely cycle in {:?}", g),
                Some(found) => {
                    assert!(lonely_exists);
                    assert!(found.len() > 2);

                    let mut distinct = found.cycle.clone();
                    distinct.sort();
                    distinct.dedup();
                    assert_eq!(distinct.len(), found.cycle.len());

                    let edges = edges_of_reported(&found.cycle);
                    assert!(cycles.contains(&edges));
                    assert_eq!(color_count(&g, &edges, color), 1);

                    let mut expected: Vec<_> = edges
                        .iter()
                        .copied()
                        .filter(|&(u, v)| g.label(u, v).unwrap() == UNCOLORED)
                        .collect();
                    expected.sort();
                    let mut reported: Vec<_> = found.uncolored.iter().map(|e| e.key()).collect();
                    reported.sort();
                    assert_eq!(reported, expected);
                }
            }
        }
    }
}

#[test]
fn test_length_validator_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let g = random_graph(&mut rng, 1);
        let lengths: BTreeSet<usize> = all_simple_cycles(&g)
            .iter()
            .filter(|c| color_count(&g, c, 1) == c.len())
            .map(Vec::len)
            .collect();

        let verdict = monochromatic_cycle_lengths(&g, 1);
        match lengths.len() {
            0 => assert_eq!(verdict, CycleLengths::Acyclic),
            1 => assert_eq!(verdict, CycleLengths::Uniform(*lengths.iter().next().unwrap())),
            _ => assert!(matches!(verdict, CycleLengths::Mixed { .. })),
        }
        assert_eq!(verdict, monochromatic_cycle_lengths(&g, 1));
    }
}

#[test]
fn test_single_edge_closes_the_unique_new_cycle() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let n = rng.gen_range(3..=8);
        let mut g = ColoredGraph::new(n);

        // random color-1 forest: attach each vertex to an earlier one, or leave it alone
        for v in 1..n {
            if rng.gen_bool(0.8) {
                let parent = rng.gen_range(0..v);
                g.add_colored_edge(parent, v, 1).unwrap();
            }
        }
        let free: Vec<(Vertex, Vertex)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .filter(|&(u, v)| !g.has_edge(u, v))
            .collect();
        if free.is_empty() {
            continue;
        }
        let (u, v) = free[rng.gen_range(0..free.len())];
        g.add_colored_edge(u, v, 1).unwrap();

        let expected: Vec<usize> = all_simple_cycles(&g)
            .iter()
            .filter(|c| color_count(&g, c, 1) == c.len())
            .map(Vec::len)
            .collect();
        assert!(expected.len() <= 1);

        let length = cycle_length_closed_by(&g, (u, v), 1).unwrap();
        assert_eq!(length, expected.first().copied().unwrap_or(0));
        assert_eq!(length, cycle_length_closed_by(&g, (v, u), 1).unwrap());
    }
}
