/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use rs_flow::maxflow::{max_flow, pushrelabel, CapacityMap, Preflow, PushRelabel};
use rs_flow::{AdjacencyGraph, FlatGraph};

use ordered_float::NotNan;
use proptest::prelude::*;

struct Network {
    capacity: Vec<Vec<i32>>,
    source: usize,
    sink: usize,
    maxflow: i32,
}

fn networks() -> Vec<Network> {
    vec![
        // e-maxx network
        Network {
            capacity: vec![
                vec![0, 7, 0, 0, 4, 0],
                vec![0, 0, 5, 3, 0, 0],
                vec![0, 0, 0, 0, 0, 8],
                vec![0, 0, 3, 0, 0, 5],
                vec![0, 3, 0, 2, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
            ],
            source: 0,
            sink: 5,
            maxflow: 10,
        },
        // Edmonds-Karp network from wikipedia
        Network {
            capacity: vec![
                vec![0, 3, 0, 3, 0, 0, 0],
                vec![0, 0, 4, 0, 0, 0, 0],
                vec![3, 0, 0, 1, 2, 0, 0],
                vec![0, 0, 0, 0, 2, 6, 0],
                vec![0, 1, 0, 0, 0, 0, 1],
                vec![0, 0, 0, 0, 0, 0, 9],
                vec![0, 0, 0, 0, 0, 0, 0],
            ],
            source: 0,
            sink: 6,
            maxflow: 5,
        },
        // worst case for Ford-Fulkerson
        Network {
            capacity: vec![
                vec![0, 1000, 1000, 0],
                vec![0, 0, 1, 1000],
                vec![0, 0, 0, 1000],
                vec![0, 0, 0, 0],
            ],
            source: 0,
            sink: 3,
            maxflow: 2000,
        },
        Network {
            capacity: vec![
                vec![0, 16, 0, 13, 0, 0],
                vec![0, 0, 12, 10, 0, 0],
                vec![0, 0, 0, 9, 0, 20],
                vec![0, 4, 0, 0, 14, 0],
                vec![0, 0, 7, 0, 0, 4],
                vec![0, 0, 0, 0, 0, 0],
            ],
            source: 0,
            sink: 5,
            maxflow: 23,
        },
        Network {
            capacity: vec![
                vec![0, 10, 5, 15, 0, 0, 0, 0],
                vec![0, 0, 4, 0, 9, 15, 0, 0],
                vec![0, 0, 0, 4, 0, 8, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 16, 0],
                vec![0, 0, 0, 0, 0, 15, 0, 10],
                vec![0, 0, 0, 0, 0, 0, 15, 10],
                vec![0, 0, 6, 0, 0, 0, 0, 10],
                vec![0, 0, 0, 0, 0, 0, 0, 0],
            ],
            source: 0,
            sink: 7,
            maxflow: 28,
        },
        // source and sink are not the first and last vertex
        Network {
            capacity: vec![
                vec![0, 0, 10, 0, 0, 12],
                vec![0, 0, 0, 4, 0, 7],
                vec![4, 14, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
                vec![16, 0, 12, 0, 0, 0],
                vec![0, 0, 9, 20, 0, 0],
            ],
            source: 4,
            sink: 3,
            maxflow: 23,
        },
    ]
}

fn flat_graph(capacity: &[Vec<i32>]) -> FlatGraph {
    let n = capacity.len();
    let mut g = AdjacencyGraph::new(n);
    for u in 0..n {
        for v in 0..n {
            if capacity[u][v] != 0 {
                g.add_arc(u, v);
            }
        }
    }
    FlatGraph::new(&g)
}

fn capacities<'a>(g: &'a FlatGraph, capacity: &[Vec<i32>]) -> CapacityMap<'a, FlatGraph, i32> {
    let mut caps = CapacityMap::new(g);
    for u in 0..g.num_vertices() {
        for &e in g.outgoing(u) {
            caps.set(e, capacity[u][g.target(e)]);
        }
    }
    caps
}

/// Check that `flow` is a feasible flow of value `value`.
fn check_flow(g: &FlatGraph, caps: &CapacityMap<FlatGraph, i32>, flow: &Preflow<FlatGraph, i32>, src: usize, snk: usize, value: i32) {
    assert_eq!(-flow.divergence(snk), value);
    assert_eq!(flow.divergence(src), value);
    for u in 0..g.num_vertices() {
        if u != src && u != snk {
            assert_eq!(flow.divergence(u), 0, "vertex {}", u);
        }
    }
    for e in 0..g.num_edges() {
        assert_eq!(flow.flow(e), -flow.flow(g.reversed(e)), "edge {}", e);
        assert!(flow.flow(e) <= caps.capacity(e), "edge {}", e);
    }
}

#[test]
fn test_samples() {
    for net in networks() {
        let g = flat_graph(&net.capacity);
        let caps = capacities(&g, &net.capacity);

        let flow = max_flow(&g, &caps, net.source, net.sink);
        assert_eq!(
            -flow.divergence(net.sink),
            net.maxflow,
            "Flow from {} to {}",
            net.source,
            net.sink
        );
        check_flow(&g, &caps, &flow, net.source, net.sink, net.maxflow);
    }
}

#[test]
fn test_gap_heuristic() {
    for &use_gap in &[true, false] {
        for net in networks() {
            let g = flat_graph(&net.capacity);
            let caps = capacities(&g, &net.capacity);

            let mut pr = PushRelabel::new(&g, &caps, net.source, net.sink);
            pr.use_gap_heuristic = use_gap;
            assert_eq!(
                pr.run(),
                net.maxflow,
                "Flow from {} to {} gap: {}",
                net.source,
                net.sink,
                use_gap
            );
            if !use_gap {
                assert_eq!(pr.cnt_gap, 0);
            }
            check_flow(&g, &caps, pr.preflow(), net.source, net.sink, net.maxflow);
        }
    }
}

#[test]
fn test_mincut() {
    for net in networks() {
        let g = flat_graph(&net.capacity);
        let caps = capacities(&g, &net.capacity);

        let (value, _, mincut) = pushrelabel(&g, &caps, net.source, net.sink);
        assert!(mincut.contains(&net.source));
        assert!(!mincut.contains(&net.sink));

        let n = net.capacity.len();
        let mut cut = 0;
        for &u in &mincut {
            for v in (0..n).filter(|v| !mincut.contains(v)) {
                cut += net.capacity[u][v];
            }
        }
        assert_eq!(cut, value);
    }
}

#[test]
fn test_real_capacities() {
    let nets = networks();
    let net = &nets[3];
    let g = flat_graph(&net.capacity);
    let mut caps = CapacityMap::new(&g);
    for u in 0..g.num_vertices() {
        for &e in g.outgoing(u) {
            let c = f64::from(net.capacity[u][g.target(e)]) / 2.0;
            caps.set(e, NotNan::new(c).unwrap());
        }
    }

    let (value, _, _) = pushrelabel(&g, &caps, net.source, net.sink);
    assert_eq!(value.into_inner(), 11.5);
}

#[test]
fn test_push_node_steps() {
    let nets = networks();
    let net = &nets[0];
    let g = flat_graph(&net.capacity);
    let caps = capacities(&g, &net.capacity);
    let mut pr = PushRelabel::new(&g, &caps, net.source, net.sink);
    let mut steps = 0;
    while pr.push_node() {
        steps += 1;
    }
    assert!(steps > 0);
    assert!(pr.cnt_relabel > 0);
    assert_eq!(pr.value(), net.maxflow);
    assert!(!pr.push_node());
    assert_eq!(pr.value(), net.maxflow);
}

fn brute_force_mincut(capacity: &[Vec<i32>], src: usize, snk: usize) -> i32 {
    let n = capacity.len();
    (0u32..1 << n)
        .filter(|&mask| mask & (1u32 << src) != 0 && mask & (1u32 << snk) == 0)
        .map(|mask| {
            let mut cut = 0;
            for u in (0..n).filter(|&u| mask & (1u32 << u) != 0) {
                for v in (0..n).filter(|&v| mask & (1u32 << v) == 0) {
                    cut += capacity[u][v];
                }
            }
            cut
        })
        .min()
        .unwrap()
}

fn network_strategy() -> impl Strategy<Value = (Vec<Vec<i32>>, usize, usize)> {
    (2usize..=7)
        .prop_flat_map(|n| {
            let arc = prop_oneof![2 => Just(0i32), 3 => 1i32..20];
            (
                proptest::collection::vec(proptest::collection::vec(arc, n), n),
                0..n,
                0..n,
            )
        })
        .prop_filter("source and sink must differ", |(_, src, snk)| src != snk)
}

proptest! {
    #[test]
    fn proptest_maxflow_mincut((capacity, src, snk) in network_strategy()) {
        let g = flat_graph(&capacity);
        let caps = capacities(&g, &capacity);
        let expected = brute_force_mincut(&capacity, src, snk);

        for &use_gap in &[true, false] {
            let mut pr = PushRelabel::new(&g, &caps, src, snk);
            pr.use_gap_heuristic = use_gap;
            prop_assert_eq!(pr.run(), expected);

            let flow = pr.preflow();
            for u in 0..g.num_vertices() {
                if u != src && u != snk {
                    prop_assert_eq!(flow.divergence(u), 0);
                }
            }
            for e in 0..g.num_edges() {
                prop_assert!(flow.flow(e) <= caps.capacity(e));
            }
        }
    }
}
