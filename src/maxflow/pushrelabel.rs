// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! This module implements a push relabel algorithm for solving max
//! flow problems.
//!
//! Active vertices are processed highest label first. The implementation
//! uses the gap heuristic (which may be switched off).
//!
//! Divergences follow the sign convention of [`Preflow`]: a vertex is active
//! if its divergence is *negative*. Once the algorithm has converged, the
//! divergence of each vertex except the source and the sink is zero and
//! `-divergence(sink)` is the value of a maximum flow.
//!
//! # Example
//!
//! ```
//! use rs_flow::maxflow::{CapacityMap, PushRelabel};
//! use rs_flow::{AdjacencyGraph, FlatGraph};
//!
//! let arcs = [
//!     (0, 1, 7), (0, 4, 4), (1, 2, 5), (1, 3, 3), (2, 5, 8),
//!     (3, 2, 3), (3, 5, 5), (4, 1, 3), (4, 3, 2),
//! ];
//!
//! let mut g = AdjacencyGraph::new(6);
//! for &(u, v, _) in &arcs {
//!     g.add_arc(u, v);
//! }
//! let g = FlatGraph::new(&g);
//!
//! let mut caps = CapacityMap::new(&g);
//! for &(u, v, c) in &arcs {
//!     caps.add(g.find_edge(u, v).unwrap(), c);
//! }
//!
//! let mut pr = PushRelabel::new(&g, &caps, 0, 5);
//! while pr.push_node() {}
//!
//! let flow = pr.preflow();
//! assert_eq!(-flow.divergence(5), 10);
//! assert!((1..5).all(|u| flow.divergence(u) == 0));
//! assert!((0..g.num_edges()).all(|e| flow.flow(e) == -flow.flow(g.reversed(e))));
//! assert!((0..g.num_edges()).all(|e| flow.flow(e) <= caps.capacity(e)));
//! ```

use super::capacity::{Capacities, ResidualCapacities};
use super::preflow::Preflow;
use crate::collections::VertexMap;
use crate::traits::BidirectionalGraph;

use log::{debug, trace, warn};

use std::cmp::{max, min};
use std::collections::VecDeque;
use std::ops::Neg;

use crate::num::traits::NumAssign;

/// The push-relabel algorithm.
///
/// This struct contains all algorithmic working data.
pub struct PushRelabel<'a, G, C, F>
where
    G: BidirectionalGraph<'a>,
{
    /// The underlying graph.
    g: &'a G,
    /// The capacity of each edge.
    capacities: &'a C,
    /// The source vertex.
    src: usize,
    /// The sink vertex.
    snk: usize,

    /// The current preflow.
    preflow: Preflow<'a, G, F>,
    /// The edges leaving each vertex together with their targets.
    edges: Vec<Vec<(G::Edge, usize)>>,
    /// The label (height) of each vertex.
    labels: VertexMap<usize>,
    /// The position of the current edge of each vertex in `edges`.
    current: VertexMap<usize>,
    /// The buckets containing the vertices of a specific label.
    buckets: Vec<Bucket>,
    /// The largest label of an active vertex.
    max_label: usize,
    /// The number of buckets. Labels never reach this value.
    limit: usize,

    /// The number of push operations.
    pub cnt_push: usize,
    /// The number of relabel operations.
    pub cnt_relabel: usize,
    /// The number of gaps found.
    pub cnt_gap: usize,
    /// Whether to use the gap heuristic.
    pub use_gap_heuristic: bool,
}

/// A bucket containing vertices of some label.
///
/// Source and sink are never contained in a bucket.
#[derive(Clone, Default)]
struct Bucket {
    /// The active vertices of this label.
    active: VecDeque<usize>,
    /// Number of inactive vertices of this label.
    num_inact: usize,
}

impl Bucket {
    /// Returns `true` if there are neither active nor inactive vertices of
    /// the bucket's label.
    fn is_empty(&self) -> bool {
        self.active.is_empty() && self.num_inact == 0
    }

    fn add(&mut self, u: usize, active: bool) {
        if active {
            self.active.push_back(u);
        } else {
            self.num_inact += 1;
        }
    }
}

impl<'a, G, C, F> PushRelabel<'a, G, C, F>
where
    G: BidirectionalGraph<'a>,
    C: Capacities<G::Edge, Value = F>,
    F: NumAssign + Neg<Output = F> + Ord + Copy,
{
    /// Return a new push-relabel algorithm from `src` to `snk`.
    ///
    /// All edges leaving the source are saturated, the source's label is set
    /// to `n`, all other labels are `0`.
    ///
    /// # Panics
    ///
    /// Panics if `src == snk`.
    pub fn new(g: &'a G, capacities: &'a C, src: usize, snk: usize) -> Self {
        assert_ne!(src, snk, "Source and sink node must not be equal");

        let n = g.num_vertices();
        let mut pr = PushRelabel {
            g,
            capacities,
            src,
            snk,
            preflow: Preflow::new(g),
            edges: g
                .vertices()
                .map(|u| g.outedges(u).map(|e| (e, g.target(e))).collect())
                .collect(),
            labels: VertexMap::new(g, 0),
            current: VertexMap::new(g, 0),
            buckets: vec![Bucket::default(); 2 * n],
            max_label: 0,
            limit: 2 * n,

            cnt_push: 0,
            cnt_relabel: 0,
            cnt_gap: 0,
            use_gap_heuristic: true,
        };
        pr.init_preflow();
        pr
    }

    fn init_preflow(&mut self) {
        let n = self.g.num_vertices();
        self.labels[self.src] = n;

        // send maximal flow out of source
        for i in 0..self.edges[self.src].len() {
            let (e, _) = self.edges[self.src][i];
            let c = self.capacities.capacity(e);
            if c > F::zero() {
                self.preflow.push(e, c);
            }
        }

        for u in 0..n {
            if u != self.src && u != self.snk {
                let active = self.is_active(u);
                self.buckets[0].add(u, active);
            }
        }
        self.max_label = 0;

        debug!(
            "push-relabel: {} vertices, {} active after saturating source {}, sink {}",
            n,
            self.buckets[0].active.len(),
            self.src,
            self.snk
        );
    }

    /// Return a reference to the underlying graph.
    pub fn as_graph(&self) -> &'a G {
        self.g
    }

    /// Return the source vertex.
    pub fn source(&self) -> usize {
        self.src
    }

    /// Return the sink vertex.
    pub fn sink(&self) -> usize {
        self.snk
    }

    /// Return the current label of a vertex.
    pub fn label(&self, u: usize) -> usize {
        self.labels[u]
    }

    /// Return the current preflow.
    ///
    /// After `push_node` has returned `false` this is a maximum flow.
    pub fn preflow(&self) -> &Preflow<'a, G, F> {
        &self.preflow
    }

    /// Return the current preflow, consuming the algorithm.
    pub fn into_preflow(self) -> Preflow<'a, G, F> {
        self.preflow
    }

    /// Return the flow value.
    ///
    /// This is the amount of flow that has reached the sink so far.
    pub fn value(&self) -> F {
        -self.preflow.divergence(self.snk)
    }

    /// Do one step of the algorithm.
    ///
    /// If there is an active vertex with the currently largest label, it is
    /// discharged. Otherwise the largest label of an active vertex is
    /// searched. Returns `false` if there is no active vertex left, i.e. if
    /// the preflow is a maximum flow.
    pub fn push_node(&mut self) -> bool {
        let level = self.max_label;
        if let Some(u) = self.buckets[level].active.pop_front() {
            self.discharge(u);
            return true;
        }

        match (0..level).rev().find(|&h| !self.buckets[h].active.is_empty()) {
            Some(h) => {
                self.max_label = h;
                true
            }
            None => false,
        }
    }

    /// Run the algorithm until the preflow is a maximum flow.
    ///
    /// Returns the flow value.
    pub fn run(&mut self) -> F {
        while self.push_node() {}
        debug!(
            "push-relabel: finished after {} pushes, {} relabels, {} gaps",
            self.cnt_push, self.cnt_relabel, self.cnt_gap
        );
        self.value()
    }

    /// Return the minimal cut associated with the maximum flow.
    ///
    /// These are the vertices reachable from the source in the residual
    /// graph, in increasing order. The result is only meaningful once the
    /// algorithm has converged.
    pub fn mincut(&self) -> Vec<usize> {
        let n = self.g.num_vertices();
        let mut seen = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        seen[self.src] = true;
        queue.push_back(self.src);

        while let Some(u) = queue.pop_front() {
            for &(e, v) in &self.edges[u] {
                if !seen[v] && self.residual(e) > F::zero() {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }

        (0..n).filter(|&u| seen[u]).collect()
    }

    fn residual(&self, e: G::Edge) -> F {
        ResidualCapacities::new(&self.preflow, self.capacities).capacity(e)
    }

    fn is_active(&self, u: usize) -> bool {
        self.preflow.divergence(u) < F::zero()
    }

    /// Discharges vertex `u`.
    ///
    /// Pushes along admissible edges starting at the current edge until
    /// either `u` is inactive or all edges have been tried. In the latter
    /// case `u` gets relabelled.
    fn discharge(&mut self, u: usize) {
        debug_assert!(self.is_active(u));

        let h = self.labels[u];
        let mut cur = self.current[u];
        while cur < self.edges[u].len() {
            let (e, v) = self.edges[u][cur];
            if h == self.labels[v] + 1 && self.residual(e) > F::zero() {
                self.push(u, e, v);
                if !self.is_active(u) {
                    // save current edge
                    self.current[u] = cur;
                    self.buckets[h].num_inact += 1;
                    return;
                }
            }
            cur += 1;
        }

        self.relabel(u);
    }

    /// Push as much excess of `u` along `e = (u, v)` as possible.
    fn push(&mut self, u: usize, e: G::Edge, v: usize) {
        let df = min(-self.preflow.divergence(u), self.residual(e));
        let was_active = self.is_active(v);

        self.preflow.push(e, df);
        self.cnt_push += 1;

        if !was_active && v != self.src && v != self.snk && self.is_active(v) {
            // v becomes active
            let h = self.labels[v];
            debug_assert!(self.buckets[h].num_inact > 0, "label:{} vertex:{}", h, v);
            self.buckets[h].num_inact -= 1;
            self.buckets[h].active.push_back(v);
        }
    }

    /// The relabel operation.
    ///
    /// The label of `u` becomes one more than the smallest label of a
    /// vertex reachable by a residual edge. The current edge is reset to
    /// that edge, and `u` is put back into the bucket of its new label.
    fn relabel(&mut self, u: usize) {
        self.cnt_relabel += 1;

        let n = self.g.num_vertices();
        let h_old = self.labels[u];

        let mut best: Option<(usize, usize)> = None;
        for (i, &(e, v)) in self.edges[u].iter().enumerate() {
            if self.residual(e) > F::zero() && best.map_or(true, |(_, h)| self.labels[v] < h) {
                best = Some((i, self.labels[v]));
            }
        }

        debug_assert!(best.is_some(), "Active vertex {} has no residual edge", u);
        let (i, h_min) = match best {
            Some(best) => best,
            None => {
                warn!("active vertex {} has no residual edge and is not discharged again", u);
                return;
            }
        };

        let mut h_new = h_min + 1;
        debug_assert!(h_new > h_old);
        self.current[u] = i;

        // *** The GAP heuristic ***
        if self.use_gap_heuristic && h_old > 0 && h_old < n && self.buckets[h_old].is_empty() {
            self.gap(h_old);
            if h_new <= n {
                h_new = n + 1;
                self.current[u] = 0;
            }
        }

        trace!("relabel vertex {} from {} to {}", u, h_old, h_new);
        self.labels[u] = h_new;

        debug_assert!(h_new < self.limit, "label {} exceeds limit {}", h_new, self.limit);
        if h_new < self.limit {
            self.buckets[h_new].active.push_back(u);
            self.max_label = max(self.max_label, h_new);
        } else {
            warn!("vertex {} got label {} and is not discharged again", u, h_new);
        }
    }

    /// Handle an empty bucket at label `h` with `0 < h < n`.
    ///
    /// No vertex with a label between `h` and `n` can reach the sink in the
    /// residual graph anymore. All of them are lifted to label `n + 1`.
    fn gap(&mut self, h: usize) {
        let n = self.g.num_vertices();
        self.cnt_gap += 1;

        for l in h + 1..n {
            if self.buckets[l].is_empty() {
                continue;
            }
            let mut bucket = std::mem::take(&mut self.buckets[l]);
            self.buckets[n + 1].num_inact += bucket.num_inact;
            self.buckets[n + 1].active.append(&mut bucket.active);
        }

        let mut nlifted = 0;
        for v in 0..n {
            if v != self.src && v != self.snk && self.labels[v] > h && self.labels[v] < n {
                self.labels[v] = n + 1;
                self.current[v] = 0;
                nlifted += 1;
            }
        }

        debug!("gap at label {}, lifted {} vertices to {}", h, nlifted, n + 1);
    }
}

/// Solve the maxflow problem using the push-relabel algorithm.
///
/// The function solves the max flow problem from the source vertex `src`
/// to the sink vertex `snk` with the given edge capacities.
///
/// The function returns the flow value, the maximum flow and the vertices
/// in a minimal cut.
pub fn pushrelabel<'a, G, C, F>(g: &'a G, capacities: &'a C, src: usize, snk: usize) -> (F, Preflow<'a, G, F>, Vec<usize>)
where
    G: BidirectionalGraph<'a>,
    C: Capacities<G::Edge, Value = F>,
    F: NumAssign + Neg<Output = F> + Ord + Copy,
{
    let mut maxflow = PushRelabel::new(g, capacities, src, snk);
    let value = maxflow.run();
    let mincut = maxflow.mincut();
    (value, maxflow.into_preflow(), mincut)
}

/// Return a maximum flow from `src` to `snk`.
///
/// The flow value is `-divergence(snk)` of the returned flow.
pub fn max_flow<'a, G, C, F>(g: &'a G, capacities: &'a C, src: usize, snk: usize) -> Preflow<'a, G, F>
where
    G: BidirectionalGraph<'a>,
    C: Capacities<G::Edge, Value = F>,
    F: NumAssign + Neg<Output = F> + Ord + Copy,
{
    let mut maxflow = PushRelabel::new(g, capacities, src, snk);
    maxflow.run();
    maxflow.into_preflow()
}

#[cfg(test)]
mod tests {
    use super::{max_flow, pushrelabel, PushRelabel};
    use crate::maxflow::CapacityMap;
    use crate::{AdjacencyGraph, FlatGraph};

    fn network(n: usize, arcs: &[(usize, usize, i32)]) -> FlatGraph {
        let mut g = AdjacencyGraph::new(n);
        for &(u, v, _) in arcs {
            g.add_arc(u, v);
        }
        FlatGraph::new(&g)
    }

    fn capacities<'a>(g: &'a FlatGraph, arcs: &[(usize, usize, i32)]) -> CapacityMap<'a, FlatGraph, i32> {
        let mut caps = CapacityMap::new(g);
        for &(u, v, c) in arcs {
            caps.add(g.find_edge(u, v).unwrap(), c);
        }
        caps
    }

    #[test]
    fn test_pushrelabel() {
        let (s, t, v1, v2, v3, v4) = (0, 1, 2, 3, 4, 5);
        let arcs = [
            (s, v1, 15),
            (s, v3, 10),
            (v1, v2, 6),
            (v1, v3, 7),
            (v2, t, 5),
            (v2, v4, 2),
            (v3, v2, 11),
            (v3, v4, 4),
            (v4, v2, 4),
            (v4, t, 20),
        ];
        let g = network(6, &arcs);
        let caps = capacities(&g, &arcs);

        let (value, flow, _) = pushrelabel(&g, &caps, s, t);

        assert_eq!(value, 11);
        assert_eq!(flow.divergence(s), 11);
        assert!((0..g.num_edges()).all(|e| flow.flow(e) <= caps.capacity(e)));
        assert!((0..6).filter(|&u| u != s && u != t).all(|u| flow.divergence(u) == 0));
    }

    #[test]
    fn test_sign_convention() {
        let arcs = [(0, 1, 5), (1, 2, 3)];
        let g = network(3, &arcs);
        let caps = capacities(&g, &arcs);

        let mut pr = PushRelabel::new(&g, &caps, 0, 2);
        // the saturating push from the source makes vertex 1 active
        assert_eq!(pr.preflow().divergence(0), 5);
        assert_eq!(pr.preflow().divergence(1), -5);
        assert_eq!(pr.label(0), 3);
        assert_eq!(pr.label(1), 0);

        assert!(pr.push_node());
        assert_eq!(pr.run(), 3);
        assert_eq!(pr.preflow().divergence(1), 0);
        assert_eq!(pr.preflow().divergence(0), 3);
        assert_eq!(pr.preflow().divergence(2), -3);
        assert!(!pr.push_node());
    }

    #[test]
    fn test_preflow_idempotent() {
        let arcs = [(0, 1, 4), (0, 2, 2), (1, 2, 3), (1, 3, 1), (2, 3, 5)];
        let g = network(4, &arcs);
        let caps = capacities(&g, &arcs);

        let mut pr = PushRelabel::new(&g, &caps, 0, 3);
        for _ in 0..3 {
            pr.push_node();
        }
        let first = pr.preflow().clone();
        let second = pr.preflow().clone();
        assert!((0..g.num_edges()).all(|e| first.flow(e) == second.flow(e)));
        assert!((0..4).all(|u| first.divergence(u) == second.divergence(u)));

        assert_eq!(pr.run(), 6);
    }

    #[test]
    fn test_no_source_edges() {
        let arcs = [(1, 2, 4), (2, 0, 3)];
        let g = network(3, &arcs);
        let caps = capacities(&g, &arcs);

        let mut pr = PushRelabel::new(&g, &caps, 0, 2);
        assert!(!pr.push_node());
        assert_eq!(pr.value(), 0);
        assert_eq!(pr.mincut(), vec![0]);
    }

    #[test]
    fn test_disconnected() {
        let arcs = [(0, 1, 4), (2, 3, 3)];
        let g = network(4, &arcs);
        let caps = capacities(&g, &arcs);

        let flow = max_flow(&g, &caps, 0, 3);
        assert_eq!(flow.divergence(3), 0);
        assert_eq!(flow.divergence(1), 0);
        assert_eq!(flow.divergence(0), 0);
    }

    #[test]
    fn test_mincut() {
        let arcs = [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 4), (1, 2, 1)];
        let g = network(4, &arcs);
        let caps = capacities(&g, &arcs);

        let (value, _, mincut) = pushrelabel(&g, &caps, 0, 3);
        assert_eq!(value, 5);

        let cut: i32 = arcs
            .iter()
            .filter(|&&(u, v, _)| mincut.contains(&u) && !mincut.contains(&v))
            .map(|&(_, _, c)| c)
            .sum();
        assert_eq!(cut, value);
    }

    #[test]
    fn test_gap_heuristic_off() {
        let arcs = [(0, 1, 5), (1, 2, 3), (2, 3, 9), (1, 4, 6), (4, 3, 1)];
        let g = network(5, &arcs);
        let caps = capacities(&g, &arcs);

        let mut with_gap = PushRelabel::new(&g, &caps, 0, 3);
        let mut without_gap = PushRelabel::new(&g, &caps, 0, 3);
        without_gap.use_gap_heuristic = false;

        assert_eq!(with_gap.run(), 4);
        assert_eq!(without_gap.run(), 4);
        assert_eq!(without_gap.cnt_gap, 0);
        assert!((0..5).filter(|&u| u != 0 && u != 3).all(|u| without_gap.preflow().divergence(u) == 0));
    }

    #[test]
    #[should_panic(expected = "Source and sink node must not be equal")]
    fn test_source_is_sink() {
        let arcs = [(0, 1, 1)];
        let g = network(2, &arcs);
        let caps = capacities(&g, &arcs);
        PushRelabel::new(&g, &caps, 1, 1);
    }

    // A negative capacity on the reverse edge leaves the receiving vertex
    // with excess but without any residual edge.
    fn stranded() -> (FlatGraph, Vec<(usize, usize, i32)>) {
        let arcs = vec![(0, 1, 3), (1, 0, -3), (0, 2, 1)];
        (network(3, &arcs), arcs)
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "has no residual edge")]
    fn test_relabel_without_residual_edge() {
        let (g, arcs) = stranded();
        let caps = capacities(&g, &arcs);
        let mut pr = PushRelabel::new(&g, &caps, 0, 2);
        pr.run();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_relabel_without_residual_edge() {
        let (g, arcs) = stranded();
        let caps = capacities(&g, &arcs);
        let mut pr = PushRelabel::new(&g, &caps, 0, 2);
        assert_eq!(pr.run(), 1);
        assert_eq!(pr.preflow().divergence(1), -3);
        assert!(!pr.push_node());
    }
}
