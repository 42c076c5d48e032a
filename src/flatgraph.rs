/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A bidirectional graph with flat edge storage.
//!
//! A `FlatGraph` is built once from an arbitrary [`Graph`]. Each connection
//! `u -> v` of the input graph becomes a pair of mutually reversed edges
//! `u -> v` and `v -> u` with ids `2k` and `2k + 1`. Parallel connections
//! between the same pair of vertices (in either direction) are merged into
//! a single pair, and loops are dropped.
//!
//! Vertices are numbered `0..n` and edges `0..m`, hence vertex and edge
//! maps on a flat graph are plain vectors.
//!
//! # Example
//!
//! ```
//! use rs_flow::{BidirectionalGraph, FlatGraph, Graph};
//!
//! let base: Vec<Vec<usize>> = vec![vec![1], vec![0, 2], vec![]];
//! let g = FlatGraph::new(&base);
//!
//! assert_eq!(g.num_vertices(), 3);
//! assert_eq!(g.num_edges(), 4);
//! for e in 0..g.num_edges() {
//!     assert_eq!(g.reversed(g.reversed(e)), e);
//! }
//! assert_eq!(g.outgoing(1).len(), 2);
//! ```

use crate::traits::{BidirectionalGraph, Graph, GraphIterator};

use std::collections::HashMap;
use std::ops::Range;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Data for an edge in a flat graph.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EdgeData {
    target: usize,
    reversed: usize,
}

/// The segment of the adjacency list holding the edges leaving a vertex.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Segment {
    start: usize,
    len: usize,
}

impl Segment {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A bidirectional graph with dense vertex and edge numbers.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatGraph {
    segments: Vec<Segment>,
    // The edge numbers ordered by their source vertex, so that the edges
    // leaving a vertex are in successive positions.
    adj: Vec<usize>,
    edges: Vec<EdgeData>,
}

impl FlatGraph {
    /// Build the flat graph of some base graph.
    ///
    /// Runs in `O(n + m)` expected time.
    pub fn new<'a, G>(g: &'a G) -> Self
    where
        G: Graph<'a>,
    {
        let n = g.num_vertices();
        // enumerated[u][v] is the id of the edge u -> v, if already created
        let mut enumerated: Vec<HashMap<usize, usize>> = vec![HashMap::new(); n];
        let mut incident: Vec<Vec<usize>> = vec![vec![]; n];
        let mut edges = vec![];

        for u in 0..n {
            for e in g.outedges(u) {
                let v = g.target(e);
                if u == v || enumerated[u].contains_key(&v) {
                    continue;
                }

                let id = edges.len();
                edges.push(EdgeData { target: v, reversed: id + 1 });
                edges.push(EdgeData { target: u, reversed: id });
                enumerated[u].insert(v, id);
                enumerated[v].insert(u, id + 1);
                incident[u].push(id);
                incident[v].push(id + 1);
            }
        }

        let mut segments = vec![Segment::default(); n];
        for u in 0..n {
            segments[u].len = incident[u].len();
        }
        for u in 1..n {
            segments[u].start = segments[u - 1].end();
        }

        let mut adj = vec![0; edges.len()];
        for (u, inc) in incident.iter().enumerate() {
            adj[segments[u].start..segments[u].end()].copy_from_slice(inc);
        }

        FlatGraph { segments, adj, edges }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.segments.len()
    }

    /// Return the number of (directed) edges.
    ///
    /// This is always an even number, each edge comes with its reverse.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the ids of the edges leaving `u`.
    pub fn outgoing(&self, u: usize) -> &[usize] {
        let seg = self.segments[u];
        &self.adj[seg.start..seg.end()]
    }

    /// Return the target vertex of edge `e`.
    pub fn target(&self, e: usize) -> usize {
        self.edges[e].target
    }

    /// Return the reverse edge of `e`.
    pub fn reversed(&self, e: usize) -> usize {
        self.edges[e].reversed
    }

    /// Return the source vertex of edge `e`.
    pub fn source(&self, e: usize) -> usize {
        self.edges[self.edges[e].reversed].target
    }

    /// Return the edge from `u` to `v`, if there is one.
    ///
    /// This is a linear scan over the edges leaving `u`.
    pub fn find_edge(&self, u: usize, v: usize) -> Option<usize> {
        self.outgoing(u).iter().cloned().find(|&e| self.target(e) == v)
    }
}

/// A graph iterator over the edges leaving a vertex of a flat graph.
#[derive(Clone)]
pub struct OutIt(Range<usize>);

impl GraphIterator<FlatGraph> for OutIt {
    type Item = usize;

    fn next(&mut self, g: &FlatGraph) -> Option<usize> {
        self.0.next().map(|i| g.adj[i])
    }

    fn size_hint(&self, _g: &FlatGraph) -> (usize, Option<usize>) {
        self.0.size_hint()
    }

    fn count(self, _g: &FlatGraph) -> usize {
        self.0.len()
    }
}

impl<'a> Graph<'a> for FlatGraph {
    type Edge = usize;
    type OutIt = OutIt;

    fn num_vertices(&self) -> usize {
        FlatGraph::num_vertices(self)
    }

    fn out_iter(&'a self, u: usize) -> OutIt {
        let seg = self.segments[u];
        OutIt(seg.start..seg.end())
    }

    fn target(&self, e: usize) -> usize {
        FlatGraph::target(self, e)
    }

    fn num_edges(&self) -> Option<usize> {
        Some(self.edges.len())
    }

    fn edge_index(&self, e: usize) -> Option<usize> {
        Some(e)
    }
}

impl<'a> BidirectionalGraph<'a> for FlatGraph {
    fn reversed(&self, e: usize) -> usize {
        FlatGraph::reversed(self, e)
    }

    fn source(&self, e: usize) -> usize {
        FlatGraph::source(self, e)
    }
}
