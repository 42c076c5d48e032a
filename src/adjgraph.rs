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

//! Plain adjacency list graphs.
//!
//! These are the simplest graphs one can feed into
//! [`FlatGraph::new`](crate::FlatGraph::new). A bare `Vec<Vec<usize>>`,
//! where entry `u` lists the targets of the edges leaving `u`, is already a
//! `Graph`. `AdjacencyGraph` wraps the same representation with a few
//! construction helpers.

use crate::traits::{Graph, GraphIterator};

use std::fmt;

/// Edge of an adjacency list graph.
///
/// The edge is the `pos`-th entry in the adjacency list of `source`. Such
/// edges are not numbered densely, so edge maps on these graphs are backed
/// by hash maps.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct AdjEdge {
    pub source: usize,
    pub pos: usize,
}

impl fmt::Display for AdjEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}#{}", self.source, self.pos)
    }
}

/// A graph iterator over the edges leaving a vertex of an adjacency list.
#[derive(Clone)]
pub struct AdjOutIt {
    source: usize,
    pos: usize,
}

impl<G> GraphIterator<G> for AdjOutIt
where
    G: AsRef<[Vec<usize>]>,
{
    type Item = AdjEdge;

    fn next(&mut self, g: &G) -> Option<AdjEdge> {
        if self.pos < g.as_ref()[self.source].len() {
            let e = AdjEdge {
                source: self.source,
                pos: self.pos,
            };
            self.pos += 1;
            Some(e)
        } else {
            None
        }
    }

    fn size_hint(&self, g: &G) -> (usize, Option<usize>) {
        let n = g.as_ref()[self.source].len() - self.pos;
        (n, Some(n))
    }
}

impl<'a> Graph<'a> for Vec<Vec<usize>> {
    type Edge = AdjEdge;
    type OutIt = AdjOutIt;

    fn num_vertices(&self) -> usize {
        self.len()
    }

    fn out_iter(&'a self, u: usize) -> AdjOutIt {
        AdjOutIt { source: u, pos: 0 }
    }

    fn target(&self, e: AdjEdge) -> usize {
        self[e.source][e.pos]
    }
}

/// A simple graph stored as adjacency lists.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Return a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        AdjacencyGraph { adj: vec![vec![]; n] }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Connect `u` and `v` in both directions.
    pub fn connect(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
        self.adj[v].push(u);
    }

    /// Add a single arc from `u` to `v`.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
    }

    /// Return the targets of all edges leaving `u`.
    pub fn links(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }
}

impl AsRef<[Vec<usize>]> for AdjacencyGraph {
    fn as_ref(&self) -> &[Vec<usize>] {
        &self.adj
    }
}

impl From<Vec<Vec<usize>>> for AdjacencyGraph {
    fn from(adj: Vec<Vec<usize>>) -> Self {
        AdjacencyGraph { adj }
    }
}

impl<'a> Graph<'a> for AdjacencyGraph {
    type Edge = AdjEdge;
    type OutIt = AdjOutIt;

    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn out_iter(&'a self, u: usize) -> AdjOutIt {
        AdjOutIt { source: u, pos: 0 }
    }

    fn target(&self, e: AdjEdge) -> usize {
        self.adj[e.source][e.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::{AdjEdge, AdjacencyGraph};
    use crate::traits::Graph;

    #[test]
    fn test_connect() {
        let mut g = AdjacencyGraph::new(3);
        g.connect(0, 1);
        g.add_arc(1, 2);

        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.links(0), &[1]);
        assert_eq!(g.links(1), &[0, 2]);
        assert!(g.links(2).is_empty());
    }

    #[test]
    fn test_outedges() {
        let g: Vec<Vec<usize>> = vec![vec![2, 1], vec![], vec![0]];

        let out: Vec<_> = g.outedges(0).collect();
        assert_eq!(out, vec![AdjEdge { source: 0, pos: 0 }, AdjEdge { source: 0, pos: 1 }]);
        assert_eq!(out.iter().map(|&e| g.target(e)).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(g.outedges(0).count(), 2);
        assert_eq!(g.outedges(1).count(), 0);
        assert_eq!(g.num_edges(), None);

        // restartable
        assert_eq!(g.outedges(0).collect::<Vec<_>>(), out);

        let h = AdjacencyGraph::from(g.clone());
        assert_eq!(h.outedges(2).map(|e| h.target(e)).collect::<Vec<_>>(), vec![0]);
    }
}
