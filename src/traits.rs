/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for graph data structures.
//!
//! Algorithms in this crate do not depend on a concrete graph type. They
//! only require the capabilities described here. There are two levels:
//!
//! 1. `Graph`: a finite directed graph with vertices numbered `0..n` and
//!    list access to the edges leaving a vertex. If the graph numbers its
//!    edges densely as well it may report so via `num_edges` and
//!    `edge_index`, which allows property maps to use plain vectors.
//! 2. `BidirectionalGraph`: each edge has an explicit reverse edge. This is
//!    what flow algorithms need for the residual graph.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

/// A graph iterator.
///
/// This is roughly the same interface as a standard iterator. However,
/// all its method take additionally the graph itself as parameter. This
/// allows the iterator to not contain a reference to internal graph data.
pub trait GraphIterator<G: ?Sized>: Clone {
    type Item;

    fn next(&mut self, g: &G) -> Option<Self::Item>;

    fn size_hint(&self, _g: &G) -> (usize, Option<usize>) {
        (0, None)
    }

    fn count(mut self, g: &G) -> usize {
        let mut c = 0;
        while self.next(g).is_some() {
            c += 1
        }
        c
    }

    fn iter(self, g: &G) -> GraphIter<G, Self>
    where
        G: Sized,
    {
        GraphIter(self, g)
    }
}

/// A graph iterator as a standard iterator.
///
/// This is a pair consisting of a graph iterator and a reference the
/// graph itself. It can be used as a standard iterator.
pub struct GraphIter<'a, G, I>(pub(crate) I, pub(crate) &'a G);

impl<'a, G, I> Clone for GraphIter<'a, G, I>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        GraphIter(self.0.clone(), self.1)
    }
}

impl<'a, G, I> Iterator for GraphIter<'a, G, I>
where
    I: GraphIterator<G>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next(self.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint(self.1)
    }

    fn count(self) -> usize {
        self.0.count(self.1)
    }
}

/// Iterator over edges leaving a vertex.
pub type OutIterator<'a, G> = GraphIter<'a, G, <G as Graph<'a>>::OutIt>;

/// A finite directed graph.
///
/// Vertices are always the numbers `0..num_vertices()`. Edges are of an
/// arbitrary copyable type, the graph only promises to enumerate the edges
/// leaving each vertex and to tell the target of an edge.
pub trait Graph<'a> {
    /// Type of an edge.
    type Edge: 'a + Copy + Eq + Hash + Debug;

    /// Type of a graph iterator over the edges leaving a vertex.
    type OutIt: GraphIterator<Self, Item = Self::Edge>;

    /// Return the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Return a range over all vertices.
    fn vertices(&self) -> Range<usize> {
        0..self.num_vertices()
    }

    /// Return a graph iterator over the edges leaving a vertex.
    ///
    /// Iterating twice yields the same sequence.
    fn out_iter(&'a self, u: usize) -> Self::OutIt;

    /// Return an iterator over the edges leaving a vertex.
    fn outedges(&'a self, u: usize) -> OutIterator<'a, Self>
    where
        Self: Sized,
    {
        GraphIter(self.out_iter(u), self)
    }

    /// Return the vertex an edge points to.
    fn target(&self, e: Self::Edge) -> usize;

    /// Return the number of edges if the edges are numbered `0..m`.
    ///
    /// Graphs returning `Some` here must return `Some` from `edge_index`
    /// for each of their edges.
    fn num_edges(&self) -> Option<usize> {
        None
    }

    /// Return the dense index of an edge, if the graph has one.
    fn edge_index(&self, _e: Self::Edge) -> Option<usize> {
        None
    }
}

/// A graph in which each edge has a designated reverse edge.
///
/// The reverse of the reverse edge is the edge itself.
pub trait BidirectionalGraph<'a>: Graph<'a> {
    /// Return the reverse edge of `e`.
    fn reversed(&self, e: Self::Edge) -> Self::Edge;

    /// Return the vertex an edge starts at.
    fn source(&self, e: Self::Edge) -> usize {
        self.target(self.reversed(e))
    }
}
