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

//! Preflows on bidirectional graphs.
//!
//! A preflow assigns a flow value to each edge such that the flow on an
//! edge is the negated flow on its reverse edge. The *divergence* of a
//! vertex is its outflow minus its inflow. Hence a vertex that received
//! more flow than it sent on has negative divergence; this is called an
//! *active* vertex, and `-divergence` is its excess.

use crate::collections::{EdgeMap, PropertyMap, VertexMap};
use crate::traits::BidirectionalGraph;

use crate::num::traits::NumAssign;

/// Flow values on edges together with the divergence of each vertex.
pub struct Preflow<'a, G, F>
where
    G: BidirectionalGraph<'a>,
{
    graph: &'a G,
    divergences: VertexMap<F>,
    flows: EdgeMap<'a, G, F>,
}

impl<'a, G, F> Clone for Preflow<'a, G, F>
where
    G: BidirectionalGraph<'a>,
    F: Clone,
{
    fn clone(&self) -> Self {
        Preflow {
            graph: self.graph,
            divergences: self.divergences.clone(),
            flows: self.flows.clone(),
        }
    }
}

impl<'a, G, F> Preflow<'a, G, F>
where
    G: BidirectionalGraph<'a>,
    F: NumAssign + Copy,
{
    /// Return the zero preflow on `g`.
    pub fn new(g: &'a G) -> Self {
        Preflow {
            graph: g,
            divergences: VertexMap::new(g, F::zero()),
            flows: EdgeMap::new(g, F::zero()),
        }
    }

    /// Send `amount` units of flow along `e`.
    ///
    /// The flow on `e` increases and the flow on its reverse edge decreases
    /// by `amount`. The divergence of the source of `e` increases and the
    /// divergence of its target decreases by `amount`.
    pub fn push(&mut self, e: G::Edge, amount: F) {
        let r = self.graph.reversed(e);
        let u = self.graph.target(r);
        let v = self.graph.target(e);

        self.divergences[u] += amount;
        self.divergences[v] -= amount;

        *self.flows.at(e) += amount;
        *self.flows.at(r) -= amount;
    }

    /// Return the flow on edge `e`.
    pub fn flow(&self, e: G::Edge) -> F {
        *self.flows.get(e)
    }

    /// Return the outflow minus the inflow of vertex `u`.
    pub fn divergence(&self, u: usize) -> F {
        self.divergences[u]
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &'a G {
        self.graph
    }
}
