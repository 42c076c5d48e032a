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

//! Capacities of edges.
//!
//! Each direction of an edge has its own capacity. Capacities that have not
//! been set are zero, so an edge `u -> v` given only in one direction of the
//! input has capacity zero on its reverse edge `v -> u`. The residual
//! capacity of the reverse edge is still the flow already sent along
//! `u -> v`.

use super::preflow::Preflow;
use crate::collections::{EdgeMap, PropertyMap};
use crate::traits::{BidirectionalGraph, Graph};

use crate::num::traits::NumAssign;

/// Anything that assigns a capacity to edges of type `E`.
pub trait Capacities<E> {
    /// The numeric type of a capacity.
    type Value;

    /// Return the capacity of edge `e`.
    fn capacity(&self, e: E) -> Self::Value;
}

impl<'c, E, C> Capacities<E> for &'c C
where
    C: Capacities<E> + ?Sized,
{
    type Value = C::Value;

    fn capacity(&self, e: E) -> Self::Value {
        (**self).capacity(e)
    }
}

/// Capacities stored in an edge map.
pub struct CapacityMap<'a, G, F>
where
    G: Graph<'a>,
{
    capacities: EdgeMap<'a, G, F>,
}

impl<'a, G, F> Clone for CapacityMap<'a, G, F>
where
    G: Graph<'a>,
    F: Clone,
{
    fn clone(&self) -> Self {
        CapacityMap {
            capacities: self.capacities.clone(),
        }
    }
}

impl<'a, G, F> CapacityMap<'a, G, F>
where
    G: Graph<'a>,
    F: NumAssign + Copy,
{
    /// Return a map with all capacities zero.
    pub fn new(g: &'a G) -> Self {
        CapacityMap {
            capacities: EdgeMap::new(g, F::zero()),
        }
    }

    /// Return the capacity of edge `e`.
    pub fn capacity(&self, e: G::Edge) -> F {
        *self.capacities.get(e)
    }

    /// Add `amount` to the capacity of edge `e`.
    pub fn add(&mut self, e: G::Edge, amount: F) {
        *self.capacities.at(e) += amount;
    }

    /// Replace the capacity of edge `e` by `amount`.
    pub fn set(&mut self, e: G::Edge, amount: F) {
        self.capacities.set(e, amount);
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &'a G {
        self.capacities.as_graph()
    }
}

impl<'a, G, F> Capacities<G::Edge> for CapacityMap<'a, G, F>
where
    G: Graph<'a>,
    F: NumAssign + Copy,
{
    type Value = F;

    fn capacity(&self, e: G::Edge) -> F {
        CapacityMap::capacity(self, e)
    }
}

/// The residual capacities of a preflow.
///
/// This is a read-only view: the residual capacity of an edge is its
/// capacity minus the flow on it. Because the flow on an edge is the
/// negated flow on its reverse edge, sending flow along an edge increases
/// the residual capacity of the reverse edge.
pub struct ResidualCapacities<'r, 'a, G, C, F>
where
    G: BidirectionalGraph<'a>,
{
    preflow: &'r Preflow<'a, G, F>,
    capacities: &'r C,
}

impl<'r, 'a, G, C, F> ResidualCapacities<'r, 'a, G, C, F>
where
    G: BidirectionalGraph<'a>,
    C: Capacities<G::Edge, Value = F>,
    F: NumAssign + Copy,
{
    pub fn new(preflow: &'r Preflow<'a, G, F>, capacities: &'r C) -> Self {
        ResidualCapacities { preflow, capacities }
    }
}

impl<'r, 'a, G, C, F> Capacities<G::Edge> for ResidualCapacities<'r, 'a, G, C, F>
where
    G: BidirectionalGraph<'a>,
    C: Capacities<G::Edge, Value = F>,
    F: NumAssign + Copy,
{
    type Value = F;

    fn capacity(&self, e: G::Edge) -> F {
        self.capacities.capacity(e) - self.preflow.flow(e)
    }
}
