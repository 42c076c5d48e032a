/*
 * Copyright (c) 2018, 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use crate::traits::Graph;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

/// A map of items (vertices or edges) of a graph to some value.
///
/// The value of every valid key is defined, keys that have never been
/// written read as the default value the map has been created with.
pub trait PropertyMap<K, V>
where
    K: Copy,
{
    /// Return a read-only reference to the value of `key`.
    fn get(&self, key: K) -> &V;

    /// Return a mutable reference to the value of `key`.
    fn at(&mut self, key: K) -> &mut V;

    /// Replace the value of `key`.
    fn set(&mut self, key: K, value: V) {
        *self.at(key) = value;
    }
}

impl<'a, K, V, M> PropertyMap<K, V> for &'a mut M
where
    K: Copy,
    M: PropertyMap<K, V>,
{
    fn get(&self, key: K) -> &V {
        (**self).get(key)
    }

    fn at(&mut self, key: K) -> &mut V {
        (**self).at(key)
    }

    fn set(&mut self, key: K, value: V) {
        (**self).set(key, value)
    }
}

/// A map from the vertices of a graph to some value.
///
/// Vertices are always numbered `0..n`, so this is a plain vector.
#[derive(Clone, Debug)]
pub struct VertexMap<V> {
    data: Vec<V>,
}

impl<V> VertexMap<V>
where
    V: Clone,
{
    /// Return a map with all vertices of `g` set to `value`.
    pub fn new<'a, G>(g: &G, value: V) -> Self
    where
        G: Graph<'a>,
    {
        VertexMap {
            data: vec![value; g.num_vertices()],
        }
    }

    /// Return the number of vertices in this map.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if the map has no vertices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set all values to `value`.
    pub fn fill(&mut self, value: V) {
        self.data.fill(value)
    }
}

impl<V> PropertyMap<usize, V> for VertexMap<V> {
    fn get(&self, u: usize) -> &V {
        &self.data[u]
    }

    fn at(&mut self, u: usize) -> &mut V {
        &mut self.data[u]
    }
}

impl<V> Index<usize> for VertexMap<V> {
    type Output = V;

    fn index(&self, u: usize) -> &V {
        &self.data[u]
    }
}

impl<V> IndexMut<usize> for VertexMap<V> {
    fn index_mut(&mut self, u: usize) -> &mut V {
        &mut self.data[u]
    }
}

#[derive(Clone, Debug)]
enum Storage<K, V> {
    Dense(Vec<V>),
    Sparse(HashMap<K, V>),
}

/// A map from the edges of a graph to some value.
///
/// If the graph numbers its edges (i.e. `num_edges` returns the number of
/// edges) the values are stored in a vector addressed by `edge_index`.
/// Otherwise the values are stored in a hash map and only edges that have
/// been written occupy memory.
pub struct EdgeMap<'a, G, V>
where
    G: Graph<'a>,
{
    graph: &'a G,
    storage: Storage<G::Edge, V>,
    default: V,
}

impl<'a, G, V> Clone for EdgeMap<'a, G, V>
where
    G: Graph<'a>,
    V: Clone,
{
    fn clone(&self) -> Self {
        EdgeMap {
            graph: self.graph,
            storage: self.storage.clone(),
            default: self.default.clone(),
        }
    }
}

impl<'a, G, V> EdgeMap<'a, G, V>
where
    G: Graph<'a>,
    V: Clone,
{
    /// Return a map with all edges of `g` set to `value`.
    pub fn new(g: &'a G, value: V) -> Self {
        let storage = match g.num_edges() {
            Some(m) => Storage::Dense(vec![value.clone(); m]),
            None => Storage::Sparse(HashMap::new()),
        };
        EdgeMap {
            graph: g,
            storage,
            default: value,
        }
    }

    /// Return `true` if the values are stored in a vector.
    pub fn is_dense(&self) -> bool {
        matches!(self.storage, Storage::Dense(_))
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &'a G {
        self.graph
    }

    fn dense_index(&self, e: G::Edge) -> usize {
        match self.graph.edge_index(e) {
            Some(i) => i,
            None => panic!("Edge {:?} has no index in a densely numbered graph", e),
        }
    }
}

impl<'a, G, V> PropertyMap<G::Edge, V> for EdgeMap<'a, G, V>
where
    G: Graph<'a>,
    V: Clone,
{
    fn get(&self, e: G::Edge) -> &V {
        match &self.storage {
            Storage::Dense(data) => &data[self.dense_index(e)],
            Storage::Sparse(data) => data.get(&e).unwrap_or(&self.default),
        }
    }

    fn at(&mut self, e: G::Edge) -> &mut V {
        let i = match self.storage {
            Storage::Dense(_) => self.dense_index(e),
            Storage::Sparse(_) => 0,
        };
        match &mut self.storage {
            Storage::Dense(data) => &mut data[i],
            Storage::Sparse(data) => {
                let default = &self.default;
                data.entry(e).or_insert_with(|| default.clone())
            }
        }
    }
}

impl<'a, G, V> Index<G::Edge> for EdgeMap<'a, G, V>
where
    G: Graph<'a>,
    V: Clone,
{
    type Output = V;

    fn index(&self, e: G::Edge) -> &V {
        self.get(e)
    }
}

impl<'a, G, V> IndexMut<G::Edge> for EdgeMap<'a, G, V>
where
    G: Graph<'a>,
    V: Clone,
{
    fn index_mut(&mut self, e: G::Edge) -> &mut V {
        self.at(e)
    }
}
