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

//! A library for maximum flows on flat bidirectional graphs.
//!
//! The central piece is the push-relabel algorithm in
//! [`maxflow::pushrelabel`]. It works on any graph implementing
//! [`BidirectionalGraph`], usually a [`FlatGraph`] built from some plain
//! adjacency structure. Per-vertex and per-edge data live in property maps
//! outside of the graph.
//!
//! # Example
//!
//! ```
//! use rs_flow::maxflow::{pushrelabel, CapacityMap};
//! use rs_flow::{AdjacencyGraph, FlatGraph};
//!
//! let mut g = AdjacencyGraph::new(4);
//! g.add_arc(0, 1);
//! g.add_arc(0, 2);
//! g.add_arc(1, 3);
//! g.add_arc(2, 3);
//!
//! let flat = FlatGraph::new(&g);
//! let mut caps = CapacityMap::new(&flat);
//! for &(u, v, c) in &[(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 4)] {
//!     caps.set(flat.find_edge(u, v).unwrap(), c);
//! }
//!
//! let (value, _flow, mincut) = pushrelabel(&flat, &caps, 0, 3);
//! assert_eq!(value, 4);
//! assert_eq!(mincut, vec![0, 1]);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod traits;
pub use self::traits::{BidirectionalGraph, Graph};

pub mod adjgraph;
pub use self::adjgraph::AdjacencyGraph;

pub mod flatgraph;
pub use self::flatgraph::FlatGraph;

pub mod collections;
pub use self::collections::{EdgeMap, PropertyMap, VertexMap};

// # Algorithms

pub mod maxflow;

#[cfg(feature = "dimacs")]
pub mod dimacs;
