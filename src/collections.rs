/*
 * Copyright (c) 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Property maps attaching data to the vertices and edges of a graph.
//!
//! Algorithms keep their working data (labels, flows, capacities, ...)
//! outside of the graph. The maps here choose the most efficient storage the
//! graph allows: a vector if the items are numbered densely, a hash map
//! otherwise.

mod map;

pub use self::map::{EdgeMap, PropertyMap, VertexMap};
