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

//! Maximum flow algorithms.
//!
//! A max flow problem consists of a [`BidirectionalGraph`](crate::BidirectionalGraph),
//! a capacity for each edge (see [`Capacities`]), a source and a sink
//! vertex. The result is a [`Preflow`] without any active vertex.

pub mod capacity;
pub use self::capacity::{Capacities, CapacityMap, ResidualCapacities};

pub mod preflow;
pub use self::preflow::Preflow;

pub mod pushrelabel;
pub use self::pushrelabel::{max_flow, pushrelabel, PushRelabel};
