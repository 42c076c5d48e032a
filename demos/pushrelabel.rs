/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use rs_flow::dimacs;
use rs_flow::maxflow::PushRelabel;

use std::error::Error;
use std::fmt::{Debug, Display};
use std::ops::Neg;
use std::str::FromStr;

use num_traits::NumAssign;
use ordered_float::NotNan;

fn read_and_run<F>(filename: &str, num: usize, use_gap: bool, typ: &str) -> Result<(), Box<dyn Error>>
where
    F: Debug + Display + NumAssign + Neg<Output = F> + FromStr + Copy + Ord,
    F::Err: Display,
{
    let tstart = OffsetDateTime::now_utc();
    let instance = dimacs::max::read_from_file::<F>(filename)?;
    let g = &instance.graph;
    let s = instance.src;
    let t = instance.snk;
    let caps = instance.capacities();

    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number type: {}", typ);
    println!("  gap heuristic: {}", if use_gap { "YES" } else { "NO" });
    println!("  number of nodes: {}", g.num_vertices());
    println!("  number of arcs: {}", instance.arcs.len());
    println!("  number of edges: {}", g.num_edges());

    let tstart = OffsetDateTime::now_utc();
    let mut pr = PushRelabel::new(g, &caps, s, t);
    for _ in 0..num {
        pr = PushRelabel::new(g, &caps, s, t);
        pr.use_gap_heuristic = use_gap;
        pr.run();
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", pr.value());

    println!("  number of pushes: {}", pr.cnt_push);
    println!("  number of relabels: {}", pr.cnt_relabel);
    println!("  number of gaps: {}", pr.cnt_gap);
    println!("  min cut size: {}", pr.mincut().len());

    let flow = pr.preflow();
    assert!((0..g.num_edges()).all(|e| flow.flow(e) <= caps.capacity(e)));
    assert!((0..g.num_vertices())
        .filter(|&u| u != s && u != t)
        .all(|u| flow.divergence(u) == F::zero()));
    assert_eq!(flow.divergence(s), pr.value());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve max-flow problem with a push-relabel algorithm.";
        opt no_gap:bool, desc:"Do not use the gap heuristic.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt real:bool, desc:"Use real valued flows.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    if !args.real {
        read_and_run::<i64>(&args.file, args.num, !args.no_gap, "i64")
    } else {
        read_and_run::<NotNan<f64>>(&args.file, args.num, !args.no_gap, "f64")
    }
}
