//! Critical Path Method (CPM) scheduling for networks of interdependent activities.
//!
//! Activities live in an [`ActivityNetwork`] arena and reference their
//! successors by [`ActivityId`]. A scheduling run computes, for every activity
//! reachable from the supplied roots:
//! 1. Earliest start/finish (forward pass)
//! 2. Critical cost, the longest remaining path including the activity itself
//! 3. Latest start/finish (backward pass) and total/free float
//!
//! and returns the ordered zero-float path from a start activity to a terminal
//! one. Cyclic input is rejected with [`CriticalPathError::CyclicDependency`]
//! before any activity is touched.
//!
//! ```
//! use cpm::{compute_schedule, ActivityNetwork};
//!
//! let mut network = ActivityNetwork::new();
//! let finish = network.add_activity("Finish", 0);
//! let build = network.add_activity_with_successors("Build", 5, &[finish]).unwrap();
//! let docs = network.add_activity_with_successors("Docs", 2, &[finish]).unwrap();
//! let start = network.add_activity_with_successors("Start", 0, &[build, docs]).unwrap();
//!
//! let result = compute_schedule(&mut network, &[start]).unwrap();
//! assert_eq!(result.critical_path, vec![start, build, finish]);
//! assert_eq!(network[docs].total_float(), 3);
//! ```

pub mod config;
pub mod critical_path;
mod error;
pub mod graph;
mod interner;
pub mod logging;
mod models;
#[cfg(feature = "python")]
mod python;
pub mod scc;
pub mod sorting;

pub use config::{BackwardPassMethod, CriticalPathConfig, PathHopRule};
pub use critical_path::{
    compute_schedule, find_cycles, ActivityTiming, CriticalPathMethod, CriticalPathResult,
};
pub use error::CriticalPathError;
pub use graph::Graph;
pub use interner::NodeId;
pub use models::{Activity, ActivityId, ActivityNetwork};
