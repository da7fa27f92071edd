//! Critical path method: forward/backward passes, float, and path extraction.
//!
//! Pipeline: graph construction, cycle detection (fail fast), timing passes,
//! then extraction of the zero-float chain. Timings are committed to the
//! activity network only when every stage succeeds.

mod calculation;
mod extraction;
mod scheduler;
mod types;

pub use calculation::{
    backward_pass_from_critical_cost, backward_pass_recursive, calculate_timings,
    critical_cost_pass, forward_pass, project_critical_cost, ScheduleTimings,
};
pub use extraction::{critical_nodes, extract_critical_path};
pub use scheduler::{compute_schedule, find_cycles, CriticalPathMethod};
pub use types::{ActivityTiming, CriticalPathResult};
