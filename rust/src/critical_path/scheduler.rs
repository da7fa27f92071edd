//! Critical path method orchestration.

use crate::config::CriticalPathConfig;
use crate::error::CriticalPathError;
use crate::graph::Graph;
use crate::models::{ActivityId, ActivityNetwork};
use crate::scc;
use crate::sorting::topological_sort;
use crate::{log_changes, log_checks, log_debug};

use super::calculation::calculate_timings;
use super::extraction::{critical_nodes, extract_critical_path};
use super::types::CriticalPathResult;

/// Critical path method runner.
///
/// Holds no state between runs; each call to [`CriticalPathMethod::execute`]
/// is a pure function of the supplied network apart from the timing fields it
/// writes. The caller must not share one network between concurrent runs.
#[derive(Clone, Debug, Default)]
pub struct CriticalPathMethod {
    config: CriticalPathConfig,
}

impl CriticalPathMethod {
    pub fn new(config: CriticalPathConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CriticalPathConfig {
        &self.config
    }

    /// Schedule every activity reachable from `roots` and extract the critical path.
    ///
    /// On success the timing fields of every reachable activity are written.
    /// On failure no activity is modified.
    ///
    /// # Errors
    /// * `CriticalPathError::CyclicDependency` if the reachable graph has a cycle
    /// * `CriticalPathError::UnknownActivity` if a root is not part of `network`
    pub fn execute(
        &self,
        network: &mut ActivityNetwork,
        roots: &[ActivityId],
    ) -> Result<CriticalPathResult, CriticalPathError> {
        let verbosity = self.config.verbosity;

        let graph = Graph::from_activities(network, roots)?;
        log_checks!(
            verbosity,
            "Activity graph: {} nodes, {} edges from {} roots",
            graph.node_count(),
            graph.edge_count(),
            roots.len()
        );

        let topo_order = match topological_sort(&graph) {
            Ok(order) => order,
            Err(cycle) => {
                log_checks!(
                    verbosity,
                    "Topological sort left {} activities unresolved",
                    cycle.unresolved.len()
                );
                return Err(self.cyclic_error(network, &graph));
            }
        };

        let costs: Vec<u64> = graph
            .activities()
            .iter()
            .map(|&id| network[id].cost())
            .collect();
        let schedule = calculate_timings(&graph, &costs, &topo_order, self.config.backward_pass);
        log_changes!(
            verbosity,
            "Project critical cost: {}",
            schedule.project_critical_cost
        );

        let path = extract_critical_path(&graph, &schedule.timings, self.config.hop_rule)?;
        let critical = critical_nodes(&graph, &schedule.timings);

        // Commit only after every pass has succeeded
        for node in graph.nodes() {
            let id = graph.activity(node);
            let timing = schedule.timings[node];
            log_debug!(
                verbosity,
                "{} {:?}: ES={} EF={} LS={} LF={} CC={} TF={}",
                id,
                network[id].name(),
                timing.early_start,
                timing.early_finish,
                timing.latest_start,
                timing.latest_finish,
                timing.critical_cost,
                timing.total_float()
            );
            network.set_timing(id, timing);
        }

        let critical_path: Vec<ActivityId> = path.iter().map(|&n| graph.activity(n)).collect();
        for id in &critical_path {
            log_debug!(verbosity, "Critical path hop: {} {:?}", id, network[*id].name());
        }
        log_changes!(
            verbosity,
            "Critical path of {} activities",
            critical_path.len()
        );

        Ok(CriticalPathResult {
            critical_path,
            project_critical_cost: schedule.project_critical_cost,
            topological_order: topo_order.iter().map(|&n| graph.activity(n)).collect(),
            critical_activities: critical.iter().map(|&n| graph.activity(n)).collect(),
        })
    }

    fn cyclic_error(&self, network: &ActivityNetwork, graph: &Graph) -> CriticalPathError {
        if !self.config.diagnose_cycles {
            return CriticalPathError::CyclicDependency { cycles: Vec::new() };
        }

        let cycles: Vec<Vec<String>> = scc::find_cycles(graph)
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .map(|n| network[graph.activity(n)].name().to_string())
                    .collect()
            })
            .collect();
        log_changes!(
            self.config.verbosity,
            "Cyclic dependency across {} components",
            cycles.len()
        );
        CriticalPathError::CyclicDependency { cycles }
    }
}

/// Schedule `roots` with the default configuration.
///
/// See [`CriticalPathMethod::execute`].
pub fn compute_schedule(
    network: &mut ActivityNetwork,
    roots: &[ActivityId],
) -> Result<CriticalPathResult, CriticalPathError> {
    CriticalPathMethod::default().execute(network, roots)
}

/// Every cycle among the activities reachable from `roots`.
///
/// Each entry lists the members of one strongly connected component that forms
/// a cycle (more than one member, or a single activity following itself).
pub fn find_cycles(
    network: &ActivityNetwork,
    roots: &[ActivityId],
) -> Result<Vec<Vec<ActivityId>>, CriticalPathError> {
    let graph = Graph::from_activities(network, roots)?;
    Ok(scc::find_cycles(&graph)
        .into_iter()
        .map(|members| members.into_iter().map(|n| graph.activity(n)).collect())
        .collect())
}
