//! Python bindings for the critical path method.
//!
//! Activities are addressed from Python by the raw integer returned from
//! `ActivityNetwork.add_activity`.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyIndexError, PyOverflowError, PyRuntimeError};
use pyo3::prelude::*;

use crate::{
    compute_schedule, find_cycles, ActivityId, ActivityNetwork, CriticalPathConfig,
    CriticalPathError, CriticalPathMethod, CriticalPathResult,
};

create_exception!(
    critical_path,
    CyclicDependencyError,
    PyException,
    "Raised when the activity graph contains a cyclic dependency."
);

fn to_py_err(err: CriticalPathError) -> PyErr {
    match err {
        CriticalPathError::CyclicDependency { .. } => {
            CyclicDependencyError::new_err(err.to_string())
        }
        CriticalPathError::UnknownActivity(_) => PyIndexError::new_err(err.to_string()),
        CriticalPathError::TooManyActivities => PyOverflowError::new_err(err.to_string()),
        CriticalPathError::NoCriticalStart => PyRuntimeError::new_err(err.to_string()),
    }
}

fn ids(raw: &[u32]) -> Vec<ActivityId> {
    raw.iter().copied().map(ActivityId::from_raw).collect()
}

fn raw_ids(ids: &[ActivityId]) -> Vec<u32> {
    ids.iter().map(|id| id.raw()).collect()
}

/// Computed fields of one activity.
#[pyclass(name = "ActivityInfo")]
#[derive(Clone, Debug)]
pub struct PyActivityInfo {
    #[pyo3(get)]
    pub id: u32,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub cost: u64,
    #[pyo3(get)]
    pub successors: Vec<u32>,
    #[pyo3(get)]
    pub early_start: u64,
    #[pyo3(get)]
    pub early_finish: u64,
    #[pyo3(get)]
    pub latest_start: u64,
    #[pyo3(get)]
    pub latest_finish: u64,
    #[pyo3(get)]
    pub critical_cost: u64,
    #[pyo3(get)]
    pub total_float: u64,
    #[pyo3(get)]
    pub free_float: u64,
}

#[pymethods]
impl PyActivityInfo {
    fn __repr__(&self) -> String {
        format!(
            "ActivityInfo(id={}, name={:?}, cost={}, es={}, ef={}, ls={}, lf={}, tf={})",
            self.id,
            self.name,
            self.cost,
            self.early_start,
            self.early_finish,
            self.latest_start,
            self.latest_finish,
            self.total_float
        )
    }
}

/// Result of scheduling a network.
#[pyclass(name = "ScheduleResult")]
#[derive(Clone, Debug)]
pub struct PyScheduleResult {
    #[pyo3(get)]
    pub critical_path: Vec<u32>,
    #[pyo3(get)]
    pub project_critical_cost: u64,
    #[pyo3(get)]
    pub topological_order: Vec<u32>,
    #[pyo3(get)]
    pub critical_activities: Vec<u32>,
}

impl From<CriticalPathResult> for PyScheduleResult {
    fn from(result: CriticalPathResult) -> Self {
        Self {
            critical_path: raw_ids(&result.critical_path),
            project_critical_cost: result.project_critical_cost,
            topological_order: raw_ids(&result.topological_order),
            critical_activities: raw_ids(&result.critical_activities),
        }
    }
}

#[pymethods]
impl PyScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(critical_path={:?}, project_critical_cost={})",
            self.critical_path, self.project_critical_cost
        )
    }
}

/// Activity network owned by Python.
#[pyclass(name = "ActivityNetwork")]
#[derive(Clone, Debug, Default)]
pub struct PyActivityNetwork {
    inner: ActivityNetwork,
}

#[pymethods]
impl PyActivityNetwork {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Add an activity and return its id.
    #[pyo3(signature = (name, cost, successors=Vec::new()))]
    fn add_activity(&mut self, name: String, cost: u64, successors: Vec<u32>) -> PyResult<u32> {
        self.inner
            .add_activity_with_successors(name, cost, &ids(&successors))
            .map(ActivityId::raw)
            .map_err(to_py_err)
    }

    fn add_successor(&mut self, activity: u32, successor: u32) -> PyResult<()> {
        self.inner
            .add_successor(ActivityId::from_raw(activity), ActivityId::from_raw(successor))
            .map_err(to_py_err)
    }

    /// Schedule the network. Defaults to every activity, in insertion order.
    ///
    /// Raises CyclicDependencyError if the reachable graph has a cycle.
    #[pyo3(signature = (roots=None, verbosity=0))]
    fn compute_schedule(
        &mut self,
        roots: Option<Vec<u32>>,
        verbosity: u8,
    ) -> PyResult<PyScheduleResult> {
        let roots: Vec<ActivityId> = match roots {
            Some(raw) => ids(&raw),
            None => self.inner.ids().collect(),
        };
        let result = if verbosity == 0 {
            compute_schedule(&mut self.inner, &roots)
        } else {
            let config = CriticalPathConfig {
                verbosity,
                ..CriticalPathConfig::default()
            };
            CriticalPathMethod::new(config).execute(&mut self.inner, &roots)
        };
        result.map(PyScheduleResult::from).map_err(to_py_err)
    }

    /// Cycles among activities reachable from `roots` (all activities by default).
    #[pyo3(signature = (roots=None))]
    fn find_cycles(&self, roots: Option<Vec<u32>>) -> PyResult<Vec<Vec<u32>>> {
        let roots: Vec<ActivityId> = match roots {
            Some(raw) => ids(&raw),
            None => self.inner.ids().collect(),
        };
        let cycles = find_cycles(&self.inner, &roots).map_err(to_py_err)?;
        Ok(cycles.iter().map(|members| raw_ids(members)).collect())
    }

    fn activity(&self, id: u32) -> PyResult<PyActivityInfo> {
        let activity_id = ActivityId::from_raw(id);
        let activity = self
            .inner
            .get(activity_id)
            .ok_or_else(|| to_py_err(CriticalPathError::UnknownActivity(activity_id)))?;
        Ok(PyActivityInfo {
            id,
            name: activity.name().to_string(),
            cost: activity.cost(),
            successors: raw_ids(activity.successors()),
            early_start: activity.early_start(),
            early_finish: activity.early_finish(),
            latest_start: activity.latest_start(),
            latest_finish: activity.latest_finish(),
            critical_cost: activity.critical_cost(),
            total_float: activity.total_float(),
            free_float: self.inner.free_float(activity_id).unwrap_or(0),
        })
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("ActivityNetwork(activities={})", self.inner.len())
    }
}

/// The critical_path Python module.
#[pymodule]
#[pyo3(name = "critical_path")]
fn py_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyActivityNetwork>()?;
    m.add_class::<PyActivityInfo>()?;
    m.add_class::<PyScheduleResult>()?;
    m.add(
        "CyclicDependencyError",
        m.py().get_type_bound::<CyclicDependencyError>(),
    )?;
    Ok(())
}
