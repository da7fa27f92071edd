//! Core data types for the activity network.

use std::fmt;
use std::ops::Index;

use crate::critical_path::ActivityTiming;
use crate::error::CriticalPathError;

/// Identity of an activity inside an [`ActivityNetwork`].
///
/// Two activities with the same name and cost are still distinct nodes;
/// only the id is used for comparison and hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(u32);

impl ActivityId {
    /// Build an id from its raw arena position.
    ///
    /// Ids are normally handed out by [`ActivityNetwork::add_activity`]; a raw id
    /// is only meaningful for the network that produced it.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw arena position of this id.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Id for the arena slot at `index`, if it fits in 32 bits.
    pub(crate) fn from_index(index: usize) -> Result<Self, CriticalPathError> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| CriticalPathError::TooManyActivities)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One schedulable unit of work.
///
/// `name`, `cost` and `successors` are fixed by the caller. The timing fields are
/// written only by a successful scheduling run and read as zero before that.
#[derive(Clone, Debug)]
pub struct Activity {
    name: String,
    cost: u64,
    successors: Vec<ActivityId>,
    timing: ActivityTiming,
}

impl Activity {
    fn new(name: String, cost: u64) -> Self {
        Self {
            name,
            cost,
            successors: Vec::new(),
            timing: ActivityTiming::default(),
        }
    }

    /// Display label. Not unique and never used for identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration of the activity.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Activities that may start only after this one finishes, in insertion order.
    pub fn successors(&self) -> &[ActivityId] {
        &self.successors
    }

    /// All computed timing fields as one value.
    pub fn timing(&self) -> ActivityTiming {
        self.timing
    }

    pub fn early_start(&self) -> u64 {
        self.timing.early_start
    }

    pub fn early_finish(&self) -> u64 {
        self.timing.early_finish
    }

    pub fn latest_start(&self) -> u64 {
        self.timing.latest_start
    }

    pub fn latest_finish(&self) -> u64 {
        self.timing.latest_finish
    }

    /// Cost of the most expensive path from this activity to a terminal one,
    /// including this activity's own cost.
    pub fn critical_cost(&self) -> u64 {
        self.timing.critical_cost
    }

    /// Slack this activity can absorb without delaying the project.
    pub fn total_float(&self) -> u64 {
        self.timing.total_float()
    }

    /// Whether the activity has zero total float.
    pub fn is_critical(&self) -> bool {
        self.timing.is_critical()
    }
}

/// Arena owning every activity and its successor relations.
#[derive(Clone, Debug, Default)]
pub struct ActivityNetwork {
    activities: Vec<Activity>,
}

impl ActivityNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            activities: Vec::with_capacity(capacity),
        }
    }

    /// Add an activity with no successors and return its id.
    ///
    /// # Panics
    /// Panics if the network already holds `u32::MAX + 1` activities. Use
    /// [`ActivityNetwork::try_add_activity`] to handle that as an error.
    pub fn add_activity(&mut self, name: impl Into<String>, cost: u64) -> ActivityId {
        match self.try_add_activity(name, cost) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Add an activity with no successors, failing once ids are exhausted.
    pub fn try_add_activity(
        &mut self,
        name: impl Into<String>,
        cost: u64,
    ) -> Result<ActivityId, CriticalPathError> {
        let id = ActivityId::from_index(self.activities.len())?;
        self.activities.push(Activity::new(name.into(), cost));
        Ok(id)
    }

    /// Add an activity followed by `successors`.
    pub fn add_activity_with_successors(
        &mut self,
        name: impl Into<String>,
        cost: u64,
        successors: &[ActivityId],
    ) -> Result<ActivityId, CriticalPathError> {
        for &successor in successors {
            self.check(successor)?;
        }
        let id = self.try_add_activity(name, cost)?;
        for &successor in successors {
            self.add_successor(id, successor)?;
        }
        Ok(id)
    }

    /// Record that `successor` may start only after `activity` finishes.
    ///
    /// Successors keep insertion order; adding an existing edge again is a no-op.
    pub fn add_successor(
        &mut self,
        activity: ActivityId,
        successor: ActivityId,
    ) -> Result<(), CriticalPathError> {
        self.check(successor)?;
        let entry = self
            .activities
            .get_mut(activity.index())
            .ok_or(CriticalPathError::UnknownActivity(activity))?;
        if !entry.successors.contains(&successor) {
            entry.successors.push(successor);
        }
        Ok(())
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(id.index())
    }

    pub fn contains(&self, id: ActivityId) -> bool {
        id.index() < self.activities.len()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Ids of every activity in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ActivityId> + '_ {
        (0..self.activities.len() as u32).map(ActivityId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityId, &Activity)> + '_ {
        self.ids().zip(self.activities.iter())
    }

    /// First activity with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<ActivityId> {
        self.iter()
            .find(|(_, activity)| activity.name == name)
            .map(|(id, _)| id)
    }

    /// Total float of an activity (`latest_start - early_start`).
    pub fn total_float(&self, id: ActivityId) -> Option<u64> {
        self.get(id).map(Activity::total_float)
    }

    /// Slack an activity can absorb without delaying any immediate successor.
    ///
    /// Defined as zero for activities without successors.
    pub fn free_float(&self, id: ActivityId) -> Option<u64> {
        let activity = self.get(id)?;
        let earliest_successor_start = activity
            .successors
            .iter()
            .filter_map(|&s| self.get(s))
            .map(Activity::early_start)
            .min();
        Some(match earliest_successor_start {
            Some(start) => start.saturating_sub(activity.early_finish()),
            None => 0,
        })
    }

    pub(crate) fn set_timing(&mut self, id: ActivityId, timing: ActivityTiming) {
        if let Some(activity) = self.activities.get_mut(id.index()) {
            activity.timing = timing;
        }
    }

    fn check(&self, id: ActivityId) -> Result<(), CriticalPathError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(CriticalPathError::UnknownActivity(id))
        }
    }
}

impl Index<ActivityId> for ActivityNetwork {
    type Output = Activity;

    /// # Panics
    ///
    /// Panics if `id` was not produced by this network.
    fn index(&self, id: ActivityId) -> &Activity {
        &self.activities[id.index()]
    }
}
