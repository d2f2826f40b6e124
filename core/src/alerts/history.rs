use serde::Serialize;
use std::collections::VecDeque;

use crate::alerts::record::AlertRecord;

pub const ALERT_HISTORY_CAPACITY: usize = 5;

/// Fixed-capacity alert list, newest first. Pushing past capacity evicts the oldest entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AlertHistory {
    entries: VecDeque<AlertRecord>,
}

impl AlertHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(ALERT_HISTORY_CAPACITY),
        }
    }

    pub fn push_newest(&mut self, alert: AlertRecord) {
        self.entries.push_front(alert);
        self.entries.truncate(ALERT_HISTORY_CAPACITY);
    }

    pub fn latest(&self) -> Option<&AlertRecord> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_vec(&self) -> Vec<AlertRecord> {
        self.entries.iter().cloned().collect()
    }
}

/// Prepends `new_alerts` (keeping their order) ahead of `existing`, keeping at
/// most [`ALERT_HISTORY_CAPACITY`] entries. An empty batch leaves `existing` untouched.
pub fn merge_alerts(existing: AlertHistory, new_alerts: Vec<AlertRecord>) -> AlertHistory {
    if new_alerts.is_empty() {
        return existing;
    }

    let mut merged = existing;
    for alert in new_alerts.into_iter().rev() {
        merged.push_newest(alert);
    }
    merged
}
