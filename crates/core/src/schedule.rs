use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledHarvest {
    pub harvest_date: NaiveDate,
    pub plantation_id: i64,
}

/// Heap entry. Ordering is (date, seq): ascending date, ties broken by
/// insertion order. Field order matters for the derived Ord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    harvest_date: NaiveDate,
    seq: u64,
    plantation_id: i64,
}

/// Priority queue of scheduled harvests, earliest date first.
#[derive(Debug, Default, Clone)]
pub struct HarvestSchedule {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl HarvestSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, plantation_id: i64, harvest_date: NaiveDate) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            harvest_date,
            seq,
            plantation_id,
        }));
    }

    /// All scheduled harvests sorted ascending by date. Sorts a copy of the
    /// internal container: reading twice yields the same result and loses
    /// nothing.
    pub fn to_sorted_vec(&self) -> Vec<ScheduledHarvest> {
        let mut entries: Vec<Entry> = self.heap.iter().map(|r| r.0).collect();
        entries.sort();
        entries
            .into_iter()
            .map(|e| ScheduledHarvest {
                harvest_date: e.harvest_date,
                plantation_id: e.plantation_id,
            })
            .collect()
    }

    /// Remove and return the earliest scheduled harvest.
    pub fn pop_next(&mut self) -> Option<ScheduledHarvest> {
        self.heap.pop().map(|Reverse(e)| ScheduledHarvest {
            harvest_date: e.harvest_date,
            plantation_id: e.plantation_id,
        })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
