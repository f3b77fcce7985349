//! Pivot long-form observations into per-student records.
//!
//! # Architecture
//!
//! ```text
//! Long rows (one per window)        →  Student records
//! ┌──────────────────────────┐       ┌──────────────────────────┐
//! │ fall,   80, hours 5      │       │ hours 5: fall 80, win 85 │
//! │ winter, 85, hours 5      │  →    ├──────────────────────────┤
//! │ fall,   70, hours 2      │       │ (hours 2 dropped: no     │
//! └──────────────────────────┘       │  winter score)           │
//!                                    └──────────────────────────┘
//! ```
//!
//! Rows are matched on the exact parsed `hours` value. Two students with
//! the same hours merge into one record, and `5` vs `5.0000001` never
//! merge. A score of exactly 0 counts as missing, so a group with a real
//! zero score is dropped like an incomplete one.

use std::collections::HashMap;

use crate::models::{RawObservation, StudentRecord, TestWindow};

/// Outcome of a pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Reshaped {
    /// Complete groups, in order of first appearance.
    pub records: Vec<StudentRecord>,
    /// Groups missing a fall or a winter score.
    pub dropped_groups: usize,
}

/// Group observations by hours and keep groups with both scores non-zero.
pub fn long_to_wide(observations: &[RawObservation]) -> Reshaped {
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut groups: Vec<GroupBuilder> = Vec::new();

    for obs in observations {
        let slot = *index.entry(hours_key(obs.hours)).or_insert_with(|| {
            groups.push(GroupBuilder::new(obs.hours));
            groups.len() - 1
        });
        groups[slot].set(obs.test_window, obs.score);
    }

    let total = groups.len();
    let records: Vec<StudentRecord> = groups.into_iter().filter_map(GroupBuilder::build).collect();
    let dropped_groups = total - records.len();

    if dropped_groups > 0 {
        log::warn!("Dropped {} of {} groups missing a fall or winter score", dropped_groups, total);
    }

    Reshaped {
        records,
        dropped_groups,
    }
}

/// Bit pattern of `hours` with `-0.0` folded into `0.0`.
fn hours_key(hours: f64) -> u64 {
    (hours + 0.0).to_bits()
}

/// Accumulates the two scores of one hours value.
struct GroupBuilder {
    hours: f64,
    fall_score: f64,
    winter_score: f64,
}

impl GroupBuilder {
    fn new(hours: f64) -> Self {
        Self {
            hours: hours + 0.0,
            fall_score: 0.0,
            winter_score: 0.0,
        }
    }

    /// Last write wins.
    fn set(&mut self, window: TestWindow, score: f64) {
        match window {
            TestWindow::Fall => self.fall_score = score,
            TestWindow::Winter => self.winter_score = score,
        }
    }

    fn build(self) -> Option<StudentRecord> {
        if self.fall_score != 0.0 && self.winter_score != 0.0 {
            Some(StudentRecord::new(self.hours, self.fall_score, self.winter_score))
        } else {
            None
        }
    }
}
