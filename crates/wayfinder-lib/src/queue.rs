//! Bucketed priority container used as the search open set.
//!
//! Items are grouped into FIFO buckets keyed by priority. Extraction always
//! takes the earliest-inserted item of the lowest-priority bucket, so equal
//! priorities come out in insertion order. There is no decrease-key: callers
//! re-insert an item under its new priority and ignore stale entries.

use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};

/// Priority wrapper giving `f64` a total order for use as a map key.
///
/// `-0.0` is folded into `0.0` so both land in the same bucket. Every NaN,
/// whatever its sign or payload, is folded into the positive quiet NaN, which
/// `total_cmp` sorts after every other value.
#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl FloatOrd {
    fn new(value: f64) -> Self {
        if value.is_nan() {
            // `0 * inf` yields a negative NaN on common targets.
            return Self(f64::NAN.copysign(1.0));
        }
        // Adding positive zero turns -0.0 into 0.0 and leaves everything else alone.
        Self(value + 0.0)
    }
}

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Ordered buckets of pending items.
#[derive(Debug, Clone)]
pub struct BucketQueue<T> {
    buckets: BTreeMap<FloatOrd, VecDeque<T>>,
    count: usize,
}

impl<T> BucketQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            count: 0,
        }
    }

    /// Append `item` to the bucket for `priority`, creating the bucket if absent.
    pub fn insert(&mut self, item: T, priority: f64) {
        self.buckets
            .entry(FloatOrd::new(priority))
            .or_default()
            .push_back(item);
        self.count += 1;
    }

    /// Remove and return the earliest-inserted item of the lowest-priority bucket.
    ///
    /// Returns `None` when the queue is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        let mut entry = self.buckets.first_entry()?;
        let item = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if item.is_some() {
            self.count -= 1;
        }
        item
    }

    /// Lowest pending priority, if any.
    pub fn peek_priority(&self) -> Option<f64> {
        self.buckets.keys().next().map(|key| key.0)
    }

    /// Discard every bucket and reset the pending count.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.count = 0;
    }

    /// Number of pending items across all buckets.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no items are pending.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<T> Default for BucketQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
