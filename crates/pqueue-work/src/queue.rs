//! PriorityQueue - stable priority queue of validated work items.
//!
//! Items are held in a `VecDeque` sorted ascending by priority:
//! - The front holds the lowest priority, the back the highest
//! - Items of equal priority keep their insertion order (FIFO)
//! - `extract_max` pops from the back in O(1)
//! - Insertion into the middle is a linear scan

use std::collections::{vec_deque, VecDeque};
use std::iter::FusedIterator;

use pqueue_models::WorkItem;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{QueueError, Result};
use crate::validate::validate_item;

/// Stable priority queue.
///
/// # Ordering
///
/// 1. Lower priority items sit closer to the front
/// 2. For the same priority, earlier insertions sit closer to the front
///
/// `extract_max` therefore returns the highest priority item, and among
/// several items sharing the maximum priority, the most recently inserted.
///
/// # Concurrency
///
/// Mutation takes `&mut self`. To share a queue between threads, wrap it
/// in `Arc<Mutex<PriorityQueue>>`.
///
/// # Example
///
/// ```
/// use pqueue_work::PriorityQueue;
/// use serde_json::json;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert(&json!({ "command": "a", "priority": 5 })).unwrap();
/// queue.insert(&json!({ "command": "b", "priority": 1 })).unwrap();
///
/// let order: Vec<&str> = queue.iter().map(|item| item.command()).collect();
/// assert_eq!(order, ["b", "a"]);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PriorityQueue {
    /// Work items, ascending by priority.
    items: VecDeque<WorkItem>,
}

impl PriorityQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `candidate` and inserts a copy of it.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidType`] if `candidate` is not a mapping, or
    ///   `command` is not a string, or `priority` is not an integer
    /// - [`QueueError::MissingField`] if `command` or `priority` is absent
    /// - [`QueueError::InvalidValue`] if `priority` is negative
    ///
    /// The queue is left unchanged on error.
    pub fn insert(&mut self, candidate: &Value) -> Result<()> {
        let item = Self::validated(candidate)?;
        self.insert_item(item);
        Ok(())
    }

    /// Inserts an already-typed work item.
    pub fn insert_item(&mut self, item: WorkItem) {
        let priority = item.priority();
        let front = self.items.front().map(WorkItem::priority);
        let back = self.items.back().map(WorkItem::priority);

        let position = match (front, back) {
            // Lowest priority item
            (Some(front), _) if priority < front => {
                self.items.push_front(item);
                0
            }
            // Mid item; the back is strictly greater so the scan always hits
            (Some(_), Some(back)) if priority < back => {
                let index = self
                    .items
                    .iter()
                    .position(|cur| cur.priority() > priority)
                    .unwrap_or(self.items.len());
                self.items.insert(index, item);
                index
            }
            // Empty queue, or highest priority item (ties go after)
            _ => {
                self.items.push_back(item);
                self.items.len() - 1
            }
        };

        trace!(priority, position, len = self.items.len(), "inserted work item");
    }

    /// Validates `candidate` and removes the first stored item equal to it.
    ///
    /// Equality compares `command` and `priority` only. Removing an item
    /// that is not queued is a no-op.
    ///
    /// # Errors
    ///
    /// Same validation errors as [`insert`](Self::insert).
    pub fn remove(&mut self, candidate: &Value) -> Result<()> {
        let item = Self::validated(candidate)?;

        match self.items.iter().position(|stored| *stored == item) {
            Some(position) => {
                self.items.remove(position);
                trace!(
                    priority = item.priority(),
                    position,
                    len = self.items.len(),
                    "removed work item"
                );
            }
            None => {
                trace!(priority = item.priority(), "no queued work item to remove");
            }
        }

        Ok(())
    }

    /// Removes and returns the highest priority item.
    ///
    /// # Errors
    ///
    /// [`QueueError::Underflow`] if the queue is empty.
    pub fn extract_max(&mut self) -> Result<WorkItem> {
        self.items.pop_back().ok_or(QueueError::Underflow)
    }

    /// Returns the item `extract_max` would return, without removing it.
    pub fn peek_max(&self) -> Option<&WorkItem> {
        self.items.back()
    }

    /// Returns true if a queued item matches `probe` on `command` and
    /// `priority`.
    ///
    /// The probe is not validated. Extra keys are ignored and a probe of
    /// any other shape is simply not found.
    pub fn contains(&self, probe: &Value) -> bool {
        self.items.iter().any(|item| item.matches(probe))
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over queued items from lowest to highest priority.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.iter(),
        }
    }

    fn validated(candidate: &Value) -> Result<WorkItem> {
        validate_item(candidate).map_err(|error| {
            debug!(%error, "rejected work item candidate");
            error
        })
    }
}

impl Extend<WorkItem> for PriorityQueue {
    fn extend<I: IntoIterator<Item = WorkItem>>(&mut self, iter: I) {
        for item in iter {
            self.insert_item(item);
        }
    }
}

impl FromIterator<WorkItem> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = WorkItem>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a WorkItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of a [`PriorityQueue`], lowest priority first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, WorkItem>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WorkItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
