//! Priority queue whose entries can be re-prioritized
//!
//! Re-enqueueing a key leaves the older heap entry in place; the key map
//! records the sequence number of the current entry and anything else is
//! skipped when it surfaces.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// A single item to enqueue: unique key, priority and optional payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueableItem<K, T = ()> {
    pub key: K,
    pub priority: u64,
    pub value: Option<T>,
}

impl<K, T> QueueableItem<K, T> {
    pub fn new(key: K, priority: u64) -> Self {
        Self {
            key,
            priority,
            value: None,
        }
    }

    pub fn with_value(key: K, priority: u64, value: T) -> Self {
        Self {
            key,
            priority,
            value: Some(value),
        }
    }
}

/// Heap entry ordered by priority, then by insertion sequence
#[derive(Debug)]
struct HeapEntry<K, T> {
    sequence: u64,
    item: QueueableItem<K, T>,
}

impl<K, T> PartialEq for HeapEntry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.item.priority == other.item.priority && self.sequence == other.sequence
    }
}

impl<K, T> Eq for HeapEntry<K, T> {}

impl<K, T> PartialOrd for HeapEntry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, T> Ord for HeapEntry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item
            .priority
            .cmp(&other.item.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Sequence number and priority of the current entry for a queued key
#[derive(Debug, Clone, Copy)]
struct LiveEntry {
    sequence: u64,
    priority: u64,
}

/// Min-priority queue keyed by `K`, carrying optional payloads of type `T`.
///
/// Equal priorities are dequeued in insertion order.
#[derive(Debug)]
pub struct PriorityQueue<K, T = ()> {
    heap: BinaryHeap<Reverse<HeapEntry<K, T>>>,
    live: HashMap<K, LiveEntry>,
    sequence: u64,
}

impl<K, T> Default for PriorityQueue<K, T>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> PriorityQueue<K, T>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            sequence: 0,
        }
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Current priority of `key`, if it is queued
    pub fn priority(&self, key: &K) -> Option<u64> {
        self.live.get(key).map(|entry| entry.priority)
    }

    /// Insert `item`, replacing any entry already queued under the same key
    pub fn enqueue(&mut self, item: QueueableItem<K, T>) {
        self.sequence += 1;
        self.live.insert(
            item.key.clone(),
            LiveEntry {
                sequence: self.sequence,
                priority: item.priority,
            },
        );
        self.heap.push(Reverse(HeapEntry {
            sequence: self.sequence,
            item,
        }));
    }

    /// Remove and return the live item with the smallest priority
    pub fn dequeue(&mut self) -> Result<QueueableItem<K, T>> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let current = self
                .live
                .get(&entry.item.key)
                .is_some_and(|live| live.sequence == entry.sequence);
            if !current {
                continue;
            }
            self.live.remove(&entry.item.key);
            return Ok(entry.item);
        }
        Err(GraphError::EmptyQueue)
    }
}
