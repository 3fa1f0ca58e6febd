//! Stable priority queue of validated work items.
//!
//! This crate provides the `PriorityQueue`:
//! - Items kept ascending by priority in a `VecDeque`
//! - FIFO ordering among items of equal priority
//! - Validation of untyped `serde_json::Value` candidates before insertion
//! - O(1) extraction of the highest-priority item
//!
//! # Example
//!
//! ```
//! use pqueue_work::{PriorityQueue, COMMAND_KEY, PRIORITY_KEY};
//! use serde_json::json;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(&json!({ COMMAND_KEY: "low", PRIORITY_KEY: 1 })).unwrap();
//! queue.insert(&json!({ COMMAND_KEY: "high", PRIORITY_KEY: 9 })).unwrap();
//!
//! let next = queue.extract_max().unwrap();
//! assert_eq!(next.command(), "high");
//! assert_eq!(queue.len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod queue;
pub mod validate;

pub use error::{QueueError, Result};
pub use logging::{init_logging, LogConfig, LogInitError};
pub use pqueue_models::{Priority, WorkItem, COMMAND_KEY, PRIORITY_KEY};
pub use queue::{Iter, PriorityQueue};
pub use validate::validate_item;
