//! Core data model for the stable priority queue.
//!
//! This crate provides the [`WorkItem`] record stored by the queue and the
//! canonical key names used when work items travel as untyped mappings.

pub mod work;

pub use work::{Priority, WorkItem, COMMAND_KEY, PRIORITY_KEY};
