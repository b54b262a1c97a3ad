//! Core types and reconciliation engine for the caltask ecosystem.
//!
//! This crate provides everything the CLI needs that is not transport:
//! - `Event`, `Task` and `Client` types shared across collaborators
//! - the reconciliation engine (dedup index, client matcher, task builder,
//!   per-event planner)
//! - the paginated-fetch driver used for backend list calls
//! - ICS feed parsing

pub mod client;
pub mod dedup;
pub mod error;
pub mod event;
pub mod ics;
pub mod lookback;
pub mod matching;
pub mod page;
pub mod reconcile;
pub mod task;

pub use client::Client;
pub use error::{CalTaskError, CalTaskResult};
pub use event::Event;
pub use task::{NewTask, Task};
