//! Per-event reconciliation decisions.
//!
//! `plan` is pure: it inspects an event against the dedup index and the
//! client collection and says what should happen. Issuing the create call
//! (and logging) is the caller's job, so decisions can be replayed under
//! dry-run without touching the backend.

use crate::client::Client;
use crate::dedup::TaskIndex;
use crate::error::CalTaskResult;
use crate::event::Event;
use crate::matching;
use crate::task::NewTask;

/// Values governing task construction during reconciliation.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub marker_prefix: String,
    pub separator: String,
    pub status_id: String,
}

/// The decision taken for a single event.
#[derive(Debug, Clone)]
pub enum Decision {
    /// A task with this event's marker already exists.
    AlreadySynced,
    /// No client scored strictly above zero for this summary.
    NoClientMatch,
    /// Create a task, assigned to the matched client.
    Create { task: NewTask, client: Client },
}

/// Decide what to do for one event.
///
/// Both the task index and the client collection must come from complete
/// snapshots; a partial snapshot would turn "not yet synced" and "no
/// match" into wrong answers.
pub fn plan(
    event: &Event,
    index: &TaskIndex,
    clients: &[Client],
    opts: &PlanOptions,
) -> CalTaskResult<Decision> {
    if index.contains_uid(&event.uid) {
        return Ok(Decision::AlreadySynced);
    }

    let Some(client) = matching::best_match(&event.summary, &opts.separator, clients) else {
        return Ok(Decision::NoClientMatch);
    };

    let task = NewTask::for_event(
        event,
        client,
        &opts.status_id,
        &opts.marker_prefix,
        &opts.separator,
    )?;

    Ok(Decision::Create {
        task,
        client: client.clone(),
    })
}
