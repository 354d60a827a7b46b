//! Deferred one-shot timers.

use std::{collections::HashMap, time::Duration};

use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    error::ViewStateError,
    events::{EventSink, PageEvent, TimerId},
};

/// Delivers `event` back into the page inbox once `delay` has elapsed.
pub trait Scheduler {
    fn schedule(
        &mut self,
        timer: TimerId,
        delay: Duration,
        event: PageEvent,
    ) -> Result<(), ViewStateError>;

    /// Unknown or already fired timers are ignored.
    fn cancel(&mut self, timer: TimerId);
}

/// Sleeps on a tokio runtime, then posts the event through the session sink.
pub struct TokioScheduler {
    runtime: Handle,
    sink: EventSink,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle, sink: EventSink) -> Self {
        Self {
            runtime,
            sink,
            tasks: HashMap::new(),
        }
    }

    pub fn current(sink: EventSink) -> Result<Self, ViewStateError> {
        let runtime = Handle::try_current().map_err(|_| ViewStateError::RuntimeUnavailable)?;
        Ok(Self::new(runtime, sink))
    }

    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(
        &mut self,
        timer: TimerId,
        delay: Duration,
        event: PageEvent,
    ) -> Result<(), ViewStateError> {
        self.tasks.retain(|_, task| !task.is_finished());

        let sink = self.sink.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            sink.post(event);
        });
        self.tasks.insert(timer, task);
        tracing::debug!(timer = timer.0, ?delay, "scheduled timer");
        Ok(())
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(task) = self.tasks.remove(&timer) {
            task.abort();
            tracing::debug!(timer = timer.0, "cancelled timer");
        }
    }
}
