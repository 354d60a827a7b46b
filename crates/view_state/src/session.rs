//! Single-threaded dispatcher that owns a mounted controller.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver};
use shared::content::SiteContent;
use tracing::info;

use crate::{
    controller::{ControllerConfig, SubmitOutcome, ViewStateController},
    error::ViewStateError,
    events::{EventSink, ListenerId, ObserverId, PageEvent},
    host::HostCapabilities,
    scheduler::{Scheduler, TokioScheduler},
    snapshot::ViewSnapshot,
};

struct Subscriptions {
    host: HostCapabilities,
    scroll: ListenerId,
    skills: ObserverId,
}

/// A mounted page: the controller, its inbox and its host subscriptions.
///
/// Host signals and fired timers queue into an unbounded inbox and are applied by
/// [`PageSession::pump`], or by [`PageSession::settle`] after the clock moves.
/// User input may be applied directly with [`PageSession::dispatch`]. Dropping the session tears it down.
pub struct PageSession<S: Scheduler> {
    controller: ViewStateController<S>,
    content: Arc<SiteContent>,
    inbox: Receiver<PageEvent>,
    sink: EventSink,
    subscriptions: Option<Subscriptions>,
}

impl<S: Scheduler> PageSession<S> {
    pub fn mount(
        config: ControllerConfig,
        content: Arc<SiteContent>,
        host: HostCapabilities,
        make_scheduler: impl FnOnce(EventSink) -> S,
    ) -> Self {
        let (inbox, sink) = open_inbox();
        let scheduler = make_scheduler(sink.clone());
        Self::attach(config, content, host, inbox, sink, scheduler)
    }

    fn attach(
        config: ControllerConfig,
        content: Arc<SiteContent>,
        host: HostCapabilities,
        inbox: Receiver<PageEvent>,
        sink: EventSink,
        scheduler: S,
    ) -> Self {
        let controller = ViewStateController::new(config, scheduler);
        let scroll = host.scroll.add_listener(sink.clone());
        let skills = host
            .intersection
            .observe(config.reveal_threshold, sink.clone());

        info!(
            scroll_listener = scroll.0,
            skills_observer = skills.0,
            "page session mounted"
        );

        Self {
            controller,
            content,
            inbox,
            sink,
            subscriptions: Some(Subscriptions {
                host,
                scroll,
                skills,
            }),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscriptions.is_some()
    }

    pub fn sink(&self) -> EventSink {
        self.sink.clone()
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn controller(&self) -> &ViewStateController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ViewStateController<S> {
        &mut self.controller
    }

    /// Applies a user-input event immediately. Returns the outcome of a submit.
    pub fn dispatch(&mut self, event: PageEvent) -> Option<SubmitOutcome> {
        self.controller.handle(event)
    }

    /// Applies every queued event in arrival order and returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.inbox.try_recv() {
            self.controller.handle(event);
            handled += 1;
        }
        handled
    }

    /// Lets timer tasks that are already due post their events, then pumps until
    /// a yield brings nothing new.
    pub async fn settle(&mut self) -> usize {
        let mut handled = 0;
        loop {
            tokio::task::yield_now().await;
            let applied = self.pump();
            if applied == 0 {
                return handled;
            }
            handled += applied;
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(&self.controller, &self.content)
    }

    /// Removes the scroll listener and disconnects the skills observer.
    ///
    /// Events already queued stay queued. Whether a pending sent reset still fires
    /// follows the configured teardown policy. Calling this twice is a no-op.
    pub fn teardown(&mut self) {
        let Some(subscriptions) = self.subscriptions.take() else {
            return;
        };

        subscriptions.host.scroll.remove_listener(subscriptions.scroll);
        subscriptions.host.intersection.disconnect(subscriptions.skills);
        self.controller.teardown();

        info!(
            teardown = ?self.controller.config().teardown,
            "page session torn down"
        );
    }
}

impl PageSession<TokioScheduler> {
    /// Mounts with deferred timers on the current tokio runtime.
    pub fn mount_on_tokio(
        config: ControllerConfig,
        content: Arc<SiteContent>,
        host: HostCapabilities,
    ) -> Result<Self, ViewStateError> {
        let (inbox, sink) = open_inbox();
        let scheduler = TokioScheduler::current(sink.clone())?;
        Ok(Self::attach(config, content, host, inbox, sink, scheduler))
    }
}

fn open_inbox() -> (Receiver<PageEvent>, EventSink) {
    let (tx, inbox) = unbounded();
    (inbox, EventSink::new(tx))
}

impl<S: Scheduler> Drop for PageSession<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
