//! Inbound page events and the sink hosts use to queue them.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{FormField, NavLabel};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);
    };
}

id_newtype!(ListenerId);
id_newtype!(ObserverId);
id_newtype!(TimerId);

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled { offset_y: u32 },
    SkillsIntersection { ratio: f64 },
    NavClicked(NavLabel),
    FieldEdited { field: FormField, value: String },
    SubmitClicked,
    SentResetElapsed { timer: TimerId },
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Scrolled { .. } => "scrolled",
            PageEvent::SkillsIntersection { .. } => "skills_intersection",
            PageEvent::NavClicked(_) => "nav_clicked",
            PageEvent::FieldEdited { .. } => "field_edited",
            PageEvent::SubmitClicked => "submit_clicked",
            PageEvent::SentResetElapsed { .. } => "sent_reset_elapsed",
        }
    }
}

/// Cloneable handle onto a session inbox.
///
/// Posting never blocks. Session inboxes are unbounded, so only a sink whose
/// session is gone (or a caller-supplied bounded sender that is full) drops the event.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Sender<PageEvent>,
}

impl EventSink {
    pub fn new(tx: Sender<PageEvent>) -> Self {
        Self { tx }
    }

    pub fn post(&self, event: PageEvent) -> bool {
        let event_name = event.name();
        match self.tx.try_send(event) {
            Ok(()) => {
                tracing::trace!(event = event_name, "queued page event");
                true
            }
            Err(TrySendError::Full(_)) => {
                tracing::warn!(event = event_name, "page event inbox is full; dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(event = event_name, "page session is gone; dropping event");
                false
            }
        }
    }
}
