use thiserror::Error;

use crate::events::TimerId;

#[derive(Debug, Error)]
pub enum ViewStateError {
    #[error("no tokio runtime is available to drive deferred timers")]
    RuntimeUnavailable,
    #[error("timer {timer:?} could not be scheduled: {reason}")]
    Schedule { timer: TimerId, reason: String },
}
