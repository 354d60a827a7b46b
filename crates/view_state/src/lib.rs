//! View state for the portfolio page: navigation highlight, scrolled navbar chrome,
//! the skills reveal latch and the mock contact form.
//!
//! Host signals arrive as [`PageEvent`] messages in a single inbox and are applied
//! by one [`PageSession`] on the caller's thread. Nothing here performs I/O.

pub mod controller;
pub mod error;
pub mod events;
pub mod host;
pub mod scheduler;
pub mod session;
pub mod snapshot;
pub mod state;

pub use controller::{ControllerConfig, SubmitOutcome, TeardownPolicy, ViewStateController};
pub use error::ViewStateError;
pub use events::{EventSink, ListenerId, ObserverId, PageEvent, TimerId};
pub use host::{HostCapabilities, IntersectionNotifier, ScrollNotifier, SimulatedViewport};
pub use scheduler::{Scheduler, TokioScheduler};
pub use session::PageSession;
pub use snapshot::{ContactPanel, FormSnapshot, NavPill, SkillBar, ViewSnapshot};
