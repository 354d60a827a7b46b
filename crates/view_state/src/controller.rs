//! Translates page events into navigation, scroll, reveal and contact-form state.

use std::time::Duration;

use shared::domain::{FormField, NavLabel};
use tracing::{debug, info, warn};

use crate::{
    events::{PageEvent, TimerId},
    scheduler::Scheduler,
    state::{ContactFormState, NavigationState, ScrollState, SkillsRevealState},
};

pub const SCROLLED_CHROME_THRESHOLD_PX: u32 = 40;
pub const SKILLS_REVEAL_THRESHOLD: f64 = 0.3;
pub const SENT_RESET_DELAY: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeardownPolicy {
    /// A reset scheduled before teardown still fires.
    #[default]
    LeavePendingReset,
    CancelPendingReset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub scroll_threshold_px: u32,
    pub reveal_threshold: f64,
    pub sent_reset_delay: Duration,
    pub teardown: TeardownPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLLED_CHROME_THRESHOLD_PX,
            reveal_threshold: SKILLS_REVEAL_THRESHOLD,
            sent_reset_delay: SENT_RESET_DELAY,
            teardown: TeardownPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Incomplete,
}

pub struct ViewStateController<S: Scheduler> {
    config: ControllerConfig,
    scheduler: S,
    navigation: NavigationState,
    scroll: ScrollState,
    skills: SkillsRevealState,
    form: ContactFormState,
    next_timer: u64,
}

impl<S: Scheduler> ViewStateController<S> {
    pub fn new(config: ControllerConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            navigation: NavigationState::default(),
            scroll: ScrollState::default(),
            skills: SkillsRevealState::default(),
            form: ContactFormState::default(),
            next_timer: 0,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn skills(&self) -> &SkillsRevealState {
        &self.skills
    }

    pub fn form(&self) -> &ContactFormState {
        &self.form
    }

    pub fn active(&self) -> NavLabel {
        self.navigation.active()
    }

    /// Navbar switches to its scrolled styling strictly past the threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled(self.config.scroll_threshold_px)
    }

    pub fn skills_in_view(&self) -> bool {
        self.skills.in_view()
    }

    pub fn sent(&self) -> bool {
        self.form.sent()
    }

    /// Applies one event. Only `SubmitClicked` yields an outcome.
    pub fn handle(&mut self, event: PageEvent) -> Option<SubmitOutcome> {
        match event {
            PageEvent::Scrolled { offset_y } => self.on_scroll(offset_y),
            PageEvent::SkillsIntersection { ratio } => self.on_skills_section_visible(ratio),
            PageEvent::NavClicked(label) => self.select_nav(label),
            PageEvent::FieldEdited { field, value } => self.update_field(field, value),
            PageEvent::SubmitClicked => return Some(self.submit()),
            PageEvent::SentResetElapsed { timer } => self.on_sent_reset_elapsed(timer),
        }
        None
    }

    pub fn on_scroll(&mut self, offset_y: u32) {
        let was_scrolled = self.is_scrolled();
        self.scroll.record(offset_y);

        let scrolled = self.is_scrolled();
        if scrolled != was_scrolled {
            debug!(offset_y, scrolled, "navbar chrome changed");
        }
    }

    pub fn on_skills_section_visible(&mut self, ratio: f64) {
        if self.skills.in_view() || ratio.is_nan() {
            return;
        }

        let ratio = ratio.clamp(0.0, 1.0);
        if ratio >= self.config.reveal_threshold && self.skills.latch() {
            debug!(ratio, "skills section revealed");
        }
    }

    pub fn select_nav(&mut self, label: NavLabel) {
        if self.navigation.select(label) {
            debug!(active = %label, "navigation highlight moved");
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value.into());
        debug!(field = %field, "contact field edited");
    }

    /// Mock submission. Nothing is transmitted; an incomplete form is silently ignored.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.is_complete() {
            debug!("contact form incomplete; submit ignored");
            return SubmitOutcome::Incomplete;
        }

        self.form.accept();

        let timer = self.allocate_timer();
        let delay = self.config.sent_reset_delay;
        match self
            .scheduler
            .schedule(timer, delay, PageEvent::SentResetElapsed { timer })
        {
            Ok(()) => self.form.set_pending_reset(Some(timer)),
            Err(err) => {
                warn!(error = %err, "failed to schedule sent reset; confirmation will stay visible");
                self.form.set_pending_reset(None);
            }
        }

        info!(reset_after = ?delay, "contact form accepted");
        SubmitOutcome::Accepted
    }

    pub fn on_sent_reset_elapsed(&mut self, timer: TimerId) {
        let was_sent = self.form.sent();
        self.form.reset_sent(timer);
        if was_sent {
            debug!(timer = timer.0, "sent confirmation cleared");
        }
    }

    pub fn teardown(&mut self) {
        if self.config.teardown != TeardownPolicy::CancelPendingReset {
            return;
        }

        if let Some(timer) = self.form.take_pending_reset() {
            self.scheduler.cancel(timer);
            debug!(timer = timer.0, "cancelled pending sent reset on teardown");
        }
    }

    fn allocate_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
