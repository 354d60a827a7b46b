//! The four state slots owned by the controller.

use shared::domain::{FormField, NavLabel};

use crate::events::TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active: NavLabel,
}

impl NavigationState {
    pub fn active(&self) -> NavLabel {
        self.active
    }

    /// Returns whether the highlighted label changed.
    pub(crate) fn select(&mut self, label: NavLabel) -> bool {
        let changed = self.active != label;
        self.active = label;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset_y: u32,
}

impl ScrollState {
    pub fn offset_y(&self) -> u32 {
        self.offset_y
    }

    pub fn is_scrolled(&self, threshold_px: u32) -> bool {
        self.offset_y > threshold_px
    }

    pub(crate) fn record(&mut self, offset_y: u32) {
        self.offset_y = offset_y;
    }
}

/// One-way latch; once in view, always in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillsRevealState {
    in_view: bool,
}

impl SkillsRevealState {
    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Returns true only for the call that performs the transition.
    pub(crate) fn latch(&mut self) -> bool {
        let transitioned = !self.in_view;
        self.in_view = true;
        transitioned
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    name: String,
    email: String,
    message: String,
    sent: bool,
    pending_reset: Option<TimerId>,
}

impl ContactFormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn sent(&self) -> bool {
        self.sent
    }

    pub fn pending_reset(&self) -> Option<TimerId> {
        self.pending_reset
    }

    /// Presence check only; whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub(crate) fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub(crate) fn accept(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.sent = true;
    }

    pub(crate) fn set_pending_reset(&mut self, timer: Option<TimerId>) {
        self.pending_reset = timer;
    }

    pub(crate) fn take_pending_reset(&mut self) -> Option<TimerId> {
        self.pending_reset.take()
    }

    /// Clears `sent` for any elapsed reset timer, not just the latest one.
    pub(crate) fn reset_sent(&mut self, timer: TimerId) {
        self.sent = false;
        if self.pending_reset == Some(timer) {
            self.pending_reset = None;
        }
    }
}
