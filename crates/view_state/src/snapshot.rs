//! Derived, render-ready view of the controller state.

use serde::Serialize;
use shared::{
    content::SiteContent,
    domain::{FormField, NavLabel},
};

use crate::{controller::ViewStateController, scheduler::Scheduler};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavPill {
    pub label: NavLabel,
    pub href: &'static str,
    pub active: bool,
}

/// Skill bars render at zero width until the skills section has been revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub color: String,
    pub width_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPanel {
    Form,
    Confirmation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub active_nav: NavLabel,
    pub scroll_offset_y: u32,
    pub scrolled_chrome: bool,
    pub skills_revealed: bool,
    pub form: FormSnapshot,
    pub sent: bool,
    pub contact_panel: ContactPanel,
    pub nav: Vec<NavPill>,
    pub skill_bars: Vec<SkillBar>,
}

impl ViewSnapshot {
    pub fn capture<S: Scheduler>(
        controller: &ViewStateController<S>,
        content: &SiteContent,
    ) -> Self {
        let active = controller.active();
        let revealed = controller.skills_in_view();
        let form = controller.form();

        Self {
            active_nav: active,
            scroll_offset_y: controller.scroll().offset_y(),
            scrolled_chrome: controller.is_scrolled(),
            skills_revealed: revealed,
            form: FormSnapshot {
                name: form.field(FormField::Name).to_string(),
                email: form.field(FormField::Email).to_string(),
                message: form.field(FormField::Message).to_string(),
            },
            sent: form.sent(),
            contact_panel: if form.sent() {
                ContactPanel::Confirmation
            } else {
                ContactPanel::Form
            },
            nav: NavLabel::ALL
                .into_iter()
                .map(|label| NavPill {
                    label,
                    href: label.anchor(),
                    active: label == active,
                })
                .collect(),
            skill_bars: content
                .skills
                .iter()
                .map(|skill| SkillBar {
                    name: skill.name.clone(),
                    color: skill.color.clone(),
                    width_percent: if revealed { skill.level } else { 0 },
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/snapshot_tests.rs"]
mod tests;
