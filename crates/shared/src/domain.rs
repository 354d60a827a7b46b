use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// In-page navigation targets, in navbar display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NavLabel {
    #[default]
    About,
    Projects,
    Skills,
    Contact,
}

impl NavLabel {
    pub const ALL: [NavLabel; 4] = [
        NavLabel::About,
        NavLabel::Projects,
        NavLabel::Skills,
        NavLabel::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavLabel::About => "About",
            NavLabel::Projects => "Projects",
            NavLabel::Skills => "Skills",
            NavLabel::Contact => "Contact",
        }
    }

    /// Fragment link of the section this label scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            NavLabel::About => "#about",
            NavLabel::Projects => "#projects",
            NavLabel::Skills => "#skills",
            NavLabel::Contact => "#contact",
        }
    }
}

impl fmt::Display for NavLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavLabel {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        NavLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| UnknownVariant::new("navigation label", raw))
    }
}

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| UnknownVariant::new("form field", raw))
    }
}
