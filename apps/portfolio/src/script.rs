//! Replay scripts: one JSON step per line, standing in for browser input.

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use shared::domain::{FormField, NavLabel};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ReplayStep {
    Scroll {
        offset_y: u32,
    },
    Intersect {
        ratio: f64,
    },
    Nav {
        #[serde(deserialize_with = "nav_label")]
        label: NavLabel,
    },
    Edit {
        field: FormField,
        #[serde(default)]
        value: String,
    },
    Submit,
    Wait {
        ms: u64,
    },
}

impl ReplayStep {
    pub fn name(&self) -> &'static str {
        match self {
            ReplayStep::Scroll { .. } => "scroll",
            ReplayStep::Intersect { .. } => "intersect",
            ReplayStep::Nav { .. } => "nav",
            ReplayStep::Edit { .. } => "edit",
            ReplayStep::Submit => "submit",
            ReplayStep::Wait { .. } => "wait",
        }
    }
}

fn nav_label<'de, D>(deserializer: D) -> Result<NavLabel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

pub fn parse_script(raw: &str) -> anyhow::Result<Vec<ReplayStep>> {
    raw.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            serde_json::from_str::<ReplayStep>(line)
                .with_context(|| format!("invalid replay step on line {line_no}: {line}"))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
