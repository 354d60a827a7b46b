use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("skill '{name}' has level {level}; levels are percentages in 0..=100")]
    InvalidSkillLevel { name: String, level: u8 },
    #[error("skill entry {index} has an empty name")]
    EmptySkillName { index: usize },
    #[error("project title '{0}' appears more than once")]
    DuplicateProject(String),
}
