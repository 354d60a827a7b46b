//! Static page content: projects, skills, "familiar with" tags and social links.
//!
//! Content is read-only for the whole page session. A TOML file may replace any
//! top-level section; sections it omits keep the built-in catalogue.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// CSS gradient stops, passed through to the renderer untouched.
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Marks the project the portfolio started from; rendered with a badge.
    #[serde(default)]
    pub origin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner: String,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub familiar: Vec<String>,
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for (index, skill) in self.skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                return Err(ContentError::EmptySkillName { index });
            }
            if skill.level > 100 {
                return Err(ContentError::InvalidSkillLevel {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }

        Ok(())
    }
}

fn project(title: &str, desc: &str, tags: &[&str], gradient: &str, emoji: &str) -> Project {
    Project {
        title: title.into(),
        desc: desc.into(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        gradient: gradient.into(),
        emoji: emoji.into(),
        live: None,
        github: None,
        origin: false,
    }
}

fn skill(name: &str, level: u8, color: &str) -> Skill {
    Skill {
        name: name.into(),
        level,
        color: color.into(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        let mut skywatch = project(
            "SkyWatch Weather App",
            "Where the journey started 🌱 Advanced weather app with live API, rain & snow animations, AQI, 5-day forecast & GPS location.",
            &["HTML", "CSS", "JavaScript", "OpenWeatherMap"],
            "rgba(14,165,233,0.8), rgba(6,182,212,0.8)",
            "🌦️",
        );
        skywatch.live = Some("https://serene-piroshki-3e359e.netlify.app/".into());
        skywatch.github = Some("https://github.com/chelsynew72/SkyWatch".into());
        skywatch.origin = true;

        Self {
            owner: "Ameah Tem Chelsy".into(),
            projects: vec![
                project(
                    "E-Commerce App",
                    "A full-stack shopping platform with cart, auth & payments.",
                    &["Next.js", "NestJS", "Stripe"],
                    "rgba(244,63,94,0.8), rgba(168,85,247,0.8)",
                    "🛒",
                ),
                project(
                    "Weather Dashboard",
                    "Real-time weather with beautiful animated charts and Vue components.",
                    &["Vue.js", "Chart.js", "API"],
                    "rgba(34,211,238,0.8), rgba(59,130,246,0.8)",
                    "🌤️",
                ),
                project(
                    "Task Manager",
                    "Drag & drop task board with team collaboration.",
                    &["React", "NestJS", "Firebase"],
                    "rgba(139,92,246,0.8), rgba(168,85,247,0.8)",
                    "✅",
                ),
                project(
                    "Mobile Fitness App",
                    "Cross-platform fitness tracker with workout logging & progress charts.",
                    &["React Native", "Expo", "TypeScript"],
                    "rgba(251,146,60,0.8), rgba(244,63,94,0.8)",
                    "💪",
                ),
                project(
                    "Social Feed App",
                    "Mobile-first social platform with real-time updates and notifications.",
                    &["React Native", "NestJS", "Socket.io"],
                    "rgba(52,211,153,0.8), rgba(16,185,129,0.8)",
                    "📱",
                ),
                project(
                    "Admin Dashboard",
                    "Responsive admin panel with analytics, charts & role-based access.",
                    &["Vue.js", "Tailwind", "NestJS"],
                    "rgba(99,102,241,0.8), rgba(168,85,247,0.8)",
                    "📊",
                ),
                skywatch,
            ],
            skills: vec![
                skill("React / Next.js", 80, "#38bdf8"),
                skill("Vue.js", 72, "#4ade80"),
                skill("React Native", 70, "#fb7185"),
                skill("NestJS", 68, "#f97316"),
                skill("TypeScript", 75, "#a78bfa"),
                skill("JavaScript", 85, "#facc15"),
                skill("Tailwind CSS", 90, "#c084fc"),
                skill("Node.js", 70, "#34d399"),
                skill("Git & GitHub", 75, "#60a5fa"),
            ],
            familiar: [
                "REST APIs",
                "GraphQL",
                "MongoDB",
                "PostgreSQL",
                "Expo",
                "Pinia",
                "Vuex",
                "Redux",
                "Docker basics",
                "Figma",
                "Vercel",
                "Testing",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            socials: [("GitHub", "🐙"), ("LinkedIn", "💼"), ("Twitter", "🐦")]
                .into_iter()
                .map(|(name, icon)| SocialLink {
                    name: name.into(),
                    icon: icon.into(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
