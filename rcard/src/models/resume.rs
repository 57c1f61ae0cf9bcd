// src/models/resume.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;

/// The resume document shipped with the binary, authored as TOML and embedded
/// at build time so the running program never touches the filesystem.
const BUILTIN: &str = include_str!("../../data/resume.toml");

/// One skill category and its entries, in authored order.
#[derive(Deserialize, Debug, Clone)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Job {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// The full resume: identity and contact fields plus the ordered sections.
/// Immutable once deserialized.
#[derive(Deserialize, Debug, Clone)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Job>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<String>,
}

impl ResumeData {
    /// Deserializes the embedded resume document.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML does not match the expected
    /// shape, which can only happen when the shipped data file is edited.
    pub fn builtin() -> Result<Self> {
        toml::from_str(BUILTIN).context("Failed to parse embedded resume data")
    }

    /// Looks up a skill group by category name.
    #[must_use]
    pub fn skill_group(&self, category: &str) -> Option<&SkillGroup> {
        self.skills.iter().find(|g| g.category == category)
    }

    /// Category names in authored order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.skills.iter().map(|g| g.category.as_str()).collect()
    }
}
