use anyhow::{Context, Result};
use serde::Deserialize;

/// Profile content shipped inside the binary.
const PROFILE_JSON: &str = include_str!("../assets/profile.json");

// ---------------------------------------------------------------------------
// Profile – the biographical content behind the static pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub contact: Contact,
    #[serde(default)]
    pub links: Vec<Link>,
    pub objective: String,
    #[serde(default)]
    pub education: Vec<Entry>,
    #[serde(default)]
    pub courses: Vec<Entry>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub languages: Vec<LanguageLevel>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub location: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A degree or a course.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub title: String,
    pub institution: Option<String>,
    pub status: String,
}

impl Entry {
    /// `Title - Institution (status)`.
    pub fn summary(&self) -> String {
        match &self.institution {
            Some(inst) => format!("{} - {inst} ({})", self.title, self.status),
            None => format!("{} ({})", self.title, self.status),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageLevel {
    pub language: String,
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub project: String,
    pub copyright: String,
}

impl Profile {
    /// Parse the profile compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(PROFILE_JSON).context("parsing embedded profile")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
