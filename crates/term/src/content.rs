//! Portfolio content shown by the section views.
//!
//! Content is plain data. A built-in default ships with the binary; a JSON
//! file with the same shape can replace it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub badge: Option<String>,
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub contact: Vec<Link>,
}

impl PortfolioContent {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing content file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn link(label: &str, url: &str) -> Link {
    Link {
        label: label.to_string(),
        url: url.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            name: "Sam Carter".to_string(),
            headline: "Full-Stack Engineer & AI Developer".to_string(),
            badge: Some("Available for Work".to_string()),
            tagline: "I build intelligent applications by pairing high-performance backends \
                      with intuitive interfaces."
                .to_string(),
            about: "Several years at the intersection of full-stack development and applied AI, \
                    building scalable systems that solve real problems."
                .to_string(),
            links: vec![
                link("GitHub", "https://github.com/"),
                link("LinkedIn", "https://www.linkedin.com/"),
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Senior Software Engineer".to_string(),
                    company: "Northwind Labs".to_string(),
                    period: "2022 - Present".to_string(),
                    highlights: strings(&[
                        "Led the rewrite of the ingestion pipeline, cutting p99 latency by 60%.",
                        "Shipped retrieval-augmented search over internal documentation.",
                    ]),
                },
                ExperienceEntry {
                    role: "Software Engineer".to_string(),
                    company: "Bluebird Analytics".to_string(),
                    period: "2019 - 2022".to_string(),
                    highlights: strings(&[
                        "Built the customer dashboard and its streaming metrics backend.",
                        "Introduced contract tests between the web client and API.",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    name: "Portfolio Chat".to_string(),
                    description: "Conversational assistant answering questions about this \
                                  portfolio using a vector index over its content."
                        .to_string(),
                    tech: strings(&["Rust", "Qdrant", "LLM API"]),
                },
                Project {
                    name: "Trail Planner".to_string(),
                    description: "Offline-first route planner with elevation-aware pacing."
                        .to_string(),
                    tech: strings(&["TypeScript", "PostGIS"]),
                },
            ],
            skills: vec![
                SkillGroup {
                    name: "Languages".to_string(),
                    items: strings(&["Rust", "TypeScript", "Python", "SQL"]),
                },
                SkillGroup {
                    name: "Platforms".to_string(),
                    items: strings(&["PostgreSQL", "Docker", "AWS"]),
                },
            ],
            contact: vec![
                link("Email", "hello@example.com"),
                link("GitHub", "https://github.com/"),
            ],
        }
    }
}
