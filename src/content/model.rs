//! Content dataset types
//!
//! Read-only data rendered by the page. Keys are camelCase on disk so the
//! dataset can be authored alongside a web build of the same page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric project identifier, unique within a dataset
pub type ProjectId = u32;

/// Articles carry no id of their own; they are addressed by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    /// Network name → profile URL
    #[serde(default)]
    pub socials: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    /// Icon key understood by the renderer ("code", "server", "database")
    pub icon: String,
    pub techs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    pub summary: String,
    pub challenge: String,
    pub solution: String,
    pub impact: Vec<String>,
    pub stack: Vec<String>,
    pub full_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub date: String,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: Vec<String>,
}

/// The whole dataset, supplied at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Content {
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id.0)
    }

    pub fn article_ids(&self) -> impl Iterator<Item = ArticleId> + '_ {
        (0..self.articles.len()).map(ArticleId)
    }
}
