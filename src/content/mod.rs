//! Page content: data model, built-in dataset and JSON loading
//!
//! The dataset is loaded once at startup, validated, and then shared
//! read-only with the page controller.

pub mod model;

pub use model::{Article, ArticleId, Content, Project, ProjectId, SkillCategory};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const BUILTIN_CONTENT: &str = include_str!("../../assets/content.json");

/// Structural problems in a dataset that serde alone cannot catch
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate project id {0}")]
    DuplicateProjectId(ProjectId),

    #[error("profile field '{0}' must not be empty")]
    EmptyProfileField(&'static str),
}

impl Content {
    /// Dataset compiled into the binary
    pub fn builtin() -> Result<Self> {
        let content: Content = serde_json::from_str(BUILTIN_CONTENT)
            .context("Failed to parse built-in content dataset")?;
        content.validate()?;
        Ok(content)
    }

    /// Load and validate a dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {:?}", path))?;

        let content: Content = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse content JSON from {:?}", path))?;

        content
            .validate()
            .with_context(|| format!("Invalid content dataset in {:?}", path))?;

        info!(
            path = %path.display(),
            projects = content.projects.len(),
            articles = content.articles.len(),
            "Loaded content dataset"
        );
        Ok(content)
    }

    /// Load from `path` when given, otherwise fall back to the built-in dataset
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::EmptyProfileField("name"));
        }
        if self.profile.email.trim().is_empty() {
            return Err(ContentError::EmptyProfileField("email"));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_dataset_parses() {
        let content = Content::builtin().unwrap();
        assert_eq!(content.profile.name, "Tanvir Hossain");
        assert_eq!(content.stats.len(), 3);
        assert_eq!(content.skills.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.articles.len(), 3);

        // camelCase keys map onto snake_case fields
        assert!(content.project(2).unwrap().full_description.contains("CQRS"));
        assert_eq!(content.article(ArticleId(0)).unwrap().read_time, "5 min read");
    }

    #[test]
    fn test_lookup_unknown_ids() {
        let content = Content::builtin().unwrap();
        assert!(content.project(99).is_none());
        assert!(content.article(ArticleId(42)).is_none());
        assert_eq!(content.article_ids().count(), content.articles.len());
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut content = Content::builtin().unwrap();
        let mut copy = content.projects[0].clone();
        copy.title = "Copy".to_string();
        content.projects.push(copy);

        assert_eq!(content.validate(), Err(ContentError::DuplicateProjectId(1)));
    }

    #[test]
    fn test_empty_profile_email_rejected() {
        let mut content = Content::builtin().unwrap();
        content.profile.email = "  ".to_string();
        assert_eq!(content.validate(), Err(ContentError::EmptyProfileField("email")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "profile": {{
                    "name": "Ada", "role": "Engineer", "tagline": "t", "bio": "b",
                    "email": "ada@example.com"
                }},
                "projects": [{{
                    "id": 7, "title": "Engine", "client": "C", "type": "Library",
                    "image": "", "summary": "s", "challenge": "c", "solution": "s",
                    "impact": [], "stack": ["Rust"], "fullDescription": "d"
                }}]
            }}"#
        )
        .unwrap();

        let content = Content::load(file.path()).unwrap();
        assert_eq!(content.profile.name, "Ada");
        assert!(content.profile.socials.is_empty());
        assert_eq!(content.project(7).unwrap().kind, "Library");
        assert!(content.articles.is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = Content::load(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }
}
