//! Portfolio projects, their drafts, and the derived views the landing page
//! and admin panel need.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{missing_fields, required_field, Entity, NoticeKeys};
use crate::error::CoreError;
use crate::i18n::TextKey;
use crate::types::{EntityId, Timestamp};

/// Image shown when a project has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    /// Short description shown on the card.
    pub description: String,
    /// Long description shown in the detail modal.
    pub full_description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub repo_url: String,
    pub demo_url: String,
    #[serde(default)]
    pub featured: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub repo_url: String,
    pub demo_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectPatch {
    /// Trim text fields and reject blank titles or descriptions, with the
    /// same rules a full draft goes through. Tags are trimmed with blanks
    /// dropped; an emptied image falls back to the placeholder.
    pub fn validated(self) -> Result<Self, CoreError> {
        let mut missing = Vec::new();
        let title = required_field("title", self.title, &mut missing);
        let description = required_field("description", self.description, &mut missing);
        missing_fields(missing)?;

        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        Ok(Self {
            title,
            description,
            full_description: trim(self.full_description),
            tags: self.tags.map(|tags| {
                tags.iter()
                    .map(|t| t.trim())
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            }),
            image_url: trim(self.image_url).map(|url| {
                if url.is_empty() {
                    PLACEHOLDER_IMAGE.to_string()
                } else {
                    url
                }
            }),
            repo_url: trim(self.repo_url),
            demo_url: trim(self.demo_url),
            featured: self.featured,
        })
    }
}

impl From<NewProject> for ProjectPatch {
    /// A full form save replaces every editable field.
    fn from(new: NewProject) -> Self {
        Self {
            title: Some(new.title),
            description: Some(new.description),
            full_description: Some(new.full_description),
            tags: Some(new.tags),
            image_url: Some(new.image_url),
            repo_url: Some(new.repo_url),
            demo_url: Some(new.demo_url),
            featured: Some(new.featured),
        }
    }
}

impl Entity for Project {
    type New = NewProject;
    type Patch = ProjectPatch;

    const KIND: &'static str = "Project";
    const NOTICES: NoticeKeys = NoticeKeys {
        created: Some(TextKey::AdminProjectCreated),
        updated: TextKey::AdminProjectUpdated,
        deleted: TextKey::AdminProjectDeleted,
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn from_new(id: EntityId, created_at: Timestamp, new: NewProject) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            full_description: new.full_description,
            tags: new.tags,
            image_url: new.image_url,
            repo_url: new.repo_url,
            demo_url: new.demo_url,
            featured: new.featured,
            created_at,
        }
    }

    fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(full) = &patch.full_description {
            self.full_description.clone_from(full);
        }
        if let Some(tags) = &patch.tags {
            self.tags.clone_from(tags);
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url.clone_from(image_url);
        }
        if let Some(repo_url) = &patch.repo_url {
            self.repo_url.clone_from(repo_url);
        }
        if let Some(demo_url) = &patch.demo_url {
            self.demo_url.clone_from(demo_url);
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Editable copy of a project as the admin form holds it.
///
/// Tags are a single comma-separated string until the draft is converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub full_description: String,
    pub tags: String,
    pub image_url: String,
    pub repo_url: String,
    pub demo_url: String,
    pub featured: bool,
}

impl ProjectForm {
    /// Pre-fill a draft for editing an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            full_description: project.full_description.clone(),
            tags: project.tags.join(", "),
            image_url: project.image_url.clone(),
            repo_url: project.repo_url.clone(),
            demo_url: project.demo_url.clone(),
            featured: project.featured,
        }
    }

    /// Trim, check required fields, and produce the record to persist.
    pub fn into_new(self) -> Result<NewProject, CoreError> {
        let trimmed = Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            full_description: self.full_description.trim().to_string(),
            tags: self.tags,
            image_url: self.image_url.trim().to_string(),
            repo_url: self.repo_url.trim().to_string(),
            demo_url: self.demo_url.trim().to_string(),
            featured: self.featured,
        };
        trimmed.validate()?;

        let image_url = if trimmed.image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            trimmed.image_url
        };

        Ok(NewProject {
            title: trimmed.title,
            description: trimmed.description,
            full_description: trimmed.full_description,
            tags: split_tags(&trimmed.tags),
            image_url,
            repo_url: trimmed.repo_url,
            demo_url: trimmed.demo_url,
            featured: trimmed.featured,
        })
    }
}

/// Split a comma-separated tag string, dropping blanks. Order is kept and
/// duplicates are not removed.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Every tag used by any project, deduplicated in first-seen order.
///
/// The landing page prepends its own "all" entry.
pub fn tag_menu(projects: &[Project]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Projects carrying `tag`, or all of them when no tag is given.
pub fn filter_by_tag<'a>(projects: &'a [Project], tag: Option<&str>) -> Vec<&'a Project> {
    match tag {
        None => projects.iter().collect(),
        Some(tag) => projects
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect(),
    }
}

/// Counters shown above the admin project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub featured: usize,
}

impl ProjectStats {
    pub fn of(projects: &[Project]) -> Self {
        Self {
            total: projects.len(),
            featured: projects.iter().filter(|p| p.featured).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn project(id: &str, tags: &[&str], featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: "short".to_string(),
            full_description: "long".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            repo_url: String::new(),
            demo_url: String::new(),
            featured,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn blank_draft_fields_take_defaults() {
        let form = ProjectForm {
            title: "Demo".to_string(),
            description: "A demo".to_string(),
            tags: String::new(),
            ..Default::default()
        };

        let new = form.into_new().expect("draft should convert");
        assert!(new.tags.is_empty());
        assert!(!new.featured);
        assert_eq!(new.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn draft_fields_are_trimmed_and_tags_split() {
        let form = ProjectForm {
            title: "  Shop  ".to_string(),
            description: " store front ".to_string(),
            tags: "React, , TypeScript ,Tailwind,".to_string(),
            image_url: " https://img.example/a.png ".to_string(),
            featured: true,
            ..Default::default()
        };

        let new = form.into_new().unwrap();
        assert_eq!(new.title, "Shop");
        assert_eq!(new.description, "store front");
        assert_eq!(new.tags, vec!["React", "TypeScript", "Tailwind"]);
        assert_eq!(new.image_url, "https://img.example/a.png");
        assert!(new.featured);
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let form = ProjectForm {
            title: "   ".to_string(),
            description: "ok".to_string(),
            ..Default::default()
        };

        let err = form.into_new().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("title"));
    }

    #[test]
    fn editing_draft_joins_tags() {
        let p = project("1", &["Rust", "Axum"], false);
        let form = ProjectForm::from_project(&p);
        assert_eq!(form.tags, "Rust, Axum");
        assert_eq!(form.into_new().unwrap().tags, vec!["Rust", "Axum"]);
    }

    #[test]
    fn apply_changes_only_named_fields() {
        let mut p = project("1", &["Rust"], false);
        let before = p.clone();

        p.apply(&ProjectPatch {
            featured: Some(true),
            ..Default::default()
        });

        assert!(p.featured);
        assert_eq!(p.title, before.title);
        assert_eq!(p.tags, before.tags);
        assert_eq!(p.created_at, before.created_at);
    }

    #[test]
    fn tag_menu_dedups_in_first_seen_order() {
        let projects = vec![
            project("1", &["React", "Node"], false),
            project("2", &["Node", "Rust", "React"], false),
        ];
        assert_eq!(tag_menu(&projects), vec!["React", "Node", "Rust"]);
    }

    #[test]
    fn filter_by_tag_matches_exact_tags() {
        let projects = vec![
            project("1", &["React"], false),
            project("2", &["Rust"], true),
        ];
        let ids: Vec<_> = filter_by_tag(&projects, Some("Rust"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
        assert_eq!(filter_by_tag(&projects, None).len(), 2);
        assert!(filter_by_tag(&projects, Some("Go")).is_empty());
    }

    #[test]
    fn stats_count_featured() {
        let projects = vec![
            project("1", &[], true),
            project("2", &[], false),
            project("3", &[], true),
        ];
        assert_eq!(
            ProjectStats::of(&projects),
            ProjectStats {
                total: 3,
                featured: 2
            }
        );
    }

    #[test]
    fn patch_blanking_title_is_rejected() {
        let patch = ProjectPatch {
            title: Some("   ".to_string()),
            featured: Some(true),
            ..Default::default()
        };

        assert_matches!(
            patch.validated(),
            Err(CoreError::Validation(msg)) if msg.contains("title")
        );
    }

    #[test]
    fn patch_fields_are_trimmed_and_untouched_fields_stay_absent() {
        let patch = ProjectPatch {
            title: Some("  Shop ".to_string()),
            tags: Some(vec![" Rust".to_string(), " ".to_string()]),
            image_url: Some(" ".to_string()),
            ..Default::default()
        }
        .validated()
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Shop"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.tags, Some(vec!["Rust".to_string()]));
        assert_eq!(patch.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn patch_with_unknown_field_does_not_parse() {
        let parsed: Result<ProjectPatch, _> = serde_json::from_str(r#"{"titel":"typo"}"#);
        assert!(parsed.is_err());
        assert!(Project::patch_is_empty(&ProjectPatch::default()));
    }
}
