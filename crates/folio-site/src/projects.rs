//! Project listings and the availability indicator.
//!
//! Projects can be edited into the store under `portfolioProjects` as a JSON
//! array; without it the built-in list is shown. Only published projects are
//! listed.

use folio_store::json;
use folio_store::KeyValueStore;
use serde::{Deserialize, Serialize};

pub const PROJECTS_KEY: &str = "portfolioProjects";
pub const STATUS_KEY: &str = "portfolioStatus";

/// Status value of projects that are listed.
pub const PUBLISHED: &str = "published";

const GITHUB_PROFILE: &str = "https://github.com/Emozz001";

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub status: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    pub fn is_published(&self) -> bool {
        self.status == PUBLISHED
    }

    /// Font Awesome icon shown when the project has no image.
    pub fn icon(&self) -> &'static str {
        category_icon(&self.category)
    }

    /// Badges shown on the card, in display order.
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if self.is_live {
            badges.push(Badge::Live);
        }
        if self.github.is_some() {
            badges.push(Badge::OpenSource);
        }
        badges
    }
}

/// A status badge on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Live,
    OpenSource,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Live => "Live",
            Badge::OpenSource => "Open Source",
        }
    }

    /// Class added next to `status-badge`.
    pub fn class(self) -> &'static str {
        match self {
            Badge::Live => "live",
            Badge::OpenSource => "github",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Badge::Live => "fas fa-circle",
            Badge::OpenSource => "fab fa-github",
        }
    }
}

/// Icon name for a project category; unknown categories get `code`.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "web" => "globe",
        "bot" => "robot",
        "tool" => "tools",
        "mobile" => "mobile-alt",
        "desktop" => "desktop",
        _ => "code",
    }
}

/// The projects shown when none are stored.
pub fn default_projects() -> Vec<Project> {
    fn project(
        title: &str,
        description: &str,
        technologies: &[&str],
        is_live: bool,
        is_featured: bool,
        category: &str,
    ) -> Project {
        Project {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            is_live,
            is_featured,
            status: PUBLISHED.to_string(),
            link: Some(GITHUB_PROFILE.to_string()),
            github: Some(GITHUB_PROFILE.to_string()),
            category: category.to_string(),
            image: None,
        }
    }

    vec![
        project(
            "ChartNodes",
            "Minecraft servers hosting solution with real-time analytics and management dashboard.",
            &["HTML", "SCSS", "Python", "Flask"],
            true,
            true,
            "web",
        ),
        project(
            "PROTECTX Bot",
            "Discord anti-crash bot with advanced protection features and custom commands.",
            &["React", "Express", "Discord.js", "Node.js"],
            false,
            true,
            "bot",
        ),
        project(
            "Kahoot Answers",
            "Get answers to your kahoot quiz in real-time with this powerful educational tool.",
            &["CSS", "Express", "Node.js"],
            true,
            false,
            "tool",
        ),
    ]
}

/// Published projects from the store, or the defaults if none are stored.
///
/// An unreadable stored list counts as missing.
pub fn load_projects<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Project> {
    json::read_json::<Vec<Project>, _>(store, PROJECTS_KEY)
        .unwrap_or_else(default_projects)
        .into_iter()
        .filter(Project::is_published)
        .collect()
}

/// Whether the site owner is taking on work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Available,
    Busy,
}

impl Availability {
    /// Reads `portfolioStatus`. Anything other than `available` is busy.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(STATUS_KEY).as_deref() {
            None | Some("available") => Availability::Available,
            Some(_) => Availability::Busy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available for projects",
            Availability::Busy => "Currently busy",
        }
    }

    /// Class list of the status dot.
    pub fn dot_class(self) -> &'static str {
        match self {
            Availability::Available => "status-dot dot-available",
            Availability::Busy => "status-dot dot-busy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_store::MemoryStore;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let projects = load_projects(&MemoryStore::new());
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["ChartNodes", "PROTECTX Bot", "Kahoot Answers"]);
    }

    #[test]
    fn test_stored_projects_filter_unpublished() {
        let store = MemoryStore::new().with_entry(
            PROJECTS_KEY,
            r#"[
                {"title": "A", "description": "a", "status": "published", "category": "mobile"},
                {"title": "B", "description": "b", "status": "draft"}
            ]"#,
        );
        let projects = load_projects(&store);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "A");
        assert_eq!(projects[0].icon(), "mobile-alt");
        assert!(projects[0].badges().is_empty());
    }

    #[test]
    fn test_unreadable_projects_use_defaults() {
        let store = MemoryStore::new().with_entry(PROJECTS_KEY, "null");
        assert_eq!(load_projects(&store).len(), 3);

        let store = MemoryStore::new().with_entry(PROJECTS_KEY, "[");
        assert_eq!(load_projects(&store).len(), 3);
    }

    #[test]
    fn test_empty_stored_list_is_respected() {
        let store = MemoryStore::new().with_entry(PROJECTS_KEY, "[]");
        let projects = load_projects(&store);
        assert!(projects.is_empty());
    }

    #[test]
    fn test_category_icon() {
        assert_eq!(category_icon("web"), "globe");
        assert_eq!(category_icon("bot"), "robot");
        assert_eq!(category_icon("tool"), "tools");
        assert_eq!(category_icon("desktop"), "desktop");
        assert_eq!(category_icon("game"), "code");
        assert_eq!(category_icon(""), "code");
    }

    #[test]
    fn test_badges() {
        let defaults = default_projects();
        assert_eq!(defaults[0].badges(), [Badge::Live, Badge::OpenSource]);
        assert_eq!(defaults[1].badges(), [Badge::OpenSource]);
        assert_eq!(Badge::OpenSource.label(), "Open Source");
        assert_eq!(Badge::OpenSource.icon(), "fab fa-github");
        assert_eq!(Badge::Live.class(), "live");
    }

    #[test]
    fn test_availability() {
        assert_eq!(Availability::load(&MemoryStore::new()), Availability::Available);

        let busy = MemoryStore::new().with_entry(STATUS_KEY, "busy");
        let status = Availability::load(&busy);
        assert_eq!(status, Availability::Busy);
        assert_eq!(status.label(), "Currently busy");
        assert_eq!(status.dot_class(), "status-dot dot-busy");
    }
}
