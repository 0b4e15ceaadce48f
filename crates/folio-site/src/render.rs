//! Markup for the projects grid.
//!
//! Cards are rendered with MiniJinja from the templates under `templates/`.
//! Template names end in `.html`, so every interpolated value is
//! HTML-escaped by the engine.
//!
//! ```rust
//! use folio_site::projects::default_projects;
//! use folio_site::ProjectTemplates;
//!
//! let templates = ProjectTemplates::new().unwrap();
//! let html = templates.render_projects(&default_projects()).unwrap();
//! assert!(html.contains("ChartNodes"));
//! ```

use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::RenderError;
use crate::projects::{Badge, Project};

const BADGE_TEMPLATE: &str = "badge.html";
const CARD_TEMPLATE: &str = "project_card.html";
const GRID_TEMPLATE: &str = "projects_grid.html";

/// Seconds of entry animation delay added per card.
const STAGGER_STEP: f64 = 0.1;

/// Renders project cards and the projects grid.
#[derive(Debug)]
pub struct ProjectTemplates {
    env: Environment<'static>,
}

impl ProjectTemplates {
    /// Compiles the bundled templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(BADGE_TEMPLATE, include_str!("../templates/badge.html"))?;
        env.add_template(CARD_TEMPLATE, include_str!("../templates/project_card.html"))?;
        env.add_template(GRID_TEMPLATE, include_str!("../templates/projects_grid.html"))?;
        Ok(Self { env })
    }

    /// Renders one card. `index` staggers the entry animation.
    pub fn render_card(&self, project: &Project, index: usize) -> Result<String, RenderError> {
        let template = self.env.get_template(CARD_TEMPLATE)?;
        Ok(template.render(context! { item => Card::new(project, index) })?)
    }

    /// Renders the whole grid, or the empty notice when `projects` is empty.
    pub fn render_projects(&self, projects: &[Project]) -> Result<String, RenderError> {
        let items: Vec<Card<'_>> = projects
            .iter()
            .enumerate()
            .map(|(index, project)| Card::new(project, index))
            .collect();
        tracing::debug!(count = items.len(), "rendering projects grid");
        let template = self.env.get_template(GRID_TEMPLATE)?;
        Ok(template.render(context! { items })?)
    }
}

#[derive(Debug, Serialize)]
struct Card<'a> {
    project: &'a Project,
    icon: &'static str,
    delay: String,
    badges: Vec<BadgeView>,
}

impl<'a> Card<'a> {
    fn new(project: &'a Project, index: usize) -> Self {
        Self {
            project,
            icon: project.icon(),
            delay: format!("{:.1}", index as f64 * STAGGER_STEP),
            badges: project.badges().into_iter().map(BadgeView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BadgeView {
    class: &'static str,
    icon: &'static str,
    label: &'static str,
}

impl From<Badge> for BadgeView {
    fn from(badge: Badge) -> Self {
        Self {
            class: badge.class(),
            icon: badge.icon(),
            label: badge.label(),
        }
    }
}
