//! Page routing.
//!
//! The site is a handful of static pages. Which one is loaded decides the
//! page-specific setup and the analytics key views are counted under.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the intro page sends visitors when the video ends or is skipped.
pub const HOME_PATH: &str = "/pages/Home/index.html";

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Projects,
    /// The "About me" page, listing skills.
    Skills,
    Contact,
    /// The landing video at the site root's `index.html`.
    Intro,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Projects,
        Page::Skills,
        Page::Contact,
        Page::Intro,
    ];

    /// Resolves a URL path to a page. Unrecognized paths are the home page.
    ///
    /// ```rust
    /// use folio_site::Page;
    ///
    /// assert_eq!(Page::from_path("/pages/Projects/index.html"), Page::Projects);
    /// assert_eq!(Page::from_path("/pages/About-me/index.html"), Page::Skills);
    /// assert_eq!(Page::from_path("/index.html"), Page::Intro);
    /// assert_eq!(Page::from_path("/somewhere/else"), Page::Home);
    /// ```
    pub fn from_path(path: &str) -> Page {
        if path.contains("Home") || path == "/" {
            Page::Home
        } else if path.contains("Projects") {
            Page::Projects
        } else if path.contains("About-me") {
            Page::Skills
        } else if path.contains("contact-me") {
            Page::Contact
        } else if path.contains("index.html") && !path.contains("pages") {
            Page::Intro
        } else {
            Page::Home
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Skills => "skills",
            Page::Contact => "contact",
            Page::Intro => "intro",
        }
    }

    /// Store key counting views of this page: `portfolio_home_views`.
    pub fn views_key(self) -> String {
        format!("portfolio_{}_views", self.as_str())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
