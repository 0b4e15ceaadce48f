//! # Folio Site - Client State for the Portfolio Pages
//!
//! `folio-site` holds everything a portfolio page keeps track of besides
//! its theme: which page is showing, header navigation, local analytics,
//! the contact form, the project list, and animation timing. Theming comes
//! from [`folio_theme`], storage from [`folio_store`].
//!
//! ## Core Concepts
//!
//! - [`PortfolioApp`]: Starts a page and owns its state
//! - [`SiteContext`]: Store, surface and environment a page starts from
//! - [`Page`]: Which page a URL path shows
//! - [`Analytics`]: View counters and capped event logs in the store
//! - [`ContactForm`]: Validation and local storage of messages
//! - [`Navigation`]: Mobile menu, header scroll classes, active section
//! - [`Motion`]: Reduced-motion handling and animation math
//! - [`ProjectTemplates`]: MiniJinja rendering of the projects grid
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use folio_site::{ContactForm, Page, PortfolioApp, SiteContext};
//! use folio_store::MemoryStore;
//! use folio_theme::{ColorMode, DocumentSurface};
//!
//! let ctx = SiteContext::new(MemoryStore::new(), DocumentSurface::new())
//!     .with_detector(|| ColorMode::Light)
//!     .with_viewport_width(390);
//!
//! let mut app = PortfolioApp::start(ctx, "/pages/contact-me/index.html", Utc::now());
//! assert_eq!(app.page(), Page::Contact);
//! assert!(app.theme().surface().has_class("loaded"));
//!
//! app.choose_theme("ocean");
//! assert_eq!(app.theme().current_theme(), "ocean");
//!
//! let form = ContactForm::new("Ada", "ada@example.com", "Hello", "Nice site!");
//! assert!(app.submit_contact(&form, Utc::now()).is_ok());
//! ```
//!
//! ## Logging
//!
//! Like `folio-theme`, this crate only emits `tracing` events: `info` on
//! startup and stored contact messages, `debug` for tracked views, events and
//! menu changes, `warn` for logged client errors.

pub mod analytics;
mod app;
pub mod contact;
mod error;
pub mod intro;
pub mod motion;
pub mod navigation;
mod page;
pub mod projects;
mod render;
mod util;

pub use analytics::{Analytics, ClientInfo, ErrorLog, PageViews, TrackedEvent, Visit};
pub use app::{PortfolioApp, SiteContext, DEFAULT_VIEWPORT_WIDTH, LOADED_CLASS};
pub use contact::{ContactForm, ContactMessage};
pub use error::{ContactError, RenderError};
pub use intro::{IntroAction, IntroPlayer};
pub use motion::{Motion, SlideDirection, StaggerGroup};
pub use navigation::{DeviceType, HeaderState, LinkAction, Navigation};
pub use page::{Page, HOME_PATH};
pub use projects::{
    category_icon, default_projects, load_projects, Availability, Badge, Project,
};
pub use render::ProjectTemplates;
pub use util::{escape_html, format_date, validate_email};
