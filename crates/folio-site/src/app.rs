//! Page bootstrap.
//!
//! [`PortfolioApp::start`] is what runs once per page load: it applies the
//! visitor's theme, resolves which page is showing, counts the view, and
//! marks the document loaded. Everything the page does afterwards goes
//! through the returned app.

use chrono::{DateTime, Utc};
use folio_store::{KeyValueStore, SharedStore};
use folio_theme::{
    ColorMode, PaletteRegistry, RenderSurface, ThemeConfig, ThemeManager, ThemeOption,
    ThemeSelector,
};

use crate::analytics::{Analytics, ClientInfo, ErrorLog};
use crate::contact::{ContactForm, ContactMessage};
use crate::error::{ContactError, RenderError};
use crate::intro::IntroPlayer;
use crate::motion::Motion;
use crate::navigation::Navigation;
use crate::page::Page;
use crate::projects::{load_projects, Availability, Project};
use crate::render::ProjectTemplates;

/// Class added to the document once startup is done.
pub const LOADED_CLASS: &str = "loaded";

/// Viewport width assumed when the page doesn't report one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Everything a page load starts from.
#[derive(Debug)]
pub struct SiteContext<S, R> {
    store: S,
    surface: R,
    registry: PaletteRegistry,
    theme_config: ThemeConfig,
    detector: Option<fn() -> ColorMode>,
    viewport_width: u32,
    reduced_motion: bool,
    client: ClientInfo,
    sections: Vec<String>,
}

impl<S, R> SiteContext<S, R> {
    /// Starts with the built-in palettes and default theme configuration.
    pub fn new(store: S, surface: R) -> Self {
        Self {
            store,
            surface,
            registry: PaletteRegistry::builtin(),
            theme_config: ThemeConfig::default(),
            detector: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            reduced_motion: false,
            client: ClientInfo::default(),
            sections: Vec::new(),
        }
    }

    pub fn with_registry(mut self, registry: PaletteRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_theme_config(mut self, config: ThemeConfig) -> Self {
        self.theme_config = config;
        self
    }

    /// Overrides system color mode detection.
    pub fn with_detector(mut self, detector: fn() -> ColorMode) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_client(mut self, client: ClientInfo) -> Self {
        self.client = client;
        self
    }

    /// Ids of the in-page sections the navigation links point at.
    pub fn with_sections<I, T>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }
}

/// A started page.
#[derive(Debug)]
pub struct PortfolioApp<S, R> {
    page: Page,
    theme: ThemeManager<SharedStore<S>, R>,
    selector: ThemeSelector,
    analytics: Analytics<SharedStore<S>>,
    navigation: Navigation,
    motion: Motion,
    intro: Option<IntroPlayer>,
    loaded: bool,
}

impl<S: KeyValueStore, R: RenderSurface> PortfolioApp<S, R> {
    /// Starts the page at `path`.
    pub fn start(ctx: SiteContext<S, R>, path: &str, now: DateTime<Utc>) -> Self {
        let store = SharedStore::new(ctx.store);

        let mut theme = ThemeManager::with_config(
            ctx.registry,
            ctx.theme_config,
            store.clone(),
            ctx.surface,
        );
        if let Some(detector) = ctx.detector {
            theme = theme.with_detector(detector);
        }
        theme.init();

        let motion = Motion::new(ctx.reduced_motion);
        if let Some(class) = motion.body_class() {
            theme.surface_mut().add_class(class);
        }

        let page = Page::from_path(path);
        let mut analytics = Analytics::new(store, page).with_client(ctx.client);

        theme.surface_mut().add_class(LOADED_CLASS);
        analytics.track_page_view(page, now);

        tracing::info!(%page, theme = theme.current_theme(), "portfolio initialized");

        Self {
            page,
            theme,
            selector: ThemeSelector::new(),
            analytics,
            navigation: Navigation::new(ctx.viewport_width).with_sections(ctx.sections),
            motion,
            intro: (page == Page::Intro).then(IntroPlayer::new),
            loaded: true,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn theme(&self) -> &ThemeManager<SharedStore<S>, R> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeManager<SharedStore<S>, R> {
        &mut self.theme
    }

    pub fn selector(&self) -> &ThemeSelector {
        &self.selector
    }

    pub fn toggle_theme_selector(&mut self) {
        self.selector.toggle();
    }

    /// Entries of the theme dropdown.
    pub fn theme_options(&self) -> Vec<ThemeOption> {
        self.selector.options(&self.theme)
    }

    /// Applies a theme picked in the dropdown.
    pub fn choose_theme(&mut self, name: &str) -> bool {
        self.selector.choose(&mut self.theme, name)
    }

    pub fn analytics(&self) -> &Analytics<SharedStore<S>> {
        &self.analytics
    }

    pub fn analytics_mut(&mut self) -> &mut Analytics<SharedStore<S>> {
        &mut self.analytics
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut Navigation {
        &mut self.navigation
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// The video player, on the intro page only.
    pub fn intro_mut(&mut self) -> Option<&mut IntroPlayer> {
        self.intro.as_mut()
    }

    /// Published projects for the projects grid.
    pub fn projects(&self) -> Vec<Project> {
        load_projects(self.analytics.store())
    }

    /// Markup of the projects grid.
    pub fn projects_html(&self) -> Result<String, RenderError> {
        ProjectTemplates::new()?.render_projects(&self.projects())
    }

    pub fn availability(&self) -> Availability {
        Availability::load(self.analytics.store())
    }

    pub fn submit_contact(
        &mut self,
        form: &ContactForm,
        now: DateTime<Utc>,
    ) -> Result<ContactMessage, ContactError> {
        form.submit(&mut self.analytics, now)
    }

    pub fn log_error(
        &mut self,
        kind: &str,
        message: &str,
        stack: Option<&str>,
        now: DateTime<Utc>,
    ) -> ErrorLog {
        self.analytics.log_error(kind, message, stack, now)
    }

    /// The store shared by theming and analytics.
    pub fn store(&self) -> &SharedStore<S> {
        self.analytics.store()
    }
}
