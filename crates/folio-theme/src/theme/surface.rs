//! Render surface abstraction.
//!
//! The theme manager only ever writes to the rendered document: style
//! variables on the root element, the root marker class, and the browser
//! `theme-color` meta value. It never reads them back, so a surface is a
//! write-only sink and a browser embedding implements it over the DOM.

use std::fmt::Write as _;

/// Write-only view of the rendered document.
pub trait RenderSurface {
    /// Sets a document-level style variable such as `--primary`.
    fn set_style_variable(&mut self, name: &str, value: &str);

    /// Removes every root class starting with `prefix`.
    fn remove_classes_with_prefix(&mut self, prefix: &str);

    /// Adds a class to the root element.
    fn add_class(&mut self, class: &str);

    /// Sets the `theme-color` meta value. Surfaces without one ignore it.
    fn set_meta_theme_color(&mut self, _color: &str) {}
}

impl<R: RenderSurface + ?Sized> RenderSurface for &mut R {
    fn set_style_variable(&mut self, name: &str, value: &str) {
        (**self).set_style_variable(name, value)
    }

    fn remove_classes_with_prefix(&mut self, prefix: &str) {
        (**self).remove_classes_with_prefix(prefix)
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn set_meta_theme_color(&mut self, color: &str) {
        (**self).set_meta_theme_color(color)
    }
}

impl<R: RenderSurface + ?Sized> RenderSurface for Box<R> {
    fn set_style_variable(&mut self, name: &str, value: &str) {
        (**self).set_style_variable(name, value)
    }

    fn remove_classes_with_prefix(&mut self, prefix: &str) {
        (**self).remove_classes_with_prefix(prefix)
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn set_meta_theme_color(&mut self, color: &str) {
        (**self).set_meta_theme_color(color)
    }
}

/// In-memory document state.
///
/// Records what a browser document would hold after theme application, and
/// can render the variables as a `:root` block for static pages.
///
/// ```rust
/// use folio_theme::{DocumentSurface, RenderSurface};
///
/// let mut doc = DocumentSurface::new().with_class("page-home");
/// doc.set_style_variable("--primary", "#00D4AA");
/// doc.add_class("theme-ocean");
///
/// assert_eq!(doc.variable("--primary"), Some("#00D4AA"));
/// assert!(doc.has_class("theme-ocean"));
/// assert_eq!(doc.to_css(), ":root {\n  --primary: #00D4AA;\n}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSurface {
    variables: Vec<(String, String)>,
    classes: Vec<String>,
    meta_theme_color: Option<String>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing root class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.add_class(&class);
        self
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Style variables in the order they were first set.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn meta_theme_color(&self) -> Option<&str> {
        self.meta_theme_color.as_deref()
    }

    /// Renders the style variables as a `:root` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.variables {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

impl RenderSurface for DocumentSurface {
    fn set_style_variable(&mut self, name: &str, value: &str) {
        match self.variables.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.variables.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_classes_with_prefix(&mut self, prefix: &str) {
        self.classes.retain(|c| !c.starts_with(prefix));
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn set_meta_theme_color(&mut self, color: &str) {
        self.meta_theme_color = Some(color.to_string());
    }
}
