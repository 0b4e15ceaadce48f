//! The palette type and the built-in palettes.

use super::color::ColorValue;
use crate::error::{Result, ThemeError};

/// Color roles every built-in palette defines, in style-variable order.
pub const ROLES: &[&str] = &[
    "primary",
    "primaryDark",
    "secondary",
    "accent",
    "background",
    "surface",
    "surfaceLight",
];

/// Name of the palette used when nothing else applies.
pub const DEFAULT_PALETTE: &str = "default";

/// A named set of color roles.
///
/// Role keys are camelCase (`primaryDark`) and map to kebab-case style
/// variables (`--primary-dark`). Roles keep their insertion order so the
/// generated variables are stable.
///
/// ```rust
/// use folio_theme::Palette;
///
/// let palette = Palette::new("mint")
///     .color("primary", "#3EB489")
///     .color("primaryDark", "#2E8B67");
///
/// assert_eq!(palette.label(), "Mint");
/// assert_eq!(palette.primary(), Some("#3EB489"));
/// let vars: Vec<_> = palette.css_variables().collect();
/// assert_eq!(vars[1], ("--primary-dark".to_string(), "#2E8B67"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    label: String,
    colors: Vec<(String, String)>,
}

impl Palette {
    /// Creates an empty palette. The label defaults to the capitalized name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = capitalize(&name);
        Self {
            name,
            label,
            colors: Vec::new(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Adds a color role, replacing an existing value in place.
    pub fn color(mut self, role: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_color(role, value);
        self
    }

    /// Sets a color role, replacing an existing value in place.
    pub fn set_color(&mut self, role: impl Into<String>, value: impl Into<String>) {
        let role = role.into();
        let value = value.into();
        match self.colors.iter_mut().find(|(r, _)| *r == role) {
            Some(slot) => slot.1 = value,
            None => self.colors.push((role, value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the value of a color role.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, v)| v.as_str())
    }

    /// The `primary` color, used for swatches and the browser theme color.
    pub fn primary(&self) -> Option<&str> {
        self.get("primary")
    }

    /// Iterates `(role, value)` pairs in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(r, v)| (r.as_str(), v.as_str()))
    }

    /// Iterates `(--style-variable, value)` pairs in insertion order.
    pub fn css_variables(&self) -> impl Iterator<Item = (String, &str)> {
        self.colors
            .iter()
            .map(|(r, v)| (css_variable_name(r), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Checks the name and every color value.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ThemeError::definition("", "palette name is empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(ThemeError::definition(
                &self.name,
                "palette name contains whitespace",
            ));
        }
        if self.colors.is_empty() {
            return Err(ThemeError::definition(&self.name, "no colors defined"));
        }
        for (role, value) in &self.colors {
            if role.is_empty() {
                return Err(ThemeError::definition(&self.name, "empty color role"));
            }
            if ColorValue::parse(value).is_err() {
                return Err(ThemeError::InvalidColor {
                    palette: self.name.clone(),
                    role: role.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Converts a camelCase role to kebab-case: `surfaceLight` -> `surface-light`.
pub fn camel_to_kebab(role: &str) -> String {
    let mut out = String::with_capacity(role.len() + 4);
    for (i, c) in role.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a kebab-case name to camelCase: `primary-dark` -> `primaryDark`.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '-' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Style variable for a role: `primaryDark` -> `--primary-dark`.
pub fn css_variable_name(role: &str) -> String {
    format!("--{}", camel_to_kebab(role))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn builtin(name: &str, values: [&str; 7]) -> Palette {
    ROLES
        .iter()
        .zip(values)
        .fold(Palette::new(name), |palette, (role, value)| {
            palette.color(*role, value)
        })
}

/// The palettes shipped with the site, in selector order.
pub fn builtin_palettes() -> Vec<Palette> {
    vec![
        builtin(
            DEFAULT_PALETTE,
            [
                "#AFDF19", "#9BC516", "#74B9FF", "#FDCB6E", "#0B1426", "#1E2A3A", "#2C3E50",
            ],
        ),
        builtin(
            "ocean",
            [
                "#00D4AA", "#00B894", "#74B9FF", "#FDCB6E", "#0B1426", "#1E2A3A", "#2C3E50",
            ],
        ),
        builtin(
            "sunset",
            [
                "#FF6B6B", "#FF5252", "#4ECDC4", "#FFD166", "#1A1A2E", "#16213E", "#0F3460",
            ],
        ),
        builtin(
            "forest",
            [
                "#27AE60", "#229954", "#3498DB", "#F39C12", "#0E1A0E", "#1A2E1A", "#2E4A2E",
            ],
        ),
    ]
}
