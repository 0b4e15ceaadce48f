//! Palettes and where they come from.
//!
//! A [`Palette`] maps semantic color roles (`primary`, `surfaceLight`, ...)
//! to CSS color values. The [`PaletteRegistry`] holds the palettes a site
//! offers, starting from the built-ins and optionally extended from YAML or
//! CSS definitions.

mod color;
mod css;
#[allow(clippy::module_inception)]
mod palette;
mod registry;
mod yaml;

pub use color::ColorValue;
pub use css::{parse_palettes_css, parse_palettes_css_with_prefix};
pub use palette::{
    builtin_palettes, camel_to_kebab, css_variable_name, kebab_to_camel, Palette,
    DEFAULT_PALETTE, ROLES,
};
pub use registry::{PaletteRegistry, PALETTE_EXTENSIONS};
pub use yaml::{is_single_palette, parse_palette_yaml, parse_palettes_yaml};
