//! YAML palette definitions.
//!
//! A palette file either lists several palettes by name:
//!
//! ```yaml
//! ocean:
//!   label: Ocean
//!   colors:
//!     primary: "#00D4AA"
//!     primaryDark: "#00B894"
//! mint:
//!   colors:
//!     primary: "#3EB489"
//! ```
//!
//! or defines a single palette at the top level, named after its file:
//!
//! ```yaml
//! label: Mint
//! colors:
//!   primary: "#3EB489"
//! ```
//!
//! Color values must be strings (quote hex values, `#` starts a YAML
//! comment). Role order is preserved.

use serde_yaml::{Mapping, Value};

use super::palette::Palette;
use crate::error::{Result, ThemeError};

/// Parses a multi-palette YAML document.
///
/// An empty document yields no palettes.
pub fn parse_palettes_yaml(yaml: &str) -> Result<Vec<Palette>> {
    let Some(root) = parse_root(yaml)? else {
        return Ok(Vec::new());
    };

    let mut palettes = Vec::with_capacity(root.len());
    for (key, value) in &root {
        let name = key.as_str().ok_or_else(|| ThemeError::Yaml {
            message: format!("Palette name must be a string, got {:?}", key),
        })?;
        palettes.push(parse_definition(name, value)?);
    }
    Ok(palettes)
}

/// Parses a single-palette YAML document, naming the palette `name`.
pub fn parse_palette_yaml(name: &str, yaml: &str) -> Result<Palette> {
    let root = parse_root(yaml)?
        .ok_or_else(|| ThemeError::definition(name, "palette file is empty"))?;
    parse_definition(name, &Value::Mapping(root))
}

/// Returns true if the document is a single palette rather than a list of them.
pub fn is_single_palette(yaml: &str) -> Result<bool> {
    Ok(parse_root(yaml)?.is_some_and(|root| root.contains_key("colors")))
}

fn parse_root(yaml: &str) -> Result<Option<Mapping>> {
    let root: Value = serde_yaml::from_str(yaml)?;
    match root {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => Ok(Some(mapping)),
        _ => Err(ThemeError::Yaml {
            message: "Palette file must be a YAML mapping".to_string(),
        }),
    }
}

fn parse_definition(name: &str, value: &Value) -> Result<Palette> {
    let mapping = value
        .as_mapping()
        .ok_or_else(|| ThemeError::definition(name, "expected a mapping with 'colors'"))?;

    let mut palette = Palette::new(name);
    let mut saw_colors = false;

    for (key, value) in mapping {
        match key.as_str() {
            Some("label") => {
                let label = value
                    .as_str()
                    .ok_or_else(|| ThemeError::definition(name, "'label' must be a string"))?;
                palette.set_label(label);
            }
            Some("colors") => {
                let colors = value
                    .as_mapping()
                    .ok_or_else(|| ThemeError::definition(name, "'colors' must be a mapping"))?;
                for (role, color) in colors {
                    let role = role.as_str().ok_or_else(|| {
                        ThemeError::definition(
                            name,
                            format!("color role must be a string, got {:?}", role),
                        )
                    })?;
                    let color = color.as_str().ok_or_else(|| ThemeError::InvalidColor {
                        palette: name.to_string(),
                        role: role.to_string(),
                        value: describe(color),
                    })?;
                    palette.set_color(role, color);
                }
                saw_colors = true;
            }
            Some(other) => {
                return Err(ThemeError::definition(
                    name,
                    format!("unknown key '{}'", other),
                ))
            }
            None => {
                return Err(ThemeError::definition(
                    name,
                    format!("keys must be strings, got {:?}", key),
                ))
            }
        }
    }

    if !saw_colors {
        return Err(ThemeError::definition(name, "missing 'colors'"));
    }

    palette.validate()?;
    Ok(palette)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_palettes() {
        let yaml = r##"
ocean:
  label: Deep Ocean
  colors:
    primary: "#00D4AA"
    primaryDark: "#00B894"
mint:
  colors:
    primary: "#3EB489"
"##;
        let palettes = parse_palettes_yaml(yaml).unwrap();
        assert_eq!(palettes.len(), 2);

        assert_eq!(palettes[0].name(), "ocean");
        assert_eq!(palettes[0].label(), "Deep Ocean");
        assert_eq!(palettes[0].get("primaryDark"), Some("#00B894"));

        assert_eq!(palettes[1].name(), "mint");
        assert_eq!(palettes[1].label(), "Mint");
    }

    #[test]
    fn test_parse_preserves_role_order() {
        let yaml = r##"
p:
  colors:
    surface: "#111"
    primary: "#222"
    accent: "#333"
"##;
        let palettes = parse_palettes_yaml(yaml).unwrap();
        let roles: Vec<_> = palettes[0].colors().map(|(r, _)| r).collect();
        assert_eq!(roles, vec!["surface", "primary", "accent"]);
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_palettes_yaml("").unwrap().is_empty());
        assert!(parse_palette_yaml("mint", "").is_err());
    }

    #[test]
    fn test_parse_single_palette() {
        let yaml = "label: Mint\ncolors:\n  primary: \"#3EB489\"\n";
        assert!(is_single_palette(yaml).unwrap());

        let palette = parse_palette_yaml("mint", yaml).unwrap();
        assert_eq!(palette.name(), "mint");
        assert_eq!(palette.primary(), Some("#3EB489"));
    }

    #[test]
    fn test_parse_non_mapping_root() {
        let result = parse_palettes_yaml("- a\n- b");
        assert!(matches!(result, Err(ThemeError::Yaml { .. })));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_palettes_yaml("ocean: [unclosed");
        assert!(matches!(result, Err(ThemeError::Yaml { .. })));
    }

    #[test]
    fn test_unquoted_hex_is_a_comment() {
        // `#00D4AA` unquoted is a YAML comment, leaving the role null.
        let yaml = "ocean:\n  colors:\n    primary: #00D4AA\n";
        match parse_palettes_yaml(yaml) {
            Err(ThemeError::InvalidColor { role, value, .. }) => {
                assert_eq!(role, "primary");
                assert_eq!(value, "null");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_color_value() {
        let yaml = "ocean:\n  colors:\n    primary: \"not a color\"\n";
        assert!(matches!(
            parse_palettes_yaml(yaml),
            Err(ThemeError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_unknown_key() {
        let yaml = "ocean:\n  colours:\n    primary: \"#fff\"\n";
        match parse_palettes_yaml(yaml) {
            Err(ThemeError::InvalidDefinition { palette, message }) => {
                assert_eq!(palette, "ocean");
                assert!(message.contains("colours"));
            }
            other => panic!("expected InvalidDefinition, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_colors() {
        let yaml = "ocean:\n  label: Ocean\n";
        assert!(matches!(
            parse_palettes_yaml(yaml),
            Err(ThemeError::InvalidDefinition { .. })
        ));
    }
}
