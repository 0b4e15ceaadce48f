//! CSS palette definitions.
//!
//! Palettes can be written the way the site's stylesheet would declare them:
//! one rule per theme class, with a custom property per color role.
//!
//! ```css
//! .theme-ocean {
//!     --label: "Ocean";
//!     --primary: #00D4AA;
//!     --primary-dark: #00B894;
//! }
//!
//! .theme-mint, .theme-mint-soft {
//!     --primary: rgb(62, 180, 137);
//! }
//! ```
//!
//! ## Mapping
//!
//! - **Selectors**: `.theme-<name>` class selectors name the palette. The
//!   `theme-` prefix is the default; [`parse_palettes_css_with_prefix`]
//!   takes the site's configured class prefix instead. A selector list
//!   defines the same roles on every palette in it. Other
//!   selectors and at-rules are errors.
//! - **Properties**: `--<role>` custom properties, with the role converted
//!   from kebab-case to camelCase (`--surface-light` -> `surfaceLight`). The
//!   value is kept verbatim. `--label` sets the display label instead.
//!
//! Rules for the same palette merge, later declarations winning. Palettes
//! are returned in order of first appearance.
//!
//! The parser is built on `cssparser`, so comments, escapes and nested
//! blocks in values are handled the way a browser would.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

use super::palette::{kebab_to_camel, Palette};
use crate::config::DEFAULT_CLASS_PREFIX;
use crate::error::{Result, ThemeError};

/// Parses palettes from CSS `.theme-<name>` rules.
pub fn parse_palettes_css(css: &str) -> Result<Vec<Palette>> {
    parse_palettes_css_with_prefix(css, DEFAULT_CLASS_PREFIX)
}

/// Parses palettes from CSS rules whose class names start with `prefix`.
pub fn parse_palettes_css_with_prefix(css: &str, prefix: &str) -> Result<Vec<Palette>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut css_parser = PaletteSheetParser {
        prefix,
        palettes: Vec::new(),
    };

    let rule_list_parser = cssparser::StyleSheetParser::new(&mut parser, &mut css_parser);
    for result in rule_list_parser {
        if let Err((err, _slice)) = result {
            return Err(css_error(err));
        }
    }

    let palettes = css_parser.palettes;
    for palette in &palettes {
        palette.validate()?;
    }
    Ok(palettes)
}

fn css_error(err: ParseError<'_, String>) -> ThemeError {
    let message = match err.kind {
        ParseErrorKind::Custom(message) => message,
        ParseErrorKind::Basic(kind) => format!("{:?}", kind),
    };
    ThemeError::Css {
        message,
        line: err.location.line + 1,
        column: err.location.column,
    }
}

struct PaletteSheetParser<'a> {
    prefix: &'a str,
    palettes: Vec<Palette>,
}

impl PaletteSheetParser<'_> {
    fn palette_mut(&mut self, name: &str) -> &mut Palette {
        let index = match self.palettes.iter().position(|p| p.name() == name) {
            Some(index) => index,
            None => {
                self.palettes.push(Palette::new(name));
                self.palettes.len() - 1
            }
        };
        &mut self.palettes[index]
    }
}

impl<'i> QualifiedRuleParser<'i> for PaletteSheetParser<'_> {
    type Prelude = Vec<String>;
    type QualifiedRule = ();
    type Error = String;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut names = Vec::new();

        while let Ok(token) = input.next() {
            match token.clone() {
                Token::Delim('.') => {
                    let class = input.expect_ident()?.as_ref().to_string();
                    match class.strip_prefix(self.prefix) {
                        Some(name) if !name.is_empty() => names.push(name.to_string()),
                        _ => {
                            return Err(input.new_custom_error(format!(
                                "selector '.{}' is not a {}<name> class",
                                class, self.prefix
                            )))
                        }
                    }
                }
                Token::Comma | Token::WhiteSpace(_) => continue,
                other => {
                    return Err(
                        input.new_custom_error(format!("unsupported selector token {:?}", other))
                    )
                }
            }
        }

        if names.is_empty() {
            return Err(input.new_custom_error("rule has no theme class".to_string()));
        }
        Ok(names)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = PaletteDeclarationParser;
        let mut entries = Vec::new();
        for result in RuleBodyParser::new(input, &mut decl_parser) {
            match result {
                Ok(entry) => entries.push(entry),
                Err((err, _slice)) => return Err(err),
            }
        }

        for name in prelude {
            let palette = self.palette_mut(&name);
            for entry in &entries {
                match entry {
                    Entry::Label(label) => palette.set_label(label.clone()),
                    Entry::Color(role, value) => palette.set_color(role.clone(), value.clone()),
                }
            }
        }
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for PaletteSheetParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = String;

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(format!("unsupported at-rule '@{}'", name)))
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Label(String),
    Color(String, String),
}

struct PaletteDeclarationParser;

impl<'i> DeclarationParser<'i> for PaletteDeclarationParser {
    type Declaration = Entry;
    type Error = String;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        if name.as_ref() == "--label" {
            let label = input.expect_ident_or_string()?.as_ref().to_string();
            return Ok(Entry::Label(label));
        }

        let Some(role) = name.as_ref().strip_prefix("--") else {
            return Err(input.new_custom_error(format!(
                "unsupported property '{}', palettes only declare --role variables",
                name
            )));
        };
        let role = kebab_to_camel(role);

        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let value = input.slice_from(start).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(format!("empty value for '{}'", name)));
        }

        Ok(Entry::Color(role, value.to_string()))
    }
}

impl<'i> AtRuleParser<'i> for PaletteDeclarationParser {
    type Prelude = ();
    type AtRule = Entry;
    type Error = String;
}

impl<'i> QualifiedRuleParser<'i> for PaletteDeclarationParser {
    type Prelude = ();
    type QualifiedRule = Entry;
    type Error = String;
}

impl<'i> RuleBodyItemParser<'i, Entry, String> for PaletteDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let css = ".theme-ocean { --primary: #00D4AA; --primary-dark: #00B894; }";
        let palettes = parse_palettes_css(css).unwrap();
        assert_eq!(palettes.len(), 1);

        let ocean = &palettes[0];
        assert_eq!(ocean.name(), "ocean");
        assert_eq!(ocean.label(), "Ocean");
        assert_eq!(ocean.primary(), Some("#00D4AA"));
        assert_eq!(ocean.get("primaryDark"), Some("#00B894"));
    }

    #[test]
    fn test_parse_label() {
        let css = r#".theme-ocean { --label: "Deep Ocean"; --primary: #00D4AA; }"#;
        let palettes = parse_palettes_css(css).unwrap();
        assert_eq!(palettes[0].label(), "Deep Ocean");
        assert_eq!(palettes[0].len(), 1);
    }

    #[test]
    fn test_functional_values_are_kept_verbatim() {
        let css = ".theme-mint { --surface-light: rgba(62, 180, 137, 0.5); }";
        let palettes = parse_palettes_css(css).unwrap();
        assert_eq!(
            palettes[0].get("surfaceLight"),
            Some("rgba(62, 180, 137, 0.5)")
        );
    }

    #[test]
    fn test_multiple_selectors() {
        let css = ".theme-a, .theme-b { --primary: red; }";
        let palettes = parse_palettes_css(css).unwrap();
        let names: Vec<_> = palettes.iter().map(Palette::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(palettes[1].primary(), Some("red"));
    }

    #[test]
    fn test_rules_for_same_palette_merge() {
        let css = "
            /* base */
            .theme-ocean { --primary: #000; --accent: #111; }
            .theme-ocean { --primary: #00D4AA; }
        ";
        let palettes = parse_palettes_css(css).unwrap();
        assert_eq!(palettes.len(), 1);
        let colors: Vec<_> = palettes[0].colors().collect();
        assert_eq!(colors, vec![("primary", "#00D4AA"), ("accent", "#111")]);
    }

    #[test]
    fn test_rejects_non_theme_selector() {
        let result = parse_palettes_css(".header { --primary: #fff; }");
        match result {
            Err(ThemeError::Css { message, line, .. }) => {
                assert!(message.contains("header"));
                assert_eq!(line, 1);
            }
            other => panic!("expected Css error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_at_rules() {
        let css = "@media (prefers-color-scheme: dark) { .theme-a { --primary: #fff; } }";
        assert!(matches!(
            parse_palettes_css(css),
            Err(ThemeError::Css { .. })
        ));
    }

    #[test]
    fn test_rejects_regular_properties() {
        let css = ".theme-a { color: red; }";
        match parse_palettes_css(css) {
            Err(ThemeError::Css { message, .. }) => assert!(message.contains("color")),
            other => panic!("expected Css error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_color() {
        let css = ".theme-a { --primary: 12px; }";
        assert!(matches!(
            parse_palettes_css(css),
            Err(ThemeError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_empty_stylesheet() {
        assert!(parse_palettes_css("").unwrap().is_empty());
        assert!(parse_palettes_css("/* nothing */").unwrap().is_empty());
    }

    #[test]
    fn test_custom_class_prefix() {
        let css = ".skin-dusk { --primary: #4B3F72; }";
        let palettes = parse_palettes_css_with_prefix(css, "skin-").unwrap();
        assert_eq!(palettes[0].name(), "dusk");

        let err = parse_palettes_css(css).unwrap_err();
        assert!(err.to_string().contains("theme-<name>"));

        let err = parse_palettes_css_with_prefix(".theme-dusk { --primary: #000; }", "skin-")
            .unwrap_err();
        assert!(err.to_string().contains("skin-<name>"));
    }
}
