//! Color value parsing for palette definitions.
//!
//! Palette colors are CSS color values, written to the document verbatim.
//! Parsing only checks that a value is something a browser will accept as
//! a color, so a typo in a palette file is caught at load time rather than
//! silently producing an unstyled page.
//!
//! Supported formats:
//!
//! - RGB hex: `"#AFDF19"`, `"#fff"`, plus the alpha forms `"#fff8"` and `"#AFDF1980"`
//! - Functional: `rgb(…)`, `rgba(…)`, `hsl(…)`, `hsla(…)`
//! - Keywords: `transparent`, `rebeccapurple`, `currentColor`, …
//!
//! # Example
//!
//! ```rust
//! use folio_theme::ColorValue;
//!
//! let hex = ColorValue::parse("#00D4AA").unwrap();
//! assert_eq!(hex, ColorValue::Hex { r: 0x00, g: 0xD4, b: 0xAA, a: None });
//!
//! assert!(ColorValue::parse("rgb(0, 212, 170)").is_ok());
//! assert!(ColorValue::parse("#00D4A").is_err());
//! ```

use std::fmt;

/// A parsed CSS color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// Hex color, expanded to 8-bit channels.
    Hex { r: u8, g: u8, b: u8, a: Option<u8> },
    /// Functional notation, e.g. `rgb(0, 212, 170)`.
    Function { name: String, args: String },
    /// Named color keyword.
    Keyword(String),
}

const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla"];

impl ColorValue {
    /// Parses a CSS color value.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty color value".to_string());
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(open) = s.find('(') {
            return Self::parse_function(s, open);
        }

        if s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(ColorValue::Keyword(s.to_string()));
        }

        Err(format!("Unrecognized color value: {}", s))
    }

    /// Returns true if `s` parses as a color.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex: #{}", hex));
        }

        // Short forms repeat each digit: #abc -> #aabbcc
        let short = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| format!("Invalid hex: #{}", hex))
        };
        let long = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("Invalid hex: #{}", hex))
        };

        match hex.len() {
            3 => Ok(ColorValue::Hex {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: None,
            }),
            4 => Ok(ColorValue::Hex {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: Some(short(3)?),
            }),
            6 => Ok(ColorValue::Hex {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: None,
            }),
            8 => Ok(ColorValue::Hex {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: Some(long(6)?),
            }),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3, 4, 6 or 8 digits)",
                hex
            )),
        }
    }

    fn parse_function(s: &str, open: usize) -> Result<Self, String> {
        let name = s[..open].trim().to_ascii_lowercase();
        if !COLOR_FUNCTIONS.contains(&name.as_str()) {
            return Err(format!("Unsupported color function: {}()", name));
        }

        let args = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| format!("Unclosed color function: {}", s))?
            .trim();
        if args.is_empty() || args.contains(['(', ')']) {
            return Err(format!("Invalid arguments for {}(): {}", name, args));
        }

        Ok(ColorValue::Function {
            name,
            args: args.to_string(),
        })
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex { r, g, b, a: None } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            ColorValue::Hex {
                r,
                g,
                b,
                a: Some(a),
            } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a),
            ColorValue::Function { name, args } => write!(f, "{}({})", name, args),
            ColorValue::Keyword(k) => write!(f, "{}", k),
        }
    }
}
