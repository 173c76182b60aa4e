//! CSS color parsing for background and overlay resolution

use std::fmt;

/// 8-bit RGB with a fractional alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)` and `rgba(..)`
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        parse_functional(args)
    }

    /// Multiplies alpha by `opacity`, clamped to `0..=1`
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: (self.a * opacity.clamp(0.0, 1.0)).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_number(self.a)
        )
    }
}

/// Shortest decimal form, rounded to three places (`1`, `0.5`, `0.333`)
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let short = |c: &str| channel(&c.repeat(2));

    match hex.len() {
        3 => Some(Rgba::new(
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
            1.0,
        )),
        6 => Some(Rgba::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            1.0,
        )),
        8 => Some(Rgba::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            f64::from(channel(&hex[6..8])?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<u8>().ok();

    match parts.as_slice() {
        [r, g, b] => Some(Rgba::new(channel(r)?, channel(g)?, channel(b)?, 1.0)),
        [r, g, b, a] => {
            let alpha = a.parse::<f64>().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Rgba::new(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Rgba::parse("#3B82F6"), Some(Rgba::new(59, 130, 246, 1.0)));
        assert_eq!(Rgba::parse("#fff"), Some(Rgba::new(255, 255, 255, 1.0)));
        assert_eq!(Rgba::parse("#00000080").map(|c| c.to_css()), Some("rgba(0, 0, 0, 0.502)".to_string()));
        assert_eq!(Rgba::parse("#12345"), None);
        assert_eq!(Rgba::parse("#ggg"), None);
    }

    #[test]
    fn test_functional_forms() {
        assert_eq!(Rgba::parse("rgb(1, 2, 3)"), Some(Rgba::new(1, 2, 3, 1.0)));
        assert_eq!(Rgba::parse("RGBA(59,130,246,0.5)"), Some(Rgba::new(59, 130, 246, 0.5)));
        assert_eq!(Rgba::parse("rgba(300, 0, 0, 1)"), None);
        assert_eq!(Rgba::parse("hsl(10, 20%, 30%)"), None);
        assert_eq!(Rgba::parse("tomato"), None);
    }

    #[test]
    fn test_opacity_and_formatting() {
        let color = Rgba::new(59, 130, 246, 1.0).with_opacity(0.5);
        assert_eq!(color.to_css(), "rgba(59, 130, 246, 0.5)");
        assert_eq!(Rgba::new(0, 0, 0, 1.0).with_opacity(4.0).to_css(), "rgba(0, 0, 0, 1)");
        assert_eq!(format_number(1.0 / 3.0), "0.333");
    }
}
