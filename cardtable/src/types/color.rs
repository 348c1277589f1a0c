use color::{AlphaColor, Srgb};

/// A resolved sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a colour string from a host config.
    ///
    /// Host configs write translucent colours as `#AARRGGBB` (alpha first),
    /// which CSS would read as `#RRGGBBAA`, so that form is decoded here.
    /// Everything else goes through the CSS colour parser.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                let a = channel(0)?;
                return Some(Self::rgba(channel(2)?, channel(4)?, channel(6)?, a as f32 / 255.0));
            }
        }

        let parsed = color::parse_color(s).ok()?;
        let srgb: AlphaColor<Srgb> = parsed.to_alpha_color();
        let [r, g, b, a] = srgb.components;
        Some(Self::rgba(
            to_channel(r),
            to_channel(g),
            to_channel(b),
            a.clamp(0.0, 1.0),
        ))
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// CSS form: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
