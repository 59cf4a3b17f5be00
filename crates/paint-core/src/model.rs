//! Value types for a paint operation.
//!
//! A paint is fully described by the surface's target `Dimensions`, the
//! fill `Color`, and the `FillRect` derived from the dimensions. None of
//! these outlive the call that uses them.

use crate::error::ColorParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Dimensions ──────────────────────────────────────────────────────────

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const DEFAULT: Dimensions = Dimensions::new(400, 400);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rectangle spanning the whole surface, anchored at the origin.
    pub fn full_rect(&self) -> FillRect {
        FillRect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ─── Fill rectangle ──────────────────────────────────────────────────────

/// Rectangle argument of a fill command, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FillRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Flip negative extents so that width and height are non-negative,
    /// keeping the covered area the same.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// CSS basic color keywords, plus `orange` and `transparent`.
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0x00, 0x00, 0x00, 0xFF]),
    ("silver", [0xC0, 0xC0, 0xC0, 0xFF]),
    ("gray", [0x80, 0x80, 0x80, 0xFF]),
    ("grey", [0x80, 0x80, 0x80, 0xFF]),
    ("white", [0xFF, 0xFF, 0xFF, 0xFF]),
    ("maroon", [0x80, 0x00, 0x00, 0xFF]),
    ("red", [0xFF, 0x00, 0x00, 0xFF]),
    ("purple", [0x80, 0x00, 0x80, 0xFF]),
    ("fuchsia", [0xFF, 0x00, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF, 0xFF]),
    ("green", [0x00, 0x80, 0x00, 0xFF]),
    ("lime", [0x00, 0xFF, 0x00, 0xFF]),
    ("olive", [0x80, 0x80, 0x00, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00, 0xFF]),
    ("navy", [0x00, 0x00, 0x80, 0xFF]),
    ("blue", [0x00, 0x00, 0xFF, 0xFF]),
    ("teal", [0x00, 0x80, 0x80, 0xFF]),
    ("aqua", [0x00, 0xFF, 0xFF, 0xFF]),
    ("cyan", [0x00, 0xFF, 0xFF, 0xFF]),
    ("orange", [0xFF, 0xA5, 0x00, 0xFF]),
    ("transparent", [0x00, 0x00, 0x00, 0x00]),
];

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Look up a CSS color keyword, ignoring ASCII case.
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, rgba)| Self::from_rgba8(*rgba))
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits: Vec<u8> = hex
            .bytes()
            .map(hex_val)
            .collect::<Option<Vec<u8>>>()?;

        let channels: [u8; 4] = match digits.as_slice() {
            [r, g, b] => [r * 17, g * 17, b * 17, 255],
            [r, g, b, a] => [r * 17, g * 17, b * 17, a * 17],
            [r1, r0, g1, g0, b1, b0] => [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255],
            [r1, r0, g1, g0, b1, b0, a1, a0] => {
                [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, a1 << 4 | a0]
            }
            _ => return None,
        };
        Some(Self::from_rgba8(channels))
    }

    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)` with 0–255 channels and
    /// a 0–1 alpha.
    fn from_functional(text: &str) -> Option<Self> {
        let (args, with_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return None;
        };
        let args = args.strip_suffix(')')?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();

        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return None;
        }

        let mut rgb = [0.0f32; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            let v: f32 = part.parse().ok()?;
            if !(0.0..=255.0).contains(&v) {
                return None;
            }
            *slot = v / 255.0;
        }
        let a = match parts.get(3) {
            Some(part) => {
                let v: f32 = part.parse().ok()?;
                if !(0.0..=1.0).contains(&v) {
                    return None;
                }
                v
            }
            None => 1.0,
        };
        Some(Self::rgba(rgb[0], rgb[1], rgb[2], a))
    }

    /// Parse any accepted color syntax: a keyword, a hex color, or an
    /// `rgb()`/`rgba()` function.
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let trimmed = text.trim();
        let lowered = trimmed.to_ascii_lowercase();

        let parsed = if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else if lowered.starts_with("rgb") {
            Self::from_functional(&lowered)
        } else {
            Self::named(trimmed)
        };

        parsed.ok_or_else(|| ColorParseError {
            input: text.to_string(),
        })
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn is_opaque(&self) -> bool {
        self.to_rgba8()[3] == 255
    }

    /// Emit as shortest valid hex string.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// String form accepted by a canvas `fillStyle`.
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            self.to_hex()
        } else {
            let alpha = (a as f32 / 255.0 * 1000.0).round() / 1000.0;
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}
