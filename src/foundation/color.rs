use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{DinkyError, DinkyResult};

/// Linear RGBA color with `f32` channels in nominal `0..=1` range.
///
/// Arithmetic operators act on `r`, `g`, `b` only and keep the left operand's alpha; callers
/// that need all four channels scaled use [`crate::Bitmap::shade`]. Values are never clamped
/// by arithmetic, only on export.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent white (the rotate canvas background).
    pub const TRANSPARENT: Color = Color::rgba(1.0, 1.0, 1.0, 0.0);
    /// Opaque red.
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);
    /// Opaque purple (magenta).
    pub const PURPLE: Color = Color::rgba(1.0, 0.0, 1.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Color = Color::rgba(0.0, 1.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::rgba(1.0, 1.0, 0.0, 1.0);

    /// Build a color from four channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Gray level `c` with explicit alpha.
    pub const fn gray(c: f32, a: f32) -> Self {
        Self { r: c, g: c, b: c, a }
    }

    /// All four channels set to `c`.
    pub const fn splat(c: f32) -> Self {
        Self {
            r: c,
            g: c,
            b: c,
            a: c,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> DinkyResult<Self> {
        parse_hex(s).map_err(|msg| DinkyError::Other(anyhow::anyhow!(msg)))
    }

    /// Hex string for the clamped color; alpha is only emitted when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Each channel as `round(clamp(c) * 255)`.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f32) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Build from 8-bit channels.
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self::rgba(
            f32::from(px[0]) / 255.0,
            f32::from(px[1]) / 255.0,
            f32::from(px[2]) / 255.0,
            f32::from(px[3]) / 255.0,
        )
    }

    /// `(h, s, l)` with every component in `0..=1`.
    pub fn to_hsl(self) -> [f32; 3] {
        let r = self.r.clamp(0.0, 1.0);
        let g = self.g.clamp(0.0, 1.0);
        let b = self.b.clamp(0.0, 1.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return [0.0, 0.0, l];
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        [h / 6.0, s, l]
    }

    /// Opaque color from `(h, s, l)` in `0..=1`.
    pub fn from_hsl(hsl: [f32; 3]) -> Self {
        let [h, s, l] = hsl;
        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        Self::rgb(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    /// Scale HSL lightness by `factor`; the result is opaque.
    pub fn shade(self, factor: f32) -> Self {
        let [h, s, l] = self.to_hsl();
        Self::from_hsl([h, s, (l * factor).clamp(0.0, 1.0)])
    }

    /// `1 - c` on r, g, b; alpha is kept.
    pub fn invert(self) -> Self {
        Self::rgba(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Every channel strictly below `other`'s.
    pub fn all_lt(self, other: Color) -> bool {
        self.r < other.r && self.g < other.g && self.b < other.b && self.a < other.a
    }

    /// Every channel below or equal to `other`'s.
    pub fn all_le(self, other: Color) -> bool {
        self.r <= other.r && self.g <= other.g && self.b <= other.b && self.a <= other.a
    }

    /// Every channel strictly above `other`'s.
    pub fn all_gt(self, other: Color) -> bool {
        other.all_lt(self)
    }

    /// Every channel above or equal to `other`'s.
    pub fn all_ge(self, other: Color) -> bool {
        other.all_le(self)
    }

    fn map_rgb(self, f: impl Fn(f32) -> f32) -> Self {
        Self::rgba(f(self.r), f(self.g), f(self.b), self.a)
    }

    fn zip_rgb(self, other: Color, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::rgba(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            self.a,
        )
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        self.zip_rgb(rhs, |a, b| a + b)
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        self.zip_rgb(rhs, |a, b| a - b)
    }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        self.zip_rgb(rhs, |a, b| a * b)
    }
}

impl Div for Color {
    type Output = Color;
    fn div(self, rhs: Color) -> Color {
        self.zip_rgb(rhs, |a, b| a / b)
    }
}

impl Add<f32> for Color {
    type Output = Color;
    fn add(self, rhs: f32) -> Color {
        self.map_rgb(|c| c + rhs)
    }
}

impl Sub<f32> for Color {
    type Output = Color;
    fn sub(self, rhs: f32) -> Color {
        self.map_rgb(|c| c - rhs)
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, rhs: f32) -> Color {
        self.map_rgb(|c| c * rhs)
    }
}

impl Div<f32> for Color {
    type Output = Color;
    fn div(self, rhs: f32) -> Color {
        self.map_rgb(|c| c / rhs)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f32,
                g: f32,
                b: f32,
                #[serde(default = "one")]
                a: f32,
            },
            Arr(Vec<f32>),
        }

        fn one() -> f32 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    let a = match s.len() {
        6 => 255,
        8 => hex_byte(&s[6..8])?,
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };
    Ok(Color::from_rgba8([
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
        a,
    ]))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
