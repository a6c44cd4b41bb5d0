//! HSL colors.

use std::fmt;

/// A color stored as hue, saturation, lightness and alpha.
///
/// Hue is in degrees (`0..360`), saturation and lightness are percentages
/// (`0..=100`), alpha is in `0.0..=1.0`. Out-of-range inputs are clamped
/// (hue wraps around).
///
/// The [`Display`](fmt::Display) form is the default CSS text: the keywords
/// `transparent`, `black` and `white` where they apply, `hsl(..)`/`hsla(..)`
/// otherwise. Formatters can swap in [`Color::to_rgb`] through their color
/// hook.
///
/// # Example
///
/// ```rust
/// use stylist::Color;
///
/// assert_eq!(Color::rgb(255, 0, 0).to_hsl(), "hsl(0,100%,50%)");
/// assert_eq!(Color::hsl(0, 100, 50).to_rgb(), "rgb(255,0,0)");
/// assert_eq!(Color::BLACK.to_string(), "black");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    hue: u16,
    saturation: u8,
    lightness: u8,
    alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color::const_hsla(0, 0, 100, 1.0);
    pub const WHITY: Color = Color::const_hsla(0, 0, 97, 1.0);
    pub const WHITE_GRAY: Color = Color::const_hsla(0, 0, 93, 1.0);
    pub const BLACK: Color = Color::const_hsla(0, 0, 0, 1.0);
    pub const TRANSPARENT: Color = Color::const_hsla(0, 0, 0, 0.0);

    const fn const_hsla(hue: u16, saturation: u8, lightness: u8, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Creates an opaque color from HSL components.
    pub fn hsl(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    /// Creates a color from HSL components and alpha.
    pub fn hsla(hue: i32, saturation: i32, lightness: i32, alpha: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360) as u16,
            saturation: saturation.clamp(0, 100) as u8,
            lightness: lightness.clamp(0, 100) as u8,
            alpha: (alpha as f32).clamp(0.0, 1.0),
        }
    }

    /// Creates an opaque color from RGB components (clamped to `0..=255`).
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Creates a color from RGB components and alpha.
    pub fn rgba(red: i32, green: i32, blue: i32, alpha: f64) -> Self {
        let red = red.clamp(0, 255) as f32 / 255.0;
        let green = green.clamp(0, 255) as f32 / 255.0;
        let blue = blue.clamp(0, 255) as f32 / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let diff = max - min;
        let sum = max + min;
        let lightness = sum / 2.0;

        let mut hue = 0.0;
        let mut saturation = 0.0;

        if diff != 0.0 {
            hue = if max == red {
                60.0 * (green - blue) / diff
            } else if max == green {
                60.0 * (blue - red) / diff + 120.0
            } else {
                60.0 * (red - green) / diff + 240.0
            };
            saturation = if lightness < 0.5 {
                diff / sum
            } else {
                diff / (2.0 - sum)
            };
        }
        if hue < 0.0 {
            hue += 360.0;
        }

        Self::hsla(
            hue.round() as i32,
            (saturation * 100.0).round() as i32,
            (lightness * 100.0).round() as i32,
            alpha,
        )
    }

    /// Parses a hex color code (`#rgb` or `#rrggbb`, `#` optional).
    ///
    /// Malformed codes yield [`Color::TRANSPARENT`].
    pub fn hex(code: &str) -> Self {
        let code = code.strip_prefix('#').unwrap_or(code);
        let channel = |s: &str| i32::from_str_radix(s, 16).ok();

        let parsed = match code.len() {
            3 => {
                let doubled: Vec<String> = code.chars().map(|c| format!("{c}{c}")).collect();
                match doubled.as_slice() {
                    [r, g, b] => channel(r).zip(channel(g)).zip(channel(b)),
                    _ => None,
                }
            }
            6 if code.is_ascii() => channel(&code[0..2])
                .zip(channel(&code[2..4]))
                .zip(channel(&code[4..6])),
            _ => None,
        };

        match parsed {
            Some(((r, g), b)) => Self::rgb(r, g, b),
            None => Self::TRANSPARENT,
        }
    }

    /// Hue in degrees, `0..360`.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Saturation in percent.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Lightness in percent.
    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Alpha, `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Rotates the hue, keeping saturation and lightness.
    pub fn adjust_hue(&self, amount: i32) -> Self {
        Self::hsla(
            (self.hue as i32).saturating_add(amount),
            self.saturation as i32,
            self.lightness as i32,
            self.alpha as f64,
        )
    }

    /// Adds `amount` percentage points of saturation, clamped to `0..=100`.
    pub fn saturate(&self, amount: i32) -> Self {
        Self::hsla(
            self.hue as i32,
            (self.saturation as i32).saturating_add(amount),
            self.lightness as i32,
            self.alpha as f64,
        )
    }

    /// Adds `amount` percentage points of lightness, clamped to `0..=100`.
    pub fn lighten(&self, amount: i32) -> Self {
        Self::hsla(
            self.hue as i32,
            self.saturation as i32,
            (self.lightness as i32).saturating_add(amount),
            self.alpha as f64,
        )
    }

    /// Adds `amount` to alpha, clamped to `0.0..=1.0`.
    pub fn opacify(&self, amount: f64) -> Self {
        Self::hsla(
            self.hue as i32,
            self.saturation as i32,
            self.lightness as i32,
            self.alpha as f64 + amount,
        )
    }

    /// Drops all saturation.
    pub fn grayscale(&self) -> Self {
        self.saturate(-100)
    }

    /// Rotates the hue by 180 degrees.
    pub fn complement(&self) -> Self {
        self.adjust_hue(180)
    }

    /// Renders as `hsl(h,s%,l%)`, or `hsla(..)` when not fully opaque.
    pub fn to_hsl(&self) -> String {
        if self.alpha == 1.0 {
            format!("hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
        } else {
            format!(
                "hsla({},{}%,{}%,{})",
                self.hue, self.saturation, self.lightness, self.alpha
            )
        }
    }

    /// Renders as `rgb(r,g,b)`, or `rgba(..)` when not fully opaque.
    pub fn to_rgb(&self) -> String {
        let hue = self.hue as f64;
        let saturation = self.saturation as f64 / 100.0;
        let lightness = self.lightness as f64;
        let chroma = if lightness < 50.0 {
            lightness
        } else {
            100.0 - lightness
        } * saturation;

        let max = 2.55 * (lightness + chroma);
        let min = 2.55 * (lightness - chroma);
        let diff = max - min;

        let [r, g, b] = if hue < 60.0 {
            [max, min + diff * (hue / 60.0), min]
        } else if hue < 120.0 {
            [((120.0 - hue) / 60.0) * diff + min, max, min]
        } else if hue < 180.0 {
            [min, max, ((hue - 120.0) / 60.0) * diff + min]
        } else if hue < 240.0 {
            [min, ((240.0 - hue) / 60.0) * diff + min, max]
        } else if hue < 300.0 {
            [((hue - 240.0) / 60.0) * diff + min, min, max]
        } else {
            [max, min, ((360.0 - hue) / 60.0) * diff + min]
        };
        let (r, g, b) = (r.round() as i64, g.round() as i64, b.round() as i64);

        if self.alpha == 1.0 {
            format!("rgb({r},{g},{b})")
        } else {
            format!("rgba({r},{g},{b},{})", self.alpha)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 0.0 {
            return f.write_str("transparent");
        }
        if self.alpha == 1.0 && self.hue == 0 && self.saturation == 0 {
            match self.lightness {
                0 => return f.write_str("black"),
                100 => return f.write_str("white"),
                _ => {}
            }
        }
        f.write_str(&self.to_hsl())
    }
}
