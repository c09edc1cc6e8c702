//! RGBA color type, predefined constants and the accepted color inputs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchloop::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 - 1.0 range.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel bytes.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 1.0)
    }

    /// Creates a color from 0-255 channel bytes and a 0.0 - 1.0 alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns true when the color contributes nothing when painted.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Sets this color as the source of a cairo context.
    pub fn apply_source(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }

    fn channel_byte(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Formats the color as the normalized CSS style string (`rgb(...)` or `rgba(...)`).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (
            Self::channel_byte(self.r),
            Self::channel_byte(self.g),
            Self::channel_byte(self.b),
        );
        if self.a >= 1.0 {
            write!(f, "rgb({r}, {g}, {b})")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", self.a.max(0.0))
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (CSS `green`, R=0.0, G=0.5, B=0.0)
pub const GREEN: Color = Color::new(0.0, 128.0 / 255.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent color, used by `no_fill` / `no_stroke`
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// CSS color keywords understood by [`ColorValue::Name`], sorted for binary search.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

/// Errors produced while normalizing a [`ColorValue`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("Unknown color name '{0}'")]
    UnknownName(String),

    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),

    #[error("Invalid color function '{0}'")]
    InvalidFunction(String),

    #[error("Alpha {0} is outside 0.0-1.0")]
    AlphaOutOfRange(f64),
}

/// Color input accepted by the drawing API and the config file.
///
/// # Examples
/// ```toml
/// # Named color, hex string or CSS color function
/// background = "white"
/// background = "#ff8800"
/// background = "rgba(0, 0, 0, 0.5)"
/// background = "hsl(210 40% 20%)"
///
/// # RGB bytes, optionally followed by an alpha between 0.0 and 1.0
/// background = [255, 128, 0]
/// background = [255, 128, 0, 0.5]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorValue {
    /// CSS color name, `transparent`, `#rgb[a]`, `#rrggbb[aa]`, `rgb[a](...)` or `hsl[a](...)`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
    /// RGBA color as [red, green, blue, alpha] with alpha in 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Already-normalized color
    Exact(Color),
}

impl ColorValue {
    /// Normalizes the input into a [`Color`].
    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorValue::Name(name) => parse_color_str(name),
            ColorValue::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
            ColorValue::Rgba(r, g, b, a) => {
                if !(0.0..=1.0).contains(a) {
                    return Err(ColorParseError::AlphaOutOfRange(*a));
                }
                Ok(Color::from_rgba8(*r, *g, *b, *a))
            }
            ColorValue::Exact(color) => Ok(*color),
        }
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Name(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::Name(value)
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from(value: [u8; 3]) -> Self {
        ColorValue::Rgb(value)
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorValue::Rgb([r, g, b])
    }
}

impl From<(u8, u8, u8, f64)> for ColorValue {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        ColorValue::Rgba(r, g, b, a)
    }
}

impl From<Color> for ColorValue {
    fn from(value: Color) -> Self {
        ColorValue::Exact(value)
    }
}

/// Looks up a CSS color keyword (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    if name == "transparent" {
        return Some(TRANSPARENT);
    }
    NAMED_COLORS
        .binary_search_by(|(candidate, _)| candidate.cmp(&name.as_str()))
        .ok()
        .map(|index| {
            let [r, g, b] = NAMED_COLORS[index].1;
            Color::from_rgb8(r, g, b)
        })
}

fn parse_color_str(input: &str) -> Result<Color, ColorParseError> {
    let trimmed = input.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("rgb") || lower.starts_with("hsl") {
        return parse_function(&lower).ok_or_else(|| ColorParseError::InvalidFunction(input.to_string()));
    }

    name_to_color(&lower).ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };

    Some(Color::from_rgba8(r, g, b, a as f64 / 255.0))
}

/// Parses `rgb()`, `rgba()`, `hsl()` and `hsla()` in either the comma form
/// (`rgb(255, 0, 0, 0.5)`) or the space form (`rgb(255 0 0 / 50%)`).
fn parse_function(lower: &str) -> Option<Color> {
    let (name, rest) = lower.split_once('(')?;
    let args = rest.trim_end().strip_suffix(')')?;
    let ([first, second, third], alpha) = split_arguments(args)?;
    let a = match alpha {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };

    match name.trim() {
        "rgb" | "rgba" => Some(Color::new(
            parse_rgb_channel(first)?,
            parse_rgb_channel(second)?,
            parse_rgb_channel(third)?,
            a,
        )),
        "hsl" | "hsla" => {
            let (r, g, b) = hsl_to_rgb(
                parse_hue(first)?,
                parse_percentage(second)?,
                parse_percentage(third)?,
            );
            Some(Color::new(r, g, b, a))
        }
        _ => None,
    }
}

/// Splits function arguments into three channels and an optional alpha.
fn split_arguments(args: &str) -> Option<([&str; 3], Option<&str>)> {
    let parts: Vec<&str> = if args.contains(',') {
        args.split(',').map(str::trim).collect()
    } else {
        let (channels, alpha) = match args.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (args, None),
        };
        let mut parts: Vec<&str> = channels.split_whitespace().collect();
        parts.extend(alpha);
        parts
    };

    match parts[..] {
        [r, g, b] => Some(([r, g, b], None)),
        [r, g, b, a] => Some(([r, g, b], Some(a))),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// A 0-255 number or a 0%-100% percentage, as a 0.0-1.0 channel.
fn parse_rgb_channel(s: &str) -> Option<f64> {
    let value = match s.strip_suffix('%') {
        Some(percent) => parse_number(percent)? / 100.0,
        None => parse_number(s)? / 255.0,
    };
    (0.0..=1.0).contains(&value).then_some(value)
}

/// A 0.0-1.0 number or a 0%-100% percentage.
fn parse_alpha(s: &str) -> Option<f64> {
    let value = match s.strip_suffix('%') {
        Some(percent) => parse_number(percent)? / 100.0,
        None => parse_number(s)?,
    };
    (0.0..=1.0).contains(&value).then_some(value)
}

/// Saturation or lightness; the `%` is optional.
fn parse_percentage(s: &str) -> Option<f64> {
    let value = parse_number(s.strip_suffix('%').unwrap_or(s))? / 100.0;
    (0.0..=1.0).contains(&value).then_some(value)
}

/// Hue in degrees (`deg` suffix optional), wrapped into 0-360.
fn parse_hue(s: &str) -> Option<f64> {
    let value = parse_number(s.strip_suffix("deg").unwrap_or(s))?;
    Some(value.rem_euclid(360.0))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_sorted_for_lookup() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color(" RED "), Some(RED));
        assert_eq!(name_to_color("transparent"), Some(TRANSPARENT));
        assert!(name_to_color("chartreuse-ish").is_none());
        assert_eq!(name_to_color("rebeccapurple"), Some(Color::from_rgb8(102, 51, 153)));
        assert_eq!(name_to_color("Beige"), Some(Color::from_rgb8(245, 245, 220)));
        assert_eq!(name_to_color("lightgoldenrodyellow"), Some(Color::from_rgb8(250, 250, 210)));
        assert_eq!(NAMED_COLORS.len(), 148);
    }

    #[test]
    fn hex_forms_normalize() {
        let short = ColorValue::from("#f80").to_color().unwrap();
        let long = ColorValue::from("#ff8800").to_color().unwrap();
        assert_eq!(short, long);
        assert_eq!(long.a, 1.0);

        let with_alpha = ColorValue::from("#00000080").to_color().unwrap();
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-9);

        assert_eq!(
            ColorValue::from("#12345").to_color(),
            Err(ColorParseError::InvalidHex("#12345".into()))
        );
        assert!(ColorValue::from("#zzzzzz").to_color().is_err());
    }

    #[test]
    fn color_functions_normalize() {
        let rgb = ColorValue::from("rgb(255, 0, 0)").to_color().unwrap();
        assert_eq!(rgb, RED);

        let rgba = ColorValue::from("RGBA(0, 0, 255, 0.25)").to_color().unwrap();
        assert_eq!(rgba, Color::new(0.0, 0.0, 1.0, 0.25));

        assert!(ColorValue::from("rgb(300, 0, 0)").to_color().is_err());
        assert!(ColorValue::from("rgba(0, 0)").to_color().is_err());
        assert!(ColorValue::from("rgb(0, 0, 0, 2)").to_color().is_err());
    }

    #[test]
    fn space_separated_and_percentage_rgb() {
        assert_eq!(ColorValue::from("rgb(255 0 0)").to_color().unwrap(), RED);
        assert_eq!(ColorValue::from("rgb(100% 0% 0%)").to_color().unwrap(), RED);
        assert_eq!(
            ColorValue::from("rgb(0 0 255 / 50%)").to_color().unwrap(),
            Color::new(0.0, 0.0, 1.0, 0.5)
        );
        assert_eq!(
            ColorValue::from("rgba(0, 0, 255, 25%)").to_color().unwrap(),
            Color::new(0.0, 0.0, 1.0, 0.25)
        );
        assert!(ColorValue::from("rgb(255 0)").to_color().is_err());
        assert!(ColorValue::from("rgb(0 0 0 /)").to_color().is_err());
    }

    #[test]
    fn hsl_functions_normalize() {
        let lime = Color::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(ColorValue::from("hsl(120, 100%, 50%)").to_color().unwrap(), lime);
        assert_eq!(ColorValue::from("hsl(120deg 100% 50%)").to_color().unwrap(), lime);
        assert_eq!(ColorValue::from("hsl(480, 100%, 50%)").to_color().unwrap(), lime);
        assert_eq!(ColorValue::from("hsl(0, 100%, 50%)").to_color().unwrap(), RED);
        assert_eq!(
            ColorValue::from("HSLA(240, 100%, 50%, 0.5)").to_color().unwrap(),
            Color::new(0.0, 0.0, 1.0, 0.5)
        );

        let gray = ColorValue::from("hsl(0 0% 50% / 1)").to_color().unwrap();
        assert_eq!(gray, Color::new(0.5, 0.5, 0.5, 1.0));
        assert!(ColorValue::from("hsl(0, 150%, 50%)").to_color().is_err());
        assert!(ColorValue::from("hsl(x, 10%, 50%)").to_color().is_err());
    }

    #[test]
    fn tuples_normalize() {
        let rgb: (u8, u8, u8) = (255, 255, 0);
        assert_eq!(ColorValue::from(rgb).to_color().unwrap(), YELLOW);
        let rgba: (u8, u8, u8, f64) = (0, 0, 0, 0.0);
        assert_eq!(ColorValue::from(rgba).to_color().unwrap(), TRANSPARENT);
        assert_eq!(
            ColorValue::Rgba(0, 0, 0, 1.5).to_color(),
            Err(ColorParseError::AlphaOutOfRange(1.5))
        );
    }

    #[test]
    fn display_produces_css_style_string() {
        assert_eq!(RED.to_string(), "rgb(255, 0, 0)");
        assert_eq!(TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
        assert_eq!(Color::new(0.0, 0.0, 1.0, 0.5).to_string(), "rgba(0, 0, 255, 0.5)");
    }

    #[test]
    fn toml_accepts_every_input_shape() {
        #[derive(Deserialize)]
        struct Holder {
            colors: Vec<ColorValue>,
        }

        let holder: Holder =
            toml::from_str(r##"colors = ["navy", "#fff", [1, 2, 3], [1, 2, 3, 0.5]]"##).unwrap();
        assert_eq!(holder.colors[0], ColorValue::Name("navy".into()));
        assert_eq!(holder.colors[2], ColorValue::Rgb([1, 2, 3]));
        assert_eq!(holder.colors[3], ColorValue::Rgba(1, 2, 3, 0.5));
    }
}
