use std::fmt;

use serde::Serialize;

/// Adobe color-space codes used in swatch records.
///
/// Codes 3–6 and 10 are vendor spaces whose channel values Adobe treats
/// as opaque lookup keys; they are carried through unchanged. Codes the
/// format does not define are preserved as [`ColorSpace::Other`] so no
/// data is lost on a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Hsb,
    Cmyk,
    Pantone,
    Focoltone,
    Trumatch,
    Toyo88,
    Lab,
    Grayscale,
    Hks,
    /// Unknown or reserved code, kept as an opaque tag.
    Other(u16),
}

impl ColorSpace {
    /// Decodes a raw color-space code. Total: unknown codes map to
    /// [`ColorSpace::Other`] rather than failing.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => ColorSpace::Rgb,
            1 => ColorSpace::Hsb,
            2 => ColorSpace::Cmyk,
            3 => ColorSpace::Pantone,
            4 => ColorSpace::Focoltone,
            5 => ColorSpace::Trumatch,
            6 => ColorSpace::Toyo88,
            7 => ColorSpace::Lab,
            8 => ColorSpace::Grayscale,
            10 => ColorSpace::Hks,
            other => ColorSpace::Other(other),
        }
    }

    /// Returns the raw wire code for this color space.
    pub fn code(self) -> u16 {
        match self {
            ColorSpace::Rgb => 0,
            ColorSpace::Hsb => 1,
            ColorSpace::Cmyk => 2,
            ColorSpace::Pantone => 3,
            ColorSpace::Focoltone => 4,
            ColorSpace::Trumatch => 5,
            ColorSpace::Toyo88 => 6,
            ColorSpace::Lab => 7,
            ColorSpace::Grayscale => 8,
            ColorSpace::Hks => 10,
            ColorSpace::Other(code) => code,
        }
    }

    fn label(self) -> Option<&'static str> {
        match self {
            ColorSpace::Rgb => Some("RGB"),
            ColorSpace::Hsb => Some("HSB"),
            ColorSpace::Cmyk => Some("CMYK"),
            ColorSpace::Pantone => Some("PANTONE"),
            ColorSpace::Focoltone => Some("FOCOLTONE"),
            ColorSpace::Trumatch => Some("TRUMATCH"),
            ColorSpace::Toyo88 => Some("TOYO88"),
            ColorSpace::Lab => Some("LAB"),
            ColorSpace::Grayscale => Some("GRAYSCALE"),
            ColorSpace::Hks => Some("HKS"),
            ColorSpace::Other(_) => None,
        }
    }

    /// Interprets raw channel values per this space's documented scale.
    ///
    /// Returns `None` for custom and unknown spaces. The Lab a/b channels
    /// are stored as signed 16-bit values and are reinterpreted as such.
    pub fn interpret(self, channels: [u16; 4]) -> Option<Vec<Component>> {
        let components = match self {
            ColorSpace::Rgb => vec![
                Component::new("red", f64::from(channels[0]) / 256.0),
                Component::new("green", f64::from(channels[1]) / 256.0),
                Component::new("blue", f64::from(channels[2]) / 256.0),
            ],
            ColorSpace::Hsb => vec![
                Component::new("hue", f64::from(channels[0]) / 182.04),
                Component::new("saturation", f64::from(channels[1]) / 655.35),
                Component::new("brightness", f64::from(channels[2]) / 655.35),
            ],
            ColorSpace::Cmyk => vec![
                Component::new("cyan", f64::from(channels[0]) / 655.35),
                Component::new("magenta", f64::from(channels[1]) / 655.35),
                Component::new("yellow", f64::from(channels[2]) / 655.35),
                Component::new("black", f64::from(channels[3]) / 655.35),
            ],
            ColorSpace::Lab => vec![
                Component::new("lightness", f64::from(channels[0]) / 100.0),
                Component::new("a", f64::from(channels[1] as i16) / 100.0),
                Component::new("b", f64::from(channels[2] as i16) / 100.0),
            ],
            ColorSpace::Grayscale => {
                vec![Component::new("gray", f64::from(channels[0]) / 100.0)]
            }
            _ => return None,
        };
        Some(components)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "SPACE({})", self.code()),
        }
    }
}

/// One interpreted channel value with its per-space label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Component {
    pub label: &'static str,
    pub value: f64,
}

impl Component {
    fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}
