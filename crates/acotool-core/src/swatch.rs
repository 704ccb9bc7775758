use crate::color_space::{ColorSpace, Component};

/// Which structural layout a swatch record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockVersion {
    /// Minimal layout: color space and channels only.
    V1,
    /// Named layout: adds a length-prefixed UTF-16 name.
    V2,
}

/// One decoded color entry.
///
/// The format reserves four 16-bit channel slots regardless of color
/// space; slots a space does not use are left as read (typically zero).
///
/// # Examples
/// ```
/// use acotool_core::{BlockVersion, ColorSpace, Swatch};
///
/// let swatch = Swatch {
///     color_space: ColorSpace::Rgb,
///     channels: [65280, 0, 0, 0],
///     name: Some("Red".to_string()),
///     block_version: BlockVersion::V2,
/// };
/// assert_eq!(swatch.color_space.code(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Decoded color-space tag; unknown codes stay opaque.
    pub color_space: ColorSpace,
    /// Raw big-endian channel values, preserved verbatim.
    pub channels: [u16; 4],
    /// Swatch label; `None` when absent or empty on the wire.
    pub name: Option<String>,
    /// Layout the record was read from.
    pub block_version: BlockVersion,
}

impl Swatch {
    /// Interprets the raw channels per the swatch's color space.
    ///
    /// Returns `None` for custom spaces (Pantone, HKS, ...) and unknown
    /// codes, whose channel semantics are not documented.
    pub fn components(&self) -> Option<Vec<Component>> {
        self.color_space.interpret(self.channels)
    }
}

/// An ordered sequence of swatches decoded from one `.aco` buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchFile {
    /// File-level version marker read from the header (1 or 2).
    pub version: u16,
    /// Swatches in file order.
    pub swatches: Vec<Swatch>,
}

impl SwatchFile {
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}
