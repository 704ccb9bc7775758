//! Human-readable and serializable views of a decoded swatch file.
//!
//! The text listing is deterministic: one swatch per line, in file order,
//! with the raw channel values always shown and interpreted components
//! appended only for spaces whose scales are documented.

use serde::Serialize;

use crate::color_space::Component;
use crate::swatch::SwatchFile;

/// One listing entry, serializable for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SwatchRecord {
    pub index: usize,
    pub color_space: String,
    pub color_space_code: u16,
    pub channels: [u16; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

/// Builds listing records for every swatch, in file order.
pub fn listing_records(file: &SwatchFile) -> Vec<SwatchRecord> {
    file.swatches
        .iter()
        .enumerate()
        .map(|(index, swatch)| SwatchRecord {
            index,
            color_space: swatch.color_space.to_string(),
            color_space_code: swatch.color_space.code(),
            channels: swatch.channels,
            name: swatch.name.clone(),
            components: swatch.components(),
        })
        .collect()
}

/// Renders the one-line-per-swatch text listing.
///
/// # Examples
/// ```
/// use acotool_core::{BlockVersion, ColorSpace, Swatch, SwatchFile, render_listing};
///
/// let file = SwatchFile {
///     version: 2,
///     swatches: vec![Swatch {
///         color_space: ColorSpace::Rgb,
///         channels: [65280, 0, 0, 0],
///         name: Some("Red".to_string()),
///         block_version: BlockVersion::V2,
///     }],
/// };
/// let listing = render_listing(&file);
/// assert!(listing.contains("red=255.00"));
/// assert!(listing.contains("\"Red\""));
/// ```
pub fn render_listing(file: &SwatchFile) -> String {
    let mut out = String::new();
    for record in listing_records(file) {
        out.push_str(&format!(
            "{:>4}  {:<12} [{}, {}, {}, {}]",
            record.index,
            record.color_space,
            record.channels[0],
            record.channels[1],
            record.channels[2],
            record.channels[3],
        ));
        if let Some(components) = &record.components {
            let rendered: Vec<String> = components
                .iter()
                .map(|c| format!("{}={:.2}", c.label, c.value))
                .collect();
            out.push_str("  ");
            out.push_str(&rendered.join(" "));
        }
        if let Some(name) = &record.name {
            out.push_str(&format!("  {name:?}"));
        }
        out.push('\n');
    }
    out
}
