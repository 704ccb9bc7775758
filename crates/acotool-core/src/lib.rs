//! Core library for reading and rebuilding Adobe Color (.aco) swatch files.
//!
//! This crate implements the byte-level codec used by the CLI: a decoder
//! that turns a raw `.aco` buffer into an ordered [`SwatchFile`] model, an
//! encoder that reproduces a valid version-2 byte stream from that model,
//! and the listing renderers that turn a decoded file into a human-readable
//! report. Parsing is byte-oriented and side-effect free; all file I/O
//! lives in the CLI crate.
//!
//! Invariants:
//! - Swatch order is preserved exactly as read; the index is how users
//!   reference colors.
//! - Channel values are preserved verbatim; interpretation (RGB, CMYK,
//!   Lab, ...) is display-only and never rewrites stored data.
//! - Unknown color-space codes survive a decode/encode round trip as
//!   opaque tags.
//!
//! # Examples
//! ```
//! let bytes = [
//!     0x00, 0x02, 0x00, 0x01, // version 2, one swatch
//!     0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x02, 0x00, 0x01, // named section
//!     0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x05, 0x00, 0x52, 0x00, 0x65, 0x00, 0x64, 0x00, 0x00,
//! ];
//! let file = acotool_core::decode(&bytes)?;
//! assert_eq!(file.swatches.len(), 1);
//! assert_eq!(file.swatches[0].name.as_deref(), Some("Red"));
//! # Ok::<(), acotool_core::FormatError>(())
//! ```

mod codec;
mod color_space;
mod listing;
mod swatch;

pub use codec::error::{EncodeError, FormatError};
pub use codec::{decode, encode};
pub use color_space::{ColorSpace, Component};
pub use listing::{SwatchRecord, listing_records, render_listing};
pub use swatch::{BlockVersion, Swatch, SwatchFile};
