use crate::color_space::ColorSpace;
use crate::swatch::{BlockVersion, Swatch, SwatchFile};

use super::error::FormatError;
use super::layout;
use super::reader::AcoReader;

/// Decodes a raw `.aco` buffer into an ordered swatch model.
///
/// Version-1 buffers hold a single name-less section. Version-2 buffers
/// hold the same section followed, in the common case, by a named copy;
/// the named copy wins because the first section only exists for readers
/// that predate swatch names. Trailing bytes after the last section are
/// ignored.
pub fn decode(bytes: &[u8]) -> Result<SwatchFile, FormatError> {
    let mut reader = AcoReader::new(bytes);
    let version = reader.read_u16_be()?;
    match version {
        layout::VERSION_TAG_V1 => {
            let swatches = read_section(&mut reader, BlockVersion::V1)?;
            Ok(SwatchFile { version, swatches })
        }
        layout::VERSION_TAG_V2 => {
            let unnamed = read_section(&mut reader, BlockVersion::V1)?;
            if reader.is_empty() {
                // Some producers stop after the backward-compatible section.
                return Ok(SwatchFile {
                    version,
                    swatches: unnamed,
                });
            }
            let named_version = reader.read_u16_be()?;
            if named_version != layout::VERSION_TAG_V2 {
                return Err(FormatError::UnsupportedVersion {
                    version: named_version,
                });
            }
            let named = read_section(&mut reader, BlockVersion::V2)?;
            if named.len() != unnamed.len() {
                return Err(FormatError::BlockCountMismatch {
                    base: unnamed.len() as u16,
                    named: named.len() as u16,
                });
            }
            Ok(SwatchFile {
                version,
                swatches: named,
            })
        }
        other => Err(FormatError::UnsupportedVersion { version: other }),
    }
}

fn read_section(
    reader: &mut AcoReader<'_>,
    block: BlockVersion,
) -> Result<Vec<Swatch>, FormatError> {
    let count = reader.read_u16_be()?;
    let mut swatches = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        swatches.push(read_swatch(reader, block)?);
    }
    Ok(swatches)
}

fn read_swatch(reader: &mut AcoReader<'_>, block: BlockVersion) -> Result<Swatch, FormatError> {
    let color_space = ColorSpace::from_code(reader.read_u16_be()?);
    let mut channels = [0u16; layout::CHANNELS_PER_SWATCH];
    for channel in &mut channels {
        *channel = reader.read_u16_be()?;
    }
    let name = match block {
        BlockVersion::V1 => None,
        BlockVersion::V2 => read_name(reader)?,
    };
    Ok(Swatch {
        color_space,
        channels,
        name,
        block_version: block,
    })
}

fn read_name(reader: &mut AcoReader<'_>) -> Result<Option<String>, FormatError> {
    let declared = reader.read_u16_be()?;
    // The length word counts the code units plus the terminator and
    // itself; everything after the word is name data plus the terminator.
    let units = usize::from(declared.saturating_sub(1));
    let name = reader.read_utf16_be(units)?;
    Ok((!name.is_empty()).then_some(name))
}
