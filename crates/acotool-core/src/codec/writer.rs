use crate::swatch::{Swatch, SwatchFile};

use super::error::EncodeError;
use super::layout;

/// Serializes a swatch model into the version-2 wire layout.
///
/// The version-2 layout is written unconditionally: a name-less section
/// for readers that predate swatch names, then a named copy of every
/// swatch (empty name when the model has none). `decode(encode(f))` is
/// observably equivalent to `f` for any model the decoder produced.
pub fn encode(file: &SwatchFile) -> Result<Vec<u8>, EncodeError> {
    let count = u16::try_from(file.swatches.len()).map_err(|_| EncodeError::TooManySwatches {
        count: file.swatches.len(),
    })?;

    let body_bytes = file.swatches.len() * (layout::SWATCH_BODY_LEN * 2 + 4);
    let mut out = Vec::with_capacity(layout::HEADER_LEN * 2 + body_bytes);

    write_header(&mut out, count);
    for swatch in &file.swatches {
        write_body(&mut out, swatch);
    }

    write_header(&mut out, count);
    for swatch in &file.swatches {
        write_body(&mut out, swatch);
        write_name(&mut out, swatch.name.as_deref().unwrap_or(""))?;
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, count: u16) {
    push_u16(out, layout::VERSION_TAG_V2);
    push_u16(out, count);
}

fn write_body(out: &mut Vec<u8>, swatch: &Swatch) {
    push_u16(out, swatch.color_space.code());
    for channel in swatch.channels {
        push_u16(out, channel);
    }
}

fn write_name(out: &mut Vec<u8>, name: &str) -> Result<(), EncodeError> {
    let units: Vec<u16> = name.encode_utf16().collect();
    let declared = units
        .len()
        .checked_add(usize::from(layout::NAME_LENGTH_OVERHEAD))
        .and_then(|total| u16::try_from(total).ok())
        .ok_or(EncodeError::NameTooLong { units: units.len() })?;
    push_u16(out, declared);
    for unit in units {
        push_u16(out, unit);
    }
    push_u16(out, 0);
    Ok(())
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::codec::error::EncodeError;
    use crate::color_space::ColorSpace;
    use crate::swatch::{BlockVersion, Swatch, SwatchFile};

    fn swatch(space: ColorSpace, channels: [u16; 4], name: Option<&str>) -> Swatch {
        Swatch {
            color_space: space,
            channels,
            name: name.map(str::to_string),
            block_version: BlockVersion::V2,
        }
    }

    #[test]
    fn encode_single_named_swatch() {
        let file = SwatchFile {
            version: 2,
            swatches: vec![swatch(ColorSpace::Rgb, [100, 0, 0, 0], Some("Red"))],
        };

        let expected = [
            0x00, 0x02, 0x00, 0x01, // version 2, one swatch
            0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x02, 0x00, 0x01, // named section
            0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x05, 0x00, 0x52, 0x00, 0x65, 0x00, 0x64, 0x00, 0x00,
        ];
        assert_eq!(encode(&file).unwrap(), expected);
    }

    #[test]
    fn encode_unnamed_swatch_writes_bare_terminator() {
        let file = SwatchFile {
            version: 1,
            swatches: vec![swatch(ColorSpace::Grayscale, [5000, 0, 0, 0], None)],
        };

        let bytes = encode(&file).unwrap();
        // Named section ends with length word 2 plus the terminator.
        assert_eq!(&bytes[bytes.len() - 4..], &[0x00, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn encode_rejects_oversized_name() {
        let long_name = "a".repeat(usize::from(u16::MAX));
        let file = SwatchFile {
            version: 2,
            swatches: vec![swatch(ColorSpace::Rgb, [0, 0, 0, 0], Some(&long_name))],
        };

        let err = encode(&file).unwrap_err();
        assert!(matches!(err, EncodeError::NameTooLong { .. }));
    }

    #[test]
    fn encode_rejects_oversized_swatch_count() {
        let file = SwatchFile {
            version: 2,
            swatches: vec![swatch(ColorSpace::Rgb, [0, 0, 0, 0], None); usize::from(u16::MAX) + 1],
        };

        let err = encode(&file).unwrap_err();
        assert!(matches!(err, EncodeError::TooManySwatches { .. }));
    }
}
