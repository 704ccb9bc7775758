use super::error::FormatError;

/// Cursor over a `.aco` buffer. Swatch records are variable-length, so
/// reads advance a position instead of using fixed offsets.
pub struct AcoReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> AcoReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        let end = self.pos.saturating_add(len);
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(FormatError::TruncatedBuffer {
                needed: end,
                actual: self.buf.len(),
            })?;
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, FormatError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Reads `units` UTF-16BE code units as a string. Decoding is lossy
    /// and trailing NULs (the terminator) are stripped.
    pub fn read_utf16_be(&mut self, units: usize) -> Result<String, FormatError> {
        let bytes = self.take(units * 2)?;
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let raw = String::from_utf16_lossy(&units);
        Ok(raw.trim_end_matches('\0').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AcoReader;
    use crate::codec::error::FormatError;

    #[test]
    fn read_u16_advances() {
        let mut reader = AcoReader::new(&[0x00, 0x02, 0x01, 0x00]);
        assert_eq!(reader.read_u16_be().unwrap(), 2);
        assert_eq!(reader.read_u16_be().unwrap(), 256);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_past_end_is_truncated() {
        let mut reader = AcoReader::new(&[0x00]);
        let err = reader.read_u16_be().unwrap_err();
        match err {
            FormatError::TruncatedBuffer { needed, actual } => {
                assert_eq!(needed, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn utf16_read_strips_terminator() {
        let mut reader = AcoReader::new(&[0x00, 0x52, 0x00, 0x65, 0x00, 0x64, 0x00, 0x00]);
        assert_eq!(reader.read_utf16_be(4).unwrap(), "Red");
    }
}
