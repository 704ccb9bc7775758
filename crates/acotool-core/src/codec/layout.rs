pub const VERSION_TAG_V1: u16 = 1;
pub const VERSION_TAG_V2: u16 = 2;

pub const CHANNELS_PER_SWATCH: usize = 4;

/// Section header: version tag plus swatch count.
pub const HEADER_LEN: usize = 4;
/// Color-space code plus four channel values.
pub const SWATCH_BODY_LEN: usize = 2 + CHANNELS_PER_SWATCH * 2;

/// The name length word counts the name's UTF-16 code units plus the
/// terminator and the length word itself: "Red" carries a length of 5
/// over four code units on the wire.
pub const NAME_LENGTH_OVERHEAD: u16 = 2;
