//! Wire constants and decoded tag headers.
//!
//! Every token on the wire opens with a single tag byte. The two high bits
//! carry flags, the low bits carry a length or count:
//!
//! ```text
//! JOIN | ARR | <6..0: segment length or array count>
//! ```
//!
//! Segment lengths use the low seven bits and run up to [`MAX_SEG_LEN`],
//! which overlaps the `ARR` bit: a plain data segment of 99 bytes has the
//! tag `0x63`. Which reading applies is decided by the schema, not the tag
//! byte. Array counts stay within the low six bits of their tag.

/// Stream start marker, sent before each message.
pub const START: [u8; 2] = [0x80, 0x03];

/// Tag flag: another segment of the same value follows.
pub const JOIN: u8 = 0x80;

/// Tag flag: the tag opens an array rather than a data segment.
pub const ARR: u8 = 0x40;

/// Mask of both tag flag bits.
pub const TAG_BITS: u8 = 0xC0;

/// Longest payload one data segment can carry, and the largest array count.
pub const MAX_SEG_LEN: usize = 0x63;

/// Decoded data-segment header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegHead {
    /// Another segment of the same value follows this one.
    pub join: bool,
    /// Payload bytes in this segment, at most [`MAX_SEG_LEN`].
    pub len: usize,
}

/// Decoded array header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrHead {
    /// The `JOIN` flag as carried on the array tag.
    pub join: bool,
    /// Number of elements that follow.
    pub count: u8,
}
