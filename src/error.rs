//! Error type for wire encode and decode.

/// Error from a wire operation on a ring.
///
/// The two shortfall variants are recoverable: drain the ring and retry a
/// [`BufferFull`](WireError::BufferFull), fill it and retry an
/// [`Underrun`](WireError::Underrun). [`Malformed`](WireError::Malformed)
/// means the buffered bytes violate the format; the bytes are left in place
/// so the caller can resynchronize on the next start marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Not enough free space to transmit a token.
    BufferFull {
        /// Bytes the whole token needs.
        needed: usize,
        /// Free bytes available.
        available: usize,
    },

    /// Not enough buffered bytes to receive a token.
    Underrun {
        /// Bytes the whole token needs.
        needed: usize,
        /// Bytes currently buffered.
        available: usize,
    },

    /// Buffered bytes are not valid wire data.
    Malformed {
        /// Error description.
        message: &'static str,
    },
}

impl WireError {
    /// Additional bytes required before a retry can succeed.
    ///
    /// Zero for [`Malformed`](WireError::Malformed), which no amount of
    /// space or data repairs.
    #[inline]
    #[must_use]
    pub fn deficit(&self) -> usize {
        match self {
            WireError::BufferFull { needed, available }
            | WireError::Underrun { needed, available } => needed - available,
            WireError::Malformed { .. } => 0,
        }
    }
}

impl core::fmt::Display for WireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WireError::BufferFull { needed, available } => {
                write!(
                    f,
                    "ring full: token needs {} bytes, only {} free",
                    needed, available
                )
            }
            WireError::Underrun { needed, available } => {
                write!(
                    f,
                    "short of data: token needs {} bytes, only {} buffered",
                    needed, available
                )
            }
            WireError::Malformed { message } => {
                write!(f, "malformed wire data: {}", message)
            }
        }
    }
}

impl core::error::Error for WireError {}

/// Result type for wire operations.
pub type Result<T> = core::result::Result<T, WireError>;
