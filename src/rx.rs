//! Receive surface: decode wire tokens out of a ring.

use zoab_ring::Ring;

use crate::error::{Result, WireError};
use crate::tag::{ARR, ArrHead, JOIN, MAX_SEG_LEN, START, SegHead, TAG_BITS};

/// Decode wire tokens out of a ring buffer.
///
/// Decoding is schema driven: the caller knows which token comes next and
/// calls the matching operation. Every operation is all-or-nothing. With
/// fewer buffered bytes than the whole token needs it returns
/// [`WireError::Underrun`] and consumes nothing, so the caller can fill the
/// ring from its transport and retry. A token that can never decode returns
/// [`WireError::Malformed`], also consuming nothing; recovery is scanning
/// for the next message with [`rx_start`](ZoabRx::rx_start).
///
/// ```
/// use zoab::{Ring, ZoabRx, ZoabTx};
///
/// let mut ring: Ring<16> = Ring::new();
/// ring.tx_enum_start(2).unwrap();
///
/// assert!(ring.rx_start());
/// assert_eq!(ring.rx_enum().unwrap(), 2);
/// ```
pub trait ZoabRx {
    /// Discard bytes until a start marker has been consumed.
    ///
    /// Returns `true` once the full 2-byte marker is eaten, leaving the
    /// ring positioned on the first token of the message. Returns `false`
    /// when the ring runs dry; a trailing byte that could open a marker is
    /// left buffered, so a marker split across two transport reads is still
    /// found on the next call.
    fn rx_start(&mut self) -> bool;

    /// Receive a `u8` scalar. Widths other than 0 and 1 are malformed.
    fn rx_u8(&mut self) -> Result<u8>;

    /// Receive a `u32` scalar of width 0 to 4 bytes, big endian.
    fn rx_u32(&mut self) -> Result<u32>;

    /// Receive one data-segment tag, leaving the payload buffered.
    fn rx_data_head(&mut self) -> Result<SegHead>;

    /// Receive one whole data segment, tag and payload, into `out`.
    ///
    /// The payload lands in `out[..head.len]`. Loop until a head with
    /// `join == false` to reassemble a chained value.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`MAX_SEG_LEN`].
    fn rx_seg(&mut self, out: &mut [u8]) -> Result<SegHead>;

    /// Receive an array tag. A tag without the `ARR` bit is malformed.
    fn rx_arr(&mut self) -> Result<ArrHead>;

    /// Receive struct framing, returning the field count.
    ///
    /// The array count must be one more than the field count; anything else
    /// is malformed.
    fn rx_struct(&mut self) -> Result<u8>;

    /// Receive enum framing, returning the variant tag.
    fn rx_enum(&mut self) -> Result<u8>;
}

fn peek_at<const N: usize>(ring: &Ring<N>, index: usize) -> Result<u8> {
    match ring.get(index) {
        Some(byte) => Ok(byte),
        None => Err(WireError::Underrun {
            needed: index + 1,
            available: ring.len(),
        }),
    }
}

fn need<const N: usize>(ring: &Ring<N>, needed: usize) -> Result<()> {
    let available = ring.len();
    if available < needed {
        return Err(WireError::Underrun { needed, available });
    }
    Ok(())
}

/// Consume bytes already validated by lookahead.
fn take<const N: usize>(ring: &mut Ring<N>, count: usize) {
    for _ in 0..count {
        ring.pop();
    }
}

impl<const N: usize> ZoabRx for Ring<N> {
    fn rx_start(&mut self) -> bool {
        while self.len() >= 2 {
            if self.get(0) == Some(START[0]) && self.get(1) == Some(START[1]) {
                take(self, 2);
                return true;
            }
            self.pop();
        }
        false
    }

    fn rx_u8(&mut self) -> Result<u8> {
        match peek_at(self, 0)? {
            0 => {
                self.pop();
                Ok(0)
            }
            1 => {
                need(self, 2)?;
                self.pop();
                Ok(self.pop())
            }
            2..=4 => Err(WireError::Malformed {
                message: "expected u8 scalar",
            }),
            _ => Err(WireError::Malformed {
                message: "scalar width over 4",
            }),
        }
    }

    fn rx_u32(&mut self) -> Result<u32> {
        let width = usize::from(peek_at(self, 0)?);
        if width > 4 {
            return Err(WireError::Malformed {
                message: "scalar width over 4",
            });
        }
        need(self, 1 + width)?;

        let mut v: u32 = 0;
        for byte in self.iter().skip(1).take(width) {
            v = (v << 8) | u32::from(byte);
        }
        take(self, 1 + width);
        Ok(v)
    }

    fn rx_data_head(&mut self) -> Result<SegHead> {
        let tag = peek_at(self, 0)?;
        let len = usize::from(tag & !JOIN);
        if len > MAX_SEG_LEN {
            return Err(WireError::Malformed {
                message: "segment length over cap",
            });
        }
        self.pop();
        Ok(SegHead {
            join: tag & JOIN != 0,
            len,
        })
    }

    fn rx_seg(&mut self, out: &mut [u8]) -> Result<SegHead> {
        assert!(out.len() >= MAX_SEG_LEN, "segment buffer under wire cap");
        let tag = peek_at(self, 0)?;
        let len = usize::from(tag & !JOIN);
        if len > MAX_SEG_LEN {
            return Err(WireError::Malformed {
                message: "segment length over cap",
            });
        }
        need(self, 1 + len)?;

        for (slot, byte) in out[..len].iter_mut().zip(self.iter().skip(1)) {
            *slot = byte;
        }
        take(self, 1 + len);
        Ok(SegHead {
            join: tag & JOIN != 0,
            len,
        })
    }

    fn rx_arr(&mut self) -> Result<ArrHead> {
        let tag = peek_at(self, 0)?;
        if tag & ARR == 0 {
            return Err(WireError::Malformed {
                message: "expected array tag",
            });
        }
        self.pop();
        Ok(ArrHead {
            join: tag & JOIN != 0,
            count: tag & !TAG_BITS,
        })
    }

    fn rx_struct(&mut self) -> Result<u8> {
        let tag = peek_at(self, 0)?;
        if tag & ARR == 0 {
            return Err(WireError::Malformed {
                message: "expected array tag",
            });
        }
        let count = tag & !TAG_BITS;

        let (fields, token) = match peek_at(self, 1)? {
            0 => (0, 2),
            1 => {
                need(self, 3)?;
                (peek_at(self, 2)?, 3)
            }
            _ => {
                return Err(WireError::Malformed {
                    message: "expected u8 scalar",
                });
            }
        };
        if usize::from(count) != usize::from(fields) + 1 {
            return Err(WireError::Malformed {
                message: "struct arity mismatch",
            });
        }
        take(self, token);
        Ok(fields)
    }

    fn rx_enum(&mut self) -> Result<u8> {
        let tag = peek_at(self, 0)?;
        if tag & ARR == 0 {
            return Err(WireError::Malformed {
                message: "expected array tag",
            });
        }
        if tag & !TAG_BITS != 2 {
            return Err(WireError::Malformed {
                message: "enum arity mismatch",
            });
        }

        let (variant, token) = match peek_at(self, 1)? {
            0 => (0, 2),
            1 => {
                need(self, 3)?;
                (peek_at(self, 2)?, 3)
            }
            _ => {
                return Err(WireError::Malformed {
                    message: "expected u8 scalar",
                });
            }
        };
        take(self, token);
        Ok(variant)
    }
}
