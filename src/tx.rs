//! Transmit surface: encode wire tokens into a ring.

use zoab_ring::Ring;

use crate::error::{Result, WireError};
use crate::tag::{ARR, JOIN, MAX_SEG_LEN, START};

/// Encode wire tokens into a ring buffer.
///
/// Every fixed-size operation is all-or-nothing: it computes the exact byte
/// count the token needs, and if the ring's free space is short it returns
/// [`WireError::BufferFull`] without writing anything. The caller drains the
/// ring into its transport and retries. [`tx_data`](ZoabTx::tx_data) is the
/// one streaming operation; it makes whole-segment progress so values larger
/// than the ring can pass through it.
///
/// ```
/// use zoab::{Ring, ZoabTx};
///
/// let mut ring: Ring<16> = Ring::new();
/// ring.tx_start().unwrap();
/// ring.tx_u32(0xFEDCAB).unwrap();
/// assert_eq!(ring.len(), 6);
/// ```
pub trait ZoabTx {
    /// Transmit the 2-byte stream start marker.
    fn tx_start(&mut self) -> Result<()>;

    /// Transmit a `u8` as a minimal scalar (1 byte for zero, else 2).
    fn tx_u8(&mut self, v: u8) -> Result<()>;

    /// Transmit a `u32` as a minimal big-endian scalar (1 to 5 bytes).
    fn tx_u32(&mut self, v: u32) -> Result<()>;

    /// Transmit data as a chain of segments, each at most
    /// [`MAX_SEG_LEN`] bytes, with the `JOIN` flag set on every segment
    /// before the last. The final segment carries the caller's `join`.
    ///
    /// Returns how many bytes of `data` were consumed. Segments are never
    /// torn: when the next whole segment does not fit, the call stops there
    /// and the caller resumes with `&data[consumed..]` after draining.
    /// Returns [`WireError::BufferFull`] only when not even the first
    /// segment fits.
    fn tx_data(&mut self, data: &[u8], join: bool) -> Result<usize>;

    /// Transmit an array tag announcing `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds [`MAX_SEG_LEN`].
    fn tx_arr(&mut self, count: u8, join: bool) -> Result<()>;

    /// Transmit the start marker followed by an array tag, atomically.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds [`MAX_SEG_LEN`].
    fn tx_arr_start(&mut self, count: u8) -> Result<()>;

    /// Transmit struct framing: an array of `fields + 1` elements whose
    /// first element is the field count itself.
    ///
    /// # Panics
    ///
    /// Panics if `fields + 1` would exceed [`MAX_SEG_LEN`].
    fn tx_struct(&mut self, fields: u8) -> Result<()>;

    /// Transmit enum framing: a 2-element array holding the variant tag.
    fn tx_enum(&mut self, variant: u8) -> Result<()>;

    /// Transmit the start marker followed by enum framing, atomically.
    fn tx_enum_start(&mut self, variant: u8) -> Result<()>;

    /// Transmit a slice of `u32` as an array of minimal scalars,
    /// atomically.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` exceeds [`MAX_SEG_LEN`].
    fn tx_u32s(&mut self, values: &[u32]) -> Result<()>;
}

/// Byte width of the minimal big-endian encoding of `v`.
///
/// Zero encodes in zero bytes; only zero does.
pub(crate) const fn scalar_width(v: u32) -> usize {
    if v == 0 {
        0
    } else if v <= 0xFF {
        1
    } else if v <= 0xFFFF {
        2
    } else if v <= 0xFF_FFFF {
        3
    } else {
        4
    }
}

fn check_room<const N: usize>(ring: &Ring<N>, needed: usize) -> Result<()> {
    let available = ring.remain();
    if available < needed {
        return Err(WireError::BufferFull { needed, available });
    }
    Ok(())
}

/// Width tag then big-endian payload. Room must already be checked.
fn put_scalar<const N: usize>(ring: &mut Ring<N>, v: u32) {
    let width = scalar_width(v);
    ring.push(width as u8);
    let be = v.to_be_bytes();
    ring.extend(&be[4 - width..]);
}

impl<const N: usize> ZoabTx for Ring<N> {
    fn tx_start(&mut self) -> Result<()> {
        check_room(self, START.len())?;
        self.extend(&START);
        Ok(())
    }

    fn tx_u8(&mut self, v: u8) -> Result<()> {
        self.tx_u32(u32::from(v))
    }

    fn tx_u32(&mut self, v: u32) -> Result<()> {
        check_room(self, 1 + scalar_width(v))?;
        put_scalar(self, v);
        Ok(())
    }

    fn tx_data(&mut self, data: &[u8], join: bool) -> Result<usize> {
        let mut consumed = 0;
        loop {
            let rest = data.len() - consumed;
            if rest <= MAX_SEG_LEN {
                // Final segment, carries the caller's join flag
                let needed = 1 + rest;
                let available = self.remain();
                if available < needed {
                    if consumed == 0 {
                        return Err(WireError::BufferFull { needed, available });
                    }
                    return Ok(consumed);
                }
                let tag = if join { JOIN | rest as u8 } else { rest as u8 };
                self.push(tag);
                self.extend(&data[consumed..]);
                return Ok(data.len());
            }

            let needed = 1 + MAX_SEG_LEN;
            let available = self.remain();
            if available < needed {
                if consumed == 0 {
                    return Err(WireError::BufferFull { needed, available });
                }
                return Ok(consumed);
            }
            self.push(JOIN | MAX_SEG_LEN as u8);
            self.extend(&data[consumed..consumed + MAX_SEG_LEN]);
            consumed += MAX_SEG_LEN;
        }
    }

    fn tx_arr(&mut self, count: u8, join: bool) -> Result<()> {
        assert!(count as usize <= MAX_SEG_LEN, "array count over wire cap");
        check_room(self, 1)?;
        let tag = if join { ARR | JOIN | count } else { ARR | count };
        self.push(tag);
        Ok(())
    }

    fn tx_arr_start(&mut self, count: u8) -> Result<()> {
        assert!(count as usize <= MAX_SEG_LEN, "array count over wire cap");
        check_room(self, START.len() + 1)?;
        self.extend(&START);
        self.push(ARR | count);
        Ok(())
    }

    fn tx_struct(&mut self, fields: u8) -> Result<()> {
        assert!(
            (fields as usize) < MAX_SEG_LEN,
            "struct field count over wire cap"
        );
        check_room(self, 2 + scalar_width(u32::from(fields)))?;
        self.push(ARR | (fields + 1));
        put_scalar(self, u32::from(fields));
        Ok(())
    }

    fn tx_enum(&mut self, variant: u8) -> Result<()> {
        check_room(self, 2 + scalar_width(u32::from(variant)))?;
        self.push(ARR | 2);
        put_scalar(self, u32::from(variant));
        Ok(())
    }

    fn tx_enum_start(&mut self, variant: u8) -> Result<()> {
        check_room(self, START.len() + 2 + scalar_width(u32::from(variant)))?;
        self.extend(&START);
        self.push(ARR | 2);
        put_scalar(self, u32::from(variant));
        Ok(())
    }

    fn tx_u32s(&mut self, values: &[u32]) -> Result<()> {
        assert!(values.len() <= MAX_SEG_LEN, "array count over wire cap");
        let mut needed = 1;
        for &v in values {
            needed += 1 + scalar_width(v);
        }
        check_room(self, needed)?;
        self.push(ARR | values.len() as u8);
        for &v in values {
            put_scalar(self, v);
        }
        Ok(())
    }
}
