//! A `no_std` wire codec over fixed-capacity ring buffers.
//!
//! Values are encoded directly into a [`Ring`] as length-tagged tokens and
//! decoded back out, with a byte transport draining and filling the ring in
//! between. Nothing allocates and nothing blocks: when the ring cannot take
//! a token the encoder reports exactly how many bytes it is short, and when
//! the ring cannot yet yield a token the decoder does the same.
//!
//! # Encode and decode
//!
//! ```
//! use zoab::{Ring, ZoabRx, ZoabTx};
//!
//! let mut ring: Ring<32> = Ring::new();
//!
//! ring.tx_start().unwrap();
//! ring.tx_u32(0xFEDCAB).unwrap();
//! ring.tx_data(b"hi", false).unwrap();
//!
//! assert!(ring.rx_start());
//! assert_eq!(ring.rx_u32().unwrap(), 0xFEDCAB);
//!
//! let mut buf = [0u8; zoab::MAX_SEG_LEN];
//! let head = ring.rx_seg(&mut buf).unwrap();
//! assert_eq!(&buf[..head.len], b"hi");
//! ```
//!
//! # Backpressure
//!
//! ```
//! use zoab::{Ring, WireError, ZoabTx};
//!
//! let mut ring: Ring<4> = Ring::new();
//! ring.extend(&[0; 3]);
//!
//! // A u32 token needs 4 bytes and only 1 is free
//! let err = ring.tx_u32(0xFEDCAB).unwrap_err();
//! assert_eq!(err, WireError::BufferFull { needed: 4, available: 1 });
//! assert_eq!(err.deficit(), 3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod chan;
mod error;
mod rx;
mod tag;
mod tx;

#[cfg(test)]
mod tests;

pub use error::{Result, WireError};
pub use rx::ZoabRx;
pub use tag::{ARR, ArrHead, JOIN, MAX_SEG_LEN, START, SegHead, TAG_BITS};
pub use tx::ZoabTx;

pub use chan::{Chan, ChanState};
#[cfg(all(feature = "std", unix))]
pub use chan::FdChan;
#[cfg(feature = "alloc")]
pub use chan::MemChan;

pub use zoab_ring::Ring;
