//! A `no_std` fixed-capacity circular byte buffer.
//!
//! [`Ring`] owns its backing array and never allocates, never resizes and
//! never blocks. It is the staging area between a wire codec and a byte
//! transport: encoders push bytes in, transports drain them out, and the
//! reverse on the receive side.
//!
//! ```
//! use zoab_ring::Ring;
//!
//! let mut ring: Ring<8> = Ring::new();
//!
//! ring.extend(&[1, 2, 3]);
//! assert_eq!(ring.len(), 3);
//! assert_eq!(ring.pop(), 1);
//! assert_eq!(ring.peek(), Some(2));
//! ```
//!
//! Capacity checks are the caller's job. `push` on a full ring and `pop` on
//! an empty ring are contract violations and panic; use [`Ring::remain`] and
//! [`Ring::len`] to stay inside the contract, or the partial bulk ops
//! [`Ring::push_slice`] / [`Ring::pop_slice`] which never overrun.

#![no_std]
#![warn(missing_docs)]

mod ring;


pub use ring::{Ring, RingIter};
