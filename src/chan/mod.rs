//! Byte transports that fill and drain rings.
//!
//! A channel moves raw bytes between a ring and the outside world. The
//! codec never touches a channel; it only sees ring space. Channels are
//! nonblocking: each call makes whatever progress it can and reports a
//! [`ChanState`]. Status codes 0xD0 and up are terminal, 0xE0 and up are
//! errors.

use zoab_ring::Ring;

#[cfg(all(feature = "std", unix))]
mod fd;
#[cfg(feature = "alloc")]
mod mem;

#[cfg(all(feature = "std", unix))]
pub use fd::FdChan;
#[cfg(feature = "alloc")]
pub use mem::MemChan;

/// Channel status code.
///
/// Discriminants are the wire-visible status bytes of the transport
/// protocol; [`is_terminal`](ChanState::is_terminal) and
/// [`is_err`](ChanState::is_err) test the reserved ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChanState {
    /// Waiting to locate the next unit of work.
    Seeking = 0x00,
    /// A read is in progress; fill again for more.
    Reading = 0x01,
    /// A write is in progress; drain again for more.
    Writing = 0x02,
    /// Wind-down requested, not yet complete.
    Stopping = 0x03,
    /// The requested operation completed.
    Done = 0xD0,
    /// The channel wound down after a stop request.
    Stopped = 0xD1,
    /// The byte source is exhausted.
    Eof = 0xD2,
    /// The channel failed outside an I/O call.
    Error = 0xE0,
    /// The host denied permission.
    PermError = 0xE1,
    /// The host reported an I/O failure.
    IoError = 0xE2,
}

impl ChanState {
    /// True for states that end the current operation.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self as u8 >= ChanState::Done as u8
    }

    /// True for failure states.
    #[inline]
    #[must_use]
    pub fn is_err(self) -> bool {
        self as u8 >= ChanState::Error as u8
    }
}

/// A nonblocking byte transport between rings and the outside world.
///
/// The fill side reports `Done` when the ring is full (before attempting a
/// read), `Eof` when the source has no more bytes, and `Reading` on partial
/// progress. The drain side mirrors this with `Writing` and `Done`.
pub trait Chan {
    /// Move transport bytes into `ring`.
    fn fill<const N: usize>(&mut self, ring: &mut Ring<N>) -> ChanState;

    /// Move buffered bytes from `ring` into the transport.
    fn drain<const N: usize>(&mut self, ring: &mut Ring<N>) -> ChanState;

    /// Status left by the most recent operation.
    fn state(&self) -> ChanState;

    /// Request wind-down: the eventual close reports
    /// [`ChanState::Stopped`] instead of [`ChanState::Done`].
    fn stop(&mut self);

    /// Release transport resources.
    fn close(&mut self) -> ChanState;
}
