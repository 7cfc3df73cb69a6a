//! In-memory channel for loopback wiring and tests.

use alloc::vec::Vec;

use zoab_ring::Ring;

use super::{Chan, ChanState};

/// Channel over in-memory bytes.
///
/// Fills rings from a borrowed source slice and captures everything it
/// drains. The fill side behaves like a nonblocking file read: a full ring
/// reports `Done` before any copy, an exhausted source reports `Eof`, and
/// anything in between is partial progress as `Reading`.
pub struct MemChan<'a> {
    src: &'a [u8],
    pos: usize,
    captured: Vec<u8>,
    state: ChanState,
}

impl<'a> MemChan<'a> {
    /// Channel that reads from `src` and captures what it drains.
    #[must_use]
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            captured: Vec::new(),
            state: ChanState::Seeking,
        }
    }

    /// Bytes drained so far.
    #[must_use]
    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    /// Consume the channel, keeping the drained bytes.
    #[must_use]
    pub fn into_captured(self) -> Vec<u8> {
        self.captured
    }
}

impl Chan for MemChan<'_> {
    fn fill<const N: usize>(&mut self, ring: &mut Ring<N>) -> ChanState {
        let count = core::cmp::min(self.src.len() - self.pos, ring.remain());
        ring.extend(&self.src[self.pos..self.pos + count]);
        self.pos += count;

        self.state = if ring.is_full() {
            ChanState::Done
        } else if count == 0 {
            ChanState::Eof
        } else {
            ChanState::Reading
        };
        self.state
    }

    fn drain<const N: usize>(&mut self, ring: &mut Ring<N>) -> ChanState {
        // Memory never pushes back; take everything
        while !ring.is_empty() {
            self.captured.push(ring.pop());
        }
        self.state = ChanState::Done;
        self.state
    }

    fn state(&self) -> ChanState {
        self.state
    }

    fn stop(&mut self) {
        self.state = ChanState::Stopping;
    }

    fn close(&mut self) -> ChanState {
        self.state = if self.state == ChanState::Stopping {
            ChanState::Stopped
        } else {
            ChanState::Done
        };
        self.state
    }
}
