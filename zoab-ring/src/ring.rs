//! Fixed-capacity circular byte buffer.

/// Circular byte buffer with a const-generic capacity.
///
/// Bytes leave in the order they entered. The buffer lives inline in the
/// struct, so a `Ring<N>` can sit on the stack or in a `static`. Capacity
/// may be any nonzero size; indexing wraps with an explicit modulo rather
/// than a power-of-two mask.
pub struct Ring<const N: usize> {
    buf: [u8; N],
    head: usize,
    len: usize,
}

impl<const N: usize> Ring<N> {
    /// Create an empty ring.
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "capacity must be > 0") };

        Self {
            buf: [0; N],
            head: 0,
            len: 0,
        }
    }

    /// Number of buffered bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Buffer capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free space left in the buffer.
    #[inline]
    #[must_use]
    pub const fn remain(&self) -> usize {
        N - self.len
    }

    /// True if no bytes are buffered.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if no free space is left.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Drop all buffered bytes.
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Push one byte.
    ///
    /// # Panics
    ///
    /// Panics if the ring is full. Check [`Ring::remain`] first.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        assert!(self.len < N, "ring overflow");
        self.buf[(self.head + self.len) % N] = byte;
        self.len += 1;
    }

    /// Pop the oldest byte.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty. Check [`Ring::len`] first.
    #[inline]
    pub fn pop(&mut self) -> u8 {
        assert!(self.len > 0, "ring underflow");
        let byte = self.buf[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        byte
    }

    /// Push all bytes of a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice does not fit in the free space.
    pub fn extend(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= self.remain(), "ring overflow");
        for &byte in bytes {
            self.buf[(self.head + self.len) % N] = byte;
            self.len += 1;
        }
    }

    /// Push as many bytes as fit, returning how many were taken.
    ///
    /// Transport fill side: never panics, never overruns.
    pub fn push_slice(&mut self, bytes: &[u8]) -> usize {
        let count = core::cmp::min(bytes.len(), self.remain());
        self.extend(&bytes[..count]);
        count
    }

    /// Pop as many bytes as `out` holds, returning how many were copied.
    ///
    /// Transport drain side: never panics, never underruns.
    pub fn pop_slice(&mut self, out: &mut [u8]) -> usize {
        let count = core::cmp::min(out.len(), self.len);
        for slot in out[..count].iter_mut() {
            *slot = self.pop();
        }
        count
    }

    /// Peek at the oldest byte.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.get(0)
    }

    /// Get a buffered byte by index (0 = oldest) without consuming it.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        Some(self.buf[(self.head + index) % N])
    }

    /// Iterate buffered bytes oldest to newest without consuming them.
    #[inline]
    pub fn iter(&self) -> RingIter<'_, N> {
        RingIter {
            ring: self,
            index: 0,
        }
    }
}

impl<const N: usize> Default for Ring<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over buffered bytes, oldest to newest.
pub struct RingIter<'a, const N: usize> {
    ring: &'a Ring<N>,
    index: usize,
}

impl<const N: usize> Iterator for RingIter<'_, N> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let byte = self.ring.get(self.index)?;
        self.index += 1;
        Some(byte)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.ring.len() - self.index;
        (left, Some(left))
    }
}

impl<const N: usize> ExactSizeIterator for RingIter<'_, N> {}
