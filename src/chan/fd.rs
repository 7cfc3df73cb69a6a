//! Nonblocking file-descriptor channel for unix hosts.

use std::ffi::CString;
use std::io;

use zoab_ring::Ring;

use super::{Chan, ChanState};

/// Bytes staged per syscall.
const CHUNK: usize = 256;

/// Channel over a nonblocking unix file descriptor.
///
/// Owns the descriptor: [`Chan::close`] and drop release it. `EAGAIN`
/// keeps the in-progress state so callers can poll; permission errnos map
/// to [`ChanState::PermError`], every other failure to
/// [`ChanState::IoError`].
pub struct FdChan {
    fd: libc::c_int,
    state: ChanState,
}

impl FdChan {
    /// Adopt an already-open descriptor. It should be nonblocking.
    #[must_use]
    pub fn from_fd(fd: libc::c_int) -> Self {
        Self {
            fd,
            state: ChanState::Seeking,
        }
    }

    /// Open `path` read-write and nonblocking.
    ///
    /// On failure the channel holds no descriptor and carries the error
    /// state; check [`Chan::state`] before use.
    #[must_use]
    pub fn open(path: &str) -> Self {
        let Ok(cpath) = CString::new(path) else {
            return Self {
                fd: -1,
                state: ChanState::IoError,
            };
        };
        let fd = unsafe { libc::open(cpath.as_ptr(), libc::O_RDWR | libc::O_NONBLOCK) };
        if fd < 0 {
            return Self {
                fd: -1,
                state: classify(last_errno(), ChanState::IoError),
            };
        }
        Self {
            fd,
            state: ChanState::Done,
        }
    }

    fn release(&mut self) -> bool {
        if self.fd < 0 {
            return true;
        }
        let rc = unsafe { libc::close(self.fd) };
        self.fd = -1;
        rc == 0
    }
}

fn last_errno() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

fn classify(errno: i32, in_progress: ChanState) -> ChanState {
    if errno == libc::EAGAIN || errno == libc::EWOULDBLOCK {
        in_progress
    } else if errno == libc::EPERM || errno == libc::EACCES {
        ChanState::PermError
    } else {
        ChanState::IoError
    }
}

impl Chan for FdChan {
    fn fill<const N: usize>(&mut self, ring: &mut Ring<N>) -> ChanState {
        if ring.is_full() {
            self.state = ChanState::Done;
            return self.state;
        }

        let mut chunk = [0u8; CHUNK];
        let want = core::cmp::min(ring.remain(), CHUNK);
        let got = unsafe { libc::read(self.fd, chunk.as_mut_ptr().cast(), want) };

        self.state = if got < 0 {
            classify(last_errno(), ChanState::Reading)
        } else if got == 0 {
            ChanState::Eof
        } else {
            ring.extend(&chunk[..got as usize]);
            if ring.is_full() {
                ChanState::Done
            } else {
                ChanState::Reading
            }
        };
        self.state
    }

    fn drain<const N: usize>(&mut self, ring: &mut Ring<N>) -> ChanState {
        if ring.is_empty() {
            self.state = ChanState::Done;
            return self.state;
        }

        // Stage without consuming; only bytes the write accepts leave the ring
        let mut chunk = [0u8; CHUNK];
        let mut want = 0;
        for byte in ring.iter().take(CHUNK) {
            chunk[want] = byte;
            want += 1;
        }
        let sent = unsafe { libc::write(self.fd, chunk.as_ptr().cast(), want) };

        self.state = if sent < 0 {
            classify(last_errno(), ChanState::Writing)
        } else {
            for _ in 0..sent as usize {
                ring.pop();
            }
            if ring.is_empty() {
                ChanState::Done
            } else {
                ChanState::Writing
            }
        };
        self.state
    }

    fn state(&self) -> ChanState {
        self.state
    }

    fn stop(&mut self) {
        self.state = ChanState::Stopping;
    }

    fn close(&mut self) -> ChanState {
        let stopping = self.state == ChanState::Stopping;
        self.state = if self.release() {
            if stopping {
                ChanState::Stopped
            } else {
                ChanState::Done
            }
        } else {
            ChanState::Error
        };
        self.state
    }
}

impl Drop for FdChan {
    fn drop(&mut self) {
        self.release();
    }
}
