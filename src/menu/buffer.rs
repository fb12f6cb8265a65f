//! Bounded text buffer
//!
//! Fixed capacity, stack allocated. Writes past the end are dropped
//! silently and remembered in a truncation flag. Text never ends in a
//! partial UTF-8 character.

use core::fmt;

/// Fixed-capacity text buffer
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
            truncated: false,
        }
    }

    /// Push a byte. Returns `false` when the buffer is full.
    pub fn push(&mut self, c: u8) -> bool {
        if self.len < N {
            self.buf[self.len] = c;
            self.len += 1;
            true
        } else {
            self.truncated = true;
            false
        }
    }

    /// Append as much of `s` as fits
    pub fn push_str(&mut self, s: &str) {
        let remaining = N - self.len;
        let mut take = s.len().min(remaining);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.truncated = true;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
    }

    /// Remove last character, continuation bytes included
    pub fn backspace(&mut self) {
        while self.len > 0 {
            self.len -= 1;
            if self.buf[self.len] & 0xC0 != 0x80 {
                break;
            }
        }
    }

    /// Drop an incomplete UTF-8 sequence at the end
    pub fn trim_partial_char(&mut self) {
        if let Err(e) = core::str::from_utf8(&self.buf[..self.len]) {
            if e.error_len().is_none() {
                self.len = e.valid_up_to();
            }
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    /// Replace contents with `s`, truncated to capacity
    pub fn set(&mut self, s: &str) {
        self.clear();
        self.push_str(s);
    }

    /// Get buffer as string slice, up to the first invalid byte
    pub fn as_str(&self) -> &str {
        let bytes = &self.buf[..self.len];
        match core::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Whether anything was dropped since the last clear
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Formatting into a full buffer truncates instead of failing.
impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq<&str> for LineBuffer<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
