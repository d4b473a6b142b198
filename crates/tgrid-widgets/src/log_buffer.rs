#![forbid(unsafe_code)]

//! Bounded FIFO of log messages.
//!
//! Entries are kept in chronological order. Pushing past capacity evicts the
//! oldest entry, so `len() <= capacity()` always holds. Overflow is not an
//! error; it is eviction.
//!
//! # Example
//!
//! ```
//! use tgrid_widgets::log_buffer::LogBuffer;
//!
//! let mut log = LogBuffer::new(2);
//! log.push("one");
//! log.push("two");
//! log.push("three");
//! assert_eq!(log.window(10), vec!["two", "three"]);
//! assert_eq!(log.total_pushed(), 3);
//! ```

use std::collections::VecDeque;

use unicode_width::UnicodeWidthChar;

/// A capacity-bounded, append-only message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer {
    entries: VecDeque<String>,
    capacity: usize,
    total_pushed: u64,
}

impl LogBuffer {
    /// Create an empty buffer. A capacity of 0 is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            total_pushed: 0,
        }
    }

    /// Append a message, evicting the oldest if over capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_back(message.into());
        self.total_pushed += 1;
        while self.entries.len() > self.capacity {
            let _evicted = self.entries.pop_front();
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.capacity, "log entry evicted");
        }
    }

    /// The most recent `min(len, height)` messages, oldest first.
    pub fn window(&self, height: usize) -> Vec<&str> {
        let skip = self.entries.len().saturating_sub(height);
        self.entries.iter().skip(skip).map(String::as_str).collect()
    }

    /// Most recent message.
    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Messages pushed over the buffer's lifetime, evicted ones included.
    #[inline]
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    /// Drop every entry. `total_pushed` is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(32)
    }
}

/// Cut `message` to at most `width` terminal columns. Never wraps.
///
/// Zero-width characters cost nothing; a wide character that would straddle
/// the limit is dropped along with everything after it.
pub fn truncate_to_width(message: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in message.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            return &message[..idx];
        }
        used += w;
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_zero_clamps_to_one() {
        let mut log = LogBuffer::new(0);
        assert_eq!(log.capacity(), 1);
        log.push("a");
        log.push("b");
        assert_eq!(log.window(5), vec!["b"]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut log = LogBuffer::new(3);
        for i in 1..=4 {
            log.push(format!("msg {i}"));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().next(), Some("msg 2"));
        assert_eq!(log.latest(), Some("msg 4"));
        assert_eq!(log.total_pushed(), 4);
    }

    #[test]
    fn window_returns_tail_oldest_first() {
        let mut log = LogBuffer::new(10);
        for m in ["a", "b", "c", "d"] {
            log.push(m);
        }
        assert_eq!(log.window(2), vec!["c", "d"]);
        assert_eq!(log.window(0), Vec::<&str>::new());
        assert_eq!(log.window(9), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn clear_keeps_lifetime_count() {
        let mut log = LogBuffer::new(2);
        log.push("x");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total_pushed(), 1);
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("Selected: Options", 8), "Selected");
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_glyph() {
        assert_eq!(truncate_to_width("a中b", 2), "a");
        assert_eq!(truncate_to_width("a中b", 3), "a中");
    }
}
