//! Incremental delimiter matching.
//!
//! The automaton never rescans its input: for each delimiter it only tracks
//! how many trailing bytes currently match a prefix of that delimiter, and a
//! [`Matcher`] advances that count by one byte using a precomputed border
//! table (the Knuth-Morris-Pratt failure function).

/// Border table for one non-empty delimiter.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Vec<u8>,
    /// `border[i]` is the length of the longest proper prefix of
    /// `pattern[..=i]` that is also a suffix of it.
    border: Vec<usize>,
}

impl Matcher {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        debug_assert!(!pattern.is_empty(), "delimiters are never empty");

        let mut border = vec![0; pattern.len()];
        let mut k = 0;
        for i in 1..pattern.len() {
            while k > 0 && pattern[i] != pattern[k] {
                k = border[k - 1];
            }
            if pattern[i] == pattern[k] {
                k += 1;
            }
            border[i] = k;
        }
        Self { pattern, border }
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Advance a match of `matched` bytes by `byte`.
    ///
    /// Returns the length of the longest suffix of (matched bytes + `byte`)
    /// that is a prefix of the pattern. A return value equal to [`len`]
    /// means the pattern was just completed.
    ///
    /// [`len`]: Matcher::len
    pub fn step(&self, matched: usize, byte: u8) -> usize {
        let mut k = if matched >= self.pattern.len() {
            self.full_border()
        } else {
            matched
        };
        loop {
            if self.pattern[k] == byte {
                return k + 1;
            }
            if k == 0 {
                return 0;
            }
            k = self.border[k - 1];
        }
    }

    /// Bytes of a completed match that can already start the next one.
    pub fn full_border(&self) -> usize {
        self.border[self.pattern.len() - 1]
    }
}
