//! De Bruijn sequence term generation.

/// Largest symbol of the full alphabet, one octet of an IPv4 address.
pub const MAX_SYMBOL: u8 = 255;

/// Where the stream currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The forced first term `0` has not been emitted yet.
    First,
    /// Main loop: concatenating successive Lyndon words.
    Words,
    /// Emitting the trailing zeros that close the cycle; the count is how
    /// many remain after the current one.
    Tail(u8),
    /// End of stream.
    Done,
}

/// Iterator over the terms of the de Bruijn sequence B(k, 4) beginning with
/// four zeros, where k is the alphabet size (256 for [`Terms::new`]).
///
/// Every possible 4-symbol string over the alphabet occurs exactly once as a
/// window of 4 consecutive terms of the cyclic sequence. With the full
/// alphabet, reading the stream in consecutive windows of four enumerates
/// every IPv4 address exactly once.
///
/// The terms are the concatenated symbols of each lexicographically
/// succeeding Lyndon word whose length divides 4 — that is, of length 1, 2,
/// or 4. A string is a Lyndon word if it is lexicographically the unique
/// minimum of its rotations; see [`is_lyndon`] for the length-4
/// classification. Successive words are found with Duval's algorithm,
/// modified to skip the length-3 words it would otherwise visit between the
/// length-2 and length-4 ones. Once the maximal single-symbol word is spent,
/// the first three terms are repeated to finish the cycle.
///
/// Each term costs O(1) amortized time, and the only state is the current
/// 4-symbol working word plus the unsent remainder of its burst.
///
/// # Example
///
/// The two-symbol analog B(2, 4), small enough to write out:
///
/// ```
/// use conip::Terms;
///
/// let seq: Vec<u8> = Terms::with_max_symbol(1).collect();
/// assert_eq!(
///     seq,
///     [0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Terms {
    /// The working word: the most recently produced Lyndon word, padded to
    /// length 4. Owned exclusively by this iterator.
    word: [u8; 4],
    /// Largest symbol of the alphabet.
    max: u8,
    /// Unsent remainder of the current word's burst: `buf[pos..len]`.
    buf: [u8; 4],
    len: u8,
    pos: u8,
    phase: Phase,
}

impl Terms {
    /// Terms of B(256, 4): 2^32 + 3 of them, one per IPv4 address plus the
    /// three that close the cycle.
    pub fn new() -> Terms {
        Terms::with_max_symbol(MAX_SYMBOL)
    }

    /// Terms of the reduced-alphabet analog B(max + 1, 4).
    ///
    /// The window length stays 4; only the alphabet shrinks. Useful for
    /// exhaustive validation, where the full sequence is far too large.
    pub fn with_max_symbol(max: u8) -> Terms {
        Terms {
            word: [0; 4],
            max,
            buf: [0; 4],
            len: 0,
            pos: 0,
            phase: Phase::First,
        }
    }

    /// The head symbol of the working word.
    ///
    /// Grows monotonically from 0 to the maximal symbol over the life of the
    /// stream, so it doubles as a coarse progress indicator. Advisory only.
    pub fn high_byte(&self) -> u8 {
        self.word[0]
    }

    /// Largest symbol of this stream's alphabet.
    pub fn max_symbol(&self) -> u8 {
        self.max
    }

    /// Exact number of terms the stream yields in total: (max + 1)^4 + 3.
    pub fn total_terms(&self) -> u64 {
        (u64::from(self.max) + 1).pow(4) + 3
    }

    /// Advances the working word to the lexicographically next Lyndon word
    /// of length 1, 2, or 4 and stages its symbols in `buf[..len]`.
    ///
    /// Callers must have checked that the working word is not the maximal
    /// one (`word[0] < max`).
    fn advance(&mut self) {
        let max = self.max;
        let u = &mut self.word;
        if u[3] == max {
            // Incrementing the last slot in place is impossible, and plain
            // Duval generation would produce a 3-symbol word next. Walk
            // outward from the end to see whether a 1- or 2-symbol word is
            // due instead; otherwise skip straight to the next 4-symbol one.
            if u[2] == max {
                if u[1] == max {
                    debug_assert!(u[0] < max, "working word head overflow");
                    u[0] += 1;
                    u[1] = u[0];
                    u[2] = u[0];
                    u[3] = u[0];
                    self.buf[0] = u[0];
                    self.len = 1;
                    return;
                }
                u[1] += 1;
                u[2] = u[0];
                u[3] = u[1];
                self.buf[0] = u[0];
                self.buf[1] = u[1];
                self.len = 2;
                return;
            }
            // Would-be 3-symbol word.
            u[2] += 1;
            u[3] = u[0];
        }
        // Bumping the last slot alone yields the next valid word: the
        // length-4 classification depends only on how the head relates to
        // the other three symbols, which raising u[3] never breaks.
        u[3] += 1;
        self.buf = *u;
        self.len = 4;
    }
}

impl Default for Terms {
    fn default() -> Terms {
        Terms::new()
    }
}

impl Iterator for Terms {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos < self.len {
            let term = self.buf[self.pos as usize];
            self.pos += 1;
            return Some(term);
        }
        match self.phase {
            Phase::First => {
                self.phase = Phase::Words;
                Some(0)
            }
            Phase::Words => {
                if self.word[0] == self.max {
                    // Every Lyndon word is spent; repeat the first three
                    // terms to finish the cycle.
                    self.phase = Phase::Tail(2);
                    return Some(0);
                }
                self.advance();
                self.pos = 1;
                Some(self.buf[0])
            }
            Phase::Tail(left) => {
                self.phase = if left == 1 {
                    Phase::Done
                } else {
                    Phase::Tail(left - 1)
                };
                Some(0)
            }
            Phase::Done => None,
        }
    }
}

impl std::iter::FusedIterator for Terms {}

/// Classifies a 4-symbol word `(α, β, γ, δ)` as a Lyndon word.
///
/// A word is a Lyndon word if it is strictly smaller, lexicographically,
/// than every one of its nontrivial rotations. For length 4 that reduces to:
///
/// 1. If α > β, α > γ, or α > δ, the word is not a Lyndon word.
/// 2. If α = δ, the word is not a Lyndon word.
/// 3. If α = γ, the word is a Lyndon word iff β < δ.
/// 4. Otherwise, it is a Lyndon word.
///
/// # Example
///
/// ```
/// use conip::is_lyndon;
///
/// assert!(is_lyndon([0, 0, 0, 1]));
/// assert!(is_lyndon([0, 1, 0, 2]));
/// assert!(!is_lyndon([0, 1, 0, 1])); // its own rotation
/// assert!(!is_lyndon([0, 2, 0, 1])); // rotation 0102 is smaller
/// ```
pub fn is_lyndon(word: [u8; 4]) -> bool {
    let [a, b, c, d] = word;
    if a > b || a > c || a > d {
        return false;
    }
    if a == d {
        return false;
    }
    if a == c {
        return b < d;
    }
    true
}
