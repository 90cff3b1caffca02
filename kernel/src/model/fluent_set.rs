//! `FluentSet`: fixed-width bitset over fluent indices.
//!
//! Every set built for one problem shares the same width (the problem's
//! fluent count), so set algebra between them is word-by-word.

const WORD_BITS: usize = 64;

/// A set of fluent indices in `0..width`.
///
/// Equality and hashing are over the bit contents and the width. Two sets of
/// different widths are never equal, even if both are empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FluentSet {
    width: usize,
    words: Vec<u64>,
}

impl FluentSet {
    /// Create an empty set able to hold fluents `0..width`.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            words: vec![0; width.div_ceil(WORD_BITS)],
        }
    }

    /// Create a set holding exactly the given fluents.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= width`. Callers validate indices first
    /// (see [`crate::model::problem::ProblemBuilder`]).
    #[must_use]
    pub fn from_indices<I: IntoIterator<Item = usize>>(width: usize, indices: I) -> Self {
        let mut set = Self::new(width);
        for i in indices {
            set.insert(i);
        }
        set
    }

    /// Number of fluents this set can address.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Add a fluent. Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `fluent >= width`.
    pub fn insert(&mut self, fluent: usize) -> bool {
        assert!(
            fluent < self.width,
            "fluent {fluent} out of range for width {}",
            self.width
        );
        let (w, b) = (fluent / WORD_BITS, fluent % WORD_BITS);
        let was_set = self.words[w] & (1 << b) != 0;
        self.words[w] |= 1 << b;
        !was_set
    }

    /// Remove a fluent. Returns `true` if it was present.
    pub fn remove(&mut self, fluent: usize) -> bool {
        if fluent >= self.width {
            return false;
        }
        let (w, b) = (fluent / WORD_BITS, fluent % WORD_BITS);
        let was_set = self.words[w] & (1 << b) != 0;
        self.words[w] &= !(1 << b);
        was_set
    }

    /// Membership test. Out-of-range indices are never members.
    #[must_use]
    pub fn contains(&self, fluent: usize) -> bool {
        if fluent >= self.width {
            return false;
        }
        self.words[fluent / WORD_BITS] & (1 << (fluent % WORD_BITS)) != 0
    }

    /// `true` if every member of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter().chain(std::iter::repeat(&0)))
            .all(|(a, b)| a & !b == 0)
    }

    /// `true` if `self` and `other` share no member.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & b == 0)
    }

    /// In-place union.
    pub fn union_with(&mut self, other: &Self) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= b;
        }
    }

    /// In-place difference (`self \ other`).
    pub fn difference_with(&mut self, other: &Self) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= !b;
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let tz = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(wi * WORD_BITS + tz)
            })
        })
    }
}
