//! Quiz item sampling: unbiased shuffle plus the per-session item cursor.

use rand::Rng;

/// Returns the elements of `items` in uniformly random order, leaving the
/// input untouched. Classic Fisher–Yates on a copy: walk from the last index
/// down to 1, swapping `i` with a uniform draw from `0..=i`, so every one of
/// the `n!` permutations is equally likely. Empty input yields empty output.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// The ordered kana drawn for one play-through plus the current position.
///
/// Invariant: `index < items.len()` whenever `items` is non-empty. `advance`
/// is guarded so the cursor can never run past the last item.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    items: Vec<char>,
    index: usize,
}

impl QuizSession {
    /// Empty session; `current()` is `None` until `start` is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-samples the session: shuffles `pool` and keeps the first `count`
    /// items (all of them if the pool is smaller), resetting the cursor.
    pub fn start(&mut self, pool: &[char], count: usize, rng: &mut impl Rng) {
        let mut items = shuffle(pool, rng);
        items.truncate(count);
        self.items = items;
        self.index = 0;
    }

    /// The item under the cursor, `None` before any session has started.
    pub fn current(&self) -> Option<char> {
        self.items.get(self.index).copied()
    }

    /// Moves to the next item. No-op at the last item; callers check
    /// `is_last` first.
    pub fn advance(&mut self) {
        debug_assert!(!self.is_last(), "advance called on the last item");
        if self.index + 1 < self.items.len() {
            self.index += 1;
        }
    }

    /// Whether the cursor sits on the final item (`false` when empty).
    pub fn is_last(&self) -> bool {
        !self.items.is_empty() && self.index == self.items.len() - 1
    }

    pub fn items(&self) -> &[char] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
