//! Rotating word pools.
//!
//! Picking uniformly at random from a short list repeats itself a lot. The
//! pools here hand items out by rotating a cursor over their contents so that
//! consecutive draws rarely repeat. Neither pool ever fails on `get`: an empty
//! pool hands back its fallback item instead.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom as _;

/// Shuffled pool that walks its items one step per draw and reshuffles once
/// a full cycle has been handed out.
#[derive(Debug, Clone)]
pub struct UniformPool<T> {
    items: Vec<T>,
    cursor: usize,
    fallback: T,
}

impl<T: Clone> UniformPool<T> {
    pub fn new<R, I>(items: I, fallback: T, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = T>,
    {
        let mut pool = Self {
            items: items.into_iter().collect(),
            cursor: 0,
            fallback,
        };
        pool.shuffle(rng);
        pool
    }

    pub fn get<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T {
        if self.items.is_empty() {
            return self.fallback.clone();
        }
        if self.cursor >= self.items.len() {
            self.shuffle(rng);
        }
        let item = self.items[self.cursor].clone();
        self.cursor += 1;
        item
    }

    /// Add items and shuffle them in with the rest.
    pub fn extend<R, I>(&mut self, items: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self.shuffle(rng);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
        self.cursor = 0;
    }
}

/// Deduplicated pool ranked by how often each item was supplied, rarest
/// first.
///
/// Every `extend` re-ranks the current contents together with the new items,
/// so a word that keeps showing up in successive batches climbs towards the
/// frequent end of the ranking.
#[derive(Debug, Clone)]
pub struct FrequencyPool<T> {
    items: Vec<T>,
    cursor: usize,
    step: usize,
    fallback: T,
}

impl<T: Clone + Eq + Hash> FrequencyPool<T> {
    pub const DEFAULT_STEP: usize = 2;

    pub fn new<I>(items: I, step: usize, fallback: T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let merged: Vec<T> = items.into_iter().collect();
        Self {
            items: rank_by_frequency(&merged),
            cursor: 0,
            step: step.max(1),
            fallback,
        }
    }

    /// Hand out the item under the cursor, then rotate by a random step of
    /// at most `step` positions.
    pub fn get<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T {
        let len = self.items.len();
        if len == 0 {
            return self.fallback.clone();
        }
        let item = self.items[self.cursor].clone();
        let step = rng.gen_range(1..=self.step.min(len));
        // Rotating backwards: from the rarest item the walk continues at the
        // most frequent end of the ranking.
        self.cursor = (self.cursor + len - step) % len;
        item
    }

    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut merged = self.rotated();
        merged.extend(items);
        self.items = rank_by_frequency(&merged);
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in ranking order, rarest first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Current contents starting from the cursor.
    fn rotated(&self) -> Vec<T> {
        let (head, tail) = self.items.split_at(self.cursor);
        tail.iter().chain(head).cloned().collect()
    }
}

/// Deduplicate `merged` and order it by ascending occurrence count. Ties keep
/// the order of first appearance.
fn rank_by_frequency<T: Clone + Eq + Hash>(merged: &[T]) -> Vec<T> {
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(merged.len());
    let mut unique: Vec<&T> = Vec::new();
    for item in merged {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            unique.push(item);
        }
        *count += 1;
    }
    unique.sort_by_key(|item| counts[item]);
    unique.into_iter().cloned().collect()
}

/// Word source used by the layout engine, picked once per run.
#[derive(Debug, Clone)]
pub enum WordPool<T> {
    Uniform(UniformPool<T>),
    Frequency(FrequencyPool<T>),
}

impl<T: Clone + Eq + Hash> WordPool<T> {
    pub fn get<R: Rng + ?Sized>(&mut self, rng: &mut R) -> T {
        match self {
            WordPool::Uniform(pool) => pool.get(rng),
            WordPool::Frequency(pool) => pool.get(rng),
        }
    }

    pub fn extend<R, I>(&mut self, items: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = T>,
    {
        match self {
            WordPool::Uniform(pool) => pool.extend(items, rng),
            WordPool::Frequency(pool) => pool.extend(items),
        }
    }

    pub fn clear(&mut self) {
        match self {
            WordPool::Uniform(pool) => pool.clear(),
            WordPool::Frequency(pool) => pool.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            WordPool::Uniform(pool) => pool.is_empty(),
            WordPool::Frequency(pool) => pool.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            WordPool::Uniform(pool) => pool.len(),
            WordPool::Frequency(pool) => pool.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn uniform_cycle_covers_every_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = words(&["doge", "shibe", "code", "git", "loop", "posix"]);
        let mut pool = UniformPool::new(items.clone(), "wow".to_string(), &mut rng);

        for _ in 0..5 {
            let drawn: HashSet<String> = (0..pool.len()).map(|_| pool.get(&mut rng)).collect();
            assert_eq!(drawn, items.iter().cloned().collect::<HashSet<_>>());
        }
    }

    #[test]
    fn uniform_empty_pool_returns_fallback() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = UniformPool::new(Vec::<String>::new(), "wow".to_string(), &mut rng);
        assert!(pool.is_empty());
        assert_eq!(pool.get(&mut rng), "wow");

        pool.extend(words(&["much"]), &mut rng);
        assert!(!pool.is_empty());
        for _ in 0..3 {
            assert_eq!(pool.get(&mut rng), "much");
        }

        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.get(&mut rng), "wow");
    }

    #[test]
    fn uniform_extend_restarts_the_cycle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = UniformPool::new(words(&["a", "b"]), "wow".to_string(), &mut rng);
        pool.get(&mut rng);
        pool.extend(words(&["c", "d"]), &mut rng);

        let drawn: HashSet<String> = (0..4).map(|_| pool.get(&mut rng)).collect();
        assert_eq!(drawn.len(), 4);
    }

    #[test]
    fn frequency_ranks_rarest_first() {
        let pool = FrequencyPool::new(words(&["a", "a", "a", "b", "b", "c"]), 2, "wow".to_string());
        assert_eq!(pool.as_slice(), words(&["c", "b", "a"]).as_slice());
    }

    #[test]
    fn frequency_ties_keep_first_appearance() {
        let pool = FrequencyPool::new(words(&["x", "y", "x", "z", "y"]), 2, "wow".to_string());
        assert_eq!(pool.as_slice(), words(&["z", "x", "y"]).as_slice());
    }

    #[test]
    fn frequency_extend_reinforces_repeated_words() {
        let mut pool = FrequencyPool::new(words(&["a", "b", "c"]), 2, "wow".to_string());
        pool.extend(words(&["a", "d"]));
        // a: once from the pool, once from the batch.
        assert_eq!(pool.as_slice(), words(&["b", "c", "d", "a"]).as_slice());

        pool.extend(words(&["b", "b"]));
        assert_eq!(pool.as_slice(), words(&["c", "d", "a", "b"]).as_slice());
    }

    #[test]
    fn frequency_get_starts_at_rarest_and_steps_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = FrequencyPool::new(
            words(&["a", "a", "a", "a", "b", "b", "b", "c", "c", "d"]),
            2,
            "wow".to_string(),
        );
        let ranking = pool.as_slice().to_vec();
        assert_eq!(pool.get(&mut rng), "d");

        let mut previous = 0usize;
        for _ in 0..50 {
            let word = pool.get(&mut rng);
            let position = ranking.iter().position(|w| *w == word).unwrap();
            let moved = (previous + ranking.len() - position) % ranking.len();
            assert!((1..=2).contains(&moved), "moved {moved} positions");
            previous = position;
        }
    }

    #[test]
    fn frequency_step_is_capped_by_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = FrequencyPool::new(words(&["only"]), 10, "wow".to_string());
        for _ in 0..10 {
            assert_eq!(pool.get(&mut rng), "only");
        }
    }

    #[test]
    fn frequency_empty_pool_returns_fallback() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = FrequencyPool::new(Vec::<String>::new(), 0, "wow".to_string());
        assert_eq!(pool.get(&mut rng), "wow");
        pool.extend(words(&["such"]));
        assert_eq!(pool.get(&mut rng), "such");
        pool.clear();
        assert_eq!(pool.get(&mut rng), "wow");
    }

    #[test]
    fn word_pool_dispatches_to_variant() {
        let mut rng = StdRng::seed_from_u64(9);
        let frequency = FrequencyPool::new(words(&["a", "a", "b"]), 1, "wow".to_string());
        let mut pool = WordPool::Frequency(frequency);
        assert_eq!(pool.get(&mut rng), "b");
        assert_eq!(pool.get(&mut rng), "a");

        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.get(&mut rng), "wow");

        let uniform = UniformPool::new(words(&["a"]), "wow".to_string(), &mut rng);
        let mut pool = WordPool::Uniform(uniform);
        pool.extend(words(&["b"]), &mut rng);
        assert_eq!(pool.len(), 2);
    }
}
