use crate::wordlist::trie::searchconfig::SearchConfig;

/// A set of byte strings that can be queried for membership and permuted
/// against a rack of letters.
///
/// Mutation (`load`) needs exclusive access; once loading is finished the
/// index can be shared read-only between threads.
pub trait Index {
    /// Adds `word`. Returns false to ask the caller to stop loading; the
    /// tries in this crate never do.
    fn load(&mut self, word: &[u8]) -> bool;

    /// Number of `load` calls, duplicates included.
    fn count(&self) -> usize;

    fn contains(&self, word: &[u8]) -> bool;

    /// Every loaded word spellable from `letters`, sorted and unique.
    /// With `consume` each letter may be used once; otherwise any letter in
    /// the rack may repeat.
    fn permute_all(&self, letters: &[u8], consume: bool) -> Vec<Vec<u8>>;

    fn load_str(&mut self, word: &str) -> bool {
        self.load(word.as_bytes())
    }

    fn contains_str(&self, word: &str) -> bool {
        self.contains(word.as_bytes())
    }

    fn load_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'a [u8]>, Self: Sized {
        let mut loaded = 0;
        for word in items {
            if !self.load(word) {
                break;
            }
            loaded += 1;
        }
        loaded
    }

    /// `permute_all` with the extra filters of `config` applied.
    fn permute(&self, letters: &[u8], config: &SearchConfig) -> Vec<Vec<u8>> {
        let mut words = self.permute_all(letters, config.consume);
        if config.use_all {
            words.retain(|word| word.len() == letters.len());
        }
        words
    }
}
