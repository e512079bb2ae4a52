use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trie::haschildren::HasChildren;
use crate::wordlist::trie::search::permute;

/// Sparse trie: each node keeps only the children that exist.
#[derive(Default)]
pub struct MapTrie {
    root: MapNode,
    count: usize,
}

#[derive(Default)]
pub(crate) struct MapNode {
    children: BTreeMap<u8, MapNode>,
    is_terminal: bool,
}

impl HasChildren for MapNode {
    fn child(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn for_each_child<F>(&self, mut f: F)
        where F: FnMut(u8, &Self) {
        self.children.iter().for_each(|(&letter, child)| f(letter, child));
    }
}

impl MapTrie {
    pub fn new() -> Self {
        Default::default()
    }

    #[cfg(test)]
    pub(crate) fn root_node(&self) -> &MapNode {
        &self.root
    }
}

impl Index for MapTrie {
    fn load(&mut self, word: &[u8]) -> bool {
        let mut current = &mut self.root;
        for &letter in word {
            current = current.children.entry(letter).or_default();
        }
        current.is_terminal = true;
        self.count += 1;
        true
    }

    fn count(&self) -> usize {
        self.count
    }

    fn contains(&self, word: &[u8]) -> bool {
        self.root.walk(word).map(|x| x.is_terminal()).unwrap_or(false)
    }

    fn permute_all(&self, letters: &[u8], consume: bool) -> Vec<Vec<u8>> {
        permute(Some(&self.root), letters, consume)
    }
}

impl Debug for MapTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.root.words().iter().map(|x| String::from_utf8_lossy(x)))
            .finish()
    }
}
