use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trie::haschildren::HasChildren;
use crate::wordlist::trie::search::permute;

const FANOUT: usize = 256;

/// Dense trie: every node carries a slot for each possible byte, so a child
/// lookup is a single index. Lookups cost no hashing or searching, at the price
/// of 256 pointers per node. In practice a dictionary only uses a few dozen of
/// the slots.
///
/// The root is not allocated until the first word is loaded.
#[derive(Default)]
pub struct ArrayTrie {
    root: Option<Box<ArrayNode>>,
    count: usize,
}

pub(crate) struct ArrayNode {
    children: [Option<Box<ArrayNode>>; FANOUT],
    is_terminal: bool,
}

impl ArrayNode {
    fn new() -> Box<ArrayNode> {
        Box::new(ArrayNode {
            children: std::array::from_fn(|_| None),
            is_terminal: false,
        })
    }
}

impl HasChildren for ArrayNode {
    fn child(&self, letter: u8) -> Option<&Self> {
        self.children[letter as usize].as_deref()
    }

    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn for_each_child<F>(&self, mut f: F)
        where F: FnMut(u8, &Self) {
        self.children.iter()
            .enumerate()
            .filter_map(|(idx, child)| child.as_deref().map(|x| (idx as u8, x)))
            .for_each(|(letter, child)| f(letter, child));
    }
}

impl ArrayTrie {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Index for ArrayTrie {
    fn load(&mut self, word: &[u8]) -> bool {
        let mut current = self.root.get_or_insert_with(ArrayNode::new);
        for &letter in word {
            current = current.children[letter as usize].get_or_insert_with(ArrayNode::new);
        }
        current.is_terminal = true;
        self.count += 1;
        true
    }

    fn count(&self) -> usize {
        self.count
    }

    fn contains(&self, word: &[u8]) -> bool {
        self.root.as_deref()
            .and_then(|root| root.walk(word))
            .map(|x| x.is_terminal())
            .unwrap_or(false)
    }

    fn permute_all(&self, letters: &[u8], consume: bool) -> Vec<Vec<u8>> {
        permute(self.root.as_deref(), letters, consume)
    }
}

impl Debug for ArrayTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let words = self.root.as_deref().map(|x| x.words()).unwrap_or_default();
        f.debug_list()
            .entries(words.iter().map(|x| String::from_utf8_lossy(x)))
            .finish()
    }
}
