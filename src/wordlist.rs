pub mod index;
pub mod trie;
pub mod wordlist;

use crate::wordlist::index::Index;
use crate::wordlist::trie::arraytrie::ArrayTrie;
use crate::wordlist::trie::maptrie::MapTrie;

/// Which node representation backs a [`wordlist::Wordlist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrieKind {
    /// Sparse nodes, one ordered map entry per child.
    #[default]
    Map,
    /// Dense nodes, 256 child slots each.
    Array,
}

pub fn new_index(kind: TrieKind) -> Box<dyn Index + Send + Sync> {
    match kind {
        TrieKind::Map => Box::new(MapTrie::new()),
        TrieKind::Array => Box::new(ArrayTrie::new()),
    }
}
