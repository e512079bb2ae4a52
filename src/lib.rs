//! Permute a rack of letters against a dictionary.
//!
//! Words are loaded into a byte trie ([`wordlist::index::Index`]); a query walks
//! the trie together with the candidate letters and returns every loaded word
//! that can be spelled from them, sorted and without duplicates.

pub mod jumble;
pub mod wordlist;
