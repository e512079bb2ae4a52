use crate::wordlist::trie::haschildren::HasChildren;
use crate::wordlist::trie::unique::unique;

/// Depth-first walk of the trie driven by the rack of `letters`.
///
/// Without `consume` every letter value in the rack may be used any number of
/// times, so the walk is bounded only by the depth of the trie. With `consume`
/// each letter of the rack is used at most once. Every terminal node reached is
/// reported, whether or not the whole rack was used.
pub(crate) fn permute<N: HasChildren>(root: Option<&N>, letters: &[u8], consume: bool) -> Vec<Vec<u8>> {
    let root = match root {
        Some(root) => root,
        None => return vec![],
    };

    let mut found = vec![];
    let mut path = Vec::with_capacity(letters.len());
    if consume {
        // private copy; the walk reorders it in place
        let mut pool = letters.to_vec();
        permute_consume(root, &mut pool, &mut path, &mut found);
    } else {
        let mut distinct = letters.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        permute_reuse(root, &distinct, &mut path, &mut found);
    }
    unique(found)
}

fn permute_reuse<N: HasChildren>(node: &N, letters: &[u8], path: &mut Vec<u8>, found: &mut Vec<Vec<u8>>) {
    if node.is_terminal() {
        found.push(path.clone());
    }

    for &letter in letters {
        if let Some(child) = node.child(letter) {
            path.push(letter);
            permute_reuse(child, letters, path, found);
            path.pop();
        }
    }
}

/// Tries each remaining letter of `pool` in turn by swapping it to the front
/// and recursing on the rest. The pool is back in its original order when this
/// returns, which the caller's own loop depends on. Not reentrant on one buffer.
fn permute_consume<N: HasChildren>(node: &N, pool: &mut [u8], path: &mut Vec<u8>, found: &mut Vec<Vec<u8>>) {
    if node.is_terminal() {
        found.push(path.clone());
    }

    // equal letters lead to equal sub-pools; try each value once per level
    let mut tried = [false; 256];
    for i in 0..pool.len() {
        let letter = pool[i];
        if tried[letter as usize] {
            continue;
        }
        tried[letter as usize] = true;

        if let Some(child) = node.child(letter) {
            pool.swap(0, i);
            path.push(letter);
            permute_consume(child, &mut pool[1..], path, found);
            path.pop();
            pool.swap(0, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreeset;
    use std::collections::BTreeSet;

    use crate::wordlist::index::Index;
    use crate::wordlist::trie::arraytrie::ArrayTrie;
    use crate::wordlist::trie::haschildren::HasChildren;
    use crate::wordlist::trie::maptrie::{MapNode, MapTrie};
    use crate::wordlist::trie::search::{permute, permute_consume};

    fn tries(words: &[&str]) -> Vec<Box<dyn Index>> {
        let mut map = MapTrie::new();
        let mut array = ArrayTrie::new();
        for word in words {
            map.load_str(word);
            array.load_str(word);
        }
        vec![Box::new(map), Box::new(array)]
    }

    fn strings(words: Vec<Vec<u8>>) -> Vec<String> {
        words.into_iter().map(|x| String::from_utf8(x).unwrap()).collect()
    }

    #[test]
    fn permutes_under_both_policies() {
        let cases = vec![
            ("fulxd", false, vec!["fu", "full"], vec!["fu", "full"]),
            ("fulxd", true, vec!["fu", "full"], vec!["fu"]),
            ("fulxdll", true, vec!["fu", "full"], vec!["fu", "full"]),
            ("fulxdll", false, vec!["fu", "full"], vec!["fu", "full"]),
            ("cab", false, vec!["baa", "cab"], vec!["baa", "cab"]),
            ("cab", true, vec!["baa", "cab"], vec!["cab"]),
        ];
        for (letters, consume, words, expected) in cases {
            for trie in tries(&words) {
                assert_eq!(strings(trie.permute_all(letters.as_bytes(), consume)), expected,
                           "{} consume={}", letters, consume);
            }
        }
    }

    #[test]
    fn finds_anagrams() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD", "GOD", "DOG"];
        for trie in tries(&words) {
            assert_eq!(strings(trie.permute_all(b"OLEHL", true)), vec!["HELLO"]);
            assert!(trie.permute_all(b"LEHL", true).is_empty());
            assert_eq!(strings(trie.permute_all(b"OOGD", true)), vec!["DOG", "GOD", "GOOD"]);
            assert_eq!(strings(trie.permute_all(b"OGD", false)), vec!["DOG", "GOD", "GOOD"]);
        }
    }

    #[test]
    fn empty_rack_only_matches_the_empty_word() {
        for trie in tries(&["a", "ab"]) {
            assert!(trie.permute_all(b"", false).is_empty());
            assert!(trie.permute_all(b"", true).is_empty());
        }
        for trie in tries(&["", "a"]) {
            assert_eq!(trie.permute_all(b"", false), vec![Vec::<u8>::new()]);
            assert_eq!(trie.permute_all(b"", true), vec![Vec::<u8>::new()]);
            assert_eq!(strings(trie.permute_all(b"a", true)), vec!["", "a"]);
        }
    }

    #[test]
    fn reuse_is_bounded_by_the_vocabulary() {
        for trie in tries(&["a", "aa", "aaaa", "b"]) {
            assert_eq!(strings(trie.permute_all(b"a", false)), vec!["a", "aa", "aaaa"]);
            assert_eq!(strings(trie.permute_all(b"aaa", true)), vec!["a", "aa"]);
        }
    }

    #[test]
    fn permuting_does_not_touch_the_input() {
        let letters = b"fulxdll".to_vec();
        for trie in tries(&["full", "fu", "dull"]) {
            trie.permute_all(&letters, true);
            assert_eq!(letters, b"fulxdll".to_vec());
        }
    }

    #[test]
    fn consume_restores_the_pool() {
        let mut root = MapTrie::new();
        for word in ["ab", "ba", "abc", "cab", "bca"] {
            root.load_str(word);
        }
        let node = root.root_node();
        let mut pool = b"cabba".to_vec();
        let mut found = vec![];
        permute_consume(node, &mut pool, &mut vec![], &mut found);
        assert_eq!(pool, b"cabba".to_vec());

        let found: BTreeSet<_> = strings(found).into_iter().collect();
        let expected: BTreeSet<_> = btreeset! {"ab", "ba", "abc", "cab", "bca"}
            .into_iter().map(String::from).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn absent_root_yields_nothing() {
        assert!(permute::<MapNode>(None, b"abc", false).is_empty());
        assert!(permute::<MapNode>(None, b"", true).is_empty());
        assert!(MapNode::default().words().is_empty());
    }
}
