/// Read-only view of a trie node, shared by the sparse and dense
/// representations so that lookups and searches are written once.
pub(crate) trait HasChildren {
    fn child(&self, letter: u8) -> Option<&Self>;
    fn is_terminal(&self) -> bool;

    /// Visits every child in ascending byte order.
    fn for_each_child<F>(&self, f: F)
        where F: FnMut(u8, &Self);

    /// The node reached by following `word` from here, if every edge exists.
    fn walk(&self, word: &[u8]) -> Option<&Self> where Self: Sized {
        word.iter().try_fold(self, |node, &letter| node.child(letter))
    }

    fn traverse_prefix<F>(&self, path: &mut Vec<u8>, f: &mut F)
        where F: FnMut(&[u8], &Self), Self: Sized {
        f(path, self);
        self.for_each_child(|letter, child| {
            path.push(letter);
            child.traverse_prefix(path, f);
            path.pop();
        });
    }

    /// Every word stored at or below this node, in ascending order.
    fn words(&self) -> Vec<Vec<u8>> where Self: Sized {
        let mut words = vec![];
        self.traverse_prefix(&mut vec![], &mut |path: &[u8], node: &Self| {
            if node.is_terminal() {
                words.push(path.to_vec());
            }
        });
        words
    }
}
