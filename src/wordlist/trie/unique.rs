/// Sorts `matches` in byte order and drops repeated entries.
///
/// A word that is a strict prefix of another sorts first. The result depends
/// only on the multiset of inputs, never on their order.
pub fn unique(mut matches: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    matches.sort_unstable();
    matches.dedup();
    matches
}
