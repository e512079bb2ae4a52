use rayon::prelude::*;

use crate::wordlist::index::Index;
use crate::wordlist::trie::searchconfig::SearchConfig;

/// Answers every rack in `racks` against the same index, in parallel.
///
/// The index is only read, so it must be fully loaded before this is called.
/// Results are in the same order as `racks`.
pub fn permute_many<I, R>(index: &I, racks: &[R], config: &SearchConfig) -> Vec<Vec<Vec<u8>>>
    where I: Index + Sync + ?Sized,
          R: AsRef<[u8]> + Sync {
    racks.par_iter()
        .map(|rack| index.permute(rack.as_ref(), config))
        .collect()
}
