use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use delegate::delegate;
use metrics::{counter, histogram, increment_counter};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

use crate::wordlist::index::Index;
use crate::wordlist::trie::multithreaded_search::permute_many;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::{new_index, TrieKind};

const DICTIONARY_EXTENSION: &str = "txt";

/// A dictionary loaded into a trie, ready for queries.
pub struct Wordlist {
    trie: Box<dyn Index + Send + Sync>,
}

/// Layout of a dictionary file. By default every line is one word.
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<u8>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    /// Format for a file whose words sit in `word_column` of lines split on
    /// `delimiter`; one word per line when `delimiter` is `None`.
    pub fn columns(delimiter: Option<u8>, word_column: Option<usize>) -> FileFormat {
        FileFormat { delimiter, word_column }
    }

    fn parse_line<'a>(&self, line: &'a [u8]) -> Option<&'a [u8]> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line
                .split(|&b| b == delimiter)
                .nth(self.word_column.unwrap_or(0)),
        }
    }
}

/// Reads a delimiter given on the command line: a single byte, or `\t`/`tab`.
pub fn parse_delimiter(arg: &str) -> Result<u8> {
    match arg {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match arg.as_bytes() {
            [byte] => Ok(*byte),
            _ => bail!("delimiter must be a single byte, got {:?}", arg),
        },
    }
}

pub(crate) fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Wordlist {
    pub fn new(kind: TrieKind) -> Wordlist {
        Wordlist { trie: new_index(kind) }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat, kind: TrieKind) -> Result<Wordlist> {
        let mut wl = Wordlist::new(kind);
        wl.load_file(path, format)?;
        Ok(wl)
    }

    /// Loads every word of the file at `path`, returning how many were loaded.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<usize> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::open(path)
            .with_context(|| format!("failed to open dictionary {}", path.display()))?;
        let count = self.load_reader(BufReader::new(file), format)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        debug!(count, elapsed = ?start.elapsed(), dictionary = %path.display(), "loaded");
        Ok(count)
    }

    /// Loads one word per line of `reader`, and stops early if the index
    /// declines a word. Empty lines are skipped, so a dictionary file never
    /// loads the empty word; that takes an explicit [`Index::load`] of `b""`.
    pub fn load_reader<R: BufRead>(&mut self, mut reader: R, format: &FileFormat) -> Result<usize> {
        let mut line = Vec::new();
        let mut count: usize = 0;
        let mut line_number: usize = 0;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            line_number += 1;
            let raw = trim_newline(&line);
            if raw.is_empty() {
                continue;
            }
            let word = match format.parse_line(raw) {
                Some(word) => word,
                None => {
                    warn!(line_number, line = %String::from_utf8_lossy(raw), "no word column, skipping");
                    continue;
                }
            };
            if !self.trie.load(word) {
                break;
            }
            count += 1;
        }
        counter!("wordjumble.words_loaded", count as u64);
        Ok(count)
    }

    delegate! {
        to self.trie {
            pub fn load(&mut self, word: &[u8]) -> bool;
            pub fn count(&self) -> usize;
            pub fn contains(&self, word: &[u8]) -> bool;
            pub fn contains_str(&self, word: &str) -> bool;
        }
    }

    pub fn permute(&self, letters: &[u8], config: &SearchConfig) -> Vec<Vec<u8>> {
        let start = Instant::now();
        let words = self.trie.permute(letters, config);
        let elapsed = start.elapsed();
        increment_counter!("wordjumble.queries");
        histogram!("wordjumble.query_seconds", elapsed.as_secs_f64());
        debug!(count = words.len(), ?elapsed, "permuted");
        words
    }

    pub fn permute_many<R>(&self, racks: &[R], config: &SearchConfig) -> Vec<Vec<Vec<u8>>>
        where R: AsRef<[u8]> + Sync {
        let start = Instant::now();
        let results = permute_many(&*self.trie, racks, config);
        counter!("wordjumble.queries", racks.len() as u64);
        debug!(racks = racks.len(), elapsed = ?start.elapsed(), "permuted batch");
        results
    }
}

/// Path of the dictionary called `name`: `name` itself when that is an
/// existing file, otherwise `name.txt` inside `dir`.
pub fn resolve_dictionary(dir: &Path, name: &str) -> PathBuf {
    let direct = Path::new(name);
    if direct.is_file() {
        return direct.to_path_buf();
    }
    dir.join(format!("{}.{}", name, DICTIONARY_EXTENSION))
}

/// Names of the dictionaries in `dir`, sorted.
pub fn list_dictionaries(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list dictionaries in {}", dir.display()))?;
    let mut names = vec![];
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |x| x == DICTIONARY_EXTENSION) {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
    }
    names.sort();
    Ok(names)
}
