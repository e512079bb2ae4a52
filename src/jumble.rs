use std::ffi::OsStr;
use std::io::{BufRead, Write};

use anyhow::Result;
use derive_new::new;
use serde::Serialize;

use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::wordlist::{trim_newline, Wordlist};

pub const PROMPT: &str = "words> ";
pub const SEPARATOR: &str = "------";

/// Answers racks of letters against a wordlist, printing each result set to
/// `out` either one word per line or as a JSON object.
#[derive(new)]
pub struct Jumbler<'w, W: Write> {
    wordlist: &'w Wordlist,
    config: SearchConfig,
    json: bool,
    out: W,
}

#[derive(Serialize)]
struct Jumble {
    letters: String,
    count: usize,
    words: Vec<String>,
}

impl<'w, W: Write> Jumbler<'w, W> {
    /// Prints every word spellable from `letters`; returns how many.
    pub fn run_word(&mut self, letters: &[u8]) -> Result<usize> {
        let words = self.wordlist.permute(letters, &self.config);
        self.write_words(letters, &words)?;
        Ok(words.len())
    }

    /// Answers all of `racks`, in parallel, then prints them in order with a
    /// separator line between result sets.
    pub fn run_words<S: AsRef<[u8]> + Sync>(&mut self, racks: &[S]) -> Result<()> {
        let results = self.wordlist.permute_many(racks, &self.config);
        for (i, (letters, words)) in racks.iter().zip(results).enumerate() {
            if i > 0 {
                writeln!(self.out, "{}", SEPARATOR)?;
            }
            self.write_words(letters.as_ref(), &words)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Reads racks from `input`, one per line, until an empty line or end of
    /// input. Lines are raw bytes; nothing is decoded.
    pub fn run_repl<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = Vec::new();
        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Ok(());
            }
            let letters = trim_newline(&line);
            if letters.is_empty() {
                return Ok(());
            }
            self.run_word(letters)?;
        }
    }

    fn write_words(&mut self, letters: &[u8], words: &[Vec<u8>]) -> Result<()> {
        if self.json {
            let jumble = Jumble {
                letters: String::from_utf8_lossy(letters).into_owned(),
                count: words.len(),
                words: words.iter().map(|x| String::from_utf8_lossy(x).into_owned()).collect(),
            };
            serde_json::to_writer(&mut self.out, &jumble)?;
            writeln!(self.out)?;
        } else {
            for word in words {
                self.out.write_all(word)?;
                self.out.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

/// The bytes of a command-line argument, undecoded where the platform allows.
#[cfg(unix)]
pub fn os_bytes(arg: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

#[cfg(not(unix))]
pub fn os_bytes(arg: &OsStr) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

/// `n` with a comma between each group of three digits, e.g. `40,000`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
