use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;
use tracing::{debug, Level};

use wordjumble::jumble::{group_thousands, os_bytes, Jumbler};
use wordjumble::wordlist::trie::searchconfig::SearchConfig;
use wordjumble::wordlist::wordlist::{list_dictionaries, parse_delimiter, resolve_dictionary, FileFormat, Wordlist};
use wordjumble::wordlist::TrieKind;

/// Permute letters against a dictionary.
#[derive(StructOpt)]
#[structopt(name = "wordjumble")]
struct Cli {
    /// Use the array trie instead of the map trie
    #[structopt(long)]
    use_array: bool,
    /// Name of the dictionary to use, or a path to a word file
    #[structopt(short, long, default_value = "2of12inf")]
    dict: String,
    /// Directory holding the named dictionaries
    #[structopt(long, default_value = "dicts", parse(from_os_str))]
    dict_dir: PathBuf,
    /// Split dictionary lines on this byte (`tab` or `\t` for a tab)
    #[structopt(long, parse(try_from_str = parse_delimiter))]
    delimiter: Option<u8>,
    /// Column of a delimited dictionary holding the word, counting from 0
    #[structopt(long)]
    column: Option<usize>,
    /// Get wordy with those words
    #[structopt(short, long)]
    verbose: bool,
    /// Consume letters (only use each letter once)
    #[structopt(short, long)]
    consume: bool,
    /// Use all letters
    #[structopt(short, long)]
    all: bool,
    /// Print each result set as a JSON object
    #[structopt(long)]
    json: bool,
    #[structopt(subcommand)]
    cmd: Option<Command>,
    /// Letters to permute; starts an interactive prompt when omitted
    #[structopt(parse(from_os_str))]
    words: Vec<OsString>,
}

#[derive(StructOpt)]
enum Command {
    /// Show available dictionaries
    List,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::from_args();
    init_logging(args.verbose);

    if let Some(Command::List) = args.cmd {
        for name in list_dictionaries(&args.dict_dir)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let kind = if args.use_array {
        debug!("using array trie");
        TrieKind::Array
    } else {
        debug!("using map trie");
        TrieKind::Map
    };

    let path = resolve_dictionary(&args.dict_dir, &args.dict);
    let wl = Wordlist::from_file(&path, &FileFormat::columns(args.delimiter, args.column), kind)?;

    let config = SearchConfig::builder()
        .consume(args.consume)
        .use_all(args.all)
        .build();

    let stdout = io::stdout();
    if !args.words.is_empty() {
        let mut jumbler = Jumbler::new(&wl, config, args.json, stdout.lock());
        let racks: Vec<Vec<u8>> = args.words.iter().map(|x| os_bytes(x)).collect();
        return jumbler.run_words(&racks);
    }

    println!("Loaded dictionary {}: {} words", args.dict, group_thousands(wl.count()));
    let stdin = io::stdin();
    let mut jumbler = Jumbler::new(&wl, config, args.json, stdout.lock());
    jumbler.run_repl(stdin.lock())
}
