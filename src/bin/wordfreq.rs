//! wordfreq: count word frequencies in a text file and print the most
//! frequent ones.
//!
//! Driver loop over the map's public surface: for each normalized token,
//! get → increment-or-seed-to-one → set; then drop the stop word, sort
//! live entries by count descending, and print the top entries.

use std::env;
use std::error::Error;
use std::process;

use fxhash::FxBuildHasher;
use probe_hashmap::{text, ProbeHashMap};

const TOP_N: usize = 6;
const STOP_WORD: &str = "the";

fn main() {
    if let Err(err) = try_main() {
        eprintln!("wordfreq: {err}");
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args();
    let prog = args.next().unwrap_or_else(|| "wordfreq".to_string());
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: {prog} <text-file>");
            process::exit(1);
        }
    };

    eprintln!("Reading file: {path}");
    let contents = text::read_to_string(&path)?;

    let mut counts: ProbeHashMap<String, u64, FxBuildHasher> =
        ProbeHashMap::with_hasher(FxBuildHasher::default());
    for token in text::tokens(&contents) {
        let next = counts.get(token.as_str()).copied().unwrap_or(0) + 1;
        counts.set(token, next);
    }

    counts.remove(STOP_WORD);

    for (word, count) in counts.entries_by_value_desc().into_iter().take(TOP_N) {
        println!("Key: {word} | Value: {count} | Occupied: true");
    }
    Ok(())
}
