use anaphrase::{load_wordlist, Dictionary, PhraseDecoder};
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "anaphrase")]
struct Opt {
    /// Dictionary file, one word per line
    #[structopt(name = "dictionary", parse(from_os_str))]
    dictionary: PathBuf,

    /// String to unscramble into phrases of dictionary words
    #[structopt(name = "anagram")]
    anagram: String,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() {
    let opt = Opt::from_args();

    env_logger::builder()
        .filter_level(match opt.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let mut dictionary = Dictionary::new();
    if let Err(err) = load_wordlist(&opt.dictionary, &mut dictionary) {
        // A failed read is not fatal; search whatever made it in.
        log::warn!(
            "error loading dictionary {}: {}; continuing with {} words",
            opt.dictionary.display(),
            err,
            dictionary.len()
        );
    }
    log::info!("dictionary holds {} words", dictionary.len());

    for phrase in PhraseDecoder::new(&dictionary, &opt.anagram) {
        println!("{}", phrase);
    }
}
