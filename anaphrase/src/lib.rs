pub mod decoder;
pub mod set;
pub mod words;

pub use decoder::PhraseDecoder;
pub use set::StringSet;
pub use words::{load_wordlist, read_wordlist, Dictionary};
