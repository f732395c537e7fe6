// src/ngram/generator/mod.rs

mod core;
mod char_ngrams;

pub use self::core::NGramGenerator;
pub use self::char_ngrams::{NGrams, Split};
