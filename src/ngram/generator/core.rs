// src/ngram/generator/core.rs

use crate::config::subsystems::generator::GeneratorConfig;

use super::char_ngrams::{NGrams, Split};

/// Pads keys and splits them into fixed-width character n-grams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramGenerator {
    pub(crate) ngram_size: usize,
    pub(crate) pad_len: usize,
    pub(crate) pad_char: char,
    padding: String,
}

impl NGramGenerator {
    /// Builds a generator from an already validated config.
    pub fn new(config: &GeneratorConfig) -> Self {
        let pad_len = config.effective_pad_len();
        Self {
            ngram_size: config.ngram_size,
            pad_len,
            pad_char: config.pad_char,
            padding: std::iter::repeat(config.pad_char).take(pad_len).collect(),
        }
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    pub fn pad_len(&self) -> usize {
        self.pad_len
    }

    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    pub fn padding(&self) -> &str {
        &self.padding
    }

    /// Surrounds `text` with the padding string on both sides.
    pub fn pad(&self, text: &str) -> String {
        let mut padded = String::with_capacity(text.len() + 2 * self.padding.len());
        padded.push_str(&self.padding);
        padded.push_str(text);
        padded.push_str(&self.padding);
        padded
    }

    /// Length in characters of `pad(text)`, computed without allocating.
    pub fn padded_len(&self, text: &str) -> usize {
        text.chars().count() + 2 * self.pad_len
    }

    /// N-grams of a string that is already padded.
    pub fn ngrams<'a>(&self, padded: &'a str) -> NGrams<'a> {
        NGrams::new(padded, self.ngram_size)
    }

    /// Pads `text` and iterates over its n-grams, left to right.
    pub fn split(&self, text: &str) -> Split {
        Split::new(self.pad(text), self.ngram_size)
    }
}

impl Default for NGramGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(ngram_size: usize, pad_len: Option<usize>, pad_char: char) -> NGramGenerator {
        let config = GeneratorConfig {
            ngram_size,
            pad_len,
            pad_char,
            ..GeneratorConfig::default()
        };
        NGramGenerator::new(&config)
    }

    #[test]
    fn test_pad() {
        let gen = NGramGenerator::default();
        assert_eq!(gen.pad("ham"), "$$ham$$");
        assert_eq!(gen.padded_len("ham"), 7);
        assert_eq!(gen.pad(""), "$$$$");
    }

    #[test]
    fn test_split_default() {
        let gen = NGramGenerator::default();
        let grams: Vec<String> = gen.split("ham").collect();
        assert_eq!(grams, vec!["$$h", "$ha", "ham", "am$", "m$$"]);
    }

    #[test]
    fn test_split_without_padding() {
        let gen = generator(3, Some(0), '$');
        let grams: Vec<String> = gen.split("hamegg").collect();
        assert_eq!(grams, vec!["ham", "ame", "meg", "egg"]);
        assert_eq!(gen.split("hi").count(), 0);
    }

    #[test]
    fn test_custom_pad_char() {
        let gen = generator(2, None, '\u{a0}');
        assert_eq!(gen.pad("ab"), "\u{a0}ab\u{a0}");
        assert_eq!(gen.padded_len("ab"), 4);
        let grams: Vec<String> = gen.split("ab").collect();
        assert_eq!(grams, vec!["\u{a0}a", "ab", "b\u{a0}"]);
    }

    #[test]
    fn test_unigrams() {
        let gen = generator(1, None, '$');
        assert_eq!(gen.pad_len(), 0);
        let grams: Vec<String> = gen.split("ham").collect();
        assert_eq!(grams, vec!["h", "a", "m"]);
    }

    #[test]
    fn test_ngrams_borrows_padded() {
        let gen = NGramGenerator::default();
        let padded = gen.pad("eg");
        let grams: Vec<&str> = gen.ngrams(&padded).collect();
        assert_eq!(grams, vec!["$$e", "$eg", "eg$", "g$$"]);
    }
}
