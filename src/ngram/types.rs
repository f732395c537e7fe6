use serde::{Serialize, Deserialize};

/// Padded key of an indexed member, kept so removal splits exactly the text
/// that insertion split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaddedKey {
    pub text: String,
    /// Length of `text` in characters.
    pub char_len: usize,
}

impl PaddedKey {
    pub fn new(text: String) -> Self {
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
