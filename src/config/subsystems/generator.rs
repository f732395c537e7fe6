// src/config/subsystems/generator.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use log::LevelFilter;

pub const DEFAULT_NGRAM_SIZE: usize = 3;
pub const DEFAULT_PAD_CHAR: char = '$';

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    // Characters per n-gram
    pub ngram_size: usize,

    // Padding added to both ends of a key; None means ngram_size - 1
    pub pad_len: Option<usize>,

    pub pad_char: char,

    // Log level
    pub ngram_log: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            pad_len: None,
            pad_char: DEFAULT_PAD_CHAR,
            ngram_log: "info".to_string(),
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        "none" => Some(LevelFilter::Off),
        _ => None,
    }
}

/// Parses a padding character, accepting an optionally double-quoted value
/// so that whitespace can be used as padding. No trimming is done here since
/// some whitespace, such as U+00A0, makes a useful pad character.
pub fn parse_pad_char(value: &str) -> Result<char> {
    let unquoted = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    };
    let mut chars = unquoted.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::Config(
            format!("pad_char {:?} is not a single-character string", value)
        )),
    }
}

impl FromIni for GeneratorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "generator" {
            return None;
        }

        match key {
            "ngram_size" => {
                match value.parse() {
                    Ok(size) if size > 0 => {
                        self.ngram_size = size;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::InvalidNgramSize(
                        format!("ngram_size must be >= 1: {}", value)
                    ))),
                }
            },
            "pad_len" => {
                match value.parse() {
                    Ok(len) => {
                        // Checked against ngram_size in validate(), the keys may come in any order
                        self.pad_len = Some(len);
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid pad_len: {}", value)
                    ))),
                }
            },
            "pad_char" => {
                Some(parse_pad_char(value).map(|c| {
                    self.pad_char = c;
                }))
            },
            "ngram_log" => {
                let level_str = value.trim().trim_matches('"').to_lowercase();
                Some(
                    match parse_level(&level_str) {
                        Some(_) => {
                            self.ngram_log = level_str;
                            Ok(())
                        },
                        None => Err(Error::Config(
                            format!("Invalid log level '{}'. Must be one of: none, error, warn, info, debug, trace", value)
                        ))
                    }
                )
            }
            _ => None,
        }
    }
}

impl GeneratorConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        parse_level(self.ngram_log.trim().to_lowercase().as_str())
            .unwrap_or(LevelFilter::Info)
    }

    /// Padding length actually applied: the configured value or `ngram_size - 1`.
    pub fn effective_pad_len(&self) -> usize {
        self.pad_len.unwrap_or_else(|| self.ngram_size.saturating_sub(1))
    }

    pub fn validate(&self) -> Result<()> {
        if self.ngram_size < 1 {
            return Err(Error::InvalidNgramSize(
                format!("N of {} needs to be >= 1", self.ngram_size)
            ));
        }
        let pad_len = self.effective_pad_len();
        if pad_len >= self.ngram_size {
            return Err(Error::Config(
                format!("pad_len of {} is outside 0 to {} range", pad_len, self.ngram_size)
            ));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "NGram generator configuration:\n\
             - NGram size: {} characters\n\
             - Padding: {} x {:?}",
            self.ngram_size,
            self.effective_pad_len(),
            self.pad_char,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_padding_follows_ngram_size() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.effective_pad_len(), 2);
        config.ngram_size = 5;
        assert_eq!(config.effective_pad_len(), 4);
        config.pad_len = Some(1);
        assert_eq!(config.effective_pad_len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let mut config = GeneratorConfig::default();
        config.ngram_size = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidNgramSize(_))));

        let mut config = GeneratorConfig::default();
        config.pad_len = Some(3);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.pad_len = Some(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_pad_char() {
        assert_eq!(parse_pad_char("#").unwrap(), '#');
        assert_eq!(parse_pad_char("\" \"").unwrap(), ' ');
        assert_eq!(parse_pad_char("\u{a0}").unwrap(), '\u{a0}');
        assert!(parse_pad_char("ab").is_err());
        assert!(parse_pad_char("").is_err());
    }

    #[test]
    fn test_from_ini_section() {
        let mut config = GeneratorConfig::default();
        assert!(config.from_ini_section("matcher", "ngram_size", "4").is_none());
        assert!(config.from_ini_section("generator", "ngram_size", "4").unwrap().is_ok());
        assert!(config.from_ini_section("generator", "ngram_size", "0").unwrap().is_err());
        assert!(config.from_ini_section("generator", "ngram_log", "debug").unwrap().is_ok());
        assert!(config.from_ini_section("generator", "unknown", "1").is_none());
        assert_eq!(config.ngram_size, 4);
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
    }
}
