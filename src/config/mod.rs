pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::Result;
use log::{warn, trace};

pub use subsystems::{GeneratorConfig, MatcherConfig};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

/// Construction parameters of an [`NGramSet`](crate::NGramSet).
///
/// The generator section controls how keys are padded and split, the matcher
/// section controls scoring. Values are checked once by [`validate`](Self::validate)
/// when a set is built and never change afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NGramSetConfig {
    pub generator: GeneratorConfig,
    pub matcher: MatcherConfig,
}

impl NGramSetConfig {
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.matcher.validate()?;
        Ok(())
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.matcher.threshold = threshold;
        self
    }

    pub fn with_warp(mut self, warp: f64) -> Self {
        self.matcher.warp = warp;
        self
    }

    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.generator.ngram_size = ngram_size;
        self
    }

    pub fn with_pad_len(mut self, pad_len: usize) -> Self {
        self.generator.pad_len = Some(pad_len);
        self
    }

    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.generator.pad_char = pad_char;
        self
    }

    pub fn describe(&self) -> String {
        format!(
            "{}\nMatcher configuration:\n - Threshold: {}\n - Warp: {}",
            self.generator.describe(),
            self.matcher.threshold,
            self.matcher.warp,
        )
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let absolute_path = std::fs::canonicalize(&path)
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        trace!("Loading configuration from: {:?}", absolute_path);

        let content = fs::read_to_string(&path)?;
        Self::from_ini_str(&content)
    }

    /// Parses INI text. Malformed values abort loading, unknown keys are only logged.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                let result = match current_section.as_str() {
                    "generator" => config.generator.from_ini_section(&current_section, key, value),
                    "matcher" => config.matcher.from_ini_section(&current_section, key, value),
                    _ => None,
                };
                match result {
                    Some(Err(e)) => {
                        warn!("Error processing config key {}={}: {}", key, value, e);
                        return Err(e);
                    },
                    Some(Ok(())) => {},
                    None => {
                        warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section);
                    }
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = NGramSetConfig::default();
        assert_eq!(config.generator.ngram_size, 3);
        assert_eq!(config.generator.effective_pad_len(), 2);
        assert_eq!(config.generator.pad_char, '$');
        assert_eq!(config.matcher.threshold, 0.0);
        assert_eq!(config.matcher.warp, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters_are_validated() {
        assert!(NGramSetConfig::default().with_threshold(1.1).validate().is_err());
        assert!(NGramSetConfig::default().with_warp(3.1).validate().is_err());
        assert!(NGramSetConfig::default().with_ngram_size(0).validate().is_err());
        assert!(NGramSetConfig::default().with_pad_len(3).validate().is_err());
        assert!(NGramSetConfig::default()
            .with_ngram_size(2)
            .with_pad_len(1)
            .with_pad_char(' ')
            .validate()
            .is_ok());
    }

    #[test]
    fn test_from_ini_str() {
        let ini = "\
# sample
[generator]
ngram_size = 2
pad_char = \"#\"
colour = blue

[matcher]
threshold = 0.25
warp = 2.0
";
        let config = NGramSetConfig::from_ini_str(ini).unwrap();
        assert_eq!(config.generator.ngram_size, 2);
        assert_eq!(config.generator.effective_pad_len(), 1);
        assert_eq!(config.generator.pad_char, '#');
        assert_eq!(config.matcher.threshold, 0.25);
        assert_eq!(config.matcher.warp, 2.0);
    }

    #[test]
    fn test_from_ini_rejects_pad_len_out_of_range() {
        let ini = "[generator]\npad_len = 3\nngram_size = 3\n";
        assert!(NGramSetConfig::from_ini_str(ini).is_err());
        let ini = "[matcher]\nwarp = 0.2\n";
        assert!(NGramSetConfig::from_ini_str(ini).is_err());
    }

    #[test]
    fn test_from_ini_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nngram_size = 4\n[matcher]\nthreshold = 0.5").unwrap();
        let config = NGramSetConfig::from_ini(file.path()).unwrap();
        assert_eq!(config.generator.ngram_size, 4);
        assert_eq!(config.matcher.threshold, 0.5);

        assert!(NGramSetConfig::from_ini("/nonexistent/ngramset.ini").is_err());
    }
}
