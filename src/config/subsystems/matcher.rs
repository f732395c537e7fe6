// src/config/subsystems/matcher.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

pub const MIN_WARP: f64 = 1.0;
pub const MAX_WARP: f64 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    // Minimum similarity for a member to be returned by search
    pub threshold: f64,
    // Exponent of the similarity formula, > 1.0 favours short strings
    pub warp: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            warp: 1.0,
        }
    }
}

impl FromIni for MatcherConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "matcher" {
            return None;
        }

        match key {
            "threshold" => {
                match value.parse::<f64>() {
                    Ok(threshold) if (0.0..=1.0).contains(&threshold) => {
                        self.threshold = threshold;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid threshold (must be between 0 and 1): {}", value)
                    ))),
                }
            },
            "warp" => {
                match value.parse::<f64>() {
                    Ok(warp) if (MIN_WARP..=MAX_WARP).contains(&warp) => {
                        self.warp = warp;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid warp (must be between 1 and 3): {}", value)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        // NaN fails both range checks
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::Config(
                format!("Threshold {} outside 0.0 to 1.0 range", self.threshold)
            ));
        }
        if !(MIN_WARP..=MAX_WARP).contains(&self.warp) {
            return Err(Error::Config(
                format!("Warp {} outside 1.0 to 3.0 range", self.warp)
            ));
        }
        Ok(())
    }
}
