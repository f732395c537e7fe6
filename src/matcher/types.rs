// types.rs
use serde::{Serialize, Deserialize};

// For JSON lines output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleMatchResult {
    pub query: String,
    pub item: String,
    pub similarity: f64,
}

impl SimpleMatchResult {
    pub fn new<T: ToString + ?Sized>(query: &str, item: &T, similarity: f64) -> Self {
        Self {
            query: query.to_string(),
            item: item.to_string(),
            similarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_json() {
        let result = SimpleMatchResult::new("SPA", "SPAM", 0.375);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"query":"SPA","item":"SPAM","similarity":0.375}"#);
    }
}
