//! Cassette data structures for recorded content exchanges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call to the content provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Method name invoked on the provider.
    pub method: String,
    /// Input data sent to the provider.
    pub input: serde_json::Value,
    /// Output data returned from the provider.
    pub output: serde_json::Value,
}

/// A cassette containing an ordered sequence of recorded exchanges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of exchanges.
    pub exchanges: Vec<Exchange>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_cassette() -> Cassette {
        Cassette {
            name: "restaurant-run".into(),
            recorded_at: Utc::now(),
            exchanges: vec![
                Exchange {
                    seq: 0,
                    method: "industry_content".into(),
                    input: json!({"industry": "restaurant"}),
                    output: json!({"hero": {"headline": "Fresh pasta daily"}}),
                },
                Exchange {
                    seq: 1,
                    method: "industry_content".into(),
                    input: json!({"industry": "retail"}),
                    output: json!({"hero": {"headline": "Shop the season"}}),
                },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }
}
