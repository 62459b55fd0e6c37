//! Replaying adapter serving recorded content exchanges.

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::content::{ContentFuture, ContentProvider, IndustryContent};

/// Serves recorded content responses from a cassette.
pub struct ReplayingContentProvider {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingContentProvider {
    /// Creates a replaying provider backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }

    /// Loads a cassette file and creates a replaying provider over it.
    ///
    /// # Errors
    ///
    /// Returns an error string if the cassette cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_file(path)?;
        Ok(Self::new(Arc::new(Mutex::new(replayer))))
    }
}

impl ContentProvider for ReplayingContentProvider {
    fn industry_content(&self, _industry: &str) -> ContentFuture<'_> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_exchange("industry_content").output.clone()
        };

        Box::pin(async move {
            let content: IndustryContent = serde_json::from_value(output).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("cassette output did not match IndustryContent: {e}").into()
                },
            )?;
            Ok(content)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_content;
    use crate::cassette::format::{Cassette, Exchange};
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn replays_recorded_content() {
        let recorded = builtin_content("restaurant");
        let cassette = Cassette {
            name: "replay-test".into(),
            recorded_at: Utc::now(),
            exchanges: vec![Exchange {
                seq: 0,
                method: "industry_content".into(),
                input: json!({"industry": "restaurant"}),
                output: serde_json::to_value(&recorded).unwrap(),
            }],
        };

        let provider =
            ReplayingContentProvider::new(Arc::new(Mutex::new(CassetteReplayer::new(&cassette))));
        let replayed = provider.industry_content("restaurant").await.unwrap();
        assert_eq!(replayed, recorded);
    }

    #[tokio::test]
    async fn malformed_output_becomes_error() {
        let cassette = Cassette {
            name: "bad".into(),
            recorded_at: Utc::now(),
            exchanges: vec![Exchange {
                seq: 0,
                method: "industry_content".into(),
                input: json!({}),
                output: json!("not a content object"),
            }],
        };
        let provider =
            ReplayingContentProvider::new(Arc::new(Mutex::new(CassetteReplayer::new(&cassette))));
        let result = provider.industry_content("x").await;
        assert!(result.is_err());
    }
}
