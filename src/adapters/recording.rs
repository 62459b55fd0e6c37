//! Recording adapter capturing content exchanges while delegating.

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::cassette::recorder::CassetteRecorder;
use crate::ports::content::{ContentFuture, ContentProvider};

/// Records content exchanges while delegating to an inner provider.
pub struct RecordingContentProvider {
    inner: Box<dyn ContentProvider>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingContentProvider {
    /// Creates a recording provider wrapping the given implementation.
    pub fn new(inner: Box<dyn ContentProvider>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ContentProvider for RecordingContentProvider {
    fn industry_content(&self, industry: &str) -> ContentFuture<'_> {
        let industry = industry.to_string();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.industry_content(&industry).await;

            if let Ok(content) = &result {
                let output = serde_json::to_value(content).unwrap_or(serde_json::Value::Null);
                let mut recorder = recorder.lock().expect("recorder lock poisoned");
                recorder.record("industry_content", json!({ "industry": industry }), output);
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::BuiltinContentProvider;

    #[tokio::test]
    async fn records_successful_exchanges() {
        let dir = std::env::temp_dir().join("sitewright_recording_adapter_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rec.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "rec-test")));
        let provider =
            RecordingContentProvider::new(Box::new(BuiltinContentProvider), Arc::clone(&recorder));

        let content = provider.industry_content("retail").await.unwrap();
        assert_eq!(content.industry, "retail");

        recorder.lock().unwrap().finish().unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let cassette: crate::cassette::format::Cassette =
            serde_yaml::from_str(&written).unwrap();
        assert_eq!(cassette.exchanges.len(), 1);
        assert_eq!(cassette.exchanges[0].input, json!({"industry": "retail"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
